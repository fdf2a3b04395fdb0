//! Retail Assistant - Conversational shopping over chat
//!
//! This crate classifies chat messages with a language understanding
//! service, branches on the recognized intent, reads products and customers
//! from the catalog, and keeps a per-user cart and profile between turns.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
