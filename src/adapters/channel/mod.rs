//! Channel Adapters - Implementations of the ReplySink port.
//!
//! - **ConsoleSink** - Writes each reply as a JSON line
//! - **RecordingSink** - Keeps replies in memory for assertions

mod console_sink;
mod recording_sink;

pub use console_sink::ConsoleSink;
pub use recording_sink::{RecordingSink, SentReply};
