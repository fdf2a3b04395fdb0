//! Entity extraction helpers.
//!
//! Both lookups are first-match over the classifier's original ordering;
//! neither sorts by score or offset.

use super::{Entity, EntityLabel};

/// Returns the first entity whose label is one of `labels`.
pub fn first_of<'a>(entities: &'a [Entity], labels: &[EntityLabel]) -> Option<&'a Entity> {
    entities.iter().find(|entity| labels.contains(&entity.label))
}

/// Returns the first entity regardless of its label.
pub fn first_entity(entities: &[Entity]) -> Option<&Entity> {
    entities.first()
}
