//! Identifier generation for registry entries.

use crate::types::EntityId;

/// Produce a fresh random identifier (UUID v4, hyphenated).
///
/// Safe to call from any registry without coordination; collisions are
/// negligible.
pub fn new_id() -> EntityId {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_hyphenated_uuids() {
        let id = new_id();
        assert_eq!(id.len(), 36);
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn ids_do_not_repeat() {
        let ids: HashSet<_> = (0..1000).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
