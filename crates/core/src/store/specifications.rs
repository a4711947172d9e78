use indexmap::IndexMap;

use crate::ids::new_id;
use crate::specification::{
    standard_specifications, Specification, SpecificationInput, SpecificationUpdate,
};
use crate::types::EntityId;

/// Registry of ad-format specifications.
#[derive(Debug, Clone, Default)]
pub struct SpecificationRegistry {
    entries: IndexMap<EntityId, Specification>,
}

impl SpecificationRegistry {
    /// Registry pre-populated with the standard formats.
    pub fn seeded() -> Self {
        Self::from_entries(standard_specifications())
    }

    /// Registry holding exactly `entries`, in order. Later duplicates of an
    /// id replace earlier ones.
    pub fn from_entries(entries: impl IntoIterator<Item = Specification>) -> Self {
        Self {
            entries: entries.into_iter().map(|s| (s.id.clone(), s)).collect(),
        }
    }

    pub fn add(&mut self, input: SpecificationInput) -> EntityId {
        let id = new_id();
        let spec = Specification::from_input(id.clone(), input);
        tracing::debug!(spec_id = %id, name = %spec.name, "Specification added");
        self.entries.insert(id.clone(), spec);
        id
    }

    /// Add every input in order; returns the new ids in the same order.
    pub fn import(&mut self, inputs: impl IntoIterator<Item = SpecificationInput>) -> Vec<EntityId> {
        let ids: Vec<EntityId> = inputs.into_iter().map(|input| self.add(input)).collect();
        tracing::debug!(count = ids.len(), "Specifications imported");
        ids
    }

    pub fn update(&mut self, id: &str, update: SpecificationUpdate) -> Option<&Specification> {
        let Some(spec) = self.entries.get_mut(id) else {
            tracing::debug!(spec_id = %id, "Specification update ignored: not found");
            return None;
        };
        spec.apply(update);
        tracing::debug!(spec_id = %id, "Specification updated");
        Some(&*spec)
    }

    /// Returns `false` when nothing was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.entries.shift_remove(id).is_some();
        if removed {
            tracing::debug!(spec_id = %id, "Specification deleted");
        }
        removed
    }

    pub fn get(&self, id: &str) -> Option<&Specification> {
        self.entries.get(id)
    }

    /// All specifications in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &Specification> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
