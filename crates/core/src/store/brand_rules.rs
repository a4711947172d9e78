use indexmap::IndexMap;

use crate::brand_rule::{standard_brand_rules, BrandRule, BrandRuleInput, BrandRuleUpdate};
use crate::ids::new_id;
use crate::types::EntityId;

/// Registry of brand-compliance rules. Parameter maps are stored and merged
/// as given; no per-category validation happens here.
#[derive(Debug, Clone, Default)]
pub struct BrandRuleRegistry {
    entries: IndexMap<EntityId, BrandRule>,
}

impl BrandRuleRegistry {
    /// Registry pre-populated with the six standard rules.
    pub fn seeded() -> Self {
        Self::from_entries(standard_brand_rules())
    }

    pub fn from_entries(entries: impl IntoIterator<Item = BrandRule>) -> Self {
        Self {
            entries: entries.into_iter().map(|r| (r.id.clone(), r)).collect(),
        }
    }

    pub fn add(&mut self, input: BrandRuleInput) -> EntityId {
        let id = new_id();
        let rule = BrandRule::from_input(id.clone(), input);
        tracing::debug!(
            rule_id = %id,
            category = rule.category.as_str(),
            "Brand rule added",
        );
        self.entries.insert(id.clone(), rule);
        id
    }

    pub fn import(&mut self, inputs: impl IntoIterator<Item = BrandRuleInput>) -> Vec<EntityId> {
        let ids: Vec<EntityId> = inputs.into_iter().map(|input| self.add(input)).collect();
        tracing::debug!(count = ids.len(), "Brand rules imported");
        ids
    }

    pub fn update(&mut self, id: &str, update: BrandRuleUpdate) -> Option<&BrandRule> {
        let rule = self.entries.get_mut(id)?;
        rule.apply(update);
        tracing::debug!(rule_id = %id, "Brand rule updated");
        Some(&*rule)
    }

    /// Mark whether campaigns may override this rule.
    pub fn set_campaign_override(&mut self, id: &str, allowed: bool) -> Option<&BrandRule> {
        let rule = self.entries.get_mut(id)?;
        rule.campaign_override = Some(allowed);
        tracing::debug!(rule_id = %id, allowed, "Brand rule override set");
        Some(&*rule)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.entries.shift_remove(id).is_some();
        if removed {
            tracing::debug!(rule_id = %id, "Brand rule deleted");
        }
        removed
    }

    pub fn get(&self, id: &str) -> Option<&BrandRule> {
        self.entries.get(id)
    }

    pub fn list(&self) -> impl Iterator<Item = &BrandRule> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
