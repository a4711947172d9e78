//! Read-side filters for list views.
//!
//! All filters are pure and preserve input order. An empty search term or an
//! unset equality value matches everything; criteria compose with AND.

use serde::Deserialize;

use crate::brand_rule::{BrandRule, BrandRuleCategory};
use crate::campaign::{Campaign, CampaignObjective};
use crate::patch::empty_as_none;
use crate::specification::Specification;

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Case-insensitive substring match of `term` against any of `fields`.
pub fn matches_term<'a>(fields: impl IntoIterator<Item = &'a str>, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Equality against an optional filter value; `None` matches everything.
pub fn matches_value<V: PartialEq>(actual: &V, wanted: Option<&V>) -> bool {
    wanted.map_or(true, |w| actual == w)
}

pub fn filter_by_substring<'a, T, F, I>(items: &'a [T], fields: F, term: &str) -> Vec<&'a T>
where
    F: Fn(&'a T) -> I,
    I: IntoIterator<Item = &'a str>,
{
    items
        .iter()
        .filter(|item| matches_term(fields(*item), term))
        .collect()
}

pub fn filter_by_equality<'a, T, V, F>(items: &'a [T], field: F, value: Option<&V>) -> Vec<&'a T>
where
    V: PartialEq,
    F: Fn(&T) -> V,
{
    items
        .iter()
        .filter(|item| matches_value(&field(*item), value))
        .collect()
}

// ---------------------------------------------------------------------------
// List-view filters
// ---------------------------------------------------------------------------

/// Campaign list: name search plus objective (primary or secondary).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CampaignFilter {
    pub search: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub objective: Option<CampaignObjective>,
}

impl CampaignFilter {
    pub fn matches(&self, campaign: &Campaign) -> bool {
        matches_term([campaign.name.as_str()], self.search.as_deref().unwrap_or(""))
            && self
                .objective
                .map_or(true, |o| campaign.objectives.includes(o))
    }

    pub fn apply<'a>(&self, campaigns: impl IntoIterator<Item = &'a Campaign>) -> Vec<&'a Campaign> {
        campaigns.into_iter().filter(|c| self.matches(c)).collect()
    }
}

/// Specification list: name search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpecificationFilter {
    pub search: Option<String>,
}

impl SpecificationFilter {
    pub fn matches(&self, spec: &Specification) -> bool {
        matches_term([spec.name.as_str()], self.search.as_deref().unwrap_or(""))
    }

    pub fn apply<'a>(
        &self,
        specs: impl IntoIterator<Item = &'a Specification>,
    ) -> Vec<&'a Specification> {
        specs.into_iter().filter(|s| self.matches(s)).collect()
    }
}

/// Brand-rule list: search over name and description plus category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandRuleFilter {
    pub search: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category: Option<BrandRuleCategory>,
}

impl BrandRuleFilter {
    pub fn matches(&self, rule: &BrandRule) -> bool {
        matches_term(
            [rule.name.as_str(), rule.description.as_str()],
            self.search.as_deref().unwrap_or(""),
        ) && matches_value(&rule.category, self.category.as_ref())
    }

    pub fn apply<'a>(&self, rules: impl IntoIterator<Item = &'a BrandRule>) -> Vec<&'a BrandRule> {
        rules.into_iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand_rule::standard_brand_rules;
    use crate::campaign::{CampaignInput, Objectives};
    use crate::specification::standard_specifications;

    fn campaigns() -> Vec<Campaign> {
        let mk = |id: &str, name: &str, primary, secondary| {
            let mut input = CampaignInput::new(name, primary);
            input.objectives = Objectives { primary, secondary };
            Campaign::from_input(id.into(), input)
        };
        vec![
            mk("1", "Spring Launch", CampaignObjective::Awareness, None),
            mk(
                "2",
                "Loyalty Push",
                CampaignObjective::Conversion,
                Some(CampaignObjective::Loyalty),
            ),
            mk("3", "Summer launch", CampaignObjective::Loyalty, None),
        ]
    }

    fn ids<T>(items: &[&T], id: impl Fn(&T) -> &str) -> Vec<String> {
        items.iter().map(|i| id(*i).to_string()).collect()
    }

    #[test]
    fn empty_term_returns_input_unchanged() {
        let specs = standard_specifications();
        let out = filter_by_substring(&specs, |s| [s.name.as_str()], "");
        assert_eq!(out.len(), specs.len());
        assert!(out.iter().zip(&specs).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn substring_is_case_insensitive() {
        let specs = standard_specifications();
        let out = filter_by_substring(&specs, |s| [s.name.as_str()], "LINKEDIN");
        assert_eq!(out.len(), 3);
        assert!(matches_term(["Half Page (300x600)"], "page"));
        assert!(!matches_term(["Half Page"], "billboard"));
    }

    #[test]
    fn surrounding_whitespace_is_part_of_the_term() {
        assert!(matches_term(["Spring Launch"], " launch"));
        assert!(!matches_term(["Launchpad"], " launch"));
        assert!(!matches_term(["Launchpad"], "   "));
    }

    #[test]
    fn empty_query_values_deserialize_as_unset() {
        let campaign: CampaignFilter =
            serde_json::from_str(r#"{"search":"","objective":""}"#).unwrap();
        assert_eq!(campaign.objective, None);
        assert_eq!(campaign.apply(&campaigns()).len(), 3);

        let rules: BrandRuleFilter =
            serde_json::from_str(r#"{"search":"","category":""}"#).unwrap();
        assert_eq!(rules.category, None);
        assert_eq!(rules.apply(&standard_brand_rules()).len(), 6);
    }

    #[test]
    fn equality_none_matches_all() {
        let rules = standard_brand_rules();
        assert_eq!(filter_by_equality(&rules, |r| r.category, None).len(), 6);
        let logos = filter_by_equality(&rules, |r| r.category, Some(&BrandRuleCategory::Logo));
        assert_eq!(logos.len(), 2);
    }

    #[test]
    fn campaign_objective_matches_primary_or_secondary() {
        let all = campaigns();
        let filter = CampaignFilter {
            search: None,
            objective: Some(CampaignObjective::Loyalty),
        };
        assert_eq!(ids(&filter.apply(&all), |c| c.id.as_str()), ["2", "3"]);
    }

    #[test]
    fn campaign_criteria_compose_with_and() {
        let all = campaigns();
        let filter = CampaignFilter {
            search: Some("launch".into()),
            objective: Some(CampaignObjective::Loyalty),
        };
        assert_eq!(ids(&filter.apply(&all), |c| c.id.as_str()), ["3"]);

        let by_name = CampaignFilter {
            search: Some("launch".into()),
            objective: None,
        };
        assert_eq!(ids(&by_name.apply(&all), |c| c.id.as_str()), ["1", "3"]);
    }

    #[test]
    fn brand_rule_search_covers_description() {
        let rules = standard_brand_rules();
        let filter = BrandRuleFilter {
            search: Some("legibility".into()),
            category: None,
        };
        assert_eq!(ids(&filter.apply(&rules), |r| r.id.as_str()), ["rule-logo-size"]);

        let color_only = BrandRuleFilter {
            search: Some("cta".into()),
            category: Some(BrandRuleCategory::Color),
        };
        assert_eq!(ids(&color_only.apply(&rules), |r| r.id.as_str()), ["rule-color-primary"]);
    }

    #[test]
    fn specification_filter_by_name() {
        let specs = standard_specifications();
        let filter = SpecificationFilter {
            search: Some("mpu".into()),
        };
        assert_eq!(ids(&filter.apply(&specs), |s| s.id.as_str()), ["spec-mpu"]);
    }
}
