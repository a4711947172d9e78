//! Brand-compliance rules.
//!
//! A rule's `parameters` are stored as an open JSON map so the registry stays
//! schema-agnostic. [`BrandRuleParameters`] gives a typed reading of that map
//! for the categories with a known schema, falling back to the raw map for
//! imagery, layout, or any shape that does not decode.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::patch::{double_option, merge};
use crate::types::EntityId;

/// Open parameter map as stored on a rule.
pub type ParameterMap = Map<String, Value>;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandRuleCategory {
    Logo,
    Color,
    Typography,
    Imagery,
    Layout,
    Cta,
    Legal,
}

impl BrandRuleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Logo => "logo",
            Self::Color => "color",
            Self::Typography => "typography",
            Self::Imagery => "imagery",
            Self::Layout => "layout",
            Self::Cta => "cta",
            Self::Legal => "legal",
        }
    }
}

// ---------------------------------------------------------------------------
// Typed parameter records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogoPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClearanceZone {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<u32>,
    #[serde(flatten)]
    pub extra: ParameterMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<LogoPosition>,
    /// Pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clearance_zone: Option<ClearanceZone>,
    #[serde(flatten)]
    pub extra: ParameterMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorParameters {
    /// Hex string, e.g. `#0066CC`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elements: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: ParameterMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
    Light,
    Medium,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    /// Pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<u32>,
    #[serde(flatten)]
    pub extra: ParameterMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaddingBox {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<u32>,
    #[serde(flatten)]
    pub extra: ParameterMap,
}

/// CTA padding is either CSS-style text (`"12px 24px"`) or structured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Padding {
    Text(String),
    Structured(PaddingBox),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
    #[serde(flatten)]
    pub extra: ParameterMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegalPosition {
    Bottom,
    Top,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<LegalPosition>,
    /// Pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(flatten)]
    pub extra: ParameterMap,
}

/// Typed reading of a rule's parameter map, selected by category.
#[derive(Debug, Clone, PartialEq)]
pub enum BrandRuleParameters {
    Logo(LogoParameters),
    Color(ColorParameters),
    Typography(TypographyParameters),
    Cta(CtaParameters),
    Legal(LegalParameters),
    /// Imagery, layout, or parameters that do not fit the category schema.
    Open(ParameterMap),
}

impl BrandRuleParameters {
    /// Interpret `map` according to `category`. Never fails: anything that
    /// does not decode is returned as [`BrandRuleParameters::Open`].
    pub fn interpret(category: BrandRuleCategory, map: &ParameterMap) -> Self {
        fn decode<T: serde::de::DeserializeOwned>(map: &ParameterMap) -> Option<T> {
            serde_json::from_value(Value::Object(map.clone())).ok()
        }

        let typed = match category {
            BrandRuleCategory::Logo => decode(map).map(Self::Logo),
            BrandRuleCategory::Color => decode(map).map(Self::Color),
            BrandRuleCategory::Typography => decode(map).map(Self::Typography),
            BrandRuleCategory::Cta => decode(map).map(Self::Cta),
            BrandRuleCategory::Legal => decode(map).map(Self::Legal),
            BrandRuleCategory::Imagery | BrandRuleCategory::Layout => None,
        };
        typed.unwrap_or_else(|| Self::Open(map.clone()))
    }

    /// Convert back to the stored map form.
    pub fn into_map(self) -> ParameterMap {
        let value = match self {
            Self::Open(map) => return map,
            Self::Logo(p) => serde_json::to_value(p),
            Self::Color(p) => serde_json::to_value(p),
            Self::Typography(p) => serde_json::to_value(p),
            Self::Cta(p) => serde_json::to_value(p),
            Self::Legal(p) => serde_json::to_value(p),
        };
        match value {
            Ok(Value::Object(map)) => map,
            _ => ParameterMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandRule {
    pub id: EntityId,
    pub category: BrandRuleCategory,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub parameters: ParameterMap,
    pub is_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_override: Option<bool>,
}

impl BrandRule {
    pub fn from_input(id: EntityId, input: BrandRuleInput) -> Self {
        Self {
            id,
            category: input.category,
            name: input.name,
            description: input.description,
            parameters: input.parameters,
            is_required: input.is_required,
            campaign_override: input.campaign_override,
        }
    }

    /// Shallow-merge a partial update. A supplied parameter map replaces the
    /// stored one wholesale.
    pub fn apply(&mut self, update: BrandRuleUpdate) {
        merge(&mut self.category, update.category);
        merge(&mut self.name, update.name);
        merge(&mut self.description, update.description);
        merge(&mut self.parameters, update.parameters);
        merge(&mut self.is_required, update.is_required);
        merge(&mut self.campaign_override, update.campaign_override);
    }

    pub fn typed_parameters(&self) -> BrandRuleParameters {
        BrandRuleParameters::interpret(self.category, &self.parameters)
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandRuleInput {
    pub category: BrandRuleCategory,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: ParameterMap,
    pub is_required: bool,
    #[serde(default)]
    pub campaign_override: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandRuleUpdate {
    pub category: Option<BrandRuleCategory>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub parameters: Option<ParameterMap>,
    pub is_required: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub campaign_override: Option<Option<bool>>,
}

// ---------------------------------------------------------------------------
// Standard seed set
// ---------------------------------------------------------------------------

pub const RULE_LOGO_PLACEMENT: &str = "rule-logo-placement";
pub const RULE_LOGO_SIZE: &str = "rule-logo-size";
pub const RULE_COLOR_PRIMARY: &str = "rule-color-primary";
pub const RULE_TYPOGRAPHY_HEADING: &str = "rule-typography-heading";
pub const RULE_CTA_STYLE: &str = "rule-cta-style";
pub const RULE_LEGAL_DISCLAIMER: &str = "rule-legal-disclaimer";

fn params(value: Value) -> ParameterMap {
    match value {
        Value::Object(map) => map,
        _ => ParameterMap::new(),
    }
}

fn seed(
    id: &str,
    category: BrandRuleCategory,
    name: &str,
    description: &str,
    parameters: Value,
) -> BrandRule {
    BrandRule {
        id: id.to_string(),
        category,
        name: name.to_string(),
        description: description.to_string(),
        parameters: params(parameters),
        is_required: true,
        campaign_override: None,
    }
}

/// The six brand rules present at startup.
pub fn standard_brand_rules() -> Vec<BrandRule> {
    use serde_json::json;

    vec![
        seed(
            RULE_LOGO_PLACEMENT,
            BrandRuleCategory::Logo,
            "Logo Placement",
            "Logo must be placed in the top-right corner with proper clearance zone",
            json!({
                "position": "top-right",
                "clearanceZone": { "top": 20, "right": 20, "unit": "px" }
            }),
        ),
        seed(
            RULE_LOGO_SIZE,
            BrandRuleCategory::Logo,
            "Minimum Logo Size",
            "Logo must be at least 60px in width to maintain legibility",
            json!({ "minWidth": 60, "unit": "px" }),
        ),
        seed(
            RULE_COLOR_PRIMARY,
            BrandRuleCategory::Color,
            "Primary Brand Color",
            "Primary brand color must be used for main CTA elements",
            json!({ "color": "#0066CC", "elements": ["cta-primary"] }),
        ),
        seed(
            RULE_TYPOGRAPHY_HEADING,
            BrandRuleCategory::Typography,
            "Heading Typography",
            "Headings must use Bayer Sans Bold at specified sizes",
            json!({
                "fontFamily": "Bayer Sans",
                "fontWeight": "bold",
                "minSize": 18,
                "unit": "px"
            }),
        ),
        seed(
            RULE_CTA_STYLE,
            BrandRuleCategory::Cta,
            "CTA Button Style",
            "CTA buttons must follow brand style guidelines",
            json!({
                "backgroundColor": "#0066CC",
                "textColor": "#FFFFFF",
                "borderRadius": 4,
                "padding": { "vertical": 12, "horizontal": 24, "unit": "px" }
            }),
        ),
        seed(
            RULE_LEGAL_DISCLAIMER,
            BrandRuleCategory::Legal,
            "Legal Disclaimer",
            "Legal disclaimer must be included at the bottom of all ads",
            json!({
                "position": "bottom",
                "fontSize": 10,
                "fontColor": "#666666",
                "unit": "px"
            }),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn seeded(id: &str) -> BrandRule {
        standard_brand_rules()
            .into_iter()
            .find(|r| r.id == id)
            .unwrap()
    }

    #[test]
    fn six_required_seed_rules() {
        let rules = standard_brand_rules();
        assert_eq!(rules.len(), 6);
        assert!(rules.iter().all(|r| r.is_required));
    }

    #[test]
    fn logo_placement_decodes_typed() {
        let rule = seeded(RULE_LOGO_PLACEMENT);
        assert_matches!(rule.typed_parameters(), BrandRuleParameters::Logo(p) => {
            assert_eq!(p.position, Some(LogoPosition::TopRight));
            let zone = p.clearance_zone.unwrap();
            assert_eq!(zone.top, Some(20));
            assert_eq!(zone.extra.get("unit"), Some(&json!("px")));
        });
    }

    #[test]
    fn cta_padding_accepts_structured_and_text() {
        let rule = seeded(RULE_CTA_STYLE);
        assert_matches!(rule.typed_parameters(), BrandRuleParameters::Cta(p) => {
            assert_matches!(p.padding, Some(Padding::Structured(b)) => {
                assert_eq!(b.vertical, Some(12));
                assert_eq!(b.horizontal, Some(24));
            });
        });

        let map = params(json!({ "padding": "12px 24px" }));
        assert_matches!(
            BrandRuleParameters::interpret(BrandRuleCategory::Cta, &map),
            BrandRuleParameters::Cta(CtaParameters { padding: Some(Padding::Text(t)), .. }) if t == "12px 24px"
        );
    }

    #[test]
    fn unknown_values_fall_back_to_open_map() {
        let map = params(json!({ "fontWeight": "extra-heavy" }));
        assert_matches!(
            BrandRuleParameters::interpret(BrandRuleCategory::Typography, &map),
            BrandRuleParameters::Open(m) if m == map
        );
    }

    #[test]
    fn imagery_and_layout_are_open() {
        let map = params(json!({ "style": "lifestyle" }));
        assert_matches!(
            BrandRuleParameters::interpret(BrandRuleCategory::Imagery, &map),
            BrandRuleParameters::Open(_)
        );
        assert_matches!(
            BrandRuleParameters::interpret(BrandRuleCategory::Layout, &map),
            BrandRuleParameters::Open(_)
        );
    }

    #[test]
    fn typed_reading_round_trips_to_the_same_map() {
        for rule in standard_brand_rules() {
            assert_eq!(rule.typed_parameters().into_map(), rule.parameters, "{}", rule.id);
        }
    }

    #[test]
    fn apply_replaces_parameter_map_and_clears_override() {
        let mut rule = seeded(RULE_COLOR_PRIMARY);
        rule.campaign_override = Some(true);

        let update: BrandRuleUpdate = serde_json::from_value(json!({
            "parameters": { "color": "#FF0000" },
            "campaignOverride": null
        }))
        .unwrap();
        rule.apply(update);

        assert_eq!(rule.parameters, params(json!({ "color": "#FF0000" })));
        assert_eq!(rule.campaign_override, None);
        assert_eq!(rule.name, "Primary Brand Color");
    }
}
