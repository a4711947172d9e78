//! Input validation for create/update payloads.
//!
//! The registries accept whatever they are given; these checks run at the
//! service boundary before a payload reaches a registry.

use crate::brand_rule::{
    BrandRuleCategory, BrandRuleInput, BrandRuleParameters, BrandRuleUpdate, ParameterMap,
};
use crate::campaign::{
    AiParams, CampaignInput, CampaignUpdate, KeyVisual, KeyVisualInput, KeyVisualKind,
    KeyVisualUpdate,
};
use crate::error::CoreError;
use crate::specification::{Dimensions, SpecificationInput, SpecificationUpdate, VideoDuration};

/* --------------------------------------------------------------------------
   Limits
   -------------------------------------------------------------------------- */

/// Maximum length for any entity name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length for a brand-rule description.
pub const MAX_DESCRIPTION_LEN: usize = 5000;

/* --------------------------------------------------------------------------
   Field checks
   -------------------------------------------------------------------------- */

/// Validate a name: non-blank and within length limit.
pub fn validate_name(entity: &str, name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "{entity} name must not be empty"
        )));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "{entity} name too long: {} chars (max {MAX_NAME_LEN})",
            name.chars().count()
        )));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Description too long: {} chars (max {MAX_DESCRIPTION_LEN})",
            description.chars().count()
        )));
    }
    Ok(())
}

pub fn validate_file_types(file_types: &[String]) -> Result<(), CoreError> {
    if file_types.is_empty() || file_types.iter().any(|t| t.trim().is_empty()) {
        return Err(CoreError::Validation(
            "Specification must accept at least one non-empty file type".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_dimensions(dimensions: &Dimensions) -> Result<(), CoreError> {
    if dimensions.width == 0 || dimensions.height == 0 {
        return Err(CoreError::Validation(format!(
            "Dimensions must be positive, got {}x{}",
            dimensions.width, dimensions.height
        )));
    }
    Ok(())
}

pub fn validate_video_duration(duration: &VideoDuration) -> Result<(), CoreError> {
    if duration.min > duration.max {
        return Err(CoreError::Validation(format!(
            "Video duration min ({}) exceeds max ({})",
            duration.min, duration.max
        )));
    }
    Ok(())
}

/// `#RGB` or `#RRGGBB`.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Check color-valued parameters when the map decodes to a known schema.
/// Maps that fall back to the open form are accepted as-is.
pub fn validate_brand_rule_parameters(
    category: BrandRuleCategory,
    parameters: &ParameterMap,
) -> Result<(), CoreError> {
    let colors: Vec<(&str, Option<String>)> =
        match BrandRuleParameters::interpret(category, parameters) {
            BrandRuleParameters::Color(p) => vec![("color", p.color)],
            BrandRuleParameters::Cta(p) => vec![
                ("backgroundColor", p.background_color),
                ("textColor", p.text_color),
            ],
            BrandRuleParameters::Legal(p) => vec![("fontColor", p.font_color)],
            _ => Vec::new(),
        };

    for (key, value) in colors {
        if let Some(v) = value {
            if !is_hex_color(&v) {
                return Err(CoreError::Validation(format!(
                    "Parameter '{key}' must be a hex color, got '{v}'"
                )));
            }
        }
    }
    Ok(())
}

/* --------------------------------------------------------------------------
   Payload checks
   -------------------------------------------------------------------------- */

pub fn validate_campaign_input(input: &CampaignInput) -> Result<(), CoreError> {
    validate_name("Campaign", &input.name)
}

pub fn validate_campaign_update(update: &CampaignUpdate) -> Result<(), CoreError> {
    match &update.name {
        Some(name) => validate_name("Campaign", name),
        None => Ok(()),
    }
}

pub fn validate_specification_input(input: &SpecificationInput) -> Result<(), CoreError> {
    validate_name("Specification", &input.name)?;
    validate_file_types(&input.file_types)?;
    if let Some(d) = &input.dimensions {
        validate_dimensions(d)?;
    }
    if let Some(v) = &input.video_duration {
        validate_video_duration(v)?;
    }
    Ok(())
}

pub fn validate_specification_update(update: &SpecificationUpdate) -> Result<(), CoreError> {
    if let Some(name) = &update.name {
        validate_name("Specification", name)?;
    }
    if let Some(file_types) = &update.file_types {
        validate_file_types(file_types)?;
    }
    if let Some(Some(d)) = &update.dimensions {
        validate_dimensions(d)?;
    }
    if let Some(Some(v)) = &update.video_duration {
        validate_video_duration(v)?;
    }
    Ok(())
}

pub fn validate_brand_rule_input(input: &BrandRuleInput) -> Result<(), CoreError> {
    validate_name("Brand rule", &input.name)?;
    validate_description(&input.description)?;
    validate_brand_rule_parameters(input.category, &input.parameters)
}

/// `category` is the rule's category after the update is applied. When the
/// update carries no `parameters`, the stored map is checked against it.
pub fn validate_brand_rule_update(
    update: &BrandRuleUpdate,
    category: BrandRuleCategory,
    stored: &ParameterMap,
) -> Result<(), CoreError> {
    if let Some(name) = &update.name {
        validate_name("Brand rule", name)?;
    }
    if let Some(description) = &update.description {
        validate_description(description)?;
    }
    validate_brand_rule_parameters(category, update.parameters.as_ref().unwrap_or(stored))
}

/// AI parameters must be present exactly when the visual is AI-generated.
fn validate_ai_params(kind: KeyVisualKind, ai_params: Option<&AiParams>) -> Result<(), CoreError> {
    match (kind, ai_params) {
        (KeyVisualKind::AiGenerated, None) => Err(CoreError::Validation(
            "AI-generated key visuals require aiParams".to_string(),
        )),
        (KeyVisualKind::Upload, Some(_)) => Err(CoreError::Validation(
            "Uploaded key visuals must not carry aiParams".to_string(),
        )),
        _ => Ok(()),
    }
}

pub fn validate_key_visual_input(input: &KeyVisualInput) -> Result<(), CoreError> {
    validate_name("Key visual", &input.name)?;
    validate_ai_params(input.kind, input.ai_params.as_ref())
}

/// Checks the kind and AI parameters the visual will have once `update` is
/// merged into `current`.
pub fn validate_key_visual_update(
    current: &KeyVisual,
    update: &KeyVisualUpdate,
) -> Result<(), CoreError> {
    if let Some(name) = &update.name {
        validate_name("Key visual", name)?;
    }
    let kind = update.kind.unwrap_or(current.kind);
    let ai_params = match &update.ai_params {
        Some(supplied) => supplied.as_ref(),
        None => current.ai_params.as_ref(),
    };
    validate_ai_params(kind, ai_params)
}
