//! Ad-format specifications: the technical contract a creative must satisfy
//! for a given placement (dimensions, file types, weight, animation, copy).
//!
//! Specifications are registered independently of campaigns. Channel formats
//! hold copies, so later registry edits do not reach already-attached formats.

use serde::{Deserialize, Serialize};

use crate::patch::{double_option, merge};
use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Value types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionUnit {
    Px,
    Dp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    pub unit: DimensionUnit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationParams {
    pub allowed: bool,
    /// Seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_loops: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    #[default]
    Seconds,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDuration {
    pub min: u32,
    pub max: u32,
    #[serde(default)]
    pub unit: DurationUnit,
}

/// Maximum character counts per copy field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLimits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subhead: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickThrough {
    pub required: bool,
    pub multiple_destinations: bool,
}

/// Whether a specification ships with the registry or was user-created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecSource {
    Standard,
    #[default]
    Custom,
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specification {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    pub file_types: Vec<String>,
    /// Kilobytes.
    pub max_file_size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_params: Option<AnimationParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_duration: Option<VideoDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_limits: Option<TextLimits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_through: Option<ClickThrough>,
    pub source: SpecSource,
}

impl Specification {
    /// Build a record from creation input under the given identifier.
    pub fn from_input(id: EntityId, input: SpecificationInput) -> Self {
        Self {
            id,
            name: input.name,
            dimensions: input.dimensions,
            aspect_ratio: input.aspect_ratio,
            file_types: input.file_types,
            max_file_size: input.max_file_size,
            animation_params: input.animation_params,
            video_duration: input.video_duration,
            text_limits: input.text_limits,
            click_through: input.click_through,
            source: input.source,
        }
    }

    /// Shallow-merge a partial update into this record.
    pub fn apply(&mut self, update: SpecificationUpdate) {
        merge(&mut self.name, update.name);
        merge(&mut self.dimensions, update.dimensions);
        merge(&mut self.aspect_ratio, update.aspect_ratio);
        merge(&mut self.file_types, update.file_types);
        merge(&mut self.max_file_size, update.max_file_size);
        merge(&mut self.animation_params, update.animation_params);
        merge(&mut self.video_duration, update.video_duration);
        merge(&mut self.text_limits, update.text_limits);
        merge(&mut self.click_through, update.click_through);
        merge(&mut self.source, update.source);
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Payload for registering a specification. `source` defaults to `custom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificationInput {
    pub name: String,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default)]
    pub aspect_ratio: Option<String>,
    pub file_types: Vec<String>,
    pub max_file_size: u64,
    #[serde(default)]
    pub animation_params: Option<AnimationParams>,
    #[serde(default)]
    pub video_duration: Option<VideoDuration>,
    #[serde(default)]
    pub text_limits: Option<TextLimits>,
    #[serde(default)]
    pub click_through: Option<ClickThrough>,
    #[serde(default)]
    pub source: SpecSource,
}

impl SpecificationInput {
    /// Minimal custom specification; remaining fields unset.
    pub fn new(name: impl Into<String>, file_types: &[&str], max_file_size: u64) -> Self {
        Self {
            name: name.into(),
            dimensions: None,
            aspect_ratio: None,
            file_types: file_types.iter().map(|t| t.to_string()).collect(),
            max_file_size,
            animation_params: None,
            video_duration: None,
            text_limits: None,
            click_through: None,
            source: SpecSource::Custom,
        }
    }
}

/// Partial update. Optional fields accept `null` to clear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificationUpdate {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub dimensions: Option<Option<Dimensions>>,
    #[serde(default, deserialize_with = "double_option")]
    pub aspect_ratio: Option<Option<String>>,
    pub file_types: Option<Vec<String>>,
    pub max_file_size: Option<u64>,
    #[serde(default, deserialize_with = "double_option")]
    pub animation_params: Option<Option<AnimationParams>>,
    #[serde(default, deserialize_with = "double_option")]
    pub video_duration: Option<Option<VideoDuration>>,
    #[serde(default, deserialize_with = "double_option")]
    pub text_limits: Option<Option<TextLimits>>,
    #[serde(default, deserialize_with = "double_option")]
    pub click_through: Option<Option<ClickThrough>>,
    pub source: Option<SpecSource>,
}

// ---------------------------------------------------------------------------
// Standard seed set
// ---------------------------------------------------------------------------

pub const SPEC_BILLBOARD: &str = "spec-billboard";
pub const SPEC_HALFPAGE: &str = "spec-halfpage";
pub const SPEC_MPU: &str = "spec-mpu";
pub const SPEC_MOBILE_LEADERBOARD: &str = "spec-mobile-leaderboard";
pub const SPEC_LINKEDIN_SINGLE: &str = "spec-linkedin-single";
pub const SPEC_LINKEDIN_CAROUSEL: &str = "spec-linkedin-carousel";
pub const SPEC_LINKEDIN_VIDEO: &str = "spec-linkedin-video";

const DISPLAY_FILE_TYPES: &[&str] = &["jpg", "png", "gif", "html5"];
const SOCIAL_IMAGE_FILE_TYPES: &[&str] = &["jpg", "png"];

fn px(width: u32, height: u32) -> Option<Dimensions> {
    Some(Dimensions {
        width,
        height,
        unit: DimensionUnit::Px,
    })
}

fn display_animation() -> Option<AnimationParams> {
    Some(AnimationParams {
        allowed: true,
        max_duration: Some(15),
        max_loops: Some(3),
        autoplay: Some(true),
    })
}

fn text(headline: u32, subhead: Option<u32>, cta: u32) -> Option<TextLimits> {
    Some(TextLimits {
        headline: Some(headline),
        subhead,
        body: None,
        cta: Some(cta),
    })
}

fn click_through(multiple_destinations: bool) -> Option<ClickThrough> {
    Some(ClickThrough {
        required: true,
        multiple_destinations,
    })
}

fn types(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

/// Programmatic display and LinkedIn formats present at startup.
pub fn standard_specifications() -> Vec<Specification> {
    let display = |id: &str, name: &str, w, h, ratio: &str, kb, limits| Specification {
        id: id.to_string(),
        name: name.to_string(),
        dimensions: px(w, h),
        aspect_ratio: Some(ratio.to_string()),
        file_types: types(DISPLAY_FILE_TYPES),
        max_file_size: kb,
        animation_params: display_animation(),
        video_duration: None,
        text_limits: limits,
        click_through: click_through(false),
        source: SpecSource::Standard,
    };

    vec![
        display(
            SPEC_BILLBOARD,
            "Billboard (970x250)",
            970,
            250,
            "97:25",
            200,
            text(70, Some(120), 25),
        ),
        display(
            SPEC_HALFPAGE,
            "Half Page (300x600)",
            300,
            600,
            "1:2",
            150,
            text(60, Some(100), 25),
        ),
        display(
            SPEC_MPU,
            "MPU (300x250)",
            300,
            250,
            "6:5",
            100,
            text(50, Some(80), 20),
        ),
        display(
            SPEC_MOBILE_LEADERBOARD,
            "Mobile Leaderboard (320x50)",
            320,
            50,
            "32:5",
            50,
            text(25, None, 15),
        ),
        Specification {
            id: SPEC_LINKEDIN_SINGLE.to_string(),
            name: "LinkedIn Single Image".to_string(),
            dimensions: px(1200, 627),
            aspect_ratio: Some("1.91:1".to_string()),
            file_types: types(SOCIAL_IMAGE_FILE_TYPES),
            max_file_size: 5_000,
            animation_params: None,
            video_duration: None,
            text_limits: text(150, Some(300), 30),
            click_through: click_through(false),
            source: SpecSource::Standard,
        },
        Specification {
            id: SPEC_LINKEDIN_CAROUSEL.to_string(),
            name: "LinkedIn Carousel".to_string(),
            dimensions: px(1080, 1080),
            aspect_ratio: Some("1:1".to_string()),
            file_types: types(SOCIAL_IMAGE_FILE_TYPES),
            // Per card.
            max_file_size: 5_000,
            animation_params: None,
            video_duration: None,
            text_limits: text(150, Some(300), 30),
            click_through: click_through(true),
            source: SpecSource::Standard,
        },
        Specification {
            id: SPEC_LINKEDIN_VIDEO.to_string(),
            name: "LinkedIn Video".to_string(),
            dimensions: px(1920, 1080),
            aspect_ratio: Some("16:9".to_string()),
            file_types: types(&["mp4"]),
            max_file_size: 200_000,
            animation_params: None,
            video_duration: Some(VideoDuration {
                min: 3,
                max: 900,
                unit: DurationUnit::Seconds,
            }),
            text_limits: text(150, Some(300), 30),
            click_through: click_through(false),
            source: SpecSource::Standard,
        },
    ]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn seed_set_is_all_standard() {
        let specs = standard_specifications();
        assert_eq!(specs.len(), 7);
        assert!(specs.iter().all(|s| s.source == SpecSource::Standard));
        assert!(specs.iter().all(|s| !s.file_types.is_empty()));
    }

    #[test]
    fn billboard_seed_values() {
        let billboard = standard_specifications()
            .into_iter()
            .find(|s| s.id == SPEC_BILLBOARD)
            .unwrap();
        assert_eq!(billboard.max_file_size, 200);
        let anim = billboard.animation_params.unwrap();
        assert_eq!(anim.max_duration, Some(15));
        assert_eq!(anim.max_loops, Some(3));
        assert_eq!(
            billboard.dimensions,
            Some(Dimensions {
                width: 970,
                height: 250,
                unit: DimensionUnit::Px
            })
        );
    }

    #[test]
    fn linkedin_video_has_duration_bounds() {
        let video = standard_specifications()
            .into_iter()
            .find(|s| s.id == SPEC_LINKEDIN_VIDEO)
            .unwrap();
        assert_eq!(video.max_file_size, 200_000);
        let d = video.video_duration.unwrap();
        assert_eq!((d.min, d.max), (3, 900));
    }

    #[test]
    fn input_source_defaults_to_custom() {
        let input: SpecificationInput = serde_json::from_value(json!({
            "name": "Story",
            "fileTypes": ["mp4"],
            "maxFileSize": 4000
        }))
        .unwrap();
        assert_eq!(input.source, SpecSource::Custom);
    }

    #[test]
    fn apply_replaces_nested_objects_wholesale() {
        let mut spec = standard_specifications().remove(0);
        let update: SpecificationUpdate = serde_json::from_value(json!({
            "animationParams": { "allowed": false }
        }))
        .unwrap();
        spec.apply(update);
        assert_eq!(
            spec.animation_params,
            Some(AnimationParams {
                allowed: false,
                ..Default::default()
            })
        );
        assert_eq!(spec.max_file_size, 200);
    }

    #[test]
    fn apply_null_clears_optional_field() {
        let mut spec = standard_specifications().remove(0);
        let update: SpecificationUpdate =
            serde_json::from_value(json!({ "textLimits": null })).unwrap();
        spec.apply(update);
        assert_eq!(spec.text_limits, None);
        assert!(spec.click_through.is_some());
    }

    #[test]
    fn serializes_camel_case_and_omits_unset_fields() {
        let spec = Specification::from_input(
            "x".into(),
            SpecificationInput::new("Plain", &["png"], 10),
        );
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["fileTypes"], json!(["png"]));
        assert_eq!(value["maxFileSize"], 10);
        assert_eq!(value["source"], "custom");
        assert!(value.get("dimensions").is_none());
    }
}
