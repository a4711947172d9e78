//! Campaign aggregate and its owned sub-entities (key visuals, assets,
//! channels).

use serde::{Deserialize, Serialize};

use crate::patch::{double_option, merge};
use crate::specification::Specification;
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Campaign value types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CampaignObjective {
    Awareness,
    Consideration,
    Conversion,
    Loyalty,
    Advocacy,
}

impl CampaignObjective {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Awareness => "awareness",
            Self::Consideration => "consideration",
            Self::Conversion => "conversion",
            Self::Loyalty => "loyalty",
            Self::Advocacy => "advocacy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objectives {
    pub primary: CampaignObjective,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<CampaignObjective>,
}

impl Objectives {
    pub fn includes(&self, objective: CampaignObjective) -> bool {
        self.primary == objective || self.secondary == Some(objective)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetAudience {
    #[serde(default)]
    pub demographics: Vec<Demographics>,
    #[serde(default)]
    pub psychographics: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Messaging {
    #[serde(default)]
    pub framework: String,
    #[serde(default)]
    pub value_proposition: String,
    #[serde(default)]
    pub call_to_action: CallToAction,
}

/// Dates are kept as entered (ISO-8601 strings). Ordering of start and end is
/// not checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub timezone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geography {
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cities: Option<Vec<String>>,
}

/// Codes are expected to be unique within a campaign; not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localization: Option<bool>,
}

// ---------------------------------------------------------------------------
// Key visuals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyVisualKind {
    Upload,
    AiGenerated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpg,
    Png,
    Psd,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiParams {
    pub creative_brief: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyVisual {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: KeyVisualKind,
    pub url: String,
    pub file_format: ImageFormat,
    pub created_at: Timestamp,
    /// Present only for AI-generated visuals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_params: Option<AiParams>,
}

impl KeyVisual {
    pub fn apply(&mut self, update: KeyVisualUpdate) {
        merge(&mut self.name, update.name);
        merge(&mut self.kind, update.kind);
        merge(&mut self.url, update.url);
        merge(&mut self.file_format, update.file_format);
        merge(&mut self.ai_params, update.ai_params);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyVisualInput {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: KeyVisualKind,
    pub url: String,
    pub file_format: ImageFormat,
    #[serde(default)]
    pub ai_params: Option<AiParams>,
}

impl KeyVisualInput {
    /// Key visual handed over by the upload flow.
    pub fn upload(name: impl Into<String>, url: impl Into<String>, format: ImageFormat) -> Self {
        Self {
            name: name.into(),
            kind: KeyVisualKind::Upload,
            url: url.into(),
            file_format: format,
            ai_params: None,
        }
    }

    /// Key visual produced by the generation flow; `url` is the result image.
    pub fn ai_generated(
        name: impl Into<String>,
        url: impl Into<String>,
        format: ImageFormat,
        creative_brief: impl Into<String>,
        reference_image_url: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: KeyVisualKind::AiGenerated,
            url: url.into(),
            file_format: format,
            ai_params: Some(AiParams {
                creative_brief: creative_brief.into(),
                reference_image_url,
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyVisualUpdate {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<KeyVisualKind>,
    pub url: Option<String>,
    pub file_format: Option<ImageFormat>,
    #[serde(default, deserialize_with = "double_option")]
    pub ai_params: Option<Option<AiParams>>,
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetCategory {
    Illustration,
    ProductPhotography,
    Legal,
    Tagline,
    Logo,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: EntityId,
    pub name: String,
    pub category: AssetCategory,
    pub url: String,
    pub file_format: String,
    /// Bytes.
    pub file_size: u64,
    /// Starts at 1 and only moves through [`Asset::apply`].
    pub version: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Asset {
    /// Merge the update, bump the version and stamp `updated_at`. Runs the
    /// bump even when the payload changes nothing.
    pub fn apply(&mut self, update: AssetUpdate, now: Timestamp) {
        merge(&mut self.name, update.name);
        merge(&mut self.category, update.category);
        merge(&mut self.url, update.url);
        merge(&mut self.file_format, update.file_format);
        merge(&mut self.file_size, update.file_size);
        self.version = self.version.saturating_add(1);
        self.updated_at = now;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInput {
    pub name: String,
    pub category: AssetCategory,
    pub url: String,
    pub file_format: String,
    pub file_size: u64,
}

/// Partial asset update. `version` and timestamps are managed by the
/// registry and cannot be supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetUpdate {
    pub name: Option<String>,
    pub category: Option<AssetCategory>,
    pub url: Option<String>,
    pub file_format: Option<String>,
    pub file_size: Option<u64>,
}

// ---------------------------------------------------------------------------
// Channels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChannelKind {
    ProgrammaticDisplay,
    Linkedin,
    Facebook,
    Instagram,
    Twitter,
    Tiktok,
    Youtube,
    Search,
    Email,
    Other,
}

/// A placement within a channel. Specifications are snapshots taken when the
/// format was attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelFormat {
    /// Assigned by the registry when left empty.
    #[serde(default)]
    pub id: EntityId,
    pub name: String,
    pub format_type: String,
    #[serde(default)]
    pub specifications: Vec<Specification>,
}

impl ChannelFormat {
    pub fn new(
        name: impl Into<String>,
        format_type: impl Into<String>,
        specifications: Vec<Specification>,
    ) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            format_type: format_type.into(),
            specifications,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub kind: ChannelKind,
    #[serde(default)]
    pub formats: Vec<ChannelFormat>,
}

impl Channel {
    pub fn apply(&mut self, update: ChannelUpdate) {
        merge(&mut self.kind, update.kind);
        merge(&mut self.formats, update.formats);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelInput {
    #[serde(rename = "type")]
    pub kind: ChannelKind,
    #[serde(default)]
    pub formats: Vec<ChannelFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChannelUpdate {
    #[serde(rename = "type")]
    pub kind: Option<ChannelKind>,
    pub formats: Option<Vec<ChannelFormat>>,
}

// ---------------------------------------------------------------------------
// Campaign
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: EntityId,
    pub name: String,
    pub objectives: Objectives,
    #[serde(default)]
    pub target_audience: TargetAudience,
    #[serde(default)]
    pub messaging: Messaging,
    #[serde(default)]
    pub timeline: Timeline,
    #[serde(default)]
    pub geography: Geography,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub key_visuals: Vec<KeyVisual>,
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub channels: Vec<Channel>,
}

impl Campaign {
    /// New campaign with empty owned collections.
    pub fn from_input(id: EntityId, input: CampaignInput) -> Self {
        Self {
            id,
            name: input.name,
            objectives: input.objectives,
            target_audience: input.target_audience,
            messaging: input.messaging,
            timeline: input.timeline,
            geography: input.geography,
            languages: input.languages,
            key_visuals: Vec::new(),
            assets: Vec::new(),
            channels: Vec::new(),
        }
    }

    /// Shallow-merge a partial update. Owned collections are only changed
    /// through their dedicated registry operations.
    pub fn apply(&mut self, update: CampaignUpdate) {
        merge(&mut self.name, update.name);
        merge(&mut self.objectives, update.objectives);
        merge(&mut self.target_audience, update.target_audience);
        merge(&mut self.messaging, update.messaging);
        merge(&mut self.timeline, update.timeline);
        merge(&mut self.geography, update.geography);
        merge(&mut self.languages, update.languages);
    }

    pub fn key_visual(&self, id: &str) -> Option<&KeyVisual> {
        self.key_visuals.iter().find(|kv| kv.id == id)
    }

    pub fn asset(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    pub fn channel(&self, id: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignInput {
    pub name: String,
    pub objectives: Objectives,
    #[serde(default)]
    pub target_audience: TargetAudience,
    #[serde(default)]
    pub messaging: Messaging,
    #[serde(default)]
    pub timeline: Timeline,
    #[serde(default)]
    pub geography: Geography,
    #[serde(default)]
    pub languages: Vec<Language>,
}

impl CampaignInput {
    /// Campaign with a name and primary objective; everything else empty.
    pub fn new(name: impl Into<String>, primary: CampaignObjective) -> Self {
        Self {
            name: name.into(),
            objectives: Objectives {
                primary,
                secondary: None,
            },
            target_audience: TargetAudience::default(),
            messaging: Messaging::default(),
            timeline: Timeline::default(),
            geography: Geography::default(),
            languages: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignUpdate {
    pub name: Option<String>,
    pub objectives: Option<Objectives>,
    pub target_audience: Option<TargetAudience>,
    pub messaging: Option<Messaging>,
    pub timeline: Option<Timeline>,
    pub geography: Option<Geography>,
    pub languages: Option<Vec<Language>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn objectives_include_secondary() {
        let o = Objectives {
            primary: CampaignObjective::Awareness,
            secondary: Some(CampaignObjective::Loyalty),
        };
        assert!(o.includes(CampaignObjective::Awareness));
        assert!(o.includes(CampaignObjective::Loyalty));
        assert!(!o.includes(CampaignObjective::Conversion));
    }

    #[test]
    fn campaign_input_deserializes_with_defaults() {
        let input: CampaignInput = serde_json::from_value(json!({
            "name": "Q1 Launch",
            "objectives": { "primary": "awareness" }
        }))
        .unwrap();
        assert_eq!(input, CampaignInput::new("Q1 Launch", CampaignObjective::Awareness));
    }

    #[test]
    fn wire_names_use_camel_case_and_kebab_enums() {
        let kv = KeyVisual {
            id: "kv".into(),
            name: "hero".into(),
            kind: KeyVisualKind::AiGenerated,
            url: "u".into(),
            file_format: ImageFormat::Png,
            created_at: chrono::Utc::now(),
            ai_params: Some(AiParams {
                creative_brief: "sunrise".into(),
                reference_image_url: None,
            }),
        };
        let value = serde_json::to_value(&kv).unwrap();
        assert_eq!(value["type"], "ai-generated");
        assert_eq!(value["fileFormat"], "png");
        assert_eq!(value["aiParams"]["creativeBrief"], "sunrise");
        assert!(value["createdAt"].is_string());
    }

    #[test]
    fn channel_kind_wire_values() {
        assert_eq!(
            serde_json::to_value(ChannelKind::ProgrammaticDisplay).unwrap(),
            "programmatic-display"
        );
        assert_eq!(serde_json::to_value(ChannelKind::Linkedin).unwrap(), "linkedin");
        assert_eq!(
            serde_json::to_value(AssetCategory::ProductPhotography).unwrap(),
            "product-photography"
        );
    }

    #[test]
    fn campaign_update_replaces_nested_objects_wholesale() {
        let mut input = CampaignInput::new("Q1", CampaignObjective::Awareness);
        input.geography = Geography {
            countries: vec!["DE".into()],
            regions: Some(vec!["Bavaria".into()]),
            cities: None,
        };
        let mut campaign = Campaign::from_input("c".into(), input);

        campaign.apply(CampaignUpdate {
            geography: Some(Geography {
                countries: vec!["FR".into()],
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(campaign.geography.countries, vec!["FR".to_string()]);
        assert_eq!(campaign.geography.regions, None);
        assert_eq!(campaign.name, "Q1");
    }

    #[test]
    fn asset_apply_bumps_version_without_changes() {
        let t0 = chrono::Utc::now();
        let mut asset = Asset {
            id: "a".into(),
            name: "logo.png".into(),
            category: AssetCategory::Logo,
            url: "u".into(),
            file_format: "png".into(),
            file_size: 1024,
            version: 1,
            created_at: t0,
            updated_at: t0,
        };
        let t1 = t0 + chrono::Duration::seconds(5);
        asset.apply(AssetUpdate::default(), t1);
        assert_eq!(asset.version, 2);
        assert_eq!(asset.updated_at, t1);
        assert_eq!(asset.created_at, t0);
        assert_eq!(asset.name, "logo.png");
    }

    #[test]
    fn asset_version_saturates_at_max() {
        let t0 = chrono::Utc::now();
        let mut asset: Asset = serde_json::from_value(json!({
            "id": "a",
            "name": "logo.png",
            "category": "logo",
            "url": "u",
            "fileFormat": "png",
            "fileSize": 1024,
            "version": u32::MAX,
            "createdAt": t0,
            "updatedAt": t0,
        }))
        .unwrap();
        asset.apply(AssetUpdate::default(), t0);
        assert_eq!(asset.version, u32::MAX);
    }
}
