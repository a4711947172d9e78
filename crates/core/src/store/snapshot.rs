//! JSON snapshot of all three registries.
//!
//! A snapshot is a field-for-field serialization: loading a saved snapshot
//! yields registries equal to the ones it was captured from, including the
//! current-campaign selection.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{BrandRuleRegistry, CampaignRegistry, SpecificationRegistry};
use crate::brand_rule::BrandRule;
use crate::campaign::Campaign;
use crate::error::CoreError;
use crate::specification::Specification;
use crate::types::EntityId;

/// Current on-disk format version.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub version: u32,
    pub campaigns: Vec<Campaign>,
    #[serde(default)]
    pub current_campaign_id: Option<EntityId>,
    pub specifications: Vec<Specification>,
    pub brand_rules: Vec<BrandRule>,
}

impl Snapshot {
    pub fn capture(
        campaigns: &CampaignRegistry,
        specifications: &SpecificationRegistry,
        brand_rules: &BrandRuleRegistry,
    ) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            campaigns: campaigns.list().cloned().collect(),
            current_campaign_id: campaigns.current_id().map(str::to_string),
            specifications: specifications.list().cloned().collect(),
            brand_rules: brand_rules.list().cloned().collect(),
        }
    }

    pub fn into_registries(self) -> (CampaignRegistry, SpecificationRegistry, BrandRuleRegistry) {
        (
            CampaignRegistry::from_parts(self.campaigns, self.current_campaign_id),
            SpecificationRegistry::from_entries(self.specifications),
            BrandRuleRegistry::from_entries(self.brand_rules),
        )
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Internal(format!("Failed to encode snapshot: {e}")))
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Malformed snapshot: {e}")))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(CoreError::Validation(format!(
                "Unsupported snapshot version {} (expected {SNAPSHOT_VERSION})",
                snapshot.version
            )));
        }
        Ok(snapshot)
    }

    /// Write the snapshot to `path`, replacing any existing file.
    ///
    /// Writes to a sibling temp file first and renames it into place so a
    /// crash mid-write never leaves a truncated snapshot.
    pub fn save_to(&self, path: &Path) -> Result<(), CoreError> {
        let json = self.to_json()?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| {
            CoreError::Internal(format!("Failed to write {}: {e}", tmp.display()))
        })?;
        fs::rename(&tmp, path).map_err(|e| {
            CoreError::Internal(format!("Failed to replace {}: {e}", path.display()))
        })?;
        tracing::debug!(
            path = %path.display(),
            campaigns = self.campaigns.len(),
            "Snapshot saved",
        );
        Ok(())
    }

    /// Load a snapshot from `path`. Returns `Ok(None)` if the file does not
    /// exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, CoreError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CoreError::Internal(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )))
            }
        };
        let snapshot = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            campaigns = snapshot.campaigns.len(),
            "Snapshot loaded",
        );
        Ok(Some(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::campaign::{
        AssetCategory, AssetInput, CampaignInput, CampaignObjective, ChannelFormat, ChannelInput,
        ChannelKind, ImageFormat, KeyVisualInput, Language,
    };
    use crate::specification::SpecificationInput;

    fn populated() -> (CampaignRegistry, SpecificationRegistry, BrandRuleRegistry) {
        let mut specs = SpecificationRegistry::seeded();
        specs.add(SpecificationInput::new("Story", &["mp4"], 4_000));

        let mut campaigns = CampaignRegistry::new();
        let mut input = CampaignInput::new("Q1 Launch", CampaignObjective::Awareness);
        input.languages.push(Language {
            code: "de".into(),
            name: "German".into(),
            localization: Some(true),
        });
        let id = campaigns.create(input);
        campaigns.create(CampaignInput::new("Other", CampaignObjective::Loyalty));
        campaigns.set_current(&id);
        campaigns.add_key_visual(
            &id,
            KeyVisualInput::ai_generated("Hero", "u", ImageFormat::Png, "brief", None),
        );
        let asset_id = campaigns
            .add_asset(
                &id,
                AssetInput {
                    name: "legal.txt".into(),
                    category: AssetCategory::Legal,
                    url: "u".into(),
                    file_format: "txt".into(),
                    file_size: 12,
                },
            )
            .unwrap();
        campaigns.update_asset(&id, &asset_id, Default::default());
        campaigns.add_channel(
            &id,
            ChannelInput {
                kind: ChannelKind::Youtube,
                formats: vec![ChannelFormat::new(
                    "Bumper",
                    "video",
                    specs.list().cloned().collect(),
                )],
            },
        );

        (campaigns, specs, BrandRuleRegistry::seeded())
    }

    #[test]
    fn json_round_trip_preserves_everything() {
        let (campaigns, specs, rules) = populated();
        let snapshot = Snapshot::capture(&campaigns, &specs, &rules);

        let restored = Snapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(restored, snapshot);

        let (c, s, r) = restored.into_registries();
        assert_eq!(c.current_id(), campaigns.current_id());
        assert_eq!(c.list().collect::<Vec<_>>(), campaigns.list().collect::<Vec<_>>());
        assert_eq!(s.list().collect::<Vec<_>>(), specs.list().collect::<Vec<_>>());
        assert_eq!(r.list().collect::<Vec<_>>(), rules.list().collect::<Vec<_>>());
    }

    #[test]
    fn save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let (campaigns, specs, rules) = populated();
        let snapshot = Snapshot::capture(&campaigns, &specs, &rules);

        snapshot.save_to(&path).unwrap();
        let loaded = Snapshot::load_from(&path).unwrap().unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Snapshot::load_from(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn malformed_snapshot_is_rejected() {
        assert_matches!(Snapshot::from_json("{"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let json = r#"{"version":99,"campaigns":[],"specifications":[],"brandRules":[]}"#;
        assert_matches!(Snapshot::from_json(json), Err(CoreError::Validation(msg)) if msg.contains("99"));
    }
}
