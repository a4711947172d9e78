//! Dashboard summary over the campaign registry.

use serde::Serialize;

use crate::campaign::{Campaign, CampaignObjective};
use crate::store::CampaignRegistry;
use crate::types::EntityId;

/// Number of campaigns shown in the "recent" list.
pub const DEFAULT_RECENT_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    pub id: EntityId,
    pub name: String,
    pub primary_objective: CampaignObjective,
    pub start_date: String,
    pub end_date: String,
    pub key_visual_count: usize,
    pub channel_count: usize,
}

impl From<&Campaign> for CampaignSummary {
    fn from(c: &Campaign) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            primary_objective: c.objectives.primary,
            start_date: c.timeline.start_date.clone(),
            end_date: c.timeline.end_date.clone(),
            key_visual_count: c.key_visuals.len(),
            channel_count: c.channels.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub campaign_count: usize,
    pub key_visual_count: usize,
    pub channel_count: usize,
    pub asset_count: usize,
    /// First `limit` campaigns in creation order.
    pub recent_campaigns: Vec<CampaignSummary>,
}

pub fn summarize(campaigns: &CampaignRegistry, recent_limit: usize) -> DashboardSummary {
    let mut summary = DashboardSummary {
        campaign_count: campaigns.len(),
        key_visual_count: 0,
        channel_count: 0,
        asset_count: 0,
        recent_campaigns: Vec::new(),
    };
    for campaign in campaigns.list() {
        summary.key_visual_count += campaign.key_visuals.len();
        summary.channel_count += campaign.channels.len();
        summary.asset_count += campaign.assets.len();
    }
    summary.recent_campaigns = campaigns
        .list()
        .take(recent_limit)
        .map(CampaignSummary::from)
        .collect();
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::{CampaignInput, ChannelInput, ChannelKind, ImageFormat, KeyVisualInput};

    #[test]
    fn empty_registry_summarizes_to_zero() {
        let summary = summarize(&CampaignRegistry::new(), DEFAULT_RECENT_LIMIT);
        assert_eq!(summary.campaign_count, 0);
        assert!(summary.recent_campaigns.is_empty());
    }

    #[test]
    fn counts_children_across_campaigns() {
        let mut registry = CampaignRegistry::new();
        let mut ids = Vec::new();
        for name in ["A", "B", "C", "D"] {
            ids.push(registry.create(CampaignInput::new(name, CampaignObjective::Awareness)));
        }
        registry.add_key_visual(&ids[0], KeyVisualInput::upload("kv", "u", ImageFormat::Jpg));
        registry.add_key_visual(&ids[3], KeyVisualInput::upload("kv", "u", ImageFormat::Jpg));
        registry.add_channel(
            &ids[1],
            ChannelInput {
                kind: ChannelKind::Email,
                formats: vec![],
            },
        );

        let summary = summarize(&registry, DEFAULT_RECENT_LIMIT);
        assert_eq!(summary.campaign_count, 4);
        assert_eq!(summary.key_visual_count, 2);
        assert_eq!(summary.channel_count, 1);
        assert_eq!(summary.asset_count, 0);

        let names: Vec<_> = summary.recent_campaigns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(summary.recent_campaigns[0].key_visual_count, 1);
    }
}
