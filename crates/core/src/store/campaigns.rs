use chrono::Utc;
use indexmap::IndexMap;

use crate::campaign::{
    Asset, AssetInput, AssetUpdate, Campaign, CampaignInput, CampaignUpdate, Channel,
    ChannelFormat, ChannelInput, ChannelUpdate, KeyVisual, KeyVisualInput, KeyVisualUpdate,
};
use crate::ids::new_id;
use crate::types::EntityId;

/// Registry of campaigns plus the "current campaign" selection.
///
/// The selection is stored as an id and resolved on every read, so updates
/// to the selected campaign (or its key visuals, assets and channels) are
/// visible through [`CampaignRegistry::current`] without extra bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct CampaignRegistry {
    entries: IndexMap<EntityId, Campaign>,
    current_id: Option<EntityId>,
}

impl CampaignRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from stored campaigns. A `current_id` that does not
    /// match any campaign is dropped.
    pub fn from_parts(
        campaigns: impl IntoIterator<Item = Campaign>,
        current_id: Option<EntityId>,
    ) -> Self {
        let entries: IndexMap<EntityId, Campaign> =
            campaigns.into_iter().map(|c| (c.id.clone(), c)).collect();
        let current_id = current_id.filter(|id| entries.contains_key(id));
        Self {
            entries,
            current_id,
        }
    }

    // -- campaigns -----------------------------------------------------------

    /// Insert a new campaign with empty owned collections and select it.
    pub fn create(&mut self, input: CampaignInput) -> EntityId {
        let id = new_id();
        let campaign = Campaign::from_input(id.clone(), input);
        tracing::debug!(campaign_id = %id, name = %campaign.name, "Campaign created");
        self.entries.insert(id.clone(), campaign);
        self.current_id = Some(id.clone());
        id
    }

    pub fn update(&mut self, id: &str, update: CampaignUpdate) -> Option<&Campaign> {
        let campaign = self.entries.get_mut(id)?;
        campaign.apply(update);
        tracing::debug!(campaign_id = %id, "Campaign updated");
        Some(&*campaign)
    }

    /// Remove a campaign together with everything it owns. Clears the
    /// selection if it pointed at this campaign.
    pub fn delete(&mut self, id: &str) -> bool {
        if self.entries.shift_remove(id).is_none() {
            return false;
        }
        if self.current_id.as_deref() == Some(id) {
            self.current_id = None;
        }
        tracing::debug!(campaign_id = %id, "Campaign deleted");
        true
    }

    /// Select the campaign with `id`, or clear the selection when no such
    /// campaign exists.
    pub fn set_current(&mut self, id: &str) -> Option<&Campaign> {
        self.current_id = self.entries.contains_key(id).then(|| id.to_string());
        self.current()
    }

    pub fn current(&self) -> Option<&Campaign> {
        self.current_id
            .as_deref()
            .and_then(|id| self.entries.get(id))
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&Campaign> {
        self.entries.get(id)
    }

    /// All campaigns in creation order.
    pub fn list(&self) -> impl Iterator<Item = &Campaign> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // -- key visuals ---------------------------------------------------------

    /// Returns `None` (and generates nothing) when the campaign is missing.
    pub fn add_key_visual(&mut self, campaign_id: &str, input: KeyVisualInput) -> Option<EntityId> {
        let campaign = self.entries.get_mut(campaign_id)?;
        let id = new_id();
        campaign.key_visuals.push(KeyVisual {
            id: id.clone(),
            name: input.name,
            kind: input.kind,
            url: input.url,
            file_format: input.file_format,
            created_at: Utc::now(),
            ai_params: input.ai_params,
        });
        tracing::debug!(campaign_id, key_visual_id = %id, "Key visual added");
        Some(id)
    }

    pub fn update_key_visual(
        &mut self,
        campaign_id: &str,
        key_visual_id: &str,
        update: KeyVisualUpdate,
    ) -> Option<&KeyVisual> {
        let key_visual = self
            .entries
            .get_mut(campaign_id)?
            .key_visuals
            .iter_mut()
            .find(|kv| kv.id == key_visual_id)?;
        key_visual.apply(update);
        tracing::debug!(campaign_id, key_visual_id, "Key visual updated");
        Some(&*key_visual)
    }

    pub fn delete_key_visual(&mut self, campaign_id: &str, key_visual_id: &str) -> bool {
        let Some(campaign) = self.entries.get_mut(campaign_id) else {
            return false;
        };
        let removed = remove_by(&mut campaign.key_visuals, |kv| kv.id == key_visual_id);
        if removed {
            tracing::debug!(campaign_id, key_visual_id, "Key visual deleted");
        }
        removed
    }

    // -- assets --------------------------------------------------------------

    /// New assets start at version 1 with `created_at == updated_at`.
    pub fn add_asset(&mut self, campaign_id: &str, input: AssetInput) -> Option<EntityId> {
        let campaign = self.entries.get_mut(campaign_id)?;
        let id = new_id();
        let now = Utc::now();
        campaign.assets.push(Asset {
            id: id.clone(),
            name: input.name,
            category: input.category,
            url: input.url,
            file_format: input.file_format,
            file_size: input.file_size,
            version: 1,
            created_at: now,
            updated_at: now,
        });
        tracing::debug!(campaign_id, asset_id = %id, "Asset added");
        Some(id)
    }

    /// Every successful call bumps the version by one, even for an empty
    /// payload.
    pub fn update_asset(
        &mut self,
        campaign_id: &str,
        asset_id: &str,
        update: AssetUpdate,
    ) -> Option<&Asset> {
        let asset = self
            .entries
            .get_mut(campaign_id)?
            .assets
            .iter_mut()
            .find(|a| a.id == asset_id)?;
        asset.apply(update, Utc::now());
        tracing::debug!(campaign_id, asset_id, version = asset.version, "Asset updated");
        Some(&*asset)
    }

    pub fn delete_asset(&mut self, campaign_id: &str, asset_id: &str) -> bool {
        let Some(campaign) = self.entries.get_mut(campaign_id) else {
            return false;
        };
        let removed = remove_by(&mut campaign.assets, |a| a.id == asset_id);
        if removed {
            tracing::debug!(campaign_id, asset_id, "Asset deleted");
        }
        removed
    }

    // -- channels ------------------------------------------------------------

    pub fn add_channel(&mut self, campaign_id: &str, input: ChannelInput) -> Option<EntityId> {
        let campaign = self.entries.get_mut(campaign_id)?;
        let id = new_id();
        let mut formats = input.formats;
        assign_format_ids(&mut formats);
        campaign.channels.push(Channel {
            id: id.clone(),
            kind: input.kind,
            formats,
        });
        tracing::debug!(campaign_id, channel_id = %id, "Channel added");
        Some(id)
    }

    pub fn update_channel(
        &mut self,
        campaign_id: &str,
        channel_id: &str,
        mut update: ChannelUpdate,
    ) -> Option<&Channel> {
        let channel = self
            .entries
            .get_mut(campaign_id)?
            .channels
            .iter_mut()
            .find(|c| c.id == channel_id)?;
        if let Some(formats) = update.formats.as_mut() {
            assign_format_ids(formats);
        }
        channel.apply(update);
        tracing::debug!(campaign_id, channel_id, "Channel updated");
        Some(&*channel)
    }

    pub fn delete_channel(&mut self, campaign_id: &str, channel_id: &str) -> bool {
        let Some(campaign) = self.entries.get_mut(campaign_id) else {
            return false;
        };
        let removed = remove_by(&mut campaign.channels, |c| c.id == channel_id);
        if removed {
            tracing::debug!(campaign_id, channel_id, "Channel deleted");
        }
        removed
    }
}

/// Remove the entries matching `pred`, reporting whether any were removed.
fn remove_by<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> bool {
    let before = items.len();
    items.retain(|item| !pred(item));
    items.len() != before
}

fn assign_format_ids(formats: &mut [ChannelFormat]) {
    for format in formats.iter_mut().filter(|f| f.id.is_empty()) {
        format.id = new_id();
    }
}
