use std::sync::Arc;

use campaignhub_core::error::CoreError;
use campaignhub_core::store::{
    BrandRuleRegistry, CampaignRegistry, Snapshot, SpecificationRegistry,
};
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable. Each registry sits behind its own lock; handlers take
/// at most one write lock at a time.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub campaigns: Arc<RwLock<CampaignRegistry>>,
    pub specifications: Arc<RwLock<SpecificationRegistry>>,
    pub brand_rules: Arc<RwLock<BrandRuleRegistry>>,
}

impl AppState {
    /// Fresh state: no campaigns, standard specifications and brand rules.
    pub fn seeded(config: ServerConfig) -> Self {
        Self::from_registries(
            config,
            CampaignRegistry::new(),
            SpecificationRegistry::seeded(),
            BrandRuleRegistry::seeded(),
        )
    }

    pub fn from_snapshot(config: ServerConfig, snapshot: Snapshot) -> Self {
        let (campaigns, specifications, brand_rules) = snapshot.into_registries();
        Self::from_registries(config, campaigns, specifications, brand_rules)
    }

    fn from_registries(
        config: ServerConfig,
        campaigns: CampaignRegistry,
        specifications: SpecificationRegistry,
        brand_rules: BrandRuleRegistry,
    ) -> Self {
        Self {
            config: Arc::new(config),
            campaigns: Arc::new(RwLock::new(campaigns)),
            specifications: Arc::new(RwLock::new(specifications)),
            brand_rules: Arc::new(RwLock::new(brand_rules)),
        }
    }

    /// Restore from the configured snapshot file, falling back to seeded
    /// state when no path is configured or the file does not exist yet.
    pub fn load(config: ServerConfig) -> Result<Self, CoreError> {
        let Some(path) = config.snapshot_path.clone() else {
            return Ok(Self::seeded(config));
        };
        match Snapshot::load_from(&path)? {
            Some(snapshot) => {
                tracing::info!(path = %path.display(), "Restored state from snapshot");
                Ok(Self::from_snapshot(config, snapshot))
            }
            None => {
                tracing::info!(path = %path.display(), "No snapshot found, starting seeded");
                Ok(Self::seeded(config))
            }
        }
    }

    /// Capture all three registries under read locks.
    pub async fn snapshot(&self) -> Snapshot {
        let campaigns = self.campaigns.read().await;
        let specifications = self.specifications.read().await;
        let brand_rules = self.brand_rules.read().await;
        Snapshot::capture(&campaigns, &specifications, &brand_rules)
    }

    /// Write a snapshot to the configured path. Returns `Ok(false)` when no
    /// path is configured.
    pub async fn persist(&self) -> Result<bool, CoreError> {
        let Some(path) = self.config.snapshot_path.as_deref() else {
            return Ok(false);
        };
        self.snapshot().await.save_to(path)?;
        Ok(true)
    }
}
