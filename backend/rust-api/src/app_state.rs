use std::sync::Arc;

use crate::config::Config;
use crate::services::{ProfileStore, SkillCatalog, SwapRequestLedger};

/// Everything a handler needs, injected through axum's `State`.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<SkillCatalog>,
    pub ledger: Arc<SwapRequestLedger>,
    pub profiles: Arc<ProfileStore>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let profiles = ProfileStore::new(config.app_id.clone(), config.broadcast_capacity);
        Self {
            catalog: Arc::new(SkillCatalog::seeded()),
            ledger: Arc::new(SwapRequestLedger::new()),
            profiles: Arc::new(profiles),
        }
    }
}
