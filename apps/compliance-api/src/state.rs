//! Application state for the Compliance API

use compliance_engine::ComplianceEngine;

use crate::config::ApiConfig;

pub struct AppState {
    pub engine: ComplianceEngine,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            engine: ComplianceEngine::new(),
            config,
        }
    }

    pub fn with_engine(config: ApiConfig, engine: ComplianceEngine) -> Self {
        Self { engine, config }
    }
}
