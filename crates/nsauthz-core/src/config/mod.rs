//! Engine config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use crate::engine::DecisionEngine;
use crate::error::{NsAuthzError, Result};

pub use schema::{EngineSection, NsAuthzConfig};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<NsAuthzConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        NsAuthzError::Internal(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<NsAuthzConfig> {
    let cfg: NsAuthzConfig = serde_yaml::from_str(s)
        .map_err(|e| NsAuthzError::InvalidConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    tracing::debug!(
        allowed_paths = ?cfg.engine.allowed_paths,
        system_account = %cfg.engine.system_account,
        system_actions = ?cfg.engine.system_actions,
        namespace_separator = %cfg.engine.namespace_separator,
        "engine config loaded"
    );
    Ok(cfg)
}

/// Load a config file and compile it into an engine.
pub fn engine_from_file(path: impl AsRef<Path>) -> Result<DecisionEngine> {
    let cfg = load_from_file(path)?;
    DecisionEngine::new(&cfg.engine)
}
