use serde::Deserialize;

use crate::engine::{
    DEFAULT_ALLOWED_PATHS, DEFAULT_NAMESPACE_SEPARATOR, DEFAULT_SYSTEM_ACCOUNT,
    DEFAULT_SYSTEM_ACTIONS,
};
use crate::error::{NsAuthzError, Result};
use crate::identity::ParsedIdentity;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NsAuthzConfig {
    pub version: u32,

    #[serde(default)]
    pub engine: EngineSection,
}

impl NsAuthzConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(NsAuthzError::UnsupportedVersion(self.version));
        }
        self.engine.validate()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineSection {
    #[serde(default = "default_allowed_paths")]
    pub allowed_paths: Vec<String>,

    #[serde(default = "default_system_account")]
    pub system_account: String,

    #[serde(default = "default_system_actions")]
    pub system_actions: Vec<String>,

    #[serde(default = "default_namespace_separator")]
    pub namespace_separator: String,
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            allowed_paths: default_allowed_paths(),
            system_account: default_system_account(),
            system_actions: default_system_actions(),
            namespace_separator: default_namespace_separator(),
        }
    }
}

impl EngineSection {
    pub fn validate(&self) -> Result<()> {
        if self.allowed_paths.is_empty() {
            return Err(invalid("engine.allowed_paths must not be empty"));
        }
        if let Some(p) = self.allowed_paths.iter().find(|p| !p.starts_with('/')) {
            return Err(invalid(&format!(
                "engine.allowed_paths entry must start with '/': {p:?}"
            )));
        }

        if self.system_actions.is_empty() {
            return Err(invalid("engine.system_actions must not be empty"));
        }
        if self.system_actions.iter().any(|a| a.trim().is_empty()) {
            return Err(invalid("engine.system_actions must not contain blank entries"));
        }

        if !ParsedIdentity::parse(&self.system_account).is_service_account() {
            return Err(invalid(&format!(
                "engine.system_account is not a service account identity: {:?}",
                self.system_account
            )));
        }

        if self.namespace_separator.is_empty() {
            return Err(invalid("engine.namespace_separator must not be empty"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> NsAuthzError {
    NsAuthzError::InvalidConfig(msg.to_string())
}

fn default_allowed_paths() -> Vec<String> {
    DEFAULT_ALLOWED_PATHS.iter().map(|s| s.to_string()).collect()
}
fn default_system_account() -> String {
    DEFAULT_SYSTEM_ACCOUNT.into()
}
fn default_system_actions() -> Vec<String> {
    DEFAULT_SYSTEM_ACTIONS.iter().map(|s| s.to_string()).collect()
}
fn default_namespace_separator() -> String {
    DEFAULT_NAMESPACE_SEPARATOR.into()
}
