//! Target resolution from environment variables or the configuration file

use log::debug;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::{defaults, env as env_vars};
use crate::error::{Result, VraError};
use crate::target::store::{TargetEntry, TargetStore};

/// Where a target was loaded from. File-backed targets get refreshed tokens
/// written back; environment-backed targets are never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetSource {
    Environment,
    File(PathBuf),
}

/// A resolved target: one remote endpoint plus its credentials
#[derive(Debug, Clone)]
pub struct Target {
    pub name: String,
    pub server: String,
    pub domain: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Long-lived API (refresh) token
    pub api_token: Option<String>,
    /// Short-lived access token, mutated in place on refresh
    pub access_token: Option<String>,
    pub source: TargetSource,
}

impl Target {
    /// Resolve the active target:
    /// 1. Environment variables, when `VRA_SERVER` is set (file is ignored)
    /// 2. Configuration file profile: `--target` name, else the file's
    ///    current target, else "default"
    pub fn resolve(explicit_name: Option<&str>) -> Result<Target> {
        let env_map: HashMap<String, String> = std::env::vars().collect();
        if let Some(target) = Self::from_env_map(&env_map) {
            debug!("Using target from {} environment variables", env_vars::SERVER);
            return Ok(target);
        }

        let path = TargetStore::default_path()
            .ok_or_else(|| VraError::Config("Could not determine home directory".to_string()))?;
        let store = TargetStore::open(&path)?;

        let name = explicit_name
            .or_else(|| store.current_target())
            .unwrap_or(defaults::TARGET_NAME)
            .to_string();

        let entry = store
            .get(&name)
            .ok_or_else(|| VraError::TargetNotFound(Self::not_found_message(&name, &store)))?;

        debug!("Using target '{}' from {}", name, store.path().display());
        Self::from_entry(&name, entry, store.path().to_path_buf())
    }

    /// Build a target from an environment map; `None` when `VRA_SERVER` is unset
    pub fn from_env_map(vars: &HashMap<String, String>) -> Option<Target> {
        let server = vars.get(env_vars::SERVER)?.clone();
        let get = |key: &str| vars.get(key).filter(|v| !v.is_empty()).cloned();

        Some(Target {
            name: "environment".to_string(),
            server,
            domain: get(env_vars::DOMAIN),
            username: get(env_vars::USERNAME),
            password: get(env_vars::PASSWORD),
            api_token: get(env_vars::API_TOKEN),
            access_token: get(env_vars::ACCESS_TOKEN),
            source: TargetSource::Environment,
        })
    }

    /// Build a target from a configuration file entry
    pub fn from_entry(name: &str, entry: &TargetEntry, path: PathBuf) -> Result<Target> {
        let server = entry.server.clone().ok_or_else(|| {
            VraError::Config(format!(
                "Target '{}' has no server configured in {}",
                name,
                path.display()
            ))
        })?;

        Ok(Target {
            name: name.to_string(),
            server,
            domain: entry.domain.clone(),
            username: entry.username.clone(),
            password: entry.password.clone(),
            api_token: entry.api_token.clone(),
            access_token: entry.access_token.clone(),
            source: TargetSource::File(path),
        })
    }

    /// Base URL for API requests. A bare hostname gets an https scheme;
    /// an explicit scheme (used by tests against mock servers) is kept.
    pub fn base_url(&self) -> String {
        let url = if self.server.contains("://") {
            self.server.clone()
        } else {
            format!("https://{}", self.server)
        };
        url.trim_end_matches('/').to_string()
    }

    /// Hostname part of the server value, without scheme or port
    pub fn host(&self) -> &str {
        let without_scheme = match self.server.find("://") {
            Some(idx) => &self.server[idx + 3..],
            None => self.server.as_str(),
        };
        without_scheme
            .split('/')
            .next()
            .unwrap_or(without_scheme)
            .split(':')
            .next()
            .unwrap_or(without_scheme)
    }

    /// Whether this target is the fixed cloud-hosted multi-tenant endpoint
    pub fn is_cloud(&self) -> bool {
        self.host() == defaults::CLOUD_HOST
    }

    /// Generate helpful error message when a target profile is not found
    fn not_found_message(name: &str, store: &TargetStore) -> String {
        let names = store.names();
        let known = if names.is_empty() {
            "none".to_string()
        } else {
            names.join(", ")
        };

        format!(
            "No target '{}' found. Configure one using one of:\n\
             \n\
             1. Config command:    vractl config set-target {} --server <HOST> ...\n\
             2. Environment vars:  export {}=<HOST> (also: {}, {}, {}, {})\n\
             \n\
             Config file: {}\n\
             Known targets: {}",
            name,
            name,
            env_vars::SERVER,
            env_vars::USERNAME,
            env_vars::PASSWORD,
            env_vars::API_TOKEN,
            env_vars::DOMAIN,
            store.path().display(),
            known
        )
    }
}
