//! On-disk target profile store
//!
//! Profiles live in a single YAML file keyed by name under the `target`
//! namespace. The connection manager writes refreshed tokens back through
//! this store so later invocations skip re-authentication.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::error::{Result, VraError};

/// One profile entry under the `target.<name>` namespace
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TargetEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, rename = "apitoken", skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    #[serde(default, rename = "accesstoken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// Root document of the configuration file
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ConfigDocument {
    /// Profile used when `--target` is not given
    #[serde(
        default,
        rename = "currentTarget",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_target: Option<String>,
    #[serde(default)]
    pub target: BTreeMap<String, TargetEntry>,
}

/// Loaded configuration file plus the path it came from
#[derive(Debug, Clone)]
pub struct TargetStore {
    path: PathBuf,
    document: ConfigDocument,
}

impl TargetStore {
    /// Default configuration file path (~/.vractl.yaml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(defaults::CONFIG_FILE_NAME))
    }

    /// Open the store at the given path; a missing file yields an empty store
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No configuration file at {}, starting empty", path.display());
            return Ok(Self {
                path: path.to_path_buf(),
                document: ConfigDocument::default(),
            });
        }

        let content = fs::read_to_string(path)?;
        let document: ConfigDocument = serde_yml::from_str(&content).map_err(|e| {
            VraError::Config(format!(
                "Could not parse configuration file {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!(
            "Loaded {} target(s) from {}",
            document.target.len(),
            path.display()
        );
        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    /// Write the store back to its file
    pub fn save(&self) -> Result<()> {
        let content = serde_yml::to_string(&self.document)?;
        fs::write(&self.path, content)?;
        debug!("Wrote configuration file {}", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, name: &str) -> Option<&TargetEntry> {
        self.document.target.get(name)
    }

    pub fn set(&mut self, name: &str, entry: TargetEntry) {
        self.document.target.insert(name.to_string(), entry);
    }

    /// Remove a profile; returns whether it existed
    pub fn remove(&mut self, name: &str) -> bool {
        if self.document.current_target.as_deref() == Some(name) {
            self.document.current_target = None;
        }
        self.document.target.remove(name).is_some()
    }

    /// Profile names in stable (sorted) order
    pub fn names(&self) -> Vec<&str> {
        self.document.target.keys().map(String::as_str).collect()
    }

    pub fn current_target(&self) -> Option<&str> {
        self.document.current_target.as_deref()
    }

    pub fn set_current_target(&mut self, name: &str) {
        self.document.current_target = Some(name.to_string());
    }

    /// Update the token fields of one profile, leaving everything else as-is.
    /// Creates the entry if the profile does not exist yet.
    pub fn update_tokens(
        &mut self,
        name: &str,
        access_token: Option<&str>,
        api_token: Option<&str>,
    ) {
        let entry = self.document.target.entry(name.to_string()).or_default();
        if let Some(token) = access_token {
            entry.access_token = Some(token.to_string());
        }
        if let Some(token) = api_token {
            entry.api_token = Some(token.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_entry() -> TargetEntry {
        TargetEntry {
            server: Some("vra.corp.local".to_string()),
            domain: Some("corp.local".to_string()),
            username: Some("admin".to_string()),
            password: Some("secret".to_string()),
            api_token: Some("refresh-123".to_string()),
            access_token: Some("access-456".to_string()),
        }
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = TargetStore::open(&dir.path().join("none.yaml")).unwrap();
        assert!(store.names().is_empty());
        assert!(store.current_target().is_none());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut store = TargetStore::open(&path).unwrap();
        store.set("default", sample_entry());
        store.set_current_target("default");
        store.save().unwrap();

        let reloaded = TargetStore::open(&path).unwrap();
        assert_eq!(reloaded.current_target(), Some("default"));
        assert_eq!(reloaded.get("default"), Some(&sample_entry()));
    }

    #[test]
    fn test_yaml_field_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut store = TargetStore::open(&path).unwrap();
        store.set("prod", sample_entry());
        store.save().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("target:"));
        assert!(content.contains("prod:"));
        assert!(content.contains("apitoken: refresh-123"));
        assert!(content.contains("accesstoken: access-456"));
        // Rust field names must not leak into the file
        assert!(!content.contains("api_token"));
        assert!(!content.contains("access_token"));
    }

    #[test]
    fn test_update_tokens_preserves_other_fields_and_profiles() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut store = TargetStore::open(&path).unwrap();
        store.set("prod", sample_entry());
        store.set(
            "dev",
            TargetEntry {
                server: Some("vra-dev.corp.local".to_string()),
                ..Default::default()
            },
        );

        store.update_tokens("prod", Some("new-access"), Some("new-refresh"));
        store.save().unwrap();

        let reloaded = TargetStore::open(&path).unwrap();
        let prod = reloaded.get("prod").unwrap();
        assert_eq!(prod.access_token.as_deref(), Some("new-access"));
        assert_eq!(prod.api_token.as_deref(), Some("new-refresh"));
        // Untouched fields survive
        assert_eq!(prod.username.as_deref(), Some("admin"));
        assert_eq!(prod.password.as_deref(), Some("secret"));
        // Other profiles survive
        assert_eq!(
            reloaded.get("dev").unwrap().server.as_deref(),
            Some("vra-dev.corp.local")
        );
    }

    #[test]
    fn test_update_tokens_creates_missing_entry() {
        let dir = tempdir().unwrap();
        let mut store = TargetStore::open(&dir.path().join("c.yaml")).unwrap();
        store.update_tokens("fresh", Some("tok"), None);
        let entry = store.get("fresh").unwrap();
        assert_eq!(entry.access_token.as_deref(), Some("tok"));
        assert!(entry.api_token.is_none());
    }

    #[test]
    fn test_remove_clears_current_target() {
        let dir = tempdir().unwrap();
        let mut store = TargetStore::open(&dir.path().join("c.yaml")).unwrap();
        store.set("prod", sample_entry());
        store.set_current_target("prod");

        assert!(store.remove("prod"));
        assert!(store.current_target().is_none());
        assert!(!store.remove("prod"));
    }
}
