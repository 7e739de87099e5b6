//! Engine configuration.
//!
//! Link construction and user display depend on deployment details. They are
//! an explicit value handed to the renderer, never process-wide state.
use crate::l10n::Catalog;
use crate::path::{DirectoryLookup, DiskLookup, NoLookup};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILES_ROUTE: &str = "/index.php/apps/files";
pub const DEFAULT_LANGUAGE: &str = "en";
const CONFIG_DIR_NAME: &str = "arender";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Prefix for every generated link; empty when served from the host root.
    pub webroot: String,
    pub files_route: String,
    pub enable_avatars: bool,
    pub language: String,
    pub l10n_dir: Option<PathBuf>,
    /// The caller's visible files root, used for directory detection.
    pub files_root: Option<PathBuf>,
    /// uid -> display name.
    pub display_names: BTreeMap<String, String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            webroot: String::new(),
            files_route: DEFAULT_FILES_ROUTE.to_string(),
            enable_avatars: true,
            language: DEFAULT_LANGUAGE.to_string(),
            l10n_dir: None,
            files_root: None,
            display_names: BTreeMap::new(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parse engine config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("load {}", path.display()))
    }

    /// Explicit path, else the per-user config file if present, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "using per-user config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Base URL of the files app.
    pub fn files_link_base(&self) -> String {
        format!("{}{}", self.webroot.trim_end_matches('/'), self.files_route)
    }

    pub fn catalog(&self) -> Result<Catalog> {
        Catalog::for_language(&self.language, self.l10n_dir.as_deref())
    }

    pub fn directory_lookup(&self) -> Box<dyn DirectoryLookup + Send + Sync> {
        match &self.files_root {
            Some(root) => Box::new(DiskLookup::new(root.clone())),
            None => Box::new(NoLookup),
        }
    }

    pub fn display_name<'a>(&'a self, uid: &'a str) -> &'a str {
        self.display_names
            .get(uid)
            .map(String::as_str)
            .unwrap_or(uid)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_deployment() {
        let config = EngineConfig::default();
        assert_eq!(config.files_link_base(), "/index.php/apps/files");
        assert!(config.enable_avatars);
        assert_eq!(config.language, "en");
        assert_eq!(config.display_name("UserA"), "UserA");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(
            r#"{"webroot":"/cloud/","display_names":{"alice":"Alice A."}}"#,
        )
        .unwrap();
        assert_eq!(config.files_link_base(), "/cloud/index.php/apps/files");
        assert_eq!(config.display_name("alice"), "Alice A.");
        assert!(config.enable_avatars);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EngineConfig::resolve(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(format!("{err:#}").contains("absent.json"));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(EngineConfig::from_json("{\"enable_avatars\": \"yes\"}").is_err());
    }
}
