//! Settings loader with tier-based merging.
//!
//! Loads settings from multiple tiers and merges them field-by-field.

use super::merge::deep_merge_all;
use super::types::Settings;
use crate::io::load_yaml_config;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name of the project-level settings file.
pub const PROJECT_CONFIG_FILE: &str = "publication-io.yaml";

/// File name of the user-level settings file.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Configuration tier priority (lowest to highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigTier {
    /// Embedded defaults (lowest priority)
    Defaults = 0,
    /// Project-level settings (./publication-io.yaml)
    Project = 1,
    /// User-level settings (<config dir>/publication-io/config.yaml)
    User = 2,
    /// Environment variables (highest priority)
    Environment = 3,
}

impl std::fmt::Display for ConfigTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigTier::Defaults => write!(f, "defaults"),
            ConfigTier::Project => write!(f, "project"),
            ConfigTier::User => write!(f, "user"),
            ConfigTier::Environment => write!(f, "environment"),
        }
    }
}

/// Paths for each configuration tier.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// Explicit settings file, replaces the project and user tiers
    pub explicit_file: Option<PathBuf>,
    /// Directory holding publication-io.yaml
    pub project_dir: Option<PathBuf>,
    /// Directory holding the user config.yaml
    pub user_dir: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover configuration paths from environment and defaults.
    pub fn discover() -> Self {
        let explicit_file = std::env::var("PUBLICATION_IO_CONFIG")
            .ok()
            .map(PathBuf::from);

        // Project dir: PUBLICATION_IO_PROJECT_DIR or $CWD
        let project_dir = std::env::var("PUBLICATION_IO_PROJECT_DIR")
            .ok()
            .map(PathBuf::from)
            .or_else(|| Some(PathBuf::from(".")));

        // User dir: PUBLICATION_IO_USER_DIR or <config dir>/publication-io
        let user_dir = std::env::var("PUBLICATION_IO_USER_DIR")
            .ok()
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|d| d.join("publication-io")));

        Self {
            explicit_file,
            project_dir,
            user_dir,
        }
    }

    /// Create paths with explicit directories.
    pub fn with_dirs(project_dir: Option<PathBuf>, user_dir: Option<PathBuf>) -> Self {
        Self {
            explicit_file: None,
            project_dir,
            user_dir,
        }
    }

    /// Use a single explicit settings file.
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.explicit_file = Some(file.into());
        self
    }

    pub fn project_file(&self) -> Option<PathBuf> {
        self.project_dir.as_ref().map(|d| d.join(PROJECT_CONFIG_FILE))
    }

    pub fn user_file(&self) -> Option<PathBuf> {
        self.user_dir.as_ref().map(|d| d.join(USER_CONFIG_FILE))
    }
}

/// Settings loader that handles tier-based merging.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Paths for each tier
    pub paths: ConfigPaths,
    settings: Settings,
    /// Files that contributed to the settings, in merge order
    sources: Vec<(ConfigTier, PathBuf)>,
}

impl ConfigLoader {
    /// Load settings from all tiers with proper merging.
    pub fn load() -> Result<Self> {
        Self::load_with_paths(ConfigPaths::discover())
    }

    /// Load settings with explicit paths.
    pub fn load_with_paths(paths: ConfigPaths) -> Result<Self> {
        let mut layers: Vec<Value> = Vec::new();
        let mut sources = Vec::new();

        // Tier 1: Defaults (embedded)
        layers.push(serde_json::to_value(Settings::default())?);

        if let Some(ref explicit) = paths.explicit_file {
            // An explicit file must load; it stands in for the project and user tiers
            layers.push(read_tier_file(explicit).with_context(|| {
                format!("failed to load settings file {}", explicit.display())
            })?);
            sources.push((ConfigTier::Project, explicit.clone()));
        } else {
            // Tier 2: Project settings
            if let Some(file) = paths.project_file() {
                push_discovered(ConfigTier::Project, file, &mut layers, &mut sources);
            }

            // Tier 3: User settings
            if let Some(file) = paths.user_file() {
                push_discovered(ConfigTier::User, file, &mut layers, &mut sources);
            }
        }

        let merged = deep_merge_all(layers);
        let mut settings: Settings =
            serde_json::from_value(merged).context("invalid settings after merging tiers")?;

        // Tier 4: Environment variable overrides
        Self::apply_env_overrides(&mut settings);

        Ok(Self {
            paths,
            settings,
            sources,
        })
    }

    /// Apply environment variable overrides to settings.
    fn apply_env_overrides(settings: &mut Settings) {
        if let Ok(publication) = std::env::var("PUBLICATION_IO_PUBLICATION") {
            settings.paths.publication = PathBuf::from(publication);
        }

        if let Ok(env_file) = std::env::var("PUBLICATION_IO_ENV_FILE") {
            settings.paths.env_file = PathBuf::from(env_file);
        }

        if let Ok(var) = std::env::var("PUBLICATION_IO_REQUIRED_VAR") {
            settings.env.required_vars = var
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }

    /// Get the loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get mutable access to the settings.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Consume the loader and return the settings.
    pub fn into_settings(self) -> Settings {
        self.settings
    }

    /// Files that were merged, lowest tier first.
    pub fn sources(&self) -> &[(ConfigTier, PathBuf)] {
        &self.sources
    }
}

fn read_tier_file(path: &Path) -> Result<Value> {
    let mapping = load_yaml_config(path)?;
    Ok(serde_json::to_value(mapping)?)
}

/// Load a discovered tier file. Missing files are skipped silently,
/// unreadable or malformed ones with a warning.
fn push_discovered(
    tier: ConfigTier,
    file: PathBuf,
    layers: &mut Vec<Value>,
    sources: &mut Vec<(ConfigTier, PathBuf)>,
) {
    if !file.exists() {
        return;
    }
    match read_tier_file(&file) {
        Ok(value) => {
            debug!(tier = %tier, path = %file.display(), "Loaded settings tier");
            layers.push(value);
            sources.push((tier, file));
        }
        Err(e) => {
            warn!(tier = %tier, path = %file.display(), error = %e, "Skipping settings tier");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_paths_discover() {
        let paths = ConfigPaths::discover();
        assert!(paths.project_dir.is_some());
        // user_dir may or may not exist depending on environment
    }

    #[test]
    fn test_load_defaults_only() {
        // Create empty temp dirs so no config files are found
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::with_dirs(
            Some(temp.path().join("project")),
            Some(temp.path().join("user")),
        );

        let loader = ConfigLoader::load_with_paths(paths).unwrap();

        assert!(loader.sources().is_empty());
        assert!(loader.settings().env.override_existing);
    }

    #[test]
    fn test_malformed_discovered_file_is_skipped() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(PROJECT_CONFIG_FILE), "paths: [unclosed").unwrap();

        let paths = ConfigPaths::with_dirs(Some(temp.path().to_path_buf()), None);
        let loader = ConfigLoader::load_with_paths(paths).unwrap();

        assert!(loader.sources().is_empty());
    }

    #[test]
    fn test_malformed_explicit_file_is_fatal() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("settings.yaml");
        std::fs::write(&file, "paths: [unclosed").unwrap();

        let paths = ConfigPaths::default().with_file(&file);
        assert!(ConfigLoader::load_with_paths(paths).is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_fatal() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::default().with_file(temp.path().join("nope.yaml"));
        assert!(ConfigLoader::load_with_paths(paths).is_err());
    }

    #[test]
    fn test_tier_ordering() {
        assert!(ConfigTier::Defaults < ConfigTier::Project);
        assert!(ConfigTier::Project < ConfigTier::User);
        assert!(ConfigTier::User < ConfigTier::Environment);
        assert_eq!(ConfigTier::User.to_string(), "user");
    }
}
