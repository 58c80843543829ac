//! Settings types for the publication-io tool.

use crate::env::DotenvLoader;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Effective tool settings after tier merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub env: EnvConfig,
}

/// File locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Publication source file (default: data/publication.md).
    #[serde(default = "default_publication")]
    pub publication: PathBuf,

    /// Dotenv file (default: .env).
    #[serde(default = "default_env_file")]
    pub env_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            publication: default_publication(),
            env_file: default_env_file(),
        }
    }
}

fn default_publication() -> PathBuf {
    PathBuf::from(paths::PUBLICATION_PATH)
}

fn default_env_file() -> PathBuf {
    PathBuf::from(paths::ENV_PATH)
}

/// Environment loading behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Variables that must be set and non-empty after loading the dotenv file.
    #[serde(default = "default_required_vars")]
    pub required_vars: Vec<String>,

    /// Replace already-set variables with dotenv values (default: true).
    #[serde(default = "default_override_existing")]
    pub override_existing: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            required_vars: default_required_vars(),
            override_existing: default_override_existing(),
        }
    }
}

fn default_required_vars() -> Vec<String> {
    vec![paths::REQUIRED_ENV_VAR.to_string()]
}

fn default_override_existing() -> bool {
    true
}

impl Settings {
    /// Build a dotenv loader from these settings.
    pub fn dotenv_loader(&self) -> DotenvLoader {
        DotenvLoader::new(self.paths.env_file.clone())
            .with_required(self.env.required_vars.iter().cloned())
            .override_existing(self.env.override_existing)
    }
}
