//! Dotenv loading with override semantics and required-variable checks.
//!
//! Writes to the process environment go only through [`EnvStore`], so the
//! mutation performed by a load is an explicit argument rather than hidden
//! global state. [`ProcessEnv`] is the real environment; [`MemoryEnv`] is a
//! map for callers that want to inspect a load without touching the process.

use crate::error::{Error, Format, Result};
use crate::paths;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read/write access to a set of environment variables.
///
/// Only writes and the required-variable check go through the store.
/// `${VAR}` substitution inside the dotenv file is done by `dotenvy` against
/// the real process environment, so even a [`MemoryEnv`] load reads process
/// state when the file uses substitution.
pub trait EnvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// The environment of the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        // SAFETY: callers load the environment during startup, before other
        // threads read it. Tests that use ProcessEnv run serially.
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

/// In-memory environment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv(HashMap<String, String>);

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl EnvStore for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Names of the variables touched by a load. Values are never recorded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Path of the dotenv file after resolution.
    pub path: PathBuf,
    /// Whether the file existed.
    pub file_found: bool,
    /// Variables written to the store.
    pub set: Vec<String>,
    /// Variables left untouched because they already existed.
    pub skipped: Vec<String>,
}

/// Loads a dotenv file into an [`EnvStore`] and checks required variables.
#[derive(Debug, Clone)]
pub struct DotenvLoader {
    path: PathBuf,
    required: Vec<String>,
    override_existing: bool,
}

impl Default for DotenvLoader {
    fn default() -> Self {
        Self::new(paths::ENV_PATH).require(paths::REQUIRED_ENV_VAR)
    }
}

impl DotenvLoader {
    /// Loader for `path` with no required variables and override enabled.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: Vec::new(),
            override_existing: true,
        }
    }

    /// Add a variable that must be set and non-empty after loading.
    pub fn require(mut self, var: impl Into<String>) -> Self {
        self.required.push(var.into());
        self
    }

    /// Replace the required variables.
    pub fn with_required<I, S>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = vars.into_iter().map(Into::into).collect();
        self
    }

    /// Whether file values replace variables that are already set.
    pub fn override_existing(mut self, override_existing: bool) -> Self {
        self.override_existing = override_existing;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Apply the dotenv file to `env`, then verify the required variables.
    ///
    /// A missing file is logged and treated as empty. The required-variable
    /// check runs after the load either way.
    pub fn load<E: EnvStore>(&self, env: &mut E) -> Result<LoadReport> {
        let path = paths::resolve(&self.path);
        let mut report = LoadReport {
            path: path.clone(),
            ..LoadReport::default()
        };

        match dotenvy::from_path_iter(&path) {
            Ok(iter) => {
                report.file_found = true;
                // Parse everything before mutating so a bad line leaves env untouched
                let pairs = iter
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(|e| dotenv_error(&path, e))?;
                for (key, value) in pairs {
                    if !self.override_existing && env.get(&key).is_some() {
                        report.skipped.push(key);
                        continue;
                    }
                    env.set(&key, &value);
                    report.set.push(key);
                }
                debug!(
                    path = %path.display(),
                    set = report.set.len(),
                    skipped = report.skipped.len(),
                    "Loaded dotenv file"
                );
            }
            Err(dotenvy::Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "Dotenv file not found, using existing environment");
            }
            Err(e) => return Err(dotenv_error(&path, e)),
        }

        for var in &self.required {
            match env.get(var) {
                Some(value) if !value.is_empty() => {}
                _ => return Err(Error::contract_violation(var.clone(), &path)),
            }
        }

        Ok(report)
    }
}

/// Load [`paths::ENV_PATH`] into the process environment, overriding
/// existing variables, and require [`paths::REQUIRED_ENV_VAR`].
pub fn load_env() -> Result<()> {
    DotenvLoader::default().load(&mut ProcessEnv)?;
    Ok(())
}

fn dotenv_error(path: &Path, err: dotenvy::Error) -> Error {
    match err {
        dotenvy::Error::Io(e) => Error::io("reading dotenv file", path, e),
        other => Error::parse(Format::Dotenv, path, other),
    }
}
