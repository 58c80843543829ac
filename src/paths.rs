//! Fixed file locations and path resolution.
//!
//! Every path handed to the I/O helpers goes through [`resolve`] before it is
//! checked for existence, so relative inputs are anchored to the current
//! directory. `..` components are left for the OS to resolve, since a
//! lexical collapse walks out of the wrong directory when a component is a
//! symlink.

use std::path::{Path, PathBuf};

/// Publication source file read by [`crate::io::load_publication`].
pub const PUBLICATION_PATH: &str = "data/publication.md";

/// Dotenv file read by [`crate::env::load_env`].
pub const ENV_PATH: &str = ".env";

/// Credential that must be present after loading the dotenv file.
pub const REQUIRED_ENV_VAR: &str = "OPENAI_API_KEY";

/// Make a path absolute without touching the filesystem.
///
/// Relative paths are joined to the current working directory. If the
/// working directory cannot be determined, the path is returned as given.
pub fn resolve(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
