//! Tool settings.
//!
//! Consolidates settings from four tiers with field-by-field YAML merging:
//! 1. **Defaults** - built in (`data/publication.md`, `.env`, `OPENAI_API_KEY`)
//! 2. **Project** - `$CWD/publication-io.yaml`
//! 3. **User** - `<config dir>/publication-io/config.yaml`
//! 4. **Environment** - `PUBLICATION_IO_*` variables
//!
//! ## Environment Variables
//! - `PUBLICATION_IO_CONFIG` - Explicit settings file (replaces project and user tiers)
//! - `PUBLICATION_IO_PROJECT_DIR` - Directory holding `publication-io.yaml` (default: `.`)
//! - `PUBLICATION_IO_USER_DIR` - User settings dir
//! - `PUBLICATION_IO_PUBLICATION` - Publication file
//! - `PUBLICATION_IO_ENV_FILE` - Dotenv file
//! - `PUBLICATION_IO_REQUIRED_VAR` - Comma-separated required variables

mod loader;
mod merge;
mod types;

pub use loader::{ConfigLoader, ConfigPaths, ConfigTier, PROJECT_CONFIG_FILE, USER_CONFIG_FILE};
pub use merge::{deep_merge, deep_merge_all};
pub use types::*;
