//! Publication, YAML config, dotenv and text-output helpers.
//!
//! The four core operations are re-exported at the crate root:
//! [`load_publication`], [`load_yaml_config`], [`load_env`] and
//! [`save_text_to_file`].

pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod format;
pub mod io;
pub mod logging;
pub mod paths;

pub use env::load_env;
pub use error::{Error, ErrorCode, Result};
pub use io::{ConfigMapping, load_publication, load_yaml_config, save_text_to_file};
