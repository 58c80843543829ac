//! Publication, YAML and text-output file helpers.
//!
//! Each function is a single blocking file operation. File handles are scoped
//! to the call, and nothing is retried.

use crate::error::{Error, Format, Result};
use crate::paths;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::debug;

/// Untyped result of parsing a YAML file. No schema is enforced.
pub type ConfigMapping = Mapping;

/// Width of the `=` rule written under a header.
pub const SEPARATOR_WIDTH: usize = 50;

/// Load the publication from [`paths::PUBLICATION_PATH`].
pub fn load_publication() -> Result<String> {
    load_publication_from(paths::PUBLICATION_PATH)
}

/// Load a publication file verbatim.
pub fn load_publication_from(path: impl AsRef<Path>) -> Result<String> {
    let path = paths::resolve(path);
    let content = read_existing(&path, "Publication file", "reading publication file")?;
    debug!(path = %path.display(), bytes = content.len(), "Loaded publication");
    Ok(content)
}

/// Parse a YAML file into a [`ConfigMapping`].
///
/// An empty document yields an empty mapping. A document whose top level is
/// a sequence or scalar is rejected as a parse error.
pub fn load_yaml_config(path: impl AsRef<Path>) -> Result<ConfigMapping> {
    let path = paths::resolve(path);
    let content = read_existing(&path, "Configuration file", "reading configuration file")?;

    if content.trim().is_empty() {
        debug!(path = %path.display(), "YAML config is empty");
        return Ok(Mapping::new());
    }

    let value: Value =
        serde_yaml::from_str(&content).map_err(|e| Error::parse(Format::Yaml, &path, e))?;
    let mapping = match value {
        Value::Mapping(mapping) => mapping,
        Value::Null => Mapping::new(),
        other => {
            return Err(Error::parse(
                Format::Yaml,
                &path,
                format!("expected a mapping at the top level, found {}", kind_of(&other)),
            ));
        }
    };

    debug!(path = %path.display(), keys = mapping.len(), "Loaded YAML config");
    Ok(mapping)
}

/// Write `text` to `path`, optionally preceded by a header block.
///
/// Missing parent directories are created. An existing file is truncated.
pub fn save_text_to_file(text: &str, path: impl AsRef<Path>, header: Option<&str>) -> Result<()> {
    let path = paths::resolve(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io("creating directory", parent, e))?;
    }

    let body = render_with_header(text, header);
    let mut file = fs::File::create(&path).map_err(|e| Error::io("writing to file", &path, e))?;
    file.write_all(body.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| Error::io("writing to file", &path, e))?;

    debug!(path = %path.display(), bytes = body.len(), "Saved text");
    Ok(())
}

/// Build the exact file body written by [`save_text_to_file`].
///
/// With a non-empty header: `{header}\n\n# {"=" x 50}\n\n{text}`. Otherwise
/// the text is returned unchanged.
pub fn render_with_header(text: &str, header: Option<&str>) -> String {
    match header {
        Some(header) if !header.is_empty() => {
            format!("{header}\n\n# {}\n\n{text}", "=".repeat(SEPARATOR_WIDTH))
        }
        _ => text.to_string(),
    }
}

fn read_existing(path: &Path, what: &'static str, action: &'static str) -> Result<String> {
    if !path.exists() {
        return Err(Error::not_found(what, path));
    }
    fs::read_to_string(path).map_err(|e| match e.kind() {
        // Removed between the existence check and the read
        ErrorKind::NotFound => Error::not_found(what, path),
        _ => Error::io(action, path, e),
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
