//! Output formatting for parsed YAML mappings and settings.

use crate::io::ConfigMapping;
use anyhow::Result;
use serde::Serialize;

/// Output format for printed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Render any serializable value in the given format.
///
/// JSON output fails for mappings with non-string keys.
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(value)?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}

/// Render a parsed mapping.
pub fn render_mapping(mapping: &ConfigMapping, format: OutputFormat) -> Result<String> {
    render(mapping, format)
}
