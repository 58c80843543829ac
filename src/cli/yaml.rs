//! Yaml subcommand: parse a YAML file and print it back.

use crate::format::{OutputFormat, render_mapping};
use crate::io::load_yaml_config;
use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the yaml subcommand
#[derive(Args, Debug)]
pub struct YamlArgs {
    /// YAML file to parse
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

pub fn run_yaml(args: &YamlArgs, mut out: impl Write) -> Result<()> {
    let mapping = load_yaml_config(&args.path)?;
    out.write_all(render_mapping(&mapping, args.format)?.as_bytes())?;
    Ok(())
}
