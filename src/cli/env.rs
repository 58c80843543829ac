//! Env subcommand: load the dotenv file and verify required variables.

use crate::config::Settings;
use crate::env::EnvStore;
use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the env subcommand
#[derive(Args, Debug)]
pub struct EnvArgs {
    /// Dotenv file (overrides settings)
    #[arg(short, long, value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Required variable; repeat for several (overrides settings)
    #[arg(short, long = "require", value_name = "VAR")]
    pub require: Vec<String>,

    /// Keep variables that are already set instead of overriding them
    #[arg(long)]
    pub no_override: bool,
}

/// Load the dotenv file into `env` and report variable names.
pub fn run_env<E: EnvStore>(
    args: &EnvArgs,
    settings: &Settings,
    env: &mut E,
    mut out: impl Write,
) -> Result<()> {
    let mut settings = settings.clone();
    if let Some(ref file) = args.env_file {
        settings.paths.env_file = file.clone();
    }
    if !args.require.is_empty() {
        settings.env.required_vars = args.require.clone();
    }
    if args.no_override {
        settings.env.override_existing = false;
    }
    let loader = settings.dotenv_loader();

    let report = loader.load(env)?;

    if !report.file_found {
        writeln!(out, "{}: not found", report.path.display())?;
    } else {
        writeln!(out, "{}: {} set", report.path.display(), report.set.len())?;
    }
    for name in &report.set {
        writeln!(out, "  set      {name}")?;
    }
    for name in &report.skipped {
        writeln!(out, "  kept     {name}")?;
    }
    for name in loader.required() {
        writeln!(out, "  required {name} ok")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MemoryEnv;
    use tempfile::TempDir;

    #[test]
    fn test_run_env_reports_names_not_values() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join(".env");
        std::fs::write(&file, "OPENAI_API_KEY=sk-secret\n").unwrap();

        let args = EnvArgs {
            env_file: Some(file),
            require: Vec::new(),
            no_override: false,
        };
        let mut env = MemoryEnv::new();
        let mut out = Vec::new();
        run_env(&args, &Settings::default(), &mut env, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("set      OPENAI_API_KEY"));
        assert!(out.contains("required OPENAI_API_KEY ok"));
        assert!(!out.contains("sk-secret"));
    }

    #[test]
    fn test_run_env_require_flag_replaces_settings() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join(".env");
        std::fs::write(&file, "ANTHROPIC_API_KEY=sk-ant\n").unwrap();

        let args = EnvArgs {
            env_file: Some(file),
            require: vec!["ANTHROPIC_API_KEY".to_string()],
            no_override: false,
        };
        let mut env = MemoryEnv::new();
        run_env(&args, &Settings::default(), &mut env, Vec::new()).unwrap();

        assert_eq!(env.get("ANTHROPIC_API_KEY").as_deref(), Some("sk-ant"));
    }
}
