//! publication-io CLI

use anyhow::Result;
use clap::Parser;
use publication_io::cli::env::run_env;
use publication_io::cli::save::run_save;
use publication_io::cli::yaml::run_yaml;
use publication_io::cli::{Cli, Command};
use publication_io::config::{ConfigLoader, ConfigPaths};
use publication_io::env::ProcessEnv;
use publication_io::error::Error;
use publication_io::format::{OutputFormat, render};
use publication_io::io::load_publication_from;
use publication_io::logging::{LogTarget, init_logging};
use std::io::Write;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&LogTarget::parse(&cli.log), cli.verbose) {
        eprintln!("error: failed to initialize logging: {e:#}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        error!(error = %e, "Command failed");
        eprintln!("error: {e:#}");
        std::process::exit(exit_code(&e));
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut paths = ConfigPaths::discover();
    if let Some(ref config) = cli.config {
        paths = paths.with_file(config);
    }
    let mut loader = ConfigLoader::load_with_paths(paths)?;
    for (tier, path) in loader.sources() {
        debug!(tier = %tier, path = %path.display(), "Using settings file");
    }

    if let Some(ref publication) = cli.publication {
        loader.settings_mut().paths.publication = publication.into();
    }
    let settings = loader.into_settings();

    let stdout = std::io::stdout();
    match cli.command {
        Command::Publication => {
            let content = load_publication_from(&settings.paths.publication)?;
            let mut out = stdout.lock();
            out.write_all(content.as_bytes())?;
            out.flush()?;
        }
        Command::Yaml(args) => run_yaml(&args, stdout.lock())?,
        Command::Env(args) => run_env(&args, &settings, &mut ProcessEnv, stdout.lock())?,
        Command::Save(args) => run_save(&args, std::io::stdin().lock())?,
        Command::Settings => {
            let mut out = stdout.lock();
            out.write_all(render(&settings, OutputFormat::Yaml)?.as_bytes())?;
        }
    }

    Ok(())
}

/// Map library errors to their exit codes; anything else exits with 1.
fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .map(|e| e.code().exit_code())
        .unwrap_or(1)
}
