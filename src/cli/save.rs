//! Save subcommand: write text to a file with an optional header.

use crate::io::save_text_to_file;
use anyhow::{Context, Result};
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

/// Arguments for the save subcommand
#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Destination file; missing parent directories are created
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Header written above a `# ====` separator
    #[arg(long)]
    pub header: Option<String>,

    /// Text to write (default: read from stdin)
    #[arg(short, long)]
    pub text: Option<String>,
}

/// Run the save command, reading the body from `input` when `--text` is absent.
pub fn run_save(args: &SaveArgs, input: impl Read) -> Result<()> {
    let text = match &args.text {
        Some(text) => text.clone(),
        None => read_all(input)?,
    };
    save_text_to_file(&text, &args.path, args.header.as_deref())?;
    Ok(())
}

fn read_all(mut input: impl Read) -> Result<String> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("failed to read text from stdin")?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_save_from_input() {
        let temp = TempDir::new().unwrap();
        let args = SaveArgs {
            path: temp.path().join("nested/out.md"),
            header: None,
            text: None,
        };

        run_save(&args, "from stdin".as_bytes()).unwrap();

        let saved = std::fs::read_to_string(temp.path().join("nested/out.md")).unwrap();
        assert_eq!(saved, "from stdin");
    }

    #[test]
    fn test_run_save_text_wins_over_input() {
        let temp = TempDir::new().unwrap();
        let args = SaveArgs {
            path: temp.path().join("out.md"),
            header: Some("Summary".to_string()),
            text: Some("body".to_string()),
        };

        run_save(&args, "ignored".as_bytes()).unwrap();

        let saved = std::fs::read_to_string(temp.path().join("out.md")).unwrap();
        assert!(saved.starts_with("Summary\n\n# ="));
        assert!(saved.ends_with("\n\nbody"));
    }
}
