//! `tls init` command - scaffold a new project
//!
//! Idempotent: safe to run multiple times, never overwrites existing files.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use telescope_core::config::CONFIG_FILE;
use telescope_core::error::Result;
use telescope_core::init::Initializer;

/// Execute the init command
pub fn execute(cli: &Cli, path: &Path) -> Result<()> {
    let report = Initializer::new().execute(path)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "status": "ok",
                "root": path.display().to_string(),
                "created": report
                    .created_paths
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>(),
                "gitignore_updated": report.gitignore_updated,
                "git_initialized": report.git_initialized,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !report.created_paths.is_empty() {
                println!("Created:");
                for created in &report.created_paths {
                    println!("  {}", created.display());
                }
            }
            if report.gitignore_updated {
                println!("Updated .gitignore");
            }
            if report.git_initialized {
                println!("Initialized git repository");
            }

            if !cli.quiet {
                println!();
                println!("Project initialized at {}", path.display());
                println!();
                println!("Next steps:");
                println!("  1. Edit {CONFIG_FILE} to configure your models");
                println!("  2. Run `tls run` to execute benchmarks");
            }
        }
    }

    Ok(())
}
