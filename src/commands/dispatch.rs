//! Command dispatch logic for tls

use std::time::Instant;

use tracing::debug;

use crate::cli::paths::resolve_root_path;
use crate::cli::{Cli, Commands};
use crate::commands;
use telescope_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path(cli.root.clone());
    debug!(root = %root.display(), elapsed = ?start.elapsed(), "resolve_root");

    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Init { path }) => {
            let target = if cli.root.is_some() && path.is_relative() {
                root.join(path)
            } else {
                path.clone()
            };
            commands::init::execute(cli, &target)
        }

        Some(Commands::Run(args)) => commands::run::execute(cli, &root, args),
    }
}

fn handle_no_command() -> Result<()> {
    println!("tls {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("A benchmarking harness for LLM chat endpoints.");
    println!();
    println!("Run `tls --help` for usage information.");
    Ok(())
}
