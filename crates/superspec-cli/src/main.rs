// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use superspec_cli_setting::{print_not_initialized, TerminalPrompter};
use tracing_subscriber::EnvFilter;

/// SuperSpec - spec-driven development workflow
#[derive(Parser, Debug)]
#[command(name = "superspec", version)]
struct Cli {
	/// Directory to start searching for superspec/project.yaml from
	#[arg(short = 'C', long, env = "SUPERSPEC_DIR", global = true)]
	directory: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
	/// Configure external AI review providers
	Setting,
}

fn main() -> anyhow::Result<ExitCode> {
	// Logs go to stderr so they never interleave with the menus on stdout
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.with_writer(io::stderr)
		.init();

	let cli = Cli::parse();

	let start = match cli.directory {
		Some(dir) => dir,
		None => std::env::current_dir()?,
	};

	match cli.command {
		Command::Setting => setting(&start),
	}
}

fn setting(start: &Path) -> anyhow::Result<ExitCode> {
	match superspec_cli_setting::run(start, TerminalPrompter::new(), io::stdout()) {
		Ok(_) => Ok(ExitCode::SUCCESS),
		Err(e) if e.is_not_initialized() => {
			tracing::debug!(start = %start.display(), "no project root found");
			print_not_initialized(io::stdout())?;
			Ok(ExitCode::FAILURE)
		}
		Err(e) if e.is_interrupted() => Ok(ExitCode::from(130)),
		Err(e) => Err(e.into()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_setting() {
		let cli = Cli::try_parse_from(["superspec", "setting"]).unwrap();
		assert_eq!(cli.command, Command::Setting);
	}

	#[test]
	fn test_parse_directory_after_subcommand() {
		let cli = Cli::try_parse_from(["superspec", "setting", "-C", "/tmp/app"]).unwrap();
		assert_eq!(cli.directory, Some(PathBuf::from("/tmp/app")));
	}

	#[test]
	fn test_setting_without_project_exits_with_failure() {
		let tmp = tempfile::TempDir::new().unwrap();

		let code = setting(tmp.path()).unwrap();
		assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));
		assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
	}

	#[test]
	fn test_subcommand_required() {
		assert!(Cli::try_parse_from(["superspec"]).is_err());
	}

	#[test]
	fn test_cli_definition_is_valid() {
		use clap::CommandFactory;
		Cli::command().debug_assert();
	}
}
