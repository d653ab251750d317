// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `superspec setting`: interactive editing of the external review settings
//! in `superspec/project.yaml`.

pub mod controller;
pub mod error;
pub mod prompt;
pub mod terminal;
pub mod ui;

use std::io::Write;
use std::path::Path;

use superspec_cli_config::{open_project, ProjectConfig};

pub use controller::{main_menu, provider_menu, MenuAction, SettingsController, ENABLE_FIRST};
pub use error::{PromptError, Result, SettingError};
pub use prompt::{Choice, Prompter, ScriptedPrompter, SelectRequest};
pub use terminal::TerminalPrompter;

/// Find the project above `start`, load it and run the settings menu.
///
/// Fails with a not-initialized error before anything is loaded or printed
/// when no project root exists.
pub fn run<P, W>(start: &Path, prompter: P, out: W) -> Result<ProjectConfig>
where
	P: Prompter,
	W: Write,
{
	let (root, config) = open_project(start)?;
	tracing::debug!(root = %root.display(), "starting settings editor");
	SettingsController::new(root, config, prompter, out).run()
}

/// Print the message shown when no project root was found.
pub fn print_not_initialized(mut out: impl Write) -> std::io::Result<()> {
	writeln!(
		out,
		"{}",
		ui::error("Error: SuperSpec not initialized in this directory.")
	)?;
	writeln!(out, "{}", ui::muted("Run `superspec init` first."))
}
