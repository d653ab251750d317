// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The settings menu loop.
//!
//! Each pass renders the current review settings, asks for an action,
//! applies it to the owned [`ProjectConfig`] and writes the file before the
//! next render. There is no batching: every accepted change is persisted.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use superspec_cli_config::{
	save, ProjectConfig, Provider, ReviewConfig, ReviewSide, PROJECT_FILE_DISPLAY,
};

use crate::error::Result;
use crate::prompt::{Choice, Prompter, SelectRequest};
use crate::ui;

/// Reason shown on the provider entries while review is switched off.
pub const ENABLE_FIRST: &str = "Enable review first";

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
	Toggle,
	Frontend,
	Backend,
	Exit,
}

impl MenuAction {
	pub fn as_str(self) -> &'static str {
		match self {
			MenuAction::Toggle => "toggle",
			MenuAction::Frontend => "frontend",
			MenuAction::Backend => "backend",
			MenuAction::Exit => "exit",
		}
	}
}

impl fmt::Display for MenuAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
	Rendering,
	AwaitingMenuChoice,
	AwaitingSubChoice(ReviewSide),
	Exiting,
}

/// Build the main menu for the current review settings.
pub fn main_menu(review: &ReviewConfig) -> SelectRequest<MenuAction> {
	let (toggle_name, toggle_description) = if review.enabled {
		(
			"🔴 Disable External AI Review",
			"Turn off external AI code review",
		)
	} else {
		(
			"🟢 Enable External AI Review",
			"Turn on external AI code review",
		)
	};
	let locked = !review.enabled;

	SelectRequest::new("What would you like to configure?")
		.choice(Choice::new(toggle_name, MenuAction::Toggle).description(toggle_description))
		.choice(
			Choice::new("🎨 Configure Frontend Review", MenuAction::Frontend)
				.description(format!("Current: {}", review.frontend.provider))
				.disabled_if(locked, ENABLE_FIRST),
		)
		.choice(
			Choice::new("⚙️  Configure Backend Review", MenuAction::Backend)
				.description(format!("Current: {}", review.backend.provider))
				.disabled_if(locked, ENABLE_FIRST),
		)
		.choice(Choice::new("← Exit", MenuAction::Exit))
}

/// Build the provider picker for one side, defaulted to its current provider.
pub fn provider_menu(side: ReviewSide, current: Provider) -> SelectRequest<Provider> {
	let request = match side {
		ReviewSide::Frontend => SelectRequest::new("Select frontend review provider:")
			.choice(
				Choice::new("Gemini", Provider::Gemini)
					.description("Google Gemini (recommended for UI/UX)"),
			)
			.choice(Choice::new("Codex", Provider::Codex).description("OpenAI Codex"))
			.choice(Choice::new("None", Provider::None).description("Skip frontend review")),
		ReviewSide::Backend => SelectRequest::new("Select backend review provider:")
			.choice(
				Choice::new("Codex", Provider::Codex)
					.description("OpenAI Codex (recommended for logic/API)"),
			)
			.choice(Choice::new("Gemini", Provider::Gemini).description("Google Gemini"))
			.choice(Choice::new("None", Provider::None).description("Skip backend review")),
	};
	request.default_value(current)
}

/// Owns the project document for the duration of the menu loop.
pub struct SettingsController<P, W> {
	root: PathBuf,
	config: ProjectConfig,
	prompter: P,
	out: W,
}

impl<P: Prompter, W: Write> SettingsController<P, W> {
	pub fn new(root: impl Into<PathBuf>, config: ProjectConfig, prompter: P, out: W) -> Self {
		Self {
			root: root.into(),
			config,
			prompter,
			out,
		}
	}

	/// Run until the user picks exit, returning the final document.
	pub fn run(mut self) -> Result<ProjectConfig> {
		writeln!(self.out, "{}", ui::banner())?;
		writeln!(self.out)?;

		let mut state = State::Rendering;
		while state != State::Exiting {
			state = self.step(state)?;
		}

		writeln!(
			self.out,
			"{}",
			ui::muted(&format!("Settings saved to {PROJECT_FILE_DISPLAY}"))
		)?;
		writeln!(self.out)?;
		Ok(self.config)
	}

	fn step(&mut self, state: State) -> Result<State> {
		let next = match state {
			State::Rendering => {
				self.render()?;
				State::AwaitingMenuChoice
			}
			State::AwaitingMenuChoice => {
				let action = self.prompter.select(&main_menu(&self.config.review))?;
				match action {
					MenuAction::Toggle => {
						self.toggle_review()?;
						State::Rendering
					}
					MenuAction::Frontend | MenuAction::Backend if !self.config.review.enabled => {
						tracing::warn!(%action, "provider menu chosen while review is disabled");
						State::AwaitingMenuChoice
					}
					MenuAction::Frontend => State::AwaitingSubChoice(ReviewSide::Frontend),
					MenuAction::Backend => State::AwaitingSubChoice(ReviewSide::Backend),
					MenuAction::Exit => State::Exiting,
				}
			}
			State::AwaitingSubChoice(side) => {
				let current = self.config.review.target(side).provider;
				let provider = self.prompter.select(&provider_menu(side, current))?;
				self.set_provider(side, provider)?;
				State::Rendering
			}
			State::Exiting => State::Exiting,
		};
		Ok(next)
	}

	fn render(&mut self) -> Result<()> {
		let review = &self.config.review;
		let out = &mut self.out;

		writeln!(out, "{}", ui::section_header("Current Review Settings", "⚙️"))?;
		writeln!(out)?;

		let status = if review.enabled {
			ui::success("✓ Enabled")
		} else {
			ui::muted("✗ Disabled")
		};
		writeln!(out, "{}", ui::key_value("External AI Review", &status))?;
		writeln!(out)?;

		if review.enabled {
			let targets = [("  Frontend:", &review.frontend), ("  Backend:", &review.backend)];
			for (label, target) in targets {
				writeln!(out, "{}", ui::heading(label))?;
				writeln!(
					out,
					"{}",
					ui::key_value("    Provider", &ui::primary(target.provider.as_str()))
				)?;
				writeln!(out, "{}", ui::key_value("    Model", &ui::muted(&target.model)))?;
				writeln!(out)?;
			}
		}

		Ok(())
	}

	fn toggle_review(&mut self) -> Result<()> {
		self.config.review.enabled = !self.config.review.enabled;
		self.persist()?;
		tracing::info!(enabled = self.config.review.enabled, "toggled external review");

		let message = if self.config.review.enabled {
			ui::success("✓ External AI Review enabled")
		} else {
			ui::muted("✗ External AI Review disabled")
		};
		self.confirmation(&message)
	}

	fn set_provider(&mut self, side: ReviewSide, provider: Provider) -> Result<()> {
		let target = self.config.review.target_mut(side);
		target.select_provider(provider);
		tracing::info!(%side, %provider, model = %target.model, "updated review provider");
		self.persist()?;

		let label = match side {
			ReviewSide::Frontend => "Frontend",
			ReviewSide::Backend => "Backend",
		};
		self.confirmation(&ui::success(&format!("✓ {label} provider set to: {provider}")))
	}

	fn persist(&self) -> Result<()> {
		save(&self.root, &self.config)?;
		Ok(())
	}

	fn confirmation(&mut self, message: &str) -> Result<()> {
		writeln!(self.out)?;
		writeln!(self.out, "{message}")?;
		writeln!(self.out)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use superspec_cli_config::{ReviewTarget, CODEX_MODEL, GEMINI_MODEL};

	#[test]
	fn test_main_menu_locks_providers_when_disabled() {
		let menu = main_menu(&ReviewConfig::default());
		let values: Vec<_> = menu.choices.iter().map(|c| c.value).collect();
		assert_eq!(
			values,
			[
				MenuAction::Toggle,
				MenuAction::Frontend,
				MenuAction::Backend,
				MenuAction::Exit
			]
		);

		assert!(menu.find(MenuAction::Toggle).unwrap().is_enabled());
		assert_eq!(
			menu.find(MenuAction::Frontend).unwrap().disabled.as_deref(),
			Some(ENABLE_FIRST)
		);
		assert_eq!(
			menu.find(MenuAction::Backend).unwrap().disabled.as_deref(),
			Some(ENABLE_FIRST)
		);
		assert!(menu.find(MenuAction::Exit).unwrap().is_enabled());
		assert!(menu.find(MenuAction::Toggle).unwrap().name.contains("Enable"));
	}

	#[test]
	fn test_main_menu_unlocks_when_enabled() {
		let review = ReviewConfig {
			enabled: true,
			..ReviewConfig::default()
		};
		let menu = main_menu(&review);
		assert!(menu.choices.iter().all(Choice::is_enabled));
		assert!(menu.find(MenuAction::Toggle).unwrap().name.contains("Disable"));
		assert_eq!(
			menu.find(MenuAction::Frontend).unwrap().description.as_deref(),
			Some("Current: gemini")
		);
		assert_eq!(
			menu.find(MenuAction::Backend).unwrap().description.as_deref(),
			Some("Current: codex")
		);
	}

	#[test]
	fn test_provider_menu_order_per_side() {
		let front: Vec<_> = provider_menu(ReviewSide::Frontend, Provider::Gemini)
			.choices
			.iter()
			.map(|c| c.value)
			.collect();
		assert_eq!(front, [Provider::Gemini, Provider::Codex, Provider::None]);

		let back: Vec<_> = provider_menu(ReviewSide::Backend, Provider::Codex)
			.choices
			.iter()
			.map(|c| c.value)
			.collect();
		assert_eq!(back, [Provider::Codex, Provider::Gemini, Provider::None]);
	}

	#[test]
	fn test_provider_menu_defaults_to_current() {
		let menu = provider_menu(ReviewSide::Backend, Provider::None);
		assert_eq!(menu.default, Some(Provider::None));
		assert_eq!(menu.initial_index(), Some(2));
	}

	#[test]
	fn test_menu_action_display() {
		assert_eq!(MenuAction::Toggle.to_string(), "toggle");
		assert_eq!(MenuAction::Exit.to_string(), "exit");
	}

	#[test]
	fn test_default_targets() {
		let review = ReviewConfig::default();
		assert_eq!(review.frontend, ReviewTarget::new(Provider::Gemini, GEMINI_MODEL));
		assert_eq!(review.backend, ReviewTarget::new(Provider::Codex, CODEX_MODEL));
	}
}
