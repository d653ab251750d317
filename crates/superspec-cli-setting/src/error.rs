// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io;

use superspec_cli_config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingError {
	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error("prompt failed: {0}")]
	Prompt(#[from] PromptError),

	#[error("failed to write to terminal: {0}")]
	Io(#[from] io::Error),
}

impl SettingError {
	pub fn is_not_initialized(&self) -> bool {
		matches!(self, Self::Config(e) if e.is_not_initialized())
	}

	pub fn is_interrupted(&self) -> bool {
		matches!(self, Self::Prompt(PromptError::Interrupted))
	}
}

#[derive(Error, Debug)]
pub enum PromptError {
	#[error("terminal I/O error: {0}")]
	Io(#[source] io::Error),

	#[error("prompt interrupted")]
	Interrupted,

	#[error("'{value}' is disabled: {reason}")]
	Disabled { value: String, reason: String },

	#[error("'{0}' is not one of the offered choices")]
	UnknownChoice(String),

	#[error("no selectable choices offered")]
	NoChoices,

	#[error("no scripted answer left for '{0}'")]
	Exhausted(String),
}

impl From<io::Error> for PromptError {
	fn from(err: io::Error) -> Self {
		if err.kind() == io::ErrorKind::Interrupted {
			Self::Interrupted
		} else {
			Self::Io(err)
		}
	}
}

pub type Result<T> = std::result::Result<T, SettingError>;
