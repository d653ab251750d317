// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration error types.

use std::path::PathBuf;

/// Errors that can occur while locating, loading or saving the project file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// No ancestor of the starting directory contains `superspec/project.yaml`
	#[error("SuperSpec not initialized in {}", .start.display())]
	NotInitialized { start: PathBuf },

	/// I/O error reading the project file
	#[error("failed to read {}: {source}", .path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// YAML parsing error
	#[error("YAML parse error in {}: {source}", .path.display())]
	YamlParse {
		path: PathBuf,
		#[source]
		source: serde_yaml::Error,
	},

	/// I/O error writing the project file
	#[error("failed to write {}: {source}", .path.display())]
	Write {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

impl ConfigError {
	/// Create a not-initialized error for the directory the walk started from
	pub fn not_initialized(start: impl Into<PathBuf>) -> Self {
		Self::NotInitialized {
			start: start.into(),
		}
	}

	/// True when no project root could be found.
	pub fn is_not_initialized(&self) -> bool {
		matches!(self, Self::NotInitialized { .. })
	}
}
