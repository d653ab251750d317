// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Project configuration for SuperSpec.
//!
//! This crate provides:
//! - Project root discovery by walking up to `superspec/project.yaml`
//! - A typed model of the project document with back-fill for older files
//! - Loading through `serde_yaml`
//! - Saving through a fixed, comment-annotated layout

pub mod error;
pub mod model;
pub mod paths;
pub mod store;
pub mod template;

use std::path::{Path, PathBuf};

pub use error::ConfigError;
pub use model::{
	ProjectConfig, ProjectSection, Provider, ReviewConfig, ReviewSide, ReviewTarget, CODEX_MODEL,
	GEMINI_MODEL,
};
pub use paths::{find_project_root, project_file, PROJECT_FILE_DISPLAY};
pub use store::{load, save};
pub use template::render_project_yaml;

/// Locate the project root above `start` and load its document.
pub fn open_project(start: &Path) -> Result<(PathBuf, ProjectConfig), ConfigError> {
	let root = find_project_root(start).ok_or_else(|| ConfigError::not_initialized(start))?;
	let config = load(&root)?;
	Ok((root, config))
}
