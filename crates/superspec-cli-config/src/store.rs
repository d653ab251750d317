// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Reading and writing `superspec/project.yaml`.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::model::ProjectConfig;
use crate::paths::project_file;
use crate::template::render_project_yaml;

/// Load the project document below `root`.
///
/// A missing `review` group is back-filled with defaults. Unreadable or
/// malformed files are reported as errors; no default document is
/// substituted.
pub fn load(root: &Path) -> Result<ProjectConfig, ConfigError> {
	let path = project_file(root);

	let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
		path: path.clone(),
		source,
	})?;

	let config: ProjectConfig =
		serde_yaml::from_str(&content).map_err(|source| ConfigError::YamlParse {
			path: path.clone(),
			source,
		})?;

	tracing::debug!(
		path = %path.display(),
		version = config.version,
		review_enabled = config.review.enabled,
		"loaded project config"
	);

	Ok(config)
}

/// Write `config` to the project file below `root` using the annotated layout.
pub fn save(root: &Path, config: &ProjectConfig) -> Result<(), ConfigError> {
	let path = project_file(root);
	let content = render_project_yaml(config);

	fs::write(&path, content).map_err(|source| ConfigError::Write {
		path: path.clone(),
		source,
	})?;

	tracing::debug!(path = %path.display(), "saved project config");
	Ok(())
}
