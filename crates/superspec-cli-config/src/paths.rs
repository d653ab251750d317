// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Project root discovery.

use std::path::{Path, PathBuf};

/// Directory holding SuperSpec state inside a project root.
pub const SUPERSPEC_DIR: &str = "superspec";

/// Project configuration file name inside [`SUPERSPEC_DIR`].
pub const PROJECT_FILE: &str = "project.yaml";

/// Path of the project file relative to the project root, for display.
pub const PROJECT_FILE_DISPLAY: &str = "superspec/project.yaml";

/// Location of the project file for a given project root.
pub fn project_file(root: &Path) -> PathBuf {
	root.join(SUPERSPEC_DIR).join(PROJECT_FILE)
}

/// Returns true when `dir` contains the marker file.
pub fn is_project_root(dir: &Path) -> bool {
	project_file(dir).exists()
}

/// Walk upward from `start` looking for a directory containing
/// `superspec/project.yaml`.
///
/// The walk resolves `start` to an absolute, symlink-free path first and
/// then visits each real parent, so it visits at most one directory per path
/// component and always stops at the filesystem root. Returns `None` when no
/// ancestor carries the marker.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
	let start = resolve_start(start);

	for dir in start.ancestors() {
		tracing::trace!(dir = %dir.display(), "checking for project file");
		if is_project_root(dir) {
			tracing::debug!(root = %dir.display(), "found project root");
			return Some(dir.to_path_buf());
		}
	}

	tracing::debug!(start = %start.display(), "no project root found");
	None
}

fn resolve_start(start: &Path) -> PathBuf {
	if let Ok(canonical) = start.canonicalize() {
		return canonical;
	}

	// The directory may have been removed underneath us; fall back to an
	// absolute path so `ancestors` still reaches the root.
	if start.is_absolute() {
		start.to_path_buf()
	} else {
		std::env::current_dir()
			.map(|cwd| cwd.join(start))
			.unwrap_or_else(|_| start.to_path_buf())
	}
}
