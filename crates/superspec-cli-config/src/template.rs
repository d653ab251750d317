// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Annotated rendering of the project file.
//!
//! The file is not serialized generically: every save writes the same fixed
//! layout with explanatory comments, filling in current values and falling
//! back to a default literal for any known key that is absent. Keys outside
//! the known set in `workflow`, `git` and `test` are not written.

use serde_yaml::{Mapping, Value};

use crate::model::ProjectConfig;

/// A known key and the literal written when the document lacks it.
#[derive(Debug, Clone, Copy)]
pub struct KnownKey {
	pub name: &'static str,
	pub default: &'static str,
}

const fn key(name: &'static str, default: &'static str) -> KnownKey {
	KnownKey { name, default }
}

pub const WORKFLOW_KEYS: [KnownKey; 3] = [
	key("require_design", "true"),
	key("require_validation", "true"),
	key("strict_mode", "false"),
];

pub const GIT_KEYS: [KnownKey; 2] = [
	key("worktree_dir", ".worktrees"),
	key("branch_prefix", "feature/"),
];

pub const TEST_KEYS: [KnownKey; 2] = [key("command", "npm test"), key("coverage", "false")];

/// Render the full annotated document for `config`.
pub fn render_project_yaml(config: &ProjectConfig) -> String {
	let review = &config.review;
	let [require_design, require_validation, strict_mode] =
		WORKFLOW_KEYS.map(|k| known_value(&config.workflow, "workflow", k));
	let [worktree_dir, branch_prefix] = GIT_KEYS.map(|k| known_value(&config.git, "git", k));
	let [command, coverage] = TEST_KEYS.map(|k| known_value(&config.test, "test", k));

	format!(
		"# SuperSpec Project Configuration
version: {version}

# Project settings
project:
  name: {name}

# Workflow settings
workflow:
  require_design: {require_design}
  require_validation: {require_validation}
  strict_mode: {strict_mode}

# Git settings
git:
  worktree_dir: {worktree_dir}
  branch_prefix: {branch_prefix}

# Test settings
test:
  command: {command}
  coverage: {coverage}

# External AI Review settings
# Enable to have external AI (Codex/Gemini) review your code after implementation
review:
  enabled: {enabled}                     # Master switch for external AI review

  # Frontend task review (UI, components, styling)
  frontend:
    provider: {frontend_provider}                 # gemini | codex | none
    model: {frontend_model}

  # Backend task review (API, logic, data)
  backend:
    provider: {backend_provider}                  # codex | gemini | none
    model: {backend_model}
",
		version = config.version,
		name = string_scalar(&config.project.name),
		enabled = review.enabled,
		frontend_provider = review.frontend.provider,
		frontend_model = string_scalar(&review.frontend.model),
		backend_provider = review.backend.provider,
		backend_model = string_scalar(&review.backend.model),
	)
}

fn known_value(group: &Mapping, group_name: &str, key: KnownKey) -> String {
	let Some(value) = group.get(key.name) else {
		return key.default.to_string();
	};

	match value_scalar(value) {
		Some(rendered) => rendered,
		None => {
			if !value.is_null() {
				tracing::warn!(
					group = group_name,
					key = key.name,
					"value cannot be written inline; using default"
				);
			}
			key.default.to_string()
		}
	}
}

/// Render a YAML value so it fits after `key: ` on a single line.
///
/// Returns `None` for null, which callers replace with a default.
pub fn value_scalar(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::Bool(b) => Some(b.to_string()),
		Value::Number(n) => Some(n.to_string()),
		Value::String(s) => Some(string_scalar(s)),
		Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => {
			serde_json::to_string(value).ok()
		}
	}
}

/// Render a string scalar, quoting only when the plain form would read back
/// as something else.
pub fn string_scalar(s: &str) -> String {
	if is_plain_safe(s) {
		return s.to_string();
	}
	serde_json::to_string(s).unwrap_or_else(|_| format!("'{}'", s.replace('\'', "''")))
}

fn is_plain_safe(s: &str) -> bool {
	let Some(first) = s.chars().next() else {
		return false;
	};
	if !(first.is_alphanumeric() || matches!(first, '.' | '/' | '_')) || s.ends_with(' ') {
		return false;
	}
	if !s
		.chars()
		.all(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.' | '/' | '+' | '@' | '='))
	{
		return false;
	}
	matches!(serde_yaml::from_str::<Value>(s), Ok(Value::String(parsed)) if parsed == s)
}
