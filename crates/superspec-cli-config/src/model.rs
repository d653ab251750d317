// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Typed view of `superspec/project.yaml`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Mapping;

/// Model used whenever Gemini is selected as a review provider.
pub const GEMINI_MODEL: &str = "gemini-3-pro-preview";

/// Model used whenever Codex is selected as a review provider.
pub const CODEX_MODEL: &str = "gpt-5.2-codex";

/// The whole project document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
	/// Schema tag, written back unchanged.
	pub version: i64,
	pub project: ProjectSection,
	#[serde(default)]
	pub workflow: Mapping,
	#[serde(default)]
	pub git: Mapping,
	#[serde(default)]
	pub test: Mapping,
	/// Older documents predate this group; a missing or null value is
	/// back-filled with [`ReviewConfig::default`].
	#[serde(default, deserialize_with = "null_as_default")]
	pub review: ReviewConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSection {
	pub name: String,
}

/// External AI review settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewConfig {
	#[serde(default)]
	pub enabled: bool,
	#[serde(
		default = "ReviewTarget::frontend_default",
		deserialize_with = "null_as_frontend"
	)]
	pub frontend: ReviewTarget,
	#[serde(
		default = "ReviewTarget::backend_default",
		deserialize_with = "null_as_backend"
	)]
	pub backend: ReviewTarget,
}

impl Default for ReviewConfig {
	fn default() -> Self {
		Self {
			enabled: false,
			frontend: ReviewTarget::frontend_default(),
			backend: ReviewTarget::backend_default(),
		}
	}
}

impl ReviewConfig {
	pub fn target(&self, side: ReviewSide) -> &ReviewTarget {
		match side {
			ReviewSide::Frontend => &self.frontend,
			ReviewSide::Backend => &self.backend,
		}
	}

	pub fn target_mut(&mut self, side: ReviewSide) -> &mut ReviewTarget {
		match side {
			ReviewSide::Frontend => &mut self.frontend,
			ReviewSide::Backend => &mut self.backend,
		}
	}
}

/// Provider and model for one kind of review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewTarget {
	pub provider: Provider,
	pub model: String,
}

impl ReviewTarget {
	pub fn new(provider: Provider, model: impl Into<String>) -> Self {
		Self {
			provider,
			model: model.into(),
		}
	}

	pub fn frontend_default() -> Self {
		Self::new(Provider::Gemini, GEMINI_MODEL)
	}

	pub fn backend_default() -> Self {
		Self::new(Provider::Codex, CODEX_MODEL)
	}

	/// Switch provider, pulling in its canonical model.
	///
	/// [`Provider::None`] has no model of its own, so the previous model
	/// string is kept untouched.
	pub fn select_provider(&mut self, provider: Provider) {
		self.provider = provider;
		if let Some(model) = provider.canonical_model() {
			self.model = model.to_string();
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
	Gemini,
	Codex,
	None,
}

impl Provider {
	pub fn as_str(self) -> &'static str {
		match self {
			Provider::Gemini => "gemini",
			Provider::Codex => "codex",
			Provider::None => "none",
		}
	}

	pub fn canonical_model(self) -> Option<&'static str> {
		match self {
			Provider::Gemini => Some(GEMINI_MODEL),
			Provider::Codex => Some(CODEX_MODEL),
			Provider::None => None,
		}
	}
}

impl fmt::Display for Provider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Which review target a setting applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewSide {
	Frontend,
	Backend,
}

impl ReviewSide {
	pub fn as_str(self) -> &'static str {
		match self {
			ReviewSide::Frontend => "frontend",
			ReviewSide::Backend => "backend",
		}
	}
}

impl fmt::Display for ReviewSide {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de> + Default,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A review target as written on disk, where either field may be missing.
#[derive(Debug, Default, Deserialize)]
struct PartialTarget {
	#[serde(default)]
	provider: Option<Provider>,
	#[serde(default)]
	model: Option<String>,
}

impl PartialTarget {
	/// Fill gaps from `fallback`. A present provider without a model takes
	/// its canonical model; `none` has none and keeps the fallback model.
	fn resolve(self, fallback: ReviewTarget) -> ReviewTarget {
		let provider = self.provider.unwrap_or(fallback.provider);
		let model = self
			.model
			.or_else(|| provider.canonical_model().map(str::to_string))
			.unwrap_or(fallback.model);
		ReviewTarget { provider, model }
	}
}

fn null_as_frontend<'de, D>(deserializer: D) -> Result<ReviewTarget, D::Error>
where
	D: Deserializer<'de>,
{
	let partial = Option::<PartialTarget>::deserialize(deserializer)?.unwrap_or_default();
	Ok(partial.resolve(ReviewTarget::frontend_default()))
}

fn null_as_backend<'de, D>(deserializer: D) -> Result<ReviewTarget, D::Error>
where
	D: Deserializer<'de>,
{
	let partial = Option::<PartialTarget>::deserialize(deserializer)?.unwrap_or_default();
	Ok(partial.resolve(ReviewTarget::backend_default()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn parse(yaml: &str) -> ProjectConfig {
		serde_yaml::from_str(yaml).unwrap()
	}

	#[test]
	fn test_missing_review_is_backfilled() {
		let config = parse("version: 1\nproject:\n  name: demo\n");
		assert_eq!(config.review, ReviewConfig::default());
		assert!(!config.review.enabled);
		assert_eq!(config.review.frontend.provider, Provider::Gemini);
		assert_eq!(config.review.frontend.model, GEMINI_MODEL);
		assert_eq!(config.review.backend.provider, Provider::Codex);
		assert_eq!(config.review.backend.model, CODEX_MODEL);
	}

	#[test]
	fn test_null_review_is_backfilled() {
		let config = parse("version: 1\nproject:\n  name: demo\nreview: ~\n");
		assert_eq!(config.review, ReviewConfig::default());
	}

	#[test]
	fn test_partial_review_backfills_each_side() {
		let config = parse(
			"version: 1\nproject:\n  name: demo\nreview:\n  enabled: true\n  backend:\n    provider: gemini\n    model: custom\n",
		);
		assert!(config.review.enabled);
		assert_eq!(config.review.frontend, ReviewTarget::frontend_default());
		assert_eq!(config.review.backend, ReviewTarget::new(Provider::Gemini, "custom"));
	}

	#[test]
	fn test_partial_target_backfills_missing_fields() {
		let config = parse(
			"version: 1\nproject:\n  name: demo\nreview:\n  enabled: true\n  frontend:\n    provider: gemini\n  backend:\n    model: x\n",
		);
		assert_eq!(config.review.frontend, ReviewTarget::new(Provider::Gemini, GEMINI_MODEL));
		assert_eq!(config.review.backend, ReviewTarget::new(Provider::Codex, "x"));
	}

	#[test]
	fn test_partial_target_provider_picks_its_model() {
		let config = parse(
			"version: 1\nproject:\n  name: demo\nreview:\n  frontend:\n    provider: codex\n  backend:\n    provider: none\n",
		);
		assert_eq!(config.review.frontend, ReviewTarget::new(Provider::Codex, CODEX_MODEL));
		assert_eq!(config.review.backend, ReviewTarget::new(Provider::None, CODEX_MODEL));
	}

	#[test]
	fn test_empty_target_mapping_uses_side_default() {
		let config = parse("version: 1\nproject:\n  name: demo\nreview:\n  frontend: {}\n");
		assert_eq!(config.review.frontend, ReviewTarget::frontend_default());
	}

	#[test]
	fn test_version_accepts_any_integer() {
		let config = parse("version: -3\nproject:\n  name: demo\n");
		assert_eq!(config.version, -3);

		let config = parse("version: 5000000000\nproject:\n  name: demo\n");
		assert_eq!(config.version, 5_000_000_000);
	}

	#[test]
	fn test_missing_groups_load_empty() {
		let config = parse("version: 2\nproject:\n  name: demo\n");
		assert!(config.workflow.is_empty());
		assert!(config.git.is_empty());
		assert!(config.test.is_empty());
	}

	#[test]
	fn test_unknown_provider_is_rejected() {
		let result: Result<ProjectConfig, _> = serde_yaml::from_str(
			"version: 1\nproject:\n  name: demo\nreview:\n  enabled: true\n  frontend:\n    provider: claude\n    model: x\n",
		);
		assert!(result.is_err());
	}

	#[test]
	fn test_select_known_provider_sets_model() {
		let mut target = ReviewTarget::new(Provider::None, "whatever");
		target.select_provider(Provider::Gemini);
		assert_eq!(target, ReviewTarget::new(Provider::Gemini, GEMINI_MODEL));

		target.select_provider(Provider::Codex);
		assert_eq!(target, ReviewTarget::new(Provider::Codex, CODEX_MODEL));
	}

	#[test]
	fn test_target_by_side() {
		let mut review = ReviewConfig::default();
		review.target_mut(ReviewSide::Backend).select_provider(Provider::Gemini);
		assert_eq!(review.target(ReviewSide::Backend).model, GEMINI_MODEL);
		assert_eq!(review.target(ReviewSide::Frontend).provider, Provider::Gemini);
	}

	#[test]
	fn test_provider_display() {
		assert_eq!(Provider::Gemini.to_string(), "gemini");
		assert_eq!(Provider::Codex.to_string(), "codex");
		assert_eq!(Provider::None.to_string(), "none");
	}

	proptest! {
		/// Choosing `none` never touches the model string.
		#[test]
		fn none_keeps_model(model in ".*", start in prop_oneof![
			Just(Provider::Gemini),
			Just(Provider::Codex),
			Just(Provider::None),
		]) {
			let mut target = ReviewTarget::new(start, model.clone());
			target.select_provider(Provider::None);
			prop_assert_eq!(target.provider, Provider::None);
			prop_assert_eq!(target.model, model);
		}

		/// Known providers always land on their canonical model.
		#[test]
		fn known_provider_overrides_model(model in ".*") {
			let mut target = ReviewTarget::new(Provider::None, model);
			target.select_provider(Provider::Codex);
			prop_assert_eq!(target.model.as_str(), CODEX_MODEL);
			target.select_provider(Provider::Gemini);
			prop_assert_eq!(target.model.as_str(), GEMINI_MODEL);
		}
	}
}
