// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The blocking request/response boundary between the settings loop and
//! whatever renders choices to the user.

use std::collections::VecDeque;
use std::fmt;

use crate::error::PromptError;

/// One selectable entry in a [`SelectRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<T> {
	pub name: String,
	pub value: T,
	pub description: Option<String>,
	/// Reason shown when the entry cannot be chosen.
	pub disabled: Option<String>,
}

impl<T> Choice<T> {
	pub fn new(name: impl Into<String>, value: T) -> Self {
		Self {
			name: name.into(),
			value,
			description: None,
			disabled: None,
		}
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	pub fn disabled_if(mut self, disabled: bool, reason: impl Into<String>) -> Self {
		self.disabled = disabled.then(|| reason.into());
		self
	}

	pub fn is_enabled(&self) -> bool {
		self.disabled.is_none()
	}
}

/// A single-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectRequest<T> {
	pub message: String,
	pub choices: Vec<Choice<T>>,
	pub default: Option<T>,
}

impl<T: Copy + PartialEq> SelectRequest<T> {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			choices: Vec::new(),
			default: None,
		}
	}

	pub fn choice(mut self, choice: Choice<T>) -> Self {
		self.choices.push(choice);
		self
	}

	pub fn default_value(mut self, value: T) -> Self {
		self.default = Some(value);
		self
	}

	pub fn find(&self, value: T) -> Option<&Choice<T>> {
		self.choices.iter().find(|c| c.value == value)
	}

	/// Index the cursor starts on: the default when it is selectable,
	/// otherwise the first enabled entry.
	pub fn initial_index(&self) -> Option<usize> {
		self
			.default
			.and_then(|d| {
				self
					.choices
					.iter()
					.position(|c| c.value == d && c.is_enabled())
			})
			.or_else(|| self.choices.iter().position(Choice::is_enabled))
	}
}

/// Presents questions and blocks until the user answers.
pub trait Prompter {
	fn select<T>(&mut self, request: &SelectRequest<T>) -> Result<T, PromptError>
	where
		T: Copy + PartialEq + fmt::Display;

	fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError>;
}

impl<P: Prompter> Prompter for &mut P {
	fn select<T>(&mut self, request: &SelectRequest<T>) -> Result<T, PromptError>
	where
		T: Copy + PartialEq + fmt::Display,
	{
		(**self).select(request)
	}

	fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
		(**self).confirm(message, default)
	}
}

/// Answers prompts from a fixed script, matching each answer against the
/// `Display` form of the offered values.
///
/// Selecting a disabled entry fails the same way a real terminal would
/// refuse it, so scripts can assert menu gating.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
	answers: VecDeque<String>,
	confirms: VecDeque<bool>,
	asked: Vec<String>,
}

impl ScriptedPrompter {
	pub fn new<I, S>(answers: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			answers: answers.into_iter().map(Into::into).collect(),
			..Self::default()
		}
	}

	pub fn with_confirms(mut self, confirms: impl IntoIterator<Item = bool>) -> Self {
		self.confirms = confirms.into_iter().collect();
		self
	}

	/// Messages of every prompt shown so far, in order.
	pub fn asked(&self) -> &[String] {
		&self.asked
	}

	pub fn remaining(&self) -> usize {
		self.answers.len()
	}
}

impl Prompter for ScriptedPrompter {
	fn select<T>(&mut self, request: &SelectRequest<T>) -> Result<T, PromptError>
	where
		T: Copy + PartialEq + fmt::Display,
	{
		self.asked.push(request.message.clone());
		let answer = self
			.answers
			.pop_front()
			.ok_or_else(|| PromptError::Exhausted(request.message.clone()))?;

		let choice = request
			.choices
			.iter()
			.find(|c| c.value.to_string() == answer)
			.ok_or_else(|| PromptError::UnknownChoice(answer.clone()))?;

		if let Some(reason) = &choice.disabled {
			return Err(PromptError::Disabled {
				value: answer,
				reason: reason.clone(),
			});
		}

		Ok(choice.value)
	}

	fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
		self.asked.push(message.to_string());
		Ok(self.confirms.pop_front().unwrap_or(default))
	}
}
