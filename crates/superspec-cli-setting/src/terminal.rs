// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! [`Prompter`] backed by the real terminal.

use std::fmt;
use std::io::{self, BufRead};

use console::{style, Key, Term};

use crate::error::PromptError;
use crate::prompt::{Choice, Prompter, SelectRequest};

/// Arrow-key menus on a TTY, numbered line input otherwise.
#[derive(Debug, Clone)]
pub struct TerminalPrompter {
	term: Term,
}

impl Default for TerminalPrompter {
	fn default() -> Self {
		Self::new()
	}
}

impl TerminalPrompter {
	pub fn new() -> Self {
		Self {
			term: Term::stdout(),
		}
	}

	fn select_interactive<T>(&self, request: &SelectRequest<T>) -> Result<T, PromptError>
	where
		T: Copy + PartialEq,
	{
		let mut cursor = request.initial_index().ok_or(PromptError::NoChoices)?;

		self.term.hide_cursor()?;
		let picked = self.navigate(request, &mut cursor);
		self.term.show_cursor()?;

		let index = picked?;
		let choice = &request.choices[index];
		self.term.write_line(&format!(
			"{} {} {}",
			style("✔").green(),
			style(&request.message).bold(),
			style(&choice.name).cyan()
		))?;
		Ok(choice.value)
	}

	fn navigate<T>(
		&self,
		request: &SelectRequest<T>,
		cursor: &mut usize,
	) -> Result<usize, PromptError>
	where
		T: Copy + PartialEq,
	{
		loop {
			let lines = render_menu(request, *cursor);
			for line in &lines {
				self.term.write_line(line)?;
			}

			let key = self.term.read_key()?;
			self.term.clear_last_lines(lines.len())?;

			match key {
				Key::ArrowUp | Key::Char('k') => *cursor = step(&request.choices, *cursor, false),
				Key::ArrowDown | Key::Char('j') | Key::Tab => {
					*cursor = step(&request.choices, *cursor, true)
				}
				Key::Char(c) if c.is_ascii_digit() => {
					let index = (c as usize).wrapping_sub('1' as usize);
					if request.choices.get(index).is_some_and(Choice::is_enabled) {
						*cursor = index;
					}
				}
				Key::Enter => return Ok(*cursor),
				_ => {}
			}
		}
	}

	fn select_lines<T>(&self, request: &SelectRequest<T>) -> Result<T, PromptError>
	where
		T: Copy + PartialEq,
	{
		let default = request.initial_index().ok_or(PromptError::NoChoices)?;

		self.term.write_line(&style(&request.message).bold().to_string())?;
		for (i, choice) in request.choices.iter().enumerate() {
			self.term.write_line(&format!("  {}. {}", i + 1, choice_label(choice)))?;
		}

		loop {
			self.term.write_str(&format!("Select [{}]: ", default + 1))?;
			let input = read_stdin_line()?;
			let input = input.trim();

			if input.is_empty() {
				return Ok(request.choices[default].value);
			}

			match input.parse::<usize>() {
				Ok(n) if (1..=request.choices.len()).contains(&n) => {
					let choice = &request.choices[n - 1];
					match &choice.disabled {
						Some(reason) => self.term.write_line(&style(reason).yellow().to_string())?,
						None => return Ok(choice.value),
					}
				}
				_ => self
					.term
					.write_line(&style("Enter one of the numbers above").yellow().to_string())?,
			}
		}
	}
}

impl Prompter for TerminalPrompter {
	fn select<T>(&mut self, request: &SelectRequest<T>) -> Result<T, PromptError>
	where
		T: Copy + PartialEq + fmt::Display,
	{
		let value = if self.term.is_term() {
			self.select_interactive(request)?
		} else {
			self.select_lines(request)?
		};
		tracing::trace!(message = %request.message, value = %value, "prompt answered");
		Ok(value)
	}

	fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
		let hint = if default { "Y/n" } else { "y/N" };
		self
			.term
			.write_str(&format!("{} {} ", style(message).bold(), style(hint).dim()))?;

		if self.term.is_term() {
			loop {
				match self.term.read_key()? {
					Key::Enter => break finish_confirm(&self.term, default),
					Key::Char('y' | 'Y') => break finish_confirm(&self.term, true),
					Key::Char('n' | 'N') => break finish_confirm(&self.term, false),
					_ => {}
				}
			}
		} else {
			let input = read_stdin_line()?;
			Ok(parse_confirm(&input).unwrap_or(default))
		}
	}
}

fn finish_confirm(term: &Term, answer: bool) -> Result<bool, PromptError> {
	term.write_line(if answer { "yes" } else { "no" })?;
	Ok(answer)
}

fn read_stdin_line() -> Result<String, PromptError> {
	let mut line = String::new();
	if io::stdin().lock().read_line(&mut line)? == 0 {
		return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
	}
	Ok(line)
}

fn parse_confirm(input: &str) -> Option<bool> {
	match input.trim().to_ascii_lowercase().as_str() {
		"y" | "yes" => Some(true),
		"n" | "no" => Some(false),
		_ => None,
	}
}

/// Next enabled index in the given direction, wrapping around.
fn step<T>(choices: &[Choice<T>], from: usize, forward: bool) -> usize {
	let len = choices.len();
	for offset in 1..=len {
		let index = if forward {
			(from + offset) % len
		} else {
			(from + len - offset % len) % len
		};
		if choices[index].is_enabled() {
			return index;
		}
	}
	from
}

fn choice_label<T>(choice: &Choice<T>) -> String {
	match &choice.disabled {
		Some(reason) => format!(
			"{} {}",
			style(&choice.name).dim(),
			style(format!("({reason})")).dim()
		),
		None => choice.name.clone(),
	}
}

fn render_menu<T>(request: &SelectRequest<T>, cursor: usize) -> Vec<String> {
	let mut lines = Vec::with_capacity(request.choices.len() + 2);
	lines.push(format!("{} {}", style("?").green(), style(&request.message).bold()));

	for (i, choice) in request.choices.iter().enumerate() {
		let marker = if i == cursor {
			style("❯").cyan().to_string()
		} else {
			" ".to_string()
		};
		let label = if i == cursor && choice.is_enabled() {
			style(&choice.name).cyan().to_string()
		} else {
			choice_label(choice)
		};
		lines.push(format!("{marker} {label}"));
	}

	if let Some(description) = request
		.choices
		.get(cursor)
		.and_then(|c| c.description.as_deref())
	{
		lines.push(style(description).dim().to_string());
	}

	lines
}
