// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Terminal styling helpers. Each returns a displayable string; callers
//! decide where it goes.

use console::style;

const BANNER: &str = r"  ╔═╗┬ ┬┌─┐┌─┐┬─┐╔═╗┌─┐┌─┐┌─┐
  ╚═╗│ │├─┘├┤ ├┬┘╚═╗├─┘├┤ │
  ╚═╝└─┘┴  └─┘┴└─╚═╝┴  └─┘└─┘";

pub fn banner() -> String {
	format!(
		"{}\n  {}",
		style(BANNER).magenta().bold(),
		style("Spec-driven development workflow").dim()
	)
}

pub fn section_header(title: &str, icon: &str) -> String {
	let rule = "─".repeat(title.chars().count() + 3);
	format!("{icon} {}\n{}", style(title).bold().cyan(), style(rule).dim())
}

pub fn key_value(key: &str, value: &str) -> String {
	format!("  {}: {value}", style(key).bold())
}

pub fn success(text: &str) -> String {
	style(text).green().to_string()
}

pub fn error(text: &str) -> String {
	style(text).red().bold().to_string()
}

pub fn muted(text: &str) -> String {
	style(text).dim().to_string()
}

pub fn primary(text: &str) -> String {
	style(text).cyan().to_string()
}

pub fn heading(text: &str) -> String {
	style(text).white().bold().to_string()
}
