// ══════════════════════════════════════════════════════════════════════════════
// LEVEL MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The fixed severity ladder shared by every logger. Ranking is derived from
// declaration order, so `Debug < Info < Warning < Error < Critical`.

use std::fmt;
use std::str::FromStr;
use colored::Color;
use crate::error::LogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
	Debug,
	Info,
	Warning,
	Error,
	Critical,
}

/// Every severity, ranked low to high.
pub const LEVELS: [Level; 5] = [
	Level::Debug,
	Level::Info,
	Level::Warning,
	Level::Error,
	Level::Critical,
];

impl Level {
	/// Upper-case name as it appears inside the `[LEVEL]` tag.
	pub const fn name(self) -> &'static str {
		match self {
			Level::Debug => "DEBUG",
			Level::Info => "INFO",
			Level::Warning => "WARNING",
			Level::Error => "ERROR",
			Level::Critical => "CRITICAL",
		}
	}

	pub const fn rank(self) -> usize {
		self as usize
	}

	/// Comma-separated list of valid names, used in error messages.
	pub fn choices() -> String {
		LEVELS.iter().map(|level| level.name()).collect::<Vec<_>>().join(", ")
	}

	/// The name as printed inside `[...]`. With `color` set the ANSI codes are
	/// always written, even when stdout is not a terminal.
	pub(crate) fn tag(self, color: bool) -> String {
		if !color {
			return self.name().to_string();
		}
		let codes = match self {
			Level::Debug => "2".to_string(),
			Level::Info => Color::Blue.to_fg_str().into_owned(),
			Level::Warning => Color::Yellow.to_fg_str().into_owned(),
			Level::Error => Color::Red.to_fg_str().into_owned(),
			Level::Critical => format!("1;{}", Color::Red.to_fg_str()),
		};
		format!("\x1b[{}m{}\x1b[0m", codes, self.name())
	}
}

impl fmt::Display for Level {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Level {
	type Err = LogError;

	/// Case-insensitive: `"warning"`, `"Warning"` and `"WARNING"` all parse.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		LEVELS
			.iter()
			.copied()
			.find(|level| level.name().eq_ignore_ascii_case(s))
			.ok_or_else(|| LogError::InvalidLevel {
				given: s.to_uppercase(),
				choices: Level::choices(),
			})
	}
}
