// ══════════════════════════════════════════════════════════════════════════════
// TIMESTAMP MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Validated strftime patterns and the three preset date styles. A pattern is
// checked once when it is set, so rendering a line can never fail later on.

use std::fmt;
use std::str::FromStr;
use chrono::{DateTime, TimeZone};
use chrono::format::{Item, StrftimeItems};
use crate::error::LogError;

pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d  %H:%M:%S";

/// A strftime pattern that chrono is known to accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFormat(String);

impl TimeFormat {
	/// Rejects patterns with unknown or dangling `%` specifiers.
	pub fn new(pattern: &str) -> Result<Self, LogError> {
		if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
			return Err(LogError::InvalidTimeFormat { pattern: pattern.to_string() });
		}
		Ok(TimeFormat(pattern.to_string()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Formats `at` with this pattern. Same instant, same pattern, same string.
	pub fn render<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
	where
		Tz::Offset: fmt::Display,
	{
		at.format(&self.0).to_string()
	}
}

impl Default for TimeFormat {
	fn default() -> Self {
		TimeFormat(DEFAULT_TIME_FORMAT.to_string())
	}
}

impl fmt::Display for TimeFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Preset date orders. All of them keep the 24-hour `%H:%M:%S` clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePreset {
	YearMonthDay,
	DayMonthYear,
	MonthDayYear,
}

impl DatePreset {
	pub const ALL: [DatePreset; 3] = [
		DatePreset::YearMonthDay,
		DatePreset::DayMonthYear,
		DatePreset::MonthDayYear,
	];

	pub const fn name(self) -> &'static str {
		match self {
			DatePreset::YearMonthDay => "YYYY-MM-DD",
			DatePreset::DayMonthYear => "DD-MM-YYYY",
			DatePreset::MonthDayYear => "MM/DD/YYYY",
		}
	}

	pub const fn pattern(self) -> &'static str {
		match self {
			DatePreset::YearMonthDay => DEFAULT_TIME_FORMAT,
			DatePreset::DayMonthYear => "%d-%m-%Y  %H:%M:%S",
			DatePreset::MonthDayYear => "%m/%d/%Y  %H:%M:%S",
		}
	}
}

impl From<DatePreset> for TimeFormat {
	fn from(preset: DatePreset) -> Self {
		TimeFormat(preset.pattern().to_string())
	}
}

impl FromStr for DatePreset {
	type Err = LogError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		DatePreset::ALL
			.iter()
			.copied()
			.find(|preset| preset.name().eq_ignore_ascii_case(s))
			.ok_or_else(|| LogError::InvalidDatePreset {
				given: s.to_string(),
				choices: DatePreset::ALL.iter().map(|p| p.name()).collect::<Vec<_>>().join(", "),
			})
	}
}
