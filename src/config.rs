// ══════════════════════════════════════════════════════════════════════════════
// CONFIG MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Construction-time settings. Everything here can also be changed later through
// the logger's setters.

use crate::level::Level;
use crate::timestamp::DEFAULT_TIME_FORMAT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
	/// Minimum severity that gets printed.
	pub level: Level,
	/// strftime pattern for the leading timestamp. Validated when the logger is built.
	pub time_format: String,
	/// Colorize the `[LEVEL]` tag.
	pub color: bool,
}

impl Default for LoggerConfig {
	fn default() -> Self {
		LoggerConfig {
			level: Level::Info,
			time_format: DEFAULT_TIME_FORMAT.to_string(),
			color: false,
		}
	}
}
