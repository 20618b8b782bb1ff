// ══════════════════════════════════════════════════════════════════════════════
// ERROR MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Recoverable configuration failures. Every setter that can fail validates its
// input first, so a returned error always means the logger was left untouched.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
	#[error("Invalid log level '{given}'. Choose from: {choices}")]
	InvalidLevel { given: String, choices: String },

	#[error("Invalid time format '{pattern}': unknown or incomplete % specifier")]
	InvalidTimeFormat { pattern: String },

	#[error("Unknown date style '{given}'. Choose from: {choices}")]
	InvalidDatePreset { given: String, choices: String },
}
