// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Timestamped, level-filtered console logging. Each accepted message becomes
// exactly one line, `<timestamp> [<LEVEL>]: <message>`, written and flushed
// before the call returns. Messages below the threshold leave no trace.
//
// The logger is single-threaded by construction: settings live in `Cell` and
// `RefCell`, so a `Logger` cannot be shared across threads at all.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::io::{self, Stdout, Write};
use std::ops::ControlFlow;
use chrono::{DateTime, Local, TimeZone};
use crate::config::LoggerConfig;
use crate::error::LogError;
use crate::level::Level;
use crate::termination::TerminationRequested;
use crate::timestamp::{DatePreset, TimeFormat};
use crate::traced::Traced;

pub struct Logger<W: Write = Stdout> {
	threshold: Cell<Level>,
	time_format: RefCell<TimeFormat>,
	color: Cell<bool>,
	out: RefCell<W>,
}

impl Logger<Stdout> {
	/// Standard output, threshold `INFO`, default timestamp pattern.
	pub fn new() -> Self {
		Logger::with_writer(io::stdout())
	}

	/// Like [`Logger::new`] with the threshold given by name.
	pub fn with_level(name: &str) -> Result<Self, LogError> {
		let logger = Logger::new();
		logger.set_threshold(name)?;
		Ok(logger)
	}

	pub fn from_config(config: &LoggerConfig) -> Result<Self, LogError> {
		Logger::from_config_with_writer(config, io::stdout())
	}
}

impl Default for Logger<Stdout> {
	fn default() -> Self {
		Logger::new()
	}
}

impl<W: Write> Logger<W> {
	/// Default settings, writing to `out` instead of standard output.
	pub fn with_writer(out: W) -> Self {
		Logger {
			threshold: Cell::new(Level::Info),
			time_format: RefCell::new(TimeFormat::default()),
			color: Cell::new(false),
			out: RefCell::new(out),
		}
	}

	pub fn from_config_with_writer(config: &LoggerConfig, out: W) -> Result<Self, LogError> {
		let time_format = TimeFormat::new(&config.time_format)?;
		Ok(Logger {
			threshold: Cell::new(config.level),
			time_format: RefCell::new(time_format),
			color: Cell::new(config.color),
			out: RefCell::new(out),
		})
	}

	/// Gives back the underlying writer.
	pub fn into_inner(self) -> W {
		self.out.into_inner()
	}

	// ── Level filter ────────────────────────────────────────────────────────

	pub fn threshold(&self) -> Level {
		self.threshold.get()
	}

	/// Sets the threshold from a case-insensitive name. An unknown name is
	/// rejected and the current threshold stays as it was.
	pub fn set_threshold(&self, name: &str) -> Result<(), LogError> {
		let level = name.parse::<Level>()?;
		self.threshold.set(level);
		Ok(())
	}

	pub fn set_level(&self, level: Level) {
		self.threshold.set(level);
	}

	/// True when `level` ranks at or above the current threshold.
	pub fn should_emit(&self, level: Level) -> bool {
		level >= self.threshold.get()
	}

	// ── Formatting settings ─────────────────────────────────────────────────

	pub fn time_format(&self) -> String {
		self.time_format.borrow().as_str().to_string()
	}

	/// Replaces the timestamp pattern. Invalid patterns keep the previous one.
	pub fn set_time_format(&self, pattern: &str) -> Result<(), LogError> {
		let format = TimeFormat::new(pattern)?;
		*self.time_format.borrow_mut() = format;
		Ok(())
	}

	pub fn set_date_preset(&self, preset: DatePreset) {
		*self.time_format.borrow_mut() = TimeFormat::from(preset);
	}

	pub fn set_color(&self, enabled: bool) {
		self.color.set(enabled);
	}

	/// Builds the full line for `message` as if it were logged at `at`.
	pub fn format_line<Tz: TimeZone>(&self, at: &DateTime<Tz>, level: Level, message: impl fmt::Display) -> String
	where
		Tz::Offset: fmt::Display,
	{
		let timestamp = self.time_format.borrow().render(at);
		format!("{} [{}]: {}", timestamp, level.tag(self.color.get()), message)
	}

	// ── Emitter ─────────────────────────────────────────────────────────────

	/// Logs `message` at `level`. Returns `Break` only for CRITICAL, after the
	/// line has been written; the caller must end the process with it.
	pub fn emit(&self, level: Level, message: impl fmt::Display) -> ControlFlow<TerminationRequested> {
		self.write_line(level, message);
		if level == Level::Critical {
			return ControlFlow::Break(TerminationRequested::critical());
		}
		ControlFlow::Continue(())
	}

	pub fn debug(&self, message: impl fmt::Display) {
		self.write_line(Level::Debug, message);
	}

	pub fn info(&self, message: impl fmt::Display) {
		self.write_line(Level::Info, message);
	}

	pub fn warning(&self, message: impl fmt::Display) {
		self.write_line(Level::Warning, message);
	}

	pub fn error(&self, message: impl fmt::Display) {
		self.write_line(Level::Error, message);
	}

	/// Always printed, whatever the threshold. The returned request must reach
	/// the program entry point, which exits with status 1.
	pub fn critical(&self, message: impl fmt::Display) -> TerminationRequested {
		self.write_line(Level::Critical, message);
		TerminationRequested::critical()
	}

	/// Wraps `func` so every call through the result is logged.
	pub fn traced<F>(&self, name: impl Into<String>, func: F) -> Traced<'_, F, W> {
		Traced::new(self, name, func)
	}

	fn write_line(&self, level: Level, message: impl fmt::Display) {
		if !self.should_emit(level) {
			return;
		}
		let line = self.format_line(&Local::now(), level, message);
		let mut out = self.out.borrow_mut();
		// Logging is best effort: if stdout is closed or broken, the line is
		// dropped. Callers never see a write error, and CRITICAL still requests exit.
		let _ = writeln!(out, "{}", line).and_then(|_| out.flush());
	}
}
