// ══════════════════════════════════════════════════════════════════════════════
// TAPELOG CLI
// ══════════════════════════════════════════════════════════════════════════════
//
// Command-line front end. `log` prints a single message, `demo` runs a few
// traced calls. This is the only place the process is allowed to exit early:
// a CRITICAL message comes back as `TerminationRequested` and becomes status 1.

use std::ops::ControlFlow;
use std::process::ExitCode;
use clap::{Parser, Subcommand};
use colored::*;
use tapelog::{kw, DatePreset, Keyword, Level, Logger, LoggerConfig};
use thiserror::Error;

/// Timestamped, level-filtered console logging
#[derive(Parser)]
#[command(name = "tapelog")]
#[command(version)]
#[command(about = "Print timestamped, level-tagged log lines", long_about = None)]
struct Cli {
	/// Minimum severity to print (DEBUG, INFO, WARNING, ERROR, CRITICAL)
	#[arg(short, long, global = true, default_value = "INFO")]
	level: Level,

	/// strftime-style pattern for the timestamp
	#[arg(short, long, global = true, conflicts_with = "date_style")]
	time_format: Option<String>,

	/// Preset date order (YYYY-MM-DD, DD-MM-YYYY, MM/DD/YYYY)
	#[arg(short, long, global = true)]
	date_style: Option<DatePreset>,

	/// Colorize the level tag
	#[arg(long, global = true)]
	color: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print one message at the given severity. CRITICAL exits with status 1.
	Log {
		/// Severity of the message
		severity: Level,

		/// Message text (joined with spaces)
		#[arg(required = true)]
		message: Vec<String>,
	},

	/// Run a few traced sample calls
	Demo,
}

#[derive(Error, Debug)]
enum DemoError {
	#[error("division by zero")]
	DivisionByZero,
}

fn add(a: i64, b: i64) -> i64 {
	a + b
}

fn divide(a: i64, b: i64) -> Result<i64, DemoError> {
	if b == 0 {
		return Err(DemoError::DivisionByZero);
	}
	Ok(a / b)
}

fn scale(x: i64, factor: Keyword<i64>) -> i64 {
	x * *factor
}

fn demo(logger: &Logger) {
	logger.traced("add", add).call((2, 3));

	if let Err(e) = logger.traced("divide", divide).try_call((1, 0)) {
		logger.warning(format_args!("divide gave up: {}", e));
	}

	logger.traced("scale", scale).call((4, kw("factor", 3)));
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	let mut config = LoggerConfig { level: cli.level, color: cli.color, ..LoggerConfig::default() };
	if let Some(preset) = cli.date_style {
		config.time_format = preset.pattern().to_string();
	}
	if let Some(pattern) = cli.time_format {
		config.time_format = pattern;
	}

	let logger = match Logger::from_config(&config) {
		Ok(logger) => logger,
		Err(e) => {
			eprintln!("{} {}", "error:".red().bold(), e);
			return ExitCode::from(2);
		}
	};

	let flow = match cli.command {
		Commands::Log { severity, message } => logger.emit(severity, message.join(" ")),
		Commands::Demo => {
			demo(&logger);
			ControlFlow::Continue(())
		}
	};

	match flow {
		ControlFlow::Break(request) => request.into(),
		ControlFlow::Continue(()) => ExitCode::SUCCESS,
	}
}
