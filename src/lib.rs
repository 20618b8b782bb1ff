// ╔══════════════════════════════════════════════════════════════════════════════╗
// ║                                TAPELOG                                       ║
// ║                  Timestamped, Level-Filtered Console Logging                 ║
// ╚══════════════════════════════════════════════════════════════════════════════╝
//
// 🎯 PROJECT GOAL
// ---------------
// A small logger that prints one line per message to standard output:
//
//   2025-01-02  13:04:05 [WARNING]: disk almost full
//
// Messages below the configured threshold are dropped. A CRITICAL message is
// always printed and then ends the program with exit status 1.
//
// 📦 HOW IT WORKS
// ---------------
//   level.rs       → DEBUG < INFO < WARNING < ERROR < CRITICAL
//   timestamp.rs   → validated strftime patterns and date presets
//   logger.rs      → threshold filter + line emitter
//   traced.rs      → wraps a function to log calls, results, errors, timing
//   termination.rs → the "exit now" value returned by CRITICAL
//
// 🎨 DESIGN PHILOSOPHY
// --------------------
// - **Synchronous**: every line is written and flushed before the call returns.
// - **Single-threaded**: a `Logger` is `!Sync`; share it by reference.
// - **Exit at the top**: the library never halts the process; `main` does.
//
// ══════════════════════════════════════════════════════════════════════════════

pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod termination;
pub mod timestamp;
pub mod traced;

pub use config::LoggerConfig;
pub use error::LogError;
pub use level::{Level, LEVELS};
pub use logger::Logger;
pub use termination::{TerminationRequested, CRITICAL_EXIT_STATUS};
pub use timestamp::{DatePreset, TimeFormat, DEFAULT_TIME_FORMAT};
pub use traced::{kw, Arguments, Callable, Keyword, Traced};
