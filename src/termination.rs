// ══════════════════════════════════════════════════════════════════════════════
// TERMINATION MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Writing a CRITICAL line ends the program. The logger itself never halts; it
// hands back a `TerminationRequested` that the entry point turns into the exit
// status. This is deliberately not an error type, so `?` cannot swallow it.

use std::fmt;
use std::process::ExitCode;

/// Exit status used after a CRITICAL message.
pub const CRITICAL_EXIT_STATUS: u8 = 1;

#[must_use = "a CRITICAL line was written; return this to main so the process exits"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminationRequested {
	status: u8,
}

impl TerminationRequested {
	pub(crate) const fn critical() -> Self {
		TerminationRequested { status: CRITICAL_EXIT_STATUS }
	}

	pub const fn status(self) -> u8 {
		self.status
	}

	/// Halts right here. Prefer returning the value to `main` when possible.
	pub fn exit(self) -> ! {
		std::process::exit(i32::from(self.status))
	}
}

impl From<TerminationRequested> for ExitCode {
	fn from(request: TerminationRequested) -> Self {
		ExitCode::from(request.status)
	}
}

impl fmt::Display for TerminationRequested {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "critical message logged, exiting with status {}", self.status)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::process::Command;
	use crate::logger::Logger;

	const CHILD_ENV: &str = "TAPELOG_EXIT_CHILD";

	#[test]
	fn exit_ends_the_process_with_its_status() {
		if std::env::var_os(CHILD_ENV).is_some() {
			let logger = Logger::new();
			logger.set_time_format("T").unwrap();
			logger.critical("halting from a library caller").exit();
		}

		let output = Command::new(std::env::current_exe().unwrap())
			.args(["--exact", "termination::tests::exit_ends_the_process_with_its_status", "--nocapture"])
			.env(CHILD_ENV, "1")
			.output()
			.unwrap();

		assert_eq!(output.status.code(), Some(i32::from(CRITICAL_EXIT_STATUS)));
		let stdout = String::from_utf8_lossy(&output.stdout);
		assert!(stdout.contains("T [CRITICAL]: halting from a library caller\n"));
	}

	#[test]
	fn critical_request_carries_status_one() {
		let request = TerminationRequested::critical();
		assert_eq!(request.status(), 1);
		assert_eq!(request.to_string(), "critical message logged, exiting with status 1");
	}
}
