// ══════════════════════════════════════════════════════════════════════════════
// TRACED MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Call tracing. `Traced` wraps a function so that every call through it logs:
//
//   INFO   Calling <name>(<args>)
//   INFO   <name> returned <value>        (or ERROR  Error in <name>: <error>)
//   DEBUG  <name> execution time: <secs>s
//
// The timing line is written exactly once per call, after the outcome line,
// whether the function returned, returned `Err`, or panicked. Errors and panics
// are passed on untouched.

use std::any::Any;
use std::fmt;
use std::io::{Stdout, Write};
use std::ops::Deref;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;
use crate::logger::Logger;

/// A named argument, logged as `name=value`.
///
/// The wrapped function receives the `Keyword` itself; it derefs to the value.
/// Keywords must be the trailing elements of the argument tuple: arguments are
/// logged in tuple order, so `(kw("a", 1), 2)` would print `a=1, 2`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Keyword<T> {
	pub name: &'static str,
	pub value: T,
}

pub fn kw<T>(name: &'static str, value: T) -> Keyword<T> {
	Keyword { name, value }
}

impl<T> Keyword<T> {
	pub fn into_value(self) -> T {
		self.value
	}
}

impl<T> Deref for Keyword<T> {
	type Target = T;

	fn deref(&self) -> &T {
		&self.value
	}
}

impl<T: fmt::Debug> fmt::Debug for Keyword<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}={:?}", self.name, self.value)
	}
}

/// An argument tuple that can describe itself for the `Calling ...` line.
pub trait Arguments {
	/// One debug rendering per argument, in call order.
	fn render(&self) -> Vec<String>;
}

/// Something callable with an argument tuple. Implemented for every `Fn` of
/// up to six parameters, so plain functions and closures can be traced as-is.
pub trait Callable<Args> {
	type Output;

	fn invoke(&self, args: Args) -> Self::Output;
}

macro_rules! tuple_impls {
	($($ty:ident $arg:ident),*) => {
		impl<$($ty: fmt::Debug),*> Arguments for ($($ty,)*) {
			fn render(&self) -> Vec<String> {
				let ($($arg,)*) = self;
				vec![$(format!("{:?}", $arg)),*]
			}
		}

		impl<Func, Ret, $($ty),*> Callable<($($ty,)*)> for Func
		where
			Func: Fn($($ty),*) -> Ret,
		{
			type Output = Ret;

			fn invoke(&self, ($($arg,)*): ($($ty,)*)) -> Ret {
				self($($arg),*)
			}
		}
	};
}

tuple_impls!();
tuple_impls!(A a);
tuple_impls!(A a, B b);
tuple_impls!(A a, B b, C c);
tuple_impls!(A a, B b, C c, D d);
tuple_impls!(A a, B b, C c, D d, E e);
tuple_impls!(A a, B b, C c, D d, E e, F f);

/// A function plus the logger that reports on its calls.
pub struct Traced<'l, F, W: Write = Stdout> {
	logger: &'l Logger<W>,
	name: String,
	func: F,
}

impl<'l, F, W: Write> Traced<'l, F, W> {
	pub fn new(logger: &'l Logger<W>, name: impl Into<String>, func: F) -> Self {
		Traced { logger, name: name.into(), func }
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Calls a function whose every return is a success.
	pub fn call<A>(&self, args: A) -> F::Output
	where
		F: Callable<A>,
		A: Arguments,
		F::Output: fmt::Debug,
	{
		self.run(args, |value| Ok(format!("{:?}", value)))
	}

	/// Calls a fallible function. `Err` is logged at ERROR and returned as is.
	pub fn try_call<A, T, E>(&self, args: A) -> Result<T, E>
	where
		F: Callable<A, Output = Result<T, E>>,
		A: Arguments,
		T: fmt::Debug,
		E: fmt::Display,
	{
		self.run(args, |result| match result {
			Ok(value) => Ok(format!("{:?}", value)),
			Err(err) => Err(err.to_string()),
		})
	}

	fn run<A, R>(&self, args: A, outcome: impl FnOnce(&R) -> Result<String, String>) -> R
	where
		F: Callable<A, Output = R>,
		A: Arguments,
	{
		let logger = self.logger;
		logger.info(format_args!("Calling {}({})", self.name, args.render().join(", ")));

		let start = Instant::now();
		let result = panic::catch_unwind(AssertUnwindSafe(|| self.func.invoke(args)));

		match &result {
			Ok(value) => match outcome(value) {
				Ok(repr) => logger.info(format_args!("{} returned {}", self.name, repr)),
				Err(message) => logger.error(format_args!("Error in {}: {}", self.name, message)),
			},
			Err(payload) => logger.error(format_args!("Error in {}: {}", self.name, panic_message(&**payload))),
		}

		// The trailing space is part of the line format.
		logger.debug(format_args!("{} execution time: {:.4}s ", self.name, start.elapsed().as_secs_f64()));

		match result {
			Ok(value) => value,
			Err(payload) => panic::resume_unwind(payload),
		}
	}
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(message) = payload.downcast_ref::<&str>() {
		message.to_string()
	} else if let Some(message) = payload.downcast_ref::<String>() {
		message.clone()
	} else {
		"panic with a non-string payload".to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use thiserror::Error;
	use crate::level::Level;

	#[derive(Error, Debug, PartialEq)]
	#[error("{0}")]
	struct ValueError(&'static str);

	fn add(a: i32, b: i32) -> i32 {
		a + b
	}

	fn parse_positive(text: &str) -> Result<u32, ValueError> {
		match text.parse::<u32>() {
			Ok(0) | Err(_) => Err(ValueError("bad")),
			Ok(n) => Ok(n),
		}
	}

	fn debug_logger() -> Logger<Vec<u8>> {
		let logger = Logger::with_writer(Vec::new());
		logger.set_time_format("T").unwrap();
		logger.set_level(Level::Debug);
		logger
	}

	fn lines(logger: Logger<Vec<u8>>) -> Vec<String> {
		String::from_utf8(logger.into_inner()).unwrap().lines().map(str::to_string).collect()
	}

	fn assert_timing_line(line: &str, name: &str) {
		let prefix = format!("T [DEBUG]: {} execution time: ", name);
		assert!(line.starts_with(&prefix), "unexpected timing line: {line:?}");
		let secs = line[prefix.len()..].strip_suffix("s ").expect("seconds suffix with trailing space");
		let (_, decimals) = secs.split_once('.').expect("decimal point");
		assert_eq!(decimals.len(), 4);
		assert!(secs.parse::<f64>().unwrap() >= 0.0);
	}

	#[test]
	fn success_logs_call_return_and_timing_in_order() {
		let logger = debug_logger();
		let result = logger.traced("add", add).call((2, 3));
		assert_eq!(result, 5);

		let lines = lines(logger);
		assert_eq!(lines.len(), 3);
		assert_eq!(lines[0], "T [INFO]: Calling add(2, 3)");
		assert_eq!(lines[1], "T [INFO]: add returned 5");
		assert_timing_line(&lines[2], "add");
	}

	#[test]
	fn error_is_logged_then_returned_unchanged() {
		let logger = debug_logger();
		let result = logger.traced("parse_positive", parse_positive).try_call(("zero",));
		assert_eq!(result, Err(ValueError("bad")));

		let lines = lines(logger);
		assert_eq!(lines.len(), 3);
		assert_eq!(lines[0], "T [INFO]: Calling parse_positive(\"zero\")");
		assert_eq!(lines[1], "T [ERROR]: Error in parse_positive: bad");
		assert_timing_line(&lines[2], "parse_positive");
	}

	#[test]
	fn fallible_success_logs_the_inner_value() {
		let logger = debug_logger();
		assert_eq!(logger.traced("parse_positive", parse_positive).try_call(("7",)), Ok(7));
		assert_eq!(lines(logger)[1], "T [INFO]: parse_positive returned 7");
	}

	#[test]
	fn panic_is_logged_timed_and_resumed() {
		let logger = debug_logger();
		let explode = logger.traced("explode", || -> u8 { panic!("fuse lit") });
		let caught = panic::catch_unwind(AssertUnwindSafe(|| explode.call(())));
		drop(explode);

		let payload = caught.unwrap_err();
		assert_eq!(payload.downcast_ref::<&str>(), Some(&"fuse lit"));

		let lines = lines(logger);
		assert_eq!(lines.len(), 3);
		assert_eq!(lines[0], "T [INFO]: Calling explode()");
		assert_eq!(lines[1], "T [ERROR]: Error in explode: fuse lit");
		assert_timing_line(&lines[2], "explode");
	}

	#[test]
	fn keywords_follow_positionals_as_name_value() {
		let logger = debug_logger();
		let scale = |x: i32, factor: Keyword<i32>| x * *factor;
		assert_eq!(logger.traced("scale", scale).call((4, kw("factor", 3))), 12);
		assert_eq!(lines(logger)[0], "T [INFO]: Calling scale(4, factor=3)");
	}

	#[test]
	fn trailing_keywords_keep_their_order() {
		let logger = debug_logger();
		let clamp = |x: i32, low: Keyword<i32>, high: Keyword<i32>| x.clamp(low.into_value(), high.into_value());
		assert_eq!(logger.traced("clamp", clamp).call((15, kw("low", 0), kw("high", 10))), 10);
		assert_eq!(lines(logger)[0], "T [INFO]: Calling clamp(15, low=0, high=10)");
	}

	#[test]
	fn string_results_use_debug_rendering() {
		let logger = debug_logger();
		let greet = |name: &str| format!("hi {name}");
		logger.traced("greet", greet).call(("ann",));
		assert_eq!(lines(logger)[1], "T [INFO]: greet returned \"hi ann\"");
	}

	#[test]
	fn info_threshold_hides_only_the_timing_line() {
		let logger = debug_logger();
		logger.set_level(Level::Info);
		logger.traced("add", add).call((1, 1));
		assert_eq!(lines(logger), vec!["T [INFO]: Calling add(1, 1)", "T [INFO]: add returned 2"]);
	}

	#[test]
	fn error_threshold_keeps_the_error_line() {
		let logger = debug_logger();
		logger.set_level(Level::Error);
		let _ = logger.traced("parse_positive", parse_positive).try_call(("x",));
		assert_eq!(lines(logger), vec!["T [ERROR]: Error in parse_positive: bad"]);
	}

	#[test]
	fn wrapper_can_be_called_repeatedly() {
		let logger = debug_logger();
		let traced = logger.traced("add", add);
		assert_eq!(traced.name(), "add");
		traced.call((1, 2));
		traced.call((3, 4));
		drop(traced);
		assert_eq!(lines(logger).len(), 6);
	}
}
