/// Console and log file output helpers
///
/// Two switches control what gets printed, and can be flipped at runtime
/// from main without recompiling:
///     - debug printing: detailed traces on stderr, off by default
///     - test printing: progress and results on stderr, on by default
/// When a log file has been opened with `init_log_file`, test and progress
/// messages are also written to it.

use std::fs::OpenOptions;
use std::io::{self, Write, stdout};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_FLAG: AtomicBool = AtomicBool::new(false);
static TEST_FLAG: AtomicBool = AtomicBool::new(true);

// Global log file handle
static LOG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);

/// Name of the log file for the current time
pub fn log_filename() -> String {
	let now = chrono::Local::now();
	format!("log_set_finder_{}.txt", now.format("%Y-%m-%d_%H-%M-%S"))
}

/// Open a timestamped log file in the current directory; returns its name
pub fn init_log_file() -> io::Result<String> {
	let filename = log_filename();
	let file = OpenOptions::new()
		.create(true)
		.write(true)
		.truncate(true)
		.open(&filename)?;
	if let Ok(mut guard) = LOG_FILE.lock() {
		*guard = Some(file);
	}
	Ok(filename)
}

/// Write to log file if it's open
fn write_to_log(msg: &str) {
	if let Ok(mut log_guard) = LOG_FILE.lock() {
		if let Some(ref mut file) = *log_guard {
			let _ = writeln!(file, "{}", msg);
		}
	}
}

pub fn debug_print_on() {
	DEBUG_FLAG.store(true, Ordering::Relaxed);
}

pub fn debug_print_off() {
	DEBUG_FLAG.store(false, Ordering::Relaxed);
}

pub fn test_print_on() {
	TEST_FLAG.store(true, Ordering::Relaxed);
}

pub fn test_print_off() {
	TEST_FLAG.store(false, Ordering::Relaxed);
}

pub fn is_debug_on() -> bool {
	DEBUG_FLAG.load(Ordering::Relaxed)
}

pub fn debug_print(msg: &str) {
	if is_debug_on() {
		eprintln!("debug: {}", msg);
	}
}

pub fn test_print(msg: &str) {
	if TEST_FLAG.load(Ordering::Relaxed) {
		eprintln!("{}", msg);
	}
	// Always write to log file if it's open
	write_to_log(msg);
}

/// Progress output for long-running timings: stdout, flushed right away.
pub fn progress_print(msg: &str) {
	println!("{}", msg);
	let _ = stdout().flush();
	write_to_log(msg);
}

/// Build a banner: the message centered between two lines of '='
pub fn banner_string(msg: &str) -> String {
	const BANNER_WIDTH: usize = 80;
	// truncate the message if needed
	let titre: String = msg.chars().take(BANNER_WIDTH).collect();
	let total_padding = BANNER_WIDTH - titre.chars().count();
	let left_padding = total_padding / 2;
	let right_padding = total_padding - left_padding;
	let line = "=".repeat(BANNER_WIDTH);
	format!("\n{}\n{}{}{}\n{}\n",
		line, " ".repeat(left_padding), titre, " ".repeat(right_padding), line)
}

pub fn banner(msg: &str) {
	test_print(&banner_string(msg));
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_banner_is_centered() {
		let b = banner_string("SET");
		let lines: Vec<&str> = b.lines().filter(|l| !l.is_empty()).collect();
		assert_eq!(lines.len(), 3);
		assert_eq!(lines[0].len(), 80);
		assert_eq!(lines[1].len(), 80);
		assert_eq!(lines[1].trim(), "SET");
	}

	#[test]
	fn test_banner_truncates_long_messages() {
		let long = "x".repeat(100);
		let b = banner_string(&long);
		assert!(b.lines().all(|l| l.chars().count() <= 80));
	}

	#[test]
	fn test_log_filename_format() {
		let name = log_filename();
		assert!(name.starts_with("log_set_finder_"));
		assert!(name.ends_with(".txt"));
	}
}
