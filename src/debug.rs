//! Opt-in stderr logging for the render pipeline.
//!
//! Enabled via `--debug`, `INITIALS_DEBUG=1`, or `debug: true` in the config
//! file. Each line carries the time since [`enable`] and the pipeline stage:
//!
//! ```text
//! [+0003ms] TRACE render  #2 line (110, 230) -> (300, 140) #ff0000
//! [+0011ms] DEBUG fill    filled 2134 pixels from (115, 230)
//! [+0019ms] INFO  png     wrote 600x600 image to initials.png
//! ```

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Set on the first [`enable`]; later calls keep the original start.
static START: OnceLock<Instant> = OnceLock::new();

/// Turns logging on for the rest of the process.
pub fn enable() {
    START.get_or_init(Instant::now);
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Returns true if debug output is enabled.
#[inline]
pub fn is_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

fn elapsed_ms() -> u128 {
    START.get().map_or(0, |start| start.elapsed().as_millis())
}

/// Log levels, from per-command detail up to per-run summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// One line per draw command or timed scope.
    Trace,
    /// Rasterizer results such as fill sizes.
    Debug,
    /// Pipeline milestones: scene size, file written.
    Info,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
        }
    }

    fn color_code(self) -> &'static str {
        match self {
            Level::Trace => "\x1b[90m", // Gray
            Level::Debug => "\x1b[36m", // Cyan
            Level::Info => "\x1b[32m",  // Green
        }
    }
}

fn format_line(elapsed_ms: u128, level: Level, stage: &str, message: &str) -> String {
    format!(
        "[+{elapsed_ms:04}ms] {}{:5}\x1b[0m {stage:<7} {message}",
        level.color_code(),
        level.as_str(),
    )
}

/// Writes one line to stderr if debug output is enabled.
pub fn log(level: Level, stage: &str, message: &str) {
    if !is_enabled() {
        return;
    }
    let _ = writeln!(io::stderr(), "{}", format_line(elapsed_ms(), level, stage, message));
}

/// Logs with format arguments; the message is only built when enabled.
#[macro_export]
macro_rules! debug_log {
    ($level:expr, $stage:expr, $($arg:tt)*) => {
        if $crate::debug::is_enabled() {
            $crate::debug::log($level, $stage, &format!($($arg)*));
        }
    };
}

/// Per-command trace line.
#[macro_export]
macro_rules! trace {
    ($stage:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Trace, $stage, $($arg)*)
    };
}

/// Rasterizer detail line.
#[macro_export]
macro_rules! debug {
    ($stage:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Debug, $stage, $($arg)*)
    };
}

/// Pipeline milestone line.
#[macro_export]
macro_rules! info {
    ($stage:expr, $($arg:tt)*) => {
        $crate::debug_log!($crate::debug::Level::Info, $stage, $($arg)*)
    };
}

/// Logs entry and exit of a scope, with its duration on exit.
pub struct TimingGuard {
    stage: &'static str,
    operation: String,
    start: Instant,
}

impl TimingGuard {
    /// Starts timing `operation`.
    pub fn new(stage: &'static str, operation: impl Into<String>) -> Self {
        let operation = operation.into();
        log(Level::Trace, stage, &format!("-> {operation}"));
        Self {
            stage,
            operation,
            start: Instant::now(),
        }
    }
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        if is_enabled() {
            let elapsed = self.start.elapsed();
            log(
                Level::Trace,
                self.stage,
                &format!("<- {} ({:.2}ms)", self.operation, elapsed.as_secs_f64() * 1000.0),
            );
        }
    }
}

/// Times the rest of the enclosing scope.
#[macro_export]
macro_rules! time_scope {
    ($stage:expr, $operation:expr) => {
        let _guard = $crate::debug::TimingGuard::new($stage, $operation);
    };
}
