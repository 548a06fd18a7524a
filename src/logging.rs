//! Structured JSONL logging plus an in-memory activation feed for the UI.
//!
//! Dual-output logging:
//! - **JSONL to file** (~/.button-kit/logs/button-kit-gpui.jsonl) - structured for tooling
//! - **Pretty to stderr** - human-readable for developers
//!
//! The module also keeps a small bounded buffer of recent button activation
//! payloads so the shell window and the storybook actions panel can display
//! what the `activated` channel delivered.
//!
//! # Usage
//!
//! ```rust,ignore
//! use button_kit_gpui::logging;
//!
//! // Initialize logging - MUST keep guard alive for duration of program
//! let _guard = logging::init();
//!
//! tracing::info!(event_type = "app_lifecycle", "Application started");
//! ```

use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Bounded buffer of recent activation payloads, newest last.
static ACTIVATION_LOG: OnceLock<Mutex<VecDeque<String>>> = OnceLock::new();
const MAX_ACTIVATION_LINES: usize = 50;

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the dual-output logging system.
///
/// Returns a guard that MUST be kept alive for the duration of the program.
/// Dropping the guard will flush remaining logs and close the file.
pub fn init() -> LoggingGuard {
    let _ = ACTIVATION_LOG.set(Mutex::new(VecDeque::with_capacity(MAX_ACTIVATION_LINES)));

    let log_dir = get_log_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
    }

    let log_path = log_dir.join("button-kit-gpui.jsonl");

    // Open log file with append mode
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .unwrap_or_else(|e| {
            eprintln!("[LOGGING] Failed to open log file: {}", e);
            OpenOptions::new()
                .write(true)
                .open("/dev/null")
                .expect("Failed to open /dev/null")
        });

    // Non-blocking writer for file output (prevents UI freeze)
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file);

    // Environment filter - default to info, allow override via RUST_LOG
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,gpui=warn"));

    // JSONL layer for file output
    let json_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE);

    // Pretty layer for stderr
    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .init();

    tracing::info!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path.display(),
        "Application logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// Get the log directory path (~/.button-kit/logs/)
fn get_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".button-kit").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("button-kit-logs"))
}

/// Get the path to the JSONL log file
pub fn log_path() -> PathBuf {
    get_log_dir().join("button-kit-gpui.jsonl")
}

/// Record one delivered activation event.
///
/// `control` is the harness-visible identifier of the emitting control
/// (its test id, or its label when no test id was supplied); `payload` is
/// the string the `activated` channel delivered.
pub fn log_activation(control: &str, payload: &str) {
    push_activation(format!("[{}] {}", control, payload));

    tracing::info!(
        event_type = "activation",
        control = control,
        payload = payload,
        "Button activated"
    );
}

fn push_activation(line: String) {
    if let Some(buffer) = ACTIVATION_LOG.get() {
        if let Ok(mut buf) = buffer.lock() {
            if buf.len() >= MAX_ACTIVATION_LINES {
                buf.pop_front();
            }
            buf.push_back(line);
        }
    }
}

/// All buffered activation lines, oldest first.
pub fn recent_activations() -> Vec<String> {
    if let Some(buffer) = ACTIVATION_LOG.get() {
        if let Ok(buf) = buffer.lock() {
            return buf.iter().cloned().collect();
        }
    }
    Vec::new()
}

/// The last N activation lines, newest first.
pub fn last_activations(n: usize) -> Vec<String> {
    if let Some(buffer) = ACTIVATION_LOG.get() {
        if let Ok(buf) = buffer.lock() {
            return buf.iter().rev().take(n).cloned().collect();
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    // The activation buffer is process-global; serialize tests that touch it.
    static TEST_LOCK: Mutex<()> = Mutex::new(());

    fn ensure_buffer() -> std::sync::MutexGuard<'static, ()> {
        let guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let _ = ACTIVATION_LOG.set(Mutex::new(VecDeque::with_capacity(MAX_ACTIVATION_LINES)));
        if let Some(buffer) = ACTIVATION_LOG.get() {
            if let Ok(mut buf) = buffer.lock() {
                buf.clear();
            }
        }
        guard
    }

    #[test]
    fn test_activation_buffer_records_in_order() {
        let _guard = ensure_buffer();
        log_activation("primaryBtn", "This is a primary button");
        log_activation("warnBtn", "This is a warn button");

        let recent = recent_activations();
        let first = recent
            .iter()
            .position(|l| l == "[primaryBtn] This is a primary button")
            .expect("first activation missing");
        let second = recent
            .iter()
            .position(|l| l == "[warnBtn] This is a warn button")
            .expect("second activation missing");
        assert!(first < second);
    }

    #[test]
    fn test_last_activations_newest_first() {
        let _guard = ensure_buffer();
        log_activation("a", "1");
        log_activation("b", "2");

        let last = last_activations(2);
        assert_eq!(last.len(), 2);
        assert_eq!(last[0], "[b] 2");
        assert_eq!(last[1], "[a] 1");
    }

    #[test]
    fn test_buffer_is_bounded() {
        let _guard = ensure_buffer();
        for i in 0..(MAX_ACTIVATION_LINES + 10) {
            log_activation("btn", &format!("payload {}", i));
        }
        assert!(recent_activations().len() <= MAX_ACTIVATION_LINES);
    }
}
