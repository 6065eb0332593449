// LogTranslator - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "Log Translator";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LogTranslator";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Translation
// =============================================================================

/// Simulated latency of a translation, in milliseconds.
pub const DEFAULT_TRANSLATION_DELAY_MS: u64 = 1_000;

/// Minimum user-configurable translation delay (ms). Zero still runs the
/// translation on the worker thread; it only skips the wait.
pub const MIN_TRANSLATION_DELAY_MS: u64 = 0;

/// Maximum user-configurable translation delay (ms).
pub const MAX_TRANSLATION_DELAY_MS: u64 = 10_000; // 10 s

/// How often the worker wakes during the simulated delay to check its
/// cancel flag (ms).
pub const TRANSLATION_CANCEL_CHECK_INTERVAL_MS: u64 = 25;

/// How often the UI repaints while a translation is pending (ms).
pub const TRANSLATION_POLL_INTERVAL_MS: u64 = 50;

/// Name given to the background translation thread.
pub const TRANSLATION_THREAD_NAME: &str = "translation-worker";

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Text shown in the output region before anything has been translated.
pub const OUTPUT_PLACEHOLDER: &str = "Tell me what log you would like to understand?";

/// Hint text shown inside the empty input box.
pub const INPUT_HINT: &str = "Paste your error log here...";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
