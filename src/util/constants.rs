// HackTyper - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "HackTyper";

/// Application identifier used for config directories.
pub const APP_ID: &str = "HackTyper";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Playback
// =============================================================================

/// Default per-character delay in milliseconds.
///
/// 30 ms reads as fast, confident typing; slower values look hesitant and
/// faster values collapse into a plain dump of text.
pub const DEFAULT_DELAY_MS: u64 = 30;

/// Minimum user-configurable per-character delay (ms). 0 disables pacing.
pub const MIN_DELAY_MS: u64 = 0;

/// Maximum user-configurable per-character delay (ms). Anything beyond
/// 2 seconds per character makes even the intro unwatchable.
pub const MAX_DELAY_MS: u64 = 2_000;

/// Number the intro countdown starts from.
pub const COUNTDOWN_FROM: u32 = 3;

/// Welcome prompt typed out before the confirmation wait.
pub const WELCOME_PROMPT: &str = "Press F11 for a better experience...";

/// First line of the countdown message.
pub const COUNTDOWN_OPENER: &str = "Ready?";

/// Final line of the countdown message.
pub const COUNTDOWN_FINALE: &str = "Here we go!!";

// =============================================================================
// Source limits
// =============================================================================

/// Maximum size of a source text file in bytes.
///
/// The whole file is held in memory as the line pool for the lifetime of
/// the process, so the load is bounded up front rather than discovered as
/// an allocation failure mid-startup.
pub const MAX_SOURCE_FILE_SIZE: u64 = 8 * 1024 * 1024; // 8 MB

/// Display name used for the embedded payload in diagnostics.
pub const EMBEDDED_SOURCE_NAME: &str = "<built-in feed>";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted `[logging] level` values in config.toml.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
