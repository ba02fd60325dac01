// HackTyper - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml resolution and validation
// 3. Logging initialisation (debug mode support)
// 4. Line pool loading and show playback

use clap::Parser;
use hacktyper::app::show::{self, ShowOptions};
use hacktyper::core::pool::LinePool;
use hacktyper::platform;
use hacktyper::util;
use hacktyper::util::constants;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::time::Duration;

/// Compile-time-embedded default feed (C source payload).
///
/// Using `include_str!` ensures the payload is baked into the binary so
/// the effect works with no arguments regardless of the working directory
/// at runtime.
static DEFAULT_FEED: &str = include_str!("../assets/feed.c");

/// HackTyper - Terminal hacking-simulator visual effect.
///
/// Clears the screen, plays a typewriter intro, then endlessly types
/// randomly chosen lines from a source text file.
#[derive(Parser, Debug)]
#[command(name = "HackTyper", version, about)]
struct Cli {
    /// Source text file for the feed (embedded payload if omitted).
    path: Option<PathBuf>,

    /// Per-character delay in milliseconds.
    #[arg(short = 'd', long = "delay-ms")]
    delay_ms: Option<u64>,

    /// Stop after this many feed lines (endless if omitted).
    #[arg(short = 'n', long = "lines")]
    lines: Option<u64>,

    /// Skip the welcome prompt, confirmation, and countdown.
    #[arg(long = "skip-intro")]
    skip_intro: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and config before logging init so the
    // configured level can take effect from the first event.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "HackTyper starting"
    );

    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    // Delay precedence: CLI flag > config file > built-in default. The CLI
    // value is taken verbatim; only config.toml goes through range checks.
    let delay_ms = cli.delay_ms.unwrap_or(config.delay_ms);

    let pool = match cli.path.as_deref() {
        Some(path) => LinePool::from_file(path),
        None => LinePool::from_source(constants::EMBEDDED_SOURCE_NAME, DEFAULT_FEED),
    };
    let pool = match pool {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load the line pool");
            eprintln!("{}: {e}", constants::APP_NAME);
            std::process::exit(1);
        }
    };

    let opts = ShowOptions {
        delay: Duration::from_millis(delay_ms),
        line_budget: cli.lines,
        intro: !cli.skip_intro,
        // Spawning `clear` while stdout is redirected would scribble on the
        // controlling terminal instead of the captured stream.
        clear: io::stdout().is_terminal(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();
    let mut rng = rand::rng();

    if let Err(e) = show::run(&pool, &opts, &mut input, &mut out, &mut rng) {
        tracing::error!(error = %e, "Show aborted");
        eprintln!("{}: {e}", constants::APP_NAME);
        std::process::exit(1);
    }
}
