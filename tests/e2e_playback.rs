// HackTyper - tests/e2e_playback.rs
//
// End-to-end tests for source loading and show playback.
//
// These tests exercise the real filesystem, real pool loading, real
// sampling, and the real show sequence against in-memory terminals —
// no mocks, no stubs. This exercises the full path from a text file on
// disk to typewriter output.

use hacktyper::app::show::{self, ShowOptions};
use hacktyper::core::pool::LinePool;
use hacktyper::util::constants;
use hacktyper::util::error::PoolError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Bounded, instant, intro-less options for feed-only runs.
fn feed_only(budget: u64) -> ShowOptions {
    ShowOptions {
        delay: Duration::ZERO,
        line_budget: Some(budget),
        intro: false,
        clear: false,
    }
}

/// Run a show and capture stdout as a string.
fn run_show(pool: &LinePool, opts: &ShowOptions, stdin: &str) -> String {
    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut rng = StdRng::seed_from_u64(99);
    show::run(pool, opts, &mut input, &mut out, &mut rng).unwrap();
    String::from_utf8(out).unwrap()
}

// =============================================================================
// Loading E2E
// =============================================================================

/// Loading the fixture file yields one pool line per text line, with
/// trailing newlines preserved.
#[test]
fn e2e_loads_fixture_file() {
    let pool = LinePool::from_file(&fixture("demo_feed.txt")).unwrap();

    let raw = fs::read_to_string(fixture("demo_feed.txt")).unwrap();
    assert_eq!(pool.len(), raw.lines().count());

    let mut rng = StdRng::seed_from_u64(3);
    let line = pool.pick(&mut rng);
    assert!(line.ends_with('\n'), "expected trailing newline in {line:?}");
    assert!(raw.contains(line));
}

/// Loading a nonexistent path returns an I/O error with the path attached.
#[test]
fn e2e_missing_source_returns_io_error() {
    let result = LinePool::from_file(&fixture("no-such-feed.txt"));
    assert!(
        matches!(result, Err(PoolError::Io { .. })),
        "expected Io, got {result:?}"
    );
}

/// An empty source file is rejected up front rather than failing at the
/// first sample.
#[test]
fn e2e_empty_source_returns_empty_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let result = LinePool::from_file(&path);
    assert!(
        matches!(result, Err(PoolError::Empty { .. })),
        "expected Empty, got {result:?}"
    );
}

/// A source over the size bound is rejected before being read.
#[test]
fn e2e_oversized_source_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("huge.txt");
    let oversized = vec![b'x'; (constants::MAX_SOURCE_FILE_SIZE + 1) as usize];
    fs::write(&path, oversized).unwrap();

    let result = LinePool::from_file(&path);
    assert!(
        matches!(result, Err(PoolError::FileTooLarge { .. })),
        "expected FileTooLarge, got {result:?}"
    );
}

// =============================================================================
// Sampling E2E
// =============================================================================

/// Over 1000 draws from a two-line file, both lines appear with frequency
/// within statistical tolerance of 50/50.
#[test]
fn e2e_two_line_sampling_is_balanced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pair.txt");
    fs::write(&path, "a\nb\n").unwrap();

    let pool = LinePool::from_file(&path).unwrap();
    let mut rng = StdRng::seed_from_u64(2026);

    let mut a = 0u32;
    for _ in 0..1_000 {
        if pool.pick(&mut rng) == "a\n" {
            a += 1;
        }
    }
    assert!((400..=600).contains(&a), "expected ~500 'a' draws, got {a}");
}

// =============================================================================
// Show E2E
// =============================================================================

/// A bounded feed over the fixture emits exactly the requested number of
/// lines, every one of them drawn from the fixture.
#[test]
fn e2e_bounded_feed_emits_fixture_lines() {
    let pool = LinePool::from_file(&fixture("demo_feed.txt")).unwrap();
    let raw = fs::read_to_string(fixture("demo_feed.txt")).unwrap();

    let output = run_show(&pool, &feed_only(10), "");

    assert_eq!(output.lines().count(), 10);
    for line in output.lines() {
        assert!(
            raw.lines().any(|l| l == line),
            "feed produced a line not in the fixture: {line:?}"
        );
    }
}

/// The full show plays the welcome prompt, waits for the stdin
/// confirmation, counts down, then starts the feed.
#[test]
fn e2e_full_show_runs_intro_then_feed() {
    let pool = LinePool::from_file(&fixture("demo_feed.txt")).unwrap();
    let opts = ShowOptions {
        delay: Duration::ZERO,
        line_budget: Some(3),
        intro: true,
        clear: false,
    };

    let output = run_show(&pool, &opts, "\n");

    assert!(output.starts_with("Press F11 for a better experience..."));
    let countdown_at = output.find("Ready?\n3\n2\n1\nHere we go!!").unwrap();
    let feed = &output[countdown_at + "Ready?\n3\n2\n1\nHere we go!!".len()..];
    assert_eq!(feed.lines().count(), 3);
}
