// HackTyper - core/pool.rs
//
// The line pool: the ordered sequence of lines loaded from the source
// text at startup, immutable for the remainder of execution and sampled
// uniformly to drive the endless feed.
//
// Lines keep their trailing newline characters so the feed prints them
// as-is: a line that ended with '\n' in the source moves the cursor to
// the next row, and a final unterminated line leaves the cursor in place.

use crate::util::constants;
use crate::util::error::PoolError;
use rand::Rng;
use std::path::Path;

/// Immutable pool of printable lines, the sampling domain for the feed.
#[derive(Debug, Clone)]
pub struct LinePool {
    /// Display name of the source, for diagnostics only.
    source: String,

    /// Lines in source order, trailing newlines preserved.
    lines: Vec<String>,
}

impl LinePool {
    /// Load the pool from a file on disk.
    ///
    /// The file size is checked against `MAX_SOURCE_FILE_SIZE` before the
    /// read since the whole pool lives in memory for the process lifetime.
    /// Invalid UTF-8 is converted lossily, matching how the lines will be
    /// rendered by the terminal anyway.
    pub fn from_file(path: &Path) -> Result<Self, PoolError> {
        let metadata = std::fs::metadata(path).map_err(|e| PoolError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        if metadata.len() > constants::MAX_SOURCE_FILE_SIZE {
            return Err(PoolError::FileTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                max_size: constants::MAX_SOURCE_FILE_SIZE,
            });
        }

        let bytes = std::fs::read(path).map_err(|e| PoolError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let text = String::from_utf8_lossy(&bytes);

        let pool = Self::from_source(&path.display().to_string(), &text)?;

        tracing::info!(
            source = %path.display(),
            lines = pool.len(),
            bytes = metadata.len(),
            "Line pool loaded"
        );
        Ok(pool)
    }

    /// Build the pool from in-memory text (embedded payload, tests).
    ///
    /// An empty source is a defined failure: sampling an empty pool can
    /// never succeed, so the error surfaces here instead of at the first
    /// pick of the feed loop.
    pub fn from_source(source: &str, text: &str) -> Result<Self, PoolError> {
        let lines: Vec<String> = text.split_inclusive('\n').map(str::to_owned).collect();

        if lines.is_empty() {
            return Err(PoolError::Empty {
                source: source.to_string(),
            });
        }

        Ok(Self {
            source: source.to_string(),
            lines,
        })
    }

    /// Pick a uniformly random line.
    ///
    /// Generic over the RNG so tests can use a seeded `StdRng` while the
    /// binary samples from `rand::rng()`.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Construction rejects empty sources, so the range is never empty.
        &self.lines[rng.random_range(0..self.lines.len())]
    }

    /// Number of lines in the pool. Always at least 1.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Display name of the source this pool was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }
}
