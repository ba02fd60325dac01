// HackTyper - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all HackTyper operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum HackTyperError {
    /// Source loading or sampling setup failed.
    Pool(PoolError),

    /// Writing the effect to the output stream failed (e.g. closed stdout).
    Playback { source: io::Error },
}

impl fmt::Display for HackTyperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pool(e) => write!(f, "Source error: {e}"),
            Self::Playback { source } => write!(f, "Playback error: {source}"),
        }
    }
}

impl std::error::Error for HackTyperError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pool(e) => Some(e),
            Self::Playback { source } => Some(source),
        }
    }
}

impl From<io::Error> for HackTyperError {
    fn from(e: io::Error) -> Self {
        Self::Playback { source: e }
    }
}

// ---------------------------------------------------------------------------
// Pool errors
// ---------------------------------------------------------------------------

/// Errors related to loading the line pool from a source file.
#[derive(Debug)]
pub enum PoolError {
    /// I/O error reading the source file.
    Io { path: PathBuf, source: io::Error },

    /// Source file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// The source contains no lines, so there is nothing to sample.
    Empty { source: String },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read source '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Source '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Empty { source } => {
                write!(f, "Source '{source}' is empty; nothing to type")
            }
        }
    }
}

impl std::error::Error for PoolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<PoolError> for HackTyperError {
    fn from(e: PoolError) -> Self {
        Self::Pool(e)
    }
}

/// Convenience type alias for HackTyper results.
pub type Result<T> = std::result::Result<T, HackTyperError>;
