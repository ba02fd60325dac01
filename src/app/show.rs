// HackTyper - app/show.rs
//
// The show sequence: clear, typewriter welcome, confirmation wait,
// countdown, clear again, then the feed loop sampling the line pool.
//
// Input, output, and the RNG are injected so the entire sequence runs
// against in-memory handles in tests. Screen clearing talks to the real
// terminal and is switched off when the output is not one.

use crate::app::typewriter::Typewriter;
use crate::core::pool::LinePool;
use crate::core::script;
use crate::platform::term;
use crate::util::constants;
use crate::util::error::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use std::time::Duration;

/// Resolved playback options for one show.
#[derive(Debug, Clone, Copy)]
pub struct ShowOptions {
    /// Pause between typed characters.
    pub delay: Duration,

    /// Stop after this many feed lines; `None` runs until interrupted.
    pub line_budget: Option<u64>,

    /// Play the welcome / confirmation / countdown intro.
    pub intro: bool,

    /// Clear the real terminal at the scripted points. Off in tests and
    /// when stdout is redirected, where a spawned `clear` would scribble
    /// on the controlling terminal instead of the captured stream.
    pub clear: bool,
}

impl Default for ShowOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(constants::DEFAULT_DELAY_MS),
            line_budget: None,
            intro: true,
            clear: true,
        }
    }
}

/// Run the full show against the given handles.
///
/// With no line budget this function never returns `Ok`: the feed loop
/// has no exit condition and ends only with the process (external
/// interrupt) or a playback I/O error.
pub fn run<R, W, G>(
    pool: &LinePool,
    opts: &ShowOptions,
    input: &mut R,
    out: &mut W,
    rng: &mut G,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let typewriter = Typewriter::new(opts.delay);

    if opts.intro {
        if opts.clear {
            term::clear_screen();
        }
        typewriter.play(out, constants::WELCOME_PROMPT)?;
        wait_for_enter(input)?;
        typewriter.play(out, &script::countdown(constants::COUNTDOWN_FROM))?;
    }

    if opts.clear {
        term::clear_screen();
    }

    tracing::info!(
        source = pool.source(),
        lines = pool.len(),
        delay_ms = opts.delay.as_millis() as u64,
        budget = opts.line_budget,
        "Feed starting"
    );

    let mut printed: u64 = 0;
    loop {
        if let Some(budget) = opts.line_budget {
            if printed >= budget {
                break;
            }
        }
        typewriter.play(out, pool.pick(rng))?;
        printed += 1;
    }

    tracing::info!(lines = printed, "Feed finished");
    Ok(())
}

/// Block until one line (typically blank) arrives on the input handle.
///
/// The line content is discarded; EOF counts as confirmation so piped
/// input cannot hang the intro.
fn wait_for_enter<R: BufRead>(input: &mut R) -> std::io::Result<()> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
