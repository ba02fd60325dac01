// HackTyper - app/typewriter.rs
//
// The typewriter printer: emits text one character at a time, flushing
// after each character and sleeping a fixed interval in between, so the
// output appears to be typed live.
//
// Characters are Unicode scalar values, not bytes. Splitting a multi-byte
// character across flushes would hand the terminal invalid UTF-8 mid-glyph,
// so each character is encoded and written whole.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Per-character pacing for typewriter output.
#[derive(Debug, Clone, Copy)]
pub struct Typewriter {
    /// Pause between characters. Zero disables pacing entirely.
    delay: Duration,
}

impl Typewriter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Type `text` into `out`, blocking for the full duration of the string.
    ///
    /// Every character is written exactly once, in order, and flushed
    /// before the inter-character sleep so it is visible while the pause
    /// runs. I/O errors (e.g. a closed pipe) propagate immediately.
    pub fn play<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            out.flush()?;
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }
        Ok(())
    }
}
