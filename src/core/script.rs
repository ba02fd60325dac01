// HackTyper - core/script.rs
//
// Fixed intro script text. Pure string building, kept out of the
// orchestration layer so the exact emitted text is unit-testable.

use crate::util::constants;

/// Build the countdown message typed out after the confirmation wait.
///
/// `countdown(3)` yields `"Ready?\n3\n2\n1\nHere we go!!"`. A `from` of 0
/// drops the numbers but keeps the opener and finale.
pub fn countdown(from: u32) -> String {
    let mut text = String::from(constants::COUNTDOWN_OPENER);
    text.push('\n');
    for n in (1..=from).rev() {
        text.push_str(&n.to_string());
        text.push('\n');
    }
    text.push_str(constants::COUNTDOWN_FINALE);
    text
}
