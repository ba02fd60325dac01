// HackTyper - platform/term.rs
//
// OS screen clearing.
// Dependencies: standard library only.

/// Clear the terminal screen.
///
/// Platform behaviour:
/// - **Windows**: `cmd /C cls` — `cls` is a cmd builtin, not an
///   executable, so it must go through the shell.
/// - **Linux / macOS**: `clear`.
/// - **Other**: the ANSI erase-display + cursor-home sequence written
///   straight to stdout, since there is no portable command to run.
///
/// The command is waited on so the clear completes before playback
/// continues. Any failure to spawn or run it is logged at WARN level and
/// never propagated; a missed clear degrades the effect, nothing more.
pub fn clear_screen() {
    #[cfg(target_os = "windows")]
    {
        match std::process::Command::new("cmd").args(["/C", "cls"]).status() {
            Ok(status) if !status.success() => {
                tracing::warn!(%status, "cls exited unsuccessfully");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to run cls");
            }
            _ => {}
        }
    }

    #[cfg(any(target_os = "linux", target_os = "macos"))]
    {
        match std::process::Command::new("clear").status() {
            Ok(status) if !status.success() => {
                tracing::warn!(%status, "clear exited unsuccessfully");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to run clear");
            }
            _ => {}
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        use std::io::Write;
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout
            .write_all(b"\x1b[2J\x1b[1;1H")
            .and_then(|()| stdout.flush())
        {
            tracing::warn!(error = %e, "Failed to write ANSI clear sequence");
        }
    }
}
