use std::path::Path;
use std::process::Command;

use log::{debug, warn};

// ---------------------------------------------------------------------------
// Best-effort interactive display
// ---------------------------------------------------------------------------

/// Open the rendered image in the platform's default viewer.
///
/// Strictly best effort: the viewer is spawned detached, and a missing
/// opener or headless environment is logged and otherwise ignored.
pub fn try_show(path: &Path) {
    let Some(mut command) = open_command(path) else {
        debug!("no image viewer available on this platform");
        return;
    };

    match command.spawn() {
        Ok(_) => debug!("opened {} in image viewer", path.display()),
        Err(e) => warn!("could not open {} in image viewer: {e}", path.display()),
    }
}

#[cfg(target_os = "linux")]
fn open_command(path: &Path) -> Option<Command> {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    Some(command)
}

#[cfg(target_os = "macos")]
fn open_command(path: &Path) -> Option<Command> {
    let mut command = Command::new("open");
    command.arg(path);
    Some(command)
}

#[cfg(target_os = "windows")]
fn open_command(path: &Path) -> Option<Command> {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]).arg(path);
    Some(command)
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn open_command(_path: &Path) -> Option<Command> {
    None
}
