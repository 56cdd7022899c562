use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use console::style;

static DEBUG: AtomicBool = AtomicBool::new(false);

/// Enable debug output for the rest of the process.
pub fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

pub fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

pub fn debug(message: &str) {
    if debug_enabled() {
        let _ = writeln!(io::stderr(), "{}", style(message).dim());
    }
}

pub fn info(message: &str) {
    let _ = writeln!(io::stderr(), "{}", message);
}

pub fn warn(message: &str) {
    let _ = writeln!(io::stderr(), "{}", style(message).yellow());
}

pub fn error(message: &str) {
    let _ = writeln!(io::stderr(), "{}", style(message).red());
}
