//! Forward `tracing` output to the browser console.
//!
//! `wasm_start` installs the subscriber once; each round then applies its
//! configured `log_level` through [`set_console_level`].

use std::io;
use std::sync::OnceLock;

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Registry, fmt, reload};
use wasm_bindgen::JsValue;

static LEVEL_HANDLE: OnceLock<reload::Handle<LevelFilter, Registry>> = OnceLock::new();

/// Collects one formatted event and prints it on drop. The fmt layer makes a
/// fresh writer per event, so each event becomes one console line.
#[derive(Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            web_sys::console::log_1(&JsValue::from_str(line));
        }
    }
}

/// Install the console subscriber at `level`.
pub fn init_console_logger(level: Level) {
    let (filter, handle) = reload::Layer::new(LevelFilter::from_level(level));
    // No wall clock on wasm32-unknown-unknown, so timestamps are off.
    let console = fmt::layer()
        .with_writer(ConsoleWriter::default)
        .with_target(false)
        .without_time();
    match tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .try_init()
    {
        Ok(()) => {
            let _ = LEVEL_HANDLE.set(handle);
        }
        Err(err) => tracing::debug!(error = %err, "console logger already installed"),
    }
}

/// Change the level of the installed console logger. Returns `false` when
/// no console logger is installed.
pub fn set_console_level(level: Level) -> bool {
    let Some(handle) = LEVEL_HANDLE.get() else {
        return false;
    };
    match handle.reload(LevelFilter::from_level(level)) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(error = %err, "could not change console log level");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_change_needs_installed_logger() {
        assert!(!set_console_level(Level::DEBUG));
    }
}
