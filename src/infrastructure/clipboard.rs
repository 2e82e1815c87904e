//! Write-only clipboard access.

use std::io::{self, Write};
use std::sync::Mutex;

use base64::Engine as _;

/// Destination for copied short URLs.
///
/// There is no read-back: callers treat a write as successful and only log
/// errors.
#[cfg_attr(test, mockall::automock)]
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> io::Result<()>;
}

/// Clipboard that asks the terminal emulator to copy via OSC 52.
///
/// The text is sent base64-encoded inside the `ESC ] 52 ; c ; <data> BEL`
/// control sequence. Terminals that do not support OSC 52 ignore it.
pub struct Osc52Clipboard<W: Write + Send = io::Stdout> {
    out: Mutex<W>,
}

impl Osc52Clipboard {
    /// Writes to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

/// Builds the OSC 52 sequence that places `text` on the system clipboard.
pub fn osc52_sequence(text: &str) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(text);
    format!("\x1b]52;c;{}\x07", payload)
}

impl<W: Write + Send> Clipboard for Osc52Clipboard<W> {
    fn write_text(&self, text: &str) -> io::Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| io::Error::other("clipboard writer lock poisoned"))?;
        out.write_all(osc52_sequence(text).as_bytes())?;
        out.flush()
    }
}
