//! Clipboard write capability for copying text results
//!
//! The terminal front end writes through OSC 52, which most terminal
//! emulators forward to the system clipboard (including over SSH).

use std::io::Write;

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::error::{DocHubError, Result};

pub trait Clipboard: Send {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Encode `text` as an OSC 52 "set clipboard" sequence
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

/// Writes OSC 52 sequences to a terminal stream
pub struct Osc52Clipboard<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Osc52Clipboard<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| DocHubError::Clipboard(e.to_string()))?;
        log::debug!("Copied {} bytes to clipboard", text.len());
        Ok(())
    }
}

/// In-process clipboard, used when no terminal is attached
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_osc52_writes_to_stream() {
        let mut clipboard = Osc52Clipboard::new(Vec::new());
        clipboard.write_text("Action Completed").unwrap();
        let written = String::from_utf8(clipboard.into_inner()).unwrap();
        assert!(written.starts_with("\x1b]52;c;"));
        assert!(written.ends_with('\x07'));
        assert!(written.contains(&STANDARD.encode("Action Completed")));
    }

    #[test]
    fn test_memory_clipboard() {
        let mut clipboard = MemoryClipboard::new();
        assert!(clipboard.contents().is_none());
        clipboard.write_text("copied").unwrap();
        assert_eq!(clipboard.contents(), Some("copied"));
    }
}
