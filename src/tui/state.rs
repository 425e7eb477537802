//! Application state for the TUI.
//!
//! Everything here is plain data; the open session itself lives in the
//! `SessionController` owned by `App`.

use crate::catalog::Category;
use crate::filter::Selection;

use super::input::TextInput;

/// Spinner frames shown while a session is processing
pub const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Mutable presentation state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Active category / quick-filter tag
    pub selection: Selection,
    /// Highlighted row in the filtered tool list
    pub cursor: usize,
    /// Buffer behind the open tool's input widget
    pub input: TextInput,
    /// One-line status or notice for the footer
    pub status: Option<String>,
    /// Spinner frame counter, advanced on tick
    pub spinner: usize,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER[self.spinner % SPINNER.len()]
    }

    /// Keep the cursor inside a list of `len` rows
    pub fn clamp_cursor(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

/// Next sidebar entry after `current`: All -> PDF Tools -> Image Tools -> All
pub fn next_sidebar_category(current: Option<Category>) -> Option<Category> {
    let sidebar = Category::SIDEBAR;
    match current.and_then(|c| sidebar.iter().position(|s| *s == c)) {
        None => sidebar.first().copied(),
        Some(i) => sidebar.get(i + 1).copied(),
    }
}
