//! Terminal User Interface for dochub.
//!
//! A catalog screen with a quick-filter bar and category sidebar, and a modal
//! for the open tool that follows the session through input, processing and
//! result. Runs on the tokio runtime alongside the session controller.

mod app;
mod events;
mod input;
mod runner;
mod state;
mod views;

pub use app::App;
pub use events::{Event, EventHandler};
pub use input::{KeyExt, TextInput};
pub use runner::TuiRunner;
pub use state::AppState;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::Result;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// Enables raw mode and switches to the alternate screen.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Palette
pub mod colors {
    use ratatui::style::Color;

    pub const ACTIVE: Color = Color::Rgb(0, 255, 255); // Cyan
    pub const SELECTED: Color = Color::Rgb(40, 40, 60);
    pub const ENABLED: Color = Color::Rgb(0, 255, 127); // Spring green
    pub const PROCESSING: Color = Color::Rgb(255, 215, 0); // Gold
    pub const COMPLETE: Color = Color::Rgb(50, 205, 50); // Lime green
    pub const NOTICE: Color = Color::Rgb(255, 165, 0); // Orange
    pub const HEADER: Color = Color::Rgb(0, 255, 255);
    pub const KEYBIND: Color = Color::Rgb(0, 255, 255);
    pub const DIM: Color = Color::DarkGray;
}
