//! TUI Runner - main event loop.
//!
//! The `TuiRunner` owns the terminal, app, and event handler. Each turn it
//! renders, then waits on whichever comes first: a terminal event or a
//! session completion.

use eyre::Result;
use log::info;

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views::render;

/// Main TUI runner that owns the event loop.
pub struct TuiRunner {
    terminal: Tui,
    app: App,
    event_handler: EventHandler,
}

impl TuiRunner {
    pub fn new(terminal: Tui, app: App, tick_rate_ms: u64) -> Self {
        Self {
            terminal,
            app,
            event_handler: EventHandler::new(tick_rate_ms),
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    /// Run the main TUI loop until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting TUI main loop");

        while !self.app.state.should_quit {
            self.terminal.draw(|f| render(&self.app, f))?;

            tokio::select! {
                event = self.event_handler.next() => match event? {
                    Event::Key(key) => self.app.handle_key(key),
                    Event::Tick => self.app.tick(),
                    Event::Resize(_, _) => {}
                },
                Some(completion) = self.app.controller_mut().recv() => {
                    self.app.handle_completion(completion);
                }
            }
        }

        info!("TUI main loop ended");
        Ok(())
    }
}
