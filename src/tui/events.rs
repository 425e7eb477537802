//! Event handling for the TUI.
//!
//! A blocking reader task polls crossterm and forwards events into a channel,
//! so `next()` can sit inside `tokio::select!` without losing keystrokes.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use eyre::{Result, eyre};
use tokio::sync::mpsc;

/// Unified event type for the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),
    /// Periodic tick (drives the processing spinner)
    Tick,
    /// Terminal resize
    Resize(u16, u16),
}

fn translate(event: CrosstermEvent) -> Event {
    match event {
        // Only key presses, not releases
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
        CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
        _ => Event::Tick,
    }
}

/// Handles keyboard and tick events.
pub struct EventHandler {
    tick_rate: Duration,
    rx: mpsc::Receiver<Result<Event>>,
}

impl EventHandler {
    /// Start the reader with the given tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate_ms);
        let (tx, rx) = mpsc::channel(100);

        tokio::task::spawn_blocking(move || {
            loop {
                let next: Result<Event> = match event::poll(tick_rate) {
                    Ok(true) => event::read().map(translate).map_err(Into::into),
                    Ok(false) => Ok(Event::Tick),
                    Err(e) => Err(e.into()),
                };
                let failed = next.is_err();
                if tx.blocking_send(next).is_err() || failed {
                    break;
                }
            }
        });

        Self { tick_rate, rx }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Get the next event.
    pub async fn next(&mut self) -> Result<Event> {
        self.rx
            .recv()
            .await
            .ok_or_else(|| eyre!("terminal event reader stopped"))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn test_translate_press() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(matches!(translate(CrosstermEvent::Key(key)), Event::Key(_)));
    }

    #[test]
    fn test_translate_release_is_tick() {
        let key = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(matches!(translate(CrosstermEvent::Key(key)), Event::Tick));
    }

    #[test]
    fn test_translate_resize() {
        assert!(matches!(translate(CrosstermEvent::Resize(80, 24)), Event::Resize(80, 24)));
    }

    #[test]
    fn test_event_debug() {
        assert!(format!("{:?}", Event::Tick).contains("Tick"));
    }
}
