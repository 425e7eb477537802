//! Session controller
//!
//! Owns at most one open session. Opening or closing bumps a generation
//! counter and aborts in-flight work; completions come back over a channel
//! tagged with the generation that started them, and anything whose tag no
//! longer matches is dropped.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::catalog::Tool;
use crate::error::{DocHubError, Result};

use super::machine::{Phase, Session};
use super::outcome::ResultPayload;
use super::policy::CompletionPolicy;
use super::upload::UploadedFile;

/// User-visible notice shown when processing faults
pub const FAULT_NOTICE: &str = "Error processing request";

const EVENT_BUFFER: usize = 16;

/// Completion reported by a processing task
#[derive(Debug)]
pub struct CompletionEvent {
    pub generation: u64,
    pub outcome: Result<ResultPayload>,
}

/// Drives the open/act/reset/close lifecycle
pub struct SessionController {
    policy: Arc<dyn CompletionPolicy>,
    session: Option<Session>,
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
    event_tx: mpsc::Sender<CompletionEvent>,
    event_rx: mpsc::Receiver<CompletionEvent>,
    notice: Option<String>,
}

impl SessionController {
    pub fn new(policy: Arc<dyn CompletionPolicy>) -> Self {
        let (event_tx, event_rx) = mpsc::channel(EVENT_BUFFER);
        Self {
            policy,
            session: None,
            generation: 0,
            in_flight: None,
            event_tx,
            event_rx,
            notice: None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Phase of the open session
    pub fn phase(&self) -> Option<Phase> {
        self.session.as_ref().map(Session::phase)
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    fn session_mut(&mut self) -> Result<&mut Session> {
        self.session.as_mut().ok_or(DocHubError::NoSession)
    }

    fn cancel_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }

    /// Open `tool` in a fresh INPUT session, discarding any previous one
    pub fn open(&mut self, tool: Tool) {
        self.cancel_in_flight();
        self.generation += 1;
        self.notice = None;
        log::info!("Opening {} (generation {})", tool.id, self.generation);
        self.session = Some(Session::new(tool, self.generation));
    }

    /// Dismiss the open session, if any
    pub fn close(&mut self) {
        self.cancel_in_flight();
        self.generation += 1;
        self.notice = None;
        if let Some(session) = self.session.take() {
            log::info!("Closed {} in {}", session.tool().id, session.phase().name());
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        self.session_mut()?.set_text(text)
    }

    /// Attach a file. A mismatch against the tool's accept filter only
    /// raises a notice.
    pub fn supply_file(&mut self, file: UploadedFile) -> Result<()> {
        let session = self.session_mut()?;
        let warning = session
            .tool()
            .accepts
            .as_deref()
            .filter(|accepts| !file.matches_accept(accepts))
            .map(|accepts| format!("{} does not match {}", file.name, accepts));
        session.supply_file(file)?;
        if let Some(warning) = warning {
            log::warn!("{}", warning);
            self.notice = Some(warning);
        } else {
            self.notice = None;
        }
        Ok(())
    }

    /// Whether the process action is enabled
    pub fn can_act(&self) -> bool {
        self.session.as_ref().is_some_and(Session::can_process)
    }

    /// INPUT -> PROCESSING, spawning the completion task
    pub fn act(&mut self) -> Result<()> {
        let generation = self.generation;
        let session = self.session_mut()?;
        let request = session.begin_processing()?;
        let tool = session.tool().clone();
        log::info!("Processing {} (generation {})", tool.id, generation);

        let policy = Arc::clone(&self.policy);
        let event_tx = self.event_tx.clone();
        let handle = tokio::spawn(async move {
            let outcome = match AssertUnwindSafe(policy.complete(&tool, &request))
                .catch_unwind()
                .await
            {
                Ok(outcome) => outcome,
                Err(_) => Err(DocHubError::ProcessingFault(format!("{} panicked", tool.id))),
            };
            let _ = event_tx.send(CompletionEvent { generation, outcome }).await;
        });

        self.notice = None;
        self.in_flight = Some(handle);
        Ok(())
    }

    /// RESULT -> INPUT
    pub fn reset(&mut self) -> Result<()> {
        self.session_mut()?.reset()?;
        self.notice = None;
        Ok(())
    }

    /// Next completion event
    pub async fn recv(&mut self) -> Option<CompletionEvent> {
        self.event_rx.recv().await
    }

    /// Next completion event, without waiting
    pub fn try_recv(&mut self) -> Option<CompletionEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Apply a completion. Returns false when it was stale and dropped.
    pub fn apply(&mut self, event: CompletionEvent) -> bool {
        let current = self.generation;
        let Some(session) = self.session.as_mut() else {
            log::debug!("Dropping stale completion (generation {}, no session)", event.generation);
            return false;
        };
        if event.generation != current || session.phase() != Phase::Processing {
            log::debug!(
                "Dropping stale completion (generation {}, current {})",
                event.generation,
                current
            );
            return false;
        }

        self.in_flight = None;
        let applied = match event.outcome {
            Ok(payload) => {
                log::info!("{} completed: {}", session.tool().id, payload);
                session.complete(payload)
            }
            Err(e) => {
                log::error!("Processing {} failed: {}", session.tool().id, e);
                self.notice = Some(FAULT_NOTICE.to_string());
                session.fail()
            }
        };
        applied.is_ok()
    }

    /// Wait until the open session leaves PROCESSING
    pub async fn wait_for_completion(&mut self) -> Result<Phase> {
        loop {
            match self.phase() {
                None => return Err(DocHubError::NoSession),
                Some(Phase::Processing) => {}
                Some(phase) => return Ok(phase),
            }
            let event = self
                .recv()
                .await
                .ok_or_else(|| DocHubError::ProcessingFault("completion channel closed".to_string()))?;
            self.apply(event);
        }
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}
