//! Interaction state machine for one open tool.
//!
//! INPUT -> PROCESSING -> RESULT, RESULT -> INPUT on reset, and
//! PROCESSING -> INPUT when processing faults. A session is tied to the
//! generation it was opened under; the controller uses that number to drop
//! completions that belong to a discarded session.

use chrono::{DateTime, Utc};

use crate::catalog::{InputWidget, InteractionType, Tool};
use crate::error::{DocHubError, Result};

use super::outcome::{ResultPayload, ResultRecord};
use super::upload::UploadedFile;

/// Phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Input,
    Processing,
    Result,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Processing => "processing",
            Self::Result => "result",
        }
    }
}

/// Snapshot of the captured input handed to the completion policy
#[derive(Debug, Clone, Default)]
pub struct ProcessRequest {
    pub text: String,
    pub file: Option<UploadedFile>,
}

/// Session state for the currently open tool
#[derive(Debug, Clone)]
pub struct Session {
    tool: Tool,
    generation: u64,
    phase: Phase,
    text_input: String,
    uploaded_file: Option<UploadedFile>,
    result: Option<ResultPayload>,
    completed_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Fresh session in INPUT
    pub fn new(tool: Tool, generation: u64) -> Self {
        Self {
            tool,
            generation,
            phase: Phase::Input,
            text_input: String::new(),
            uploaded_file: None,
            result: None,
            completed_at: None,
        }
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn text_input(&self) -> &str {
        &self.text_input
    }

    pub fn uploaded_file(&self) -> Option<&UploadedFile> {
        self.uploaded_file.as_ref()
    }

    pub fn result(&self) -> Option<&ResultPayload> {
        self.result.as_ref()
    }

    pub fn input_widget(&self) -> InputWidget {
        self.tool.input_widget()
    }

    fn require_phase(&self, expected: Phase, action: &str) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(DocHubError::InvalidState(format!(
                "cannot {} while {}",
                action,
                self.phase.name()
            )))
        }
    }

    /// Replace the text input
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        self.require_phase(Phase::Input, "edit text")?;
        self.text_input = text.into();
        Ok(())
    }

    /// Attach a file, replacing any earlier one. Returns the replaced file.
    pub fn supply_file(&mut self, file: UploadedFile) -> Result<Option<UploadedFile>> {
        self.require_phase(Phase::Input, "attach a file")?;
        Ok(self.uploaded_file.replace(file))
    }

    /// Why the process action is disabled, if it is
    pub fn action_blocker(&self) -> Option<&'static str> {
        if self.phase != Phase::Input {
            return Some("not accepting input");
        }
        match self.tool.interaction {
            InteractionType::FileProcessor if self.uploaded_file.is_none() => Some("no file supplied"),
            InteractionType::TextEditor if self.text_input.is_empty() && !self.tool.is_text_document_generator() => {
                Some("no text entered")
            }
            _ => None,
        }
    }

    /// Action-enablement predicate
    pub fn can_process(&self) -> bool {
        self.action_blocker().is_none()
    }

    /// INPUT -> PROCESSING
    pub fn begin_processing(&mut self) -> Result<ProcessRequest> {
        if let Some(reason) = self.action_blocker() {
            return Err(DocHubError::InvalidAction(reason.to_string()));
        }
        self.phase = Phase::Processing;
        Ok(ProcessRequest {
            text: self.text_input.clone(),
            file: self.uploaded_file.clone(),
        })
    }

    /// PROCESSING -> RESULT
    pub fn complete(&mut self, payload: ResultPayload) -> Result<()> {
        self.require_phase(Phase::Processing, "complete")?;
        self.result = Some(payload);
        self.completed_at = Some(Utc::now());
        self.phase = Phase::Result;
        Ok(())
    }

    /// PROCESSING -> INPUT after a fault; captured input is kept
    pub fn fail(&mut self) -> Result<()> {
        self.require_phase(Phase::Processing, "fail")?;
        self.phase = Phase::Input;
        Ok(())
    }

    /// RESULT -> INPUT, clearing text, file and result
    pub fn reset(&mut self) -> Result<()> {
        self.require_phase(Phase::Result, "reset")?;
        self.phase = Phase::Input;
        self.text_input.clear();
        self.uploaded_file = None;
        self.result = None;
        self.completed_at = None;
        Ok(())
    }

    /// Record of the completed run, if in RESULT
    pub fn record(&self) -> Option<ResultRecord> {
        let payload = self.result.as_ref()?;
        let completed_at = self.completed_at?;
        Some(ResultRecord::new(&self.tool.id, payload, completed_at))
    }
}
