//! Result payloads produced by a completed session.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Synthesized output file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub base: String,
    pub extension: String,
}

impl OutputFile {
    pub fn new(base: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            extension: extension.into(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.base, self.extension)
    }
}

impl fmt::Display for OutputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.base, self.extension)
    }
}

/// What a session shows once it reaches RESULT
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultPayload {
    /// A file ready for download
    File(OutputFile),
    /// Free text, copyable to the clipboard
    Text(String),
}

impl ResultPayload {
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    pub fn file_name(&self) -> Option<String> {
        match self {
            Self::File(out) => Some(out.file_name()),
            Self::Text(_) => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::File(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Short kind name for serialized records
    pub fn kind(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Text(_) => "text",
        }
    }
}

impl fmt::Display for ResultPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(out) => write!(f, "{}", out),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Serializable summary of one completed run
#[derive(Debug, Clone, Serialize)]
pub struct ResultRecord {
    pub tool_id: String,
    pub kind: String,
    pub payload: String,
    pub completed_at: DateTime<Utc>,
}

impl ResultRecord {
    pub fn new(tool_id: impl Into<String>, payload: &ResultPayload, completed_at: DateTime<Utc>) -> Self {
        Self {
            tool_id: tool_id.into(),
            kind: payload.kind().to_string(),
            payload: payload.to_string(),
            completed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_name() {
        let out = OutputFile::new("processed_file", "docx");
        assert_eq!(out.file_name(), "processed_file.docx");
        assert_eq!(out.to_string(), "processed_file.docx");
    }

    #[test]
    fn test_payload_accessors() {
        let file = ResultPayload::File(OutputFile::new("merged_document", "pdf"));
        assert!(file.is_file());
        assert_eq!(file.file_name().as_deref(), Some("merged_document.pdf"));
        assert_eq!(file.text(), None);
        assert_eq!(file.kind(), "file");

        let text = ResultPayload::Text("Action Completed".to_string());
        assert!(!text.is_file());
        assert_eq!(text.text(), Some("Action Completed"));
        assert_eq!(text.file_name(), None);
        assert_eq!(text.to_string(), "Action Completed");
    }

    #[test]
    fn test_result_record_json() {
        let payload = ResultPayload::File(OutputFile::new("split_documents", "zip"));
        let record = ResultRecord::new("split-pdf", &payload, Utc::now());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["tool_id"], "split-pdf");
        assert_eq!(json["kind"], "file");
        assert_eq!(json["payload"], "split_documents.zip");
        assert!(json["completed_at"].is_string());
    }
}
