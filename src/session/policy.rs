//! Completion policy
//!
//! Resolves what a tool produces and how long the simulated work takes.
//! Precedence: text-to-document generator, then image text extraction, then
//! the file-processor output table, then a generic completion marker.

use std::time::Duration;

use async_trait::async_trait;

use crate::catalog::{IMAGE_OCR, TEXT_TO_PDF, Tool, ToolCatalog};
use crate::config::SimulationConfig;
use crate::error::{DocHubError, Result};

use super::machine::ProcessRequest;
use super::outcome::{OutputFile, ResultPayload};

/// Base name used when a file processor is missing from the table
pub const FALLBACK_BASE: &str = "processed_file";

/// Extension used when a file processor is missing from the table
pub const FALLBACK_EXTENSION: &str = "pdf";

/// Marker produced by non-file, non-special tools
pub const ACTION_COMPLETED: &str = "Action Completed";

/// Simulated text extraction output
pub const EXTRACTED_TEXT: &str = "Extracted Text Content:\n\n\
This is a simulated extraction of text from the image you uploaded. In a real server-side environment, \
an OCR engine would process the image bytes and identify the characters.\n\n\
Confidence: 99%\n\
Language: English";

/// Tool identity -> (output base name, extension)
const OUTPUT_TABLE: &[(&str, &str, &str)] = &[
    ("pdf-to-word", "processed_file", "docx"),
    ("pdf-to-docx", "processed_file", "docx"),
    ("pdf-to-excel", "processed_file", "xlsx"),
    ("pdf-to-ppt", "processed_file", "pptx"),
    ("pdf-to-text", "processed_file", "txt"),
    ("image-to-doc", "processed_file", "docx"),
    ("image-to-ppt", "processed_file", "pptx"),
    ("image-to-pdf", "processed_file", "pdf"),
    ("word-to-pdf", "processed_file", "pdf"),
    ("excel-to-pdf", "processed_file", "pdf"),
    ("ppt-to-pdf", "processed_file", "pdf"),
    ("image-compressor", "optimized_images", "zip"),
    ("image-converter", "processed_file", "png"),
    ("doc-to-image", "converted_pages", "zip"),
    ("pdf-to-jpg", "extracted_pages", "zip"),
    ("split-pdf", "split_documents", "zip"),
    ("merge-pdf", "merged_document", "pdf"),
    ("compress-pdf", "compressed_document", "pdf"),
    ("unlock-pdf", "unlocked_document", "pdf"),
    ("protect-pdf", "protected_document", "pdf"),
    ("rotate-pdf", "rotated_document", "pdf"),
];

/// Output file for a file-processor identity, with the generic fallback
pub fn output_file_for(tool_id: &str) -> OutputFile {
    OUTPUT_TABLE
        .iter()
        .find(|(id, _, _)| *id == tool_id)
        .map(|(_, base, ext)| OutputFile::new(*base, *ext))
        .unwrap_or_else(|| OutputFile::new(FALLBACK_BASE, FALLBACK_EXTENSION))
}

/// Every table key and special identity must name a catalog entry
pub fn validate_completion_table(catalog: &ToolCatalog) -> Result<()> {
    let keys = OUTPUT_TABLE.iter().map(|(id, _, _)| *id);
    let special = [TEXT_TO_PDF, IMAGE_OCR];
    for id in keys.chain(special) {
        if !catalog.contains(id) {
            return Err(DocHubError::Config(format!(
                "completion table references unknown tool '{}'",
                id
            )));
        }
    }
    Ok(())
}

/// Which completion a tool gets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionRule {
    /// Fixed generated document name
    GeneratedDocument,
    /// Multi-line extracted text
    ExtractedText,
    /// Synthesized output file from the table
    OutputFile(OutputFile),
    /// "Action Completed"
    Generic,
}

impl CompletionRule {
    /// Resolve the rule for a tool
    pub fn for_tool(tool: &Tool) -> Self {
        if tool.is_text_document_generator() {
            Self::GeneratedDocument
        } else if tool.is_text_extractor() {
            Self::ExtractedText
        } else if tool.is_file_processor() {
            Self::OutputFile(output_file_for(&tool.id))
        } else {
            Self::Generic
        }
    }

    pub fn payload(&self) -> ResultPayload {
        match self {
            Self::GeneratedDocument => ResultPayload::File(OutputFile::new("document", "pdf")),
            Self::ExtractedText => ResultPayload::Text(EXTRACTED_TEXT.to_string()),
            Self::OutputFile(out) => ResultPayload::File(out.clone()),
            Self::Generic => ResultPayload::Text(ACTION_COMPLETED.to_string()),
        }
    }

    pub fn latency(&self, simulation: &SimulationConfig) -> Duration {
        match self {
            Self::GeneratedDocument => simulation.generated_document(),
            Self::ExtractedText => simulation.extracted_text(),
            Self::OutputFile(_) => simulation.file_output(),
            Self::Generic => simulation.generic(),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::GeneratedDocument => "generated document (document.pdf)".to_string(),
            Self::ExtractedText => "extracted text".to_string(),
            Self::OutputFile(out) => format!("output file ({})", out),
            Self::Generic => "generic completion".to_string(),
        }
    }
}

/// Produces the result for a processing session
#[async_trait]
pub trait CompletionPolicy: Send + Sync {
    /// Run the (simulated) work for `tool` and return its payload
    async fn complete(&self, tool: &Tool, request: &ProcessRequest) -> Result<ResultPayload>;
}

/// Sleeps for the configured latency, then returns the canned payload
#[derive(Debug, Clone, Default)]
pub struct SimulatedPolicy {
    simulation: SimulationConfig,
}

impl SimulatedPolicy {
    pub fn new(simulation: SimulationConfig) -> Self {
        Self { simulation }
    }

    /// Policy with zero latency
    pub fn instant() -> Self {
        Self::new(SimulationConfig::instant())
    }

    pub fn simulation(&self) -> &SimulationConfig {
        &self.simulation
    }
}

#[async_trait]
impl CompletionPolicy for SimulatedPolicy {
    async fn complete(&self, tool: &Tool, request: &ProcessRequest) -> Result<ResultPayload> {
        let rule = CompletionRule::for_tool(tool);
        let delay = rule.latency(&self.simulation);
        log::debug!(
            "Simulating {} for {} ({}ms, file={:?}, text_len={})",
            rule.describe(),
            tool.id,
            delay.as_millis(),
            request.file.as_ref().map(|f| f.name.as_str()),
            request.text.len()
        );
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(rule.payload())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, InteractionType};

    fn builtin(id: &str) -> &'static Tool {
        ToolCatalog::builtin().get(id).unwrap()
    }

    #[test]
    fn test_output_table_literals() {
        let cases = [
            ("pdf-to-word", "processed_file.docx"),
            ("pdf-to-docx", "processed_file.docx"),
            ("pdf-to-excel", "processed_file.xlsx"),
            ("pdf-to-ppt", "processed_file.pptx"),
            ("pdf-to-text", "processed_file.txt"),
            ("image-to-doc", "processed_file.docx"),
            ("image-to-ppt", "processed_file.pptx"),
            ("image-to-pdf", "processed_file.pdf"),
            ("excel-to-pdf", "processed_file.pdf"),
            ("image-compressor", "optimized_images.zip"),
            ("image-converter", "processed_file.png"),
            ("doc-to-image", "converted_pages.zip"),
            ("pdf-to-jpg", "extracted_pages.zip"),
            ("split-pdf", "split_documents.zip"),
            ("merge-pdf", "merged_document.pdf"),
            ("compress-pdf", "compressed_document.pdf"),
            ("unlock-pdf", "unlocked_document.pdf"),
            ("protect-pdf", "protected_document.pdf"),
            ("rotate-pdf", "rotated_document.pdf"),
        ];
        for (id, expected) in cases {
            assert_eq!(output_file_for(id).file_name(), expected, "wrong output for {}", id);
        }
    }

    #[test]
    fn test_output_table_fallback() {
        assert_eq!(output_file_for("audio-trimmer").file_name(), "processed_file.pdf");
    }

    #[test]
    fn test_validate_table_against_builtin() {
        assert!(validate_completion_table(ToolCatalog::builtin()).is_ok());
    }

    #[test]
    fn test_validate_table_rejects_missing_tool() {
        let catalog = ToolCatalog::new(vec![builtin("merge-pdf").clone()]);
        let result = validate_completion_table(&catalog);
        assert!(matches!(result, Err(DocHubError::Config(_))));
    }

    #[test]
    fn test_rule_precedence() {
        assert_eq!(CompletionRule::for_tool(builtin(TEXT_TO_PDF)), CompletionRule::GeneratedDocument);
        assert_eq!(CompletionRule::for_tool(builtin(IMAGE_OCR)), CompletionRule::ExtractedText);
        assert_eq!(
            CompletionRule::for_tool(builtin("pdf-to-word")),
            CompletionRule::OutputFile(OutputFile::new("processed_file", "docx"))
        );

        let calc = Tool::new("calc", "Calc", "c", Category::Utility, InteractionType::Calculator);
        assert_eq!(CompletionRule::for_tool(&calc), CompletionRule::Generic);
    }

    #[test]
    fn test_rule_payloads() {
        let doc = CompletionRule::GeneratedDocument.payload();
        assert_eq!(doc.file_name().as_deref(), Some("document.pdf"));

        let text = CompletionRule::ExtractedText.payload();
        let body = text.text().unwrap();
        assert!(body.contains("Confidence: 99%"));
        assert!(body.contains("Language: English"));

        assert_eq!(CompletionRule::Generic.payload().text(), Some("Action Completed"));
    }

    #[test]
    fn test_rule_latency() {
        let sim = SimulationConfig::default();
        assert_eq!(CompletionRule::GeneratedDocument.latency(&sim), Duration::from_millis(2000));
        assert_eq!(CompletionRule::ExtractedText.latency(&sim), Duration::from_millis(2500));
        assert_eq!(
            CompletionRule::OutputFile(output_file_for("merge-pdf")).latency(&sim),
            Duration::from_millis(2000)
        );
        assert_eq!(CompletionRule::Generic.latency(&sim), Duration::from_millis(600));
    }

    #[tokio::test]
    async fn test_simulated_policy_instant() {
        let policy = SimulatedPolicy::instant();
        let payload = policy
            .complete(builtin("split-pdf"), &ProcessRequest::default())
            .await
            .unwrap();
        assert_eq!(payload.file_name().as_deref(), Some("split_documents.zip"));
    }

    #[tokio::test]
    async fn test_simulated_policy_waits() {
        let policy = SimulatedPolicy::new(SimulationConfig::uniform(30));
        let started = std::time::Instant::now();
        policy.complete(builtin("merge-pdf"), &ProcessRequest::default()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}
