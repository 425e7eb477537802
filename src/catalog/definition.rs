//! Tool definitions and classification
//!
//! A `Tool` is one entry in the directory: display strings plus the two closed
//! enumerations (`Category`, `InteractionType`) that drive filtering and the
//! per-tool interaction flow.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DocHubError;

/// Identity of the text-to-document generator (may proceed with empty text)
pub const TEXT_TO_PDF: &str = "text-to-pdf";

/// Identity of the image text extraction tool (produces text, not a file)
pub const IMAGE_OCR: &str = "image-ocr";

/// Label used when a tool has no action button override
pub const DEFAULT_ACTION_TEXT: &str = "Process Data";

/// Coarse grouping axis used by sidebar navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Pdf,
    Image,
    Text,
    Utility,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 4] = [Category::Pdf, Category::Image, Category::Text, Category::Utility];

    /// Categories offered by the sidebar
    pub const SIDEBAR: [Category; 2] = [Category::Pdf, Category::Image];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF Tools",
            Self::Image => "Image Tools",
            Self::Text => "Text Tools",
            Self::Utility => "Utility Tools",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DocHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" | "pdf tools" => Ok(Self::Pdf),
            "image" | "image tools" => Ok(Self::Image),
            "text" | "text tools" => Ok(Self::Text),
            "utility" | "utility tools" => Ok(Self::Utility),
            _ => Err(DocHubError::UnknownCategory(s.to_string())),
        }
    }
}

/// How a tool collects input and completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    /// Upload -> process -> download
    FileProcessor,
    /// Textarea -> result
    TextEditor,
    Generator,
    Calculator,
    Converter,
}

impl InteractionType {
    /// Wire name, as used in serialized descriptors
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FileProcessor => "file_processor",
            Self::TextEditor => "text_editor",
            Self::Generator => "generator",
            Self::Calculator => "calculator",
            Self::Converter => "converter",
        }
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which capture widget a tool presents in the INPUT phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputWidget {
    /// Single file, drag-and-drop or browse; later picks replace earlier ones
    FileDrop,
    /// Multi-line text area
    MultiLine,
    /// Single-line text field
    SingleLine,
}

/// A catalog entry describing one simulated utility
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Stable identity; display key and completion dispatch key
    pub id: String,
    pub title: String,
    /// Also consulted as matching text by callers that search descriptions
    pub description: String,
    pub category: Category,
    pub interaction: InteractionType,
    /// Advisory file-type filter, only meaningful for file processors
    #[serde(default)]
    pub accepts: Option<String>,
    /// Override for the primary action button label
    #[serde(default)]
    pub action_text: Option<String>,
}

impl Tool {
    /// Create a new tool definition
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        interaction: InteractionType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category,
            interaction,
            accepts: None,
            action_text: None,
        }
    }

    /// Set the advisory accept filter
    pub fn with_accepts(mut self, accepts: impl Into<String>) -> Self {
        self.accepts = Some(accepts.into());
        self
    }

    /// Set the action button label
    pub fn with_action_text(mut self, text: impl Into<String>) -> Self {
        self.action_text = Some(text.into());
        self
    }

    /// Label for the primary action button
    pub fn action_label(&self) -> &str {
        self.action_text.as_deref().unwrap_or(DEFAULT_ACTION_TEXT)
    }

    pub fn is_file_processor(&self) -> bool {
        self.interaction == InteractionType::FileProcessor
    }

    pub fn is_text_document_generator(&self) -> bool {
        self.id == TEXT_TO_PDF
    }

    pub fn is_text_extractor(&self) -> bool {
        self.id == IMAGE_OCR
    }

    /// Capture widget for the INPUT phase
    pub fn input_widget(&self) -> InputWidget {
        if self.is_file_processor() {
            InputWidget::FileDrop
        } else if self.interaction == InteractionType::TextEditor || self.is_text_document_generator() {
            InputWidget::MultiLine
        } else {
            InputWidget::SingleLine
        }
    }

    /// Upload hint shown under the drop zone
    pub fn accepts_hint(&self) -> Option<String> {
        if !self.is_file_processor() {
            return None;
        }
        self.accepts.as_ref().map(|a| format!("Supports {}", a))
    }
}
