//! Quick-filter tags
//!
//! Tags are a text heuristic over lower-cased tool titles. Matching is plain
//! substring containment, so "Subdoctrine Viewer" is a DOC tool.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DocHubError;

/// Office-conversion titles kept out of the PDF quick filter
const PDF_EXCLUSIONS: [&str; 4] = ["excel to pdf", "powerpoint to pdf", "word to pdf", "text to pdf"];

/// Secondary grouping axis applied over tool titles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Image,
    #[serde(rename = "PDF")]
    Pdf,
    #[serde(rename = "DOC")]
    Doc,
    #[serde(rename = "PPT")]
    Ppt,
    Text,
}

impl Tag {
    /// Quick-filter bar order
    pub const ALL: [Tag; 5] = [Tag::Image, Tag::Pdf, Tag::Doc, Tag::Ppt, Tag::Text];

    /// Selection value ("Image", "PDF", ...)
    pub fn value(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Pdf => "PDF",
            Self::Doc => "DOC",
            Self::Ppt => "PPT",
            Self::Text => "Text",
        }
    }

    /// Button label in the quick-filter bar
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Image to",
            Self::Pdf => "PDF",
            Self::Doc => "DOC",
            Self::Ppt => "PPT",
            Self::Text => "Text to",
        }
    }

    /// Test a tool title against this tag
    pub fn matches_title(self, title: &str) -> bool {
        let title = title.to_lowercase();
        match self {
            Self::Image => title.contains("image"),
            Self::Pdf => title.contains("pdf") && !PDF_EXCLUSIONS.iter().any(|x| title.contains(x)),
            Self::Doc => title.contains("doc") || title.contains("word"),
            Self::Ppt => title.contains("ppt") || title.contains("powerpoint"),
            Self::Text => title.contains("text"),
        }
    }

    /// Next tag in bar order; `None` stands for "All"
    pub fn cycle(current: Option<Tag>) -> Option<Tag> {
        match current {
            None => Some(Self::ALL[0]),
            Some(tag) => {
                let pos = Self::ALL.iter().position(|t| *t == tag).unwrap_or(0);
                Self::ALL.get(pos + 1).copied()
            }
        }
    }

    /// Previous tag in bar order; `None` stands for "All"
    pub fn cycle_back(current: Option<Tag>) -> Option<Tag> {
        match current {
            None => Self::ALL.last().copied(),
            Some(tag) => {
                let pos = Self::ALL.iter().position(|t| *t == tag).unwrap_or(0);
                if pos == 0 { None } else { Some(Self::ALL[pos - 1]) }
            }
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Tag {
    type Err = DocHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" | "image to" => Ok(Self::Image),
            "pdf" => Ok(Self::Pdf),
            "doc" => Ok(Self::Doc),
            "ppt" => Ok(Self::Ppt),
            "text" | "text to" => Ok(Self::Text),
            _ => Err(DocHubError::UnknownTag(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_from_str() {
        assert_eq!("image".parse::<Tag>().unwrap(), Tag::Image);
        assert_eq!("PDF".parse::<Tag>().unwrap(), Tag::Pdf);
        assert_eq!("Doc".parse::<Tag>().unwrap(), Tag::Doc);
        assert_eq!("ppt".parse::<Tag>().unwrap(), Tag::Ppt);
        assert_eq!("Text to".parse::<Tag>().unwrap(), Tag::Text);
        assert!(matches!("xls".parse::<Tag>(), Err(DocHubError::UnknownTag(_))));
    }

    #[test]
    fn test_tag_labels() {
        assert_eq!(Tag::Image.label(), "Image to");
        assert_eq!(Tag::Text.label(), "Text to");
        assert_eq!(Tag::Pdf.to_string(), "PDF");
    }

    #[test]
    fn test_image_tag() {
        assert!(Tag::Image.matches_title("Image Compressor"));
        assert!(Tag::Image.matches_title("DOC to Image"));
        assert!(!Tag::Image.matches_title("PDF to JPG"));
    }

    #[test]
    fn test_pdf_tag_excludes_office_conversions() {
        assert!(Tag::Pdf.matches_title("Merge PDF"));
        assert!(Tag::Pdf.matches_title("Image to PDF"));
        assert!(Tag::Pdf.matches_title("PDF to Word"));
        assert!(!Tag::Pdf.matches_title("Word to PDF"));
        assert!(!Tag::Pdf.matches_title("Excel to PDF"));
        assert!(!Tag::Pdf.matches_title("PowerPoint to PDF"));
        assert!(!Tag::Pdf.matches_title("Text to PDF"));
    }

    #[test]
    fn test_doc_tag_is_substring_match() {
        assert!(Tag::Doc.matches_title("Word to PDF"));
        assert!(Tag::Doc.matches_title("PDF to DOCX"));
        assert!(Tag::Doc.matches_title("Subdoctrine Viewer"));
        assert!(!Tag::Doc.matches_title("Merge PDF"));
    }

    #[test]
    fn test_ppt_tag() {
        assert!(Tag::Ppt.matches_title("Image to PPT"));
        assert!(Tag::Ppt.matches_title("PowerPoint to PDF"));
        assert!(!Tag::Ppt.matches_title("PDF to Excel"));
    }

    #[test]
    fn test_text_tag() {
        assert!(Tag::Text.matches_title("Image to Text (OCR)"));
        assert!(Tag::Text.matches_title("Text to PDF"));
        assert!(!Tag::Text.matches_title("Rotate PDF"));
    }

    #[test]
    fn test_tag_cycle() {
        assert_eq!(Tag::cycle(None), Some(Tag::Image));
        assert_eq!(Tag::cycle(Some(Tag::Image)), Some(Tag::Pdf));
        assert_eq!(Tag::cycle(Some(Tag::Text)), None);
        assert_eq!(Tag::cycle_back(None), Some(Tag::Text));
        assert_eq!(Tag::cycle_back(Some(Tag::Image)), None);
        assert_eq!(Tag::cycle_back(Some(Tag::Ppt)), Some(Tag::Doc));
    }
}
