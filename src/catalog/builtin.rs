//! Compiled-in tool directory
//!
//! Order here is display order; the filter engine never re-sorts.

use super::definition::{Category, InteractionType, Tool};

fn file_tool(id: &str, title: &str, description: &str, category: Category, accepts: &str, action: &str) -> Tool {
    Tool::new(id, title, description, category, InteractionType::FileProcessor)
        .with_accepts(accepts)
        .with_action_text(action)
}

/// Every tool shipped with dochub
pub(crate) fn builtin_tools() -> Vec<Tool> {
    use Category::{Image, Pdf};

    vec![
        // Image tools first
        file_tool(
            "image-to-pdf",
            "Image to PDF",
            "Convert PNG, JPG, or WebP images into a single PDF.",
            Pdf,
            "image/*",
            "Create PDF",
        ),
        file_tool(
            "image-to-doc",
            "Image to DOC",
            "Convert images into editable Word documents.",
            Image,
            "image/*",
            "Convert to DOC",
        ),
        file_tool(
            "image-to-ppt",
            "Image to PPT",
            "Convert images into editable PowerPoint presentations.",
            Image,
            "image/*",
            "Convert to PPT",
        ),
        file_tool(
            "image-ocr",
            "Image to Text (OCR)",
            "Extract text content from images using OCR.",
            Image,
            "image/*",
            "Extract Text",
        ),
        file_tool(
            "image-compressor",
            "Image Compressor",
            "Optimize images for web use.",
            Image,
            "image/*",
            "Compress Image",
        ),
        file_tool(
            "image-converter",
            "Image Converter",
            "Convert between JPG, PNG, and WEBP.",
            Image,
            "image/*",
            "Convert",
        ),
        file_tool(
            "doc-to-image",
            "DOC to Image",
            "Convert DOC/DOCX pages into high-quality images.",
            Image,
            ".doc,.docx",
            "Convert to Images",
        ),
        // PDF tools
        file_tool(
            "merge-pdf",
            "Merge PDF",
            "Combine multiple PDFs into one unified document.",
            Pdf,
            ".pdf",
            "Merge Files",
        ),
        file_tool(
            "split-pdf",
            "Split PDF",
            "Separate a single PDF into individual pages.",
            Pdf,
            ".pdf",
            "Split Document",
        ),
        file_tool(
            "compress-pdf",
            "Compress PDF",
            "Reduce file size while maintaining quality.",
            Pdf,
            ".pdf",
            "Compress",
        ),
        file_tool(
            "pdf-to-word",
            "PDF to Word",
            "Convert PDF documents to editable Word files.",
            Pdf,
            ".pdf",
            "Convert to Word",
        ),
        file_tool(
            "pdf-to-docx",
            "PDF to DOCX",
            "Convert PDF files specifically to DOCX format.",
            Pdf,
            ".pdf",
            "Convert to DOCX",
        ),
        file_tool(
            "pdf-to-excel",
            "PDF to Excel",
            "Convert PDF data into editable Excel spreadsheets.",
            Pdf,
            ".pdf",
            "Convert to Excel",
        ),
        file_tool(
            "excel-to-pdf",
            "Excel to PDF",
            "Convert Excel spreadsheets to PDF format.",
            Pdf,
            ".xls,.xlsx",
            "Convert to PDF",
        ),
        file_tool(
            "pdf-to-ppt",
            "PDF to PowerPoint",
            "Convert PDF content into editable PowerPoint slides.",
            Pdf,
            ".pdf",
            "Convert to PPT",
        ),
        file_tool(
            "ppt-to-pdf",
            "PowerPoint to PDF",
            "Convert PowerPoint presentations to PDF format.",
            Pdf,
            ".ppt,.pptx",
            "Convert to PDF",
        ),
        file_tool(
            "pdf-to-text",
            "PDF to Text",
            "Extract raw text from PDF files.",
            Pdf,
            ".pdf",
            "Extract Text",
        ),
        file_tool(
            "word-to-pdf",
            "Word to PDF",
            "Convert DOC/DOCX files to PDF format.",
            Pdf,
            ".doc,.docx",
            "Convert to PDF",
        ),
        file_tool(
            "pdf-to-jpg",
            "PDF to JPG",
            "Extract pages from PDF as high-quality images.",
            Pdf,
            ".pdf",
            "Convert to JPG",
        ),
        Tool::new(
            "text-to-pdf",
            "Text to PDF",
            "Convert plain text content into a PDF document.",
            Pdf,
            InteractionType::TextEditor,
        )
        .with_action_text("Download PDF"),
        file_tool(
            "unlock-pdf",
            "Unlock PDF",
            "Remove password protection from PDF files.",
            Pdf,
            ".pdf",
            "Unlock",
        ),
        file_tool(
            "protect-pdf",
            "Protect PDF",
            "Encrypt your PDF with a secure password.",
            Pdf,
            ".pdf",
            "Encrypt",
        ),
        file_tool(
            "rotate-pdf",
            "Rotate PDF",
            "Rotate PDF pages permanently.",
            Pdf,
            ".pdf",
            "Rotate",
        ),
    ]
}
