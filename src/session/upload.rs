//! Uploaded file handle
//!
//! The handle records where a file lives and how large it is. Bytes are never
//! read; the `accepts` filter is advisory only.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{DocHubError, Result};

/// Extension to media type, for matching `image/*` style filters
const MEDIA_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("webp", "image/webp"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("pdf", "application/pdf"),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("doc", "application/msword"),
    ("docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
    ("xls", "application/vnd.ms-excel"),
    ("xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
    ("ppt", "application/vnd.ms-powerpoint"),
    ("pptx", "application/vnd.openxmlformats-officedocument.presentationml.presentation"),
];

/// Opaque handle to a user-supplied file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedFile {
    /// Display name (final path component)
    pub name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            size_bytes,
        }
    }

    /// Build a handle from a path on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let meta = std::fs::metadata(path)?;
        if !meta.is_file() {
            return Err(DocHubError::InvalidAction(format!("{} is not a file", path.display())));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, path, meta.len()))
    }

    /// Lower-cased extension of the file name
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
    }

    /// Media type guessed from the extension
    pub fn media_type(&self) -> Option<&'static str> {
        let ext = self.extension()?;
        MEDIA_TYPES.iter().find(|(e, _)| *e == ext).map(|(_, m)| *m)
    }

    /// Check against an accept filter such as `.doc,.docx` or `image/*`
    pub fn matches_accept(&self, accepts: &str) -> bool {
        let name = self.name.to_lowercase();
        let media = self.media_type();
        accepts
            .split(',')
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .any(|pattern| {
                if pattern.starts_with('.') {
                    name.ends_with(&pattern)
                } else if pattern == "*/*" {
                    true
                } else if let Some(major) = pattern.strip_suffix("/*") {
                    media.is_some_and(|m| m.split('/').next() == Some(major))
                } else {
                    media == Some(pattern.as_str())
                }
            })
    }
}
