//! Ordered, read-only tool catalog
//!
//! The catalog keeps tools in their provisioned order and an id index for
//! lookup. There is no mutation API; the built-in catalog is built once per
//! process.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{DocHubError, Result};

use super::builtin::builtin_tools;
use super::definition::{Category, Tool};

static BUILTIN: LazyLock<ToolCatalog> = LazyLock::new(|| ToolCatalog::new(builtin_tools()));

/// Catalog of tool definitions
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    tools: Vec<Tool>,
    index: HashMap<String, usize>,
}

impl ToolCatalog {
    /// Build a catalog, indexing the first occurrence of each id
    pub fn new(tools: Vec<Tool>) -> Self {
        let mut index = HashMap::with_capacity(tools.len());
        for (pos, tool) in tools.iter().enumerate() {
            index.entry(tool.id.clone()).or_insert(pos);
        }
        Self { tools, index }
    }

    /// Build a catalog, rejecting duplicate ids
    pub fn from_tools(tools: Vec<Tool>) -> Result<Self> {
        let catalog = Self::new(tools);
        catalog.validate()?;
        Ok(catalog)
    }

    /// The process-wide built-in catalog
    pub fn builtin() -> &'static ToolCatalog {
        &BUILTIN
    }

    /// Check that every id is unique
    pub fn validate(&self) -> Result<()> {
        if self.index.len() == self.tools.len() {
            return Ok(());
        }
        let duplicate = self
            .tools
            .iter()
            .enumerate()
            .find(|(pos, tool)| self.index.get(&tool.id) != Some(pos))
            .map(|(_, tool)| tool.id.clone())
            .unwrap_or_default();
        Err(DocHubError::DuplicateTool(duplicate))
    }

    /// All tools in catalog order
    pub fn list_all(&self) -> &[Tool] {
        &self.tools
    }

    /// Get a tool by id
    pub fn get(&self, id: &str) -> Option<&Tool> {
        self.index.get(id).map(|&pos| &self.tools[pos])
    }

    /// Get a tool by id, failing with `ToolNotFound`
    pub fn require(&self, id: &str) -> Result<&Tool> {
        self.get(id).ok_or_else(|| DocHubError::ToolNotFound(id.to_string()))
    }

    /// Check if a tool exists
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Tools in one category, catalog order preserved
    pub fn by_category(&self, category: Category) -> Vec<&Tool> {
        self.tools.iter().filter(|t| t.category == category).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::definition::{IMAGE_OCR, InteractionType, TEXT_TO_PDF};

    fn tool(id: &str) -> Tool {
        Tool::new(id, id, "desc", Category::Pdf, InteractionType::FileProcessor)
    }

    #[test]
    fn test_catalog_new_empty() {
        let catalog = ToolCatalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = ToolCatalog::from_tools(vec![tool("b"), tool("a"), tool("c")]).unwrap();
        let ids: Vec<&str> = catalog.list_all().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let result = ToolCatalog::from_tools(vec![tool("a"), tool("b"), tool("a")]);
        match result {
            Err(DocHubError::DuplicateTool(id)) => assert_eq!(id, "a"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_catalog_get_and_require() {
        let catalog = ToolCatalog::from_tools(vec![tool("a")]).unwrap();
        assert_eq!(catalog.get("a").unwrap().id, "a");
        assert!(catalog.get("missing").is_none());
        assert!(matches!(catalog.require("missing"), Err(DocHubError::ToolNotFound(_))));
    }

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = ToolCatalog::builtin();
        assert_eq!(catalog.len(), 23);
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.list_all()[0].id, "image-to-pdf");
        assert_eq!(catalog.list_all()[22].id, "rotate-pdf");
        assert!(catalog.contains(TEXT_TO_PDF));
        assert!(catalog.contains(IMAGE_OCR));
    }

    #[test]
    fn test_builtin_catalog_is_shared() {
        let first = ToolCatalog::builtin() as *const ToolCatalog;
        let second = ToolCatalog::builtin() as *const ToolCatalog;
        assert_eq!(first, second);
        assert_eq!(ToolCatalog::builtin().list_all(), ToolCatalog::builtin().list_all());
    }

    #[test]
    fn test_builtin_by_category() {
        let catalog = ToolCatalog::builtin();
        assert_eq!(catalog.by_category(Category::Image).len(), 6);
        assert_eq!(catalog.by_category(Category::Pdf).len(), 17);
        assert!(catalog.by_category(Category::Utility).is_empty());
    }

    #[test]
    fn test_builtin_text_to_pdf_is_text_editor() {
        let tool = ToolCatalog::builtin().get(TEXT_TO_PDF).unwrap();
        assert_eq!(tool.interaction, InteractionType::TextEditor);
        assert!(tool.accepts.is_none());
        assert_eq!(tool.action_label(), "Download PDF");
    }
}
