//! Selection state owned by the presentation layer.
//!
//! The two axes are mutually exclusive in the UI: picking a tag clears the
//! category and picking a category clears the tag.

use crate::catalog::{Category, Tool};

use super::engine::filter;
use super::tag::Tag;

/// Current category + tag selection (`None` is "All")
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    category: Option<Category>,
    tag: Option<Tag>,
}

impl Selection {
    /// Both axes at "All"
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn tag(&self) -> Option<Tag> {
        self.tag
    }

    /// Sidebar pick; resets the tag
    pub fn select_category(&mut self, category: Option<Category>) {
        self.category = category;
        self.tag = None;
        log::debug!("Selection: category={:?} tag=All", category);
    }

    /// Quick-filter pick; resets the category
    pub fn select_tag(&mut self, tag: Option<Tag>) {
        self.tag = tag;
        self.category = None;
        log::debug!("Selection: category=All tag={:?}", tag);
    }

    /// Reset affordance for an empty result
    pub fn clear(&mut self) {
        self.category = None;
        self.tag = None;
    }

    pub fn is_all(&self) -> bool {
        self.category.is_none() && self.tag.is_none()
    }

    /// Visible subset of `tools` for this selection
    pub fn apply<'a>(&self, tools: &'a [Tool]) -> Vec<&'a Tool> {
        filter(tools, self.category, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ToolCatalog;

    #[test]
    fn test_selection_default_is_all() {
        let selection = Selection::new();
        assert!(selection.is_all());
        assert_eq!(selection.apply(ToolCatalog::builtin().list_all()).len(), 23);
    }

    #[test]
    fn test_select_tag_resets_category() {
        let mut selection = Selection::new();
        selection.select_category(Some(Category::Image));
        selection.select_tag(Some(Tag::Doc));
        assert_eq!(selection.category(), None);
        assert_eq!(selection.tag(), Some(Tag::Doc));
    }

    #[test]
    fn test_select_category_resets_tag() {
        let mut selection = Selection::new();
        selection.select_tag(Some(Tag::Ppt));
        selection.select_category(Some(Category::Pdf));
        assert_eq!(selection.tag(), None);
        assert_eq!(selection.category(), Some(Category::Pdf));
    }

    #[test]
    fn test_selecting_all_still_resets_other_axis() {
        let mut selection = Selection::new();
        selection.select_category(Some(Category::Pdf));
        selection.select_tag(None);
        assert!(selection.is_all());
    }

    #[test]
    fn test_clear() {
        let mut selection = Selection::new();
        selection.select_tag(Some(Tag::Text));
        selection.clear();
        assert!(selection.is_all());
    }
}
