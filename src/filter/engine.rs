//! Filter engine
//!
//! Reduces an ordered tool list to the subset matching a category and a
//! quick-filter tag. Both axes are ANDed; `None` on either axis matches all.

use crate::catalog::{Category, Tool};

use super::tag::Tag;

/// Category predicate
pub fn matches_category(tool: &Tool, category: Option<Category>) -> bool {
    category.is_none_or(|c| tool.category == c)
}

/// Tag predicate; only the title is consulted
pub fn matches_tag(tool: &Tool, tag: Option<Tag>) -> bool {
    tag.is_none_or(|t| t.matches_title(&tool.title))
}

/// Stable filter over `tools`
pub fn filter(tools: &[Tool], category: Option<Category>, tag: Option<Tag>) -> Vec<&Tool> {
    tools
        .iter()
        .filter(|tool| matches_category(tool, category) && matches_tag(tool, tag))
        .collect()
}
