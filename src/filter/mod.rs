//! Filter Engine - quick-filter tags, the stable filter, and selection state

mod engine;
mod selection;
mod tag;

pub use engine::{filter, matches_category, matches_tag};
pub use selection::Selection;
pub use tag::Tag;
