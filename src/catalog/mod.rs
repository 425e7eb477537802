//! Tool Catalog - tool definitions and the compiled-in directory

mod builtin;
mod definition;
mod store;

pub use definition::{
    Category, DEFAULT_ACTION_TEXT, IMAGE_OCR, InputWidget, InteractionType, TEXT_TO_PDF, Tool,
};
pub use store::ToolCatalog;

use crate::error::Result;

/// Startup check of the built-in catalog and the completion table keyed on it
pub fn validate_builtin() -> Result<()> {
    let catalog = ToolCatalog::builtin();
    catalog.validate()?;
    crate::session::validate_completion_table(catalog)?;
    log::info!("Catalog validated: {} tools", catalog.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_builtin() {
        assert!(validate_builtin().is_ok());
    }
}
