//! Catalog validation and export.

use std::path::Path;

use sector_core::data::Catalog;
use tracing::{debug, info, warn};

use crate::{Result, ToolError};

/// Parse a catalog and check its cross-references.
///
/// # Errors
///
/// Returns [`ToolError::Game`] if the text does not parse and
/// [`ToolError::InvalidCatalog`] if validation finds problems.
pub fn validate_catalog_text(text: &str, source_name: &str) -> Result<Catalog> {
    let catalog = Catalog::from_ron(text, source_name)?;
    debug!(
        source_name,
        techs = catalog.techs.len(),
        parts = catalog.parts.len(),
        hulls = catalog.hulls.len(),
        "Catalog parsed"
    );

    let problems = catalog.validate();
    if !problems.is_empty() {
        for problem in &problems {
            warn!(source_name, "{problem}");
        }
        return Err(ToolError::InvalidCatalog { problems });
    }
    Ok(catalog)
}

/// Validate the RON catalog at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation.
pub fn validate_catalog_file(path: &Path) -> Result<Catalog> {
    let text = std::fs::read_to_string(path).map_err(|source| ToolError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = validate_catalog_text(&text, &path.display().to_string())?;
    info!(path = %path.display(), "Catalog valid");
    Ok(catalog)
}

/// Render the built-in catalog as RON, writing it to `path` when given.
///
/// Returns the rendered text either way.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub fn export_standard_catalog(path: Option<&Path>) -> Result<String> {
    let text = Catalog::standard().to_ron()?;
    if let Some(path) = path {
        std::fs::write(path, &text).map_err(|source| ToolError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), bytes = text.len(), "Catalog exported");
    }
    Ok(text)
}
