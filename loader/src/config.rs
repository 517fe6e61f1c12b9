//! Standalone layout config files.
//!
//! A layout config can live apart from any document so several tools share
//! one look. The file holds a bare [`LayoutConfig`]; missing fields take
//! their defaults.
//!
//! # Example YAML
//!
//! ```yaml
//! total_width: 100
//! min_column_width: 20
//! max_column_width: 40
//! padding: 4
//! mode: auto
//! description_paragraphs: 0
//! ```

use std::path::Path;

use helplayout_core::{LayoutConfig, validate_config};

use crate::document::{read_file, write_file};
use crate::error::{LoaderError, Result};

/// Loads a layout config from a `.json`, `.yaml` or `.yml` file.
///
/// Column bounds are normalized and the result is validated.
///
/// # Errors
///
/// Returns [`IoError`](LoaderError::IoError) if the file cannot be read, a
/// JSON/YAML error if parsing fails, or
/// [`InvalidDocument`](LoaderError::InvalidDocument) if validation fails.
pub fn load_config(path: impl AsRef<Path>) -> Result<LayoutConfig> {
    let config: LayoutConfig = read_file(path.as_ref())?;
    let errors = validate_config(&config);
    if !errors.is_empty() {
        return Err(LoaderError::InvalidDocument(errors));
    }
    Ok(config.normalized())
}

/// Saves a layout config, choosing JSON or YAML by extension.
pub fn save_config(config: &LayoutConfig, path: impl AsRef<Path>) -> Result<()> {
    write_file(path.as_ref(), config)
}
