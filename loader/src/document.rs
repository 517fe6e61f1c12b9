//! Help documents: layout settings, free-form text and options in one file.
//!
//! # Example YAML
//!
//! ```yaml
//! usage: "mytool [-h] [-v] [-o FILE] file"
//! description: |
//!   Converts input files.
//!
//!   Output goes next to the input unless --output is given.
//! epilog: "Exit status is zero on success."
//! layout:
//!   total_width: 80
//!   min_column_width: 10
//!   max_column_width: 30
//!   padding: 2
//!   mode: auto
//! options:
//!   - name: file
//!     help: Input file
//!   - flags: ["-v", "--verbose"]
//!     help: Enable verbose output
//!   - flags: ["-o", "--output"]
//!     takes_value: true
//!     value_placeholder: FILE
//!     help: Write output to FILE
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use helplayout_core::{
    HelpLayout, LayoutConfig, OptionDescriptor, ValidationError, validate_config,
    validate_options,
};
use serde::{Deserialize, Serialize};

use crate::error::{LoaderError, Result};

/// Serialization format of a document or config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Detects the format from a file extension (`.json`, `.yaml`, `.yml`).
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedFormat`](LoaderError::UnsupportedFormat) for any
    /// other extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use helplayout_loader::DocumentFormat;
    ///
    /// assert_eq!(DocumentFormat::from_path("help.yml").unwrap(), DocumentFormat::Yaml);
    /// assert_eq!(DocumentFormat::from_path("help.JSON").unwrap(), DocumentFormat::Json);
    /// assert!(DocumentFormat::from_path("help.toml").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(LoaderError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Reads `T` from a JSON or YAML file, picking the format by extension.
pub(crate) fn read_file<T>(path: &Path) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let format = DocumentFormat::from_path(path)?;
    let reader = BufReader::new(std::fs::File::open(path)?);
    let value = match format {
        DocumentFormat::Json => serde_json::from_reader(reader)?,
        DocumentFormat::Yaml => serde_yaml::from_reader(reader)?,
    };
    tracing::debug!(path = %path.display(), ?format, "loaded file");
    Ok(value)
}

/// Writes `value` as JSON or YAML, picking the format by extension.
pub(crate) fn write_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let format = DocumentFormat::from_path(path)?;
    let writer = BufWriter::new(std::fs::File::create(path)?);
    match format {
        DocumentFormat::Json => serde_json::to_writer_pretty(writer, value)?,
        DocumentFormat::Yaml => serde_yaml::to_writer(writer, value)?,
    }
    Ok(())
}

/// A complete help screen definition.
///
/// # Examples
///
/// ```
/// use helplayout_loader::HelpDocument;
///
/// let doc = HelpDocument::from_yaml_str(
///     r#"
/// layout: { total_width: 40, min_column_width: 4, max_column_width: 20, padding: 2 }
/// options:
///   - flags: ["-q", "--quiet"]
///     help: Suppress output
/// "#,
/// )
/// .unwrap();
/// assert_eq!(doc.render(), "options:\n  -q, --quiet  suppress output\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpDocument {
    /// Usage line printed first (without the `usage:` prefix).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    /// Text printed before the options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Text printed after the options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epilog: Option<String>,
    /// Layout settings.
    pub layout: LayoutConfig,
    /// Spellings of a version option listed ahead of `options`. An empty
    /// list registers `--version`; absent means no version option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_flags: Option<Vec<String>>,
    /// Registered options in display order.
    pub options: Vec<OptionDescriptor>,
}

impl HelpDocument {
    /// Loads a document from a `.json`, `.yaml` or `.yml` file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](LoaderError::IoError) if the file cannot be read,
    /// [`UnsupportedFormat`](LoaderError::UnsupportedFormat) for unknown
    /// extensions, or a JSON/YAML error if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        read_file(path.as_ref())
    }

    /// Loads a document and rejects it if validation reports any error.
    ///
    /// # Errors
    ///
    /// Everything [`load`](Self::load) returns, plus
    /// [`InvalidDocument`](LoaderError::InvalidDocument).
    pub fn load_validated(path: impl AsRef<Path>) -> Result<Self> {
        let document = Self::load(path)?;
        let errors = document.validate();
        if !errors.is_empty() {
            return Err(LoaderError::InvalidDocument(errors));
        }
        Ok(document)
    }

    /// Parses a document from JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parses a document from YAML text.
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }

    /// Saves the document, choosing JSON or YAML by extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        write_file(path.as_ref(), self)
    }

    /// Validates the layout settings and the option set, including the
    /// version option.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = validate_config(&self.layout);
        if errors.is_empty() {
            errors.extend(validate_options(self.to_layout().options()));
        }
        errors
    }

    /// Builds a layout engine populated with this document's content.
    pub fn to_layout(&self) -> HelpLayout {
        let mut layout = HelpLayout::new(self.layout);
        if let Some(usage) = &self.usage {
            layout.set_usage(usage);
        }
        if let Some(description) = &self.description {
            layout.set_description(description);
        }
        if let Some(epilog) = &self.epilog {
            layout.set_epilog(epilog);
        }
        if let Some(flags) = &self.version_flags {
            let flags: Vec<&str> = flags.iter().map(String::as_str).collect();
            layout.add_version_flag(&flags);
        }
        layout.extend_options(self.options.iter().cloned());
        layout
    }

    /// Renders the help screen.
    pub fn render(&self) -> String {
        self.to_layout().render()
    }
}
