//! Layout config and option validation.
//!
//! Rendering itself is lenient and never fails; validation is the place to
//! surface configs and option sets that would produce a poor help screen,
//! such as a flag column that leaves no room for help text or duplicate flag
//! spellings.
//!
//! # Examples
//!
//! ```
//! use helplayout_core::*;
//!
//! let config = LayoutConfig::default();
//! assert!(validate_config(&config).is_empty());
//!
//! // Invalid: fixed column as wide as the whole line
//! let bad = LayoutConfig::default().with_total_width(40).with_fixed_width(40);
//! assert!(!validate_config(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{LayoutConfig, OptionDescriptor, WidthMode};

/// Config/option validation errors.
///
/// Each variant describes a specific problem found during validation. The
/// `Display` impl provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Total line budget is zero.
    #[error("total width must be greater than zero")]
    ZeroTotalWidth,
    /// The flag column would consume the whole line.
    #[error("column width {column} leaves no room for help text within {total} columns")]
    NoRoomForHelp { column: usize, total: usize },
    /// `max_column_width + padding` does not fit in a `usize`.
    #[error("column width {max} plus padding {padding} overflows")]
    ColumnOverflow { max: usize, padding: usize },
    /// A positional option has no identifier to display.
    #[error("positional option must have a name")]
    MissingIdentifier,
    /// A flag spelling is empty or whitespace-only.
    #[error("empty flag spelling on option: {0}")]
    EmptyFlag(String),
    /// A flag spelling does not start with `-` or `+`.
    #[error("invalid flag format: {0}")]
    InvalidFlag(String),
    /// Two options share the same flag spelling.
    #[error("duplicate flag: {0}")]
    DuplicateFlag(String),
}

/// Validates a layout config.
///
/// Checks for a zero total width and for a flag column that leaves no room
/// for help text. In auto mode the widest possible column
/// (`max_column_width + padding`) is checked. Inverted column bounds are not
/// an error; they are swapped by [`LayoutConfig::normalized`].
pub fn validate_config(config: &LayoutConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.total_width == 0 {
        errors.push(ValidationError::ZeroTotalWidth);
        return errors;
    }

    let config = config.normalized();
    let column = match config.mode {
        WidthMode::Fixed(width) => width,
        WidthMode::Auto => {
            let Some(column) = config.max_column_width.checked_add(config.padding) else {
                errors.push(ValidationError::ColumnOverflow {
                    max: config.max_column_width,
                    padding: config.padding,
                });
                return errors;
            };
            column
        }
    };
    if column >= config.total_width {
        errors.push(ValidationError::NoRoomForHelp {
            column,
            total: config.total_width,
        });
    }

    errors
}

/// Validates a set of options.
///
/// Checks for nameless positionals, empty or malformed flag spellings and
/// duplicate spellings across options. Hidden options are checked too since
/// they still occupy their spellings. Stops at the first error.
///
/// # Examples
///
/// ```
/// use helplayout_core::*;
///
/// let options = vec![
///     OptionDescriptor::flag(&["-v", "--verbose"]),
///     OptionDescriptor::flag(&["-v", "--version"]),
/// ];
/// assert_eq!(
///     validate_options(&options),
///     vec![ValidationError::DuplicateFlag("-v".to_string())]
/// );
/// ```
pub fn validate_options(options: &[OptionDescriptor]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for option in options {
        if option.is_positional() {
            if option.identifier().trim().is_empty() {
                errors.push(ValidationError::MissingIdentifier);
                return errors;
            }
            continue;
        }

        for flag in &option.flags {
            let spelling = flag.trim();
            if spelling.is_empty() {
                errors.push(ValidationError::EmptyFlag(option.identifier()));
                return errors;
            }
            if !(spelling.starts_with('-') || spelling.starts_with('+')) || spelling.len() < 2 {
                errors.push(ValidationError::InvalidFlag(spelling.to_string()));
                return errors;
            }
            if !seen.insert(spelling) {
                errors.push(ValidationError::DuplicateFlag(spelling.to_string()));
                return errors;
            }
        }
    }

    errors
}
