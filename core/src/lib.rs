//! Help-text layout for two-column command-line help screens.
//!
//! This crate computes the width of the flag column of a help screen and
//! wraps help, description and epilog text to a line budget:
//!
//! - [`OptionDescriptor`] — one registrable option (flag spellings, value
//!   placeholder, help text).
//! - [`LayoutConfig`] — column bounds, padding, total width and the
//!   [`WidthMode`] (auto or fixed).
//! - [`compute_column_width`] — the auto-mode column width for a set of
//!   options.
//! - [`render_option_line`] — one option as flag column plus wrapped help.
//! - [`wrap_paragraph_text`] — paragraph-preserving greedy word wrap.
//! - [`HelpLayout`] — the engine tying these together for a whole help
//!   screen.
//!
//! Validation ([`validate_config`], [`validate_options`]) reports configs and
//! option sets that would render poorly. Rendering itself never fails.
//!
//! # Example
//!
//! ```
//! use helplayout_core::*;
//!
//! let config = LayoutConfig::default()
//!     .with_total_width(60)
//!     .with_column_bounds(10, 30)
//!     .with_padding(2);
//! let mut help = HelpLayout::new(config);
//! help.add_flag(&["-v", "--verbose"], "Enable verbose output");
//! help.add_valued(&["-o", "--output"], "FILE", "Write results to FILE");
//!
//! assert_eq!(help.column_width(), "-o, --output FILE".len() + 2);
//! assert!(help.render().starts_with("options:\n  -v, --verbose"));
//! assert!(validate_config(help.config()).is_empty());
//! ```
//!
//! # Feature flags
//!
//! - **`clap`** (default): [`descriptors_from_command`] converts a
//!   [`clap::Command`] into option descriptors.

#[cfg(feature = "clap")]
mod clap_adapter;
mod engine;
pub mod layout;
mod types;
mod validate;
pub mod wrap;

#[cfg(feature = "clap")]
pub use clap_adapter::{descriptor_from_arg, descriptors_from_command};
pub use engine::{DEFAULT_VERSION_FLAG, HelpLayout};
pub use layout::{compute_column_width, option_display_length, render_option_line};
pub use types::*;
pub use validate::{ValidationError, validate_config, validate_options};
pub use wrap::{format_description_text, wrap_paragraph_text};
