//! Loading help documents and layout configs from disk.
//!
//! A [`HelpDocument`] bundles a usage line, description, epilog, layout
//! settings and options; it renders through
//! [`HelpLayout`](helplayout_core::HelpLayout). Standalone layout configs are
//! handled by [`load_config`] / [`save_config`].
//!
//! JSON (`.json`) and YAML (`.yaml`, `.yml`) are supported; the format is
//! picked by file extension.
//!
//! # Quick start
//!
//! ```no_run
//! use helplayout_loader::{HelpDocument, load_config};
//!
//! let mut doc = HelpDocument::load("help.yml").unwrap();
//! doc.layout = load_config("layout.yml").unwrap();
//! print!("{}", doc.render());
//! ```

mod config;
mod document;
mod error;

pub use config::{load_config, save_config};
pub use document::{DocumentFormat, HelpDocument};
pub use error::{LoaderError, Result};
