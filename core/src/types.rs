//! Option and layout type definitions.
//!
//! This module defines the data model fed into the layout engine: the
//! options a front end registers ([`OptionDescriptor`]) and the per-engine
//! settings that govern column sizing and wrapping ([`LayoutConfig`]). Both
//! derive [`serde`] traits so help documents can be loaded from JSON or YAML.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default total line budget for rendered help.
pub const DEFAULT_TOTAL_WIDTH: usize = 100;
/// Default lower bound for the flag column in [`WidthMode::Auto`].
pub const DEFAULT_MIN_COLUMN_WIDTH: usize = 20;
/// Default upper bound for the flag column in [`WidthMode::Auto`].
pub const DEFAULT_MAX_COLUMN_WIDTH: usize = 40;
/// Default number of spaces added after the computed column width.
pub const DEFAULT_PADDING: usize = 4;

/// One registrable option.
///
/// An option has zero or more flag spellings (e.g. `-v`, `--verbose`), an
/// optional value placeholder (metavar) and optional help text. An option
/// with no flag spellings is positional and is displayed by its
/// [`name`](OptionDescriptor::name).
///
/// Use [`flag`](OptionDescriptor::flag), [`valued`](OptionDescriptor::valued)
/// and [`positional`](OptionDescriptor::positional) to create options, then
/// chain builder methods like [`with_help`](OptionDescriptor::with_help).
///
/// # Examples
///
/// ```
/// use helplayout_core::OptionDescriptor;
///
/// let verbose = OptionDescriptor::flag(&["-v", "--verbose"])
///     .with_help("Enable verbose output");
/// assert_eq!(verbose.display_text(), "-v, --verbose");
/// assert_eq!(verbose.name, "verbose");
///
/// let output = OptionDescriptor::valued(&["-o", "--output"], "FILE");
/// assert_eq!(output.display_text(), "-o, --output FILE");
///
/// let file = OptionDescriptor::positional("file");
/// assert!(file.is_positional());
/// assert_eq!(file.display_text(), "file");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionDescriptor {
    /// Internal identifier, shown in place of flags for positionals.
    pub name: String,
    /// Flag spellings in display order (empty for positionals).
    pub flags: Vec<String>,
    /// Placeholder shown after the flags (e.g. `FILE`).
    pub value_placeholder: Option<String>,
    /// Help text for the description column.
    pub help: Option<String>,
    /// Whether the option consumes a value.
    pub takes_value: bool,
    /// Keep the first character of the help text as written.
    pub keep_caps: bool,
    /// Hidden options are neither measured nor rendered.
    pub hidden: bool,
}

impl OptionDescriptor {
    /// Creates a boolean option (no value).
    pub fn flag(flags: &[&str]) -> Self {
        let flags: Vec<String> = flags.iter().map(|f| f.to_string()).collect();
        Self {
            name: derive_name(&flags),
            flags,
            ..Self::default()
        }
    }

    /// Creates an option that takes a value shown as `placeholder`.
    ///
    /// # Examples
    ///
    /// ```
    /// use helplayout_core::OptionDescriptor;
    ///
    /// let opt = OptionDescriptor::valued(&["--dry-run-limit"], "N");
    /// assert!(opt.takes_value);
    /// assert_eq!(opt.name, "dry_run_limit");
    /// ```
    pub fn valued(flags: &[&str], placeholder: &str) -> Self {
        Self {
            value_placeholder: Some(placeholder.to_string()),
            takes_value: true,
            ..Self::flag(flags)
        }
    }

    /// Creates a positional option identified by `name`.
    pub fn positional(name: &str) -> Self {
        Self {
            name: name.to_string(),
            takes_value: true,
            ..Self::default()
        }
    }

    /// Creates an option from a snake_case field name.
    ///
    /// A field called `file` becomes a positional. `creation` and
    /// `modification` also get a short spelling (`-c, --creation`). Every
    /// other field becomes a long flag with underscores turned into dashes.
    ///
    /// # Examples
    ///
    /// ```
    /// use helplayout_core::OptionDescriptor;
    ///
    /// let opt = OptionDescriptor::from_field("dry_run");
    /// assert_eq!(opt.flags, vec!["--dry-run".to_string()]);
    /// assert!(OptionDescriptor::from_field("file").is_positional());
    /// ```
    pub fn from_field(field: &str) -> Self {
        let long = format!("--{}", field.replace('_', "-"));
        match field {
            "file" => Self::positional(field),
            "creation" | "modification" => {
                let short = format!("-{}", &field[..1]);
                Self::flag(&[short.as_str(), long.as_str()]).with_name(field)
            }
            _ => Self::flag(&[long.as_str()]).with_name(field),
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }

    /// Sets the value placeholder and marks the option as taking a value.
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.value_placeholder = Some(placeholder.to_string());
        self.takes_value = true;
        self
    }

    /// Overrides the internal identifier.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Keeps the help text capitalization as written.
    pub fn keep_caps(mut self) -> Self {
        self.keep_caps = true;
        self
    }

    /// Hides the option from measurement and rendering.
    pub fn hide(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Returns `true` when the option has no flag spellings.
    pub fn is_positional(&self) -> bool {
        self.flags.is_empty()
    }

    /// Returns the identifier, deriving it from the flags when unset.
    pub fn identifier(&self) -> String {
        if self.name.is_empty() {
            derive_name(&self.flags)
        } else {
            self.name.clone()
        }
    }

    /// Returns the placeholder that is actually displayed, if any.
    ///
    /// A placeholder is only displayed for options that take a value; a
    /// missing or empty placeholder on such an option displays nothing.
    pub fn shown_placeholder(&self) -> Option<&str> {
        if !self.takes_value {
            return None;
        }
        self.value_placeholder
            .as_deref()
            .filter(|placeholder| !placeholder.is_empty())
    }

    /// Returns non-blank help text.
    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref().filter(|help| !help.trim().is_empty())
    }

    /// Returns the flag-column text for this option.
    ///
    /// Flagged options show their spellings joined by `", "` followed by the
    /// placeholder. Positionals show their placeholder when one is set and
    /// their identifier otherwise.
    pub fn display_text(&self) -> String {
        if self.is_positional() {
            return match self.value_placeholder.as_deref() {
                Some(placeholder) if !placeholder.is_empty() => placeholder.to_string(),
                _ => self.identifier(),
            };
        }

        let mut text = self.flags.join(", ");
        if let Some(placeholder) = self.shown_placeholder() {
            text.push(' ');
            text.push_str(placeholder);
        }
        text
    }
}

/// Derives an identifier from the longest flag spelling (`--dry-run` →
/// `dry_run`).
fn derive_name(flags: &[String]) -> String {
    flags
        .iter()
        .max_by_key(|flag| flag.len())
        .map(|flag| flag.trim_start_matches(['-', '+']).replace('-', "_"))
        .unwrap_or_default()
}

/// How the flag column width is chosen.
///
/// Serialized as the string `"auto"` or a bare integer for a fixed width,
/// which is also the syntax accepted by [`FromStr`].
///
/// # Examples
///
/// ```
/// use helplayout_core::WidthMode;
///
/// assert_eq!("auto".parse::<WidthMode>().unwrap(), WidthMode::Auto);
/// assert_eq!("24".parse::<WidthMode>().unwrap(), WidthMode::Fixed(24));
/// assert!("wide".parse::<WidthMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "WidthSetting", into = "WidthSetting")]
pub enum WidthMode {
    /// Derive the width from the registered options (the default).
    #[default]
    Auto,
    /// Use the given width unconditionally.
    Fixed(usize),
}

impl fmt::Display for WidthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidthMode::Auto => f.write_str("auto"),
            WidthMode::Fixed(width) => write!(f, "{width}"),
        }
    }
}

impl FromStr for WidthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(WidthMode::Auto);
        }
        trimmed
            .parse::<usize>()
            .map(WidthMode::Fixed)
            .map_err(|_| format!("expected 'auto' or a column width, got '{trimmed}'"))
    }
}

/// Serialized form of [`WidthMode`].
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WidthSetting {
    Fixed(usize),
    Keyword(String),
}

impl TryFrom<WidthSetting> for WidthMode {
    type Error = String;

    fn try_from(setting: WidthSetting) -> Result<Self, Self::Error> {
        match setting {
            WidthSetting::Fixed(width) => Ok(WidthMode::Fixed(width)),
            WidthSetting::Keyword(keyword) => keyword.parse(),
        }
    }
}

impl From<WidthMode> for WidthSetting {
    fn from(mode: WidthMode) -> Self {
        match mode {
            WidthMode::Auto => WidthSetting::Keyword("auto".to_string()),
            WidthMode::Fixed(width) => WidthSetting::Fixed(width),
        }
    }
}

/// Per-engine layout settings.
///
/// Construct with [`LayoutConfig::default`] and adjust with the `with_*`
/// builder methods. [`with_column_bounds`](LayoutConfig::with_column_bounds)
/// normalizes inverted bounds; configs deserialized from files are
/// normalized when handed to [`HelpLayout::new`](crate::HelpLayout::new).
///
/// # Examples
///
/// ```
/// use helplayout_core::{LayoutConfig, WidthMode};
///
/// let config = LayoutConfig::default()
///     .with_total_width(80)
///     .with_column_bounds(30, 10)
///     .with_padding(2);
/// assert_eq!(config.min_column_width, 10);
/// assert_eq!(config.max_column_width, 30);
/// assert_eq!(config.mode, WidthMode::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Total line budget for wrapping.
    pub total_width: usize,
    /// Lower bound for the computed flag column.
    pub min_column_width: usize,
    /// Upper bound for the computed flag column.
    pub max_column_width: usize,
    /// Spaces added after the clamped column width.
    pub padding: usize,
    /// Auto or fixed column width.
    pub mode: WidthMode,
    /// Number of description paragraphs kept (0 keeps all).
    pub description_paragraphs: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            total_width: DEFAULT_TOTAL_WIDTH,
            min_column_width: DEFAULT_MIN_COLUMN_WIDTH,
            max_column_width: DEFAULT_MAX_COLUMN_WIDTH,
            padding: DEFAULT_PADDING,
            mode: WidthMode::Auto,
            description_paragraphs: 0,
        }
    }
}

impl LayoutConfig {
    /// Sets the total line budget.
    pub fn with_total_width(mut self, total_width: usize) -> Self {
        self.total_width = total_width;
        self
    }

    /// Sets the auto-mode column bounds, swapping them if inverted.
    pub fn with_column_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_column_width = min;
        self.max_column_width = max;
        self.normalized()
    }

    /// Sets the padding added after the clamped column width.
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Switches to a fixed column width.
    pub fn with_fixed_width(mut self, width: usize) -> Self {
        self.mode = WidthMode::Fixed(width);
        self
    }

    /// Sets the width mode.
    pub fn with_mode(mut self, mode: WidthMode) -> Self {
        self.mode = mode;
        self
    }

    /// Limits the description to its first `paragraphs` paragraphs.
    pub fn with_description_paragraphs(mut self, paragraphs: usize) -> Self {
        self.description_paragraphs = paragraphs;
        self
    }

    /// Returns `true` in [`WidthMode::Auto`].
    pub fn is_auto(&self) -> bool {
        self.mode == WidthMode::Auto
    }

    /// Returns a copy whose column bounds satisfy `min <= max`.
    ///
    /// Inverted bounds are swapped.
    ///
    /// # Examples
    ///
    /// ```
    /// use helplayout_core::LayoutConfig;
    ///
    /// let mut config = LayoutConfig::default();
    /// config.min_column_width = 50;
    /// config.max_column_width = 12;
    /// let config = config.normalized();
    /// assert_eq!((config.min_column_width, config.max_column_width), (12, 50));
    /// ```
    pub fn normalized(mut self) -> Self {
        if self.min_column_width > self.max_column_width {
            tracing::debug!(
                min = self.min_column_width,
                max = self.max_column_width,
                "swapping inverted column bounds"
            );
            std::mem::swap(&mut self.min_column_width, &mut self.max_column_width);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_derives_name_from_longest_spelling() {
        let opt = OptionDescriptor::flag(&["-n", "--dry-run"]);
        assert_eq!(opt.name, "dry_run");
        assert!(!opt.takes_value);
        assert!(!opt.is_positional());
    }

    #[test]
    fn test_from_field_timestamp_fields_get_short_flag() {
        let creation = OptionDescriptor::from_field("creation");
        assert_eq!(creation.display_text(), "-c, --creation");
        assert_eq!(creation.name, "creation");

        let modification = OptionDescriptor::from_field("modification");
        assert_eq!(modification.flags, vec!["-m".to_string(), "--modification".to_string()]);

        assert_eq!(OptionDescriptor::from_field("max_depth").display_text(), "--max-depth");
    }

    #[test]
    fn test_display_text_ignores_placeholder_without_value() {
        let mut opt = OptionDescriptor::flag(&["-q", "--quiet"]);
        opt.value_placeholder = Some("LEVEL".to_string());
        assert_eq!(opt.display_text(), "-q, --quiet");
    }

    #[test]
    fn test_display_text_tolerates_missing_placeholder() {
        let mut opt = OptionDescriptor::flag(&["--level"]);
        opt.takes_value = true;
        assert_eq!(opt.display_text(), "--level");
        assert_eq!(opt.shown_placeholder(), None);
    }

    #[test]
    fn test_positional_prefers_placeholder() {
        let opt = OptionDescriptor::positional("input").with_placeholder("INPUT");
        assert_eq!(opt.display_text(), "INPUT");
    }

    #[test]
    fn test_help_text_skips_blank() {
        let opt = OptionDescriptor::flag(&["-x"]).with_help("   ");
        assert_eq!(opt.help_text(), None);
    }

    #[test]
    fn test_identifier_derived_when_name_missing() {
        let opt: OptionDescriptor =
            serde_json::from_str(r#"{"flags": ["-o", "--output-dir"]}"#).unwrap();
        assert!(opt.name.is_empty());
        assert_eq!(opt.identifier(), "output_dir");
    }

    #[test]
    fn test_width_mode_serde_forms() {
        let auto: WidthMode = serde_json::from_str(r#""auto""#).unwrap();
        assert_eq!(auto, WidthMode::Auto);
        let fixed: WidthMode = serde_json::from_str("24").unwrap();
        assert_eq!(fixed, WidthMode::Fixed(24));
        assert!(serde_json::from_str::<WidthMode>(r#""wide""#).is_err());
        assert_eq!(serde_json::to_string(&WidthMode::Fixed(30)).unwrap(), "30");
        assert_eq!(serde_json::to_string(&WidthMode::Auto).unwrap(), r#""auto""#);
    }

    #[test]
    fn test_layout_config_defaults_fill_missing_fields() {
        let config: LayoutConfig = serde_json::from_str(r#"{"total_width": 80}"#).unwrap();
        assert_eq!(config.total_width, 80);
        assert_eq!(config.min_column_width, DEFAULT_MIN_COLUMN_WIDTH);
        assert_eq!(config.max_column_width, DEFAULT_MAX_COLUMN_WIDTH);
        assert_eq!(config.padding, DEFAULT_PADDING);
        assert!(config.is_auto());
    }

    #[test]
    fn test_normalized_leaves_ordered_bounds() {
        let config = LayoutConfig::default().with_column_bounds(10, 10);
        assert_eq!((config.min_column_width, config.max_column_width), (10, 10));
    }
}
