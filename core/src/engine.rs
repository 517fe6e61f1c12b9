//! The help layout engine.
//!
//! [`HelpLayout`] accumulates options and free-form text over a parser's
//! building phase and renders the complete help screen on demand. In auto
//! mode the flag column is re-measured on every render, so options added
//! after an earlier render are always accounted for.

use crate::layout::{compute_column_width, render_option_line};
use crate::types::{LayoutConfig, OptionDescriptor, WidthMode};
use crate::validate::{ValidationError, validate_config, validate_options};
use crate::wrap::{format_description_text, wrap_paragraph_text};

/// Flag spelling registered by [`HelpLayout::add_version_flag`] when none is
/// given.
pub const DEFAULT_VERSION_FLAG: &str = "--version";

const VERSION_HELP: &str = "show program's version number and exit";

/// Help layout engine for one parser.
///
/// Registration is additive. Help text of registered options has its first
/// character lowercased unless the option sets
/// [`keep_caps`](OptionDescriptor::keep_caps).
///
/// # Examples
///
/// ```
/// use helplayout_core::{HelpLayout, LayoutConfig};
///
/// let config = LayoutConfig::default()
///     .with_total_width(50)
///     .with_column_bounds(10, 30)
///     .with_padding(2);
/// let mut help = HelpLayout::new(config);
/// help.set_usage("demo [-h] [-v] file");
/// help.set_description("Demonstrates the layout.");
/// help.add_positional("file", "File to read");
/// help.add_flag(&["-h", "--help"], "Show this help message and exit");
/// help.add_flag(&["-v", "--verbose"], "Enable verbose output");
///
/// assert_eq!(help.column_width(), 15);
/// assert_eq!(
///     help.render(),
///     "\
/// usage: demo [-h] [-v] file
///
/// Demonstrates the layout.
///
/// positional arguments:
///   file           file to read
///
/// options:
///   -h, --help     show this help message and exit
///   -v, --verbose  enable verbose output
/// "
/// );
/// ```
#[derive(Debug, Clone)]
pub struct HelpLayout {
    config: LayoutConfig,
    options: Vec<OptionDescriptor>,
    usage: Option<String>,
    description: Option<String>,
    epilog: Option<String>,
}

impl HelpLayout {
    /// Indentation of option lines below their section heading.
    pub const OPTION_INDENT: usize = 2;

    /// Creates an engine, normalizing the config's column bounds.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config: config.normalized(),
            options: Vec::new(),
            usage: None,
            description: None,
            epilog: None,
        }
    }

    /// Returns the (normalized) layout config.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Returns the registered options in registration order.
    pub fn options(&self) -> &[OptionDescriptor] {
        &self.options
    }

    /// Registers an option.
    pub fn add_option(&mut self, mut option: OptionDescriptor) -> &mut Self {
        if !option.keep_caps {
            option.help = option.help.map(|help| lowercase_first(&help));
        }
        tracing::trace!(option = %option.identifier(), "registered option");
        self.options.push(option);
        self
    }

    /// Registers every option from an iterator.
    pub fn extend_options(
        &mut self,
        options: impl IntoIterator<Item = OptionDescriptor>,
    ) -> &mut Self {
        for option in options {
            self.add_option(option);
        }
        self
    }

    /// Registers a boolean option.
    pub fn add_flag(&mut self, flags: &[&str], help: &str) -> &mut Self {
        self.add_option(OptionDescriptor::flag(flags).with_help(help))
    }

    /// Registers an option taking a value shown as `placeholder`.
    pub fn add_valued(&mut self, flags: &[&str], placeholder: &str, help: &str) -> &mut Self {
        self.add_option(OptionDescriptor::valued(flags, placeholder).with_help(help))
    }

    /// Registers a positional option.
    pub fn add_positional(&mut self, name: &str, help: &str) -> &mut Self {
        self.add_option(OptionDescriptor::positional(name).with_help(help))
    }

    /// Registers an option derived from a snake_case field name.
    ///
    /// See [`OptionDescriptor::from_field`].
    pub fn add_field(&mut self, field: &str, help: &str) -> &mut Self {
        self.add_option(OptionDescriptor::from_field(field).with_help(help))
    }

    /// Registers a version option under `flags` (or `--version`).
    pub fn add_version_flag(&mut self, flags: &[&str]) -> &mut Self {
        let flags = if flags.is_empty() {
            &[DEFAULT_VERSION_FLAG][..]
        } else {
            flags
        };
        self.add_option(
            OptionDescriptor::flag(flags)
                .with_name("version")
                .with_help(VERSION_HELP)
                .keep_caps(),
        )
    }

    /// Sets the usage line printed first.
    pub fn set_usage(&mut self, usage: &str) -> &mut Self {
        self.usage = Some(usage.trim().to_string()).filter(|usage| !usage.is_empty());
        self
    }

    /// Sets the description, keeping paragraph breaks.
    ///
    /// Only the first [`description_paragraphs`](LayoutConfig::description_paragraphs)
    /// paragraphs are kept when that limit is set.
    pub fn set_description(&mut self, description: &str) -> &mut Self {
        let formatted = format_description_text(description, self.config.description_paragraphs);
        self.description = Some(formatted).filter(|text| !text.is_empty());
        self
    }

    /// Sets the epilog printed after the options.
    pub fn set_epilog(&mut self, epilog: &str) -> &mut Self {
        self.epilog = Some(epilog.trim().to_string()).filter(|text| !text.is_empty());
        self
    }

    /// Returns the description as stored.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the flag-column width for the next render.
    ///
    /// Fixed mode returns the configured width without measuring. Auto mode
    /// measures the current option set every time.
    pub fn column_width(&self) -> usize {
        match self.config.mode {
            WidthMode::Fixed(width) => width,
            WidthMode::Auto => {
                let width = compute_column_width(&self.options, &self.config);
                tracing::debug!(width, options = self.options.len(), "computed column width");
                width
            }
        }
    }

    /// Validates the config and the registered options.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = validate_config(&self.config);
        if errors.is_empty() {
            errors.extend(validate_options(&self.options));
        }
        errors
    }

    /// Renders the option lines of one section, indented.
    fn render_section(
        &self,
        heading: &str,
        positional: bool,
        column_width: usize,
    ) -> Option<String> {
        let line_budget = self.config.total_width.saturating_sub(Self::OPTION_INDENT);
        let indent = " ".repeat(Self::OPTION_INDENT);

        let mut out = String::new();
        for option in self
            .options
            .iter()
            .filter(|option| !option.hidden && option.is_positional() == positional)
        {
            for line in render_option_line(option, column_width, line_budget).lines() {
                out.push_str(&indent);
                out.push_str(line);
                out.push('\n');
            }
        }

        if out.is_empty() {
            return None;
        }
        Some(format!("{heading}:\n{out}"))
    }

    /// Renders the complete help screen.
    ///
    /// Sections (usage, description, positional arguments, options, epilog)
    /// appear when they have content and are separated by one blank line.
    pub fn render(&self) -> String {
        let column_width = self.column_width();
        let width = self.config.total_width;
        let mut sections: Vec<String> = Vec::new();

        if let Some(usage) = &self.usage {
            sections.push(format!("usage: {usage}\n"));
        }
        if let Some(description) = &self.description {
            sections.push(wrap_paragraph_text(description, width));
        }
        sections.extend(self.render_section("positional arguments", true, column_width));
        sections.extend(self.render_section("options", false, column_width));
        if let Some(epilog) = &self.epilog {
            sections.push(wrap_paragraph_text(epilog, width));
        }

        sections.join("\n")
    }
}

impl Default for HelpLayout {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

/// Lowercases the first character, leaving the rest untouched.
fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> LayoutConfig {
        LayoutConfig::default()
            .with_total_width(40)
            .with_column_bounds(10, 20)
            .with_padding(2)
    }

    #[test]
    fn test_auto_width_tracks_later_registrations() {
        let mut help = HelpLayout::new(small_config());
        help.add_flag(&["-q"], "quiet");
        assert_eq!(help.column_width(), 12);
        let first = help.render();

        help.add_valued(&["--output-directory"], "DIR", "where to write");
        assert_eq!(help.column_width(), 22);
        let second = help.render();

        assert!(first.contains("  -q          quiet\n"));
        assert!(second.contains("  -q                    quiet\n"));
    }

    #[test]
    fn test_fixed_width_ignores_options() {
        let mut help = HelpLayout::new(small_config().with_fixed_width(8));
        help.add_flag(&["--an-extremely-long-flag"], "x");
        assert_eq!(help.column_width(), 8);
        assert!(help.render().contains("  --an-extremely-long-flag x\n"));
    }

    #[test]
    fn test_empty_auto_width_is_min_plus_padding() {
        let help = HelpLayout::new(small_config());
        assert_eq!(help.column_width(), 12);
        assert_eq!(help.render(), "");
    }

    #[test]
    fn test_help_lowercased_unless_keep_caps() {
        let mut help = HelpLayout::default();
        help.add_flag(&["-a"], "All entries");
        help.add_option(
            OptionDescriptor::flag(&["-u"])
                .with_help("URL to fetch")
                .keep_caps(),
        );
        assert_eq!(help.options()[0].help.as_deref(), Some("all entries"));
        assert_eq!(help.options()[1].help.as_deref(), Some("URL to fetch"));
    }

    #[test]
    fn test_version_flag_defaults() {
        let mut help = HelpLayout::default();
        help.add_version_flag(&[]);
        let version = &help.options()[0];
        assert_eq!(version.flags, vec!["--version".to_string()]);
        assert_eq!(version.name, "version");
        assert_eq!(version.help.as_deref(), Some(VERSION_HELP));

        let mut custom = HelpLayout::default();
        custom.add_version_flag(&["-V", "--version"]);
        assert_eq!(custom.options()[0].display_text(), "-V, --version");
    }

    #[test]
    fn test_description_paragraph_limit() {
        let mut help = HelpLayout::new(small_config().with_description_paragraphs(1));
        help.set_description("First part\nof it.\n\nSecond part.");
        assert_eq!(help.description(), Some("First part of it."));
    }

    #[test]
    fn test_render_wraps_description_and_epilog() {
        let mut help = HelpLayout::new(small_config().with_total_width(20));
        help.set_description("one two three four five six seven");
        help.set_epilog("Docs:\n\nhttps://example.invalid/docs/helplayout");
        assert_eq!(
            help.render(),
            "one two three four\nfive six seven\n\nDocs:\n\nhttps://example.invalid/docs/helplayout\n"
        );
    }

    #[test]
    fn test_hidden_options_not_rendered() {
        let mut help = HelpLayout::new(small_config());
        help.add_option(OptionDescriptor::flag(&["--secret"]).hide());
        assert_eq!(help.render(), "");
    }

    #[test]
    fn test_inverted_bounds_swapped_on_construction() {
        let mut config = LayoutConfig::default();
        config.min_column_width = 30;
        config.max_column_width = 12;
        let help = HelpLayout::new(config);
        assert_eq!(help.config().min_column_width, 12);
        assert_eq!(help.config().max_column_width, 30);
    }

    #[test]
    fn test_validate_reports_duplicates() {
        let mut help = HelpLayout::default();
        help.add_flag(&["-v"], "verbose").add_flag(&["-v"], "version");
        assert_eq!(
            help.validate(),
            vec![ValidationError::DuplicateFlag("-v".to_string())]
        );
    }

    #[test]
    fn test_huge_padding_renders_and_fails_validation() {
        let mut help = HelpLayout::new(small_config().with_padding(usize::MAX));
        help.add_flag(&["-q"], "quiet");
        assert_eq!(help.column_width(), usize::MAX);
        assert_eq!(help.render(), format!("options:\n  -q{}quiet\n", " ".repeat(36)));
        assert!(matches!(
            help.validate().as_slice(),
            [ValidationError::ColumnOverflow { .. }]
        ));
    }

    #[test]
    fn test_add_field_naming() {
        let mut help = HelpLayout::default();
        help.add_field("file", "input").add_field("max_depth", "depth");
        assert!(help.options()[0].is_positional());
        assert_eq!(help.options()[1].flags, vec!["--max-depth".to_string()]);
    }
}
