//! Flag-column sizing and option-line rendering.
//!
//! Widths are measured in terminal display columns via [`unicode_width`], so
//! wide characters in flags or help text count for what they occupy on
//! screen rather than for their byte length.

use unicode_width::UnicodeWidthStr;

use crate::types::{LayoutConfig, OptionDescriptor};
use crate::wrap::wrap_words;

/// Returns the display width of `text`.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Returns the width an option's flag representation needs, or `None` for
/// options that do not influence the auto width (positionals and hidden
/// options).
///
/// The representation is the flags joined by `", "`, followed by a space and
/// the placeholder when the option takes a value. A missing placeholder
/// counts as zero-length.
///
/// # Examples
///
/// ```
/// use helplayout_core::{OptionDescriptor, option_display_length};
///
/// let opt = OptionDescriptor::valued(&["-o", "--output"], "FILE");
/// assert_eq!(option_display_length(&opt), Some("-o, --output FILE".len()));
/// assert_eq!(option_display_length(&OptionDescriptor::positional("src")), None);
/// ```
pub fn option_display_length(option: &OptionDescriptor) -> Option<usize> {
    if option.hidden || option.is_positional() {
        return None;
    }

    let mut length = display_width(&option.flags.join(", "));
    if let Some(placeholder) = option.shown_placeholder() {
        length += display_width(placeholder) + 1;
    }
    Some(length)
}

/// Computes the flag-column width for a set of options.
///
/// Takes the longest flag representation (0 when no flagged option is
/// visible), clamps it to `[min_column_width, max_column_width]` and adds
/// the padding. The config's [`mode`](LayoutConfig::mode) is not consulted;
/// callers in fixed mode never need this.
///
/// # Examples
///
/// ```
/// use helplayout_core::{LayoutConfig, OptionDescriptor, compute_column_width};
///
/// let options = vec![
///     OptionDescriptor::flag(&["-h", "--help"]),
///     OptionDescriptor::flag(&["-v", "--verbose"]),
/// ];
/// let config = LayoutConfig::default().with_column_bounds(10, 40).with_padding(2);
/// assert_eq!(compute_column_width(&options, &config), 15);
/// assert_eq!(compute_column_width(&[], &config), 12);
/// ```
pub fn compute_column_width(options: &[OptionDescriptor], config: &LayoutConfig) -> usize {
    let longest = options
        .iter()
        .filter_map(option_display_length)
        .max()
        .unwrap_or(0);

    longest
        .clamp(config.min_column_width, config.max_column_width)
        .saturating_add(config.padding)
}

/// Renders one option as a flag column followed by wrapped help text.
///
/// The flag column is left-aligned and padded to `column_width`. A flag
/// column wider than `column_width` is kept whole and the help starts on the
/// same line after one space. Help text wraps to `total_width -
/// column_width` columns with continuation lines indented to the help
/// column. Without help text only the flag column is emitted, with trailing
/// padding trimmed. Every emitted line ends with `\n`. The flag column is
/// never padded past `total_width`.
///
/// # Examples
///
/// ```
/// use helplayout_core::{OptionDescriptor, render_option_line};
///
/// let opt = OptionDescriptor::flag(&["-v", "--verbose"])
///     .with_help("enable verbose output for every step");
/// assert_eq!(
///     render_option_line(&opt, 16, 40),
///     "-v, --verbose   enable verbose output\n                for every step\n"
/// );
/// ```
pub fn render_option_line(
    option: &OptionDescriptor,
    column_width: usize,
    total_width: usize,
) -> String {
    let flag_text = option.display_text();

    let Some(help) = option.help_text() else {
        let mut out = flag_text.trim_end().to_string();
        out.push('\n');
        return out;
    };

    let column_width = column_width.min(total_width);
    let help_width = total_width.saturating_sub(column_width).max(1);
    let lines = wrap_words(help, help_width);

    let mut out = flag_text;
    let flag_width = display_width(&out);
    if flag_width < column_width {
        out.push_str(&" ".repeat(column_width - flag_width));
    } else {
        out.push(' ');
    }

    let indent = " ".repeat(column_width);
    for (index, line) in lines.iter().enumerate() {
        if index > 0 {
            out.push_str(&indent);
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(min: usize, max: usize, padding: usize) -> LayoutConfig {
        LayoutConfig::default()
            .with_column_bounds(min, max)
            .with_padding(padding)
    }

    #[test]
    fn test_compute_scenario_help_and_verbose() {
        let options = vec![
            OptionDescriptor::flag(&["-h", "--help"]),
            OptionDescriptor::flag(&["-v", "--verbose"]),
        ];
        assert_eq!(compute_column_width(&options, &config(10, 40, 2)), 15);
    }

    #[test]
    fn test_compute_empty_set_is_min_plus_padding() {
        assert_eq!(compute_column_width(&[], &config(20, 40, 4)), 24);
    }

    #[test]
    fn test_compute_counts_placeholder_and_space() {
        let options = vec![OptionDescriptor::valued(&["-o", "--output"], "FILE")];
        assert_eq!(compute_column_width(&options, &config(0, 40, 0)), 17);
    }

    #[test]
    fn test_compute_ignores_positionals_and_hidden() {
        let options = vec![
            OptionDescriptor::positional("a_really_long_positional_name"),
            OptionDescriptor::flag(&["--a-very-long-hidden-option-name"]).hide(),
            OptionDescriptor::flag(&["-q"]),
        ];
        assert_eq!(compute_column_width(&options, &config(0, 40, 1)), 3);
    }

    #[test]
    fn test_compute_clamps_to_max() {
        let options = vec![OptionDescriptor::flag(&[
            "--an-extraordinarily-long-option-name-that-overflows",
        ])];
        assert_eq!(compute_column_width(&options, &config(10, 30, 2)), 32);
    }

    #[test]
    fn test_compute_stays_within_bounds() {
        let cfg = config(12, 28, 3);
        let mut options = Vec::new();
        let spellings = [
            "-a",
            "--bb",
            "--cccccccc",
            "--ddddddddddddddddd",
            "--eeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee",
        ];
        let mut previous = compute_column_width(&options, &cfg);
        for spelling in spellings {
            options.push(OptionDescriptor::valued(&[spelling], "VALUE"));
            let width = compute_column_width(&options, &cfg);
            assert!((12 + 3..=28 + 3).contains(&width));
            assert!(width >= previous, "width decreased after adding {spelling}");
            previous = width;
        }
    }

    #[test]
    fn test_compute_saturates_huge_padding() {
        let cfg = LayoutConfig::default().with_padding(usize::MAX);
        assert_eq!(compute_column_width(&[], &cfg), usize::MAX);
    }

    #[test]
    fn test_render_caps_column_at_total_width() {
        let opt = OptionDescriptor::flag(&["-q"]).with_help("quiet mode");
        assert_eq!(
            render_option_line(&opt, usize::MAX, 6),
            "-q    quiet\n      mode\n"
        );
    }

    #[test]
    fn test_compute_missing_placeholder_is_zero_length() {
        let mut opt = OptionDescriptor::flag(&["--level"]);
        opt.takes_value = true;
        assert_eq!(option_display_length(&opt), Some(7));
    }

    #[test]
    fn test_compute_uses_display_width() {
        let opt = OptionDescriptor::valued(&["--名前"], "値");
        assert_eq!(option_display_length(&opt), Some(6 + 1 + 2));
    }

    #[test]
    fn test_render_without_help_trims_padding() {
        let opt = OptionDescriptor::flag(&["-q", "--quiet"]);
        assert_eq!(render_option_line(&opt, 20, 60), "-q, --quiet\n");
    }

    #[test]
    fn test_render_overflowing_flag_keeps_same_line() {
        let opt = OptionDescriptor::valued(&["--configuration-file"], "PATH").with_help("config");
        assert_eq!(
            render_option_line(&opt, 10, 40),
            "--configuration-file PATH config\n"
        );
    }

    #[test]
    fn test_render_exact_fit_gets_separator() {
        let opt = OptionDescriptor::flag(&["--abcdefgh"]).with_help("x");
        assert_eq!(render_option_line(&opt, 10, 40), "--abcdefgh x\n");
    }

    #[test]
    fn test_render_continuation_lines_align() {
        let opt = OptionDescriptor::flag(&["-n"]).with_help("one two three four five six");
        let rendered = render_option_line(&opt, 6, 16);
        assert_eq!(rendered, "-n    one two\n      three four\n      five six\n");
    }

    #[test]
    fn test_render_positional() {
        let opt = OptionDescriptor::positional("file").with_help("input file");
        assert_eq!(render_option_line(&opt, 8, 40), "file    input file\n");
    }
}
