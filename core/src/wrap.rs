//! Paragraph-aware word wrapping.
//!
//! Free-form text (descriptions, epilogs, help cells) is split on blank-line
//! boundaries and each paragraph is greedily wrapped on its own. Words are
//! never split; a word wider than the budget sits alone on its line.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};

/// A run of two or more newlines, allowing whitespace-only lines in between.
static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)*").expect("static regex must compile")
});

/// Splits text into paragraphs on blank-line boundaries.
///
/// `\r\n` line endings are treated as `\n`. Paragraphs are returned with
/// surrounding whitespace trimmed; empty paragraphs are dropped.
///
/// # Examples
///
/// ```
/// use helplayout_core::wrap::split_paragraphs;
///
/// let parts = split_paragraphs("one\ntwo\n\n\n\nthree\n");
/// assert_eq!(parts, vec!["one\ntwo".to_string(), "three".to_string()]);
/// ```
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    PARAGRAPH_BREAK
        .split(&normalized)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(String::from)
        .collect()
}

/// Greedily wraps a single paragraph to `width` columns.
///
/// Internal whitespace, including single newlines, collapses to one space
/// before wrapping. Returns no lines for blank input.
///
/// # Examples
///
/// ```
/// use helplayout_core::wrap::wrap_words;
///
/// assert_eq!(wrap_words("aa bb cc", 5), vec!["aa bb", "cc"]);
/// assert_eq!(wrap_words("incomprehensible x", 4), vec!["incomprehensible", "x"]);
/// assert!(wrap_words("  \n ", 10).is_empty());
/// ```
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return Vec::new();
    }

    let options = Options::new(width.max(1))
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit);

    textwrap::wrap(&collapsed, options)
        .into_iter()
        .map(Cow::into_owned)
        .collect()
}

/// Wraps free-form text to `width` columns, preserving paragraph breaks.
///
/// Each paragraph is wrapped independently, paragraphs are rejoined with
/// exactly one blank line, and a single trailing newline is appended. Empty
/// input yields `"\n"`.
///
/// # Examples
///
/// ```
/// use helplayout_core::wrap_paragraph_text;
///
/// let wrapped = wrap_paragraph_text("alpha beta gamma\n\ndelta", 11);
/// assert_eq!(wrapped, "alpha beta\ngamma\n\ndelta\n");
/// assert_eq!(wrap_paragraph_text("", 20), "\n");
/// ```
pub fn wrap_paragraph_text(text: &str, width: usize) -> String {
    let paragraphs: Vec<String> = split_paragraphs(text)
        .iter()
        .map(|paragraph| wrap_words(paragraph, width).join("\n"))
        .filter(|paragraph| !paragraph.is_empty())
        .collect();

    let mut out = paragraphs.join("\n\n");
    out.push('\n');
    out
}

/// Prepares description text while keeping its paragraph structure.
///
/// Trims the text, joins line breaks inside a paragraph with a space,
/// collapses runs of blank lines to a single paragraph break, and keeps only
/// the first `paragraphs` paragraphs when `paragraphs > 0`.
///
/// # Examples
///
/// ```
/// use helplayout_core::format_description_text;
///
/// let text = "  Convert files.\nFast.\r\n\r\n\r\nSecond paragraph.\n\nThird.  ";
/// assert_eq!(
///     format_description_text(text, 0),
///     "Convert files. Fast.\n\nSecond paragraph.\n\nThird."
/// );
/// assert_eq!(format_description_text(text, 1), "Convert files. Fast.");
/// ```
pub fn format_description_text(text: &str, paragraphs: usize) -> String {
    let limit = if paragraphs == 0 { usize::MAX } else { paragraphs };

    split_paragraphs(text)
        .iter()
        .map(|paragraph| {
            paragraph
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .take(limit)
        .collect::<Vec<_>>()
        .join("\n\n")
}
