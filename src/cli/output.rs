//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable
//! or JSON formats. Supports colored output (respects NO_COLOR env var).

use crate::core::search::{extract_snippets_with, Matcher, SearchOptions};

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for node ids
    pub fn node_id(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for file names
    pub fn file_name(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for highlighted matches
    pub fn matched(s: &str) -> ColoredString {
        s.magenta().bold()
    }

    /// Style for rank numbers
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }
}

/// Snippets of `content` for terminal display, matches in color
///
/// Matches are located by the query itself rather than by parsing `**`
/// out of stored snippets, so Markdown `**bold**` in a page prints as
/// written and is never mistaken for a match.
pub fn colored_snippets(content: &str, query: &str, options: SearchOptions) -> Vec<String> {
    let Some(matcher) = Matcher::new(query, options.mode) else {
        return Vec::new();
    };

    extract_snippets_with(
        content,
        &matcher,
        options.context_chars,
        options.max_snippets,
        |m| colors::matched(m).to_string(),
    )
}

/// Pluralize a count: `1 match`, `2 matches`
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Print data as pretty JSON
pub fn print_json<T: serde::Serialize>(data: &T) {
    if let Ok(json) = serde_json::to_string_pretty(data) {
        println!("{json}");
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
