//! Case-insensitive query matcher.
//!
//! In literal mode the query is escaped before compilation so that
//! characters like `.`, `*` or `(` match themselves. Pattern mode
//! compiles the query as written; a pattern that fails to compile
//! simply matches nothing.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// How a query string is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// Plain text substring (default)
    #[default]
    Literal,
    /// Case-insensitive regular expression
    Pattern,
}

impl std::str::FromStr for QueryMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "literal" => Ok(Self::Literal),
            "pattern" | "regex" => Ok(Self::Pattern),
            other => Err(format!("unknown query mode '{other}'")),
        }
    }
}

/// Compiled query
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    /// Compile a query.
    ///
    /// Returns `None` for blank queries and for patterns that do not
    /// compile; callers treat both as "matches nothing".
    pub fn new(query: &str, mode: QueryMode) -> Option<Self> {
        if query.trim().is_empty() {
            return None;
        }

        let source = match mode {
            QueryMode::Literal => regex::escape(query),
            QueryMode::Pattern => query.to_string(),
        };

        match RegexBuilder::new(&source).case_insensitive(true).build() {
            Ok(regex) => Some(Self { regex }),
            Err(e) => {
                tracing::debug!("Query {:?} is not a valid pattern: {}", query, e);
                None
            }
        }
    }

    /// Byte ranges of non-overlapping, non-empty matches in `text`
    pub fn find_iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Range<usize>> + 'a {
        self.regex
            .find_iter(text)
            .filter(|m| !m.is_empty())
            .map(|m| m.range())
    }

    /// First non-empty match in `text`
    pub fn find(&self, text: &str) -> Option<Range<usize>> {
        self.find_iter(text).next()
    }

    pub fn count(&self, text: &str) -> usize {
        self.find_iter(text).count()
    }

    /// Slice `window` out of `line`, wrapping with `**` every match of
    /// the whole line that lies fully inside it.
    ///
    /// Matches are found on the full line so anchors and word boundaries
    /// never treat the window edges as line edges. Source casing is kept.
    pub fn highlight_within(&self, line: &str, window: Range<usize>) -> String {
        self.highlight_within_with(line, window, |m| format!("**{m}**"))
    }

    /// Like [`Matcher::highlight_within`], with `mark` rendering each match
    pub fn highlight_within_with<F>(&self, line: &str, window: Range<usize>, mark: F) -> String
    where
        F: Fn(&str) -> String,
    {
        let mut out = String::with_capacity(window.len() + 8);
        let mut last = window.start;
        for range in self
            .find_iter(line)
            .filter(|r| r.start >= window.start && r.end <= window.end)
        {
            out.push_str(&line[last..range.start]);
            out.push_str(&mark(&line[range.clone()]));
            last = range.end;
        }
        out.push_str(&line[last..window.end]);
        out
    }
}
