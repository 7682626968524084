//! Line-level snippet extraction.
//!
//! Context windows are counted in characters, not bytes, so a
//! window edge never splits a multi-byte character.

use super::matcher::Matcher;

/// Ellipsis marker for a window that does not reach a line edge
const ELLIPSIS: &str = "...";

/// Build up to `max_snippets` snippets for `content`, in line order.
///
/// Only lines that contain a match produce a snippet. A match that
/// spans a newline is never seen here.
pub fn extract_snippets(
    content: &str,
    matcher: &Matcher,
    context_chars: usize,
    max_snippets: usize,
) -> Vec<String> {
    extract_snippets_with(content, matcher, context_chars, max_snippets, |m| {
        format!("**{m}**")
    })
}

/// [`extract_snippets`] with `mark` rendering each match instead of `**`
pub fn extract_snippets_with<F>(
    content: &str,
    matcher: &Matcher,
    context_chars: usize,
    max_snippets: usize,
    mark: F,
) -> Vec<String>
where
    F: Fn(&str) -> String,
{
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| line_snippet_with(idx + 1, line, matcher, context_chars, &mark))
        .take(max_snippets)
        .collect()
}

/// Format one line as `Line <n>: [...]context**match**context[...]`
///
/// The window is anchored on the first match in the line; every match
/// that falls fully inside the window is highlighted.
pub fn line_snippet(
    line_number: usize,
    line: &str,
    matcher: &Matcher,
    context_chars: usize,
) -> Option<String> {
    line_snippet_with(line_number, line, matcher, context_chars, |m| {
        format!("**{m}**")
    })
}

fn line_snippet_with<F>(
    line_number: usize,
    line: &str,
    matcher: &Matcher,
    context_chars: usize,
    mark: F,
) -> Option<String>
where
    F: Fn(&str) -> String,
{
    let first = matcher.find(line)?;

    let char_count = line.chars().count();
    let match_start = line[..first.start].chars().count();
    let match_end = match_start + line[first.clone()].chars().count();

    let window_start = match_start.saturating_sub(context_chars);
    let window_end = (match_end + context_chars).min(char_count);

    let start_byte = char_to_byte(line, window_start);
    let end_byte = char_to_byte(line, window_end);

    let mut snippet = format!("Line {line_number}: ");
    if window_start > 0 {
        snippet.push_str(ELLIPSIS);
    }
    snippet.push_str(&matcher.highlight_within_with(line, start_byte..end_byte, mark));
    if window_end < char_count {
        snippet.push_str(ELLIPSIS);
    }

    Some(snippet)
}

/// Byte offset of the `char_idx`-th character (or the end of `s`)
fn char_to_byte(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(s.len())
}
