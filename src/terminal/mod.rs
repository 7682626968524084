//! Simulated terminal over the site.
//!
//! Mirrors the portfolio's terminal panel: one input line in, a block
//! of output lines out. Rendering is plain text so the same output can
//! be printed by the CLI REPL or shown by an embedding UI.

mod command;

pub use command::Command;

use std::sync::Arc;

use crate::core::error::FolioError;
use crate::core::services::Services;
use crate::core::types::FileNode;

/// Prompt shown before each input line
pub const PROMPT: &str = "guest@folio:~$ ";

/// Result of executing one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalOutput {
    /// Lines to print
    Lines(Vec<String>),
    /// Clear the screen
    Clear,
    /// End the session
    Exit,
}

impl TerminalOutput {
    fn line(s: impl Into<String>) -> Self {
        Self::Lines(vec![s.into()])
    }

    fn empty() -> Self {
        Self::Lines(Vec::new())
    }

    /// Printed lines, empty for `Clear` and `Exit`
    pub fn lines(&self) -> &[String] {
        match self {
            Self::Lines(lines) => lines,
            Self::Clear | Self::Exit => &[],
        }
    }
}

/// Line-oriented terminal session
pub struct Terminal {
    services: Arc<Services>,
    history: Vec<String>,
}

impl Terminal {
    pub fn new(services: Arc<Services>) -> Self {
        Self {
            services,
            history: Vec::new(),
        }
    }

    /// Non-blank lines entered so far, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Execute one input line
    pub fn execute(&mut self, input: &str) -> TerminalOutput {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return TerminalOutput::empty();
        }
        self.history.push(trimmed.to_string());

        let command = Command::parse(trimmed);
        tracing::debug!("Terminal command: {:?}", command);

        match command {
            Command::Help => TerminalOutput::Lines(help_lines()),
            Command::List(folder) => self.list(folder),
            Command::Tree => self.tree(),
            Command::Cat(id) => self.cat(id),
            Command::Search(query) => self.search(query),
            Command::Clear => TerminalOutput::Clear,
            Command::Exit => TerminalOutput::Exit,
            Command::Unknown(name) => TerminalOutput::line(format!("command not found: {name}")),
        }
    }

    fn list(&self, folder: Option<&str>) -> TerminalOutput {
        match self.services.site.children(folder) {
            Ok(children) => TerminalOutput::Lines(children.iter().map(display_name).collect()),
            Err(_) => TerminalOutput::line(format!(
                "ls: {}: No such folder",
                folder.unwrap_or_default()
            )),
        }
    }

    fn tree(&self) -> TerminalOutput {
        let mut lines = vec![".".to_string()];
        render_tree(self.services.site.nodes(), 1, &mut lines);
        TerminalOutput::Lines(lines)
    }

    fn cat(&self, id: Option<&str>) -> TerminalOutput {
        let Some(id) = id else {
            return TerminalOutput::line("usage: cat <file-id>");
        };

        match self.services.site.open(id) {
            Ok(content) => TerminalOutput::Lines(content.lines().map(str::to_string).collect()),
            Err(FolioError::NotAFile(_)) => TerminalOutput::line(format!("cat: {id}: Is a folder")),
            Err(_) => TerminalOutput::line(format!("cat: {id}: No such file")),
        }
    }

    fn search(&self, query: &str) -> TerminalOutput {
        if query.trim().is_empty() {
            return TerminalOutput::line("usage: search <text>");
        }

        let results = self.services.search(query);
        if results.is_empty() {
            return TerminalOutput::line(format!("No matches for \"{query}\""));
        }

        let mut lines = vec![format!("{} file(s) matched \"{query}\"", results.len())];
        for result in &results {
            lines.push(format!(
                "{} ({} match{})",
                result.file_name,
                result.match_count,
                if result.match_count == 1 { "" } else { "es" }
            ));
            lines.extend(result.snippets.iter().map(|s| format!("  {s}")));
        }
        TerminalOutput::Lines(lines)
    }
}

fn display_name(node: &FileNode) -> String {
    if node.is_folder() {
        format!("{}/", node.name)
    } else {
        node.name.clone()
    }
}

fn render_tree(nodes: &[FileNode], depth: usize, out: &mut Vec<String>) {
    for node in nodes {
        out.push(format!("{}{}", "  ".repeat(depth), display_name(node)));
        render_tree(&node.children, depth + 1, out);
    }
}

fn help_lines() -> Vec<String> {
    [
        "Available commands:",
        "  help              show this message",
        "  ls [folder-id]    list a folder (top level by default)",
        "  tree              show the whole file tree",
        "  cat <file-id>     print a file",
        "  search <text>     search all files",
        "  clear             clear the screen",
        "  exit              close the terminal",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
