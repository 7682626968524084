//! Terminal command parsing.

/// A parsed terminal input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Help,
    List(Option<&'a str>),
    Tree,
    Cat(Option<&'a str>),
    /// Everything after the command word, verbatim
    Search(&'a str),
    Clear,
    Exit,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Parse a non-blank, trimmed input line
    pub fn parse(line: &'a str) -> Self {
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let arg = rest.split_whitespace().next();

        match name.to_ascii_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "ls" | "dir" => Self::List(arg),
            "tree" => Self::Tree,
            "cat" | "open" => Self::Cat(arg),
            "search" | "grep" | "find" => Self::Search(rest),
            "clear" | "cls" => Self::Clear,
            "exit" | "quit" => Self::Exit,
            _ => Self::Unknown(name),
        }
    }
}
