//! Terminal command - interactive session on stdin/stdout

use crate::core::services::Services;
use crate::terminal::{Terminal, TerminalOutput, PROMPT};
use clap::Args;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// ANSI sequence to clear the screen and home the cursor
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Arguments for the terminal command
#[derive(Args, Debug)]
pub struct TerminalArgs {
    /// Do not print the prompt (for piped input)
    #[arg(long)]
    pub no_prompt: bool,
}

/// Execute the terminal command
pub fn execute(
    args: TerminalArgs,
    services: &Arc<Services>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = Terminal::new(Arc::clone(services));
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut terminal, stdin.lock(), stdout.lock(), !args.no_prompt)?;
    Ok(())
}

/// Drive a terminal from `input` until `exit` or end of input
pub fn run_session<R: BufRead, W: Write>(
    terminal: &mut Terminal,
    input: R,
    mut output: W,
    show_prompt: bool,
) -> io::Result<()> {
    if show_prompt {
        writeln!(output, "Type 'help' to see available commands.")?;
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    for line in input.lines() {
        let line = line?;
        match terminal.execute(&line) {
            TerminalOutput::Lines(lines) => {
                for l in lines {
                    writeln!(output, "{l}")?;
                }
            }
            TerminalOutput::Clear => write!(output, "{CLEAR_SCREEN}")?,
            TerminalOutput::Exit => break,
        }

        if show_prompt {
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }
    }

    Ok(())
}
