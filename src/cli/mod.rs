//! CLI adapter for folio
//!
//! Provides a command-line interface to search, browse and open the
//! site, and to start the interactive terminal.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |    terminal/     |
//!              | (line commands)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// folio - search a portfolio like a code editor
///
/// Loads a site from a manifest or a directory of pages, then searches,
/// lists or opens its files, or drops into a simulated terminal.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Portfolio content search and terminal", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Site manifest (TOML or JSON), overrides configuration
    #[arg(long, global = true, conflicts_with = "content_dir")]
    pub manifest: Option<PathBuf>,

    /// Directory of pages to walk, overrides configuration
    #[arg(long, global = true)]
    pub content_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search all files for a piece of text
    Search(commands::SearchArgs),

    /// List every file in tree order
    List(commands::ListArgs),

    /// Print a file's content by id
    Open(commands::OpenArgs),

    /// Start the interactive terminal
    Terminal(commands::TerminalArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  folio completions bash > ~/.local/share/bash-completion/completions/folio
    ///   zsh:   folio completions zsh > ~/.zfunc/_folio
    ///   fish:  folio completions fish > ~/.config/fish/completions/folio.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need config)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Load configuration, then apply command-line overrides
    let mut config = Config::load()?;
    if let Some(manifest) = cli.manifest {
        config.content.manifest = Some(manifest);
        config.content.root_dir = None;
    } else if let Some(dir) = cli.content_dir {
        config.content.root_dir = Some(dir);
        config.content.manifest = None;
    }
    config.log_config();

    // show-config does not need a loaded site
    if let Commands::ShowConfig(args) = cli.command {
        return commands::config::execute(args, &config, cli.format);
    }

    let services = Arc::new(Services::new(config)?);
    if services.site.file_count() == 0 {
        output::print_warning("The site has no files; every search will come back empty");
    }

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format),
        Commands::List(args) => commands::list::execute(args, &services, cli.format),
        Commands::Open(args) => commands::open::execute(args, &services, cli.format),
        Commands::Terminal(args) => commands::terminal::execute(args, &services),
        Commands::ShowConfig(_) | Commands::Completions(_) => unreachable!(), // Handled above
    }
}
