//! folio CLI - search and browse a portfolio site from the command line
//!
//! # Examples
//!
//! ```bash
//! # Search a directory of pages
//! folio --content-dir ./content search "react"
//!
//! # Search a manifest-described site, JSON output
//! folio --manifest site.toml --format json search "rust"
//!
//! # Open a file by id
//! folio --content-dir ./content open about.md
//!
//! # Interactive terminal
//! folio --content-dir ./content terminal
//! ```

use clap::Parser;
use folio::cli::output::print_error;
use folio::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_env("FOLIO_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("folio=warn"));

    // stdout carries command output
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_ansi(false);

    match std::env::var("FOLIO_LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.compact().init(),
    }
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
