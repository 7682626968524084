//! Open command - print a file's content by id

use crate::cli::output::print_header;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the open command
#[derive(Args, Debug)]
pub struct OpenArgs {
    /// File id (as shown by `folio list` or in search results)
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct OpenOutput<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub content: &'a str,
}

/// Execute the open command
pub fn execute(
    args: OpenArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let site = &services.site;
    let content = site.open(&args.id)?;
    let name = site
        .find(&args.id)
        .map(|n| n.name.as_str())
        .unwrap_or(args.id.as_str());

    match format {
        OutputFormat::Human => {
            print_header(name);
            println!("{content}");
        }
        OutputFormat::Json => {
            let output = OpenOutput {
                id: &args.id,
                name,
                content,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
