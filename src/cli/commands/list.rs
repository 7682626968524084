//! List command - every file in tree order

use crate::cli::output::{colors, print_json};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show ids
    #[arg(long, short = 'q')]
    pub ids_only: bool,
}

#[derive(Debug, Serialize)]
pub struct FileEntry {
    pub id: String,
    pub name: String,
    pub has_content: bool,
}

/// Flattened files of the site, in search order
pub fn build_entries(services: &Services) -> Vec<FileEntry> {
    let site = &services.site;
    site.search_index(services.config.search.options())
        .flatten()
        .into_iter()
        .map(|node| FileEntry {
            id: node.id.clone(),
            name: node.name.clone(),
            has_content: node
                .content_ref
                .as_deref()
                .map(|r| site.content().contains(r))
                .unwrap_or(false),
        })
        .collect()
}

/// Execute the list command
pub fn execute(
    args: ListArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let entries = build_entries(services);

    match format {
        OutputFormat::Human => {
            for entry in &entries {
                if args.ids_only {
                    println!("{}", entry.id);
                } else if entry.has_content {
                    println!(
                        "{}  {}",
                        colors::node_id(&entry.id),
                        colors::file_name(&entry.name)
                    );
                } else {
                    println!(
                        "{}  {} {}",
                        colors::node_id(&entry.id),
                        colors::file_name(&entry.name),
                        colors::dim("(no content)")
                    );
                }
            }
        }
        OutputFormat::Json => print_json(&entries),
    }

    Ok(())
}
