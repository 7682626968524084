//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::search::QueryMode;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show include/exclude patterns
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub search: SearchSection,
    pub content: ContentSection,
}

#[derive(Debug, Serialize)]
pub struct SearchSection {
    pub context_chars: usize,
    pub max_snippets: usize,
    pub query_mode: QueryMode,
}

#[derive(Debug, Serialize)]
pub struct ContentSection {
    pub manifest: Option<String>,
    pub root_dir: Option<String>,
    pub max_file_size_kb: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_patterns: Option<Vec<String>>,
}

pub fn build_response(args: &ConfigArgs, config: &Config) -> ConfigResponse {
    let xdg = XdgDirs::new();

    ConfigResponse {
        config_file: xdg.config_file().to_string_lossy().into_owned(),
        search: SearchSection {
            context_chars: config.search.context_chars,
            max_snippets: config.search.max_snippets,
            query_mode: config.search.query_mode,
        },
        content: ContentSection {
            manifest: config
                .content
                .manifest
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
            root_dir: config
                .content
                .root_dir
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
            max_file_size_kb: config.content.max_file_size_kb,
            include_patterns: args.all.then(|| config.content.include_patterns.clone()),
            exclude_patterns: args.all.then(|| config.content.exclude_patterns.clone()),
        },
    }
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = build_response(&args, config);

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  search:");
            println!("    context_chars: {}", response.search.context_chars);
            println!("    max_snippets: {}", response.search.max_snippets);
            println!("    query_mode: {:?}", response.search.query_mode);
            println!("  content:");
            println!(
                "    manifest: {}",
                response.content.manifest.as_deref().unwrap_or("-")
            );
            println!(
                "    root_dir: {}",
                response.content.root_dir.as_deref().unwrap_or("-")
            );
            println!(
                "    max_file_size_kb: {}",
                response.content.max_file_size_kb
            );
            if let Some(include) = &response.content.include_patterns {
                println!("    include_patterns: {include:?}");
            }
            if let Some(exclude) = &response.content.exclude_patterns {
                println!("    exclude_patterns: {exclude:?}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
