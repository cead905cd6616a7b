use crate::core::clock::FixedClock;
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "restaurant-menu")]
#[command(about = "Show a restaurant's menu, opening status and order totals")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "restaurant.toml")]
    pub config: String,

    /// Check opening status at this time (HH:MM or HH:MM:SS) instead of now
    #[arg(long, value_parser = FixedClock::parse)]
    pub at: Option<FixedClock>,

    /// Comma-separated item names to total up
    #[arg(long, value_delimiter = ',', value_parser = parse_order_item)]
    pub order: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log as JSON regardless of the config file
    #[arg(long)]
    pub json_logs: bool,
}

/// One entry of `--order`, with the whitespace around the comma dropped.
fn parse_order_item(value: &str) -> Result<String> {
    validate_non_empty_string("order", value)?;
    Ok(value.trim().to_string())
}
