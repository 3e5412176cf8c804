use crate::adapters::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "parcel-rates")]
#[command(about = "Flat-rate shipping quotes by destination country and order subtotal")]
pub struct CliConfig {
    /// Path to the TOML settings file (defaults to every service, CAD)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Quote a single shipment
    Quote(QuoteArgs),
    /// Quote every order in a CSV file (order_id,country,subtotal)
    Batch(BatchArgs),
    /// List the configured shipping services
    Services,
    /// Load and validate the settings file
    CheckConfig,
}

#[derive(Debug, Clone, Args)]
pub struct QuoteArgs {
    /// Destination country (ISO 3166 alpha-2); omit when the address is unknown
    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub subtotal: Decimal,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Args)]
pub struct BatchArgs {
    #[arg(short, long)]
    pub input: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}
