use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ep")]
#[command(about = "Employee portal: sign in and manage employee records")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// API base URL (overrides config.toml and EP_API_BASE_URL)
    #[arg(long, global = true)]
    pub(crate) api_url: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub(crate) json: bool,

    /// Pretty-print JSON output (implies --json)
    #[arg(long, global = true)]
    pub(crate) pretty: bool,

    /// Keep the session in memory only; nothing is read from or written to disk
    #[arg(long, global = true)]
    pub(crate) ephemeral: bool,
}
