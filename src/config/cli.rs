use crate::core::report::OutputFormat;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "canrev-calc")]
#[command(about = "Profitability calculator for canning-machine subscription plans")]
pub struct CliConfig {
    /// Path to a TOML configuration file (built-in plans are used otherwise)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the subscription plans
    Plans,
    /// Compute profit for one plan, markup and volume
    Calculate(CalculateArgs),
    /// Sweep a range of monthly volumes and write a CSV or JSON report
    Report(ReportArgs),
    /// Read calculator edits line by line from stdin
    Interactive,
    /// Send the contact form
    Contact(ContactArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CalculateArgs {
    #[arg(long)]
    pub plan: Option<String>,

    /// Markup per can, e.g. "0.85" or "0,85"
    #[arg(long)]
    pub markup: Option<String>,

    /// Expected cans per month
    #[arg(long)]
    pub volume: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ReportArgs {
    #[arg(long)]
    pub plan: String,

    #[arg(long)]
    pub markup: String,

    #[arg(long, default_value = "500")]
    pub from: f64,

    #[arg(long, default_value = "5000")]
    pub to: f64,

    #[arg(long, default_value = "500")]
    pub step: f64,

    #[arg(long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub message: String,

    /// Override the endpoint from the configuration
    #[arg(long)]
    pub endpoint: Option<String>,
}
