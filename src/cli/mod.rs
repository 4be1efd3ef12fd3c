//! CLI argument parsing

mod common;

use clap::Parser;
use std::path::PathBuf;

use crate::config::{auth, defaults};

pub use common::OutputFormat;

/// AAP organization inspector CLI
#[derive(Parser, Debug)]
#[command(name = "aap-inspect")]
#[command(version)]
#[command(
    about = "Inspect Ansible Automation Platform organizations and their dependencies",
    long_about = None
)]
#[command(after_help = "EXAMPLES:\n  \
        aap-inspect Engineering --url https://aap.example.com\n  \
        aap-inspect 5 --url https://aap.example.com --username admin --export engineering.json\n  \
        aap-inspect Engineering --url https://aap.local --no-verify-ssl -o yaml")]
pub struct Cli {
    /// Organization name or ID to inspect
    pub organization: String,

    /// AAP base URL (e.g., https://aap.example.com)
    #[arg(long, env = auth::URL_ENV_VAR)]
    pub url: String,

    /// AAP username (falls back to AAP_USERNAME, then prompts)
    #[arg(short, long)]
    pub username: Option<String>,

    /// AAP password (falls back to AAP_PASSWORD, then prompts)
    #[arg(short, long)]
    pub password: Option<String>,

    /// Disable SSL certificate verification
    #[arg(long, default_value_t = false)]
    pub no_verify_ssl: bool,

    /// Export results to JSON file
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinner, never prompt for credentials
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}

impl Cli {
    /// Spinners and prompts only make sense for interactive text output
    pub fn quiet(&self) -> bool {
        self.batch || !self.output.is_text()
    }
}
