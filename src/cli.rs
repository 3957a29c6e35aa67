use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum, value_parser};

use crate::config::{API_KEY_ENV, DEFAULT_RECIPIENT};

/// certwatch - Certificate expiry monitoring and notification tool
#[derive(Parser, Debug)]
#[command(author, version, about = "certwatch - Certificate expiry monitoring and notification tool", long_about = None)]
pub struct Cli {
    /// Path to the certificate inventory file
    #[arg(required = true, value_name = "FILE", value_parser = value_parser!(PathBuf))]
    pub file_path: PathBuf,

    /// Report recipient email address
    #[arg(long, value_name = "EMAIL", default_value = DEFAULT_RECIPIENT)]
    pub to: String,

    /// Delivery API key (falls back to the PLUNK_API_KEY environment variable)
    #[arg(long, value_name = "KEY", env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Parse and report without sending the email
    #[arg(long, action = ArgAction::SetTrue, default_value_t = false)]
    pub dry_run: bool,

    /// Save result to a JSON file
    #[arg(short, long, value_name = "FILE", value_parser = value_parser!(PathBuf))]
    pub output: Option<PathBuf>,

    /// Suppress stdout output (use with --output)
    #[arg(long, action = ArgAction::SetTrue, default_value_t = false)]
    pub no_stdout: bool,

    /// Global log level
    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,

    /// Suppress non-error logs
    #[arg(long, action = ArgAction::SetTrue, default_value_t = false)]
    pub quiet: bool,
}

/// Log level
#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    pub fn to_level_filter(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
