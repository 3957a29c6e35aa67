pub mod cert;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod expiry;
pub mod inventory;
pub mod log;
pub mod notify;
pub mod output;
pub mod report;
pub mod time;
pub mod util;

use clap::Parser;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    if let Err(e) = log::init_logger(&args) {
        eprintln!("Failed to initialize logger: {}", e);
        std::process::exit(1);
    }
    if let Err(e) = cmd::check::run(&args).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}
