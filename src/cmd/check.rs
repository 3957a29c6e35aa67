use anyhow::{Context, Result, bail};
use chrono::Utc;

use crate::cli::Cli;
use crate::config;
use crate::notify::PlunkClient;
use crate::report::{self, ExpiryReport};
use crate::util::json::save_json_output;

/// Run the expiry check: parse the inventory, select certificates
/// expiring within the horizon, print them, and email the HTML report.
pub async fn run(args: &Cli) -> Result<()> {
    let text = std::fs::read_to_string(&args.file_path)
        .with_context(|| format!("read inventory file {}", args.file_path.display()))?;

    let certs = crate::inventory::parse_inventory(&text)?;
    tracing::info!(
        "Parsed {} certificate(s) from {}",
        certs.len(),
        args.file_path.display()
    );

    // Threshold is computed once per run.
    let threshold = crate::expiry::expiry_threshold(Utc::now());
    let expiring = crate::expiry::filter_expiring(&certs, threshold)?;
    tracing::info!(
        "{} certificate(s) expiring within {} days (threshold {})",
        expiring.len(),
        config::EXPIRY_HORIZON_DAYS,
        threshold.to_rfc3339()
    );

    if !args.no_stdout {
        crate::output::print_expiring(&expiring);
    }

    if let Some(path) = &args.output {
        let json_report = ExpiryReport::new(threshold, certs.len(), expiring.clone());
        match save_json_output(&json_report, path) {
            Ok(_) => {
                if !args.no_stdout {
                    tracing::info!("JSON output saved to {}", path.display());
                }
            }
            Err(e) => tracing::error!("Failed to save JSON output: {}", e),
        }
    }

    if expiring.is_empty() {
        tracing::info!("No certificates expiring soon; nothing to send");
        return Ok(());
    }

    if args.dry_run {
        tracing::info!("Dry run: skipping email delivery");
        return Ok(());
    }

    let Some(api_key) = args.api_key.clone() else {
        bail!(
            "API key not found. Please set the {} environment variable.",
            config::API_KEY_ENV
        );
    };

    let body = report::email_body(&expiring);
    let client = PlunkClient::new(api_key)?;
    match client.send(&args.to, config::EMAIL_SUBJECT, &body).await {
        Ok(response) => {
            if !args.no_stdout {
                crate::output::print_delivery_success(&response);
            }
        }
        Err(e) => {
            // Delivery failure is reported but does not fail the run.
            tracing::error!("Email delivery failed: {}", e);
            if !args.no_stdout {
                crate::output::print_delivery_failure(&e);
            }
        }
    }

    Ok(())
}
