use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cert::Certificate;
use crate::config::EXPIRY_HORIZON_DAYS;

/// Metadata about an expiry check run.
#[derive(Serialize, Deserialize, Debug)]
pub struct ReportMeta {
    pub tool: String,
    pub version: String,
    pub generated_at: DateTime<Utc>,
}

impl Default for ReportMeta {
    fn default() -> Self {
        Self {
            tool: "certwatch".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            generated_at: Utc::now(),
        }
    }
}

/// JSON report of one expiry check run.
#[derive(Serialize, Deserialize, Debug)]
pub struct ExpiryReport {
    pub meta: ReportMeta,
    /// Threshold instant used for the selection.
    pub threshold: DateTime<Utc>,
    pub horizon_days: i64,
    /// Number of records parsed from the inventory.
    pub total: usize,
    /// Records expiring at or before the threshold, input order.
    pub expiring: Vec<Certificate>,
}

impl ExpiryReport {
    pub fn new(threshold: DateTime<Utc>, total: usize, expiring: Vec<Certificate>) -> Self {
        Self {
            meta: ReportMeta::default(),
            threshold,
            horizon_days: EXPIRY_HORIZON_DAYS,
            total,
            expiring,
        }
    }
}

/// Render records as an HTML table with one data row per record.
///
/// Column order is Name, Expiry Date, Status, Domains. Values are
/// inserted verbatim.
pub fn render_html_table(certs: &[Certificate]) -> String {
    let mut rows = String::new();
    for cert in certs {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            cert.name, cert.expiry_date, cert.status, cert.domains
        ));
    }
    format!(
        "<table border=\"1\" style=\"border-collapse: collapse; width: 100%;\">\n\
         <thead>\n\
         <tr><th>Name</th><th>Expiry Date</th><th>Status</th><th>Domains</th></tr>\n\
         </thead>\n\
         <tbody>\n\
         {rows}\
         </tbody>\n\
         </table>"
    )
}

/// Full body of the notification email.
pub fn email_body(certs: &[Certificate]) -> String {
    format!(
        "The following certificates are expiring soon:\n\n{}",
        render_html_table(certs)
    )
}
