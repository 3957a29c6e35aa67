use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::cert::Certificate;
use crate::config::{EXPIRY_DATE_FORMAT, EXPIRY_HORIZON_DAYS};

/// Errors from interpreting certificate expiry timestamps.
#[derive(Debug, Error)]
pub enum ExpiryError {
    /// An expiry timestamp did not match the expected format.
    #[error("invalid expiry timestamp {value:?} for certificate {name:?}: {source}")]
    InvalidTimestamp {
        name: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Threshold instant for the run: certificates expiring at or before it
/// are reported. Computed once from the current UTC time.
pub fn expiry_threshold(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(EXPIRY_HORIZON_DAYS)
}

/// Select certificates whose expiry is at or before the threshold,
/// preserving input order. The boundary is inclusive.
pub fn filter_expiring(
    certs: &[Certificate],
    threshold: DateTime<Utc>,
) -> Result<Vec<Certificate>, ExpiryError> {
    let mut expiring = Vec::new();
    for cert in certs {
        let expiry = DateTime::parse_from_str(&cert.expiry_date, EXPIRY_DATE_FORMAT).map_err(
            |source| ExpiryError::InvalidTimestamp {
                name: cert.name.clone(),
                value: cert.expiry_date.clone(),
                source,
            },
        )?;
        if expiry.with_timezone(&Utc) <= threshold {
            expiring.push(cert.clone());
        }
    }
    Ok(expiring)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn cert(name: &str, expiry_date: &str) -> Certificate {
        Certificate {
            name: name.to_string(),
            serial_number: "00".to_string(),
            key_type: "RSA".to_string(),
            domains: name.to_string(),
            expiry_date: expiry_date.to_string(),
            certificate_path: format!("/etc/letsencrypt/live/{name}/fullchain.pem"),
            private_key_path: format!("/etc/letsencrypt/live/{name}/privkey.pem"),
            status: "VALID".to_string(),
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn threshold_is_ten_days_ahead() {
        let threshold = expiry_threshold(fixed_now());
        assert_eq!(threshold, Utc.with_ymd_and_hms(2025, 6, 11, 0, 0, 0).unwrap());
    }

    #[test]
    fn boundary_is_inclusive() {
        let threshold = expiry_threshold(fixed_now());
        let at_boundary = cert("edge", "2025-06-11 00:00:00+0000");
        let past_boundary = cert("late", "2025-06-11 00:00:01+0000");

        let expiring = filter_expiring(&[at_boundary, past_boundary], threshold).unwrap();
        assert_eq!(expiring.len(), 1);
        assert_eq!(expiring[0].name, "edge");
    }

    #[test]
    fn keeps_input_order() {
        let threshold = expiry_threshold(fixed_now());
        let certs = vec![
            cert("b", "2025-06-05 00:00:00+0000"),
            cert("a", "2025-06-02 00:00:00+0000"),
            cert("far", "2025-09-01 00:00:00+0000"),
        ];
        let expiring = filter_expiring(&certs, threshold).unwrap();
        let names: Vec<&str> = expiring.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn honors_non_utc_offsets() {
        let threshold = expiry_threshold(fixed_now());
        // 05:30:00+0530 is midnight UTC on the threshold day.
        let offset = cert("ist", "2025-06-11 05:30:00+0530");
        let expiring = filter_expiring(&[offset], threshold).unwrap();
        assert_eq!(expiring.len(), 1);
    }

    #[test]
    fn malformed_timestamp_names_certificate() {
        let threshold = expiry_threshold(fixed_now());
        let bad = cert("bad", "2025-06-11 00:00:00");
        let err = filter_expiring(&[bad], threshold).unwrap_err();
        match err {
            ExpiryError::InvalidTimestamp { name, value, .. } => {
                assert_eq!(name, "bad");
                assert_eq!(value, "2025-06-11 00:00:00");
            }
        }
    }
}
