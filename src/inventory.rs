use thiserror::Error;

use crate::cert::Certificate;

/// Errors from parsing a certificate inventory file.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A labeled line had no `": "` separator after the label.
    #[error("malformed line {line_no}: {line:?}")]
    MalformedLabelLine { line_no: usize, line: String },

    /// An `Expiry Date:` value without the ` (STATUS)` suffix.
    #[error("expiry date on line {line_no} has no status suffix: {value:?}")]
    MalformedExpiryLine { line_no: usize, value: String },

    /// A record boundary was reached with required fields still unset.
    #[error("incomplete certificate record {name:?}: missing {missing:?}")]
    IncompleteRecord {
        name: String,
        missing: Vec<&'static str>,
    },
}

/// Recognized line labels in the inventory format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Name,
    SerialNumber,
    KeyType,
    Domains,
    ExpiryDate,
    CertificatePath,
    PrivateKeyPath,
}

impl Label {
    const ALL: [(Label, &'static str); 7] = [
        (Label::Name, "Certificate Name:"),
        (Label::SerialNumber, "Serial Number:"),
        (Label::KeyType, "Key Type:"),
        (Label::Domains, "Domains:"),
        (Label::ExpiryDate, "Expiry Date:"),
        (Label::CertificatePath, "Certificate Path:"),
        (Label::PrivateKeyPath, "Private Key Path:"),
    ];

    /// Match a trimmed line against the recognized labels.
    fn of_line(line: &str) -> Option<Label> {
        Self::ALL
            .iter()
            .find(|(_, prefix)| line.starts_with(prefix))
            .map(|(label, _)| *label)
    }
}

/// Field-by-field accumulator for one in-progress inventory record.
///
/// Finalizing through `build` fails when a required field never
/// appeared before the record boundary.
#[derive(Debug, Default)]
pub struct CertificateBuilder {
    name: Option<String>,
    serial_number: Option<String>,
    key_type: Option<String>,
    domains: Option<String>,
    expiry_date: Option<String>,
    certificate_path: Option<String>,
    private_key_path: Option<String>,
    status: Option<String>,
}

impl CertificateBuilder {
    /// Whether no field has been set yet.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.serial_number.is_none()
            && self.key_type.is_none()
            && self.domains.is_none()
            && self.expiry_date.is_none()
            && self.certificate_path.is_none()
            && self.private_key_path.is_none()
            && self.status.is_none()
    }

    /// Finalize the record. All eight fields are required.
    pub fn build(self) -> Result<Certificate, InventoryError> {
        let missing: Vec<&'static str> = [
            ("name", self.name.is_none()),
            ("serial_number", self.serial_number.is_none()),
            ("key_type", self.key_type.is_none()),
            ("domains", self.domains.is_none()),
            ("expiry_date", self.expiry_date.is_none()),
            ("certificate_path", self.certificate_path.is_none()),
            ("private_key_path", self.private_key_path.is_none()),
            ("status", self.status.is_none()),
        ]
        .iter()
        .filter(|(_, is_missing)| *is_missing)
        .map(|(field, _)| *field)
        .collect();

        if !missing.is_empty() {
            return Err(InventoryError::IncompleteRecord {
                name: self.name.unwrap_or_else(|| "(unnamed)".to_string()),
                missing,
            });
        }

        Ok(Certificate {
            name: self.name.unwrap_or_default(),
            serial_number: self.serial_number.unwrap_or_default(),
            key_type: self.key_type.unwrap_or_default(),
            domains: self.domains.unwrap_or_default(),
            expiry_date: self.expiry_date.unwrap_or_default(),
            certificate_path: self.certificate_path.unwrap_or_default(),
            private_key_path: self.private_key_path.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
        })
    }
}

/// Parser state: between records, or accumulating one.
enum ParserState {
    Idle,
    Accumulating(CertificateBuilder),
}

/// Parse the full text of an inventory file into certificate records,
/// preserving input order.
///
/// Records are delimited by repetition of the `Certificate Name:` label.
/// Lines matching no recognized label are ignored.
pub fn parse_inventory(text: &str) -> Result<Vec<Certificate>, InventoryError> {
    let mut certs: Vec<Certificate> = Vec::new();
    let mut state = ParserState::Idle;

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        let Some(label) = Label::of_line(line) else {
            continue;
        };
        let Some((_, value)) = line.split_once(": ") else {
            return Err(InventoryError::MalformedLabelLine {
                line_no,
                line: line.to_string(),
            });
        };

        let mut builder = match state {
            ParserState::Idle => CertificateBuilder::default(),
            ParserState::Accumulating(current) => {
                if label == Label::Name && !current.is_empty() {
                    // A new record starts; finalize the current one first.
                    certs.push(current.build()?);
                    CertificateBuilder::default()
                } else {
                    current
                }
            }
        };

        match label {
            Label::Name => builder.name = Some(value.to_string()),
            Label::SerialNumber => builder.serial_number = Some(value.to_string()),
            Label::KeyType => builder.key_type = Some(value.to_string()),
            Label::Domains => builder.domains = Some(value.to_string()),
            Label::ExpiryDate => {
                let (expiry_date, status) = split_expiry_value(value, line_no)?;
                builder.expiry_date = Some(expiry_date);
                builder.status = Some(status);
            }
            Label::CertificatePath => builder.certificate_path = Some(value.to_string()),
            Label::PrivateKeyPath => builder.private_key_path = Some(value.to_string()),
        }
        state = ParserState::Accumulating(builder);
    }

    // End of input finalizes the last record.
    if let ParserState::Accumulating(builder) = state {
        if !builder.is_empty() {
            certs.push(builder.build()?);
        }
    }

    Ok(certs)
}

/// Split an `Expiry Date:` value into timestamp and status label.
///
/// `"2025-01-01 00:00:00+0000 (EXPIRED)"` becomes
/// `("2025-01-01 00:00:00+0000", "EXPIRED")`.
fn split_expiry_value(value: &str, line_no: usize) -> Result<(String, String), InventoryError> {
    let Some((expiry_date, rest)) = value.split_once(" (") else {
        return Err(InventoryError::MalformedExpiryLine {
            line_no,
            value: value.to_string(),
        });
    };
    let status = rest.trim_end_matches(')');
    Ok((expiry_date.to_string(), status.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "\
Saving debug log to /var/log/letsencrypt/letsencrypt.log

- - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
Found the following certs:
  Certificate Name: example.com
    Serial Number: 3f8a9b2c1d
    Key Type: RSA
    Domains: example.com www.example.com
    Expiry Date: 2025-03-01 12:00:00+0000 (VALID: 89 days)
    Certificate Path: /etc/letsencrypt/live/example.com/fullchain.pem
    Private Key Path: /etc/letsencrypt/live/example.com/privkey.pem
  Certificate Name: api.example.com
    Serial Number: 77aa00ff42
    Key Type: ECDSA
    Domains: api.example.com
    Expiry Date: 2025-01-01 00:00:00+0000 (EXPIRED)
    Certificate Path: /etc/letsencrypt/live/api.example.com/fullchain.pem
    Private Key Path: /etc/letsencrypt/live/api.example.com/privkey.pem
- - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
";

    #[test]
    fn parses_records_in_order() {
        let certs = parse_inventory(WELL_FORMED).unwrap();
        assert_eq!(certs.len(), 2);
        assert_eq!(certs[0].name, "example.com");
        assert_eq!(certs[0].serial_number, "3f8a9b2c1d");
        assert_eq!(certs[0].key_type, "RSA");
        assert_eq!(certs[0].domains, "example.com www.example.com");
        assert_eq!(
            certs[0].certificate_path,
            "/etc/letsencrypt/live/example.com/fullchain.pem"
        );
        assert_eq!(
            certs[0].private_key_path,
            "/etc/letsencrypt/live/example.com/privkey.pem"
        );
        assert_eq!(certs[1].name, "api.example.com");
    }

    #[test]
    fn splits_expiry_date_and_status() {
        let certs = parse_inventory(WELL_FORMED).unwrap();
        assert_eq!(certs[0].expiry_date, "2025-03-01 12:00:00+0000");
        assert_eq!(certs[0].status, "VALID: 89 days");
        assert_eq!(certs[1].expiry_date, "2025-01-01 00:00:00+0000");
        assert_eq!(certs[1].status, "EXPIRED");
    }

    #[test]
    fn ignores_unrecognized_lines() {
        // Separator lines, blank lines and the log banner all carry no label.
        let certs = parse_inventory(WELL_FORMED).unwrap();
        assert_eq!(certs.len(), 2);
    }

    #[test]
    fn empty_input_yields_no_records() {
        assert!(parse_inventory("").unwrap().is_empty());
        assert!(parse_inventory("no labels here\n\n").unwrap().is_empty());
    }

    #[test]
    fn incomplete_record_names_missing_fields() {
        let text = "\
Certificate Name: broken.example.com
Serial Number: 0011
Expiry Date: 2025-01-01 00:00:00+0000 (EXPIRED)
";
        let err = parse_inventory(text).unwrap_err();
        match err {
            InventoryError::IncompleteRecord { name, missing } => {
                assert_eq!(name, "broken.example.com");
                assert!(missing.contains(&"key_type"));
                assert!(missing.contains(&"domains"));
                assert!(missing.contains(&"certificate_path"));
                assert!(missing.contains(&"private_key_path"));
                assert!(!missing.contains(&"expiry_date"));
                assert!(!missing.contains(&"status"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn record_without_name_line_is_rejected() {
        let text = "\
Serial Number: 0011
Key Type: RSA
Domains: a.example.com
Expiry Date: 2025-01-01 00:00:00+0000 (EXPIRED)
Certificate Path: /tmp/a.pem
Private Key Path: /tmp/a.key
";
        let err = parse_inventory(text).unwrap_err();
        match err {
            InventoryError::IncompleteRecord { name, missing } => {
                assert_eq!(name, "(unnamed)");
                assert_eq!(missing, vec!["name"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn expiry_without_status_suffix_is_rejected() {
        let text = "\
Certificate Name: x.example.com
Expiry Date: 2025-01-01 00:00:00+0000
";
        let err = parse_inventory(text).unwrap_err();
        match err {
            InventoryError::MalformedExpiryLine { line_no, value } => {
                assert_eq!(line_no, 2);
                assert_eq!(value, "2025-01-01 00:00:00+0000");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn bare_label_line_is_rejected() {
        let err = parse_inventory("Serial Number:\n").unwrap_err();
        assert!(matches!(err, InventoryError::MalformedLabelLine { line_no: 1, .. }));
    }

    #[test]
    fn name_label_finalizes_previous_record() {
        // The second name marker must emit the first record before the
        // builder is reused, so a later field cannot leak backwards.
        let certs = parse_inventory(WELL_FORMED).unwrap();
        assert_eq!(certs[0].serial_number, "3f8a9b2c1d");
        assert_eq!(certs[1].serial_number, "77aa00ff42");
    }

    #[test]
    fn builder_reports_empty_until_first_field() {
        let mut builder = CertificateBuilder::default();
        assert!(builder.is_empty());
        builder.name = Some("x".to_string());
        assert!(!builder.is_empty());
    }
}
