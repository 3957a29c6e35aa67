use serde::{Deserialize, Serialize};

/// One certificate entry extracted from an inventory file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub name: String,
    pub serial_number: String,
    pub key_type: String,
    /// Comma or space separated domain list, kept as a single string.
    pub domains: String,
    /// Expiry timestamp in `YYYY-MM-DD HH:MM:SS±HHMM` format.
    pub expiry_date: String,
    pub certificate_path: String,
    pub private_key_path: String,
    /// Free-form status label, e.g. `VALID` or `EXPIRED`.
    pub status: String,
}
