use crate::cert::Certificate;
use crate::notify::NotifyError;

/// Print one line per expiring certificate: `name expiry_date status`.
pub fn print_expiring(certs: &[Certificate]) {
    for cert in certs {
        println!("{} {} {}", cert.name, cert.expiry_date, cert.status);
    }
}

/// Print the delivery confirmation with the endpoint's JSON response.
pub fn print_delivery_success(response: &serde_json::Value) {
    println!("Email sent successfully: {}", response);
}

/// Print the delivery failure message.
pub fn print_delivery_failure(err: &NotifyError) {
    println!("Failed to send email: {}", err);
}
