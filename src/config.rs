/// Number of days ahead of now within which a certificate counts as expiring soon.
pub const EXPIRY_HORIZON_DAYS: i64 = 10;

/// Plunk transactional email send endpoint.
pub const PLUNK_SEND_ENDPOINT: &str = "https://api.useplunk.com/v1/send";

/// Environment variable holding the delivery API key.
pub const API_KEY_ENV: &str = "PLUNK_API_KEY";

/// Default report recipient.
pub const DEFAULT_RECIPIENT: &str = "jyothri@gmail.com";

/// Subject line of the notification email.
pub const EMAIL_SUBJECT: &str = "Certificates Expiring Soon";

/// Expected format of inventory expiry timestamps (explicit UTC offset required).
pub const EXPIRY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%z";
