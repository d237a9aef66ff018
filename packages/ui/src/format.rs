use chrono::{DateTime, NaiveDateTime};

/// `12.50 лв.`
pub fn format_price(price: f64, currency: &str) -> String {
    format!("{price:.2} {currency}")
}

/// Render a server timestamp as `dd.mm.yyyy hh:mm`. Unparseable input is shown as-is.
pub fn format_date(timestamp: &str) -> String {
    const FORMAT: &str = "%d.%m.%Y %H:%M";

    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return parsed.format(FORMAT).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format(FORMAT).to_string();
    }
    timestamp.to_string()
}
