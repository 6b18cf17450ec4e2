use time::OffsetDateTime;
use time::macros::format_description;

/// en-US long date, e.g. "March 15, 2025".
pub fn format_long_date(ts: OffsetDateTime) -> String {
    let fmt = format_description!("[month repr:long] [day padding:none], [year]");
    ts.format(fmt).unwrap_or_else(|_| ts.date().to_string())
}

/// "2025-03-15 10:00 UTC", used for hover text.
pub fn format_utc_minute(ts: OffsetDateTime) -> String {
    let utc = ts.to_offset(time::UtcOffset::UTC);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02} UTC",
        utc.year(),
        u8::from(utc.month()),
        utc.day(),
        utc.hour(),
        utc.minute()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn long_date_has_no_day_padding() {
        assert_eq!(format_long_date(datetime!(2025-03-05 10:00:00 UTC)), "March 5, 2025");
        assert_eq!(format_long_date(datetime!(2025-04-01 14:30:00 UTC)), "April 1, 2025");
    }

    #[test]
    fn utc_minute_normalizes_offset() {
        let ts = datetime!(2025-03-15 12:00:00 +02:00);
        assert_eq!(format_utc_minute(ts), "2025-03-15 10:00 UTC");
    }
}
