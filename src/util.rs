use std::time::SystemTime;

/// Current UTC time as `YYYY-MM-DD HH:MM:SS UTC`.
pub fn utc_timestamp() -> String {
    let secs = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    format_unix_timestamp(secs)
}

/// Format seconds since the unix epoch without a datetime dependency.
pub fn format_unix_timestamp(secs: u64) -> String {
    let days = (secs / 86400) as i64;
    let time_of_day = secs % 86400;
    let hours = time_of_day / 3600;
    let minutes = (time_of_day % 3600) / 60;
    let seconds = time_of_day % 60;

    // Howard Hinnant's civil_from_days
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u64;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };

    format!("{y:04}-{m:02}-{d:02} {hours:02}:{minutes:02}:{seconds:02} UTC")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        assert_eq!(format_unix_timestamp(0), "1970-01-01 00:00:00 UTC");
    }

    #[test]
    fn leap_day() {
        // 2024-02-29T12:34:56Z
        assert_eq!(
            format_unix_timestamp(1_709_210_096),
            "2024-02-29 12:34:56 UTC"
        );
    }

    #[test]
    fn end_of_year() {
        // 2018-12-31T23:59:59Z
        assert_eq!(
            format_unix_timestamp(1_546_300_799),
            "2018-12-31 23:59:59 UTC"
        );
    }

    #[test]
    fn now_has_expected_shape() {
        let ts = utc_timestamp();
        assert_eq!(ts.len(), "2026-01-01 00:00:00 UTC".len());
        assert!(ts.ends_with(" UTC"));
    }
}
