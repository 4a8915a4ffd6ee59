//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct used for note dates.
//! Registry dates come from file modification times, so the only
//! conversions needed are `SystemTime -> UTC calendar date` and
//! `"YYYY-MM-DD" <-> DateTimeUtc` for the registry artifact.
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTimeUtc::parse("2024-06-15").unwrap();
//! let dt = DateTimeUtc::parse("2024-06-15T14:30:45Z").unwrap();
//! assert_eq!(dt.to_ymd(), "2024-06-15");
//! ```

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Result, bail};

const SECS_PER_DAY: i64 = 86_400;

/// UTC datetime without timezone complexity.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Convert seconds since the Unix epoch to a UTC datetime.
    ///
    /// Years are clamped to `0..=9999` so the result always formats as
    /// four digits.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_unix_secs(secs: i64) -> Self {
        let days = secs.div_euclid(SECS_PER_DAY);
        let rem = secs.rem_euclid(SECS_PER_DAY);
        let (year, month, day) = civil_from_days(days);

        Self::new(
            year.clamp(0, 9999) as u16,
            month,
            day,
            (rem / 3600) as u8,
            ((rem / 60) % 60) as u8,
            (rem % 60) as u8,
        )
    }

    /// Convert a filesystem timestamp to a UTC datetime.
    #[allow(clippy::cast_possible_wrap)]
    pub fn from_system_time(time: SystemTime) -> Self {
        let secs = match time.duration_since(UNIX_EPOCH) {
            Ok(after) => after.as_secs() as i64,
            // Pre-epoch timestamps: round towards the earlier second
            Err(err) => {
                let before = err.duration();
                let whole = before.as_secs() as i64;
                if before.subsec_nanos() > 0 {
                    -whole - 1
                } else {
                    -whole
                }
            }
        };
        Self::from_unix_secs(secs)
    }

    /// Drop the time-of-day component.
    pub const fn date(self) -> Self {
        Self::from_ymd(self.year, self.month, self.day)
    }

    /// Parse from "YYYY-MM-DD" or "YYYY-MM-DDTHH:MM:SSZ" format
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        // Optional RFC 3339 time part
        let (hour, minute, second) = if bytes.len() >= 20 && bytes[10] == b'T' && bytes[19] == b'Z'
        {
            if bytes[13] != b':' || bytes[16] != b':' {
                return None;
            }
            (
                parse_u8(&bytes[11..13])?,
                parse_u8(&bytes[14..16])?,
                parse_u8(&bytes[17..19])?,
            )
        } else if bytes.len() == 10 {
            (0, 0, 0)
        } else {
            return None;
        };

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;
        Some(dt)
    }

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)]
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Format the calendar date as `YYYY-MM-DD`.
    pub fn to_ymd(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

}

impl fmt::Display for DateTimeUtc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ymd())
    }
}

/// Days since 1970-01-01 to (year, month, day) in the proleptic Gregorian calendar.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097); // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11], March-based
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month as u8, day as u8)
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

/// Serde adapter writing a calendar date as `"YYYY-MM-DD"`.
///
/// Deserialization also accepts the RFC 3339 form and truncates it to the date.
pub mod ymd {
    use super::DateTimeUtc;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(date: &DateTimeUtc, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.to_ymd())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTimeUtc, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTimeUtc::parse(&raw)
            .map(DateTimeUtc::date)
            .ok_or_else(|| D::Error::custom(format!("invalid date `{raw}`, expected YYYY-MM-DD")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_from_unix_secs_epoch() {
        assert_eq!(DateTimeUtc::from_unix_secs(0), DateTimeUtc::from_ymd(1970, 1, 1));
    }

    #[test]
    fn test_from_unix_secs_with_time() {
        let dt = DateTimeUtc::from_unix_secs(1_718_461_845);
        assert_eq!(dt, DateTimeUtc::new(2024, 6, 15, 14, 30, 45));
    }

    #[test]
    fn test_from_unix_secs_leap_day() {
        assert_eq!(
            DateTimeUtc::from_unix_secs(951_782_400),
            DateTimeUtc::from_ymd(2000, 2, 29)
        );
    }

    #[test]
    fn test_from_unix_secs_before_epoch() {
        let dt = DateTimeUtc::from_unix_secs(-1);
        assert_eq!(dt, DateTimeUtc::new(1969, 12, 31, 23, 59, 59));
    }

    #[test]
    fn test_from_system_time() {
        let time = UNIX_EPOCH + Duration::from_secs(1_748_736_000);
        assert_eq!(DateTimeUtc::from_system_time(time).to_ymd(), "2025-06-01");
    }

    #[test]
    fn test_date_drops_time() {
        let dt = DateTimeUtc::new(2024, 6, 15, 14, 30, 45).date();
        assert_eq!(dt, DateTimeUtc::from_ymd(2024, 6, 15));
    }

    #[test]
    fn test_parse_forms() {
        assert_eq!(
            DateTimeUtc::parse("2024-06-15"),
            Some(DateTimeUtc::from_ymd(2024, 6, 15))
        );
        assert_eq!(
            DateTimeUtc::parse("2024-06-15T14:30:45Z"),
            Some(DateTimeUtc::new(2024, 6, 15, 14, 30, 45))
        );
        assert_eq!(DateTimeUtc::parse("2024-6-15"), None);
        assert_eq!(DateTimeUtc::parse("2024-02-30"), None);
        assert_eq!(DateTimeUtc::parse("2024-06-15 14:30"), None);
    }

    #[test]
    fn test_ordering_is_chronological() {
        let earlier = DateTimeUtc::from_ymd(2025, 1, 1);
        let later = DateTimeUtc::from_ymd(2025, 6, 1);
        assert!(earlier < later);
        assert!(DateTimeUtc::from_ymd(2024, 12, 31) < earlier);
    }

    #[test]
    fn test_validate_leap_year() {
        assert!(DateTimeUtc::from_ymd(2024, 2, 29).validate().is_ok());
        assert!(DateTimeUtc::from_ymd(2000, 2, 29).validate().is_ok());
        assert!(DateTimeUtc::from_ymd(2023, 2, 29).validate().is_err());
        assert!(DateTimeUtc::from_ymd(1900, 2, 29).validate().is_err());
    }

    #[test]
    fn test_validate_invalid_fields() {
        assert!(DateTimeUtc::new(2024, 0, 15, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 4, 31, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 24, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 6, 15, 12, 60, 0).validate().is_err());
    }

    #[test]
    fn test_ymd_serde_adapter() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "super::ymd")]
            date: DateTimeUtc,
        }

        let json = serde_json::to_string(&Wrapper {
            date: DateTimeUtc::from_ymd(2026, 2, 12),
        })
        .unwrap();
        assert_eq!(json, r#"{"date":"2026-02-12"}"#);

        let parsed: Wrapper = serde_json::from_str(r#"{"date":"2026-02-12T08:00:00Z"}"#).unwrap();
        assert_eq!(parsed.date, DateTimeUtc::from_ymd(2026, 2, 12));

        assert!(serde_json::from_str::<Wrapper>(r#"{"date":"yesterday"}"#).is_err());
    }
}
