//! Display values derived from a fetched record.
//!
//! Everything here is pure: the same input always renders the same text.

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub const INVALID_DATE: &str = "Invalid Date";

/// `Jan 5, 2024, 03:04:05 PM`
const TIMESTAMP_FORMAT: &str = "%b %-d, %Y, %I:%M:%S %p";

/// `1/5/2024, 3:04:05 PM`
const DEADLINE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Timestamps without an offset.
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

pub fn format_timestamp(input: &str) -> String {
    format_timestamp_in(input, &Utc)
}

/// Renders `input` in `tz`. Unparseable input renders as [`INVALID_DATE`].
pub fn format_timestamp_in<Tz>(input: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_timestamp(input, tz) {
        Some(at) => at.format(TIMESTAMP_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

pub fn format_deadline(secs: u64) -> String {
    format_deadline_in(secs, &Utc)
}

/// Renders a Unix-seconds deadline in `tz`.
pub fn format_deadline_in<Tz>(secs: u64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    i64::try_from(secs)
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .map(|at| at.with_timezone(tz).format(DEADLINE_FORMAT).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn parse_timestamp<Tz: TimeZone>(input: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let input = input.trim();

    if let Ok(at) = DateTime::parse_from_rfc3339(input) {
        return Some(at.with_timezone(tz));
    }

    // Naive date-times are wall-clock time in the target zone.
    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
    {
        return tz.from_local_datetime(&naive).earliest();
    }

    // A bare date is midnight UTC.
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).with_timezone(tz))
}

/// Colour token of a chain badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainColor {
    Bitcoin,
    Ethereum,
    Base,
    Arbitrum,
    Berachain,
    Corn,
    Unichain,
    Starknet,
    Default,
}

/// Case-insensitive. Unknown chains get [`ChainColor::Default`].
pub fn chain_color(chain: &str) -> ChainColor {
    match chain.to_lowercase().as_str() {
        "bitcoin" => ChainColor::Bitcoin,
        "ethereum" => ChainColor::Ethereum,
        "base" => ChainColor::Base,
        "arbitrum" => ChainColor::Arbitrum,
        "berachain" => ChainColor::Berachain,
        "corn" => ChainColor::Corn,
        "unichain" => ChainColor::Unichain,
        "starknet" => ChainColor::Starknet,
        _ => ChainColor::Default,
    }
}

impl ChainColor {
    /// SGR parameters for a 256-colour terminal foreground.
    pub fn ansi(self) -> &'static str {
        match self {
            ChainColor::Bitcoin => "38;5;208",
            ChainColor::Ethereum => "38;5;99",
            ChainColor::Base => "38;5;33",
            ChainColor::Arbitrum => "38;5;39",
            ChainColor::Berachain => "38;5;214",
            ChainColor::Corn => "38;5;220",
            ChainColor::Unichain => "38;5;205",
            ChainColor::Starknet => "38;5;63",
            ChainColor::Default => "38;5;245",
        }
    }
}
