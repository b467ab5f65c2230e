//! Short-date rendering for the table's timestamp columns.
//!
//! The browser's locale decides the field order; [`DateLocale`] captures the
//! handful of orders the table needs and [`DateLocale::from_language_tag`]
//! maps a `navigator.language` value onto one of them. The calendar date is
//! taken in UTC so a midnight-UTC timestamp shows the same day everywhere.

#[cfg(test)]
#[path = "date_format_test.rs"]
mod date_format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Rendered in place of unparseable timestamps.
pub const INVALID_DATE: &str = "Invalid Date";

/// Field order and style of a short date.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateLocale {
    /// `1/5/2024` (en-US).
    #[default]
    MonthDayYear,
    /// `05/01/2024` (en-GB, fr, de, …).
    DayMonthYear,
    /// `2024-01-05` (sv, lt, en-CA).
    YearMonthDay,
}

impl DateLocale {
    /// Pick a short-date style for a BCP 47 tag such as `en-US` or `fr`.
    #[must_use]
    pub fn from_language_tag(tag: &str) -> Self {
        let mut parts = tag.split(['-', '_']);
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts
            .find(|p| p.len() == 2)
            .map(str::to_ascii_uppercase)
            .unwrap_or_default();
        match (language.as_str(), region.as_str()) {
            ("", _) => Self::default(),
            ("en", "" | "US" | "PH") => Self::MonthDayYear,
            ("en" | "fr", "CA") | ("sv" | "lt", _) => Self::YearMonthDay,
            _ => Self::DayMonthYear,
        }
    }

    /// Style for the browser's current locale.
    #[must_use]
    pub fn from_browser() -> Self {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.navigator().language())
                .map_or_else(Self::default, |tag| Self::from_language_tag(&tag))
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

/// Parse an ISO-8601-ish timestamp into its UTC calendar date.
///
/// Accepts RFC 3339 (`2024-01-05T10:00:00.000000Z`), offset-less date-times
/// with `T` or a space separator (treated as UTC), and bare dates.
#[must_use]
pub fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(dt.to_offset(time::UtcOffset::UTC).date());
    }
    let spaced = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let t_sep = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    if let Ok(dt) = PrimitiveDateTime::parse(raw, spaced).or_else(|_| PrimitiveDateTime::parse(raw, t_sep)) {
        return Some(dt.date());
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()
}

/// Render `raw` as a short date in `locale`, or [`INVALID_DATE`].
#[must_use]
pub fn format_date(raw: &str, locale: DateLocale) -> String {
    let Some(date) = parse_date(raw) else {
        return INVALID_DATE.to_owned();
    };
    let (year, month, day) = (date.year(), u8::from(date.month()), date.day());
    match locale {
        DateLocale::MonthDayYear => format!("{month}/{day}/{year}"),
        DateLocale::DayMonthYear => format!("{day:02}/{month:02}/{year}"),
        DateLocale::YearMonthDay => format!("{year}-{month:02}-{day:02}"),
    }
}
