//! Small pure helpers that turn raw record fields into the values shown to
//! the user.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::FormatError;

/// What a sentinel value stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// No measurement.
    Absent,
    /// A measurable but negligible amount.
    Trace,
    /// The station publishes no normal to compare against.
    NoBaseline,
    /// A boolean flag that is switched on.
    Set,
}

/// A special value the data feed uses in place of a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentinel {
    pub field: &'static str,
    pub value: &'static str,
    pub marker: Marker,
}

const fn sentinel(field: &'static str, value: &'static str, marker: Marker) -> Sentinel {
    Sentinel { field, value, marker }
}

/// Special values per field.
///
/// The feed is not consistent about how it says "no value", so every
/// formatter looks its sentinel up here instead of comparing strings.
pub const SENTINELS: &[Sentinel] = &[
    sentinel("heat_index_string", "NA", Marker::Absent),
    sentinel("windchill_string", "NA", Marker::Absent),
    sentinel("fog", "1", Marker::Set),
    sentinel("rain", "1", Marker::Set),
    sentinel("snow", "1", Marker::Set),
    sentinel("hail", "1", Marker::Set),
    sentinel("tornado", "1", Marker::Set),
    sentinel("snowfalli", "T", Marker::Trace),
    sentinel("snowfalli", "", Marker::Absent),
    sentinel("precipi", "T", Marker::Trace),
    sentinel("monthtodatesnowfalli", "", Marker::Absent),
    sentinel("humidity", "", Marker::Absent),
    sentinel("heatingdegreedays", "", Marker::Absent),
    sentinel("heatingdegreedaysnormal", "", Marker::Absent),
    sentinel("heatingdegreedaysnormal", "0", Marker::NoBaseline),
    sentinel("since1julheatingdegreedaysnormal", "", Marker::Absent),
    sentinel("coolingdegreedaysnormal", "", Marker::Absent),
    sentinel("coolingdegreedaysnormal", "0", Marker::NoBaseline),
    sentinel("since1jancoolingdegreedaysnormal", "", Marker::Absent),
    sentinel("error", "", Marker::Absent),
];

/// The marker `value` carries for `field`, if it is a sentinel at all.
pub fn marker(field: &str, value: &str) -> Option<Marker> {
    SENTINELS
        .iter()
        .find(|s| s.field == field && s.value == value)
        .map(|s| s.marker)
}

/// Returns true when `value` is one of the sentinels registered for `field`.
pub fn is_sentinel(field: &str, value: &str) -> bool {
    marker(field, value).is_some()
}

/// Returns true when a "1"-style flag is switched on.
pub fn is_set(field: &str, value: &str) -> bool {
    marker(field, value) == Some(Marker::Set)
}

/// Traditional name of the lunar phase for a moon age in days.
///
/// Ages outside a lunar month (negative, or 28 and above) have no name.
pub fn moon_phase_name(age: i64) -> Option<&'static str> {
    let name = match age {
        0..=1 => "New moon",
        2..=5 => "Waxing crescent",
        6..=8 => "First quarter",
        9..=12 => "Waxing gibbous",
        13..=16 => "Full moon",
        17..=19 => "Waning gibbous",
        20..=23 => "Last quarter",
        24..=27 => "Waning crescent",
        _ => return None,
    };
    Some(name)
}

/// Boxes a wind bearing into one of the 16 compass points.
///
/// Bearings that round to 0 or to 16 and above all land on "N".
pub fn compass_point(degrees: f64) -> &'static str {
    let bearing = (degrees / 22.5 + 0.5).floor() as i64;

    match bearing {
        1 => "NNE",
        2 => "NE",
        3 => "ENE",
        4 => "E",
        5 => "ESE",
        6 => "SE",
        7 => "SSE",
        8 => "S",
        9 => "SSW",
        10 => "SW",
        11 => "WSW",
        12 => "W",
        13 => "WNW",
        14 => "NW",
        15 => "NNW",
        _ => "N",
    }
}

/// How a dewpoint (in Fahrenheit) feels.
pub fn dewpoint_comfort(dewpoint_f: i64) -> &'static str {
    match dewpoint_f {
        i64::MIN..=49 => "dry",
        50..=54 => "very comfortable",
        55..=59 => "comfortable",
        60..=64 => "okay for most",
        65..=69 => "somewhat uncomfortable",
        70..=74 => "very humid",
        75..=79 => "oppressive",
        _ => "dangerously high",
    }
}

static TEMPERATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(-?[0-9]+(?:\.[0-9]+)? F) \((-?[0-9]+(?:\.[0-9]+)? C)\)")
        .expect("temperature pattern is valid")
});

/// Rewrites "72 F (22 C)" as "22 C (72 F)".
pub fn convert_temperature_display(text: &str) -> Result<String, FormatError> {
    let caps = TEMPERATURE
        .captures(text)
        .ok_or_else(|| FormatError::TemperaturePattern { value: text.to_string() })?;

    Ok(format!("{} ({})", &caps[2], &caps[1]))
}

pub fn pressure_trend_phrase(flag: &str) -> Option<&'static str> {
    match flag {
        "+" => Some("rising"),
        "-" => Some("falling"),
        "0" => Some("holding steady"),
        _ => None,
    }
}

/// Parses the leading whole number of a string such as "54 F (12 C)".
pub fn leading_integer(field: &'static str, text: &str) -> Result<i64, FormatError> {
    let head = text.split(' ').next().unwrap_or_default();

    head.parse::<i64>().map_err(|_| FormatError::MalformedNumber {
        field,
        value: text.to_string(),
    })
}

/// Renders a 24-hour "hour" and "minute" pair on a 12-hour clock.
///
/// Hours are taken modulo 12, so midnight and noon both read as "0".
pub fn twelve_hour_clock(hour: &str, minute: &str) -> Result<String, FormatError> {
    let h: u32 = hour.trim().parse().map_err(|_| FormatError::MalformedNumber {
        field: "hour",
        value: hour.to_string(),
    })?;
    let suffix = if h >= 12 { "PM" } else { "AM" };

    Ok(format!("{}:{} {}", h % 12, minute, suffix))
}
