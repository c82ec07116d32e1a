use std::sync::LazyLock;

use regex::Regex;

static CITY_STATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("([A-Za-z ]+), ([A-Za-z ]+)").expect("city/state pattern is valid"));

/// Turns "San Francisco, CA" into the "CA/San_Francisco" form the API
/// expects. Airport codes, zip codes and coordinates pass through.
pub fn normalize_station(station: &str) -> String {
    match CITY_STATE.captures(station) {
        Some(caps) => format!("{}/{}", &caps[2], &caps[1]).replace(' ', "_"),
        None => station.to_string(),
    }
}
