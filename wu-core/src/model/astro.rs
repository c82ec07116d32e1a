use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AstronomyResponse {
    pub moon_phase: AstroRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AstroRecord {
    pub percent_illuminated: String,
    pub age_of_moon: String,
    pub sunrise: ClockTime,
    pub sunset: ClockTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockTime {
    pub hour: String,
    pub minute: String,
}
