use serde::{Deserialize, Serialize};

/// Body of a `conditions` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionsResponse {
    pub current_observation: CurrentConditions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentConditions {
    pub observation_time: String,
    pub observation_location: ObservationLocation,
    pub station_id: String,
    pub weather: String,
    pub temperature_string: String,
    pub relative_humidity: String,
    pub wind_string: String,
    pub pressure_mb: String,
    pub pressure_in: String,
    pub pressure_trend: String,
    pub dewpoint_string: String,
    pub heat_index_string: String,
    pub windchill_string: String,
    pub visibility_mi: String,
    pub precip_today_string: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationLocation {
    pub full: String,
}
