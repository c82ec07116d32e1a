use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlmanacResponse {
    pub almanac: AlmanacRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlmanacRecord {
    pub temp_high: TemperatureExtreme,
    pub temp_low: TemperatureExtreme,
}

/// Normal and record value for one end of the daily temperature range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemperatureExtreme {
    pub normal: DualTemperature,
    pub record: DualTemperature,
    pub recordyear: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DualTemperature {
    #[serde(rename = "F")]
    pub f: String,
    #[serde(rename = "C")]
    pub c: String,
}
