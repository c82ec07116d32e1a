use serde::{Deserialize, Serialize};

/// Body of a `forecast` or `forecast10day` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastResponse {
    pub forecast: Forecast,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Forecast {
    pub txt_forecast: ForecastSet,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastSet {
    pub date: String,
    pub forecastday: Vec<ForecastPeriod>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastPeriod {
    pub title: String,
    pub fcttext: String,
}
