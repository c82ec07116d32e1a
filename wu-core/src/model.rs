use serde::de::DeserializeOwned;

use crate::category::Category;

pub mod alerts;
pub mod almanac;
pub mod astro;
pub mod conditions;
pub mod forecast;
pub mod history;
pub mod lookup;
pub mod planner;
pub mod tide;

pub use alerts::{Alert, AlertSet};
pub use almanac::AlmanacRecord;
pub use astro::AstroRecord;
pub use conditions::CurrentConditions;
pub use forecast::ForecastSet;
pub use history::{DailySummary, HistoryRecord};
pub use lookup::{Station, StationList};
pub use planner::PlannerRecord;
pub use tide::TideRecord;

/// A single request against the data feed.
#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub category: Category,
    pub station: String,
    /// `YYYYMMDD` for history, `MMDDMMDD` for the planner.
    pub date: Option<String>,
}

/// One decoded response, tagged with the report it feeds.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Conditions(CurrentConditions),
    Forecast(ForecastSet),
    Almanac(AlmanacRecord),
    Astronomy(AstroRecord),
    Alerts(AlertSet),
    History(HistoryRecord),
    Planner(PlannerRecord),
    Tide(TideRecord),
    Lookup(StationList),
}

impl Record {
    /// Decodes a response body for `category`.
    pub fn from_json(category: Category, body: &str) -> serde_json::Result<Self> {
        let record = match category {
            Category::Conditions => {
                Record::Conditions(parse::<conditions::ConditionsResponse>(body)?.current_observation)
            }
            Category::Forecast | Category::Forecast10 => {
                Record::Forecast(parse::<forecast::ForecastResponse>(body)?.forecast.txt_forecast)
            }
            Category::Almanac => Record::Almanac(parse::<almanac::AlmanacResponse>(body)?.almanac),
            Category::Astronomy => {
                Record::Astronomy(parse::<astro::AstronomyResponse>(body)?.moon_phase)
            }
            Category::Alerts => Record::Alerts(parse::<AlertSet>(body)?),
            Category::History | Category::Yesterday => {
                Record::History(parse::<history::HistoryResponse>(body)?.history)
            }
            Category::Planner => Record::Planner(parse::<planner::PlannerResponse>(body)?.trip),
            Category::Tide => Record::Tide(parse::<tide::TideResponse>(body)?.tide),
            Category::Lookup => Record::Lookup(
                parse::<lookup::LookupResponse>(body)?
                    .location
                    .nearby_weather_stations
                    .airport,
            ),
        };

        Ok(record)
    }
}

fn parse<T: DeserializeOwned>(body: &str) -> serde_json::Result<T> {
    serde_json::from_str(body)
}
