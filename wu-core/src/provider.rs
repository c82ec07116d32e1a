use crate::{
    Record, Settings, WeatherRequest, provider::wunderground::WundergroundProvider,
    station::normalize_station,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod wunderground;

/// Source of decoded records, one request at a time.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, request: &WeatherRequest) -> anyhow::Result<Record>;
}

/// Construct the provider described by resolved settings.
pub fn provider_from_settings(settings: &Settings) -> Box<dyn WeatherProvider> {
    Box::new(WundergroundProvider::new(
        settings.api_key.clone(),
        settings.base_url.clone(),
    ))
}

/// `<base>/<key>/<feature>[_<date>]/q/<station>.json`
///
/// The date suffix is only added for categories that take one.
pub fn build_url(base_url: &str, api_key: &str, request: &WeatherRequest) -> String {
    let feature = request.category.feature();
    let station = normalize_station(&request.station);

    match request.date.as_deref().filter(|_| request.category.takes_date()) {
        Some(date) => format!("{base_url}/{api_key}/{feature}_{date}/q/{station}.json"),
        None => format!("{base_url}/{api_key}/{feature}/q/{station}.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, config::DEFAULT_BASE_URL};

    fn request(category: Category, station: &str, date: Option<&str>) -> WeatherRequest {
        WeatherRequest {
            category,
            station: station.to_string(),
            date: date.map(str::to_string),
        }
    }

    #[test]
    fn url_without_date() {
        let url = build_url(DEFAULT_BASE_URL, "KEY", &request(Category::Conditions, "KLNK", None));
        assert_eq!(url, "http://api.wunderground.com/api/KEY/conditions/q/KLNK.json");
    }

    #[test]
    fn url_uses_api_feature_name() {
        let url = build_url(DEFAULT_BASE_URL, "KEY", &request(Category::Lookup, "68508", None));
        assert_eq!(url, "http://api.wunderground.com/api/KEY/geolookup/q/68508.json");
    }

    #[test]
    fn dated_categories_get_a_suffix() {
        let url = build_url(
            DEFAULT_BASE_URL,
            "KEY",
            &request(Category::History, "KLNK", Some("20261015")),
        );
        assert_eq!(url, "http://api.wunderground.com/api/KEY/history_20261015/q/KLNK.json");

        let url = build_url(
            DEFAULT_BASE_URL,
            "KEY",
            &request(Category::Planner, "KLNK", Some("10161020")),
        );
        assert_eq!(url, "http://api.wunderground.com/api/KEY/planner_10161020/q/KLNK.json");
    }

    #[test]
    fn undated_categories_ignore_a_date() {
        let url = build_url(
            DEFAULT_BASE_URL,
            "KEY",
            &request(Category::Forecast, "KLNK", Some("20261015")),
        );
        assert_eq!(url, "http://api.wunderground.com/api/KEY/forecast/q/KLNK.json");
    }

    #[test]
    fn city_state_station_is_normalized() {
        let url = build_url("http://h", "KEY", &request(Category::Tide, "Sandy Hook, NJ", None));
        assert_eq!(url, "http://h/KEY/tide/q/NJ/Sandy_Hook.json");
    }

    #[test]
    fn provider_from_settings_builds() {
        let settings = Settings {
            api_key: "KEY".into(),
            station: "KLNK".into(),
            base_url: DEFAULT_BASE_URL.into(),
        };
        let provider = provider_from_settings(&settings);
        assert!(format!("{provider:?}").contains("WundergroundProvider"));
    }
}
