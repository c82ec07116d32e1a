use crate::model::ForecastSet;

use super::Report;

/// Text forecast, one line per period. Used for both the 3-day and 10-day
/// forecasts.
pub fn format_forecast(rec: &ForecastSet, station: &str) -> Report {
    let mut lines = vec![format!("Forecast for {station}"), format!("Issued at {}", rec.date)];
    lines.extend(
        rec.forecastday
            .iter()
            .map(|period| format!("{}: {}", period.title, period.fcttext)),
    );

    Report::Lines(lines)
}
