use crate::{derive, error::FormatError, model::CurrentConditions};

use super::{Report, Units};

/// Current conditions, optionally with Celsius shown first.
pub fn format_conditions(rec: &CurrentConditions, units: Units) -> Result<Report, FormatError> {
    let celsius = units == Units::Celsius;
    let mut lines = vec![
        format!(
            "Current conditions at {} ({})",
            rec.observation_location.full, rec.station_id
        ),
        rec.observation_time.clone(),
    ];

    let temperature = if celsius {
        derive::convert_temperature_display(&rec.temperature_string)?
    } else {
        rec.temperature_string.clone()
    };
    lines.push(format!("   Temperature: {temperature}"));

    if !derive::is_sentinel("heat_index_string", &rec.heat_index_string) {
        lines.push(format!("   Heat Index: {}", rec.heat_index_string));
    }
    lines.push(format!("   Sky Conditions: {}", rec.weather));
    lines.push(format!("   Wind: {}", rec.wind_string));

    let pressure = if celsius {
        format!("   Pressure: {} mb ({} in) and", rec.pressure_mb, rec.pressure_in)
    } else {
        format!("   Pressure: {} in ({} mb) and", rec.pressure_in, rec.pressure_mb)
    };
    if let Some(trend) = derive::pressure_trend_phrase(&rec.pressure_trend) {
        lines.push(format!("{pressure} {trend}"));
    }

    lines.push(format!("   Relative humidity: {}", rec.relative_humidity));

    // The comfort label always comes from the Fahrenheit reading.
    let dewpoint_f = derive::leading_integer("dewpoint_string", &rec.dewpoint_string)?;
    let dewpoint = if celsius {
        derive::convert_temperature_display(&rec.dewpoint_string)?
    } else {
        rec.dewpoint_string.clone()
    };
    lines.push(format!(
        "   Dewpoint: {dewpoint} ({})",
        derive::dewpoint_comfort(dewpoint_f)
    ));

    if !derive::is_sentinel("windchill_string", &rec.windchill_string) {
        lines.push(format!("   Windchill: {}", rec.windchill_string));
    }
    lines.push(format!("   Visibility: {} miles", rec.visibility_mi));

    if !rec.precip_today_string.to_lowercase().contains("0.0") {
        lines.push(format!("   Precipitation today: {}", rec.precip_today_string));
    }

    Ok(Report::Lines(lines))
}
