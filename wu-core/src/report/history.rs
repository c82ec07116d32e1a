use crate::{
    derive::{self, Marker, is_sentinel, is_set, marker},
    error::FormatError,
    model::{DailySummary, HistoryRecord},
};

use super::Report;

/// Daily summary for a past date. Only the first summary in the response
/// is reported.
pub fn format_history(rec: &HistoryRecord, _station: &str) -> Result<Report, FormatError> {
    let day = rec
        .dailysummary
        .first()
        .ok_or(FormatError::MissingEntry { what: "daily summary" })?;

    let mut lines = vec![summary_line(&rec.date.pretty, day)];

    // An empty month-to-date total means the station does not publish
    // full almanac data, so the snow block is skipped entirely.
    if is_set("snow", &day.snow) && !is_sentinel("monthtodatesnowfalli", &day.monthtodatesnowfalli) {
        snow(&mut lines, day);
    }

    if is_set("rain", &day.rain) {
        if marker("precipi", &day.precipi) == Some(Marker::Trace) {
            lines.push("   Precipitation: trace".to_string());
        } else {
            lines.push(format!("   Precipitation: {} in ({} mm)", day.precipi, day.precipm));
        }
    }

    lines.push("   Temperature:".to_string());
    lines.push(format!("      Mean Temperature: {} F ({} C)", day.meantempi, day.meantempm));
    lines.push(format!("      Max Temperature: {} F ({} C)", day.maxtempi, day.maxtempm));
    lines.push(format!("      Min Temperature: {} F ({} C)", day.mintempi, day.mintempm));

    lines.push("   Degree Days:".to_string());
    heating_degree_days(&mut lines, day);
    cooling_degree_days(&mut lines, day);

    lines.push("   Moisture:".to_string());
    lines.push(format!("      Mean Dew Point: {} F ({} C)", day.meandewpti, day.meandewptm));
    lines.push(format!("      Max Dew Point: {} F ({} C)", day.maxdewpti, day.maxdewptm));
    lines.push(format!("      Min Dew Point: {} F ({} C)", day.mindewpti, day.mindewptm));
    if !is_sentinel("humidity", &day.humidity) {
        lines.push(format!("      Humidity: {}%", day.humidity));
    }
    lines.push(format!("      Max Humidity: {}%", day.maxhumidity));
    lines.push(format!("      Min Humidity: {}%", day.minhumidity));

    lines.push("   Pressure:".to_string());
    lines.push(format!("      Mean Pressure: {} in ({} mb)", day.meanpressurei, day.meanpressurem));
    lines.push(format!("      Max Pressure: {} in ({} mb)", day.maxpressurei, day.maxpressurem));
    lines.push(format!("      Min Pressure: {} in ({} mb)", day.minpressurei, day.minpressurem));

    let degrees: f64 = day.meanwdird.trim().parse().map_err(|_| FormatError::MalformedNumber {
        field: "meanwdird",
        value: day.meanwdird.clone(),
    })?;
    lines.push("   Wind:".to_string());
    lines.push(format!("      Mean Wind Speed: {} mph ({} kph)", day.meanwindspdi, day.meanwindspdm));
    lines.push(format!("      Max Wind Speed: {} mph ({} kph)", day.maxwspdi, day.maxwspdm));
    lines.push(format!("      Min Wind Speed: {} mph ({} kph)", day.minwspdi, day.minwspdm));
    lines.push(format!(
        "      Mean Wind Direction: {}\u{00B0} ({})",
        day.meanwdird,
        derive::compass_point(degrees)
    ));

    lines.push("   Visibility:".to_string());
    lines.push(format!("      Mean Visibility: {} mi ({} km)", day.meanvisi, day.meanvism));
    lines.push(format!("      Max Visibility: {} mi ({} km)", day.maxvisi, day.maxvism));
    lines.push(format!("      Min Visibility: {} mi ({} km)", day.minvisi, day.minvism));

    Ok(Report::Lines(lines))
}

fn summary_line(pretty: &str, day: &DailySummary) -> String {
    let flags: Vec<&str> = [
        ("fog", &day.fog),
        ("rain", &day.rain),
        ("snow", &day.snow),
        ("hail", &day.hail),
        ("tornado", &day.tornado),
    ]
    .into_iter()
    .filter(|(name, value)| is_set(name, value))
    .map(|(name, _)| name)
    .collect();

    if flags.is_empty() {
        format!("Weather summary for {pretty}:")
    } else {
        format!("Weather summary for {pretty}: {}", flags.join(" "))
    }
}

fn snow(lines: &mut Vec<String>, day: &DailySummary) {
    lines.push("   Snow:".to_string());
    match marker("snowfalli", &day.snowfalli) {
        Some(Marker::Trace) => lines.push("     trace".to_string()),
        Some(_) => {}
        None => lines.push(format!("     {} in ({} mm)", day.snowfalli, day.snowfallm)),
    }
    lines.push(format!("     Snow depth: {} in ({} mm)", day.snowdepthi, day.snowdepthm));
    lines.push(format!(
        "     Month to date: {} in ({} mm)",
        day.monthtodatesnowfalli, day.monthtodatesnowfallm
    ));
    lines.push(format!(
        "     Since July 1st: {} in ({} mm)",
        day.since1julsnowfalli, day.since1julsnowfallm
    ));
}

/// A normal that is neither missing nor "0".
fn has_baseline(field: &str, normal: &str) -> bool {
    !is_sentinel(field, normal)
}

fn heating_degree_days(lines: &mut Vec<String>, day: &DailySummary) {
    if is_sentinel("heatingdegreedays", &day.heatingdegreedays) {
        return;
    }

    let mut line = format!("      Heating Degree Days: {}", day.heatingdegreedays);
    if marker("heatingdegreedaysnormal", &day.heatingdegreedaysnormal) != Some(Marker::Absent) {
        line.push_str(&format!(" ({} days normal)", day.heatingdegreedaysnormal));
    }
    lines.push(line);

    if !has_baseline("heatingdegreedaysnormal", &day.heatingdegreedaysnormal) {
        return;
    }
    lines.push(format!(
        "         HDG month to date: {} ({} days normal)",
        day.monthtodateheatingdegreedays, day.monthtodateheatingdegreedaysnormal
    ));
    if is_sentinel("since1julheatingdegreedaysnormal", &day.since1julheatingdegreedaysnormal) {
        lines.push(format!(
            "         HDG since Sept 1st: {} ({} days normal)",
            day.since1sepheatingdegreedays, day.since1sepheatingdegreedaysnormal
        ));
    } else {
        lines.push(format!(
            "         HDG since July 1st: {} ({} days normal)",
            day.since1julheatingdegreedays, day.since1julheatingdegreedaysnormal
        ));
    }
}

fn cooling_degree_days(lines: &mut Vec<String>, day: &DailySummary) {
    if !has_baseline("coolingdegreedaysnormal", &day.coolingdegreedaysnormal) {
        return;
    }

    lines.push(format!(
        "      Cooling Degree Days: {} ({} days normal)",
        day.coolingdegreedays, day.coolingdegreedaysnormal
    ));
    lines.push(format!(
        "         CDG month to date: {} ({} days normal)",
        day.monthtodatecoolingdegreedays, day.monthtodatecoolingdegreedaysnormal
    ));
    if is_sentinel("since1jancoolingdegreedaysnormal", &day.since1jancoolingdegreedaysnormal) {
        lines.push(format!(
            "         CDG since Sept 1st: {} ({} days normal)",
            day.since1sepcoolingdegreedays, day.since1sepcoolingdegreedaysnormal
        ));
    } else {
        lines.push(format!(
            "         CDG since Jan 1st: {} ({} days normal)",
            day.since1jancoolingdegreedays, day.since1jancoolingdegreedaysnormal
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::history::PrettyDate;

    fn day() -> DailySummary {
        DailySummary {
            fog: "0".into(),
            rain: "0".into(),
            snow: "0".into(),
            hail: "0".into(),
            tornado: "0".into(),
            meantempi: "55".into(),
            meantempm: "13".into(),
            maxtempi: "68".into(),
            maxtempm: "20".into(),
            mintempi: "42".into(),
            mintempm: "6".into(),
            meandewpti: "40".into(),
            meandewptm: "4".into(),
            humidity: "".into(),
            maxhumidity: "89".into(),
            minhumidity: "33".into(),
            meanpressurei: "30.02".into(),
            meanpressurem: "1016".into(),
            meanwindspdi: "9".into(),
            meanwindspdm: "14".into(),
            meanwdird: "180".into(),
            meanvisi: "10".into(),
            meanvism: "16".into(),
            ..Default::default()
        }
    }

    fn record(day: DailySummary) -> HistoryRecord {
        HistoryRecord {
            date: PrettyDate { pretty: "October 15, 2026".into() },
            dailysummary: vec![day],
        }
    }

    fn lines(day: DailySummary) -> Vec<String> {
        format_history(&record(day), "KLNK").unwrap().into_lines()
    }

    #[test]
    fn summary_lists_set_flags() {
        let mut d = day();
        d.fog = "1".into();
        d.hail = "1".into();
        assert_eq!(lines(d)[0], "Weather summary for October 15, 2026: fog hail");

        assert_eq!(lines(day())[0], "Weather summary for October 15, 2026:");
    }

    #[test]
    fn always_reports_core_sections() {
        let out = lines(day());
        for header in ["   Temperature:", "   Degree Days:", "   Moisture:", "   Pressure:", "   Wind:", "   Visibility:"] {
            assert!(out.iter().any(|l| l == header), "missing {header}");
        }
        assert!(out.contains(&"      Mean Wind Direction: 180° (S)".to_string()));
        assert!(!out.iter().any(|l| l.starts_with("      Humidity")));
    }

    #[test]
    fn snow_block_needs_flag_and_month_to_date() {
        let mut d = day();
        d.snow = "1".into();
        d.snowfalli = "T".into();
        assert!(!lines(d.clone()).iter().any(|l| l == "   Snow:"));

        d.monthtodatesnowfalli = "2.1".into();
        let out = lines(d);
        let at = out.iter().position(|l| l == "   Snow:").unwrap();
        assert_eq!(out[at + 1], "     trace");
        assert!(out[at + 3].starts_with("     Month to date: 2.1 in"));
    }

    #[test]
    fn snow_block_without_daily_amount() {
        let mut d = day();
        d.snow = "1".into();
        d.monthtodatesnowfalli = "2.1".into();
        d.monthtodatesnowfallm = "53".into();
        d.snowfalli = "".into();

        let out = lines(d);
        let at = out.iter().position(|l| l == "   Snow:").unwrap();
        assert!(out[at + 1].starts_with("     Snow depth:"));
        assert!(!out.iter().any(|l| l.contains(" in ( mm)")));
    }

    #[test]
    fn snow_block_with_daily_amount() {
        let mut d = day();
        d.snow = "1".into();
        d.monthtodatesnowfalli = "2.1".into();
        d.snowfalli = "0.80".into();
        d.snowfallm = "20.3".into();

        let out = lines(d);
        let at = out.iter().position(|l| l == "   Snow:").unwrap();
        assert_eq!(out[at + 1], "     0.80 in (20.3 mm)");
    }

    #[test]
    fn precipitation_reported_on_rain_days() {
        let mut d = day();
        assert!(!lines(d.clone()).iter().any(|l| l.contains("Precipitation")));

        d.rain = "1".into();
        d.precipi = "T".into();
        assert!(lines(d.clone()).contains(&"   Precipitation: trace".to_string()));

        d.precipi = "0.42".into();
        d.precipm = "10.7".into();
        assert!(lines(d).contains(&"   Precipitation: 0.42 in (10.7 mm)".to_string()));
    }

    #[test]
    fn heating_degree_days_without_normal() {
        let mut d = day();
        d.heatingdegreedays = "10".into();

        let out = lines(d);
        let at = out.iter().position(|l| l == "   Degree Days:").unwrap();
        assert_eq!(out[at + 1], "      Heating Degree Days: 10");
        assert_eq!(out[at + 2], "   Moisture:");
    }

    #[test]
    fn heating_degree_days_zero_normal_skips_month_to_date() {
        let mut d = day();
        d.heatingdegreedays = "0".into();
        d.heatingdegreedaysnormal = "0".into();

        let out = lines(d);
        let at = out.iter().position(|l| l == "   Degree Days:").unwrap();
        assert_eq!(out[at + 1], "      Heating Degree Days: 0 (0 days normal)");
        assert_eq!(out[at + 2], "   Moisture:");
    }

    #[test]
    fn heating_degree_days_since_wording() {
        let mut d = day();
        d.heatingdegreedays = "10".into();
        d.heatingdegreedaysnormal = "8".into();
        d.monthtodateheatingdegreedays = "120".into();
        d.monthtodateheatingdegreedaysnormal = "110".into();
        d.since1sepheatingdegreedays = "200".into();
        d.since1sepheatingdegreedaysnormal = "190".into();

        let out = lines(d.clone());
        assert!(out.contains(&"         HDG month to date: 120 (110 days normal)".to_string()));
        assert!(out.contains(&"         HDG since Sept 1st: 200 (190 days normal)".to_string()));

        d.since1julheatingdegreedays = "230".into();
        d.since1julheatingdegreedaysnormal = "215".into();
        let out = lines(d);
        assert!(out.contains(&"         HDG since July 1st: 230 (215 days normal)".to_string()));
        assert!(!out.iter().any(|l| l.contains("Sept 1st")));
    }

    #[test]
    fn cooling_degree_days_need_a_baseline() {
        let mut d = day();
        d.coolingdegreedays = "3".into();
        d.coolingdegreedaysnormal = "0".into();
        assert!(!lines(d.clone()).iter().any(|l| l.contains("Cooling")));

        d.coolingdegreedaysnormal = "2".into();
        d.since1jancoolingdegreedays = "900".into();
        d.since1jancoolingdegreedaysnormal = "850".into();
        let out = lines(d);
        assert!(out.contains(&"      Cooling Degree Days: 3 (2 days normal)".to_string()));
        assert!(out.contains(&"         CDG since Jan 1st: 900 (850 days normal)".to_string()));
    }

    #[test]
    fn only_first_summary_is_used() {
        let mut second = day();
        second.tornado = "1".into();
        let rec = HistoryRecord {
            date: PrettyDate { pretty: "October 15, 2026".into() },
            dailysummary: vec![day(), second],
        };

        let out = format_history(&rec, "KLNK").unwrap().into_lines();
        assert!(!out[0].contains("tornado"));
    }

    #[test]
    fn empty_summary_is_an_error() {
        let rec = HistoryRecord::default();
        assert_eq!(
            format_history(&rec, "KLNK").unwrap_err(),
            FormatError::MissingEntry { what: "daily summary" }
        );
    }

    #[test]
    fn bad_wind_direction_is_an_error() {
        let mut d = day();
        d.meanwdird = "".into();
        assert!(matches!(
            format_history(&record(d), "KLNK"),
            Err(FormatError::MalformedNumber { field: "meanwdird", .. })
        ));
    }
}
