use chrono::{Datelike, Days, NaiveDate};

use crate::{
    derive,
    error::FormatError,
    model::{TideRecord, tide::EventDate},
};

use super::Report;

const DAYS_SHOWN: u64 = 4;
const TIDE_KINDS: [&str; 2] = ["Low Tide", "High Tide"];

/// High and low tides for four days starting at `today`.
///
/// Events are grouped under the calendar day they fall on and keep the
/// feed's order within a day. No events at all halts the report.
pub fn format_tide(rec: &TideRecord, _station: &str, today: NaiveDate) -> Result<Report, FormatError> {
    if rec.tide_summary.is_empty() {
        return Ok(Report::Halted("No tidal data available.".to_string()));
    }

    let site = rec
        .tide_info
        .first()
        .ok_or(FormatError::MissingEntry { what: "tide site" })?;
    let mut lines = vec![format!("Tidal data for {}", site.tide_site)];

    for offset in 0..DAYS_SHOWN {
        let Some(date) = today.checked_add_days(Days::new(offset)) else {
            break;
        };
        lines.push(format!("{}/{}/{}:", date.month(), date.day(), date.year()));

        for event in &rec.tide_summary {
            if !TIDE_KINDS.contains(&event.data.kind.as_str()) || !falls_on(&event.date, date) {
                continue;
            }
            let time = derive::twelve_hour_clock(&event.date.hour, &event.date.min)?;
            lines.push(format!("  {}: {}", event.data.kind, time));
        }
    }

    Ok(Report::Lines(lines))
}

/// Day of month must match; month and year only when the feed sends them.
fn falls_on(when: &EventDate, date: NaiveDate) -> bool {
    fn matches(field: &str, expected: i64) -> bool {
        field.trim().parse::<i64>().is_ok_and(|v| v == expected)
    }

    matches(&when.mday, date.day().into())
        && (when.mon.is_empty() || matches(&when.mon, date.month().into()))
        && (when.year.is_empty() || matches(&when.year, date.year().into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tide::{TideData, TideEvent, TideInfo};

    fn event(mon: &str, mday: &str, year: &str, hour: &str, kind: &str) -> TideEvent {
        TideEvent {
            date: EventDate {
                pretty: String::new(),
                hour: hour.into(),
                min: "07".into(),
                mon: mon.into(),
                mday: mday.into(),
                year: year.into(),
            },
            data: TideData { height: "4.2 ft".into(), kind: kind.into() },
        }
    }

    fn record(events: Vec<TideEvent>) -> TideRecord {
        TideRecord {
            tide_info: vec![TideInfo { tide_site: "Sandy Hook, New Jersey".into() }],
            tide_summary: events,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn no_events_halts() {
        let report = format_tide(&record(vec![]), "KNYC", date(2026, 10, 16)).unwrap();
        assert_eq!(report, Report::Halted("No tidal data available.".into()));
    }

    #[test]
    fn groups_events_by_day() {
        let rec = record(vec![
            event("10", "16", "2026", "4", "High Tide"),
            event("10", "16", "2026", "10", "Sunrise"),
            event("10", "16", "2026", "16", "Low Tide"),
            event("10", "17", "2026", "5", "High Tide"),
        ]);

        assert_eq!(
            format_tide(&rec, "KNYC", date(2026, 10, 16)).unwrap().into_lines(),
            vec![
                "Tidal data for Sandy Hook, New Jersey",
                "10/16/2026:",
                "  High Tide: 4:07 AM",
                "  Low Tide: 4:07 PM",
                "10/17/2026:",
                "  High Tide: 5:07 AM",
                "10/18/2026:",
                "10/19/2026:",
            ]
        );
    }

    #[test]
    fn rolls_over_month_and_year() {
        let rec = record(vec![
            event("12", "31", "2026", "0", "Low Tide"),
            event("1", "1", "2027", "12", "High Tide"),
        ]);

        let lines = format_tide(&rec, "KNYC", date(2026, 12, 30)).unwrap().into_lines();
        assert_eq!(
            lines,
            vec![
                "Tidal data for Sandy Hook, New Jersey",
                "12/30/2026:",
                "12/31/2026:",
                "  Low Tide: 0:07 AM",
                "1/1/2027:",
                "  High Tide: 0:07 PM",
                "1/2/2027:",
            ]
        );
    }

    #[test]
    fn day_only_dates_match_any_month() {
        let rec = record(vec![event("", "05", "", "9", "High Tide")]);
        let lines = format_tide(&rec, "KNYC", date(2026, 11, 5)).unwrap().into_lines();
        assert_eq!(lines[2], "  High Tide: 9:07 AM");
    }

    #[test]
    fn missing_site_is_an_error() {
        let rec = TideRecord {
            tide_info: vec![],
            tide_summary: vec![event("10", "16", "2026", "4", "High Tide")],
        };
        assert_eq!(
            format_tide(&rec, "KNYC", date(2026, 10, 16)).unwrap_err(),
            FormatError::MissingEntry { what: "tide site" }
        );
    }
}
