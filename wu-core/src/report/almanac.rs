use crate::model::AlmanacRecord;

use super::Report;

pub fn format_almanac(rec: &AlmanacRecord, _station: &str) -> Report {
    let high = &rec.temp_high;
    let low = &rec.temp_low;

    Report::Lines(vec![
        format!("Normal high: {}\u{00B0} F ({}\u{00B0} C)", high.normal.f, high.normal.c),
        format!(
            "Record high: {}\u{00B0} F ({}\u{00B0} C) [{}]",
            high.record.f, high.record.c, high.recordyear
        ),
        format!("Normal low : {}\u{00B0} F ({}\u{00B0} C)", low.normal.f, low.normal.c),
        format!(
            "Record low : {}\u{00B0} F ({}\u{00B0} C) [{}]",
            low.record.f, low.record.c, low.recordyear
        ),
    ])
}
