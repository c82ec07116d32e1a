use crate::model::StationList;

use super::Report;

pub fn format_lookup(rec: &StationList) -> Report {
    if rec.station.is_empty() {
        return Report::Lines(vec!["No area stations".to_string()]);
    }

    Report::Lines(
        rec.station
            .iter()
            .map(|s| format!("{}: {}", s.city, s.icao))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Station;

    #[test]
    fn no_stations() {
        assert_eq!(
            format_lookup(&StationList::default()).into_lines(),
            vec!["No area stations"]
        );
    }

    #[test]
    fn one_line_per_station() {
        let rec = StationList {
            station: vec![
                Station { city: "Lincoln".into(), icao: "KLNK".into() },
                Station { city: "Omaha".into(), icao: "KOMA".into() },
            ],
        };
        assert_eq!(format_lookup(&rec).into_lines(), vec!["Lincoln: KLNK", "Omaha: KOMA"]);
    }
}
