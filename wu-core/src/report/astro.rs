use crate::{derive, error::FormatError, model::AstroRecord};

use super::Report;

pub fn format_astro(rec: &AstroRecord, _station: &str) -> Result<Report, FormatError> {
    let age = derive::leading_integer("ageOfMoon", &rec.age_of_moon)?;
    let phase = derive::moon_phase_name(age).unwrap_or("Unknown phase");

    Ok(Report::Lines(vec![
        format!("Moon Phase: {phase} ({}% illuminated)", rec.percent_illuminated),
        format!("Sunrise   : {}:{}", rec.sunrise.hour, rec.sunrise.minute),
        format!("Sunset    : {}:{}", rec.sunset.hour, rec.sunset.minute),
    ]))
}
