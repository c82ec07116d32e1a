//! Report formatting.
//!
//! Every formatter is a pure function from a decoded record to the lines
//! printed for it. Nothing here touches the network, the clock or stdout;
//! the caller supplies the station name, display units and today's date.

use chrono::NaiveDate;

use crate::{error::FormatError, model::Record};

pub mod alerts;
pub mod almanac;
pub mod astro;
pub mod conditions;
pub mod forecast;
pub mod history;
pub mod lookup;
pub mod planner;
pub mod tide;

pub use alerts::format_alerts;
pub use almanac::format_almanac;
pub use astro::format_astro;
pub use conditions::format_conditions;
pub use forecast::format_forecast;
pub use history::format_history;
pub use lookup::format_lookup;
pub use planner::format_planner;
pub use tide::format_tide;

/// Outcome of formatting one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// The full report.
    Lines(Vec<String>),
    /// The report stopped early with a single message. Not a failure.
    Halted(String),
}

impl Report {
    /// Lines to print, whichever way the report ended.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            Report::Lines(lines) => lines,
            Report::Halted(message) => vec![message],
        }
    }

    pub fn is_halted(&self) -> bool {
        matches!(self, Report::Halted(_))
    }
}

/// Temperature scale used for the conditions report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Fahrenheit,
    Celsius,
}

/// Everything a formatter may need besides the record itself.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub station: String,
    pub units: Units,
    pub today: NaiveDate,
}

impl Record {
    /// Formats this record with the formatter for its category.
    pub fn render(&self, ctx: &RenderContext) -> Result<Report, FormatError> {
        match self {
            Record::Conditions(rec) => format_conditions(rec, ctx.units),
            Record::Forecast(rec) => Ok(format_forecast(rec, &ctx.station)),
            Record::Almanac(rec) => Ok(format_almanac(rec, &ctx.station)),
            Record::Astronomy(rec) => format_astro(rec, &ctx.station),
            Record::Alerts(rec) => Ok(format_alerts(rec, &ctx.station)),
            Record::History(rec) => format_history(rec, &ctx.station),
            Record::Planner(rec) => Ok(format_planner(rec, &ctx.station)),
            Record::Tide(rec) => format_tide(rec, &ctx.station, ctx.today),
            Record::Lookup(rec) => Ok(format_lookup(rec)),
        }
    }
}
