use crate::{
    derive,
    model::{PlannerRecord, planner::Likelihood},
};

use super::Report;

/// Trip planner odds, one line per likelihood in a fixed order. The sky
/// entries ("Sunny", "Cloudy", ...) read as "<name> day".
///
/// A response carrying an error message halts with that message.
pub fn format_planner(rec: &PlannerRecord, _station: &str) -> Report {
    if !derive::is_sentinel("error", &rec.error) {
        return Report::Halted(rec.error.clone());
    }

    let mut lines = vec![
        rec.title.clone(),
        format!("Station: {}", rec.airport_code),
        "Chance of:".to_string(),
    ];
    lines.extend(
        ordered(rec)
            .into_iter()
            .map(|(entry, suffix)| format!("   {}{suffix}: {}%", entry.name, entry.percentage)),
    );

    Report::Lines(lines)
}

fn ordered(rec: &PlannerRecord) -> [(&Likelihood, &'static str); 18] {
    let c = &rec.chance_of;
    [
        (&c.tempoverninety, ""),
        (&c.tempoversixty, ""),
        (&c.tempoverfreezing, ""),
        (&c.tempbelowfreezing, ""),
        (&c.chanceofsultryday, ""),
        (&c.chanceofhumidday, ""),
        (&c.chanceofwindyday, ""),
        (&c.chanceofsunnycloudyday, " day"),
        (&c.chanceofcloudyday, " day"),
        (&c.chanceofpartlycloudyday, " day"),
        (&c.chanceofprecip, ""),
        (&c.chanceoffogday, ""),
        (&c.chanceofrainday, ""),
        (&c.chanceofthunderday, ""),
        (&c.chanceoftornadoday, ""),
        (&c.chanceofhailday, ""),
        (&c.chanceofsnowday, ""),
        (&c.chanceofsnowonground, ""),
    ]
}
