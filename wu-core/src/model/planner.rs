use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerResponse {
    pub trip: PlannerRecord,
}

/// Travel planner summary for a date range of up to 30 days.
///
/// When the feed cannot produce a plan it fills `error` and leaves the rest
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerRecord {
    pub title: String,
    pub airport_code: String,
    pub error: String,
    pub chance_of: ChanceOf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChanceOf {
    pub tempoversixty: Likelihood,
    pub chanceofwindyday: Likelihood,
    pub chanceofsunnycloudyday: Likelihood,
    pub chanceofprecip: Likelihood,
    pub chanceofrainday: Likelihood,
    pub chanceofpartlycloudyday: Likelihood,
    pub chanceofthunderday: Likelihood,
    pub chanceofhumidday: Likelihood,
    pub chanceofcloudyday: Likelihood,
    pub tempoverfreezing: Likelihood,
    pub tempoverninety: Likelihood,
    pub chanceoffogday: Likelihood,
    pub chanceofsnowonground: Likelihood,
    pub chanceoftornadoday: Likelihood,
    pub chanceofsultryday: Likelihood,
    pub tempbelowfreezing: Likelihood,
    pub chanceofhailday: Likelihood,
    pub chanceofsnowday: Likelihood,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Likelihood {
    pub name: String,
    pub description: String,
    pub percentage: String,
}
