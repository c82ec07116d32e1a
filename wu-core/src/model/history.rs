use serde::{Deserialize, Serialize};

/// Body of a `history_YYYYMMDD` or `yesterday` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryResponse {
    pub history: HistoryRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryRecord {
    pub date: PrettyDate,
    pub dailysummary: Vec<DailySummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrettyDate {
    pub pretty: String,
}

/// One day of observations. Suffix `m` is metric, suffix `i` imperial.
///
/// Flags (`fog`, `rain`, ...) are "1" when set. Degree-day normals are
/// empty when the station does not publish them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailySummary {
    pub fog: String,
    pub rain: String,
    pub snow: String,
    pub hail: String,
    pub thunder: String,
    pub tornado: String,

    pub snowfallm: String,
    pub snowfalli: String,
    pub monthtodatesnowfallm: String,
    pub monthtodatesnowfalli: String,
    pub since1julsnowfallm: String,
    pub since1julsnowfalli: String,
    pub snowdepthm: String,
    pub snowdepthi: String,

    pub meantempm: String,
    pub meantempi: String,
    pub maxtempm: String,
    pub maxtempi: String,
    pub mintempm: String,
    pub mintempi: String,

    pub meandewptm: String,
    pub meandewpti: String,
    pub maxdewptm: String,
    pub maxdewpti: String,
    pub mindewptm: String,
    pub mindewpti: String,
    pub humidity: String,
    pub maxhumidity: String,
    pub minhumidity: String,

    pub meanpressurem: String,
    pub meanpressurei: String,
    pub maxpressurem: String,
    pub maxpressurei: String,
    pub minpressurem: String,
    pub minpressurei: String,

    pub meanwindspdm: String,
    pub meanwindspdi: String,
    pub meanwdire: String,
    pub meanwdird: String,
    pub maxwspdm: String,
    pub maxwspdi: String,
    pub minwspdm: String,
    pub minwspdi: String,

    pub meanvism: String,
    pub meanvisi: String,
    pub maxvism: String,
    pub maxvisi: String,
    pub minvism: String,
    pub minvisi: String,

    pub precipm: String,
    pub precipi: String,

    pub gdegreedays: String,
    pub heatingdegreedays: String,
    pub heatingdegreedaysnormal: String,
    pub monthtodateheatingdegreedays: String,
    pub monthtodateheatingdegreedaysnormal: String,
    pub since1sepheatingdegreedays: String,
    pub since1sepheatingdegreedaysnormal: String,
    pub since1julheatingdegreedays: String,
    pub since1julheatingdegreedaysnormal: String,
    pub coolingdegreedays: String,
    pub coolingdegreedaysnormal: String,
    pub monthtodatecoolingdegreedays: String,
    pub monthtodatecoolingdegreedaysnormal: String,
    pub since1sepcoolingdegreedays: String,
    pub since1sepcoolingdegreedaysnormal: String,
    pub since1jancoolingdegreedays: String,
    pub since1jancoolingdegreedaysnormal: String,
}
