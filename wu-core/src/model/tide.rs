use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TideResponse {
    pub tide: TideRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TideRecord {
    pub tide_info: Vec<TideInfo>,
    pub tide_summary: Vec<TideEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TideInfo {
    pub tide_site: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TideEvent {
    pub date: EventDate,
    pub data: TideData,
}

/// Calendar fields as the feed sends them: every part is a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDate {
    pub pretty: String,
    pub hour: String,
    pub min: String,
    pub mon: String,
    pub mday: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TideData {
    pub height: String,
    #[serde(rename = "type")]
    pub kind: String,
}
