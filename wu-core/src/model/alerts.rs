use serde::{Deserialize, Serialize};

/// Body of an `alerts` response. An empty list is a normal answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertSet {
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    pub date: String,
    pub expires: String,
    pub description: String,
    pub message: String,
}
