use crate::model::AlertSet;

use super::Report;

/// Active alerts in the order the feed lists them.
pub fn format_alerts(rec: &AlertSet, station: &str) -> Report {
    if rec.alerts.is_empty() {
        return Report::Lines(vec!["No active alerts".to_string()]);
    }

    let mut lines = vec![format!("Station: {station}")];
    for alert in &rec.alerts {
        lines.push(format!("### {} ###", alert.description));
        lines.push(String::new());
        lines.push(format!("Issued at {}", alert.date));
        lines.push(format!("Expires at {}", alert.expires));
        lines.push(alert.message.clone());
    }

    Report::Lines(lines)
}
