//! Human-readable display labels used in admin summaries and log lines.

use crate::types::Date;

/// `"{title} in {city}"`.
pub fn location_label(title: &str, city: &str) -> String {
    format!("{title} in {city}")
}

/// `"{link_type}:{title}"`.
pub fn resource_label(link_type: &str, title: &str) -> String {
    format!("{link_type}:{title}")
}

/// `"{style}: {series}"`.
pub fn series_label(style_title: &str, series_title: &str) -> String {
    format!("{style_title}: {series_title}")
}

/// `"{series} on MM/DD/YYYY leader:{name}"`. The leader suffix is omitted
/// when the meeting has no designated leader.
pub fn meeting_label(series_title: &str, day: Date, leader_name: Option<&str>) -> String {
    let day = day.format("%m/%d/%Y");
    match leader_name {
        Some(name) => format!("{series_title} on {day} leader:{name}"),
        None => format!("{series_title} on {day}"),
    }
}
