//! Short human labels for occurrence dates.

use chrono::NaiveDate;

/// Render `date` relative to `today`: "Today", "Tomorrow", a weekday name
/// for dates within the coming week, or a `"Mar 5, 2024"` style date.
pub fn label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        2..=7 => date.format("%A").to_string(),
        _ => date.format("%b %-d, %Y").to_string(),
    }
}
