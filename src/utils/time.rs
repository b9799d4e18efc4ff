//! Time utilities: duration formatting and deltas in minutes.

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Signed delta as decimal hours, e.g. "+1.50" / "-0.25".
pub fn format_delta_hours(mins: i64) -> String {
    format!("{:+.2}", mins as f64 / 60.0)
}
