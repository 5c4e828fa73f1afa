/// Percentages are always shown with one fractional digit.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

pub fn format_score(value: f64) -> String {
    format!("{value:.2}")
}
