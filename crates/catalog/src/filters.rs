//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Renders an em-style dash for empty free-text fields.
///
/// Plant and harvest fields are unvalidated free text and may be empty;
/// this keeps the tables readable without per-field conditionals.
///
/// Usage in templates: `{{ plant.variety|or_dash }}`
#[askama::filter_fn]
pub fn or_dash(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(dash_if_empty(&value.to_string()))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

fn dash_if_empty(s: &str) -> String {
    if s.trim().is_empty() {
        "\u{2014}".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_if_empty_passes_text_through() {
        assert_eq!(dash_if_empty("Roma"), "Roma");
    }

    #[test]
    fn test_dash_if_empty_replaces_empty() {
        assert_eq!(dash_if_empty(""), "\u{2014}");
        assert_eq!(dash_if_empty("   "), "\u{2014}");
    }
}
