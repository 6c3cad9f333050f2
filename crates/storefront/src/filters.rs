//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Title-cases a label: the first letter of each whitespace-separated word
/// is uppercased, the rest is left alone.
///
/// Used for category labels, which the API serves lowercase
/// (`"men's clothing"` renders as `"Men's Clothing"`).
///
/// Usage in templates: `{{ category|title_case }}`
#[askama::filter_fn]
pub fn title_case(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(title_case_str(&value.to_string()))
}

fn title_case_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;

    for c in value.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Returns the content hash for main.css.
///
/// The hash is computed at build time from the CSS file content.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_categories() {
        assert_eq!(title_case_str("men's clothing"), "Men's Clothing");
        assert_eq!(title_case_str("electronics"), "Electronics");
        assert_eq!(title_case_str("jewelery"), "Jewelery");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case_str(""), "");
    }

    #[test]
    fn test_title_case_preserves_inner_case() {
        assert_eq!(title_case_str("SSD drives"), "SSD Drives");
    }
}
