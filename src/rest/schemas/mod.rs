//! JSON request payloads for the REST resources.
//!
//! Every payload field is optional so the same struct serves create and
//! update: create validation demands the required fields, update validation
//! only checks the fields that are present (absent fields keep their stored
//! values). `validate_*` returns human-readable messages that become the
//! response `errors` array.

pub mod catalog;
pub mod location;
pub mod pet;
pub mod schedule;

use chrono::NaiveDate;

fn is_blank(value: &str) -> bool {
    value.split_whitespace().collect::<String>().is_empty()
}

/// Create-side presence check for a text field.
fn require_text(value: &Option<String>, field: &str, errors: &mut Vec<String>) {
    if value.is_none() {
        errors.push(format!("{field} is required"));
    }
}

fn require_value<T>(value: &Option<T>, field: &str, errors: &mut Vec<String>) {
    if value.is_none() {
        errors.push(format!("{field} is required"));
    }
}

/// Present-but-blank is an error on create and update alike.
fn reject_blank(value: &Option<String>, field: &str, errors: &mut Vec<String>) {
    if let Some(value) = value {
        if is_blank(value) {
            errors.push(format!("{field} cannot be blank"));
        }
    }
}

fn reject_future_date(value: &Option<NaiveDate>, field: &str, errors: &mut Vec<String>) {
    if let Some(date) = value {
        if *date > chrono::Utc::now().date_naive() {
            errors.push(format!("{field} must not be in the future"));
        }
    }
}

/// Free text goes through the same sanitizer the rest of the app uses.
fn clean(value: String) -> String {
    ammonia::clean(&value)
}

fn clean_opt(value: Option<String>) -> Option<String> {
    value.map(|v| ammonia::clean(&v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   \t"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_reject_future_date() {
        let mut errors = vec![];
        let tomorrow = chrono::Utc::now().date_naive() + chrono::Duration::days(1);

        reject_future_date(&Some(tomorrow), "date_given", &mut errors);
        assert_eq!(errors, vec!["date_given must not be in the future"]);

        errors.clear();
        reject_future_date(
            &Some(chrono::Utc::now().date_naive()),
            "date_given",
            &mut errors,
        );
        assert!(errors.is_empty());
    }
}
