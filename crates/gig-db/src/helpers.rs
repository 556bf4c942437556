//! Validation and timestamp helpers shared by every repository.

use chrono::{DateTime, Utc};
use gig_core::errors::{MarketError, MarketResult};

/// Current logical time for new records.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Timestamp for an update to a record created at `created_at`.
///
/// Never earlier than `created_at`, so `created_at <= updated_at` holds even
/// if the wall clock steps backwards.
#[must_use]
pub fn touched(created_at: DateTime<Utc>) -> DateTime<Utc> {
    now().max(created_at)
}

/// Trim `value` and reject it if nothing is left.
///
/// # Errors
///
/// Returns `MarketError::BadRequest` naming `field` when the value is blank.
pub fn require_text(field: &str, value: &str) -> MarketResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MarketError::bad_request(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Trim, drop blanks, and de-duplicate skill tags, keeping first occurrence.
#[must_use]
pub fn normalize_skills(skills: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        let skill = skill.trim();
        if !skill.is_empty() && !normalized.iter().any(|s| s == skill) {
            normalized.push(skill.to_string());
        }
    }
    normalized
}

/// Add `amount` to an optional running total.
///
/// # Errors
///
/// Returns `MarketError::BadRequest` if the total would overflow.
pub fn add_to_total(total: Option<u64>, amount: u64, field: &str) -> MarketResult<u64> {
    total
        .unwrap_or(0)
        .checked_add(amount)
        .ok_or_else(|| MarketError::bad_request(format!("{field} would overflow")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn touched_never_precedes_creation() {
        let future = Utc::now() + Duration::hours(1);
        assert_eq!(touched(future), future);
        let past = Utc::now() - Duration::hours(1);
        assert!(touched(past) > past);
    }

    #[test]
    fn require_text_trims() {
        assert_eq!(require_text("name", "  Ada ").unwrap(), "Ada");
        assert!(matches!(
            require_text("name", " \t"),
            Err(MarketError::BadRequest(m)) if m == "name must not be empty"
        ));
    }

    #[test]
    fn skills_are_normalized() {
        let raw = vec![
            " rust".to_string(),
            String::new(),
            "wasm".to_string(),
            "rust ".to_string(),
        ];
        assert_eq!(normalize_skills(&raw), vec!["rust", "wasm"]);
    }

    #[test]
    fn totals_start_from_zero_and_check_overflow() {
        assert_eq!(add_to_total(None, 5, "total").unwrap(), 5);
        assert_eq!(add_to_total(Some(5), 5, "total").unwrap(), 10);
        assert!(add_to_total(Some(u64::MAX), 1, "total").is_err());
    }
}
