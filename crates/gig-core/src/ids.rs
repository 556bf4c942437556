//! ID prefix constants for generated record identifiers.
//!
//! Generated IDs look like `job-a3f8b2c1`: a three-letter prefix, a dash, and
//! eight lowercase hex characters.

pub const PREFIX_JOB: &str = "job";
pub const PREFIX_FEEDBACK: &str = "fbk";

pub const ALL_PREFIXES: &[&str] = &[PREFIX_JOB, PREFIX_FEEDBACK];

/// Whether `id` has the shape of a generated ID with the given prefix.
#[must_use]
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|hex| hex.len() == 8 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_generated_shape() {
        assert!(has_prefix("job-0a1b2c3d", PREFIX_JOB));
        assert!(!has_prefix("job-0a1b2c3", PREFIX_JOB));
        assert!(!has_prefix("fbk-0a1b2c3d", PREFIX_JOB));
        assert!(!has_prefix("job0a1b2c3d", PREFIX_JOB));
    }
}
