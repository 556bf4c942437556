use gig_core::identity::Principal;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a principal given on the command line.
pub fn parse_principal(raw: &str, field: &str) -> anyhow::Result<Principal> {
    Principal::new(raw).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use gig_core::enums::JobStatus;

    use super::{parse_enum, parse_principal};

    #[test]
    fn parses_snake_case_enum() {
        let status: JobStatus = parse_enum("completed", "status").expect("status should parse");
        assert_eq!(status, JobStatus::Completed);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let status: JobStatus = parse_enum("in-progress", "status").expect("status should parse");
        assert_eq!(status, JobStatus::InProgress);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<JobStatus>("done", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'done'"));
    }

    #[test]
    fn errors_on_blank_principal() {
        let err = parse_principal("  ", "--talent").expect_err("should fail");
        assert!(err.to_string().contains("invalid --talent"));
    }
}
