use chrono::{DateTime, Utc};

/// RFC 3339 timestamp captured by the build script.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn build_time() -> Option<DateTime<Utc>> {
    parse(BUILD_TIME)
}

fn parse(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Footer stamp, e.g. `Updated Mar 2025`.
pub fn updated_label() -> String {
    match build_time() {
        Some(t) => format!("Updated {}", t.format("%b %Y")),
        None => "Updated recently".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_time_is_valid() {
        assert!(build_time().is_some());
        assert!(updated_label().starts_with("Updated "));
    }

    #[test]
    fn test_parse() {
        let t = parse("2025-03-04T05:06:07+00:00").unwrap();
        assert_eq!(t.format("%b %Y").to_string(), "Mar 2025");
        assert!(parse("yesterday").is_none());
    }
}
