//! Environment lookups shared by the binaries.

use std::fmt::Display;
use std::str::FromStr;

/// Parse an environment variable, falling back to `default`.
///
/// An unset variable is the expected case and falls back silently. A set but
/// unparseable value logs a warning before falling back, so typos in
/// deployment config are visible.
pub fn env_parse_with_default<T: FromStr + Display>(var: &str, default: T) -> T {
    parse_or_default(var, std::env::var(var).ok(), default)
}

/// Read an environment variable, treating blank values as unset.
#[must_use]
pub fn env_non_empty(var: &str) -> Option<String> {
    non_empty(std::env::var(var).ok())
}

fn parse_or_default<T: FromStr + Display>(var: &str, raw: Option<String>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(
                var,
                value = %raw,
                default = %default,
                "invalid env var value, using default"
            );
            default
        },
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_value() {
        let value: u64 = parse_or_default("TIMEOUT", Some("42".to_owned()), 10);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let value: u64 = parse_or_default("TIMEOUT", Some(" 7 \n".to_owned()), 10);
        assert_eq!(value, 7);
    }

    #[test]
    fn test_parse_invalid_value_falls_back() {
        let value: u64 = parse_or_default("TIMEOUT", Some("banana".to_owned()), 10);
        assert_eq!(value, 10);
    }

    #[test]
    fn test_parse_missing_value_falls_back() {
        let value: u64 = parse_or_default("TIMEOUT", None, 10);
        assert_eq!(value, 10);
    }

    #[test]
    fn test_non_empty_filters_blank() {
        assert_eq!(non_empty(Some("   ".to_owned())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(" key ".to_owned())), Some("key".to_owned()));
    }
}
