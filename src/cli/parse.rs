//! Value parsers for CLI arguments

use markbook_core::format::OutputFormat;

/// Parse an output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// A parsed SUBJECT=VALUE mark argument
#[derive(Debug, Clone, PartialEq)]
pub struct MarkSpec {
    pub subject: String,
    pub value: f64,
}

/// Parse a `SUBJECT=VALUE` pair, e.g. `Mathematics=87.5`
pub fn parse_mark_spec(s: &str) -> std::result::Result<MarkSpec, String> {
    let Some((subject, value)) = s.split_once('=') else {
        return Err(format!("expected SUBJECT=VALUE, got '{}'", s));
    };
    let subject = subject.trim();
    if subject.is_empty() {
        return Err("subject must not be empty".to_string());
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid mark '{}' (expected a number)", value.trim()))?;
    Ok(MarkSpec {
        subject: subject.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mark_spec() {
        let spec = parse_mark_spec("Mathematics=87.5").unwrap();
        assert_eq!(spec.subject, "Mathematics");
        assert_eq!(spec.value, 87.5);
    }

    #[test]
    fn test_parse_mark_spec_trims_whitespace() {
        let spec = parse_mark_spec(" Physics = 70 ").unwrap();
        assert_eq!(spec.subject, "Physics");
        assert_eq!(spec.value, 70.0);
    }

    #[test]
    fn test_parse_mark_spec_rejects_bad_input() {
        assert!(parse_mark_spec("Mathematics").is_err());
        assert!(parse_mark_spec("=50").is_err());
        assert!(parse_mark_spec("Mathematics=high").is_err());
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("json").unwrap(), OutputFormat::Json);
        assert!(parse_format("xml").is_err());
    }
}
