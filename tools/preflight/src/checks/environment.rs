use std::io::{self, Write};

use serde::Deserialize;
use serde_json::Value;

use crate::checks::CheckFindings;
use crate::reporter;

/// Default API the project template ships pointed at.
pub const DEFAULT_PLACEHOLDER_API: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Deserialize)]
struct EnvVariable {
    key: String,
    #[serde(default)]
    value: String,
}

pub fn check(writer: &mut dyn Write, environment: &Value) -> io::Result<CheckFindings> {
    let mut findings = CheckFindings::default();

    let values = match environment.get("values").and_then(Value::as_array) {
        Some(values) => values,
        None => {
            findings.error(r#"Environment file missing "values" array"#);
            return Ok(findings);
        }
    };

    // Entries that don't deserialize are skipped, not reported.
    let base_url = values
        .iter()
        .filter_map(|entry| serde_json::from_value::<EnvVariable>(entry.clone()).ok())
        .find(|variable| variable.key == "base_url");

    match base_url {
        Some(variable) => {
            reporter::print_note(writer, &format!("Base URL configured: {}", variable.value))?;
            if variable.value == DEFAULT_PLACEHOLDER_API {
                findings.warn(
                    "Using default test API. Some endpoints may not match (e.g., /health, /api/products). Update base_url for your actual API.",
                );
            }
        }
        None => findings.error(r#"Environment file missing "base_url" variable"#),
    }

    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run_check(environment: &Value) -> (CheckFindings, String) {
        let mut out = Vec::new();
        let findings = check(&mut out, environment).unwrap();
        (findings, String::from_utf8(out).unwrap())
    }

    #[test]
    fn missing_values_array_is_an_error() {
        let (findings, _) = run_check(&json!({ "name": "staging" }));
        assert_eq!(
            findings.errors,
            vec![r#"Environment file missing "values" array"#]
        );
    }

    #[test]
    fn values_must_be_an_array() {
        let (findings, _) = run_check(&json!({ "values": { "key": "base_url" } }));
        assert_eq!(
            findings.errors,
            vec![r#"Environment file missing "values" array"#]
        );
    }

    #[test]
    fn missing_base_url_is_an_error() {
        let (findings, _) = run_check(&json!({
            "values": [ { "key": "api_key", "value": "secret" } ]
        }));
        assert_eq!(
            findings.errors,
            vec![r#"Environment file missing "base_url" variable"#]
        );
    }

    #[test]
    fn placeholder_base_url_warns_but_does_not_fail() {
        let (findings, text) = run_check(&json!({
            "values": [ { "key": "base_url", "value": DEFAULT_PLACEHOLDER_API } ]
        }));
        assert!(findings.errors.is_empty());
        assert_eq!(findings.warnings.len(), 1);
        assert!(findings.warnings[0].starts_with("Using default test API."));
        assert!(text.contains("Base URL configured: https://jsonplaceholder.typicode.com"));
    }

    #[test]
    fn custom_base_url_is_clean() {
        let (findings, text) = run_check(&json!({
            "values": [
                { "key": "api_key", "value": "secret" },
                { "key": "base_url", "value": "https://staging.example.com" }
            ]
        }));
        assert!(findings.is_clean());
        assert!(text.contains("Base URL configured: https://staging.example.com"));
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let (findings, _) = run_check(&json!({
            "values": [
                { "value": "no key here" },
                { "key": 42 },
                { "key": "base_url", "value": "https://staging.example.com" }
            ]
        }));
        assert!(findings.is_clean());
    }
}
