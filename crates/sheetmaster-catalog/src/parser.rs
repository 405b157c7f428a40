//! Parse parameter files (JSON and TOML) into a [`Params`] map.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::types::{CatalogError, Params, Result};

/// A scalar parameter value as it may appear in a file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ParamValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl ParamValue {
    fn into_string(self) -> String {
        match self {
            ParamValue::Text(s) => s,
            ParamValue::Integer(n) => n.to_string(),
            ParamValue::Float(x) => x.to_string(),
            // Spreadsheet booleans are upper case.
            ParamValue::Bool(true) => "TRUE".to_string(),
            ParamValue::Bool(false) => "FALSE".to_string(),
        }
    }
}

fn into_params(raw: BTreeMap<String, ParamValue>) -> Params {
    raw.into_iter().map(|(k, v)| (k, v.into_string())).collect()
}

/// Parse a parameter map from a JSON object.
pub fn parse_json(content: &str) -> Result<Params> {
    serde_json::from_str(content)
        .map(into_params)
        .map_err(|e| CatalogError::Parse(e.to_string()))
}

/// Parse a parameter map from a TOML table.
pub fn parse_toml(content: &str) -> Result<Params> {
    toml::from_str(content)
        .map(into_params)
        .map_err(|e| CatalogError::Parse(e.to_string()))
}

/// Load a parameter file (auto-detect TOML vs JSON by extension).
pub fn load_params(path: &Path) -> Result<Params> {
    let content = std::fs::read_to_string(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => parse_toml(&content),
        Some("json") => parse_json(&content),
        _ => {
            // Try JSON first, then TOML
            parse_json(&content).or_else(|_| parse_toml(&content))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn json_strings() {
        let p = parse_json(r#"{"lookup_value": "A2", "range_lookup": "TRUE"}"#).unwrap();
        assert_eq!(p["lookup_value"], "A2");
        assert_eq!(p["range_lookup"], "TRUE");
    }

    #[test]
    fn json_scalars_are_stringified() {
        let p = parse_json(r#"{"col_index": 3, "annual_rate": 6.875, "exact": false}"#).unwrap();
        assert_eq!(p["col_index"], "3");
        assert_eq!(p["annual_rate"], "6.875");
        assert_eq!(p["exact"], "FALSE");
    }

    #[test]
    fn json_rejects_nested_values() {
        assert!(parse_json(r#"{"a": {"b": 1}}"#).is_err());
        assert!(parse_json(r#"["A2"]"#).is_err());
    }

    #[test]
    fn toml_table() {
        let p = parse_toml("range = \"A1:A10\"\ncriteria = '\">100\"'\nyears = 30\n").unwrap();
        assert_eq!(p["range"], "A1:A10");
        assert_eq!(p["criteria"], "\">100\"");
        assert_eq!(p["years"], "30");
    }

    #[test]
    fn load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.toml");
        std::fs::write(&path, "text = \"B2\"\n").unwrap();
        assert_eq!(load_params(&path).unwrap()["text"], "B2");
    }

    #[test]
    fn load_without_extension_falls_back_to_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "text = \"C3\"").unwrap();
        assert_eq!(load_params(file.path()).unwrap()["text"], "C3");
    }

    #[test]
    fn load_missing_file() {
        let err = load_params(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
