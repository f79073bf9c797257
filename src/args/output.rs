//! Structured output helpers shared by the subcommands.

use std::error::Error;

use folio::settings::OutputFormat;
use serde::Serialize;

/// What: Serialize a value for `--output json` / `--output yaml`.
///
/// Inputs:
/// - `value`: Anything serializable
/// - `format`: Requested output format
///
/// Output:
/// - Pretty JSON or YAML text; `Text` callers get JSON
///
/// # Errors
/// - Returns the serializer error if the value cannot be encoded
pub fn structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    let mut text = match format {
        OutputFormat::Yaml => serde_norway::to_string(value)?,
        OutputFormat::Json | OutputFormat::Text => serde_json::to_string_pretty(value)?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        code: &'static str,
        base: bool,
    }

    #[test]
    fn test_structured_json_and_yaml() {
        let sample = Sample {
            code: "en",
            base: true,
        };
        let json = structured(&sample, OutputFormat::Json).expect("json");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(parsed["code"], "en");
        assert!(json.ends_with('\n'));

        let yaml = structured(&sample, OutputFormat::Yaml).expect("yaml");
        assert!(yaml.contains("code: en"));
        assert!(yaml.contains("base: true"));
    }
}
