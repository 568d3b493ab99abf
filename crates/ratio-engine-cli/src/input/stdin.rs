use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Read piped statements from stdin. JSON is tried first, then YAML.
///
/// Returns `None` when stdin is a terminal or the pipe is empty.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_piped(&buffer)
}

fn parse_piped<T: DeserializeOwned>(raw: &str) -> Result<Option<T>, Box<dyn std::error::Error>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match serde_json::from_str(trimmed) {
        Ok(value) => Ok(Some(value)),
        Err(json_err) => serde_yaml::from_str(trimmed)
            .map(Some)
            .map_err(|_| format!("stdin is neither valid JSON nor YAML: {json_err}").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratio_engine_core::FinancialPeriodInput;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_piped_json_and_yaml() {
        let json: FinancialPeriodInput =
            parse_piped(r#"{"current": {"cash": 1100}}"#).unwrap().unwrap();
        assert_eq!(json.current.cash, dec!(1100));

        let yaml: FinancialPeriodInput = parse_piped("current:\n  cash: 900\n").unwrap().unwrap();
        assert_eq!(yaml.current.cash, dec!(900));
    }

    #[test]
    fn test_parse_piped_empty_and_garbage() {
        assert!(parse_piped::<FinancialPeriodInput>("  \n").unwrap().is_none());
        assert!(parse_piped::<FinancialPeriodInput>("[unclosed").is_err());
    }
}
