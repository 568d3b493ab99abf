/// Split repeated `--field key=value` arguments into pairs.
///
/// The value is kept as raw text; numeric coercion happens in the engine so
/// that bad figures become warnings rather than hard errors.
pub fn parse_pairs(raw: &[String]) -> Result<Vec<(String, String)>, Box<dyn std::error::Error>> {
    raw.iter()
        .map(|item| {
            item.split_once('=')
                .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
                .filter(|(k, _)| !k.is_empty())
                .ok_or_else(|| -> Box<dyn std::error::Error> {
                    format!("Expected key=value, got '{item}'").into()
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let raw = vec!["current.cash = 1100".to_string(), "prior.revenue=85000".to_string()];
        let pairs = parse_pairs(&raw).unwrap();
        assert_eq!(pairs[0], ("current.cash".to_string(), "1100".to_string()));
        assert_eq!(pairs[1].1, "85000");
    }

    #[test]
    fn test_value_may_be_empty_but_key_may_not() {
        assert_eq!(parse_pairs(&["current.cash=".to_string()]).unwrap()[0].1, "");
        assert!(parse_pairs(&["=5".to_string()]).is_err());
        assert!(parse_pairs(&["current.cash".to_string()]).is_err());
    }
}
