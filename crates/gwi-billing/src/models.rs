//! Data models for the billing API

use serde::Deserialize;

/// Customer balance record as returned by the billing API.
///
/// Field names (including the `BALLANCE` spelling) are the backend's wire
/// contract. Absent fields default to empty names and a zero balance.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct BalanceRecord {
    #[serde(rename = "FIRST_NAME", default)]
    pub first_name: String,

    #[serde(rename = "LAST_NAME", default)]
    pub last_name: String,

    #[serde(rename = "BALLANCE", default)]
    pub balance: BalanceAmount,
}

/// Balance amount, which the backend returns as either a JSON string or a
/// bare number depending on the record.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BalanceAmount {
    Text(String),
    Number(f64),
}

impl Default for BalanceAmount {
    fn default() -> Self {
        BalanceAmount::Text("0".to_string())
    }
}

impl std::fmt::Display for BalanceAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BalanceAmount::Text(s) => write!(f, "{}", s),
            BalanceAmount::Number(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_with_string_balance() {
        let record: BalanceRecord =
            serde_json::from_str(r#"{"FIRST_NAME":"A","LAST_NAME":"B","BALLANCE":"100"}"#)
                .unwrap();
        assert_eq!(record.first_name, "A");
        assert_eq!(record.last_name, "B");
        assert_eq!(record.balance.to_string(), "100");
    }

    #[test]
    fn test_record_with_numeric_balance() {
        let record: BalanceRecord =
            serde_json::from_str(r#"{"FIRST_NAME":"A","LAST_NAME":"B","BALLANCE":2500}"#).unwrap();
        assert_eq!(record.balance.to_string(), "2500");
    }

    #[test]
    fn test_record_missing_fields_defaults() {
        let record: BalanceRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.first_name, "");
        assert_eq!(record.last_name, "");
        assert_eq!(record.balance.to_string(), "0");
    }
}
