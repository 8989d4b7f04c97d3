//! Wire types for the two observed aggregate schemas.

use serde::{Deserialize, Serialize};

/// Older backend revision: nominal totals in e8s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WirePlainAggregate {
    pub total_yes: u64,
    pub total_no: u64,
}

/// A decay-weighted magnitude, tagged the way the backend tags it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireDecayedValue {
    #[serde(rename = "DECAYED")]
    pub decayed: f64,
}

/// Newer backend revision: decay-weighted totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireDecayedAggregate {
    pub current_yes: WireDecayedValue,
    pub current_no: WireDecayedValue,
}

/// Either aggregate schema; the variants have disjoint field sets, so the
/// untagged deserialization is unambiguous.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireAggregate {
    Decayed(WireDecayedAggregate),
    Plain(WirePlainAggregate),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_schema_deserializes() {
        let json = r#"{ "total_yes": 70, "total_no": 30 }"#;
        let wire: WireAggregate = serde_json::from_str(json).unwrap();
        assert!(matches!(wire, WireAggregate::Plain(_)));
    }

    #[test]
    fn test_decayed_schema_deserializes() {
        let json = r#"{
            "current_yes": { "DECAYED": 35.5 },
            "current_no": { "DECAYED": 14.5 }
        }"#;
        let wire: WireAggregate = serde_json::from_str(json).unwrap();
        match wire {
            WireAggregate::Decayed(decayed) => {
                assert_eq!(decayed.current_yes.decayed, 35.5);
                assert_eq!(decayed.current_no.decayed, 14.5);
            }
            WireAggregate::Plain(_) => panic!("resolved to the wrong schema"),
        }
    }
}
