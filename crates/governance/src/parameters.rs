use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Governance parameter structure
pub struct GovernanceParameters {
    /// Maximum number of characters allowed in a proposal title
    pub max_title_chars: u64,
    /// Maximum number of characters allowed in a proposal description
    pub max_description_chars: u64,
}

impl Default for GovernanceParameters {
    fn default() -> Self {
        Self {
            max_title_chars: 100,
            max_description_chars: 500,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = GovernanceParameters::default();
        assert_eq!(params.max_title_chars, 100);
        assert_eq!(params.max_description_chars, 500);
    }

    #[test]
    fn test_parameters_deserialize_partial_override() {
        let params: GovernanceParameters =
            serde_json::from_value(serde_json::json!({
                "max_title_chars": 80
            }))
            .unwrap();
        assert_eq!(params.max_title_chars, 80);
        assert_eq!(params.max_description_chars, 500);
    }
}
