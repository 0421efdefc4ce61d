//! Vote structures.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The choice a voter may cast on an active proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteChoice {
    /// In favour
    For,
    /// Against
    Against,
    /// Abstain
    Abstain,
}

impl VoteChoice {
    /// Check if a vote is in favour
    pub fn is_for(&self) -> bool {
        matches!(self, VoteChoice::For)
    }

    /// Check if a vote is against
    pub fn is_against(&self) -> bool {
        matches!(self, VoteChoice::Against)
    }

    /// Check if a vote is abstain
    pub fn is_abstain(&self) -> bool {
        matches!(self, VoteChoice::Abstain)
    }
}

impl Display for VoteChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoteChoice::For => write!(f, "for"),
            VoteChoice::Against => write!(f, "against"),
            VoteChoice::Abstain => write!(f, "abstain"),
        }
    }
}

impl TryFrom<String> for VoteChoice {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "for" => Ok(VoteChoice::For),
            "against" => Ok(VoteChoice::Against),
            "abstain" => Ok(VoteChoice::Abstain),
            _ => Err("invalid vote".to_string()),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
/// Testing helpers and strategies for governance votes
pub mod testing {
    use proptest::prelude::*;

    use super::*;

    /// Generate an arbitrary vote choice
    pub fn arb_vote_choice() -> impl Strategy<Value = VoteChoice> {
        prop_oneof![
            Just(VoteChoice::For),
            Just(VoteChoice::Against),
            Just(VoteChoice::Abstain),
        ]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_vote_choice_sides() {
        assert!(VoteChoice::For.is_for());
        assert!(!VoteChoice::For.is_against());
        assert!(VoteChoice::Against.is_against());
        assert!(VoteChoice::Abstain.is_abstain());
    }

    #[test]
    fn test_vote_choice_from_string() {
        assert_eq!(
            VoteChoice::try_from(" For ".to_string()),
            Ok(VoteChoice::For)
        );
        assert_eq!(
            VoteChoice::try_from("AGAINST".to_string()),
            Ok(VoteChoice::Against)
        );
        assert_eq!(
            VoteChoice::try_from("abstain".to_string()),
            Ok(VoteChoice::Abstain)
        );
        assert_eq!(
            VoteChoice::try_from("yay".to_string()),
            Err("invalid vote".to_string())
        );
    }

    #[test]
    fn test_vote_choice_display() {
        assert_eq!(VoteChoice::For.to_string(), "for");
        assert_eq!(VoteChoice::Against.to_string(), "against");
        assert_eq!(VoteChoice::Abstain.to_string(), "abstain");
    }
}
