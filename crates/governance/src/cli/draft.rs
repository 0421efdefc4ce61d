use nebulith_core::address::Address;
use nebulith_core::token;
use serde::{Deserialize, Serialize};

use super::validation::{
    is_valid_delegation_amount, is_valid_description, is_valid_proposal_kind,
    is_valid_proposal_queue, is_valid_title, ProposalValidation,
};
use crate::parameters::GovernanceParameters;
use crate::proposal::{ProposalKind, ViewerStats};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A proposal draft prior to submission
pub struct ProposalDraft {
    /// The proposal title
    pub title: String,
    /// The proposal description
    pub description: String,
    /// The proposal kind
    pub kind: ProposalKind,
}

impl ProposalDraft {
    /// Validate a proposal draft
    pub fn validate(
        self,
        governance_parameters: &GovernanceParameters,
        viewer: &ViewerStats,
        force: bool,
    ) -> Result<Self, ProposalValidation> {
        if force {
            return Ok(self);
        }
        is_valid_title(&self.title, governance_parameters.max_title_chars)?;
        is_valid_description(
            &self.description,
            governance_parameters.max_description_chars,
        )?;
        is_valid_proposal_kind(&self.kind)?;
        is_valid_proposal_queue(
            viewer.active_proposals,
            viewer.max_queue_size,
        )?;

        Ok(self)
    }
}

impl TryFrom<&[u8]> for ProposalDraft {
    type Error = serde_json::Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        serde_json::from_slice(value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A voting power delegation draft prior to submission
pub struct DelegationDraft {
    /// The address receiving the delegated voting power
    pub delegate: Address,
    /// The amount of voting power to delegate
    pub amount: token::Amount,
}

impl DelegationDraft {
    /// Validate a delegation draft
    pub fn validate(
        self,
        viewer: &ViewerStats,
        force: bool,
    ) -> Result<Self, ProposalValidation> {
        if force {
            return Ok(self);
        }
        is_valid_delegation_amount(self.amount, viewer.voting_power)?;

        Ok(self)
    }
}

impl TryFrom<&[u8]> for DelegationDraft {
    type Error = serde_json::Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        serde_json::from_slice(value)
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;

    fn viewer() -> ViewerStats {
        ViewerStats {
            voting_power: token::Amount::from_u64(150_000),
            delegated_power: token::Amount::from_u64(50_000),
            active_proposals: 2,
            max_queue_size: 10,
            address: Address::decode("SP1ABC...XYZ789").unwrap(),
        }
    }

    #[test]
    fn test_valid_proposal_draft() {
        let draft = ProposalDraft {
            title: "Increase Marketing Budget".to_string(),
            description: "Allocate 500K tokens for Q1 marketing".to_string(),
            kind: ProposalKind::Treasury {
                amount: token::Amount::from_u64(500_000),
                recipient: Address::decode("SP1ABC...XYZ789").unwrap(),
            },
        };
        assert_matches!(
            draft.validate(&GovernanceParameters::default(), &viewer(), false),
            Ok(_)
        );
    }

    #[test]
    fn test_proposal_draft_title_at_limit_is_accepted() {
        let draft = ProposalDraft {
            title: "t".repeat(100),
            description: "d".repeat(500),
            kind: ProposalKind::General,
        };
        assert_matches!(
            draft.validate(&GovernanceParameters::default(), &viewer(), false),
            Ok(_)
        );
    }

    #[test]
    fn test_proposal_draft_over_limit_is_rejected() {
        let draft = ProposalDraft {
            title: "t".repeat(101),
            description: "within bounds".to_string(),
            kind: ProposalKind::General,
        };
        assert_matches!(
            draft.validate(&GovernanceParameters::default(), &viewer(), false),
            Err(ProposalValidation::InvalidTitleLength(101, 100))
        );
    }

    #[test]
    fn test_proposal_draft_rejected_when_queue_is_full() {
        let full_queue = ViewerStats {
            active_proposals: 10,
            ..viewer()
        };
        let draft = ProposalDraft {
            title: "Community Development Fund".to_string(),
            description: "Establish a community fund".to_string(),
            kind: ProposalKind::General,
        };
        assert_matches!(
            draft.validate(
                &GovernanceParameters::default(),
                &full_queue,
                false
            ),
            Err(ProposalValidation::FullProposalQueue(10, 10))
        );
    }

    #[test]
    fn test_proposal_draft_force_skips_validation() {
        let draft = ProposalDraft {
            title: String::new(),
            description: String::new(),
            kind: ProposalKind::General,
        };
        assert_matches!(
            draft.validate(&GovernanceParameters::default(), &viewer(), true),
            Ok(_)
        );
    }

    #[test]
    fn test_proposal_draft_from_json_bytes() {
        let data = serde_json::json!({
            "title": "Update Governance Parameters",
            "description": "Reduce proposal threshold",
            "kind": {
                "treasury": {
                    "amount": 500_000,
                    "recipient": "SP1ABC...XYZ789"
                }
            }
        });
        let bytes = serde_json::to_vec(&data).unwrap();
        let draft = ProposalDraft::try_from(bytes.as_slice()).unwrap();
        assert_eq!(draft.title, "Update Governance Parameters");
        assert_matches!(
            draft.kind,
            ProposalKind::Treasury { amount, .. }
                if amount == token::Amount::from_u64(500_000)
        );
    }

    #[test]
    fn test_delegation_draft_at_voting_power_is_accepted() {
        let draft = DelegationDraft {
            delegate: Address::decode("SP2ZRX...ABC123").unwrap(),
            amount: token::Amount::from_u64(150_000),
        };
        assert_matches!(draft.validate(&viewer(), false), Ok(_));
    }

    #[test]
    fn test_delegation_draft_over_voting_power_is_rejected() {
        let draft = DelegationDraft {
            delegate: Address::decode("SP2ZRX...ABC123").unwrap(),
            amount: token::Amount::from_u64(150_001),
        };
        assert_matches!(
            draft.validate(&viewer(), false),
            Err(ProposalValidation::InvalidDelegationAmount(_, _))
        );
    }

    #[test]
    fn test_delegation_draft_zero_amount_is_rejected() {
        let draft = DelegationDraft {
            delegate: Address::decode("SP2ZRX...ABC123").unwrap(),
            amount: token::Amount::zero(),
        };
        assert_matches!(
            draft.validate(&viewer(), false),
            Err(ProposalValidation::EmptyDelegationAmount)
        );
    }

    #[test]
    fn test_delegation_draft_from_json_bytes() {
        let data = serde_json::json!({
            "delegate": "SP2ZRX...ABC123",
            "amount": 25_000
        });
        let bytes = serde_json::to_vec(&data).unwrap();
        let draft = DelegationDraft::try_from(bytes.as_slice()).unwrap();
        assert_eq!(draft.delegate.encode(), "SP2ZRX...ABC123");
        assert_eq!(draft.amount, token::Amount::from_u64(25_000));
    }
}
