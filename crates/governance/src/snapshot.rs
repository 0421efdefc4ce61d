use std::path::Path;

use itertools::Itertools;
use nebulith_core::address::Address;
use nebulith_core::chain::BlockHeight;
use nebulith_core::token::Amount;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::proposal::{
    MultisigStatus, Proposal, ProposalKind, ProposalStatus, ViewerStats,
};

#[derive(Debug, Error)]
/// The errors raised while reading a governance snapshot
pub enum SnapshotError {
    /// The snapshot file could not be read
    #[error("Unable to read the governance snapshot: {0}")]
    Read(#[from] std::io::Error),
    /// The snapshot content is not valid JSON
    #[error("Unable to parse the governance snapshot: {0}")]
    Parse(#[from] serde_json::Error),
    /// The snapshot content breaks an integrity rule
    #[error("Invalid governance snapshot: {0}")]
    Invalid(String),
}

/// A view of the governance state at a given chain height, as served to
/// the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernanceSnapshot {
    /// The proposals known at the snapshot height
    pub proposals: Vec<Proposal>,
    /// The stats of the account viewing the dashboard
    pub viewer: ViewerStats,
}

impl GovernanceSnapshot {
    /// Load a snapshot from a JSON file and check its integrity.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let data = std::fs::read(path)?;
        let snapshot = Self::try_from(data.as_slice())?;
        snapshot.validate()?;
        tracing::debug!(
            "Loaded governance snapshot from {} with {} proposals",
            path.display(),
            snapshot.proposals.len()
        );
        Ok(snapshot)
    }

    /// Look up a proposal by id.
    pub fn get(&self, proposal_id: u64) -> Option<&Proposal> {
        self.proposals
            .iter()
            .find(|proposal| proposal.id == proposal_id)
    }

    /// Check the snapshot integrity rules.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if let Some(id) = self
            .proposals
            .iter()
            .map(|proposal| proposal.id)
            .duplicates()
            .next()
        {
            return Err(SnapshotError::Invalid(format!(
                "duplicate proposal id {id}"
            )));
        }
        for proposal in &self.proposals {
            if proposal.end_block < proposal.start_block {
                return Err(SnapshotError::Invalid(format!(
                    "proposal {} ends at block {} before it starts at block \
                     {}",
                    proposal.id, proposal.end_block, proposal.start_block
                )));
            }
            if let Some(multisig) = &proposal.multisig {
                if multisig.signatures > multisig.required_signatures {
                    return Err(SnapshotError::Invalid(format!(
                        "proposal {} has {} of {} required signatures",
                        proposal.id,
                        multisig.signatures,
                        multisig.required_signatures
                    )));
                }
            }
        }
        Ok(())
    }

    /// The built-in data set backing the dashboard when no snapshot file is
    /// given.
    pub fn demo() -> Self {
        fn address(raw: &str) -> Address {
            Address::decode(raw)
                .expect("The demo address decoding shouldn't fail")
        }
        fn date(year: i32, month: u32, day: u32) -> chrono::NaiveDate {
            chrono::NaiveDate::from_ymd_opt(year, month, day)
                .expect("The demo date shouldn't be out of range")
        }

        Self {
            proposals: vec![
                Proposal {
                    id: 1,
                    title: "Increase Marketing Budget".to_string(),
                    description: "Allocate additional 500K tokens for Q2 \
                                  marketing initiatives to expand community \
                                  reach"
                        .to_string(),
                    proposer: address("SP2ZRX...ABC123"),
                    kind: ProposalKind::Treasury {
                        amount: Amount::from_u64(500_000),
                        recipient: address("SP1ABC...XYZ789"),
                    },
                    status: ProposalStatus::Active,
                    for_votes: Amount::from_u64(2_500_000),
                    against_votes: Amount::from_u64(500_000),
                    abstain_votes: Amount::from_u64(100_000),
                    start_block: BlockHeight(12_450),
                    end_block: BlockHeight(13_458),
                    current_block: BlockHeight(12_800),
                    multisig: None,
                    created_at: date(2025, 1, 15),
                },
                Proposal {
                    id: 2,
                    title: "Update Governance Parameters".to_string(),
                    description: "Reduce voting delay from 144 blocks to 72 \
                                  blocks to improve proposal responsiveness"
                        .to_string(),
                    proposer: address("SP1XYZ...DEF456"),
                    kind: ProposalKind::Parameter,
                    status: ProposalStatus::AwaitingSignatures,
                    for_votes: Amount::from_u64(15_000_000),
                    against_votes: Amount::from_u64(2_000_000),
                    abstain_votes: Amount::from_u64(500_000),
                    start_block: BlockHeight(11_000),
                    end_block: BlockHeight(12_008),
                    current_block: BlockHeight(12_800),
                    multisig: Some(MultisigStatus {
                        signatures: 1,
                        required_signatures: 2,
                    }),
                    created_at: date(2025, 1, 10),
                },
                Proposal {
                    id: 3,
                    title: "Community Development Fund".to_string(),
                    description: "Establish dedicated fund for \
                                  community-driven development projects"
                        .to_string(),
                    proposer: address("SP3ABC...GHI789"),
                    kind: ProposalKind::General,
                    status: ProposalStatus::Pending,
                    for_votes: Amount::zero(),
                    against_votes: Amount::zero(),
                    abstain_votes: Amount::zero(),
                    start_block: BlockHeight(13_000),
                    end_block: BlockHeight(14_008),
                    current_block: BlockHeight(12_800),
                    multisig: None,
                    created_at: date(2025, 1, 16),
                },
            ],
            viewer: ViewerStats {
                voting_power: Amount::from_u64(150_000),
                delegated_power: Amount::from_u64(50_000),
                active_proposals: 2,
                max_queue_size: 10,
                address: address("SP1ABC...XYZ789"),
            },
        }
    }
}

impl TryFrom<&[u8]> for GovernanceSnapshot {
    type Error = serde_json::Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        serde_json::from_slice(value)
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_demo_snapshot_passes_validation() {
        let snapshot = GovernanceSnapshot::demo();
        assert_matches!(snapshot.validate(), Ok(()));
        assert_eq!(snapshot.proposals.len(), 3);
        assert_eq!(
            snapshot.viewer.voting_power,
            Amount::from_u64(150_000)
        );
        assert_eq!(snapshot.viewer.active_proposals, 2);
        assert_eq!(snapshot.viewer.max_queue_size, 10);
    }

    #[test]
    fn test_demo_snapshot_lookup() {
        let snapshot = GovernanceSnapshot::demo();
        let proposal = snapshot.get(2).unwrap();
        assert_eq!(proposal.status, ProposalStatus::AwaitingSignatures);
        assert_eq!(
            proposal.multisig,
            Some(MultisigStatus {
                signatures: 1,
                required_signatures: 2,
            })
        );
        assert!(snapshot.get(42).is_none());
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let snapshot = GovernanceSnapshot::demo();
        let data = serde_json::to_vec(&snapshot).unwrap();
        let parsed = GovernanceSnapshot::try_from(data.as_slice()).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_snapshot_rejects_duplicate_proposal_ids() {
        let mut snapshot = GovernanceSnapshot::demo();
        snapshot.proposals[2].id = 1;
        assert_matches!(
            snapshot.validate(),
            Err(SnapshotError::Invalid(msg)) if msg.contains("duplicate")
        );
    }

    #[test]
    fn test_snapshot_rejects_voting_window_ending_before_it_starts() {
        let mut snapshot = GovernanceSnapshot::demo();
        snapshot.proposals[0].end_block = BlockHeight(12_000);
        assert_matches!(
            snapshot.validate(),
            Err(SnapshotError::Invalid(msg)) if msg.contains("proposal 1")
        );
    }

    #[test]
    fn test_snapshot_rejects_signature_overflow() {
        let mut snapshot = GovernanceSnapshot::demo();
        snapshot.proposals[1].multisig = Some(MultisigStatus {
            signatures: 3,
            required_signatures: 2,
        });
        assert_matches!(
            snapshot.validate(),
            Err(SnapshotError::Invalid(msg)) if msg.contains("signatures")
        );
    }
}
