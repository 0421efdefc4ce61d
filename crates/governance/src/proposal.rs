//! Proposal structures.

use std::fmt::Display;

use chrono::NaiveDate;
use nebulith_core::address::Address;
use nebulith_core::chain::BlockHeight;
use nebulith_core::token::Amount;
use serde::{Deserialize, Serialize};

/// The type of a proposal. A treasury proposal carries the transfer it asks
/// for; the other kinds have no payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalKind {
    /// A general signalling proposal
    General,
    /// A proposal transferring tokens out of the treasury
    Treasury {
        /// The amount of tokens to transfer
        amount: Amount,
        /// The address receiving the transfer
        recipient: Address,
    },
    /// A proposal changing a governance parameter
    Parameter,
}

impl ProposalKind {
    /// Check if the proposal kind is a treasury transfer
    pub fn is_treasury(&self) -> bool {
        matches!(self, ProposalKind::Treasury { .. })
    }
}

impl Display for ProposalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProposalKind::General => write!(f, "general"),
            ProposalKind::Treasury { .. } => write!(f, "treasury"),
            ProposalKind::Parameter => write!(f, "parameter"),
        }
    }
}

/// The state a proposal was observed in. Nothing in this crate advances a
/// proposal from one state to another.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    /// Voting has not started yet
    Pending,
    /// Voting is open
    Active,
    /// The proposal passed its tally
    Succeeded,
    /// The proposal failed its tally
    Defeated,
    /// The proposal was executed
    Executed,
    /// The proposal passed and waits for guardian co-signatures
    AwaitingSignatures,
    /// The proposal was withdrawn
    Cancelled,
}

impl ProposalStatus {
    /// Check if voting is open
    pub fn is_active(&self) -> bool {
        matches!(self, ProposalStatus::Active)
    }
}

impl Display for ProposalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProposalStatus::Pending => write!(f, "Pending"),
            ProposalStatus::Active => write!(f, "Active"),
            ProposalStatus::Succeeded => write!(f, "Succeeded"),
            ProposalStatus::Defeated => write!(f, "Defeated"),
            ProposalStatus::Executed => write!(f, "Executed"),
            ProposalStatus::AwaitingSignatures => {
                write!(f, "Awaiting Signatures")
            }
            ProposalStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Guardian co-signature progress on a proposal that must be multisigned
/// before execution.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct MultisigStatus {
    /// Signatures collected so far
    pub signatures: u64,
    /// Signatures needed to execute
    pub required_signatures: u64,
}

impl Display for MultisigStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.signatures, self.required_signatures)
    }
}

/// A governance proposal as observed by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// The proposal id
    pub id: u64,
    /// The proposal title
    pub title: String,
    /// The proposal description
    pub description: String,
    /// The address that submitted the proposal
    pub proposer: Address,
    /// The proposal kind with its payload
    pub kind: ProposalKind,
    /// The state the proposal was observed in
    pub status: ProposalStatus,
    /// Voting power cast in favour
    pub for_votes: Amount,
    /// Voting power cast against
    pub against_votes: Amount,
    /// Voting power cast as abstain
    pub abstain_votes: Amount,
    /// The block from which voting is allowed
    pub start_block: BlockHeight,
    /// The block from which voting is stopped
    pub end_block: BlockHeight,
    /// The chain height at which the proposal was observed
    pub current_block: BlockHeight,
    /// Guardian signature progress, for proposals that require multisig
    /// execution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multisig: Option<MultisigStatus>,
    /// The submission date
    pub created_at: NaiveDate,
}

impl Proposal {
    /// Check if the proposal requires guardian co-signatures to execute.
    pub fn requires_multisig(&self) -> bool {
        self.multisig.is_some()
    }
}

/// The voting-power stats of the account viewing the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerStats {
    /// Voting power the viewer holds
    pub voting_power: Amount,
    /// Voting power other accounts delegated to the viewer
    pub delegated_power: Amount,
    /// The viewer's proposals currently occupying queue slots
    pub active_proposals: u64,
    /// Maximum number of simultaneously active proposals per account
    pub max_queue_size: u64,
    /// The viewer's address
    pub address: Address,
}

impl ViewerStats {
    /// Queue slots still free for new proposals.
    pub fn queue_slots_free(&self) -> u64 {
        self.max_queue_size.saturating_sub(self.active_proposals)
    }

    /// Check if creating one more proposal would fit in the queue.
    pub fn queue_has_capacity(&self) -> bool {
        self.active_proposals < self.max_queue_size
    }
}

#[cfg(any(test, feature = "testing"))]
/// Testing helpers and strategies for governance proposals
pub mod testing {
    use proptest::prelude::*;
    use proptest::{option, prop_compose};

    use super::*;

    /// Upper bound for a single generated vote counter, low enough that
    /// three counters always sum within `u64` range.
    pub const MAX_VOTE_POWER: u64 = u64::MAX / 3;

    prop_compose! {
        /// Generate an arbitrary address
        pub fn arb_address()(raw in "SP[0-9A-Z]{6,12}") -> Address {
            Address::decode(raw).expect("generated invalid address")
        }
    }

    prop_compose! {
        /// Generate an arbitrary amount of voting power
        pub fn arb_vote_power()(raw in 0..=MAX_VOTE_POWER) -> Amount {
            Amount::from_u64(raw)
        }
    }

    prop_compose! {
        /// Generate an arbitrary proposal status
        pub fn arb_proposal_status()(discriminant in 0..7) -> ProposalStatus {
            match discriminant {
                0 => ProposalStatus::Pending,
                1 => ProposalStatus::Active,
                2 => ProposalStatus::Succeeded,
                3 => ProposalStatus::Defeated,
                4 => ProposalStatus::Executed,
                5 => ProposalStatus::AwaitingSignatures,
                _ => ProposalStatus::Cancelled,
            }
        }
    }

    prop_compose! {
        /// Generate an arbitrary treasury transfer kind
        pub fn arb_treasury_kind()(
            amount in arb_vote_power(),
            recipient in arb_address(),
        ) -> ProposalKind {
            ProposalKind::Treasury { amount, recipient }
        }
    }

    /// Generate an arbitrary proposal kind
    pub fn arb_proposal_kind() -> impl Strategy<Value = ProposalKind> {
        prop_oneof![
            Just(ProposalKind::General),
            arb_treasury_kind(),
            Just(ProposalKind::Parameter),
        ]
    }

    prop_compose! {
        /// Generate an arbitrary guardian signature status
        pub fn arb_multisig_status()(
            required_signatures in 1..=10_u64,
            collected in 0..=10_u64,
        ) -> MultisigStatus {
            MultisigStatus {
                signatures: collected.min(required_signatures),
                required_signatures,
            }
        }
    }

    prop_compose! {
        /// Generate an arbitrary submission date
        pub fn arb_created_at()(
            year in 2020..=2030_i32,
            month in 1..=12_u32,
            day in 1..=28_u32,
        ) -> NaiveDate {
            NaiveDate::from_ymd_opt(year, month, day)
                .expect("generated invalid date")
        }
    }

    prop_compose! {
        /// Generate an arbitrary proposal with a consistent voting period
        pub fn arb_proposal()(
            id in 0..u64::MAX,
            title in "[a-zA-Z0-9 ]{1,100}",
            description in "[a-zA-Z0-9 ]{1,500}",
            proposer in arb_address(),
            kind in arb_proposal_kind(),
            status in arb_proposal_status(),
            for_votes in arb_vote_power(),
            against_votes in arb_vote_power(),
            abstain_votes in arb_vote_power(),
            start in 0..=100_000_000_u64,
            period in 0..=1_000_000_u64,
            observed in 0..=200_000_000_u64,
            multisig in option::of(arb_multisig_status()),
            created_at in arb_created_at(),
        ) -> Proposal {
            Proposal {
                id,
                title,
                description,
                proposer,
                kind,
                status,
                for_votes,
                against_votes,
                abstain_votes,
                start_block: BlockHeight(start),
                end_block: BlockHeight(start.saturating_add(period)),
                current_block: BlockHeight(observed),
                multisig,
                created_at,
            }
        }
    }
}
