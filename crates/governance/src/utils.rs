//! Derived display values for governance proposals.

use std::fmt::Display;

use nebulith_core::arith::{self, checked};
use nebulith_core::chain::{BlockHeight, BLOCKS_PER_DAY, BLOCKS_PER_HOUR};
use nebulith_core::token;

use crate::proposal::{Proposal, ProposalStatus};
use crate::vote::VoteChoice;

/// Alias to cumulate voting power
pub type VotePower = token::Amount;

/// The vote counters of a proposal reduced to the values the voting
/// progress bar displays.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VoteTally {
    /// Share of the voted power that was cast in favour, in percent
    pub for_percentage: f64,
    /// Share of the voted power that was cast against, in percent
    pub against_percentage: f64,
    /// The total voting power that voted, abstains included
    pub total: VotePower,
}

impl VoteTally {
    /// Compute the tally of a proposal's vote counters. When nothing has
    /// voted yet, both percentages are zero.
    pub fn new(
        for_votes: VotePower,
        against_votes: VotePower,
        abstain_votes: VotePower,
    ) -> Result<Self, arith::Error> {
        let total =
            Self::get_total_voted_power(for_votes, against_votes, abstain_votes)?;
        if total.is_zero() {
            return Ok(Self {
                for_percentage: 0.0,
                against_percentage: 0.0,
                total,
            });
        }
        let total_power = total.raw_amount() as f64;
        let for_percentage =
            for_votes.raw_amount() as f64 / total_power * 100.0;
        let against_percentage =
            against_votes.raw_amount() as f64 / total_power * 100.0;
        Ok(Self {
            for_percentage,
            against_percentage,
            total,
        })
    }

    fn get_total_voted_power(
        for_votes: VotePower,
        against_votes: VotePower,
        abstain_votes: VotePower,
    ) -> Result<VotePower, arith::Error> {
        checked!(for_votes + against_votes + abstain_votes)
    }
}

/// Voting time left on an active proposal, in whole days and hours of
/// chain time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimeRemaining {
    /// Whole days of blocks left
    pub days: u64,
    /// Whole hours of blocks left beyond the days
    pub hours: u64,
}

impl TimeRemaining {
    /// Convert a number of blocks left into days and hours at the fixed
    /// block rate.
    pub fn from_blocks(remaining: BlockHeight) -> Result<Self, arith::Error> {
        let remaining = u64::from(remaining);
        let days = checked!(remaining / BLOCKS_PER_DAY)?;
        let day_blocks = checked!(remaining % BLOCKS_PER_DAY)?;
        let hours = checked!(day_blocks / BLOCKS_PER_HOUR)?;
        Ok(Self { days, hours })
    }
}

impl Display for TimeRemaining {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d {}h remaining", self.days, self.hours)
    }
}

/// An action the dashboard offers on a proposal. Which actions are offered
/// depends only on the proposal's status; none of them is carried out by
/// this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalAction {
    /// Cast a vote on an active proposal
    Vote(VoteChoice),
    /// Co-sign a proposal that awaits guardian signatures
    SignAsGuardian,
    /// Execute a proposal that passed
    Execute,
    /// Withdraw a proposal that has not ended yet
    Cancel,
}

impl Display for ProposalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProposalAction::Vote(VoteChoice::For) => write!(f, "Vote For"),
            ProposalAction::Vote(VoteChoice::Against) => {
                write!(f, "Vote Against")
            }
            ProposalAction::Vote(VoteChoice::Abstain) => write!(f, "Abstain"),
            ProposalAction::SignAsGuardian => write!(f, "Sign as Guardian"),
            ProposalAction::Execute => write!(f, "Execute Proposal"),
            ProposalAction::Cancel => write!(f, "Cancel"),
        }
    }
}

/// Compute the vote tally displayed for a proposal.
pub fn compute_proposal_tally(
    proposal: &Proposal,
) -> Result<VoteTally, arith::Error> {
    VoteTally::new(
        proposal.for_votes,
        proposal.against_votes,
        proposal.abstain_votes,
    )
}

/// Compute the voting time left on a proposal. Only an active proposal has
/// a countdown; any other status yields `None`. An observation height past
/// the end of the voting period clamps the countdown to zero.
pub fn compute_time_remaining(
    proposal: &Proposal,
) -> Result<Option<TimeRemaining>, arith::Error> {
    if !proposal.status.is_active() {
        return Ok(None);
    }
    let remaining = proposal.end_block.sub_or_default(proposal.current_block);
    Ok(Some(TimeRemaining::from_blocks(remaining)?))
}

/// List the actions the dashboard offers on a proposal in its observed
/// status.
pub fn available_actions(proposal: &Proposal) -> Vec<ProposalAction> {
    match proposal.status {
        ProposalStatus::Active => vec![
            ProposalAction::Vote(VoteChoice::For),
            ProposalAction::Vote(VoteChoice::Against),
            ProposalAction::Vote(VoteChoice::Abstain),
            ProposalAction::Cancel,
        ],
        ProposalStatus::AwaitingSignatures => {
            vec![ProposalAction::SignAsGuardian]
        }
        ProposalStatus::Succeeded => vec![ProposalAction::Execute],
        ProposalStatus::Pending => vec![ProposalAction::Cancel],
        ProposalStatus::Defeated
        | ProposalStatus::Executed
        | ProposalStatus::Cancelled => vec![],
    }
}
