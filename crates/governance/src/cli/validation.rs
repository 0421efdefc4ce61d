use nebulith_core::token;
use thiserror::Error;

use crate::proposal::ProposalKind;

#[derive(Clone, Debug, PartialEq, Error)]
/// The validation errors for a proposal or delegation draft
pub enum ProposalValidation {
    /// The proposal title is empty
    #[error("Invalid proposal title: the title can not be empty")]
    EmptyTitle,
    /// The proposal title is too long
    #[error(
        "Invalid proposal title length: the title length is {0} but maximum \
         is {1}"
    )]
    InvalidTitleLength(u64, u64),
    /// The proposal description is empty
    #[error("Invalid proposal description: the description can not be empty")]
    EmptyDescription,
    /// The proposal description is too long
    #[error(
        "Invalid proposal description length: the description length is {0} \
         but maximum is {1}"
    )]
    InvalidDescriptionLength(u64, u64),
    /// The treasury transfer amount is zero
    #[error("Invalid treasury transfer: the amount must be greater than zero")]
    InvalidTreasuryAmount,
    /// The author proposal queue has no free slot
    #[error(
        "Invalid proposal queue: {0} of {1} active proposal slots are \
         already in use"
    )]
    FullProposalQueue(u64, u64),
    /// The delegation amount is zero
    #[error("Invalid delegation: the amount must be greater than zero")]
    EmptyDelegationAmount,
    /// The delegation amount is larger than the available voting power
    #[error(
        "Invalid delegation amount: the delegation is {0} but the available \
         voting power is {1}"
    )]
    InvalidDelegationAmount(String, String),
}

pub fn is_valid_title(
    title: &str,
    max_title_chars: u64,
) -> Result<(), ProposalValidation> {
    let title_chars = title.chars().count() as u64;
    if title_chars == 0 {
        Err(ProposalValidation::EmptyTitle)
    } else if title_chars > max_title_chars {
        Err(ProposalValidation::InvalidTitleLength(
            title_chars,
            max_title_chars,
        ))
    } else {
        Ok(())
    }
}

pub fn is_valid_description(
    description: &str,
    max_description_chars: u64,
) -> Result<(), ProposalValidation> {
    let description_chars = description.chars().count() as u64;
    if description_chars == 0 {
        Err(ProposalValidation::EmptyDescription)
    } else if description_chars > max_description_chars {
        Err(ProposalValidation::InvalidDescriptionLength(
            description_chars,
            max_description_chars,
        ))
    } else {
        Ok(())
    }
}

pub fn is_valid_proposal_kind(
    kind: &ProposalKind,
) -> Result<(), ProposalValidation> {
    match kind {
        ProposalKind::Treasury { amount, .. } if amount.is_zero() => {
            Err(ProposalValidation::InvalidTreasuryAmount)
        }
        _ => Ok(()),
    }
}

pub fn is_valid_proposal_queue(
    active_proposals: u64,
    max_queue_size: u64,
) -> Result<(), ProposalValidation> {
    if active_proposals < max_queue_size {
        Ok(())
    } else {
        Err(ProposalValidation::FullProposalQueue(
            active_proposals,
            max_queue_size,
        ))
    }
}

pub fn is_valid_delegation_amount(
    amount: token::Amount,
    voting_power: token::Amount,
) -> Result<(), ProposalValidation> {
    if amount.is_zero() {
        Err(ProposalValidation::EmptyDelegationAmount)
    } else if voting_power.can_spend(&amount) {
        Ok(())
    } else {
        Err(ProposalValidation::InvalidDelegationAmount(
            amount.to_string(),
            voting_power.to_string(),
        ))
    }
}
