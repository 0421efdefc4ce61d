//! Text rendering of the governance dashboard.
//!
//! Every section is written through the [`Io`] trait so the output can be
//! captured in tests. Amounts render with thousands separators via the
//! `Amount` display.

use color_eyre::eyre::Result;
use itertools::Itertools;
use nebulith_core::display_line;
use nebulith_core::io::Io;
use nebulith_governance::parameters::GovernanceParameters;
use nebulith_governance::proposal::{
    Proposal, ProposalKind, ProposalStatus, ViewerStats,
};
use nebulith_governance::snapshot::GovernanceSnapshot;
use nebulith_governance::utils::{
    available_actions, compute_proposal_tally, compute_time_remaining,
};

/// Render the full dashboard: header, stats bar, every proposal card, the
/// two form summaries and the footer.
pub fn render_dashboard(
    io: &impl Io,
    snapshot: &GovernanceSnapshot,
    parameters: &GovernanceParameters,
) -> Result<()> {
    render_header(io, &snapshot.viewer);
    display_line!(io);
    render_stats(io, snapshot);
    for proposal in &snapshot.proposals {
        display_line!(io);
        render_proposal_card(io, proposal)?;
    }
    display_line!(io);
    render_creation_form(io, parameters, &snapshot.viewer);
    display_line!(io);
    render_delegation_form(io, &snapshot.viewer);
    display_line!(io);
    render_footer(io);
    Ok(())
}

fn render_header(io: &impl Io, viewer: &ViewerStats) {
    display_line!(io, "Nebulith DAO - Decentralized Governance");
    display_line!(io, "{} VP", viewer.voting_power);
}

/// Render the stats bar of the dashboard.
pub fn render_stats(io: &impl Io, snapshot: &GovernanceSnapshot) {
    let viewer = &snapshot.viewer;
    display_line!(io, "Your Voting Power: {}", viewer.voting_power);
    display_line!(io, "Delegated To You: {}", viewer.delegated_power);
    display_line!(
        io,
        "Your Active Proposals: {}/{}",
        viewer.active_proposals,
        viewer.max_queue_size
    );
    display_line!(io, "Total Proposals: {}", snapshot.proposals.len());
}

/// Render a single proposal card.
pub fn render_proposal_card(io: &impl Io, proposal: &Proposal) -> Result<()> {
    let mut heading = format!(
        "#{} {} [{}] [{}]",
        proposal.id, proposal.title, proposal.status, proposal.kind
    );
    if proposal.requires_multisig() {
        heading.push_str(" [Requires Multisig]");
    }
    display_line!(io, "{}", heading);
    display_line!(io, "{}", proposal.description);
    display_line!(io, "Proposer: {}", proposal.proposer);
    display_line!(io, "Created: {}", proposal.created_at);
    if let Some(remaining) = compute_time_remaining(proposal)? {
        display_line!(io, "{}", remaining);
    }

    if let ProposalKind::Treasury { amount, recipient } = &proposal.kind {
        display_line!(
            io,
            "Treasury Transfer: {} tokens -> {}",
            amount,
            recipient
        );
    }

    let tally = compute_proposal_tally(proposal)?;
    if !tally.total.is_zero() {
        display_line!(io, "Voting Progress: {} votes", tally.total);
        display_line!(
            io,
            "For: {:.1}% ({})",
            tally.for_percentage,
            proposal.for_votes
        );
        display_line!(
            io,
            "Against: {:.1}% ({})",
            tally.against_percentage,
            proposal.against_votes
        );
    }

    if let Some(multisig) = &proposal.multisig {
        if proposal.status == ProposalStatus::AwaitingSignatures {
            display_line!(io, "Guardian Signatures: {}", multisig);
        }
    }

    let actions = available_actions(proposal);
    if !actions.is_empty() {
        display_line!(io, "Actions: {}", actions.iter().join(", "));
    }
    Ok(())
}

fn render_creation_form(
    io: &impl Io,
    parameters: &GovernanceParameters,
    viewer: &ViewerStats,
) {
    display_line!(io, "Create New Proposal");
    display_line!(io, "Title: max {} characters", parameters.max_title_chars);
    display_line!(
        io,
        "Description: max {} characters",
        parameters.max_description_chars
    );
    display_line!(
        io,
        "Queue Status: You have {} of {} active proposals. Creating this \
         proposal will use 1 queue slot.",
        viewer.active_proposals,
        viewer.max_queue_size
    );
}

fn render_delegation_form(io: &impl Io, viewer: &ViewerStats) {
    display_line!(io, "Delegate Voting Power");
    display_line!(io, "Available: {} tokens", viewer.voting_power);
    display_line!(
        io,
        "Note: Delegated voting power cannot be used to vote yourself. You \
         can revoke delegation at any time."
    );
}

fn render_footer(io: &impl Io) {
    display_line!(
        io,
        "Nebulith DAO v3.2 - Decentralized Governance with Queue Management"
    );
    display_line!(io, "Built on Stacks Blockchain | Empowering Communities");
}
