//! Queries over a governance snapshot.

use color_eyre::eyre::Result;
use nebulith_core::io::Io;
use nebulith_core::{display_line, edisplay_line};
use nebulith_governance::snapshot::GovernanceSnapshot;

use crate::cli::safe_exit;
use crate::client::dashboard;

/// Print every proposal card in snapshot order.
pub fn query_proposals(
    io: &impl Io,
    snapshot: &GovernanceSnapshot,
) -> Result<()> {
    for proposal in &snapshot.proposals {
        dashboard::render_proposal_card(io, proposal)?;
        display_line!(io);
    }
    Ok(())
}

/// Print the card of the proposal with the given id. Exits with an error
/// when no proposal has that id.
pub fn query_proposal(
    io: &impl Io,
    snapshot: &GovernanceSnapshot,
    proposal_id: u64,
) -> Result<()> {
    match snapshot.get(proposal_id) {
        Some(proposal) => dashboard::render_proposal_card(io, proposal),
        None => {
            edisplay_line!(io, "No proposal found with id: {}", proposal_id);
            safe_exit(1)
        }
    }
}

/// Print the viewer's voting power and queue stats.
pub fn query_stats(io: &impl Io, snapshot: &GovernanceSnapshot) {
    dashboard::render_stats(io, snapshot);
}
