use color_eyre::eyre::Result;
use nebulith_core::io::Io;

use crate::cli;
use crate::cli::api::CliApi;
use crate::cli::cmds::*;
use crate::client::{dashboard, drafts, queries};

impl CliApi {
    pub fn handle_client_command(
        cmd: cli::cmds::Nebulith,
        ctx: cli::Context,
        io: &impl Io,
    ) -> Result<()> {
        use cli::cmds::Nebulith as Sub;
        match cmd {
            Sub::Dashboard(Dashboard(args)) => {
                let snapshot = ctx.read_snapshot(&args.query.snapshot)?;
                dashboard::render_dashboard(
                    io,
                    &snapshot,
                    &ctx.config.governance,
                )?;
            }
            Sub::QueryProposals(QueryProposals(args)) => {
                let snapshot = ctx.read_snapshot(&args.query.snapshot)?;
                queries::query_proposals(io, &snapshot)?;
            }
            Sub::QueryProposal(QueryProposal(args)) => {
                let snapshot = ctx.read_snapshot(&args.query.snapshot)?;
                queries::query_proposal(io, &snapshot, args.proposal_id)?;
            }
            Sub::QueryStats(QueryStats(args)) => {
                let snapshot = ctx.read_snapshot(&args.query.snapshot)?;
                queries::query_stats(io, &snapshot);
            }
            Sub::ValidateProposal(ValidateProposal(args)) => {
                let snapshot = ctx.read_snapshot(&args.query.snapshot)?;
                drafts::validate_proposal(
                    io,
                    &snapshot,
                    &ctx.config.governance,
                    &args.proposal_data,
                    args.force,
                )?;
            }
            Sub::ValidateDelegation(ValidateDelegation(args)) => {
                let snapshot = ctx.read_snapshot(&args.query.snapshot)?;
                drafts::validate_delegation(
                    io,
                    &snapshot,
                    args.delegate,
                    args.amount,
                    args.force,
                );
            }
        }
        Ok(())
    }
}
