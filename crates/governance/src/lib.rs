//! Governance library code

#![doc(html_favicon_url = "https://dev.nebulith.io/master/favicon.png")]
#![doc(html_logo_url = "https://dev.nebulith.io/master/rustdoc-logo.png")]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::arithmetic_side_effects,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]

/// governance CLI structures
pub mod cli;
/// governance parameters
pub mod parameters;
/// governance proposals
pub mod proposal;
/// governance snapshots
pub mod snapshot;
/// Governance utility functions/structs
pub mod utils;
/// governance votes
pub mod vote;

pub use proposal::{Proposal, ProposalKind, ProposalStatus, ViewerStats};
pub use snapshot::GovernanceSnapshot;
pub use vote::VoteChoice;
