//! Governance CLI structures

/// Proposal and delegation drafts
pub mod draft;
/// Draft validation
pub mod validation;
