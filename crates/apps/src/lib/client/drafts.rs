//! Validation of proposal and delegation drafts.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use nebulith_core::address::Address;
use nebulith_core::io::Io;
use nebulith_core::token;
use nebulith_core::{display_line, edisplay_line};
use nebulith_governance::cli::draft::{DelegationDraft, ProposalDraft};
use nebulith_governance::parameters::GovernanceParameters;
use nebulith_governance::snapshot::GovernanceSnapshot;

use crate::cli::safe_exit;

/// Validate a proposal draft file against the governance parameters and the
/// viewer's queue. Exits with an error when a check fails.
pub fn validate_proposal(
    io: &impl Io,
    snapshot: &GovernanceSnapshot,
    parameters: &GovernanceParameters,
    data_path: &Path,
    force: bool,
) -> Result<()> {
    let data = fs::read(data_path).wrap_err_with(|| {
        format!("Failed to read the draft file at {}", data_path.display())
    })?;
    let draft = ProposalDraft::try_from(data.as_slice())
        .wrap_err("Failed to parse the proposal draft")?;
    match draft.validate(parameters, &snapshot.viewer, force) {
        Ok(draft) => {
            display_line!(io, "Proposal draft \"{}\" is valid.", draft.title);
            Ok(())
        }
        Err(validation) => {
            edisplay_line!(io, "{}", validation);
            safe_exit(1)
        }
    }
}

/// Validate a voting power delegation against the viewer's balance. Exits
/// with an error when a check fails.
pub fn validate_delegation(
    io: &impl Io,
    snapshot: &GovernanceSnapshot,
    delegate: Address,
    amount: token::Amount,
    force: bool,
) {
    let draft = DelegationDraft { delegate, amount };
    match draft.validate(&snapshot.viewer, force) {
        Ok(draft) => {
            display_line!(
                io,
                "Delegation of {} tokens to {} is valid.",
                draft.amount,
                draft.delegate
            );
        }
        Err(validation) => {
            edisplay_line!(io, "{}", validation);
            safe_exit(1)
        }
    }
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;
    use std::io::Write;

    use super::*;

    struct TestIo(RefCell<String>);

    impl Io for TestIo {
        fn print(&self, output: impl AsRef<str>) {
            self.0.borrow_mut().push_str(output.as_ref());
        }

        fn println(&self, output: impl AsRef<str>) {
            self.print(output);
            self.print("\n");
        }

        fn eprintln(&self, output: impl AsRef<str>) {
            self.println(output);
        }
    }

    #[test]
    fn test_validate_proposal_draft_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Test failed");
        let data = serde_json::json!({
            "title": "Increase Marketing Budget",
            "description": "Allocate additional 500K tokens for Q2 \
                            marketing initiatives",
            "kind": "general",
        });
        file.write_all(data.to_string().as_bytes())
            .expect("Test failed");

        let io = TestIo(RefCell::new(String::new()));
        let snapshot = GovernanceSnapshot::demo();
        validate_proposal(
            &io,
            &snapshot,
            &GovernanceParameters::default(),
            file.path(),
            false,
        )
        .expect("Test failed");

        assert!(io.0.borrow().contains(
            "Proposal draft \"Increase Marketing Budget\" is valid."
        ));
    }

    #[test]
    fn test_validate_proposal_missing_file_fails() {
        let io = TestIo(RefCell::new(String::new()));
        let snapshot = GovernanceSnapshot::demo();
        let result = validate_proposal(
            &io,
            &snapshot,
            &GovernanceParameters::default(),
            Path::new("does-not-exist.json"),
            false,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_delegation_within_balance() {
        let io = TestIo(RefCell::new(String::new()));
        let snapshot = GovernanceSnapshot::demo();
        validate_delegation(
            &io,
            &snapshot,
            Address::decode("SP2ZRX...ABC123").expect("Test failed"),
            token::Amount::from_u64(25_000),
            false,
        );
        assert!(io.0.borrow().contains(
            "Delegation of 25,000 tokens to SP2ZRX...ABC123 is valid."
        ));
    }
}
