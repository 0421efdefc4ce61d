//! The CLI commands of the `nebulith` executable.
//!
//! Commands are built with the re-usable [`utils`] machinery: every
//! sub-command is a thin struct around its parsed arguments, and argument
//! definitions are shared through typed constants.

pub mod api;
pub mod client;
pub mod context;
mod utils;

use clap::ArgMatches;
use color_eyre::eyre::Result;
pub use utils::safe_exit;
use utils::*;

pub use self::context::Context;
use crate::nebulith_version;

const APP_NAME: &str = "Nebulith";

pub mod cmds {
    use super::utils::*;
    use super::{args, ArgMatches};

    /// Commands for the `nebulith` binary.
    #[derive(Clone, Debug)]
    pub enum Nebulith {
        Dashboard(Dashboard),
        QueryProposals(QueryProposals),
        QueryProposal(QueryProposal),
        QueryStats(QueryStats),
        ValidateProposal(ValidateProposal),
        ValidateDelegation(ValidateDelegation),
    }

    impl Cmd for Nebulith {
        fn add_sub(app: App) -> App {
            app.subcommand(Dashboard::def().display_order(1))
                .subcommand(QueryProposals::def().display_order(2))
                .subcommand(QueryProposal::def().display_order(2))
                .subcommand(QueryStats::def().display_order(2))
                .subcommand(ValidateProposal::def().display_order(3))
                .subcommand(ValidateDelegation::def().display_order(3))
        }

        fn parse(matches: &ArgMatches) -> Option<Self> {
            let dashboard = SubCmd::parse(matches).map(Self::Dashboard);
            let query_proposals =
                SubCmd::parse(matches).map(Self::QueryProposals);
            let query_proposal =
                SubCmd::parse(matches).map(Self::QueryProposal);
            let query_stats = SubCmd::parse(matches).map(Self::QueryStats);
            let validate_proposal =
                SubCmd::parse(matches).map(Self::ValidateProposal);
            let validate_delegation =
                SubCmd::parse(matches).map(Self::ValidateDelegation);
            dashboard
                .or(query_proposals)
                .or(query_proposal)
                .or(query_stats)
                .or(validate_proposal)
                .or(validate_delegation)
        }
    }

    #[derive(Clone, Debug)]
    pub struct Dashboard(pub args::Dashboard);

    impl SubCmd for Dashboard {
        const CMD: &'static str = "dashboard";

        fn parse(matches: &ArgMatches) -> Option<Self> {
            matches
                .subcommand_matches(Self::CMD)
                .map(|matches| Dashboard(args::Dashboard::parse(matches)))
        }

        fn def() -> App {
            App::new(Self::CMD)
                .about("Render the full governance dashboard.")
                .add_args::<args::Dashboard>()
        }
    }

    #[derive(Clone, Debug)]
    pub struct QueryProposals(pub args::QueryProposals);

    impl SubCmd for QueryProposals {
        const CMD: &'static str = "query-proposals";

        fn parse(matches: &ArgMatches) -> Option<Self> {
            matches.subcommand_matches(Self::CMD).map(|matches| {
                QueryProposals(args::QueryProposals::parse(matches))
            })
        }

        fn def() -> App {
            App::new(Self::CMD)
                .about("Query all known proposals.")
                .add_args::<args::QueryProposals>()
        }
    }

    #[derive(Clone, Debug)]
    pub struct QueryProposal(pub args::QueryProposal);

    impl SubCmd for QueryProposal {
        const CMD: &'static str = "query-proposal";

        fn parse(matches: &ArgMatches) -> Option<Self> {
            matches.subcommand_matches(Self::CMD).map(|matches| {
                QueryProposal(args::QueryProposal::parse(matches))
            })
        }

        fn def() -> App {
            App::new(Self::CMD)
                .about("Query a proposal by id.")
                .add_args::<args::QueryProposal>()
        }
    }

    #[derive(Clone, Debug)]
    pub struct QueryStats(pub args::QueryStats);

    impl SubCmd for QueryStats {
        const CMD: &'static str = "query-stats";

        fn parse(matches: &ArgMatches) -> Option<Self> {
            matches
                .subcommand_matches(Self::CMD)
                .map(|matches| QueryStats(args::QueryStats::parse(matches)))
        }

        fn def() -> App {
            App::new(Self::CMD)
                .about("Query the viewer's voting power and queue stats.")
                .add_args::<args::QueryStats>()
        }
    }

    #[derive(Clone, Debug)]
    pub struct ValidateProposal(pub args::ValidateProposal);

    impl SubCmd for ValidateProposal {
        const CMD: &'static str = "validate-proposal";

        fn parse(matches: &ArgMatches) -> Option<Self> {
            matches.subcommand_matches(Self::CMD).map(|matches| {
                ValidateProposal(args::ValidateProposal::parse(matches))
            })
        }

        fn def() -> App {
            App::new(Self::CMD)
                .about("Validate a proposal draft file.")
                .add_args::<args::ValidateProposal>()
        }
    }

    #[derive(Clone, Debug)]
    pub struct ValidateDelegation(pub args::ValidateDelegation);

    impl SubCmd for ValidateDelegation {
        const CMD: &'static str = "validate-delegation";

        fn parse(matches: &ArgMatches) -> Option<Self> {
            matches.subcommand_matches(Self::CMD).map(|matches| {
                ValidateDelegation(args::ValidateDelegation::parse(matches))
            })
        }

        fn def() -> App {
            App::new(Self::CMD)
                .about("Validate a voting power delegation.")
                .add_args::<args::ValidateDelegation>()
        }
    }
}

pub mod args {
    use std::env;
    use std::path::PathBuf;

    use nebulith_core::address::Address;
    use nebulith_core::token;

    use super::utils::*;
    use super::ArgMatches;
    use crate::config;

    const AMOUNT: Arg<token::Amount> = arg("amount");
    const BASE_DIR: ArgDefault<PathBuf> = arg_default(
        "base-dir",
        DefaultFn(|| match env::var("NEBULITH_BASE_DIR") {
            Ok(dir) => dir.into(),
            Err(_) => config::get_default_nebulith_folder(),
        }),
    );
    const DATA_PATH: Arg<PathBuf> = arg("data-path");
    const DELEGATE: Arg<Address> = arg("delegate");
    const FORCE: ArgFlag = flag("force");
    const PROPOSAL_ID: Arg<u64> = arg("proposal-id");
    const SNAPSHOT: ArgOpt<PathBuf> = arg_opt("snapshot");

    /// Global command arguments
    #[derive(Clone, Debug)]
    pub struct Global {
        pub base_dir: PathBuf,
    }

    impl Global {
        /// Parse global arguments
        pub fn parse(matches: &ArgMatches) -> Self {
            let base_dir = BASE_DIR.parse(matches);
            Global { base_dir }
        }

        /// Add global args definition. Should be added to every top-level
        /// command.
        pub fn def(app: App) -> App {
            app.arg(BASE_DIR.def().help(
                "The base directory is where the client configuration is \
                 stored. This value can also be set via `NEBULITH_BASE_DIR` \
                 environment variable, but the argument takes precedence, \
                 if specified.",
            ))
        }
    }

    /// Common query arguments
    #[derive(Clone, Debug)]
    pub struct Query {
        /// A snapshot file to read instead of the configured one
        pub snapshot: Option<PathBuf>,
    }

    impl Args for Query {
        fn parse(matches: &ArgMatches) -> Self {
            let snapshot = SNAPSHOT.parse(matches);
            Self { snapshot }
        }

        fn def(app: App) -> App {
            app.arg(SNAPSHOT.def().help(
                "Path to a governance snapshot JSON file. Defaults to the \
                 snapshot configured in config.toml, or to the built-in \
                 demo data.",
            ))
        }
    }

    #[derive(Clone, Debug)]
    pub struct Dashboard {
        /// Common query args
        pub query: Query,
    }

    impl Args for Dashboard {
        fn parse(matches: &ArgMatches) -> Self {
            let query = Query::parse(matches);
            Self { query }
        }

        fn def(app: App) -> App {
            app.add_args::<Query>()
        }
    }

    #[derive(Clone, Debug)]
    pub struct QueryProposals {
        /// Common query args
        pub query: Query,
    }

    impl Args for QueryProposals {
        fn parse(matches: &ArgMatches) -> Self {
            let query = Query::parse(matches);
            Self { query }
        }

        fn def(app: App) -> App {
            app.add_args::<Query>()
        }
    }

    #[derive(Clone, Debug)]
    pub struct QueryProposal {
        /// Common query args
        pub query: Query,
        /// Proposal id
        pub proposal_id: u64,
    }

    impl Args for QueryProposal {
        fn parse(matches: &ArgMatches) -> Self {
            let query = Query::parse(matches);
            let proposal_id = PROPOSAL_ID.parse(matches);

            Self { query, proposal_id }
        }

        fn def(app: App) -> App {
            app.add_args::<Query>()
                .arg(PROPOSAL_ID.def().help("The proposal identifier."))
        }
    }

    #[derive(Clone, Debug)]
    pub struct QueryStats {
        /// Common query args
        pub query: Query,
    }

    impl Args for QueryStats {
        fn parse(matches: &ArgMatches) -> Self {
            let query = Query::parse(matches);
            Self { query }
        }

        fn def(app: App) -> App {
            app.add_args::<Query>()
        }
    }

    #[derive(Clone, Debug)]
    pub struct ValidateProposal {
        /// Common query args
        pub query: Query,
        /// The path to the proposal draft file
        pub proposal_data: PathBuf,
        /// Skip the validation checks
        pub force: bool,
    }

    impl Args for ValidateProposal {
        fn parse(matches: &ArgMatches) -> Self {
            let query = Query::parse(matches);
            let proposal_data = DATA_PATH.parse(matches);
            let force = FORCE.parse(matches);

            Self {
                query,
                proposal_data,
                force,
            }
        }

        fn def(app: App) -> App {
            app.add_args::<Query>()
                .arg(DATA_PATH.def().help(
                    "The data path file (json) that describes the proposal.",
                ))
                .arg(FORCE.def().help(
                    "Accept the draft even if it doesn't pass the validation \
                     checks.",
                ))
        }
    }

    #[derive(Clone, Debug)]
    pub struct ValidateDelegation {
        /// Common query args
        pub query: Query,
        /// The address receiving the delegated voting power
        pub delegate: Address,
        /// The amount of voting power to delegate
        pub amount: token::Amount,
        /// Skip the validation checks
        pub force: bool,
    }

    impl Args for ValidateDelegation {
        fn parse(matches: &ArgMatches) -> Self {
            let query = Query::parse(matches);
            let delegate = DELEGATE.parse(matches);
            let amount = AMOUNT.parse(matches);
            let force = FORCE.parse(matches);

            Self {
                query,
                delegate,
                amount,
                force,
            }
        }

        fn def(app: App) -> App {
            app.add_args::<Query>()
                .arg(
                    DELEGATE
                        .def()
                        .help("The address receiving the delegation."),
                )
                .arg(AMOUNT.def().help("The amount of tokens to delegate."))
                .arg(FORCE.def().help(
                    "Accept the delegation even if it doesn't pass the \
                     validation checks.",
                ))
        }
    }
}

pub fn nebulith_cli() -> Result<(cmds::Nebulith, Context)> {
    let app = nebulith_app();
    cmds::Nebulith::parse_or_print_help(app)
}

fn nebulith_app() -> App {
    let app = App::new(APP_NAME)
        .version(nebulith_version())
        .about("Nebulith DAO command line interface.")
        .subcommand_required(true)
        .arg_required_else_help(true);
    args::Global::def(app)
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use super::*;

    fn parse(raw: &[&str]) -> Option<cmds::Nebulith> {
        let matches = cmds::Nebulith::add_sub(nebulith_app())
            .try_get_matches_from(raw)
            .expect("parsing failed");
        cmds::Nebulith::parse(&matches)
    }

    #[test]
    fn test_dashboard_command_parses() {
        let cmd = parse(&["nebulith", "dashboard"]).unwrap();
        assert!(matches!(cmd, cmds::Nebulith::Dashboard(_)));
    }

    #[test]
    fn test_dashboard_command_parses_snapshot_path() {
        let cmd = parse(&[
            "nebulith",
            "dashboard",
            "--snapshot",
            "/tmp/snapshot.json",
        ])
        .unwrap();
        match cmd {
            cmds::Nebulith::Dashboard(cmds::Dashboard(args)) => {
                assert_eq!(
                    args.query.snapshot,
                    Some(PathBuf::from("/tmp/snapshot.json"))
                );
            }
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn test_query_proposal_command_parses_id() {
        let cmd =
            parse(&["nebulith", "query-proposal", "--proposal-id", "2"])
                .unwrap();
        match cmd {
            cmds::Nebulith::QueryProposal(cmds::QueryProposal(args)) => {
                assert_eq!(args.proposal_id, 2);
                assert!(args.query.snapshot.is_none());
            }
            _ => panic!("unexpected command"),
        }
    }

    #[test]
    fn test_validate_delegation_command_parses() {
        let cmd = parse(&[
            "nebulith",
            "validate-delegation",
            "--delegate",
            "SP2ZRX...ABC123",
            "--amount",
            "25000",
            "--force",
        ])
        .unwrap();
        match cmd {
            cmds::Nebulith::ValidateDelegation(cmds::ValidateDelegation(
                args,
            )) => {
                assert_eq!(args.delegate.encode(), "SP2ZRX...ABC123");
                assert_eq!(u64::from(args.amount), 25_000);
                assert!(args.force);
            }
            _ => panic!("unexpected command"),
        }
    }
}
