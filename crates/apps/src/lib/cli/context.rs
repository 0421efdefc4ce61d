//! CLI input types can be used for command arguments

use std::path::PathBuf;

use color_eyre::eyre::Result;
use nebulith_governance::snapshot::GovernanceSnapshot;

use super::args;
use crate::config::Config;

/// Command execution context
#[derive(Debug)]
pub struct Context {
    /// Global arguments
    pub global_args: args::Global,
    /// The configuration read from the base directory
    pub config: Config,
}

impl Context {
    pub fn new(global_args: args::Global) -> Result<Self> {
        let config = Config::load(&global_args.base_dir);
        Ok(Self {
            global_args,
            config,
        })
    }

    /// Resolve and load the governance snapshot for a command. An explicit
    /// `--snapshot` argument takes precedence over the path configured in
    /// `config.toml`. With neither, the built-in demo snapshot is returned.
    pub fn read_snapshot(
        &self,
        snapshot: &Option<PathBuf>,
    ) -> Result<GovernanceSnapshot> {
        let path = snapshot.as_ref().or(self.config.snapshot.as_ref());
        match path {
            Some(path) => Ok(GovernanceSnapshot::load(path)?),
            None => {
                tracing::debug!(
                    "No snapshot configured, using the built-in demo data"
                );
                Ok(GovernanceSnapshot::demo())
            }
        }
    }
}
