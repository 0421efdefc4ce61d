use color_eyre::eyre::Result;
use nebulith_apps::cli::api::{CliApi, CliIo};
use nebulith_apps::{cli, logging};
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<()> {
    // init error reporting
    color_eyre::install()?;

    // init logging
    logging::init_from_env_or(LevelFilter::INFO)?;

    // run the CLI
    let (cmd, ctx) = cli::nebulith_cli()?;
    CliApi::handle_client_command(cmd, ctx, &CliIo)
}
