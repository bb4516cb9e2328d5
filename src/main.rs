mod adapters;
mod app;
mod cli;
mod core;
mod global_constants;
mod receiver;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command, StoreCommand};
use crate::global_constants::{APPLICATION_NAME, LOG_TAG_MAIN};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    log::info!("{} Starting {}", LOG_TAG_MAIN, APPLICATION_NAME);

    match cli.command {
        Command::Submit { paths } => app::run_submit(paths).await,
        Command::Serve(args) => {
            let config = receiver::ReceiverConfig::from_env_and_args(args)?;
            receiver::run(config).await
        }
        Command::Store(StoreCommand::Save { path }) => app::run_store_save(&path),
        Command::Store(StoreCommand::Load { filename, output }) => {
            app::run_store_load(&filename, &output)
        }
        Command::Store(StoreCommand::Delete { filename }) => app::run_store_delete(&filename),
    }
}
