use crate::{
    Cli, CliResult, catalog_commands::catalog, commands::Commands,
    directory_commands::DirectoryOutput,
};

use guild_config::Config;
use guild_datalayer::{
    DataLayerClient, FetchOutcome, ProfileDetail, ProfileDirectory, RegistrationSubmitter,
};

use log::info;
use serde_json::Value;

/// Execute one command and return its JSON output
pub async fn run(cli: Cli, config: &Config) -> CliResult<Value> {
    match cli.command {
        Commands::Directory(args) => {
            let state = args.to_state()?;
            let directory = ProfileDirectory::new(DataLayerClient::new(&config.datalayer)?);

            let outcome = directory.load_all().await;
            let source = outcome.source();
            let fallback_reason = match outcome {
                FetchOutcome::Fallback { ref reason, .. } => Some(reason.clone()),
                _ => None,
            };
            let profiles = outcome.into_result()?;

            let output = DirectoryOutput {
                source,
                fallback_reason,
                sort: state.sort(),
                page: state.view(&profiles),
            };
            info!(
                "Directory page {}/{} ({} matches, {source})",
                output.page.page, output.page.total_pages, output.page.total_count
            );
            Ok(serde_json::to_value(output)?)
        }

        Commands::Profile { did } => {
            let detail = ProfileDetail::new(DataLayerClient::new(&config.datalayer)?);
            let profile = detail.load(&did).await.into_result()?;
            Ok(serde_json::to_value(profile)?)
        }

        Commands::Register(args) => {
            let mut wizard = args.drive()?;
            let submitter = RegistrationSubmitter::new(DataLayerClient::new(&config.datalayer)?);
            let confirmation = submitter.submit(&mut wizard).await?;
            Ok(serde_json::to_value(confirmation)?)
        }

        Commands::Codec { action } => action.execute(),

        Commands::Catalog => Ok(catalog()),
    }
}
