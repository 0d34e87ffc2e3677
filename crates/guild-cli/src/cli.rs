use crate::commands::Commands;

use guild_config::Config;

use clap::Parser;

#[derive(Parser)]
#[command(name = "guild")]
#[command(about = "Guild consultancy directory and registration CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Data layer proxy URL (overrides config and GUILD_DATALAYER_URL)
    #[arg(long, global = true)]
    pub(crate) datalayer_url: Option<String>,

    /// Store identifier (overrides config and GUILD_STORE_ID)
    #[arg(long, global = true)]
    pub(crate) store_id: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

impl Cli {
    /// Command-line flags win over config file and environment
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref url) = self.datalayer_url {
            config.datalayer.base_url = url.clone();
        }
        if let Some(ref store_id) = self.store_id {
            config.datalayer.store_id = store_id.clone();
        }
    }
}
