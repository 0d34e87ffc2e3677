use crate::{
    codec_commands::CodecCommands, directory_commands::DirectoryArgs,
    register_commands::RegisterArgs,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Browse the profile directory
    Directory(DirectoryArgs),

    /// Show one profile by DID
    Profile {
        /// Decentralized identifier of the profile
        did: String,
    },

    /// Register a new profile
    Register(RegisterArgs),

    /// Hex envelope helpers
    Codec {
        #[command(subcommand)]
        action: CodecCommands,
    },

    /// List categories, availability options, sort keys and expertise areas
    Catalog,
}
