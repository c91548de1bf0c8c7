use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum CatalogCommands {
    /// Upsert brands and insight articles from a JSON seed file.
    Import(CatalogImportArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CatalogImportArgs {
    /// Seed file with `brands` and `insights` arrays.
    pub file: PathBuf,
}
