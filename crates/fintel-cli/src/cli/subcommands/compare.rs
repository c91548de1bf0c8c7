use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum CompareCommands {
    /// List your comparisons with both brands.
    List,
    /// Save a comparison of two brands.
    Create(CompareCreateArgs),
    /// Delete a comparison.
    Delete(CompareIdArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CompareCreateArgs {
    pub franchise_a_id: String,
    pub franchise_b_id: String,
    #[arg(short, long, default_value = "")]
    pub notes: String,
}

#[derive(Clone, Debug, Args)]
pub struct CompareIdArgs {
    pub id: String,
}
