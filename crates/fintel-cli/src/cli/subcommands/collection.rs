use clap::{Args, Subcommand};

/// Collection commands. All of them need a signed-in session.
#[derive(Clone, Debug, Subcommand)]
pub enum CollectionCommands {
    /// List your collections with their brands.
    List,
    /// Create a collection.
    Create(CollectionCreateArgs),
    /// Rename a collection or change its description.
    Update(CollectionUpdateArgs),
    /// Delete a collection and its items.
    Delete(CollectionIdArgs),
    /// Add a brand to a collection.
    Add(CollectionItemArgs),
    /// Remove a brand from a collection.
    Remove(CollectionItemArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CollectionCreateArgs {
    pub name: String,
    #[arg(short, long)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CollectionUpdateArgs {
    pub id: String,
    pub name: String,
    #[arg(short, long)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CollectionIdArgs {
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct CollectionItemArgs {
    pub collection_id: String,
    pub brand_id: String,
}
