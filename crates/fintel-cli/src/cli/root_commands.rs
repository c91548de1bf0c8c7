use clap::{Args, Subcommand};

use crate::cli::subcommands::{AuthCommands, CatalogCommands, CollectionCommands, CompareCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Featured brands (or jump to search results with --search).
    Home(HomeArgs),
    /// Search, filter and sort the catalog.
    Browse(BrowseArgs),
    /// One brand in detail.
    Franchise(FranchiseArgs),
    /// Your saved collections.
    Collection {
        #[command(subcommand)]
        action: CollectionCommands,
    },
    /// Your saved side-by-side comparisons.
    Compare {
        #[command(subcommand)]
        action: CompareCommands,
    },
    /// Industry insight articles.
    Insights,
    /// Ask the franchise assistant (interactive without a question).
    Ask(AskArgs),
    /// Open an app path such as /browse?search=gym or /franchise/<id>.
    Open(OpenArgs),
    /// Sign up, sign in and manage the stored session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Check database connectivity and configuration.
    Doctor,
    /// Catalog maintenance.
    Catalog {
        #[command(subcommand)]
        action: CatalogCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct HomeArgs {
    /// Search term; shows browse results instead of the featured list.
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct BrowseArgs {
    /// Case-insensitive match on name or description.
    #[arg(short, long)]
    pub search: Option<String>,
    /// Sector label or slug (e.g. "Retail", food-beverage).
    #[arg(long)]
    pub sector: Option<String>,
    /// name, cost_low, cost_high or profit. Unknown keys sort by name.
    #[arg(long, default_value = "name")]
    pub sort: String,
}

#[derive(Clone, Debug, Args)]
pub struct FranchiseArgs {
    /// Brand id.
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct AskArgs {
    /// Question words. Omit to chat line by line on stdin.
    pub words: Vec<String>,
    /// Print the whole conversation instead of just the reply.
    #[arg(long)]
    pub transcript: bool,
}

impl AskArgs {
    /// The question as typed, `None` when no words were given.
    #[must_use]
    pub fn question(&self) -> Option<String> {
        if self.words.is_empty() {
            None
        } else {
            Some(self.words.join(" "))
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct OpenArgs {
    /// Path with optional query string.
    pub path: String,
}
