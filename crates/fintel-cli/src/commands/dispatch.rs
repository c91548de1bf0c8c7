use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Home(args) => commands::home::handle(&args, ctx, flags).await,
        Commands::Browse(args) => commands::browse::handle(&args, ctx, flags).await,
        Commands::Franchise(args) => commands::franchise::handle(&args.id, ctx, flags).await,
        Commands::Collection { action } => commands::collection::handle(&action, ctx, flags).await,
        Commands::Compare { action } => commands::compare::handle(&action, ctx, flags).await,
        Commands::Insights => commands::insights::handle(ctx, flags).await,
        Commands::Ask(args) => commands::ask::handle(&args, ctx, flags).await,
        Commands::Open(args) => commands::open::handle(&args, ctx, flags).await,
        Commands::Doctor => commands::doctor::handle(ctx, flags).await,
        Commands::Catalog { action } => commands::catalog::handle(&action, ctx, flags).await,
        Commands::Auth { .. } => {
            anyhow::bail!("auth commands run before the application context is opened")
        }
    }
}
