use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Intent(args) => commands::intent::handle(&args, flags),
        Commands::Extract(args) => commands::extract::handle(&args, ctx, flags),
        Commands::Reconcile(args) => commands::reconcile::handle(&args, ctx, flags),
        Commands::Breakdown(args) => commands::breakdown::handle(&args, flags),
        Commands::NormalizeTime(args) => commands::normalize_time::handle(&args, flags),
        Commands::Routine(args) => commands::routine::handle(&args, ctx, flags),
        Commands::Chat(args) => commands::chat::handle(&args, ctx, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
