use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Status => commands::status::handle(ctx, flags),
        Commands::New(args) => commands::new::handle(&args, ctx, flags),
        Commands::Feed => commands::feed::handle(ctx, flags),
        Commands::Hatch => commands::hatch::handle(ctx, flags),
        Commands::Release => commands::release::handle(ctx, flags),
        Commands::Path => commands::path::handle(ctx, flags),
    }
}
