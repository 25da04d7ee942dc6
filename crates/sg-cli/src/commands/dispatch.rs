use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Apply(args) => commands::apply::handle(&args, flags).await,
        Commands::Lookup(args) => commands::lookup::handle(&args, flags),
        Commands::Codes => commands::codes::handle(flags),
        Commands::Style(args) => commands::style::handle(&args, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
