use crate::cli::{Commands, GlobalFlags};
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Games => commands::content::games(ctx, flags).await,
        Commands::Game { id } => commands::content::game(&id, ctx, flags).await,
        Commands::Facilitators => commands::content::facilitators(ctx, flags).await,
        Commands::Schedule => commands::content::schedule(ctx, flags).await,
        Commands::Testimonials => commands::content::testimonials(ctx, flags).await,
        Commands::Landing => commands::content::landing(ctx, flags).await,
        Commands::Price { amount, discount } => commands::price::handle(amount, discount, ctx, flags),
        Commands::Schema { entity } => commands::schema::handle(entity, flags),
    }
}
