use ludi_core::ComputedPrice;
use ludi_core::entities::Game;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ListResponse<T> {
    count: usize,
    items: Vec<T>,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}

/// A store item as the store page shows it: the game plus its display price.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GameListing {
    #[serde(flatten)]
    game: Game,
    computed_price: ComputedPrice,
}

impl From<Game> for GameListing {
    fn from(game: Game) -> Self {
        Self {
            computed_price: game.computed_price(),
            game,
        }
    }
}

#[derive(Debug, Serialize)]
struct GameResponse {
    id: String,
    found: bool,
    game: Option<GameListing>,
}

pub async fn games(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let games = ctx.client.load_store().await;
    let listings: Vec<GameListing> = games.into_iter().map(GameListing::from).collect();
    output(&ListResponse::from(listings), flags.format)
}

pub async fn game(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let game = ctx.client.get_game_by_id(id).await.map(GameListing::from);
    output(
        &GameResponse {
            id: id.to_string(),
            found: game.is_some(),
            game,
        },
        flags.format,
    )
}

pub async fn facilitators(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let facilitators = ctx.client.list_facilitators().await;
    output(&ListResponse::from(facilitators), flags.format)
}

pub async fn schedule(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schedule = ctx.client.list_schedule().await;
    output(&ListResponse::from(schedule), flags.format)
}

pub async fn testimonials(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let testimonials = ctx.client.list_testimonials().await;
    output(&ListResponse::from(testimonials), flags.format)
}

pub async fn landing(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let landing = ctx.client.load_landing().await;
    output(&landing, flags.format)
}
