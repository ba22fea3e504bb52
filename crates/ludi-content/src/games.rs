//! Store catalog: games and training kits.

use ludi_core::ContentId;
use ludi_core::entities::{Facilitator, Game, Review};
use serde_json::Value;

use crate::normalize::{self, FromRecord, Normalizer, require_id, string_field, text_field};
use crate::record::RawRecord;
use crate::{ContentClient, FetchOutcome, OutcomeSummary, Resource};

const TITLE: &[&str] = &["Name", "title", "name"];
const DESCRIPTION: &[&str] = &["Description", "description"];
const PRICE: &[&str] = &["Price", "price"];
const DISCOUNT: &[&str] = &["Discount", "discount"];
const BEST_SELLER: &[&str] = &["bestSeller", "BestSeller"];
const COVER: &[&str] = &["LogoImg", "coverImage", "cover"];
const IMAGES: &[&str] = &["images", "Images"];
const FEATURES: &[&str] = &["Features", "features"];
const REVIEWS: &[&str] = &["reviews", "Reviews"];
const FACILITATOR: &[&str] = &["facilitator", "Facilitator"];
const PURCHASE_URL: &[&str] = &["HotmartURL", "purchaseUrl"];

const GAMES_PATH: &str = "/api/games?populate=*";

impl FromRecord for Game {
    const KIND: &'static str = "game";

    fn from_record(record: &RawRecord<'_>, normalizer: &Normalizer) -> Result<Self, crate::NormalizeError> {
        let id = require_id(record)?;
        let title = record
            .non_blank(TITLE)
            .unwrap_or(Self::PLACEHOLDER_TITLE)
            .to_string();

        let facilitator = record.relation(FACILITATOR).and_then(|raw| {
            normalizer
                .one::<Facilitator>(raw)
                .inspect_err(|e| tracing::debug!(game = %id, %e, "ignoring embedded facilitator"))
                .ok()
        });

        Ok(Self {
            description: text_field(record, DESCRIPTION),
            price: normalize::price(record.first(PRICE)),
            discount: normalize::discount(record.first(DISCOUNT)),
            best_seller: record.flag(BEST_SELLER),
            cover_image: normalizer.image(record.first(COVER), &title),
            images: normalizer.images(record.relation_list(IMAGES), &title),
            features: record
                .relation_list(FEATURES)
                .iter()
                .map(normalize::feature)
                .collect(),
            reviews: record.relation_list(REVIEWS).iter().filter_map(review).collect(),
            facilitator,
            purchase_url: record.non_blank(PURCHASE_URL).map(str::to_string),
            id,
            title,
        })
    }

    fn content_id(&self) -> &ContentId {
        &self.id
    }
}

fn review(value: &Value) -> Option<Review> {
    let record = RawRecord::detect(value).ok()?;
    Some(Review {
        text: text_field(&record, &["text", "comment"]),
        rating: record
            .number(&["rating"])
            .filter(|r| *r >= 0.0)
            .unwrap_or(0.0),
        author: string_field(&record, &["author"]),
    })
}

/// Path for a single-game lookup. Numeric ids filter on `id`, anything else
/// on `documentId`.
fn lookup_path(id: &str) -> String {
    let field = if id.parse::<u64>().is_ok() {
        "id"
    } else {
        "documentId"
    };
    format!(
        "/api/games?filters[{field}]={}&populate=*",
        urlencoding::encode(id)
    )
}

impl ContentClient {
    /// List every game in the store. Returns an empty list on any failure.
    pub async fn list_games(&self) -> Vec<Game> {
        self.list_games_outcome().await.into_vec()
    }

    /// List every game, keeping the structured outcome.
    pub async fn list_games_outcome(&self) -> FetchOutcome<Vec<Game>> {
        self.list_outcome(Resource::Games, GAMES_PATH, |_| true)
            .await
    }

    /// Look up one game by id. Returns `None` when nothing matched or the
    /// lookup failed.
    pub async fn get_game_by_id(&self, id: &str) -> Option<Game> {
        self.get_game_by_id_outcome(id).await.into_option()
    }

    /// Look up one game by id, keeping the structured outcome.
    ///
    /// A blank id yields [`FetchOutcome::Empty`] without issuing a request.
    /// Only a record whose `id` or `documentId` equals `id` is accepted, so a
    /// server that ignores the filter cannot substitute another game.
    pub async fn get_game_by_id_outcome(&self, id: &str) -> FetchOutcome<Game> {
        let id = id.trim();
        if id.is_empty() {
            self.observer
                .record(Resource::Game, &OutcomeSummary::Empty { dropped: 0 });
            return FetchOutcome::Empty;
        }

        let raw = match self.fetch_items(&lookup_path(id)).await {
            Ok(raw) => raw,
            Err(e) => return self.fail(Resource::Game, e),
        };

        let wanted = ContentId::from(id);
        let found = raw
            .iter()
            .find(|value| RawRecord::detect(value).is_ok_and(|record| record.has_id(&wanted)));
        let Some(found) = found else {
            tracing::info!(id, returned = raw.len(), "no game found");
            self.observer
                .record(Resource::Game, &OutcomeSummary::Empty { dropped: raw.len() });
            return FetchOutcome::Empty;
        };

        match self.normalizer.one::<Game>(found) {
            Ok(game) => {
                self.observer.record(
                    Resource::Game,
                    &OutcomeSummary::Loaded {
                        count: 1,
                        dropped: 0,
                    },
                );
                FetchOutcome::Loaded(game)
            }
            Err(e) => self.fail(Resource::Game, e.into()),
        }
    }
}
