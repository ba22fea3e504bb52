//! Data for the landing and store pages.

use ludi_core::entities::{Facilitator, Game, ScheduleEntry, Testimonial};
use serde::Serialize;

use crate::ContentClient;

/// Everything the landing page renders from the content API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingContent {
    pub facilitators: Vec<Facilitator>,
    pub schedule: Vec<ScheduleEntry>,
    pub testimonials: Vec<Testimonial>,
}

impl ContentClient {
    /// Fetch the landing page collections concurrently.
    ///
    /// The three requests are independent: one failing leaves the others
    /// untouched and only empties its own section.
    pub async fn load_landing(&self) -> LandingContent {
        let (facilitators, schedule, testimonials) = tokio::join!(
            self.list_facilitators(),
            self.list_schedule(),
            self.list_testimonials(),
        );
        tracing::debug!(
            facilitators = facilitators.len(),
            schedule = schedule.len(),
            testimonials = testimonials.len(),
            "landing content loaded"
        );
        LandingContent {
            facilitators,
            schedule,
            testimonials,
        }
    }

    /// Fetch the store catalog.
    pub async fn load_store(&self) -> Vec<Game> {
        self.list_games().await
    }
}
