//! Camp programme.

use ludi_core::ContentId;
use ludi_core::entities::{Facilitator, ScheduleEntry};

use crate::normalize::{FromRecord, Normalizer, require_id, string_field};
use crate::record::RawRecord;
use crate::{ContentClient, FetchOutcome, NormalizeError, Resource};

const SCHEDULE_PATH: &str = "/api/schedules?populate=*";

impl FromRecord for ScheduleEntry {
    const KIND: &'static str = "schedule";

    fn from_record(record: &RawRecord<'_>, normalizer: &Normalizer) -> Result<Self, NormalizeError> {
        let id = require_id(record)?;
        let title = string_field(record, &["title"]);

        // Resolved once here; entries carry a copy, not a reference.
        let facilitator = record.relation(&["facilitator"]).and_then(|raw| {
            normalizer
                .one::<Facilitator>(raw)
                .inspect_err(|e| tracing::debug!(entry = %id, %e, "ignoring embedded facilitator"))
                .ok()
        });

        Ok(Self {
            day: string_field(record, &["day"]),
            time: string_field(record, &["time"]),
            facilitator,
            image: normalizer.image(record.first(&["image"]), &title),
            id,
            title,
        })
    }

    fn content_id(&self) -> &ContentId {
        &self.id
    }
}

impl ContentClient {
    /// List the programme. Returns an empty list on any failure.
    pub async fn list_schedule(&self) -> Vec<ScheduleEntry> {
        self.list_schedule_outcome().await.into_vec()
    }

    /// List the programme, keeping the structured outcome.
    pub async fn list_schedule_outcome(&self) -> FetchOutcome<Vec<ScheduleEntry>> {
        self.list_outcome(Resource::Schedule, SCHEDULE_PATH, |_| true)
            .await
    }
}
