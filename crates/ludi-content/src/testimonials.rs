//! Graduate testimonials.

use ludi_core::ContentId;
use ludi_core::entities::Testimonial;

use crate::normalize::{FromRecord, Normalizer, require_id, string_field, text_field};
use crate::record::RawRecord;
use crate::{ContentClient, FetchOutcome, NormalizeError, Resource};

const TESTIMONIALS_PATH: &str = "/api/testimonials?populate=*";

impl FromRecord for Testimonial {
    const KIND: &'static str = "testimonial";

    fn from_record(record: &RawRecord<'_>, _normalizer: &Normalizer) -> Result<Self, NormalizeError> {
        Ok(Self {
            id: require_id(record)?,
            text: text_field(record, &["text"]),
            author: string_field(record, &["author"]),
            video_url: record.non_empty(&["videoUrl"]).map(str::to_string),
        })
    }

    fn content_id(&self) -> &ContentId {
        &self.id
    }
}

impl ContentClient {
    /// List testimonials. Returns an empty list on any failure.
    pub async fn list_testimonials(&self) -> Vec<Testimonial> {
        self.list_testimonials_outcome().await.into_vec()
    }

    /// List testimonials, keeping the structured outcome.
    pub async fn list_testimonials_outcome(&self) -> FetchOutcome<Vec<Testimonial>> {
        self.list_outcome(Resource::Testimonials, TESTIMONIALS_PATH, |_| true)
            .await
    }
}
