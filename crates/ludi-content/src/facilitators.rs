//! Facilitators: user accounts that run camp sessions.

use ludi_core::entities::{Facilitator, SocialLink};
use ludi_core::{ContentId, FacilitatorSource};
use serde_json::Value;

use crate::normalize::{FromRecord, Normalizer, require_id, text_field};
use crate::record::RawRecord;
use crate::{ContentClient, FetchOutcome, NormalizeError, Resource};

const IMAGE: &[&str] = &["image", "avatar", "photo"];
const SOCIAL_LINKS: &[&str] = &["socialLinks", "social_links"];

/// Request path for the configured users endpoint.
const fn source_path(source: FacilitatorSource) -> &'static str {
    match source {
        FacilitatorSource::UsersPermissions => {
            "/api/users-permissions/users?filters[type]=Facilitator&populate=*"
        }
        FacilitatorSource::RoleFilter => "/api/users?filters[role][name][$eq]=Facilitator&populate=*",
    }
}

/// Whether a users-endpoint record is a facilitator account.
///
/// The users-permissions endpoint filters on `type`, which the server may
/// ignore, so the type is required. The role-filter endpoint selects by role
/// server-side and records there may carry no `type` at all.
fn is_facilitator_account(source: FacilitatorSource, record: &RawRecord<'_>) -> bool {
    match record.string(&["type"]) {
        Some(kind) => kind == Facilitator::USER_TYPE,
        None => source == FacilitatorSource::RoleFilter,
    }
}

/// Display name: `name`, then `firstname lastname`, then `username`, then a
/// placeholder.
fn display_name(record: &RawRecord<'_>) -> String {
    if let Some(name) = record.non_blank(&["name"]) {
        return name.to_string();
    }

    let first = record.non_empty(&["firstname", "firstName"]).unwrap_or_default();
    let last = record.non_empty(&["lastname", "lastName"]).unwrap_or_default();
    let full = format!("{first} {last}");
    let full = full.trim();
    if !full.is_empty() {
        return full.to_string();
    }

    record
        .non_blank(&["username"])
        .unwrap_or(Facilitator::PLACEHOLDER_NAME)
        .to_string()
}

fn social_link(value: &Value) -> Option<SocialLink> {
    let record = RawRecord::detect(value).ok()?;
    Some(SocialLink {
        platform: record.non_empty(&["platform"]).unwrap_or_default().to_string(),
        url: record.non_empty(&["url"])?.to_string(),
    })
}

impl FromRecord for Facilitator {
    const KIND: &'static str = "facilitator";

    fn from_record(record: &RawRecord<'_>, normalizer: &Normalizer) -> Result<Self, NormalizeError> {
        let id = require_id(record)?;
        let name = display_name(record);
        Ok(Self {
            bio: text_field(record, &["bio"]),
            kind: record
                .non_empty(&["type"])
                .unwrap_or(Self::USER_TYPE)
                .to_string(),
            image: normalizer.image(record.first(IMAGE), &name),
            social_links: record
                .relation_list(SOCIAL_LINKS)
                .iter()
                .filter_map(social_link)
                .collect(),
            id,
            name,
        })
    }

    fn content_id(&self) -> &ContentId {
        &self.id
    }
}

impl ContentClient {
    /// List facilitators. Returns an empty list on any failure.
    pub async fn list_facilitators(&self) -> Vec<Facilitator> {
        self.list_facilitators_outcome().await.into_vec()
    }

    /// List facilitators, keeping the structured outcome.
    ///
    /// Accounts that are not facilitators are filtered out even if the
    /// server ignored the query filter.
    pub async fn list_facilitators_outcome(&self) -> FetchOutcome<Vec<Facilitator>> {
        let source = self.facilitator_source;
        self.list_outcome(Resource::Facilitators, source_path(source), |record| {
            is_facilitator_account(source, record)
        })
        .await
    }
}
