use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Facilitator, Image};
use crate::ContentId;

/// One slot of the camp programme.
///
/// The facilitator is embedded as it was at fetch time, not referenced by id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: ContentId,
    pub day: String,
    pub time: String,
    pub title: String,
    pub facilitator: Option<Facilitator>,
    pub image: Option<Image>,
}
