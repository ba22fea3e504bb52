use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Image;
use crate::ContentId;

/// A person who runs sessions at the camp.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Facilitator {
    pub id: ContentId,
    pub name: String,
    pub bio: String,
    /// User type reported by the API, normally `Facilitator`.
    #[serde(rename = "type")]
    pub kind: String,
    pub image: Option<Image>,
    pub social_links: Vec<SocialLink>,
}

impl Facilitator {
    /// Name shown when the source carries no usable name field.
    pub const PLACEHOLDER_NAME: &'static str = "Facilitador";
    /// User type that marks a facilitator account.
    pub const USER_TYPE: &'static str = "Facilitator";
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}
