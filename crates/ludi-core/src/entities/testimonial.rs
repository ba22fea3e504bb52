use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ContentId;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: ContentId,
    pub text: String,
    pub author: String,
    pub video_url: Option<String>,
}
