use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An uploaded media file with its rendered dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Absolute URL of the file.
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alternative_text: String,
}

impl Image {
    /// Width used when the source omits one.
    pub const DEFAULT_WIDTH: u32 = 800;
    /// Height used when the source omits one.
    pub const DEFAULT_HEIGHT: u32 = 600;
}
