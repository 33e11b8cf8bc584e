//! JSON dump of a content stream.

use crate::error::Result;
use crate::model::ContentItem;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a content stream to JSON. Image payloads are omitted.
pub fn to_json(items: &[ContentItem], format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(items)?,
        JsonFormat::Compact => serde_json::to_string(items)?,
    };
    Ok(json)
}
