//! The tagged content stream consumed by the document writer.

use super::{Image, Table};
use serde::{Deserialize, Serialize};

/// Default transition length in symbols.
pub const DEFAULT_TRANSITION_LENGTH: usize = 8;

/// Default transition symbol.
pub const DEFAULT_TRANSITION_SYMBOL: char = '-';

/// Default title depth.
pub const DEFAULT_TITLE_LEVEL: u8 = 1;

fn default_title_level() -> u8 {
    DEFAULT_TITLE_LEVEL
}

/// One unit of document content.
///
/// Order in a stream is significant: the first two items drive title and
/// subtitle inference, and consecutive sentences are coalesced into one
/// paragraph block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentItem {
    /// Document title, over- and underlined with the symbol for `level`
    Title {
        text: String,
        #[serde(default = "default_title_level")]
        level: u8,
    },

    /// Document subtitle
    Subtitle { text: String },

    /// Section heading at a requested level (1 = most prominent)
    Heading { text: String, level: u8 },

    /// Section transition line
    Transition { length: usize, symbol: char },

    /// A complete paragraph
    Paragraph { text: String },

    /// One sentence; consecutive sentences form a paragraph
    Sentence { text: String },

    /// A grid table
    Table(Table),

    /// An image written next to the document
    Image(Image),
}

impl ContentItem {
    /// Create a title item.
    pub fn title(text: impl Into<String>) -> Self {
        Self::title_at(text, DEFAULT_TITLE_LEVEL)
    }

    /// Create a title drawn with the symbol of another depth.
    pub fn title_at(text: impl Into<String>, level: u8) -> Self {
        ContentItem::Title {
            text: text.into(),
            level,
        }
    }

    /// Create a subtitle item.
    pub fn subtitle(text: impl Into<String>) -> Self {
        ContentItem::Subtitle { text: text.into() }
    }

    /// Create a level-1 heading.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::heading_at(text, 1)
    }

    /// Create a heading at a requested level.
    pub fn heading_at(text: impl Into<String>, level: u8) -> Self {
        ContentItem::Heading {
            text: text.into(),
            level,
        }
    }

    /// Create a transition with the default length and symbol.
    pub fn transition() -> Self {
        Self::transition_with(DEFAULT_TRANSITION_LENGTH, DEFAULT_TRANSITION_SYMBOL)
    }

    /// Create a transition with a custom length and symbol.
    pub fn transition_with(length: usize, symbol: char) -> Self {
        ContentItem::Transition { length, symbol }
    }

    /// Create a paragraph item.
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentItem::Paragraph { text: text.into() }
    }

    /// Create a sentence item.
    pub fn sentence(text: impl Into<String>) -> Self {
        ContentItem::Sentence { text: text.into() }
    }

    /// Short tag name, as used in the JSON form.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentItem::Title { .. } => "title",
            ContentItem::Subtitle { .. } => "subtitle",
            ContentItem::Heading { .. } => "heading",
            ContentItem::Transition { .. } => "transition",
            ContentItem::Paragraph { .. } => "paragraph",
            ContentItem::Sentence { .. } => "sentence",
            ContentItem::Table(_) => "table",
            ContentItem::Image(_) => "image",
        }
    }

    /// Check if this item is a sentence.
    pub fn is_sentence(&self) -> bool {
        matches!(self, ContentItem::Sentence { .. })
    }
}

impl From<Table> for ContentItem {
    fn from(table: Table) -> Self {
        ContentItem::Table(table)
    }
}

impl From<Image> for ContentItem {
    fn from(image: Image) -> Self {
        ContentItem::Image(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            ContentItem::heading("Intro"),
            ContentItem::Heading {
                text: "Intro".to_string(),
                level: 1
            }
        );
        assert_eq!(
            ContentItem::transition(),
            ContentItem::Transition {
                length: 8,
                symbol: '-'
            }
        );
    }

    #[test]
    fn test_title_level_defaults_to_one() {
        assert_eq!(
            ContentItem::title("Report"),
            ContentItem::title_at("Report", 1)
        );

        let item: ContentItem =
            serde_json::from_str(r#"{"kind":"title","text":"Report"}"#).unwrap();
        assert_eq!(item, ContentItem::title("Report"));

        let item: ContentItem =
            serde_json::from_str(r#"{"kind":"title","text":"Report","level":3}"#).unwrap();
        assert_eq!(item, ContentItem::title_at("Report", 3));
    }

    #[test]
    fn test_kind_and_conversions() {
        let item: ContentItem = Table::new().into();
        assert_eq!(item.kind(), "table");
        assert!(ContentItem::sentence("A.").is_sentence());
        assert!(!ContentItem::paragraph("A.").is_sentence());
    }
}
