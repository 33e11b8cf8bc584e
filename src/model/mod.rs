//! Content model for document assembly.
//!
//! Tables and images are built by the caller and handed to the writer as
//! items of a [`ContentItem`] stream.

mod content;
mod image;
mod table;

pub use content::{
    ContentItem, DEFAULT_TITLE_LEVEL, DEFAULT_TRANSITION_LENGTH, DEFAULT_TRANSITION_SYMBOL,
};
pub use image::{Image, ImageFormat};
pub use table::Table;
