//! # scriven
//!
//! Assemble reports as reStructuredText.
//!
//! A document is described as an ordered stream of [`ContentItem`]s (titles,
//! headings, paragraphs, sentences, tables, images and transitions). The
//! [`RestWriter`] turns the stream into a single `.rst` file, writing images
//! as sidecar files next to it.
//!
//! ## Quick Start
//!
//! ```no_run
//! use scriven::{write_document, ContentItem, Table};
//!
//! fn main() -> scriven::Result<()> {
//!     let mut table = Table::with_header(["Name", "Score"]);
//!     table.add_row(["Alice", "93"]);
//!     table.add_footnote("Scores are out of 100");
//!
//!     write_document(
//!         "out/report.rst",
//!         vec![
//!             ContentItem::title("Quarterly Report"),
//!             ContentItem::heading("Summary"),
//!             ContentItem::sentence("Scores went up."),
//!             ContentItem::sentence("Nobody knows why."),
//!             ContentItem::Table(table),
//!         ],
//!     )?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Heading normalization**: levels never skip, depth is capped at 7
//! - **Title inference**: default title and subtitle when the stream has none
//! - **Sentence runs**: consecutive sentences become one paragraph
//! - **Table footnotes**: wrapped to the width of the grid
//! - **Images**: from bytes, files or any [`chart::ChartSource`]

pub mod chart;
pub mod error;
pub mod model;
pub mod naming;
pub mod render;

pub use chart::{ChartCapture, ChartSource};
pub use error::{Error, Result};
pub use model::{ContentItem, Image, ImageFormat, Table};
pub use naming::{sanitize_title, NameStrategy, RandomNames};
pub use render::{
    GridFormatter, JsonFormat, OutputSink, RestWriter, RstGridTable, WriteMode, WriteStats,
    WriterOptions,
};

use std::path::Path;

/// Write a content stream to `path` with default options.
///
/// # Example
///
/// ```no_run
/// use scriven::{write_document, ContentItem};
///
/// let stats = write_document(
///     "notes.rst",
///     vec![ContentItem::heading("Notes"), ContentItem::paragraph("Nothing yet.")],
/// )
/// .unwrap();
/// assert_eq!(stats.heading_count, 1);
/// ```
pub fn write_document<P, I>(path: P, items: I) -> Result<WriteStats>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = ContentItem>,
{
    write_document_with_options(path, items, WriterOptions::default())
}

/// Write a content stream to `path`.
///
/// The document is written even when an item fails (for example an image
/// that cannot be saved); the error is still returned.
pub fn write_document_with_options<P, I>(
    path: P,
    items: I,
    options: WriterOptions,
) -> Result<WriteStats>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = ContentItem>,
{
    RestWriter::scope(path, options, |writer| {
        writer.write_all(items)?;
        Ok(writer.stats().clone())
    })
}
