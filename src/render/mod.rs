//! Rendering of content streams into reStructuredText.

pub mod heading;
mod json;
mod options;
mod result;
mod sink;
pub mod table;
mod writer;

pub use heading::{HeadingLevel, HeadingState, HEADING_SYMBOLS, MAX_DEPTH};
pub use json::{to_json, JsonFormat};
pub use options::{WriteMode, WriterOptions, DEFAULT_SUBTITLE, DEFAULT_TITLE};
pub use result::WriteStats;
pub use sink::OutputSink;
pub use table::{render_table, wrap_footnotes, GridFormatter, RstGridTable, TableBlock};
pub use writer::RestWriter;
