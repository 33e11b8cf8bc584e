//! reStructuredText document writer.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::model::{ContentItem, Image, Table};
use crate::naming::{NameStrategy, RandomNames};

use super::heading::{symbol_for, underline, HeadingState};
use super::table::{render_table, GridFormatter, RstGridTable};
use super::{OutputSink, WriteStats, WriterOptions};

/// Writes a content stream into one reStructuredText file.
///
/// Each block is preceded by a blank line. Images are written as sidecar
/// files in the document's directory as they are encountered.
pub struct RestWriter {
    options: WriterOptions,
    sink: OutputSink,
    headings: HeadingState,
    naming: Box<dyn NameStrategy>,
    formatter: Box<dyn GridFormatter>,
    stats: WriteStats,
}

impl RestWriter {
    /// Start a document at `path` with default options.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::create_with_options(path, WriterOptions::default())
    }

    /// Start a document at `path`.
    pub fn create_with_options<P: AsRef<Path>>(path: P, options: WriterOptions) -> Result<Self> {
        let sink = OutputSink::open(path, options.mode)?;
        Ok(Self {
            options,
            sink,
            headings: HeadingState::new(),
            naming: Box::new(RandomNames),
            formatter: Box::new(RstGridTable),
            stats: WriteStats::new(),
        })
    }

    /// Run `f` against a new writer, then write the document.
    ///
    /// The document is written whether or not `f` succeeds, so the lines
    /// buffered before an error still reach the file. An error from `f` takes
    /// precedence over an error while writing.
    pub fn scope<P, F, T>(path: P, options: WriterOptions, f: F) -> Result<T>
    where
        P: AsRef<Path>,
        F: FnOnce(&mut RestWriter) -> Result<T>,
    {
        let mut writer = Self::create_with_options(path, options)?;
        let result = f(&mut writer);
        let path = writer.sink.path().to_path_buf();
        let flushed = writer.finish();

        match result {
            Ok(value) => flushed.map(|_| value),
            Err(e) => {
                if let Err(flush_err) = flushed {
                    log::error!("Failed to write {}: {}", path.display(), flush_err);
                }
                Err(e)
            }
        }
    }

    /// Use a custom naming strategy for unnamed images.
    pub fn with_naming(mut self, naming: impl NameStrategy + 'static) -> Self {
        self.naming = Box::new(naming);
        self
    }

    /// Use a custom grid formatter for tables.
    pub fn with_formatter(mut self, formatter: impl GridFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Lines buffered so far.
    pub fn lines(&self) -> &[String] {
        self.sink.lines()
    }

    /// Statistics for the blocks written so far.
    pub fn stats(&self) -> &WriteStats {
        &self.stats
    }

    /// Current heading depth.
    pub fn heading_depth(&self) -> u8 {
        self.headings.current()
    }

    /// Write the document file and return the statistics.
    pub fn finish(self) -> Result<WriteStats> {
        let RestWriter { sink, stats, .. } = self;
        sink.finish()?;
        Ok(stats)
    }

    /// Write a whole content stream.
    ///
    /// The first item is used as the title if it is one, otherwise a default
    /// title is written. The subtitle comes from the first item after the
    /// title (or the first item when no title was given) if it is a
    /// subtitle, otherwise a default subtitle is written. Runs of sentences
    /// are written together as one paragraph block.
    pub fn write_all<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = ContentItem>,
    {
        let mut items = items.into_iter();
        let mut pending = None;

        match items.next() {
            Some(ContentItem::Title { text, level }) => {
                self.write_title(&text, level);
                match items.next() {
                    Some(ContentItem::Subtitle { text }) => self.write_title(&text, 2),
                    other => {
                        self.write_default_subtitle();
                        pending = other;
                    }
                }
            }
            Some(ContentItem::Subtitle { text }) => {
                self.write_default_title();
                self.write_title(&text, 2);
            }
            other => {
                self.write_default_title();
                self.write_default_subtitle();
                pending = other;
            }
        }

        let mut sentences: Vec<String> = Vec::new();
        for item in pending.into_iter().chain(items) {
            if !item.is_sentence() && !sentences.is_empty() {
                self.write_sentences(&sentences);
                sentences.clear();
            }

            match item {
                ContentItem::Sentence { text } => sentences.push(text),
                ContentItem::Title { text, level } => self.write_title(&text, level),
                ContentItem::Subtitle { text } => self.write_title(&text, 2),
                ContentItem::Heading { text, level } => self.write_header(&text, level),
                ContentItem::Transition { length, symbol } => {
                    self.write_transition(length, symbol)
                }
                ContentItem::Paragraph { text } => self.write_paragraph(&text),
                ContentItem::Table(table) => self.write_table(&table)?,
                ContentItem::Image(mut image) => self.write_image(&mut image)?,
            }
        }

        if !sentences.is_empty() {
            self.write_sentences(&sentences);
        }
        Ok(())
    }

    /// Write an over- and underlined title using the symbol for `depth`.
    pub fn write_title(&mut self, title: &str, depth: u8) {
        let rule = underline(title, symbol_for(depth));
        self.sink.add_block([rule.clone(), title.to_string(), rule]);
        self.stats.title_count += 1;
    }

    fn write_default_title(&mut self) {
        let title = self.options.default_title.clone();
        self.write_title(&title, 1);
    }

    fn write_default_subtitle(&mut self) {
        let subtitle = self.options.default_subtitle.clone();
        self.write_title(&subtitle, 2);
    }

    /// Write a section heading, normalizing the requested level.
    pub fn write_header(&mut self, header: &str, level: u8) {
        let resolved = self.headings.next(level);
        if !resolved.honored {
            log::debug!(
                "Heading {:?} requested level {}, using {}",
                header,
                level,
                resolved.depth
            );
            self.stats.adjusted_heading_count += 1;
        }
        self.sink
            .add_block([header.to_string(), underline(header, resolved.symbol)]);
        self.stats.heading_count += 1;
    }

    /// Write a transition line.
    pub fn write_transition(&mut self, length: usize, symbol: char) {
        let line: String = std::iter::repeat(symbol).take(length).collect();
        self.sink.add_block([line]);
        self.stats.transition_count += 1;
    }

    /// Write a paragraph.
    pub fn write_paragraph(&mut self, text: &str) {
        self.sink.add_block([text]);
        self.stats.paragraph_count += 1;
    }

    /// Write sentences as consecutive lines of one paragraph.
    pub fn write_sentences(&mut self, sentences: &[String]) {
        self.sink.add_block(sentences.iter().cloned());
        self.stats.sentence_run_count += 1;
        self.stats.sentence_count += sentences.len() as u32;
    }

    /// Write a table with its footnotes.
    pub fn write_table(&mut self, table: &Table) -> Result<()> {
        let block = render_table(table, &*self.formatter)?;
        self.stats.table_count += 1;
        self.stats.footnote_line_count += block.footnote_lines as u32;
        self.sink.add_block(block.lines);
        Ok(())
    }

    /// Write the image next to the document and reference it.
    ///
    /// Unnamed images get a name from the writer's naming strategy; the name
    /// is stored on `image`.
    pub fn write_image(&mut self, image: &mut Image) -> Result<()> {
        let filename = image.filename(&*self.naming);
        let path = self.sink.dir().join(&filename);
        fs::write(&path, image.data())?;
        log::debug!("Wrote image {} ({} bytes)", path.display(), image.size());

        let align = format!("    :align: {}", self.options.image_align);
        let lines = match image.label() {
            Some(label) => vec![
                format!(".. figure:: {}", filename),
                align,
                String::new(),
                format!("    {}", label),
            ],
            None => vec![format!(".. image:: {}", filename), align],
        };
        self.sink.add_block(lines);
        self.stats.image_count += 1;
        Ok(())
    }
}

impl std::fmt::Debug for RestWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestWriter")
            .field("path", &self.sink.path())
            .field("options", &self.options)
            .field("heading_depth", &self.headings.current())
            .field("lines", &self.sink.lines().len())
            .finish()
    }
}
