//! Statistics collected while writing a document.

use serde::{Deserialize, Serialize};

/// Counts of the blocks emitted by a writer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteStats {
    /// Title and subtitle blocks, including defaults
    pub title_count: u32,

    /// Heading blocks
    pub heading_count: u32,

    /// Headings whose requested level was not honored
    pub adjusted_heading_count: u32,

    /// Paragraph items
    pub paragraph_count: u32,

    /// Sentence runs flushed as paragraphs
    pub sentence_run_count: u32,

    /// Individual sentences
    pub sentence_count: u32,

    /// Tables
    pub table_count: u32,

    /// Footnote lines produced by wrapping
    pub footnote_line_count: u32,

    /// Images written as sidecar files
    pub image_count: u32,

    /// Transition lines
    pub transition_count: u32,
}

impl WriteStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &WriteStats) {
        self.title_count += other.title_count;
        self.heading_count += other.heading_count;
        self.adjusted_heading_count += other.adjusted_heading_count;
        self.paragraph_count += other.paragraph_count;
        self.sentence_run_count += other.sentence_run_count;
        self.sentence_count += other.sentence_count;
        self.table_count += other.table_count;
        self.footnote_line_count += other.footnote_line_count;
        self.image_count += other.image_count;
        self.transition_count += other.transition_count;
    }

    /// Total number of blocks emitted.
    pub fn block_count(&self) -> u32 {
        self.title_count
            + self.heading_count
            + self.paragraph_count
            + self.sentence_run_count
            + self.table_count
            + self.image_count
            + self.transition_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_stats_merge() {
        let mut stats1 = WriteStats::new();
        stats1.paragraph_count = 5;
        stats1.table_count = 2;

        let stats2 = WriteStats {
            paragraph_count: 3,
            table_count: 1,
            image_count: 4,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.paragraph_count, 8);
        assert_eq!(stats1.table_count, 3);
        assert_eq!(stats1.image_count, 4);
        assert_eq!(stats1.block_count(), 15);
    }
}
