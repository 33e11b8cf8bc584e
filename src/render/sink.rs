//! Scoped line buffer that writes the document file exactly once.

use super::WriteMode;
use crate::error::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Buffered document output.
///
/// The containing directory is created when the sink is opened. Lines are
/// written by [`OutputSink::finish`]; if the sink is dropped without being
/// finished (early return, `?`, unwinding), the buffered lines are written
/// from `Drop` and any failure is logged.
#[derive(Debug)]
pub struct OutputSink {
    path: PathBuf,
    dir: PathBuf,
    mode: WriteMode,
    lines: Vec<String>,
    flushed: bool,
}

impl OutputSink {
    /// Open a sink for `path`, creating its directory if needed.
    pub fn open<P: AsRef<Path>>(path: P, mode: WriteMode) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;
        log::debug!("Opened document sink at {}", path.display());

        Ok(Self {
            path,
            dir,
            mode,
            lines: Vec::new(),
            flushed: false,
        })
    }

    /// Target document path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory containing the document.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Lines buffered so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Append a block, preceded by a blank separator line.
    pub fn add_block<I>(&mut self, lines: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.lines.push(String::new());
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    /// Write the buffer and close the sink.
    pub fn finish(mut self) -> Result<()> {
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        if self.flushed {
            return Ok(());
        }
        self.flushed = true;

        let mut content = self.lines.join("\n");
        content.push('\n');

        let mut file = match self.mode {
            WriteMode::Truncate => OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&self.path)?,
            WriteMode::Append => OpenOptions::new()
                .append(true)
                .create(true)
                .open(&self.path)?,
        };
        file.write_all(content.as_bytes())?;

        log::debug!(
            "Wrote {} lines to {}",
            self.lines.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl Drop for OutputSink {
    fn drop(&mut self) {
        if !self.flushed {
            if let Err(e) = self.flush() {
                log::error!("Failed to write {}: {}", self.path.display(), e);
            }
        }
    }
}
