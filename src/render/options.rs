//! Writer options and configuration.

/// Title used when the stream does not start with one.
pub const DEFAULT_TITLE: &str = "Document Title";

/// Subtitle used when the stream does not supply one.
pub const DEFAULT_SUBTITLE: &str = "Subtitle";

/// Options for writing a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterOptions {
    /// Title emitted when the first item is not a title
    pub default_title: String,

    /// Subtitle emitted when neither of the first two items supplies one
    pub default_subtitle: String,

    /// Value of the `:align:` option on figures and images
    pub image_align: String,

    /// How the document file is opened
    pub mode: WriteMode,
}

impl WriterOptions {
    /// Create new writer options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default title.
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Set the default subtitle.
    pub fn with_default_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.default_subtitle = subtitle.into();
        self
    }

    /// Set the image alignment.
    pub fn with_image_align(mut self, align: impl Into<String>) -> Self {
        self.image_align = align.into();
        self
    }

    /// Set the file write mode.
    pub fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_TITLE.to_string(),
            default_subtitle: DEFAULT_SUBTITLE.to_string(),
            image_align: "center".to_string(),
            mode: WriteMode::Truncate,
        }
    }
}

/// How the output file is opened when the buffer is flushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Replace any existing content
    #[default]
    Truncate,
    /// Append to existing content
    Append,
}
