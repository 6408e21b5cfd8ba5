//! Configuration types for TypeScript emission.

/// Struct tag key consulted for field renames and options.
pub const DEFAULT_TAG_KEY: &str = "json";

/// Configuration for TypeScript emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Whether exported declarations get the `export` keyword
    pub(crate) export: bool,
    /// Whether documentation comments are emitted
    pub(crate) comments: bool,
    /// Struct tag key for field metadata
    pub(crate) tag_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export: true,
            comments: false,
            tag_key: DEFAULT_TAG_KEY.to_owned(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether exported declarations are emitted with `export`.
    pub fn export(mut self, value: bool) -> Self {
        self.export = value;
        self
    }

    /// Set whether documentation comments are emitted.
    pub fn comments(mut self, value: bool) -> Self {
        self.comments = value;
        self
    }

    /// Set the struct tag key (default `json`).
    pub fn tag_key(mut self, value: impl Into<String>) -> Self {
        self.tag_key = value.into();
        self
    }

    pub fn comments_enabled(&self) -> bool {
        self.comments
    }
}
