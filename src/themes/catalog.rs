//! Theme catalog: ordered, append-only collection of themes.
//!
//! The catalog starts with the built-in presets and can be extended at
//! runtime or loaded from a TOML file:
//!
//! ```toml
//! [[themes]]
//! name = "weather"
//! symbols = ["☀️", "🌧️", "❄️", "🌈"]
//! pair_count = 4      # optional, defaults to the number of symbols
//! color = "blue"      # optional, defaults to "orange"
//! ```
//!
//! Duplicate names are allowed; `find` returns the first.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::theme::{Theme, ThemeColor};
use crate::core::SessionConfig;
use crate::session::GameSession;

/// Errors loading theme configuration.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid theme configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("theme #{0} has an empty name")]
    EmptyName(usize),

    #[error("theme {0:?} has no symbols")]
    EmptySymbols(String),
}

#[derive(Deserialize)]
struct ThemeFile {
    #[serde(default)]
    themes: Vec<ThemeEntry>,
}

#[derive(Deserialize)]
struct ThemeEntry {
    name: String,
    symbols: Vec<String>,
    pair_count: Option<usize>,
    #[serde(default)]
    color: ThemeColor,
}

/// Ordered collection of themes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::new(Theme::builtin())
    }
}

impl ThemeCatalog {
    /// Catalog holding exactly these themes.
    #[must_use]
    pub fn new(themes: Vec<Theme>) -> Self {
        Self { themes }
    }

    /// Catalog with no themes.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Append a theme. Names need not be unique.
    pub fn add(&mut self, theme: Theme) {
        self.themes.push(theme);
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Theme> {
        self.themes.get(index)
    }

    /// First theme with this name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|theme| theme.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }

    #[must_use]
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Start a game with this theme and default settings.
    #[must_use]
    pub fn instantiate(&self, theme: &Theme) -> GameSession<String> {
        self.instantiate_with(theme, SessionConfig::default())
    }

    /// Start a game with this theme. The theme's pair count overrides
    /// `config.pair_count`; everything else comes from `config`.
    #[must_use]
    pub fn instantiate_with(&self, theme: &Theme, config: SessionConfig) -> GameSession<String> {
        theme.warn_if_short();
        let config = config.with_pair_count(theme.pair_count);
        GameSession::new(config, |pair_index| theme.symbol_for_pair(pair_index))
    }

    /// Parse themes from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = toml::from_str(text)?;

        let mut themes = Vec::with_capacity(file.themes.len());
        for (position, entry) in file.themes.into_iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(ThemeError::EmptyName(position));
            }
            if entry.symbols.is_empty() {
                return Err(ThemeError::EmptySymbols(entry.name));
            }
            let pair_count = entry.pair_count.unwrap_or(entry.symbols.len());
            themes.push(Theme::new(entry.name, entry.symbols, pair_count, entry.color));
        }
        Ok(Self::new(themes))
    }

    /// Load themes from a TOML file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Append every theme from another catalog.
    pub fn extend(&mut self, other: ThemeCatalog) {
        self.themes.extend(other.themes);
    }
}

impl<'a> IntoIterator for &'a ThemeCatalog {
    type Item = &'a Theme;
    type IntoIter = std::slice::Iter<'a, Theme>;

    fn into_iter(self) -> Self::IntoIter {
        self.themes.iter()
    }
}
