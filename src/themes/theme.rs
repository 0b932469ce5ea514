//! Themes: named symbol pools with a pair count and a display color.

use log::warn;
use serde::{Deserialize, Serialize};

/// Content dealt for pairs beyond the end of a theme's symbol pool.
pub const FALLBACK_SYMBOL: &str = "⁉️";

/// Display color for a theme's card backs.
///
/// Named colors only; the presentation layer maps them to its palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeColor {
    #[default]
    Orange,
    Red,
    Yellow,
    Green,
    Mint,
    Teal,
    Cyan,
    Blue,
    Indigo,
    Purple,
    Pink,
    Brown,
    Gray,
}

/// A named content set for one kind of game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub symbols: Vec<String>,
    pub pair_count: usize,
    #[serde(default)]
    pub color: ThemeColor,
}

impl Theme {
    /// Create a theme.
    pub fn new<I, S>(name: impl Into<String>, symbols: I, pair_count: usize, color: ThemeColor) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            symbols: symbols.into_iter().map(Into::into).collect(),
            pair_count,
            color,
        }
    }

    /// Content for a pair index, or `FALLBACK_SYMBOL` past the pool.
    #[must_use]
    pub fn symbol_for_pair(&self, pair_index: usize) -> String {
        self.symbols
            .get(pair_index)
            .cloned()
            .unwrap_or_else(|| FALLBACK_SYMBOL.to_string())
    }

    /// Pairs that would be dealt with the fallback symbol.
    #[must_use]
    pub fn missing_symbols(&self) -> usize {
        self.pair_count.saturating_sub(self.symbols.len())
    }

    pub(crate) fn warn_if_short(&self) {
        let missing = self.missing_symbols();
        if missing > 0 {
            warn!(
                "theme {:?} asks for {} pairs but has {} symbols; {} pairs will show {}",
                self.name,
                self.pair_count,
                self.symbols.len(),
                missing,
                FALLBACK_SYMBOL
            );
        }
    }

    pub fn animals() -> Self {
        Self::new(
            "animals",
            ["🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐻‍❄️", "🐨", "🐯", "🦁", "🐮", "🐷", "🐸", "🐵"],
            10,
            ThemeColor::Purple,
        )
    }

    pub fn foods() -> Self {
        Self::new(
            "foods",
            [
                "🥐", "🥯", "🍞", "🥖", "🥨", "🥞", "🧇", "🍗", "🌭", "🍔", "🍟", "🍕", "🥪", "🥙", "🧆", "🌮", "🌯",
                "🫔", "🥗", "🥘", "🍣", "🍜", "🍱", "🥮", "🍩", "🍡",
            ],
            10,
            ThemeColor::Green,
        )
    }

    pub fn fruits() -> Self {
        Self::new(
            "fruits",
            [
                "🍎", "🍌", "🍇", "🍈", "🍓", "🍑", "🍉", "🥝", "🍐", "🍏", "🍊", "🍋", "🫐", "🥭", "🍒", "🥥", "🍋‍🟩",
                "🍍",
            ],
            10,
            ThemeColor::Indigo,
        )
    }

    pub fn products() -> Self {
        Self::new(
            "products",
            ["⌚️", "📱", "💻", "🖥️", "🎧", "🖨️", "📷", "🎥", "🎙️", "📟", "☎️", "🕹️", "📼", "📠", "📻", "💽", "📺"],
            10,
            ThemeColor::Mint,
        )
    }

    pub fn sports() -> Self {
        Self::new(
            "sports",
            ["⚽️", "🏀", "🏈", "⚾️", "🎾", "🏐", "🏉", "🥏", "🎱", "🪀", "🏓"],
            10,
            ThemeColor::Pink,
        )
    }

    pub fn cars() -> Self {
        Self::new(
            "cars",
            ["🚗", "🚕", "🚙", "🚌", "🚎", "🏎️", "🚓", "🚑", "🚒", "🚐", "🛻", "🚚", "🚛", "🚜"],
            10,
            ThemeColor::Teal,
        )
    }

    pub fn landmarks() -> Self {
        Self::new(
            "landmarks",
            ["🗿", "🗽", "🗼", "🏯", "🗻", "🕋", "⛩️", "🕌", "🕍", "⛪️", "🏛️", "🛕", "🏰"],
            10,
            ThemeColor::Brown,
        )
    }

    /// The built-in presets, in menu order.
    #[must_use]
    pub fn builtin() -> Vec<Self> {
        vec![
            Self::animals(),
            Self::foods(),
            Self::fruits(),
            Self::products(),
            Self::sports(),
            Self::cars(),
            Self::landmarks(),
        ]
    }
}
