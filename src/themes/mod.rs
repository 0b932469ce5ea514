//! Themes: named symbol pools used to deal a game.
//!
//! ## Key Types
//!
//! - `Theme`: name, symbol pool, pair count, display color
//! - `ThemeCatalog`: ordered presets, runtime additions, TOML loading
//!
//! A theme with fewer symbols than pairs still deals; the extra pairs show
//! `FALLBACK_SYMBOL`.

pub mod catalog;
pub mod theme;

pub use catalog::{ThemeCatalog, ThemeError};
pub use theme::{Theme, ThemeColor, FALLBACK_SYMBOL};
