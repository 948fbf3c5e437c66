//! Shared utilities.

pub mod colormaps;

pub use colormaps::ColorPalette;
