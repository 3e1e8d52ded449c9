//! Presentation helpers: styled result panels and accent colours.

pub mod color;
pub mod panel;

pub use color::random_color;
pub use panel::{Palette, Panel, ResultKind};
