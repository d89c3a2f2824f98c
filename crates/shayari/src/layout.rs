//! Text layout for cards.
//!
//! This module decides where every line of a card's text goes: which font
//! size to use, where to break lines and at which y each line is painted.
//!
//! # Pipeline Position
//!
//! ```text
//! CardData + RenderMode
//!     ↓ layout (this module)
//! TextLayout
//!     ↓ compose
//! Scene
//!     ↓ export
//! PNG / SVG bytes
//! ```
//!
//! # Submodules
//!
//! - `font` - [`FontScalingPolicy`]: verse length to font-size tier
//! - `wrap` - [`TextLayoutEngine`]: greedy word wrap
//! - `layout_spec` - [`LayoutSpec`]: the per-mode parameters
//! - `engine` - [`LayoutEngine`]: positions body, separator and attribution

mod engine;
mod font;
mod layout_spec;
mod wrap;

pub use engine::{LayoutEngine, PositionedLine, Separator, TextLayout};
pub use font::{FontScalingPolicy, FontTier};
pub use layout_spec::{
    AttributionSize, AttributionSpec, BodyFontSize, HorizontalAlignment, LayoutSpec, LineSpacing,
    SeparatorSpec, VerticalPlacement, card_text_shadow, hairline_color,
};
pub use wrap::{BlankLinePolicy, TextLayoutEngine, WrappedLine};
