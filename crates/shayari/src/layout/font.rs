//! Font-size tiers chosen from the length of a verse.

use std::fmt;

/// A discrete body font size selected by content length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontTier {
    /// 48px, up to 200 characters.
    Large,
    /// 36px, 201 to 300 characters.
    Medium,
    /// 32px, 301 to 400 characters.
    Small,
    /// 28px, anything longer.
    Compact,
}

impl FontTier {
    /// Pixel size of this tier.
    pub fn px(self) -> f32 {
        match self {
            Self::Large => 48.0,
            Self::Medium => 36.0,
            Self::Small => 32.0,
            Self::Compact => 28.0,
        }
    }
}

impl fmt::Display for FontTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.px())
    }
}

/// Maps verse length to a [`FontTier`].
///
/// A cheap stand-in for fitting text to the canvas: longer verses get smaller
/// type without measuring their rendered height up front.
///
/// # Examples
///
/// ```
/// # use shayari::layout::{FontScalingPolicy, FontTier};
/// assert_eq!(FontScalingPolicy::tier_for(200), FontTier::Large);
/// assert_eq!(FontScalingPolicy::size_for(201), 36.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FontScalingPolicy;

impl FontScalingPolicy {
    pub fn tier_for(char_count: usize) -> FontTier {
        match char_count {
            0..=200 => FontTier::Large,
            201..=300 => FontTier::Medium,
            301..=400 => FontTier::Small,
            _ => FontTier::Compact,
        }
    }

    pub fn size_for(char_count: usize) -> f32 {
        Self::tier_for(char_count).px()
    }

    /// Tier for a whole verse, line breaks included in the count.
    pub fn tier_for_text(text: &str) -> FontTier {
        Self::tier_for(text.chars().count())
    }
}
