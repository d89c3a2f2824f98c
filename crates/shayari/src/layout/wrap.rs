//! Greedy word wrap.
//!
//! Text is split into paragraphs on `\n`, then each paragraph is filled word
//! by word until the next word would overflow the maximum width. Words are
//! never broken: a word wider than the limit gets a line of its own.

use log::trace;

/// What to do with paragraphs that contain only whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankLinePolicy {
    /// Skip the paragraph entirely.
    Drop,
    /// Emit a [`WrappedLine::Blank`] so the paragraph keeps its vertical space.
    Gap,
}

/// One output line of [`TextLayoutEngine::wrap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrappedLine {
    Text(String),
    Blank,
}

impl WrappedLine {
    /// The line's text; empty for blank lines.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Blank => "",
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

/// Breaks verse text into display lines bounded by a pixel width.
///
/// # Examples
///
/// ```
/// # use shayari::layout::{BlankLinePolicy, TextLayoutEngine};
/// let engine = TextLayoutEngine::new(BlankLinePolicy::Drop);
/// // Every character is 10px wide
/// let lines = engine.wrap("alpha beta gamma", 110.0, |s| s.chars().count() as f32 * 10.0);
/// let lines: Vec<_> = lines.iter().map(|line| line.text()).collect();
/// assert_eq!(lines, ["alpha beta", "gamma"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextLayoutEngine {
    blank_lines: BlankLinePolicy,
}

impl TextLayoutEngine {
    pub fn new(blank_lines: BlankLinePolicy) -> Self {
        Self { blank_lines }
    }

    /// Wraps `text` so that no multi-word line is wider than `max_width`.
    ///
    /// `measure` returns the painted width of a candidate line, trailing
    /// space included.
    pub fn wrap<F>(&self, text: &str, max_width: f32, measure: F) -> Vec<WrappedLine>
    where
        F: Fn(&str) -> f32,
    {
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            if paragraph.trim().is_empty() {
                if self.blank_lines == BlankLinePolicy::Gap {
                    lines.push(WrappedLine::Blank);
                }
                continue;
            }

            let mut current = String::new();
            for word in paragraph.split(' ') {
                let candidate = format!("{current}{word} ");
                if measure(&candidate) > max_width && !current.trim().is_empty() {
                    lines.push(WrappedLine::Text(current.trim().to_string()));
                    current = format!("{word} ");
                } else {
                    current = candidate;
                }
            }

            if !current.trim().is_empty() {
                lines.push(WrappedLine::Text(current.trim().to_string()));
            }
        }

        trace!(lines:?; "Wrapped text");
        lines
    }
}
