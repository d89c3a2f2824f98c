//! Shayari Core Types and Definitions
//!
//! This crate provides the foundational types used by the shayari card
//! composition engine. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Cards**: The immutable card record handed to the renderer ([`card`] module)
//! - **Palettes**: The fixed background gradient table ([`palette`] module)
//! - **Draw**: Draw commands, text definitions and measurement ([`draw`] module)

pub mod card;
pub mod color;
pub mod draw;
pub mod geometry;
pub mod palette;
