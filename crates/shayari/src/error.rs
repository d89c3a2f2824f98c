//! Error types for shayari operations.
//!
//! [`ShayariError`] is the single error type returned by the renderer, the
//! card store and configuration handling.

use std::io;

use thiserror::Error;

use shayari_core::card::CardError;

use crate::{export, store::StoreError};

/// The main error type for shayari operations.
///
/// Every failure is atomic: when a render returns an error no image bytes
/// are produced.
#[derive(Debug, Error)]
pub enum ShayariError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input was rejected before rendering (blank text, bad config).
    #[error("Validation error: {0}")]
    Validation(String),

    /// No drawing surface could be acquired.
    #[error("Drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// The scene could not be turned into image bytes.
    #[error("Encode failure: {0}")]
    EncodeFailure(String),

    #[error("Card store error: {0}")]
    Store(#[from] StoreError),
}

impl From<export::Error> for ShayariError {
    fn from(error: export::Error) -> Self {
        match error {
            export::Error::SurfaceUnavailable { .. } => Self::SurfaceUnavailable(error.to_string()),
            export::Error::Svg(_) | export::Error::Encode(_) => {
                Self::EncodeFailure(error.to_string())
            }
        }
    }
}

impl From<CardError> for ShayariError {
    fn from(error: CardError) -> Self {
        Self::Validation(error.to_string())
    }
}
