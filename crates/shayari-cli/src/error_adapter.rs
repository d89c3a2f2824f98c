//! Error adapter for converting CLI errors to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Malformed card
//! files are reported with a labelled snippet of the offending TOML; every
//! other error gets a stable diagnostic code and, where one exists, a hint.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use shayari::{ShayariError, store::StoreError};

use crate::{CardFileError, CliError};

/// Adapter for a card file that failed to parse.
pub struct CardFileAdapter<'a> {
    err: &'a CardFileError,
    /// Source code for displaying snippets
    src: &'a str,
}

impl<'a> CardFileAdapter<'a> {
    pub fn new(err: &'a CardFileError) -> Self {
        Self {
            err,
            src: err.src(),
        }
    }
}

impl fmt::Debug for CardFileAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardFileAdapter")
            .field("path", &self.err.path())
            .field("span", &self.err.span())
            .finish()
    }
}

impl fmt::Display for CardFileAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.err, f)
    }
}

impl std::error::Error for CardFileAdapter<'_> {}

impl MietteDiagnostic for CardFileAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("shayari::card_file"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "each [[cards]] table needs an integer `id` and a `text`; `author` and `background` are optional",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = SourceSpan::from(self.err.span()?);
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some(self.err.message().to_string()), span),
        )))
    }
}

/// Adapter for [`ShayariError`], which carries no source location.
pub struct ErrorAdapter<'a>(pub &'a ShayariError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ShayariError::Io(_) => "shayari::io",
            ShayariError::Validation(_) => "shayari::validation",
            ShayariError::SurfaceUnavailable(_) => "shayari::surface",
            ShayariError::EncodeFailure(_) => "shayari::encode",
            ShayariError::Store(_) => "shayari::store",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            ShayariError::Validation(_) => {
                "check that the card text is not blank and that the config colours are valid"
            }
            ShayariError::Store(StoreError::DuplicateId(_)) => {
                "card ids must be unique within a card file"
            }
            ShayariError::Store(StoreError::NotFound(_)) => {
                "use an id listed in the card file"
            }
            ShayariError::Store(StoreError::Card(_)) => "every card needs non-blank text",
            ShayariError::Io(_)
            | ShayariError::SurfaceUnavailable(_)
            | ShayariError::EncodeFailure(_) => return None,
        };
        Some(Box::new(help))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A card file error with a source snippet.
    CardFile(CardFileAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::CardFile(c) => fmt::Display::fmt(c, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::CardFile(_) => None,
            Reportable::Error(e) => std::error::Error::source(e),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::CardFile(c) => c.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::CardFile(c) => c.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::CardFile(c) => c.source_code(),
            Reportable::Error(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::CardFile(c) => c.labels(),
            Reportable::Error(_) => None,
        }
    }
}

/// Convert a [`CliError`] into a reportable error.
pub fn to_reportable(err: &CliError) -> Reportable<'_> {
    match err {
        CliError::CardFile(err) => Reportable::CardFile(CardFileAdapter::new(err)),
        CliError::Shayari(err) => Reportable::Error(ErrorAdapter(err)),
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use shayari::card::CardId;

    use super::*;
    use crate::card_file;

    fn code_of(err: ShayariError) -> String {
        let cli = CliError::Shayari(err);
        to_reportable(&cli).code().unwrap().to_string()
    }

    #[test]
    fn test_codes_per_variant() {
        assert_eq!(code_of(io::Error::other("x").into()), "shayari::io");
        assert_eq!(
            code_of(ShayariError::Validation("x".to_string())),
            "shayari::validation"
        );
        assert_eq!(
            code_of(ShayariError::SurfaceUnavailable("x".to_string())),
            "shayari::surface"
        );
        assert_eq!(
            code_of(ShayariError::EncodeFailure("x".to_string())),
            "shayari::encode"
        );
        assert_eq!(
            code_of(StoreError::NotFound(CardId::new(1)).into()),
            "shayari::store"
        );
    }

    #[test]
    fn test_store_errors_have_help() {
        let cli = CliError::from(StoreError::DuplicateId(CardId::new(1)));
        let reportable = to_reportable(&cli);
        assert_eq!(
            reportable.help().unwrap().to_string(),
            "card ids must be unique within a card file"
        );

        let cli = CliError::from(io::Error::other("disk full"));
        assert!(to_reportable(&cli).help().is_none());
    }

    #[test]
    fn test_card_file_error_has_snippet() {
        let err = card_file::load("bad.toml", "[[cards]]\nid = \"one\"\n").unwrap_err();
        let reportable = to_reportable(&err);
        assert!(matches!(reportable, Reportable::CardFile(_)));
        assert_eq!(reportable.code().unwrap().to_string(), "shayari::card_file");
        assert!(reportable.source_code().is_some());
        assert_eq!(reportable.labels().unwrap().count(), 1);
        assert_eq!(reportable.to_string(), "invalid card file bad.toml");
    }

    #[test]
    fn test_report_renders_code() {
        let cli = CliError::from(StoreError::NotFound(CardId::new(9)));
        let mut out = String::new();
        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
            .render_report(&mut out, &to_reportable(&cli))
            .unwrap();
        assert!(out.contains("shayari::store"));
        assert!(out.contains("no card with id 9"));
    }
}
