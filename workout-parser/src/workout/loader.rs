//! Document loading utilities
//!
//! `DocumentLoader` reads workout text from a file or a string and runs pipelines on it.
//! Reading the file is the only I/O anywhere in the parser crate; the pipelines themselves
//! only ever see a `String`.
//!
//! # Example
//!
//! ```rust
//! use workout_parser::workout::loader::DocumentLoader;
//! use workout_parser::Sport;
//!
//! let output = DocumentLoader::from_path("opener.txt")?.parse(Sport::Bike)?;
//! let lines = DocumentLoader::from_string("- 5m z2\n").classify()?;
//! ```

use crate::workout::ast::Sport;
use crate::workout::error::ParseError;
use crate::workout::token::ClassifiedLine;
use crate::workout::transforms::standard::{
    classification_pipeline, workout_pipeline, CLASSIFICATION,
};
use crate::workout::transforms::{Staged, Transform};
use crate::workout::{ParseOptions, ParseOutput};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("could not read workout: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(DocumentLoader { source })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Run any pipeline that starts from source text.
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.source.clone())?)
    }

    /// Parse for `sport` with default limits.
    pub fn parse(&self, sport: Sport) -> Result<ParseOutput, LoaderError> {
        self.parse_with(&ParseOptions::new(sport))
    }

    pub fn parse_with(&self, options: &ParseOptions) -> Result<ParseOutput, LoaderError> {
        self.with(&workout_pipeline(options))
    }

    /// Classified lines with their lexical and classification diagnostics, without
    /// structuring or resolving anything.
    pub fn classify(&self) -> Result<Staged<Vec<ClassifiedLine>>, LoaderError> {
        self.with(&CLASSIFICATION)
    }

    /// Like [`DocumentLoader::classify`], but rejects input over the limits in `options`.
    pub fn classify_with(
        &self,
        options: &ParseOptions,
    ) -> Result<Staged<Vec<ClassifiedLine>>, LoaderError> {
        self.with(&classification_pipeline(options))
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::token::LineType;
    use std::io::Write;

    #[test]
    fn test_from_string_parses() {
        let output = DocumentLoader::from_string("# Easy\n- 30m z2\n")
            .parse(Sport::Bike)
            .unwrap();
        assert_eq!(output.document.title(), Some("Easy"));
        assert!(!output.has_errors());
    }

    #[test]
    fn test_classify_stops_before_structuring() {
        let staged = DocumentLoader::from_string("3x\n\n").classify().unwrap();
        assert_eq!(staged.value.len(), 2);
        assert_eq!(staged.value[1].kind, LineType::Blank);
        assert!(staged.diagnostics.is_empty());
    }

    #[test]
    fn test_limits_surface_as_errors() {
        let options = ParseOptions {
            max_lines: 1,
            ..ParseOptions::default()
        };
        let loader = DocumentLoader::from_string("- 5m z2\n- 5m z3\n");
        assert!(matches!(
            loader.parse_with(&options),
            Err(LoaderError::Parse(ParseError::InputTooLarge { .. }))
        ));
        assert!(matches!(
            loader.classify_with(&options),
            Err(LoaderError::Parse(ParseError::InputTooLarge { .. }))
        ));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "- 10m z1").unwrap();

        let loader = DocumentLoader::from_path(file.path()).unwrap();
        assert_eq!(loader.source(), "- 10m z1\n");
    }

    #[test]
    fn test_missing_path_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            DocumentLoader::from_path(dir.path().join("absent.txt")),
            Err(LoaderError::Io(_))
        ));
    }
}
