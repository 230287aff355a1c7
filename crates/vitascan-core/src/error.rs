//! Error types for Vitascan.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing document path argument.")]
    MissingArgument,

    #[error("Document extraction failed: {0}")]
    Extraction(String),

    #[error("NER model unavailable: {0}")]
    MissingModel(String),

    #[error("{0}")]
    Unexpected(String),
}

impl Error {
    /// Taxonomy name carried in failure envelopes.
    pub fn category(&self) -> &'static str {
        match self {
            Error::MissingArgument => "MissingArgument",
            Error::Extraction(_) => "ExtractionFailure",
            Error::MissingModel(_) => "MissingModel",
            Error::Unexpected(_) => "UnexpectedFailure",
        }
    }

    /// Human-readable envelope message: extraction and missing-model
    /// failures surface their reason verbatim, anything else is prefixed
    /// with its taxonomy name.
    pub fn envelope_message(&self) -> String {
        match self {
            Error::MissingArgument | Error::Extraction(_) | Error::MissingModel(_) => {
                self.to_string()
            }
            other => format!("{}: {}", other.category(), other),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(Error::MissingArgument.category(), "MissingArgument");
        assert_eq!(
            Error::Extraction("bad xref".into()).category(),
            "ExtractionFailure"
        );
        assert_eq!(
            Error::MissingModel("no backend".into()).category(),
            "MissingModel"
        );
        assert_eq!(
            Error::Unexpected("boom".into()).category(),
            "UnexpectedFailure"
        );
    }

    #[test]
    fn test_envelope_message_prefixes_unexpected_only() {
        let msg = Error::Unexpected("boom".into()).envelope_message();
        assert_eq!(msg, "UnexpectedFailure: boom");

        let msg = Error::Extraction("bad xref".into()).envelope_message();
        assert_eq!(msg, "Document extraction failed: bad xref");
    }
}
