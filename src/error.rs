//! Error taxonomy for card generation.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures originating in the card generation pipeline.
///
/// Rendering failures are not represented here; the exporter reports them
/// through `anyhow` at its own boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// A substitution target is missing from the template. Always fatal:
    /// a card with an unfilled field is not a valid partial result.
    #[error("text element with id '{0}' not found in template")]
    FieldNotFound(String),

    /// The template markup could not be parsed into a document tree.
    #[error("malformed SVG markup: {0}")]
    Parse(String),

    /// Reading a template or writing a card failed.
    #[error("{context} {}", path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(context: &'static str, path: &std::path::Path, source: io::Error) -> Self {
        Error::Io {
            context,
            path: path.to_path_buf(),
            source,
        }
    }
}
