use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while converting a Markdown document to HTML.
///
/// Every variant aborts the whole document; there is no partial output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkdownError {
    /// An odd number of `**`, `_` or `` ` `` delimiters in a text run.
    #[error("invalid markdown syntax: unclosed inline element `{delimiter}`")]
    UnclosedDelimiter { delimiter: &'static str },
    #[error("invalid markdown syntax: image section not closed")]
    UnclosedImage,
    #[error("invalid markdown syntax: link section not closed")]
    UnclosedLink,
    /// A heading marker with nothing after it.
    #[error("invalid heading level: {0}")]
    InvalidHeadingLevel(usize),
    #[error("invalid code block")]
    InvalidCodeBlock,
    #[error("invalid quote block")]
    InvalidQuoteBlock,
    #[error("invalid html: leaf node has no value")]
    MissingValue,
    #[error("invalid html: parent node has no tag")]
    MissingTag,
    #[error("invalid html: parent node has no children")]
    MissingChildren,
}

/// Errors raised while generating pages on disk.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("there is no h1 title")]
    MissingTitle,
    #[error("failed to render {path}: {source}")]
    Markdown {
        path: PathBuf,
        source: MarkdownError,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn markdown(path: impl Into<PathBuf>, source: MarkdownError) -> Self {
        Self::Markdown {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = MarkdownError> = std::result::Result<T, E>;
