//! Crate-wide error type for document generation runs.

use std::fmt;
use std::io;

use crate::chart::ChartError;
use crate::params::CatalogError;

#[cfg(feature = "bookmarks")]
use crate::bookmarks::OutlineError;

/// Anything that can stop a document variant from being produced.
#[derive(Debug)]
pub enum BookletError {
    /// The authored catalog violates its invariants.
    Catalog(CatalogError),
    /// A chart failed to draw or encode.
    Chart(ChartError),
    /// Font loading or PDF rendering failed.
    Document(genpdf::error::Error),
    /// Reading input or writing output failed.
    Io(io::Error),
    /// Attaching the PDF outline failed.
    #[cfg(feature = "bookmarks")]
    Outline(OutlineError),
}

impl fmt::Display for BookletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(err) => write!(f, "invalid parameter catalog: {err}"),
            Self::Chart(err) => write!(f, "chart rendering failed: {err}"),
            Self::Document(err) => write!(f, "document rendering failed: {err}"),
            Self::Io(err) => write!(f, "I/O failure: {err}"),
            #[cfg(feature = "bookmarks")]
            Self::Outline(err) => write!(f, "bookmark outline failed: {err}"),
        }
    }
}

impl std::error::Error for BookletError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog(err) => Some(err),
            Self::Chart(err) => Some(err),
            Self::Document(err) => Some(err),
            Self::Io(err) => Some(err),
            #[cfg(feature = "bookmarks")]
            Self::Outline(err) => Some(err),
        }
    }
}

impl From<CatalogError> for BookletError {
    fn from(err: CatalogError) -> Self {
        Self::Catalog(err)
    }
}

impl From<ChartError> for BookletError {
    fn from(err: ChartError) -> Self {
        Self::Chart(err)
    }
}

impl From<genpdf::error::Error> for BookletError {
    fn from(err: genpdf::error::Error) -> Self {
        Self::Document(err)
    }
}

impl From<io::Error> for BookletError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(feature = "bookmarks")]
impl From<OutlineError> for BookletError {
    fn from(err: OutlineError) -> Self {
        Self::Outline(err)
    }
}
