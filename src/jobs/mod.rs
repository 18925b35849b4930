//! Runnable document variants behind the `luxbook` command line.

pub mod booklet;
pub mod chapters;
pub mod intro;
pub mod run_all;

use std::path::PathBuf;

use crate::builder::{BookletRenderer, PdfOutput};
use crate::chart::Theme;
use crate::error::BookletError;
use crate::model::{Cover, Section};

/// Shared settings for a document run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Directory receiving PDFs and the `images/` subdirectory.
    pub out_dir: PathBuf,
    /// Path of the optional study-notes text file.
    pub study: PathBuf,
    /// Chart color theme.
    pub theme: Theme,
}

impl RunConfig {
    /// Creates a config with the default study-notes path and theme.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            study: PathBuf::from("schools_information.txt"),
            theme: Theme::standard(),
        }
    }
}

/// Renders a document, attaching the section outline when built with the
/// `bookmarks` feature.
pub fn render_document(
    renderer: &BookletRenderer,
    cover: &Cover,
    sections: &[Section],
) -> Result<PdfOutput, BookletError> {
    #[cfg(feature = "bookmarks")]
    {
        renderer.render_with_bookmarks(cover, sections)
    }
    #[cfg(not(feature = "bookmarks"))]
    {
        renderer.render(cover, sections)
    }
}
