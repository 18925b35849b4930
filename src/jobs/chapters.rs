//! The standalone-chapter variant: one deep-dive PDF per parameter.

use std::fs;
use std::path::PathBuf;

use super::{render_document, RunConfig};
use crate::booklet::chapter_document;
use crate::builder::BookletRenderer;
use crate::content;
use crate::error::BookletError;

/// Subdirectory receiving the chapter PDFs.
pub const CHAPTERS_DIR: &str = "chapters";

/// Renders every chapter document and returns the written paths.
pub fn run(config: &RunConfig) -> Result<Vec<PathBuf>, BookletError> {
    let chapters_dir = config.out_dir.join(CHAPTERS_DIR);
    fs::create_dir_all(&chapters_dir)?;

    let mut written = Vec::new();
    for chapter in content::chapters() {
        let (cover, sections) = chapter_document(&chapter);
        let renderer = BookletRenderer::new(chapter.title).with_footer_note(chapter.title);
        let output = render_document(&renderer, &cover, &sections)?;

        let path = chapters_dir.join(format!("{}.pdf", chapter.stem));
        fs::write(&path, &output.bytes)?;
        println!("Generated {} ({} bytes)", path.display(), output.bytes.len());
        written.push(path);
    }
    Ok(written)
}
