//! The standalone introduction document.

use std::fs;
use std::path::PathBuf;

use super::{render_document, RunConfig};
use crate::booklet::intro_document;
use crate::builder::BookletRenderer;
use crate::error::BookletError;

/// File name of the introduction document.
pub const OUTPUT_FILE: &str = "introduction.pdf";

/// Renders the introduction document and returns the written path.
pub fn run(config: &RunConfig) -> Result<PathBuf, BookletError> {
    fs::create_dir_all(&config.out_dir)?;

    let (cover, sections) = intro_document();
    let renderer = BookletRenderer::new("Introduction \u{2014} School Lighting")
        .with_footer_note("Introduction");
    let output = render_document(&renderer, &cover, &sections)?;

    let path = config.out_dir.join(OUTPUT_FILE);
    fs::write(&path, &output.bytes)?;
    println!("Generated {} ({} bytes)", path.display(), output.bytes.len());
    Ok(path)
}
