//! Renders every document variant into one output directory.

use super::{booklet, chapters, intro, RunConfig};
use crate::error::BookletError;

/// Runs all variants; fails on the first error.
pub fn run(config: &RunConfig) -> Result<(), BookletError> {
    booklet::run(config)?;
    chapters::run(config)?;
    intro::run(config)?;
    println!("All documents generated under {}", config.out_dir.display());
    Ok(())
}
