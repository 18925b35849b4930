//! The merged booklet variant: charts, front matter, chapters, references.

use std::fs;
use std::path::PathBuf;

use log::info;

use super::{render_document, RunConfig};
use crate::booklet::{merged_booklet, BOOKLET_TITLE};
use crate::builder::BookletRenderer;
use crate::chart;
use crate::error::BookletError;
use crate::params;
use crate::scrape::StudySource;

/// File name of the merged booklet.
pub const OUTPUT_FILE: &str = "school_lighting_booklet.pdf";

/// Renders the merged booklet and its chart images into the output directory.
///
/// Returns the path of the written PDF.
pub fn run(config: &RunConfig) -> Result<PathBuf, BookletError> {
    let specs = params::catalog();
    params::validate_catalog(&specs)?;
    let recommendations = params::recommendations();
    for recommendation in &recommendations {
        recommendation.validate()?;
    }

    let images_dir = config.out_dir.join("images");
    fs::create_dir_all(&images_dir)?;

    let mut charts = Vec::with_capacity(specs.len());
    for spec in &specs {
        let path = images_dir.join(format!("{}.png", spec.slug()));
        chart::render_to_file(spec, &config.theme, &path)?;
        charts.push(path);
    }
    info!("rendered {} chart images into {}", charts.len(), images_dir.display());

    let study = StudySource::load(&config.study)?;
    let (cover, sections) = merged_booklet(&specs, &charts, &recommendations, &study);

    let renderer = BookletRenderer::new(BOOKLET_TITLE).with_footer_note(BOOKLET_TITLE);
    let output = render_document(&renderer, &cover, &sections)?;

    let path = config.out_dir.join(OUTPUT_FILE);
    fs::write(&path, &output.bytes)?;
    println!("Generated {} ({} bytes)", path.display(), output.bytes.len());
    Ok(path)
}
