//! Assembly of the logical documents from the authored data.
//!
//! These functions are pure: they take the catalog, recommendations, chart
//! image paths and the study digest, and return a [`Cover`] plus [`Section`]s
//! ready for the renderer.  Keeping assembly free of I/O lets the tests
//! inspect document structure without fonts or a filesystem.

use std::path::PathBuf;

use crate::content;
use crate::content::{ChapterContent, IntroSection};
use crate::model::{Block, Cover, Section};
use crate::params::{Citation, ParameterSpec, Recommendation};
use crate::scrape::StudySource;
use crate::text::{label, link, Span};

/// Title shared by the merged booklet and its footer line.
pub const BOOKLET_TITLE: &str = "Lighting in Schools: Biological & Cognitive Effects";

/// Rendered width of embedded chart figures.
pub const FIGURE_WIDTH_MM: f64 = 160.0;

fn citation_blocks(refs: &[Citation]) -> impl Iterator<Item = Block> + '_ {
    refs.iter().map(|citation| {
        Block::bullet(vec![
            Span::new(format!("{} \u{2014} ", citation.title)),
            link(citation.url.clone()),
        ])
    })
}

/// Builds the full merged booklet.
///
/// `charts` holds one rendered chart image per entry of `specs`, in order.
pub fn merged_booklet(
    specs: &[ParameterSpec],
    charts: &[PathBuf],
    recommendations: &[Recommendation],
    study: &StudySource,
) -> (Cover, Vec<Section>) {
    debug_assert_eq!(specs.len(), charts.len());

    let cover = Cover::new(BOOKLET_TITLE)
        .with_subtitle(
            "A referenced booklet on nine lighting parameters and their effects on \
             student concentration, biology, and psychology.",
        )
        .with_block(Block::text(
            "Combines literature-anchored parameter analysis with the findings of the \
             supplied study notes to form practical recommendations for schools.",
        ));

    let mut sections = Vec::new();

    let mut problem = Section::new("The Problem").with_block(Block::text(content::PROBLEM));
    problem = problem.with_block(Block::paragraph(vec![label(
        "Supplied study notes (brief):",
    )]));
    problem = problem.with_blocks(study.summary_lines().into_iter().map(Block::bullet_text));
    sections.push(problem);

    sections.push(Section::new("The Idea").with_block(Block::text(content::IDEA)));

    let mut study_section =
        Section::new("The Study (What We Compare)").with_block(Block::text(content::STUDY));
    if !study.excerpts().is_empty() {
        study_section =
            study_section.with_block(Block::subheading("Key excerpts from the study notes"));
        study_section = study_section.with_blocks(
            study
                .excerpts()
                .iter()
                .enumerate()
                .map(|(index, excerpt)| Block::bullet_text(format!("{}. {}", index + 1, excerpt))),
        );
    }
    sections.push(study_section);

    let mut solution = Section::new("Solution (Targets by Age & Environment)")
        .on_new_page()
        .with_block(Block::text(content::SOLUTION_INTRO));
    for rec in recommendations {
        solution = solution.with_block(Block::bullet(vec![label(rec.setting.clone())]));
        solution = solution.with_block(Block::text(format!(
            "{}   |   {}   |   {}",
            rec.horizontal_lux, rec.ugr, rec.cri
        )));
        solution = solution.with_block(Block::text(format!("{}   |   {}", rec.melanopic, rec.cct)));
        solution = solution.with_block(Block::paragraph(vec![
            label("Notes: "),
            Span::new(rec.note.clone()),
        ]));
        solution = solution.with_blocks(citation_blocks(&rec.refs));
    }
    sections.push(solution);

    sections.push(
        Section::new("Chapters: Parameter-by-Parameter")
            .on_new_page()
            .with_block(Block::text(
                "Each chapter shows where a parameter supports attention, comfort and \
                 circadian health \u{2014} and where it does not. Shaded zones mark \
                 optimal, caution and risk ranges; dashed lines mark reference values.",
            )),
    );

    for (number, (spec, chart)) in specs.iter().zip(charts).enumerate() {
        let mut chapter = Section::new(spec.title.clone())
            .on_new_page()
            .with_block(Block::text(spec.notes.clone()))
            .with_block(Block::paragraph(vec![
                label("Optimal: "),
                Span::new(spec.bands.good.to_string()),
                Span::new("   |   "),
                label("Caution: "),
                Span::new(format!("{} (context dependent)", spec.bands.warn)),
            ]))
            .with_block(Block::figure(
                chart.clone(),
                vec![
                    label(format!("Figure {}: ", number + 1)),
                    Span::new(spec.title.clone()),
                ],
                FIGURE_WIDTH_MM,
            ))
            .with_block(Block::subheading("References"));
        chapter = chapter.with_blocks(citation_blocks(&spec.refs));
        sections.push(chapter);
    }

    let master = Section::new("Master Reference List (Live URLs)")
        .on_new_page()
        .with_blocks(citation_blocks(&crate::params::master_references()).collect::<Vec<_>>());
    sections.push(master);

    (cover, sections)
}

/// Builds one standalone deep-dive chapter document.
pub fn chapter_document(chapter: &ChapterContent) -> (Cover, Vec<Section>) {
    let bullet_section = |title: &str, items: &[&str]| {
        Section::new(title).with_blocks(items.iter().map(|item| Block::bullet_text(*item)))
    };

    let cover = Cover::new(chapter.title).with_subtitle(chapter.subtitle);

    let sections = vec![
        Section::new("Definition").with_block(Block::text(chapter.definition)),
        Section::new("Recommended Ranges").with_block(Block::Table(vec![
            ("Optimal".to_string(), chapter.optimal.to_string()),
            ("Caution".to_string(), chapter.caution.to_string()),
        ])),
        Section::new("Biological Effects")
            .with_block(Block::subheading("Hormones (Endocrine)"))
            .with_blocks(chapter.hormones.iter().map(|item| Block::bullet_text(*item)))
            .with_block(Block::subheading("Skin (Photobiology & Peripheral Clocks)"))
            .with_blocks(chapter.skin.iter().map(|item| Block::bullet_text(*item)))
            .with_block(Block::subheading(
                "Nervous System (ipRGC \u{2192} SCN \u{2192} CNS)",
            ))
            .with_blocks(chapter.nervous.iter().map(|item| Block::bullet_text(*item))),
        bullet_section("Biochemical Pathways (Mechanistic Detail)", chapter.biochemistry),
        bullet_section("Classroom Recommendations", chapter.recommendations),
        bullet_section("Quick Checklist", chapter.checklist),
        bullet_section("References", chapter.references),
    ];

    (cover, sections)
}

/// Builds the standalone introduction document.
pub fn intro_document() -> (Cover, Vec<Section>) {
    let intro = content::intro_sections();

    let mut cover = Cover::new("Introduction");
    let mut sections = Vec::new();
    for IntroSection {
        heading,
        paragraphs,
        bullets,
    } in intro
    {
        if heading.is_empty() {
            for paragraph in paragraphs {
                cover = cover.with_block(Block::text(*paragraph));
            }
            continue;
        }
        let mut section = Section::new(heading);
        for paragraph in paragraphs {
            section = section.with_block(Block::text(*paragraph));
        }
        for bullet in bullets {
            section = section.with_block(Block::bullet_text(*bullet));
        }
        sections.push(section);
    }

    (cover, sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;
    use crate::params;
    use crate::scrape::{Extractor, StudySource};

    fn fake_charts(count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|index| PathBuf::from(format!("/tmp/chart_{index}.png")))
            .collect()
    }

    fn count_blocks<F: Fn(&Block) -> bool>(sections: &[Section], pred: F) -> usize {
        sections
            .iter()
            .flat_map(|section| section.blocks())
            .filter(|block| pred(block))
            .count()
    }

    #[test]
    fn merged_booklet_has_one_figure_per_parameter() {
        let specs = params::catalog();
        let charts = fake_charts(specs.len());
        let study = StudySource::Missing {
            path: PathBuf::from("/nowhere/notes.txt"),
        };
        let (_, sections) =
            merged_booklet(&specs, &charts, &params::recommendations(), &study);

        let figures = count_blocks(&sections, |block| matches!(block, Block::Figure(_)));
        assert_eq!(figures, specs.len());

        let chapter_titles: Vec<&str> = sections.iter().map(Section::title).collect();
        assert!(chapter_titles.contains(&"The Problem"));
        assert!(chapter_titles.contains(&"Master Reference List (Live URLs)"));
    }

    #[test]
    fn missing_study_embeds_placeholder_line() {
        let specs = params::catalog();
        let charts = fake_charts(specs.len());
        let study = StudySource::Missing {
            path: PathBuf::from("/nowhere/notes.txt"),
        };
        let (_, sections) =
            merged_booklet(&specs, &charts, &params::recommendations(), &study);

        let problem = &sections[0];
        let has_placeholder = problem.blocks().iter().any(|block| match block {
            Block::Bullet(text) => text
                .spans()
                .iter()
                .any(|span| span.text().contains("No study notes found at")),
            _ => false,
        });
        assert!(has_placeholder);
        // No excerpts section when the notes are missing.
        assert!(sections[2]
            .blocks()
            .iter()
            .all(|block| !matches!(block, Block::Subheading(_))));
    }

    #[test]
    fn loaded_study_contributes_excerpts() {
        let digest = Extractor::new().digest(&[
            "Measured 475 lux at 5000K in primary rooms.".to_string(),
            "Second paragraph.".to_string(),
        ]);
        let study = StudySource::Loaded(digest);
        let specs = params::catalog();
        let charts = fake_charts(specs.len());
        let (_, sections) =
            merged_booklet(&specs, &charts, &params::recommendations(), &study);

        let study_section = &sections[2];
        let bullets = study_section
            .blocks()
            .iter()
            .filter(|block| matches!(block, Block::Bullet(_)))
            .count();
        assert_eq!(bullets, 2);
    }

    #[test]
    fn chapter_documents_follow_the_fixed_outline() {
        for chapter in crate::content::chapters() {
            let (cover, sections) = chapter_document(&chapter);
            assert_eq!(cover.title(), chapter.title);
            let titles: Vec<&str> = sections.iter().map(Section::title).collect();
            assert_eq!(
                titles,
                vec![
                    "Definition",
                    "Recommended Ranges",
                    "Biological Effects",
                    "Biochemical Pathways (Mechanistic Detail)",
                    "Classroom Recommendations",
                    "Quick Checklist",
                    "References",
                ]
            );
            assert!(matches!(sections[1].blocks()[0], Block::Table(_)));
        }
    }

    #[test]
    fn intro_document_moves_lead_onto_the_cover() {
        let (cover, sections) = intro_document();
        assert!(!cover.blocks().is_empty());
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0].title(), "The Problem");
        let bullet_count = count_blocks(&sections, |b| matches!(b, Block::Bullet(_)));
        assert_eq!(bullet_count, 5);
    }
}
