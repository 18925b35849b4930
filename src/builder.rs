//! Conversion of the logical document model into rendered PDF bytes.
//!
//! [`BookletRenderer`] owns the page setup (paper size, margins, footer) and
//! walks a [`Cover`] plus [`Section`]s, mapping each [`Block`] to `genpdf`
//! elements.  Rendering returns the finished bytes; writing them to disk is
//! the caller's single durability point.

use genpdf::elements::{Break, BulletPoint, FrameCellDecorator, PageBreak, Paragraph, TableLayout};
use genpdf::error::{Error, ErrorKind};
use genpdf::style::Style;
use genpdf::{Alignment, Element, Margins, Mm, PageDecorator, PaperSize, Position, Size};

#[cfg(feature = "hyphenation")]
use hyphenation::Standard;

use crate::elements::CaptionedFigure;
use crate::error::BookletError;
use crate::fonts;
use crate::model::{Align, Block, Cover, FigureSource, Section, TextBlock};

const TITLE_FONT_SIZE: u8 = 22;
const SECTION_FONT_SIZE: u8 = 16;
const SUBHEADING_FONT_SIZE: u8 = 13;
const BODY_FONT_SIZE: u8 = 11;
const FOOTER_FONT_SIZE: u8 = 9;
const FOOTER_HEIGHT_MM: f64 = 8.0;

/// A finished in-memory render.
#[derive(Clone, Debug)]
pub struct PdfOutput {
    /// The complete PDF file contents.
    pub bytes: Vec<u8>,
}

/// Renders logical documents with a fixed page setup.
pub struct BookletRenderer {
    title: String,
    paper_size: Size,
    margins: Margins,
    footer_note: Option<String>,
    #[cfg(feature = "hyphenation")]
    hyphenator: Option<Standard>,
}

impl BookletRenderer {
    /// Creates a renderer with A4 paper and default margins.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            paper_size: PaperSize::A4.into(),
            margins: Margins::trbl(15, 15, 15, 15),
            footer_note: None,
            #[cfg(feature = "hyphenation")]
            hyphenator: None,
        }
    }

    /// Overrides the paper size.
    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = paper_size.into();
        self
    }

    /// Overrides the page margins.
    pub fn with_margins(mut self, margins: impl Into<Margins>) -> Self {
        self.margins = margins.into();
        self
    }

    /// Adds a footer line (note plus page number) from page 2 onwards.
    pub fn with_footer_note(mut self, note: impl Into<String>) -> Self {
        self.footer_note = Some(note.into());
        self
    }

    /// Enables hyphenation with the provided dictionary.
    #[cfg(feature = "hyphenation")]
    pub fn with_hyphenator(mut self, hyphenator: Standard) -> Self {
        self.hyphenator = Some(hyphenator);
        self
    }

    /// Renders the document to PDF bytes.
    pub fn render(&self, cover: &Cover, sections: &[Section]) -> Result<PdfOutput, BookletError> {
        let document = self.document(cover, sections)?;
        let mut bytes = Vec::new();
        document.render(&mut bytes)?;
        Ok(PdfOutput { bytes })
    }

    /// Renders the document and attaches a PDF outline entry per section.
    ///
    /// Section start pages are derived by rendering each prefix of the
    /// document and counting its pages; this stays exact because every
    /// outlined section starts on a page boundary.
    #[cfg(feature = "bookmarks")]
    pub fn render_with_bookmarks(
        &self,
        cover: &Cover,
        sections: &[Section],
    ) -> Result<PdfOutput, BookletError> {
        use crate::bookmarks::{self, OutlineEntry};

        let full = self.render(cover, sections)?;
        let total_pages = bookmarks::page_count(&full.bytes)?;

        let mut entries = Vec::with_capacity(sections.len());
        for (index, section) in sections.iter().enumerate() {
            let prefix = self.render(cover, &sections[..index])?;
            let preceding = bookmarks::page_count(&prefix.bytes)?;
            let start = if section.starts_on_new_page() {
                preceding + 1
            } else {
                preceding.max(1)
            };
            entries.push(OutlineEntry::new(section.title(), start.min(total_pages)));
        }

        let bytes = bookmarks::apply_outline(&full.bytes, &entries)?;
        Ok(PdfOutput { bytes })
    }

    fn document(&self, cover: &Cover, sections: &[Section]) -> Result<genpdf::Document, BookletError> {
        let family = fonts::default_font_family()?;
        let mut document = genpdf::Document::new(family);
        document.set_title(self.title.clone());
        document.set_paper_size(self.paper_size);
        document.set_font_size(BODY_FONT_SIZE);
        document.set_page_decorator(FooterPageDecorator::new(
            self.margins,
            self.footer_note.clone(),
        ));

        #[cfg(feature = "hyphenation")]
        if let Some(hyphenator) = self.hyphenator.clone() {
            document.set_hyphenator(hyphenator);
        }

        push_cover(&mut document, cover)?;
        for section in sections {
            push_section(&mut document, section)?;
        }

        Ok(document)
    }
}

fn heading_style(size: u8) -> Style {
    Style::new().bold().with_font_size(size)
}

fn paragraph_from(block: &TextBlock) -> Paragraph {
    let mut paragraph = Paragraph::default();
    for span in block.spans() {
        paragraph.push(span.to_styled_string());
    }
    paragraph.set_alignment(map_align(block.align()));
    paragraph
}

fn map_align(align: Align) -> Alignment {
    match align {
        Align::Left => Alignment::Left,
        Align::Center => Alignment::Center,
        Align::Right => Alignment::Right,
    }
}

fn push_cover(document: &mut genpdf::Document, cover: &Cover) -> Result<(), BookletError> {
    document.push(
        Paragraph::new(cover.title())
            .aligned(Alignment::Center)
            .styled(heading_style(TITLE_FONT_SIZE)),
    );
    if let Some(subtitle) = cover.subtitle() {
        document.push(
            Paragraph::new(subtitle)
                .aligned(Alignment::Center)
                .styled(Style::new().italic().with_font_size(SUBHEADING_FONT_SIZE)),
        );
    }
    document.push(Break::new(1.0));
    for block in cover.blocks() {
        push_block(document, block)?;
    }
    Ok(())
}

fn push_section(document: &mut genpdf::Document, section: &Section) -> Result<(), BookletError> {
    if section.starts_on_new_page() {
        document.push(PageBreak::new());
    } else {
        document.push(Break::new(0.8));
    }
    document.push(Paragraph::new(section.title()).styled(heading_style(SECTION_FONT_SIZE)));
    document.push(Break::new(0.3));
    for block in section.blocks() {
        push_block(document, block)?;
    }
    Ok(())
}

fn push_block(document: &mut genpdf::Document, block: &Block) -> Result<(), BookletError> {
    match block {
        Block::Paragraph(text) => {
            document.push(paragraph_from(text).padded(Margins::trbl(0, 0, 1, 0)));
        }
        Block::Bullet(text) => {
            document.push(BulletPoint::new(paragraph_from(text)).with_bullet("\u{2022}"));
        }
        Block::Subheading(title) => {
            document.push(Break::new(0.4));
            document
                .push(Paragraph::new(title.as_str()).styled(heading_style(SUBHEADING_FONT_SIZE)));
        }
        Block::Table(rows) => {
            let mut table = TableLayout::new(vec![1, 3]);
            table.set_cell_decorator(FrameCellDecorator::new(true, true, false));
            for (name, value) in rows {
                table
                    .row()
                    .element(
                        Paragraph::new(name.as_str())
                            .styled(Style::new().bold())
                            .padded(1),
                    )
                    .element(Paragraph::new(value.as_str()).padded(1))
                    .push()?;
            }
            document.push(table.padded(Margins::trbl(0, 0, 1, 0)));
        }
        Block::Figure(figure) => {
            let mut caption = Paragraph::default();
            for span in &figure.caption {
                caption.push(span.to_styled_string());
            }
            let element = match &figure.source {
                FigureSource::Path(path) => CaptionedFigure::from_path(path, caption)?,
                FigureSource::Bytes(bytes) => CaptionedFigure::from_bytes(bytes, caption)?,
            };
            let width: Mm = figure.width_mm.into();
            document.push(element.with_width(width).padded(Margins::trbl(1, 0, 2, 0)));
        }
        Block::PageBreak => {
            document.push(PageBreak::new());
        }
    }
    Ok(())
}

/// Applies margins and renders a trailing footer line on every page but the
/// first.
struct FooterPageDecorator {
    page: usize,
    margins: Margins,
    footer_note: Option<String>,
}

impl FooterPageDecorator {
    fn new(margins: Margins, footer_note: Option<String>) -> Self {
        Self {
            page: 0,
            margins,
            footer_note,
        }
    }
}

impl PageDecorator for FooterPageDecorator {
    fn decorate_page<'a>(
        &mut self,
        context: &genpdf::Context,
        mut area: genpdf::render::Area<'a>,
        style: Style,
    ) -> Result<genpdf::render::Area<'a>, Error> {
        self.page += 1;
        area.add_margins(self.margins);

        let Some(note) = &self.footer_note else {
            return Ok(area);
        };
        if self.page == 1 {
            return Ok(area);
        }

        let height: Mm = FOOTER_HEIGHT_MM.into();
        let available = area.size().height;
        if height > available {
            return Err(Error::new(
                "Footer height exceeds available space",
                ErrorKind::InvalidData,
            ));
        }

        let mut footer_area = area.clone();
        footer_area.add_offset(Position::new(0, available - height));
        let mut line = Paragraph::new(format!("{} \u{2014} page {}", note, self.page));
        line.set_alignment(Alignment::Right);
        let result = line.render(context, footer_area, style.with_font_size(FOOTER_FONT_SIZE))?;
        if result.has_more {
            return Err(Error::new(
                "Footer line does not fit into the reserved space",
                ErrorKind::PageSizeExceeded,
            ));
        }

        area.set_height(available - height);
        Ok(area)
    }
}
