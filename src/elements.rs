//! Custom `genpdf` elements for figure embedding.
//!
//! The booklet embeds every chart as a centered image with a caption line
//! stacked underneath, scaled to a requested width while keeping the aspect
//! ratio.  Decoding goes through the [`image`] crate so failures carry the
//! offending path in the message.

use std::path::Path;

use image::GenericImageView;

use genpdf::elements::{Image, Paragraph};
use genpdf::error::{Context as _, Error};
use genpdf::style::Style;
use genpdf::{render, Alignment, Element, Mm, Position, RenderResult, Size};

const IMAGE_DPI: f64 = 300.0;
const MM_PER_INCH: f64 = 25.4;
const CAPTION_SPACING_MM: f64 = 2.0;

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

fn mm_to_f64(value: Mm) -> f64 {
    let mm: printpdf::Mm = value.into();
    mm.0
}

/// Decodes an image from in-memory bytes with a descriptive error.
pub fn decode_image_from_bytes(bytes: impl AsRef<[u8]>) -> Result<image::DynamicImage, Error> {
    image::load_from_memory(bytes.as_ref()).context("Failed to decode image from provided bytes")
}

/// Decodes the image file at `path` with a descriptive error.
pub fn decode_image_from_path(path: impl AsRef<Path>) -> Result<image::DynamicImage, Error> {
    let path = path.as_ref();
    let reader = image::io::Reader::open(path)
        .with_context(|| format!("Failed to open image file {}", path.display()))?;
    reader
        .with_guessed_format()
        .context("Unable to determine image format")?
        .decode()
        .with_context(|| format!("Failed to decode image file {}", path.display()))
}

fn natural_size(image: &image::DynamicImage) -> Size {
    let (px_width, px_height) = image.dimensions();
    Size::new(
        mm_from_f64(MM_PER_INCH * f64::from(px_width) / IMAGE_DPI),
        mm_from_f64(MM_PER_INCH * f64::from(px_height) / IMAGE_DPI),
    )
}

/// A centered image with a caption line underneath.
pub struct CaptionedFigure {
    image: Image,
    caption: Paragraph,
    natural_width: Mm,
    width: Option<Mm>,
}

impl CaptionedFigure {
    fn new(dynamic: image::DynamicImage, caption: Paragraph) -> Result<Self, Error> {
        let size = natural_size(&dynamic);
        let mut image = Image::from_dynamic_image(dynamic)?;
        image.set_alignment(Alignment::Center);
        let mut caption = caption;
        caption.set_alignment(Alignment::Center);
        Ok(Self {
            image,
            caption,
            natural_width: size.width,
            width: None,
        })
    }

    /// Builds a figure from in-memory PNG bytes.
    pub fn from_bytes(bytes: impl AsRef<[u8]>, caption: Paragraph) -> Result<Self, Error> {
        Self::new(decode_image_from_bytes(bytes)?, caption)
    }

    /// Builds a figure from an image file.
    pub fn from_path(path: impl AsRef<Path>, caption: Paragraph) -> Result<Self, Error> {
        Self::new(decode_image_from_path(path)?, caption)
    }

    /// Constrains the rendered width, preserving aspect ratio.
    pub fn with_width(mut self, width: Mm) -> Self {
        self.width = Some(width);
        self.apply_scale();
        self
    }

    fn apply_scale(&mut self) {
        if let Some(width) = self.width {
            let natural = mm_to_f64(self.natural_width);
            if natural > f64::EPSILON {
                let scale = mm_to_f64(width) / natural;
                self.image.set_scale(genpdf::Scale::new(scale, scale));
            }
        }
    }
}

impl Element for CaptionedFigure {
    fn render(
        &mut self,
        context: &genpdf::Context,
        mut area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();

        let image_result = self.image.render(context, area.clone(), style)?;
        result.size = result.size.stack_vertical(image_result.size);
        result.has_more |= image_result.has_more;

        let spacing = mm_from_f64(CAPTION_SPACING_MM);
        area.add_offset(Position::new(0, image_result.size.height + spacing));
        result.size = result.size.stack_vertical(Size::new(0, spacing));

        let caption_result = self.caption.render(context, area, style)?;
        result.size = result.size.stack_vertical(caption_result.size);
        result.has_more |= caption_result.has_more;

        Ok(result)
    }
}
