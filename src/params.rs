//! The authored parameter catalog and its validation rules.
//!
//! Each [`ParameterSpec`] describes one measurable lighting parameter: the
//! plotted axis span, the nested optimal/caution/risk bands, the anchor points
//! of its dose-response curve, prose notes, citations and annotated markers.
//! The catalog is literal data with enforced invariants, checked before
//! anything is rendered: bands must nest, anchors must be strictly ascending,
//! markers must lie inside the span and every citation URL must parse as
//! http(s).

use std::fmt;

use url::Url;

/// An inclusive numeric interval on the parameter axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    lo: f64,
    hi: f64,
}

impl Band {
    /// Creates a band from its lower and upper bound.
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Lower bound of the band.
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper bound of the band.
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Whether `inner` lies entirely within this band.
    pub fn contains(&self, inner: &Band) -> bool {
        self.lo <= inner.lo && inner.hi <= self.hi
    }

    /// Whether a single value lies within the band.
    pub fn covers(&self, value: f64) -> bool {
        self.lo <= value && value <= self.hi
    }

    fn is_ordered(&self) -> bool {
        self.lo < self.hi
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\u{2013}{}", self.lo, self.hi)
    }
}

/// The nested good/caution/risk zones shaded behind a parameter curve.
///
/// The chart paints five segments from these three bands: risk on the outer
/// flanks of `danger`, caution between `warn` and `good`, and the optimal core.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandSet {
    /// Optimal core range.
    pub good: Band,
    /// Caution range enclosing `good`.
    pub warn: Band,
    /// Full risk extent enclosing `warn`; normally equal to the axis span.
    pub danger: Band,
}

impl BandSet {
    /// Creates a band set from `(lo, hi)` pairs, innermost first.
    pub const fn new(good: (f64, f64), warn: (f64, f64), danger: (f64, f64)) -> Self {
        Self {
            good: Band::new(good.0, good.1),
            warn: Band::new(warn.0, warn.1),
            danger: Band::new(danger.0, danger.1),
        }
    }
}

/// A dashed vertical guideline with a short annotation.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Position on the parameter axis.
    pub at: f64,
    /// Annotation shown next to the guideline.
    pub label: String,
}

impl Marker {
    /// Creates a marker at the given axis position.
    pub fn new(at: f64, label: impl Into<String>) -> Self {
        Self {
            at,
            label: label.into(),
        }
    }
}

/// A source reference consisting of a display title and a live URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Citation {
    /// Human-readable source description.
    pub title: String,
    /// Link to the standard, article or dataset.
    pub url: String,
}

impl Citation {
    /// Creates a citation from a title and URL.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    fn check_url(&self) -> bool {
        match Url::parse(&self.url) {
            Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
            Err(_) => false,
        }
    }
}

/// Full description of one lighting parameter chapter.
#[derive(Clone, Debug)]
pub struct ParameterSpec {
    /// Chapter title, e.g. `"CCT (Correlated Color Temperature, K)"`.
    pub title: String,
    /// Label for the parameter axis.
    pub x_label: String,
    /// Label for the biological-response axis.
    pub y_label: String,
    /// Plotted axis extent.
    pub span: Band,
    /// Nested shading zones.
    pub bands: BandSet,
    /// Dose-response anchor points, strictly ascending in x.
    pub anchors: Vec<(f64, f64)>,
    /// Prose shown above the figure in the booklet chapter.
    pub notes: String,
    /// Chapter references.
    pub refs: Vec<Citation>,
    /// Annotated guideline positions.
    pub markers: Vec<Marker>,
}

impl ParameterSpec {
    /// Derives a filesystem-safe stem for the chart image of this parameter.
    ///
    /// Lowercases the title, keeps alphanumerics and collapses everything else
    /// into single underscores.
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.title.len());
        let mut gap = false;
        for ch in self.title.chars() {
            if ch.is_ascii_alphanumeric() {
                if gap && !slug.is_empty() {
                    slug.push('_');
                }
                gap = false;
                slug.push(ch.to_ascii_lowercase());
            } else {
                gap = true;
            }
        }
        slug
    }

    /// Checks every invariant of this record.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let name = || self.title.clone();

        for band in [&self.span, &self.bands.good, &self.bands.warn, &self.bands.danger] {
            if !band.is_ordered() {
                return Err(CatalogError::EmptyBand {
                    parameter: name(),
                    band: *band,
                });
            }
        }

        if !self.bands.warn.contains(&self.bands.good) {
            return Err(CatalogError::BandsNotNested {
                parameter: name(),
                outer: self.bands.warn,
                inner: self.bands.good,
            });
        }
        if !self.bands.danger.contains(&self.bands.warn) {
            return Err(CatalogError::BandsNotNested {
                parameter: name(),
                outer: self.bands.danger,
                inner: self.bands.warn,
            });
        }
        if !self.span.contains(&self.bands.danger) {
            return Err(CatalogError::BandsNotNested {
                parameter: name(),
                outer: self.span,
                inner: self.bands.danger,
            });
        }

        if self.anchors.len() < 2 {
            return Err(CatalogError::TooFewAnchors {
                parameter: name(),
                count: self.anchors.len(),
            });
        }
        for (index, pair) in self.anchors.windows(2).enumerate() {
            if pair[1].0 <= pair[0].0 {
                return Err(CatalogError::AnchorsNotAscending {
                    parameter: name(),
                    index: index + 1,
                    value: pair[1].0,
                });
            }
        }

        for marker in &self.markers {
            if !self.span.covers(marker.at) {
                return Err(CatalogError::MarkerOutsideSpan {
                    parameter: name(),
                    at: marker.at,
                });
            }
        }

        for citation in &self.refs {
            if !citation.check_url() {
                return Err(CatalogError::InvalidUrl {
                    parameter: name(),
                    url: citation.url.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Violations of the catalog invariants.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogError {
    /// A band has a lower bound at or above its upper bound.
    EmptyBand {
        /// Offending parameter title.
        parameter: String,
        /// The degenerate band.
        band: Band,
    },
    /// An inner band is not fully contained in its enclosing band.
    BandsNotNested {
        /// Offending parameter title.
        parameter: String,
        /// The enclosing band.
        outer: Band,
        /// The band that escapes it.
        inner: Band,
    },
    /// Fewer than two anchor points were supplied.
    TooFewAnchors {
        /// Offending parameter title.
        parameter: String,
        /// Number of anchors found.
        count: usize,
    },
    /// Anchor x-values are not strictly ascending.
    AnchorsNotAscending {
        /// Offending parameter title.
        parameter: String,
        /// Index of the first out-of-order anchor.
        index: usize,
        /// Its x-value.
        value: f64,
    },
    /// A marker lies outside the plotted span.
    MarkerOutsideSpan {
        /// Offending parameter title.
        parameter: String,
        /// Marker position.
        at: f64,
    },
    /// A citation URL is not a syntactically valid http(s) URL.
    InvalidUrl {
        /// Offending parameter title, or the recommendation label.
        parameter: String,
        /// The rejected URL.
        url: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBand { parameter, band } => {
                write!(f, "{parameter}: band {band} is empty or reversed")
            }
            Self::BandsNotNested {
                parameter,
                outer,
                inner,
            } => write!(
                f,
                "{parameter}: band {inner} is not contained in {outer}"
            ),
            Self::TooFewAnchors { parameter, count } => write!(
                f,
                "{parameter}: {count} anchor(s) supplied, at least 2 required"
            ),
            Self::AnchorsNotAscending {
                parameter,
                index,
                value,
            } => write!(
                f,
                "{parameter}: anchor #{index} (x = {value}) breaks strict ascending order"
            ),
            Self::MarkerOutsideSpan { parameter, at } => {
                write!(f, "{parameter}: marker at {at} lies outside the axis span")
            }
            Self::InvalidUrl { parameter, url } => {
                write!(f, "{parameter}: citation URL `{url}` is not valid http(s)")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Validates every record of a catalog, failing on the first violation.
pub fn validate_catalog(specs: &[ParameterSpec]) -> Result<(), CatalogError> {
    for spec in specs {
        spec.validate()?;
    }
    Ok(())
}

/// Recommended targets for one age group or school environment.
#[derive(Clone, Debug)]
pub struct Recommendation {
    /// Audience and room type, e.g. `"Primary (6-11) - classroom"`.
    pub setting: String,
    /// Horizontal (desk) illuminance target.
    pub horizontal_lux: String,
    /// Glare limit.
    pub ugr: String,
    /// Color-rendering target.
    pub cri: String,
    /// Daytime melanopic EDI target.
    pub melanopic: String,
    /// Color-temperature range.
    pub cct: String,
    /// Free-text rationale.
    pub note: String,
    /// Supporting sources.
    pub refs: Vec<Citation>,
}

impl Recommendation {
    /// Checks the citation URLs of this record.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for citation in &self.refs {
            if !citation.check_url() {
                return Err(CatalogError::InvalidUrl {
                    parameter: self.setting.clone(),
                    url: citation.url.clone(),
                });
            }
        }
        Ok(())
    }
}

const EN_12464: (&str, &str) = (
    "EN 12464-1 overview (indoor workplaces: illuminance, UGR, CRI)",
    "https://www.performanceinlighting.com/mo/en/en-12464-1",
);
const BROWN_2022: (&str, &str) = (
    "Brown et al., 2022 (PLOS Biology): consensus melanopic recommendations",
    "https://journals.plos.org/plosbiology/article?id=10.1371/journal.pbio.3001571",
);
const BROWN_2022_PMC: (&str, &str) = (
    "Brown et al., 2022 (PMC mirror)",
    "https://pmc.ncbi.nlm.nih.gov/articles/PMC8929548/",
);
const WELL_CIRCADIAN: (&str, &str) = (
    "WELL v2 circadian lighting context (IWBI)",
    "https://resources.wellcertified.com/articles/circadian-rhythms/",
);
const IEEE_1789: (&str, &str) = (
    "IEEE 1789-2015 flicker recommended practice (PDF)",
    "https://www.lisungroup.com/wp-content/uploads/2020/02/IEEE-2015-STANDARDS-1789-Standard-Free-Download.pdf",
);
const PARK_2015: (&str, &str) = (
    "Park et al., 2015: CCT, EEG & task performance (PMC)",
    "https://pmc.ncbi.nlm.nih.gov/articles/PMC4668153/",
);
const CHEN_2022: (&str, &str) = (
    "Chen et al., 2022: CCT x illuminance effects (MDPI)",
    "https://www.mdpi.com/1996-1073/15/12/4477",
);
const CIBSE_GLARE: (&str, &str) = (
    "CIBSE Factfile: importance of glare & calculating UGR (PDF)",
    "https://www.cibse.org/media/polbabib/factfile-15-the-importance-of-glare-and-calculating-ugr-jul2019.pdf",
);
const MILLER_2022: (&str, &str) = (
    "Miller et al., 2022 flicker review (PDF)",
    "https://www.energy.gov/sites/default/files/2022-08/ssl-miller-etal-2022-LRT-flicker-review-tlm-stimulus-response.pdf",
);
const MDPI_2025: (&str, &str) = (
    "MDPI 2025 review referencing EN 12464-1 classroom levels",
    "https://www.mdpi.com/2075-5309/15/8/1233",
);

fn cite(pair: (&str, &str)) -> Citation {
    Citation::new(pair.0, pair.1)
}

/// The built-in nine-parameter catalog.
///
/// Spans, bands, anchors and markers follow the superset revision of the
/// source material; band sets were normalized so they actually nest.
pub fn catalog() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec {
            title: "CCT (Correlated Color Temperature, K)".into(),
            x_label: "CCT (Kelvin)".into(),
            y_label: "Estimated Alerting Potential (%)".into(),
            span: Band::new(2000.0, 7000.0),
            bands: BandSet::new((4000.0, 5000.0), (3000.0, 6500.0), (2000.0, 7000.0)),
            anchors: vec![
                (2000.0, 8.0),
                (2700.0, 15.0),
                (3000.0, 25.0),
                (3500.0, 45.0),
                (4000.0, 65.0),
                (5000.0, 75.0),
                (6500.0, 60.0),
                (7000.0, 55.0),
            ],
            notes: "Daytime 4000\u{2013}5000 K generally supports alertness and visual \
                    comfort; short task-specific use of 6500 K may boost performance but \
                    can increase discomfort if overused. Warmer CCT supports calmness \
                    late in the day."
                .into(),
            refs: vec![cite(EN_12464), cite(PARK_2015), cite(CHEN_2022)],
            markers: vec![
                Marker::new(4000.0, "Typical classroom"),
                Marker::new(5000.0, "Upper preferred"),
            ],
        },
        ParameterSpec {
            title: "CRI (Color Rendering Index, Ra)".into(),
            x_label: "CRI (Ra)".into(),
            y_label: "Visual Color Fidelity / Recognition (%)".into(),
            span: Band::new(60.0, 100.0),
            bands: BandSet::new((80.0, 100.0), (70.0, 100.0), (60.0, 100.0)),
            anchors: vec![
                (60.0, 50.0),
                (70.0, 60.0),
                (75.0, 72.0),
                (80.0, 82.0),
                (85.0, 90.0),
                (90.0, 96.0),
                (95.0, 99.0),
                (100.0, 100.0),
            ],
            notes: "CRI \u{2265}80 is generally recommended for classrooms; \u{2265}90 for \
                    art and graphics rooms where color evaluation matters."
                .into(),
            refs: vec![cite(EN_12464)],
            markers: vec![
                Marker::new(80.0, "Baseline classroom"),
                Marker::new(90.0, "Art / graphics"),
            ],
        },
        ParameterSpec {
            title: "Flicker (Percent Modulation)".into(),
            x_label: "Percent Flicker (%)".into(),
            y_label: "Estimated Adverse Effect Risk (%)".into(),
            span: Band::new(0.0, 50.0),
            bands: BandSet::new((0.0, 5.0), (0.0, 20.0), (0.0, 50.0)),
            anchors: vec![
                (0.0, 0.0),
                (2.0, 3.0),
                (5.0, 8.0),
                (10.0, 20.0),
                (20.0, 45.0),
                (30.0, 70.0),
                (40.0, 85.0),
                (50.0, 95.0),
            ],
            notes: "Keep percent flicker as low as practical (<5%) and avoid \
                    low-frequency PWM. Imperceptible high-frequency flicker can still \
                    affect sensitive individuals."
                .into(),
            refs: vec![cite(IEEE_1789), cite(MILLER_2022)],
            markers: vec![
                Marker::new(5.0, "Preferred max"),
                Marker::new(20.0, "High risk"),
            ],
        },
        ParameterSpec {
            title: "Glare (Unified Glare Rating, UGR)".into(),
            x_label: "UGR".into(),
            y_label: "Estimated Discomfort Probability (%)".into(),
            span: Band::new(10.0, 30.0),
            bands: BandSet::new((10.0, 19.0), (10.0, 22.0), (10.0, 30.0)),
            anchors: vec![
                (10.0, 5.0),
                (13.0, 8.0),
                (16.0, 15.0),
                (19.0, 30.0),
                (22.0, 55.0),
                (25.0, 80.0),
                (28.0, 92.0),
                (30.0, 96.0),
            ],
            notes: "Aim for UGR <19 in classrooms, lower (\u{2248}16\u{2013}18) near \
                    screens and interactive boards, to minimize discomfort and \
                    distraction."
                .into(),
            refs: vec![cite(CIBSE_GLARE), cite(EN_12464)],
            markers: vec![
                Marker::new(19.0, "Classroom max"),
                Marker::new(16.0, "Screen work"),
            ],
        },
        ParameterSpec {
            title: "Uniformity (Emin / Eavg)".into(),
            x_label: "Uniformity (Emin / Eavg)".into(),
            y_label: "Task Performance Index (%)".into(),
            span: Band::new(0.1, 1.0),
            bands: BandSet::new((0.6, 1.0), (0.4, 1.0), (0.1, 1.0)),
            anchors: vec![
                (0.1, 40.0),
                (0.2, 55.0),
                (0.3, 70.0),
                (0.45, 82.0),
                (0.6, 92.0),
                (0.75, 96.0),
                (0.9, 98.0),
                (1.0, 99.0),
            ],
            notes: "Higher uniformity reduces local visual contrast and supports even \
                    task performance across the room."
                .into(),
            refs: vec![cite(EN_12464)],
            markers: vec![Marker::new(0.6, "Recommended min")],
        },
        ParameterSpec {
            title: "Melanopic EDI (melanopic lux at eye)".into(),
            x_label: "Melanopic EDI (lux)".into(),
            y_label: "Estimated Melatonin Suppression (%)".into(),
            span: Band::new(0.0, 800.0),
            bands: BandSet::new((250.0, 500.0), (100.0, 500.0), (0.0, 800.0)),
            anchors: vec![
                (0.0, 0.0),
                (20.0, 5.0),
                (50.0, 15.0),
                (100.0, 35.0),
                (250.0, 65.0),
                (500.0, 80.0),
                (800.0, 90.0),
            ],
            notes: "Provide \u{2265}250 melanopic EDI during the day, measured vertically \
                    at eye height, for circadian entrainment and alertness."
                .into(),
            refs: vec![cite(BROWN_2022), cite(BROWN_2022_PMC), cite(WELL_CIRCADIAN)],
            markers: vec![
                Marker::new(250.0, "Daytime target (min)"),
                Marker::new(500.0, "Robust daytime"),
            ],
        },
        ParameterSpec {
            title: "Vertical Illuminance (lux at eye/face)".into(),
            x_label: "Vertical Illuminance (lux)".into(),
            y_label: "Circadian Stimulus (CS, unitless)".into(),
            span: Band::new(50.0, 1000.0),
            bands: BandSet::new((300.0, 500.0), (200.0, 800.0), (50.0, 1000.0)),
            anchors: vec![
                (50.0, 0.05),
                (100.0, 0.12),
                (150.0, 0.22),
                (300.0, 0.40),
                (500.0, 0.55),
                (800.0, 0.65),
                (1000.0, 0.68),
            ],
            notes: "Vertical lux at the eye is the better predictor of non-visual \
                    responses; aim for ~300\u{2013}500 lx on faces during the day."
                .into(),
            refs: vec![cite(EN_12464), cite(WELL_CIRCADIAN)],
            markers: vec![
                Marker::new(300.0, "Daytime min"),
                Marker::new(500.0, "Strong CS"),
            ],
        },
        ParameterSpec {
            title: "Exposure Duration (hours at target levels)".into(),
            x_label: "Exposure Duration (hours)".into(),
            y_label: "Estimated Cumulative Melatonin Suppression (%)".into(),
            span: Band::new(0.0, 8.0),
            bands: BandSet::new((2.0, 4.0), (1.0, 6.0), (0.0, 8.0)),
            anchors: vec![
                (0.0, 0.0),
                (0.5, 10.0),
                (1.0, 20.0),
                (2.0, 40.0),
                (3.0, 60.0),
                (4.0, 75.0),
                (6.0, 90.0),
                (8.0, 95.0),
            ],
            notes: "Sustained daytime exposure (~2\u{2013}4 h at adequate melanopic \
                    levels) supports entrainment; short or irregular exposure is less \
                    effective."
                .into(),
            refs: vec![cite(BROWN_2022_PMC)],
            markers: vec![Marker::new(2.0, "Effective"), Marker::new(4.0, "Robust")],
        },
        ParameterSpec {
            title: "Horizontal Illuminance (desk/task lux)".into(),
            x_label: "Horizontal Illuminance (lux)".into(),
            y_label: "Visual Task Performance (%)".into(),
            span: Band::new(100.0, 1500.0),
            bands: BandSet::new((300.0, 500.0), (200.0, 1000.0), (100.0, 1500.0)),
            anchors: vec![
                (100.0, 60.0),
                (200.0, 75.0),
                (300.0, 85.0),
                (500.0, 95.0),
                (750.0, 98.0),
                (1000.0, 99.0),
                (1500.0, 99.0),
            ],
            notes: "Provide 300\u{2013}500 lx at desks for general classrooms; labs and \
                    graphics rooms use 500\u{2013}750 lx, and short-term 800\u{2013}1000 \
                    lx can support exam focus."
                .into(),
            refs: vec![cite(EN_12464), cite(MDPI_2025)],
            markers: vec![
                Marker::new(300.0, "General min"),
                Marker::new(500.0, "Classroom target"),
                Marker::new(750.0, "Lab / graphics"),
            ],
        },
    ]
}

/// The built-in age-and-environment recommendation table.
pub fn recommendations() -> Vec<Recommendation> {
    let rec = |setting: &str,
               horizontal_lux: &str,
               ugr: &str,
               cri: &str,
               melanopic: &str,
               cct: &str,
               note: &str,
               refs: Vec<Citation>| Recommendation {
        setting: setting.into(),
        horizontal_lux: horizontal_lux.into(),
        ugr: ugr.into(),
        cri: cri.into(),
        melanopic: melanopic.into(),
        cct: cct.into(),
        note: note.into(),
        refs,
    };

    vec![
        rec(
            "Kindergarten (3\u{2013}5) \u{2014} classroom",
            "Horizontal lx: 300\u{2013}500",
            "UGR: <19",
            "CRI: \u{2265}80",
            "Melanopic EDI (day): \u{2265}250",
            "CCT: 3500\u{2013}4000 K",
            "Softer CCT reduces over-arousal; keep flicker <5%; vertical ~300\u{2013}400 lx for faces.",
            vec![cite(EN_12464), cite(BROWN_2022_PMC)],
        ),
        rec(
            "Primary (6\u{2013}11) \u{2014} classroom",
            "Horizontal lx: 300\u{2013}500",
            "UGR: <19",
            "CRI: \u{2265}80",
            "Melanopic EDI (day): \u{2265}250\u{2013}300",
            "CCT: 4000\u{2013}5000 K",
            "Balanced spectrum and daylight; flicker <5%; vertical ~300\u{2013}500 lx on faces and boards.",
            vec![cite(EN_12464), cite(WELL_CIRCADIAN)],
        ),
        rec(
            "Secondary (12\u{2013}18) \u{2014} classroom",
            "Horizontal lx: 300\u{2013}500",
            "UGR: <19 (\u{2264}16 near screens)",
            "CRI: \u{2265}80 (\u{2265}90 for art)",
            "Melanopic EDI (day): \u{2265}250\u{2013}300",
            "CCT: 4000\u{2013}5000 K",
            "Lower UGR near screens; short high-CCT, high-lux sessions can support exam focus.",
            vec![cite(EN_12464)],
        ),
        rec(
            "Exam / focus sessions (all ages)",
            "Horizontal lx: 500\u{2013}1000",
            "UGR: <19",
            "CRI: \u{2265}80",
            "Melanopic EDI (day): \u{2265}300\u{2013}400",
            "CCT: 5000\u{2013}6500 K",
            "Short deployments to boost alertness; avoid all-day cold light.",
            vec![cite(PARK_2015), cite(CHEN_2022)],
        ),
        rec(
            "Art / graphics room",
            "Horizontal lx: 500\u{2013}750",
            "UGR: <19",
            "CRI: \u{2265}90",
            "Melanopic EDI (day): \u{2265}250",
            "CCT: 4000\u{2013}5000 K",
            "High CRI for color judgment; strong vertical lighting to evaluate work.",
            vec![cite(EN_12464)],
        ),
        rec(
            "Science lab",
            "Horizontal lx: 500\u{2013}750",
            "UGR: <19 (\u{2264}16 preferred)",
            "CRI: \u{2265}80",
            "Melanopic EDI (day): \u{2265}250\u{2013}300",
            "CCT: 4000\u{2013}5000 K",
            "Higher task illumination and glare control for practical work; minimize flicker.",
            vec![cite(EN_12464)],
        ),
        rec(
            "Corridors / circulation",
            "Horizontal lx: 100\u{2013}200",
            "UGR: <22",
            "CRI: \u{2265}80",
            "Melanopic EDI: \u{2014}",
            "CCT: 3000\u{2013}4000 K",
            "Comfortable navigation; avoid glare and harsh contrasts.",
            vec![cite(EN_12464)],
        ),
    ]
}

/// The deduplicated master reference list across catalog and recommendations.
pub fn master_references() -> Vec<Citation> {
    let mut seen = Vec::new();
    let mut out: Vec<Citation> = Vec::new();
    let everything = catalog()
        .into_iter()
        .flat_map(|spec| spec.refs)
        .chain(recommendations().into_iter().flat_map(|rec| rec.refs));
    for citation in everything {
        if !seen.contains(&citation.url) {
            seen.push(citation.url.clone());
            out.push(citation);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_spec() -> ParameterSpec {
        ParameterSpec {
            title: "Sample (unit, U)".into(),
            x_label: "U".into(),
            y_label: "Response (%)".into(),
            span: Band::new(0.0, 100.0),
            bands: BandSet::new((40.0, 60.0), (20.0, 80.0), (0.0, 100.0)),
            anchors: vec![(0.0, 0.0), (50.0, 80.0), (100.0, 20.0)],
            notes: "n/a".into(),
            refs: vec![Citation::new("Example", "https://example.com/a")],
            markers: vec![Marker::new(50.0, "midpoint")],
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        validate_catalog(&catalog()).expect("catalog invariants");
        for rec in recommendations() {
            rec.validate().expect("recommendation citations");
        }
    }

    #[test]
    fn rejects_unnested_bands() {
        let mut spec = sample_spec();
        spec.bands = BandSet::new((10.0, 90.0), (20.0, 80.0), (0.0, 100.0));
        match spec.validate() {
            Err(CatalogError::BandsNotNested { inner, .. }) => {
                assert_eq!(inner, Band::new(10.0, 90.0));
            }
            other => panic!("expected nesting error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_reversed_band() {
        let mut spec = sample_spec();
        spec.span = Band::new(100.0, 0.0);
        assert!(matches!(
            spec.validate(),
            Err(CatalogError::EmptyBand { .. })
        ));
    }

    #[test]
    fn rejects_non_ascending_anchors() {
        let mut spec = sample_spec();
        spec.anchors = vec![(0.0, 0.0), (50.0, 10.0), (50.0, 20.0)];
        match spec.validate() {
            Err(CatalogError::AnchorsNotAscending { index, value, .. }) => {
                assert_eq!(index, 2);
                assert_eq!(value, 50.0);
            }
            other => panic!("expected anchor error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_marker_outside_span() {
        let mut spec = sample_spec();
        spec.markers = vec![Marker::new(150.0, "out")];
        assert!(matches!(
            spec.validate(),
            Err(CatalogError::MarkerOutsideSpan { at, .. }) if at == 150.0
        ));
    }

    #[test]
    fn rejects_non_http_citation() {
        let mut spec = sample_spec();
        spec.refs = vec![Citation::new("local file", "file:///tmp/x")];
        assert!(matches!(
            spec.validate(),
            Err(CatalogError::InvalidUrl { .. })
        ));

        spec.refs = vec![Citation::new("not a url", "not a url")];
        assert!(matches!(
            spec.validate(),
            Err(CatalogError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn slug_collapses_punctuation() {
        let spec = sample_spec();
        assert_eq!(spec.slug(), "sample_unit_u");

        let catalog = catalog();
        assert_eq!(
            catalog[0].slug(),
            "cct_correlated_color_temperature_k"
        );
        let mut slugs: Vec<String> = catalog.iter().map(ParameterSpec::slug).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), catalog.len(), "slugs must be unique");
    }

    #[test]
    fn master_references_are_deduplicated() {
        let refs = master_references();
        let mut urls: Vec<&str> = refs.iter().map(|c| c.url.as_str()).collect();
        urls.sort();
        let before = urls.len();
        urls.dedup();
        assert_eq!(before, urls.len());
        assert!(refs.len() >= 8);
    }
}
