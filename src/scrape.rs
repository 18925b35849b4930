//! Best-effort extraction of measurements from supplied study notes.
//!
//! The booklet can fold in a plain-text notes file (for example an exported
//! literature review).  The text is split into paragraphs and scanned with a
//! fixed set of patterns for kelvin values, lux levels, CRI values, flicker
//! frequencies, age-group mentions and reported percent changes.  This is a
//! heuristic digest, not a parser: text that matches nothing is dropped.
//!
//! A missing file is not an error.  Every document variant that consumes the
//! notes embeds a placeholder line instead and completes normally.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use regex::Regex;

const EXCERPT_LIMIT: usize = 3;
const EXCERPT_MAX_CHARS: usize = 400;

/// Compiled extraction patterns.
#[derive(Debug)]
pub struct Extractor {
    kelvin: Regex,
    lux: Regex,
    cri: Regex,
    hertz: Regex,
    ages: Regex,
    percent: Regex,
}

impl Extractor {
    /// Compiles the built-in pattern set.
    pub fn new() -> Self {
        let compile = |pattern: &str| Regex::new(pattern).expect("invalid built-in pattern");
        Self {
            kelvin: compile(r"\b([2-7]\d{3})\s*K\b"),
            lux: compile(r"(?i)\b(\d{2,4})\s*(?:lux|lx)\b"),
            cri: compile(r"(?i)\bCRI\b[^0-9]{0,20}(\d{2,3})"),
            hertz: compile(r"\b(\d{2,4})\s*Hz\b"),
            ages: compile(
                r"(?i)\b(preschool|kindergarten|elementary|primary|secondary|adolescent|undergraduate|children)\b",
            ),
            percent: compile(r"(?i)(\d{1,3}(?:\.\d{1,2})?)\s*%\s*(?:improv|increas|decreas|reduc)"),
        }
    }

    /// Scans the given paragraphs and collects every recognized value.
    pub fn digest(&self, paragraphs: &[String]) -> StudyDigest {
        let text = paragraphs.join("\n");

        let numbers = |pattern: &Regex| -> Vec<u32> {
            let set: BTreeSet<u32> = pattern
                .captures_iter(&text)
                .filter_map(|caps| caps[1].parse().ok())
                .collect();
            set.into_iter().collect()
        };

        let mut age_groups: Vec<String> = Vec::new();
        for caps in self.ages.captures_iter(&text) {
            let group = caps[1].to_lowercase();
            if !age_groups.contains(&group) {
                age_groups.push(group);
            }
        }

        let percent_changes: Vec<String> = {
            let mut seen = Vec::new();
            for caps in self.percent.captures_iter(&text) {
                let value = format!("{}%", &caps[1]);
                if !seen.contains(&value) {
                    seen.push(value);
                }
            }
            seen
        };

        let excerpts = paragraphs
            .iter()
            .take(EXCERPT_LIMIT)
            .map(|paragraph| shorten(paragraph, EXCERPT_MAX_CHARS))
            .collect();

        StudyDigest {
            cct_kelvin: numbers(&self.kelvin),
            lux_levels: numbers(&self.lux),
            cri_values: numbers(&self.cri),
            flicker_hz: numbers(&self.hertz),
            age_groups,
            percent_changes,
            excerpts,
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Values recognized in the supplied study notes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudyDigest {
    /// Reported or tested CCT values, kelvin, ascending and deduplicated.
    pub cct_kelvin: Vec<u32>,
    /// Reported illuminance measurements, lux.
    pub lux_levels: Vec<u32>,
    /// Reported CRI values.
    pub cri_values: Vec<u32>,
    /// Reported flicker frequencies, Hz.
    pub flicker_hz: Vec<u32>,
    /// Age-group keywords in first-seen order, lowercased.
    pub age_groups: Vec<String>,
    /// Reported percent improvements/reductions, first-seen order.
    pub percent_changes: Vec<String>,
    /// Leading paragraph excerpts, truncated.
    pub excerpts: Vec<String>,
}

impl StudyDigest {
    /// Whether nothing at all was recognized.
    pub fn is_empty(&self) -> bool {
        self.cct_kelvin.is_empty()
            && self.lux_levels.is_empty()
            && self.cri_values.is_empty()
            && self.flicker_hz.is_empty()
            && self.age_groups.is_empty()
            && self.percent_changes.is_empty()
    }
}

/// Outcome of loading the external study-notes file.
#[derive(Clone, Debug, PartialEq)]
pub enum StudySource {
    /// The file was absent; `path` records where it was expected.
    Missing {
        /// The path that was probed.
        path: PathBuf,
    },
    /// The file was read and digested.
    Loaded(StudyDigest),
}

impl StudySource {
    /// Reads and digests the notes file at `path`.
    ///
    /// A missing file yields [`StudySource::Missing`]; any other I/O failure
    /// propagates.
    pub fn load(path: &Path) -> io::Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => {
                let paragraphs = split_paragraphs(&text);
                Ok(Self::Loaded(Extractor::new().digest(&paragraphs)))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!("study notes not found at {}", path.display());
                Ok(Self::Missing {
                    path: path.to_path_buf(),
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Formats the digest as booklet-ready summary lines.
    pub fn summary_lines(&self) -> Vec<String> {
        match self {
            Self::Missing { path } => {
                vec![format!("No study notes found at: {}", path.display())]
            }
            Self::Loaded(digest) => {
                let mut lines =
                    vec!["Findings extracted from the supplied study notes:".to_string()];
                let join_units = |values: &[u32], unit: &str| {
                    values
                        .iter()
                        .map(|value| format!("{value}{unit}"))
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                if !digest.cct_kelvin.is_empty() {
                    lines.push(format!(
                        "Reported/tested CCT values: {}",
                        join_units(&digest.cct_kelvin, " K")
                    ));
                }
                if !digest.lux_levels.is_empty() {
                    lines.push(format!(
                        "Reported illuminance measurements: {}",
                        join_units(&digest.lux_levels, " lx")
                    ));
                }
                if !digest.cri_values.is_empty() {
                    lines.push(format!(
                        "Reported CRI values: {}",
                        join_units(&digest.cri_values, "")
                    ));
                }
                if !digest.flicker_hz.is_empty() {
                    lines.push(format!(
                        "Reported flicker frequencies: {}",
                        join_units(&digest.flicker_hz, " Hz")
                    ));
                }
                if !digest.age_groups.is_empty() {
                    lines.push(format!(
                        "Age groups mentioned: {}",
                        digest.age_groups.join(", ")
                    ));
                }
                if !digest.percent_changes.is_empty() {
                    lines.push(format!(
                        "Percent changes noted: {}",
                        digest.percent_changes.join(", ")
                    ));
                }
                if lines.len() == 1 {
                    lines.push("No measurable values were recognized in the notes.".to_string());
                }
                lines
            }
        }
    }

    /// Leading excerpts of the notes, empty when the file was absent.
    pub fn excerpts(&self) -> &[String] {
        match self {
            Self::Missing { .. } => &[],
            Self::Loaded(digest) => &digest.excerpts,
        }
    }
}

/// Splits raw text into trimmed, non-empty paragraphs at blank lines.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }
    paragraphs
}

fn shorten(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(max_chars).collect();
    shortened.push_str("...");
    shortened
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "The pilot compared 3000K and 5000 K sources in two primary \
classrooms.\n\nDesks measured 475 lux on average, with 613 lx under the windows; CRI \
was 82 throughout. Fluorescent fittings flickered at 100 Hz.\n\nReading speed showed a \
12.5% improvement for secondary students and children reported less strain.";

    #[test]
    fn splits_paragraphs_at_blank_lines() {
        let paragraphs = split_paragraphs(SAMPLE);
        assert_eq!(paragraphs.len(), 3);
        assert!(paragraphs[0].starts_with("The pilot"));
        assert!(paragraphs[2].contains("12.5%"));
    }

    #[test]
    fn extracts_known_value_kinds() {
        let digest = Extractor::new().digest(&split_paragraphs(SAMPLE));
        assert_eq!(digest.cct_kelvin, vec![3000, 5000]);
        assert_eq!(digest.lux_levels, vec![475, 613]);
        assert_eq!(digest.cri_values, vec![82]);
        assert_eq!(digest.flicker_hz, vec![100]);
        assert_eq!(digest.age_groups, vec!["primary", "secondary", "children"]);
        assert_eq!(digest.percent_changes, vec!["12.5%"]);
        assert_eq!(digest.excerpts.len(), 3);
    }

    #[test]
    fn digest_of_unrelated_text_is_empty() {
        let digest =
            Extractor::new().digest(&["nothing numeric in here".to_string()]);
        assert!(digest.is_empty());
        let source = StudySource::Loaded(digest);
        assert!(source.summary_lines()[1].contains("No measurable values"));
    }

    #[test]
    fn missing_file_becomes_placeholder() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("does_not_exist.txt");
        let source = StudySource::load(&path).expect("missing file is not an error");
        assert!(matches!(source, StudySource::Missing { .. }));
        let lines = source.summary_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("does_not_exist.txt"));
        assert!(source.excerpts().is_empty());
    }

    #[test]
    fn loads_and_digests_a_real_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("notes.txt");
        let mut file = std::fs::File::create(&path).expect("create notes");
        file.write_all(SAMPLE.as_bytes()).expect("write notes");
        drop(file);

        let source = StudySource::load(&path).expect("load notes");
        let lines = source.summary_lines();
        assert!(lines.iter().any(|line| line.contains("3000 K, 5000 K")));
        assert!(lines.iter().any(|line| line.contains("475 lx")));
        assert_eq!(source.excerpts().len(), 3);
    }

    #[test]
    fn long_excerpts_are_truncated() {
        let long = "x".repeat(500);
        let digest = Extractor::new().digest(&[long]);
        assert_eq!(digest.excerpts[0].chars().count(), 403);
        assert!(digest.excerpts[0].ends_with("..."));
    }
}
