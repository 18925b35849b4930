//! Font discovery for the booklet renderer.
//!
//! The renderer prefers a bundled Noto Sans family, searched in this order:
//! the `LUXBOOK_FONTS_DIR` environment variable, an `assets/fonts` directory
//! next to the running executable, and `assets/fonts` in the crate source
//! tree.  When the bundled family is missing, well-known system families are
//! tried instead and the substitution is logged.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::fonts::{FontData, FontFamily};
use genpdf::error::{Error, ErrorKind};
use log::warn;

/// Name of the bundled font family.
pub const BUNDLED_FAMILY_NAME: &str = "NotoSans";

/// Environment variable overriding the bundled-font search path.
pub const FONTS_DIR_ENV: &str = "LUXBOOK_FONTS_DIR";

const BUNDLED_FILES: [&str; 4] = [
    "NotoSans-Regular.ttf",
    "NotoSans-Bold.ttf",
    "NotoSans-Italic.ttf",
    "NotoSans-BoldItalic.ttf",
];

/// A system-installed family usable when the bundled fonts are absent.
struct SystemFamily {
    name: &'static str,
    directories: &'static [&'static str],
    files: [&'static str; 4],
}

const SYSTEM_FAMILIES: &[SystemFamily] = &[
    SystemFamily {
        name: "DejaVu Sans",
        directories: &[
            "/usr/share/fonts/truetype/dejavu",
            "/usr/share/fonts/dejavu",
            "/usr/share/fonts/TTF",
        ],
        files: [
            "DejaVuSans.ttf",
            "DejaVuSans-Bold.ttf",
            "DejaVuSans-Oblique.ttf",
            "DejaVuSans-BoldOblique.ttf",
        ],
    },
    SystemFamily {
        name: "Liberation Sans",
        directories: &[
            "/usr/share/fonts/truetype/liberation",
            "/usr/share/fonts/liberation",
            "/usr/share/fonts/liberation-sans",
        ],
        files: [
            "LiberationSans-Regular.ttf",
            "LiberationSans-Bold.ttf",
            "LiberationSans-Italic.ttf",
            "LiberationSans-BoldItalic.ttf",
        ],
    },
];

fn bundled_directory_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(path) = env::var(FONTS_DIR_ENV) {
        if !path.trim().is_empty() {
            candidates.push(PathBuf::from(path));
        }
    }

    if let Ok(current_exe) = env::current_exe() {
        if let Some(bin_dir) = current_exe.parent() {
            let candidate = bin_dir.join("assets/fonts");
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }
    }

    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts");
    if !candidates.contains(&manifest) {
        candidates.push(manifest);
    }

    candidates
}

fn has_all_files(directory: &Path, files: &[&str]) -> bool {
    files.iter().all(|name| directory.join(name).is_file())
}

fn load_family(
    directory: &Path,
    files: &[&str; 4],
    description: &str,
) -> Result<FontFamily<FontData>, Error> {
    let load = |file: &str| -> Result<FontData, Error> {
        let path = directory.join(file);
        FontData::load(&path, None).map_err(|err| {
            Error::new(
                format!(
                    "Failed to load {} font file {}: {}",
                    description,
                    path.display(),
                    err
                ),
                io::Error::new(io::ErrorKind::InvalidData, err.to_string()),
            )
        })
    };

    Ok(FontFamily {
        regular: load(files[0])?,
        bold: load(files[1])?,
        italic: load(files[2])?,
        bold_italic: load(files[3])?,
    })
}

fn load_bundled() -> Result<FontFamily<FontData>, Error> {
    let mut attempts = Vec::new();
    for candidate in bundled_directory_candidates() {
        if has_all_files(&candidate, &BUNDLED_FILES) {
            return load_family(&candidate, &BUNDLED_FILES, BUNDLED_FAMILY_NAME);
        }
        attempts.push(candidate.display().to_string());
    }

    Err(Error::new(
        format!(
            "Bundled '{}' fonts not found. Checked: {}. Set {} to point at a directory \
             containing {}.",
            BUNDLED_FAMILY_NAME,
            attempts.join(", "),
            FONTS_DIR_ENV,
            BUNDLED_FILES.join(", ")
        ),
        io::Error::new(io::ErrorKind::NotFound, "bundled fonts not found"),
    ))
}

fn load_system() -> Result<FontFamily<FontData>, Error> {
    let mut attempts = Vec::new();
    for family in SYSTEM_FAMILIES {
        for directory in family.directories {
            let directory = Path::new(directory);
            if has_all_files(directory, &family.files) {
                let loaded = load_family(directory, &family.files, family.name)?;
                warn!(
                    "bundled fonts unavailable; substituting system family '{}' from {}",
                    family.name,
                    directory.display()
                );
                return Ok(loaded);
            }
            attempts.push(format!("{} ({})", directory.display(), family.name));
        }
    }

    Err(Error::new(
        format!(
            "No usable system font family found. Checked: {}",
            attempts.join(", ")
        ),
        io::Error::new(io::ErrorKind::NotFound, "system fonts not found"),
    ))
}

fn is_missing(err: &Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::IoError(io_err) if io_err.kind() == io::ErrorKind::NotFound
    )
}

/// Returns the bundled family, falling back to a system family when absent.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    match load_bundled() {
        Ok(family) => Ok(family),
        Err(err) if is_missing(&err) => load_system().map_err(|fallback_err| {
            Error::new(
                format!(
                    "No fonts available: {} (bundled: {})",
                    fallback_err, err
                ),
                io::Error::new(io::ErrorKind::NotFound, "no usable fonts"),
            )
        }),
        Err(err) => Err(err),
    }
}

/// Whether any usable font family is present without loading it.
pub fn fonts_available() -> bool {
    bundled_directory_candidates()
        .iter()
        .any(|dir| has_all_files(dir, &BUNDLED_FILES))
        || SYSTEM_FAMILIES.iter().any(|family| {
            family
                .directories
                .iter()
                .any(|dir| has_all_files(Path::new(dir), &family.files))
        })
}
