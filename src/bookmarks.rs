//! PDF outline injection built on `lopdf`.
//!
//! The renderer computes a start page per section; this module re-opens the
//! rendered bytes, builds a flat `/Outlines` tree with one entry per section
//! and points each entry at its page with a `/Fit` destination.

use std::fmt;

use lopdf::{Dictionary, Document, Object, ObjectId};

/// One outline entry: a title and a 1-indexed page number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutlineEntry {
    title: String,
    page: usize,
}

impl OutlineEntry {
    /// Creates an entry pointing at `page` (1-indexed).
    pub fn new(title: impl Into<String>, page: usize) -> Self {
        Self {
            title: title.into(),
            page,
        }
    }

    /// The outline title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The destination page, 1-indexed.
    pub fn page(&self) -> usize {
        self.page
    }
}

/// Errors raised while rewriting the rendered PDF.
#[derive(Debug)]
pub enum OutlineError {
    /// The PDF bytes could not be parsed or re-serialized.
    Pdf(lopdf::Error),
    /// The document trailer has no catalog reference.
    MissingCatalog,
    /// The catalog object is not a dictionary.
    InvalidCatalog,
    /// An entry points at a page the document does not have.
    MissingPage {
        /// Title of the offending entry.
        title: String,
        /// The requested 1-indexed page.
        page: usize,
    },
}

impl fmt::Display for OutlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf(err) => write!(f, "failed to process PDF bytes: {err}"),
            Self::MissingCatalog => write!(f, "PDF catalog entry is missing"),
            Self::InvalidCatalog => write!(f, "PDF catalog entry is not a dictionary"),
            Self::MissingPage { title, page } => {
                write!(f, "outline entry `{title}` refers to missing page {page}")
            }
        }
    }
}

impl std::error::Error for OutlineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pdf(err) => Some(err),
            Self::MissingCatalog | Self::InvalidCatalog | Self::MissingPage { .. } => None,
        }
    }
}

impl From<lopdf::Error> for OutlineError {
    fn from(err: lopdf::Error) -> Self {
        Self::Pdf(err)
    }
}

impl From<std::io::Error> for OutlineError {
    fn from(err: std::io::Error) -> Self {
        Self::Pdf(err.into())
    }
}

/// Returns the number of pages in the rendered PDF.
pub fn page_count(pdf_bytes: &[u8]) -> Result<usize, OutlineError> {
    let document = Document::load_mem(pdf_bytes)?;
    Ok(document.get_pages().len())
}

/// Attaches a flat outline to the rendered PDF and returns the new bytes.
///
/// With no entries the input bytes are returned unchanged.
pub fn apply_outline(pdf_bytes: &[u8], entries: &[OutlineEntry]) -> Result<Vec<u8>, OutlineError> {
    if entries.is_empty() {
        return Ok(pdf_bytes.to_vec());
    }

    let mut document = Document::load_mem(pdf_bytes)?;
    let pages = document.get_pages();

    let mut resolved: Vec<(ObjectId, ObjectId, &OutlineEntry)> = Vec::with_capacity(entries.len());
    for entry in entries {
        let page_ref = pages
            .get(&(entry.page as u32))
            .copied()
            .ok_or_else(|| OutlineError::MissingPage {
                title: entry.title.clone(),
                page: entry.page,
            })?;
        resolved.push((document.new_object_id(), page_ref, entry));
    }

    let outlines_id = document.new_object_id();
    for (index, (object_id, page_ref, entry)) in resolved.iter().enumerate() {
        let mut dictionary = Dictionary::new();
        dictionary.set("Title", Object::string_literal(entry.title.as_str()));
        dictionary.set(
            "Dest",
            Object::Array(vec![
                Object::Reference(*page_ref),
                Object::Name("Fit".into()),
            ]),
        );
        dictionary.set("Parent", Object::Reference(outlines_id));
        if index > 0 {
            dictionary.set("Prev", Object::Reference(resolved[index - 1].0));
        }
        if index + 1 < resolved.len() {
            dictionary.set("Next", Object::Reference(resolved[index + 1].0));
        }
        document
            .objects
            .insert(*object_id, Object::Dictionary(dictionary));
    }

    let mut root = Dictionary::new();
    root.set("Type", Object::Name("Outlines".into()));
    root.set("Count", Object::Integer(resolved.len() as i64));
    root.set("First", Object::Reference(resolved[0].0));
    root.set("Last", Object::Reference(resolved[resolved.len() - 1].0));
    document.objects.insert(outlines_id, Object::Dictionary(root));

    let catalog_id = document
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .map_err(|_| OutlineError::MissingCatalog)?;
    let catalog = document
        .objects
        .get_mut(&catalog_id)
        .ok_or(OutlineError::MissingCatalog)?
        .as_dict_mut()
        .map_err(|_| OutlineError::InvalidCatalog)?;
    catalog.set("Outlines", Object::Reference(outlines_id));

    let mut buffer = Vec::new();
    document.save_to(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_entry_list_is_a_passthrough() {
        let bytes = b"%PDF-1.4 not really a pdf".to_vec();
        let out = apply_outline(&bytes, &[]).expect("passthrough");
        assert_eq!(out, bytes);
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let entries = [OutlineEntry::new("Intro", 1)];
        assert!(matches!(
            apply_outline(b"not a pdf", &entries),
            Err(OutlineError::Pdf(_))
        ));
    }
}
