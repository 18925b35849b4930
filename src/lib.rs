//! Core entry point for the luxbook crate.
//!
//! luxbook turns an authored catalog of school-lighting parameters into
//! referenced PDF booklets: one banded dose-response chart per parameter,
//! assembled together with front matter, recommendation tables and citation
//! lists.  The [`jobs`] module exposes the runnable document variants that the
//! `luxbook` binary drives from the command line.

pub mod booklet;
pub mod builder;
pub mod chart;
pub mod content;
pub mod curve;
pub mod elements;
pub mod error;
pub mod fonts;
pub mod jobs;
pub mod model;
pub mod params;
pub mod scrape;
pub mod text;

#[cfg(feature = "bookmarks")]
pub mod bookmarks;

pub use error::BookletError;
