//! Shared types used across the pipeline stages.
//!
//! A [`DocumentRecord`] is the unit of work: one per discovered source file,
//! fully resolved (slug, metadata, section) before any rendering happens.
//! [`BatchSummary`] is the aggregate result the orchestrator reports at the
//! end of a run.

use std::path::PathBuf;

/// One documentation page, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Absolute path to the source document.
    pub source_path: PathBuf,
    /// Routing-relative identifier (content root and extension stripped,
    /// trailing `index` segment removed). Empty for the root index page.
    pub slug: String,
    /// Page title, already defaulted when frontmatter is absent.
    pub title: String,
    /// Page description, already defaulted when frontmatter is absent.
    pub description: String,
    /// First path segment of a nested slug, hyphens replaced with spaces.
    /// `None` for top-level pages.
    pub section: Option<String>,
}

impl DocumentRecord {
    pub fn new(source_path: PathBuf, slug: String, title: String, description: String) -> Self {
        let section = section_for(&slug);
        Self {
            source_path,
            slug,
            title,
            description,
            section,
        }
    }
}

/// Derive the human-readable section name from a slug.
///
/// `getting-started/quick-start` → `Some("getting started")`, while a
/// top-level slug like `changelog` (or the empty root slug) has no section.
pub fn section_for(slug: &str) -> Option<String> {
    let (first, _) = slug.split_once('/')?;
    Some(first.replace('-', " "))
}

/// Aggregate counts reported after a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub generated: usize,
    pub errors: usize,
}
