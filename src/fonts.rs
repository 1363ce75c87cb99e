//! Font resources for text rendering.
//!
//! The batch needs three weights (regular, semi-bold, bold) matching the
//! weights the template references. They are loaded exactly once before the
//! batch starts and shared read-only by every worker; a [`FontSet`] is passed
//! into the orchestrator explicitly rather than living in a global.
//!
//! Two sources:
//! - [`FontSet::fetch`] downloads the default family from a pinned location.
//!   A failed fetch is fatal for the whole batch; cards with silently missing
//!   text are worse than a failed build.
//! - [`FontSet::load_dir`] reads `.ttf`/`.otf` files from a local directory,
//!   for offline or pinned builds.
//!
//! A file that loads but yields no usable face is only a warning: usvg
//! substitutes another loaded weight, which is acceptable degraded output.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Family used when no face reports a name (e.g. an empty database).
pub const DEFAULT_FAMILY: &str = "Fira Sans";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Pinned download locations, one per weight the template uses.
const FONT_SOURCES: &[(&str, &str)] = &[
    (
        "Regular",
        "https://cdn.jsdelivr.net/gh/google/fonts@main/ofl/firasans/FiraSans-Regular.ttf",
    ),
    (
        "SemiBold",
        "https://cdn.jsdelivr.net/gh/google/fonts@main/ofl/firasans/FiraSans-SemiBold.ttf",
    ),
    (
        "Bold",
        "https://cdn.jsdelivr.net/gh/google/fonts@main/ofl/firasans/FiraSans-Bold.ttf",
    ),
];

#[derive(Error, Debug)]
pub enum FontError {
    #[error("font fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("reading fonts: {0}")]
    Io(#[from] std::io::Error),
    #[error("no font files (.ttf/.otf) found in {0}")]
    EmptyDir(PathBuf),
}

/// Shared, read-only font database for the whole batch.
#[derive(Clone)]
pub struct FontSet {
    db: Arc<fontdb::Database>,
    family: String,
}

impl FontSet {
    /// Build a set from raw font file contents. Unparsable buffers are
    /// skipped by the database; an empty result only warns.
    pub fn from_faces(faces: Vec<Vec<u8>>) -> Self {
        let mut db = fontdb::Database::new();
        for data in faces {
            db.load_font_data(data);
        }
        if db.is_empty() {
            log::warn!("no usable font faces loaded; text may be dropped from rendered cards");
        }
        let family = db
            .faces()
            .next()
            .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
            .unwrap_or_else(|| DEFAULT_FAMILY.to_string());
        Self {
            db: Arc::new(db),
            family,
        }
    }

    /// Download the pinned family, one request per weight.
    pub fn fetch() -> Result<Self, FontError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()?;
        let mut faces = Vec::with_capacity(FONT_SOURCES.len());
        for (weight, url) in FONT_SOURCES {
            log::debug!("fetching {weight} face from {url}");
            let response = client.get(*url).send()?.error_for_status()?;
            faces.push(response.bytes()?.to_vec());
        }
        Ok(Self::from_faces(faces))
    }

    /// Load every font file from a local directory (sorted by name so face
    /// order, and therefore the reported family, is stable).
    pub fn load_dir(dir: &Path) -> Result<Self, FontError> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.extension()
                    .map(|ext| {
                        let ext = ext.to_string_lossy().to_lowercase();
                        ext == "ttf" || ext == "otf"
                    })
                    .unwrap_or(false)
            })
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(FontError::EmptyDir(dir.to_path_buf()));
        }

        let mut faces = Vec::with_capacity(files.len());
        for file in &files {
            faces.push(std::fs::read(file)?);
        }
        Ok(Self::from_faces(faces))
    }

    /// Shared database handle for the rasterizer.
    pub fn database(&self) -> Arc<fontdb::Database> {
        self.db.clone()
    }

    /// Family name referenced by the emitted markup.
    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn face_count(&self) -> usize {
        self.db.len()
    }
}
