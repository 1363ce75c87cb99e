//! Batch orchestration: drive the full pipeline for every discovered page.
//!
//! Per document: read → frontmatter → compose → vector markup → rasterize →
//! write. Documents are independent (disjoint output paths, no shared
//! mutable state beyond the read-only font set), so they are processed on
//! the rayon pool. A failure in any stage is caught per document: logged
//! with the offending slug, counted, and the batch moves on. There are no
//! retries; re-running the batch is the retry mechanism.
//!
//! Only two things abort before any document is processed: a missing content
//! root and a failed font load, both surfaced by the caller before `run`.

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::discover::{self, DiscoverError, DiscoveredDoc};
use crate::fonts::FontSet;
use crate::frontmatter;
use crate::output;
use crate::raster;
use crate::svg;
use crate::template::{self, Brand, Palette};
use crate::types::{BatchSummary, DocumentRecord};

/// A per-document failure. Recoverable: recorded, never fatal to the batch.
#[derive(Error, Debug)]
pub enum DocError {
    #[error("reading source: {0}")]
    Read(#[from] std::io::Error),
    #[error(transparent)]
    Render(#[from] raster::RenderError),
    #[error("writing {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Map a slug to its output file. The empty (root) slug becomes `index.png`.
pub fn output_path(output_dir: &Path, slug: &str) -> PathBuf {
    if slug.is_empty() {
        output_dir.join("index.png")
    } else {
        output_dir.join(format!("{slug}.png"))
    }
}

/// Run the whole batch. Returns the aggregate counts; per-document results
/// are printed as they happen.
pub fn run(
    source_root: &Path,
    output_dir: &Path,
    fonts: &FontSet,
    palette: &Palette,
    brand: &Brand,
) -> Result<BatchSummary, DiscoverError> {
    let docs = discover::discover(source_root)?;

    let generated: usize = docs
        .par_iter()
        .map(|doc| match generate_one(doc, output_dir, fonts, palette, brand) {
            Ok(path) => {
                println!("{}", output::format_generated(&doc.slug, &path, output_dir));
                1
            }
            Err(err) => {
                println!("{}", output::format_doc_error(&doc.slug, &err));
                0
            }
        })
        .sum();

    Ok(BatchSummary {
        generated,
        errors: docs.len() - generated,
    })
}

/// One document, start to finish.
fn generate_one(
    doc: &DiscoveredDoc,
    output_dir: &Path,
    fonts: &FontSet,
    palette: &Palette,
    brand: &Brand,
) -> Result<PathBuf, DocError> {
    let raw = std::fs::read_to_string(&doc.path)?;
    let meta = frontmatter::extract(&raw);
    let record = DocumentRecord::new(
        doc.path.clone(),
        doc.slug.clone(),
        meta.title,
        meta.description,
    );

    let tree = template::compose(&record, palette, brand);
    let markup = svg::render_markup(
        &tree,
        fonts.family(),
        template::CANVAS_WIDTH,
        template::CANVAS_HEIGHT,
    );
    let png = raster::rasterize(&markup, fonts, template::CANVAS_WIDTH, template::CANVAS_HEIGHT)?;

    let out = output_path(output_dir, &doc.slug);
    raster::write_asset(&out, &png).map_err(|source| DocError::Write {
        path: out.clone(),
        source,
    })?;
    Ok(out)
}
