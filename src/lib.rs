//! # og-press
//!
//! Build-time social preview ("OG") image generation for documentation
//! sites. The content tree is the data source: every markdown/MDX page gets
//! one 1200×630 PNG card at an output path mirroring the site's routing, so
//! `content/docs/getting-started/quick-start.mdx` produces
//! `public/og/getting-started/quick-start.png`.
//!
//! # Architecture: One Linear Pipeline Per Document
//!
//! ```text
//! discover   content tree → source files + routing slugs
//! frontmatter  raw page  → {title, description} with fixed fallbacks
//! template   record      → declarative layout tree (fixed card design)
//! svg        layout tree → SVG markup sized to the canvas
//! raster     SVG         → 1200×630 PNG, written atomically
//! batch      drives all of the above, isolating per-document failures
//! ```
//!
//! Documents share nothing but the read-only font set, so the orchestrator
//! fans them out on the rayon pool. One bad page never aborts the batch: its
//! failure is logged and counted, and the run still exits successfully
//! unless `--strict` asks otherwise.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`discover`] | Walks the content root, filters by extension, derives slugs |
//! | [`frontmatter`] | Lenient YAML frontmatter → metadata with fixed defaults |
//! | [`template`] | Fixed card design as a typed layout tree, truncation budgets |
//! | [`svg`] | Layout tree → SVG markup (column/row layout, word wrap) |
//! | [`raster`] | SVG → PNG via usvg/resvg/tiny-skia, atomic output writes |
//! | [`fonts`] | Fetch-once font set shared read-only across the batch |
//! | [`batch`] | Per-document orchestration and the final summary |
//! | [`output`] | CLI output formatting (pure `format_*` helpers) |
//! | [`types`] | Shared types: `DocumentRecord`, `BatchSummary` |
//!
//! # Design Decisions
//!
//! ## Overflow Is Prevented, Not Negotiated
//!
//! The card height can never exceed the canvas because title and description
//! are truncated to fixed character budgets *before* the layout tree is
//! built. The renderer never measures real glyphs to decide what fits; it
//! only estimates widths for word wrapping, and the budgets leave enough
//! slack that estimate error cannot push content off the canvas.
//!
//! ## SVG As The Render Boundary
//!
//! The composer emits a renderer-agnostic layout tree, and the SVG module
//! turns it into plain markup. Everything that needs real font data (text
//! shaping, glyph outlines, rasterization) is delegated to usvg/resvg
//! against a `fontdb` database loaded once per run. This keeps the layout
//! logic pure, deterministic, and testable without fonts on disk.
//!
//! ## Full Rebuilds Only
//!
//! There is no cache and no incremental mode. The batch is idempotent and
//! cheap at documentation scale (tens of pages), so regenerating everything
//! on each build is simpler than tracking staleness, and output files are
//! overwritten in place.

pub mod batch;
pub mod discover;
pub mod fonts;
pub mod frontmatter;
pub mod output;
pub mod raster;
pub mod svg;
pub mod template;
pub mod types;
