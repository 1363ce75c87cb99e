//! CLI output formatting.
//!
//! Each stage has `format_*` functions (pure, return strings) and the
//! orchestrator or `main` prints them; the split keeps the text testable
//! without capturing stdout. Every discovered document produces exactly one
//! line, success or error, followed by a single two-number summary.

use std::path::Path;

use crate::batch::DocError;
use crate::discover::DiscoveredDoc;
use crate::frontmatter::PageMeta;
use crate::types::{BatchSummary, section_for};

/// Display label for a slug; the root page has an empty slug.
fn slug_label(slug: &str) -> &str {
    if slug.is_empty() { "(root)" } else { slug }
}

/// Success line for one generated image.
///
/// ```text
/// getting-started/quick-start → getting-started/quick-start.png
/// ```
pub fn format_generated(slug: &str, out_path: &Path, output_dir: &Path) -> String {
    let shown = out_path.strip_prefix(output_dir).unwrap_or(out_path);
    format!("{} → {}", slug_label(slug), shown.display())
}

/// Error line for one failed document.
pub fn format_doc_error(slug: &str, err: &DocError) -> String {
    format!("error: {}: {}", slug_label(slug), err)
}

/// Final two-number summary.
pub fn format_summary(summary: &BatchSummary) -> String {
    format!(
        "Generated {} image{}, {} error{}",
        summary.generated,
        plural(summary.generated),
        summary.errors,
        plural(summary.errors),
    )
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Listing for the `scan` command: one header line per document plus
/// indented metadata context.
pub fn format_scan_output(entries: &[(DiscoveredDoc, PageMeta)], root: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, (doc, meta)) in entries.iter().enumerate() {
        let source = doc.path.strip_prefix(root).unwrap_or(&doc.path);
        lines.push(format!("{:0>3} {}", index + 1, meta.title));
        lines.push(format!("    Source: {}", source.display()));
        lines.push(format!("    Slug: {}", slug_label(&doc.slug)));
        if let Some(section) = section_for(&doc.slug) {
            lines.push(format!("    Section: {section}"));
        }
    }
    lines.push(format!(
        "Found {} document{}",
        entries.len(),
        plural(entries.len())
    ));
    lines
}

pub fn print_scan_output(entries: &[(DiscoveredDoc, PageMeta)], root: &Path) {
    for line in format_scan_output(entries, root) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn generated_line_shows_slug_and_relative_output() {
        let line = format_generated(
            "guides/errors",
            Path::new("public/og/guides/errors.png"),
            Path::new("public/og"),
        );
        assert_eq!(line, "guides/errors → guides/errors.png");
    }

    #[test]
    fn root_slug_labelled_explicitly() {
        let line = format_generated("", Path::new("public/og/index.png"), Path::new("public/og"));
        assert_eq!(line, "(root) → index.png");
    }

    #[test]
    fn summary_pluralizes() {
        assert_eq!(
            format_summary(&BatchSummary {
                generated: 12,
                errors: 1
            }),
            "Generated 12 images, 1 error"
        );
        assert_eq!(
            format_summary(&BatchSummary {
                generated: 1,
                errors: 0
            }),
            "Generated 1 image, 0 errors"
        );
    }

    #[test]
    fn scan_listing_includes_section_when_nested() {
        let entries = vec![(
            DiscoveredDoc {
                path: PathBuf::from("/docs/getting-started/quick-start.md"),
                slug: "getting-started/quick-start".to_string(),
            },
            PageMeta {
                title: "Quick Start".to_string(),
                description: "d".to_string(),
            },
        )];
        let lines = format_scan_output(&entries, Path::new("/docs"));
        assert_eq!(lines[0], "001 Quick Start");
        assert_eq!(lines[1], "    Source: getting-started/quick-start.md");
        assert_eq!(lines[2], "    Slug: getting-started/quick-start");
        assert_eq!(lines[3], "    Section: getting started");
        assert_eq!(lines[4], "Found 1 document");
    }
}
