//! Frontmatter extraction: raw page text → `{title, description}`.
//!
//! Documentation pages may start with a fenced YAML block:
//!
//! ```text
//! ---
//! title: Quick Start
//! description: Create your first schema in 5 minutes
//! ---
//! ```
//!
//! Only `title` and `description` are recognized; unknown keys are ignored.
//! Everything here is deliberately lenient: an absent block, an unclosed
//! fence, or YAML that fails to parse all degrade to the fixed defaults.
//! Metadata quality is not a correctness property this pipeline enforces,
//! and a single malformed page must never take down the batch.

use serde::Deserialize;

/// Title used when a page declares none.
pub const DEFAULT_TITLE: &str = "Documentation";

/// Description used when a page declares none.
pub const DEFAULT_DESCRIPTION: &str = "Guides, concepts, and reference material.";

/// Resolved page metadata. Both fields are always populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawFrontmatter {
    title: Option<String>,
    description: Option<String>,
}

/// Extract metadata from raw page content, applying defaults per field.
///
/// Whitespace-only values count as absent, matching how empty sidecar
/// metadata is treated elsewhere in the docs toolchain.
pub fn extract(content: &str) -> PageMeta {
    let Some(block) = frontmatter_block(content) else {
        return PageMeta::default();
    };
    let raw: RawFrontmatter = serde_yaml::from_str(block).unwrap_or_default();
    PageMeta {
        title: non_empty(raw.title).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        description: non_empty(raw.description)
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Return the YAML between the opening and closing `---` fences, if any.
///
/// The opening fence must be the first line of the file. Tolerates CRLF and
/// trailing whitespace on fence lines. Returns `None` when the block is
/// absent or never closed.
fn frontmatter_block(content: &str) -> Option<&str> {
    let first_newline = content.find('\n')?;
    if content[..first_newline].trim_end() != "---" {
        return None;
    }

    let body_start = first_newline + 1;
    let mut offset = body_start;
    for line in content[body_start..].split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some(&content[body_start..offset]);
        }
        offset += line.len();
    }
    None
}
