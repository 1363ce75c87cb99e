//! Content discovery: find documentation source files and derive their slugs.
//!
//! Stage 1 of the pipeline. Walks the content root recursively, keeps files
//! with a recognized documentation extension, and derives the routing slug
//! each page will be served under. The slug doubles as the output image path,
//! so it must be derived exactly the way the site router does it:
//!
//! ```text
//! content/docs/getting-started/quick-start.mdx → getting-started/quick-start
//! content/docs/guides/index.md                 → guides
//! content/docs/index.md                        → ""        (root page)
//! ```
//!
//! Traversal order is not meaningful; callers must not rely on it beyond log
//! readability. Hidden entries (dot-prefixed) are skipped, as are their
//! subtrees. Symlink cycles are out of scope; the walk assumes a tree.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Extensions recognized as documentation sources.
pub const DOC_EXTENSIONS: &[&str] = &["md", "mdx"];

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("content root not found: {0}")]
    RootNotFound(PathBuf),
    #[error("walking content tree: {0}")]
    Walk(#[from] walkdir::Error),
}

/// A source file paired with its derived slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredDoc {
    pub path: PathBuf,
    pub slug: String,
}

/// Walk `root` and return every documentation source file beneath it.
///
/// A missing or non-directory root is fatal: the batch must not start at all
/// rather than silently produce zero images.
pub fn discover(root: &Path) -> Result<Vec<DiscoveredDoc>, DiscoverError> {
    if !root.is_dir() {
        return Err(DiscoverError::RootNotFound(root.to_path_buf()));
    }

    let mut docs = Vec::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry?;
        if entry.file_type().is_file() && is_doc(entry.path()) {
            let path = entry.into_path();
            let slug = slug_for(root, &path);
            docs.push(DiscoveredDoc { path, slug });
        }
    }
    Ok(docs)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

fn is_doc(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    DOC_EXTENSIONS.contains(&ext.as_str())
}

/// Derive the routing slug for a source file under `root`.
///
/// 1. Take the path relative to the content root.
/// 2. Strip the file extension.
/// 3. Drop a trailing `index` segment.
///
/// Slugs always use `/` separators regardless of host platform. A root-level
/// `index.md` yields the empty slug; the orchestrator maps that to
/// `index.png` instead of an empty filename.
pub fn slug_for(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);

    let mut segments: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if let Some(last) = segments.last_mut()
        && let Some(stem) = Path::new(last.as_str()).file_stem()
    {
        *last = stem.to_string_lossy().into_owned();
    }

    if segments.last().map(String::as_str) == Some("index") {
        segments.pop();
    }

    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "stub").unwrap();
    }

    // =========================================================================
    // Slug derivation
    // =========================================================================

    #[test]
    fn slug_strips_root_and_extension() {
        let root = Path::new("/content/docs");
        assert_eq!(
            slug_for(root, Path::new("/content/docs/getting-started/quick-start.md")),
            "getting-started/quick-start"
        );
    }

    #[test]
    fn slug_strips_trailing_index_segment() {
        let root = Path::new("/content/docs");
        assert_eq!(
            slug_for(root, Path::new("/content/docs/guides/index.mdx")),
            "guides"
        );
    }

    #[test]
    fn root_index_yields_empty_slug() {
        let root = Path::new("/content/docs");
        assert_eq!(slug_for(root, Path::new("/content/docs/index.md")), "");
    }

    #[test]
    fn slug_is_deterministic() {
        let root = Path::new("/content/docs");
        let path = Path::new("/content/docs/cli/commands/init.md");
        assert_eq!(slug_for(root, path), slug_for(root, path));
        assert_eq!(slug_for(root, path), "cli/commands/init");
    }

    #[test]
    fn index_only_stripped_as_final_segment() {
        let root = Path::new("/content/docs");
        // A directory named "index" keeps its segment.
        assert_eq!(
            slug_for(root, Path::new("/content/docs/index/about.md")),
            "index/about"
        );
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    #[test]
    fn finds_nested_documents() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("index.md"));
        touch(&tmp.path().join("getting-started/quick-start.mdx"));
        touch(&tmp.path().join("guides/advanced/routing.md"));

        let mut slugs: Vec<String> = discover(tmp.path())
            .unwrap()
            .into_iter()
            .map(|d| d.slug)
            .collect();
        slugs.sort();

        assert_eq!(
            slugs,
            vec!["", "getting-started/quick-start", "guides/advanced/routing"]
        );
    }

    #[test]
    fn ignores_unrecognized_extensions() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("page.md"));
        touch(&tmp.path().join("notes.txt"));
        touch(&tmp.path().join("meta.json"));

        let docs = discover(tmp.path()).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].slug, "page");
    }

    #[test]
    fn skips_hidden_directories() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("visible.md"));
        touch(&tmp.path().join(".drafts/secret.md"));

        let docs = discover(tmp.path()).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].slug, "visible");
    }

    #[test]
    fn missing_root_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let gone = tmp.path().join("does-not-exist");
        let result = discover(&gone);
        assert!(matches!(result, Err(DiscoverError::RootNotFound(_))));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("README.MD"));

        let docs = discover(tmp.path()).unwrap();
        assert_eq!(docs.len(), 1);
    }
}
