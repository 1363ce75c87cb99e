//! Rasterization and output writing: SVG markup → PNG file on disk.
//!
//! The vector markup is parsed with usvg (which shapes text against the
//! batch font database) and rendered into a fixed-size tiny-skia pixmap.
//! Writes are atomic: bytes land in a temp file next to the destination and
//! are renamed over it, so a failed write never leaves a truncated image at
//! the output path. Existing files are overwritten unconditionally; rebuilds
//! are idempotent.

use std::io;
use std::path::Path;
use thiserror::Error;

use crate::fonts::FontSet;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("svg parse failed: {0}")]
    Svg(#[from] usvg::Error),
    #[error("pixmap allocation failed ({0}x{1})")]
    PixmapAlloc(u32, u32),
    #[error("png encode failed: {0}")]
    PngEncode(String),
}

/// Rasterize vector markup to PNG bytes at exactly `width` × `height`.
pub fn rasterize(
    markup: &str,
    fonts: &FontSet,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, RenderError> {
    let mut options = usvg::Options::default();
    options.fontdb = fonts.database();

    let tree = usvg::Tree::from_str(markup, &options)?;
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or(RenderError::PixmapAlloc(width, height))?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());
    pixmap
        .encode_png()
        .map_err(|e| RenderError::PngEncode(e.to_string()))
}

/// Write `bytes` to `path`, creating parent directories as needed.
///
/// Temp-file-then-rename in the destination directory keeps the rename on
/// one filesystem and the final path free of partial files.
pub fn write_asset(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("png.tmp");
    std::fs::write(&tmp, bytes)?;
    if let Err(err) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
        // PNG signature (8 bytes), IHDR length + type (8 bytes), then
        // big-endian width and height.
        let w = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
        let h = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
        (w, h)
    }

    #[test]
    fn rasterizes_to_requested_dimensions() {
        let fonts = FontSet::from_faces(Vec::new());
        let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"1200\" height=\"630\" viewBox=\"0 0 1200 630\"><rect x=\"0\" y=\"0\" width=\"1200\" height=\"630\" rx=\"0.0\" fill=\"#0e1116\"/></svg>";
        let png = rasterize(svg, &fonts, 1200, 630).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(png_dimensions(&png), (1200, 630));
    }

    #[test]
    fn text_without_loaded_faces_still_renders() {
        let fonts = FontSet::from_faces(Vec::new());
        let svg = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" height=\"50\" viewBox=\"0 0 100 50\"><text x=\"0\" y=\"20\" font-family=\"Fira Sans\" font-size=\"16\" fill=\"#fff\">hello</text></svg>";
        let png = rasterize(svg, &fonts, 100, 50).unwrap();
        assert_eq!(png_dimensions(&png), (100, 50));
    }

    #[test]
    fn invalid_markup_is_an_error() {
        let fonts = FontSet::from_faces(Vec::new());
        assert!(matches!(
            rasterize("not svg at all", &fonts, 10, 10),
            Err(RenderError::Svg(_))
        ));
    }

    #[test]
    fn write_creates_nested_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a/b/c.png");
        write_asset(&path, b"bytes").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"bytes");
    }

    #[test]
    fn write_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.png");
        write_asset(&path, b"first").unwrap();
        write_asset(&path, b"second").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn failed_rename_leaves_no_temp_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("blocked.png");
        // A directory at the destination makes the rename fail.
        std::fs::create_dir_all(&path).unwrap();
        assert!(write_asset(&path, b"bytes").is_err());
        assert!(!tmp.path().join("blocked.png.tmp").exists());
    }
}
