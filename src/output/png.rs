//! PNG chart output.
//!
//! The raster image is rendered from the SVG document of the vector export.

use crate::utils::error::OutputError;
use log::{debug, info};
use resvg::{tiny_skia, usvg};
use std::path::Path;
use std::sync::Arc;

/// Render an SVG document to PNG bytes
///
/// System fonts are loaded so chart text is rasterized; without any fonts
/// text is silently dropped.
pub fn rasterize_svg(svg_content: &str) -> Result<Vec<u8>, OutputError> {
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    debug!("Loaded {} font faces", fontdb.len());

    let options = usvg::Options {
        fontdb: Arc::new(fontdb),
        ..Default::default()
    };

    let tree = usvg::Tree::from_str(svg_content, &options)
        .map_err(|e| OutputError::RasterFailed(format!("Invalid SVG: {}", e)))?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        OutputError::RasterFailed(format!(
            "Cannot allocate {}x{} image",
            size.width(),
            size.height()
        ))
    })?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| OutputError::RasterFailed(format!("PNG encoding failed: {}", e)))
}

/// Rasterize SVG content and write it as a PNG file
///
/// **Public** - main entry point for PNG output
///
/// # Errors
/// * `OutputError::RasterFailed` - SVG could not be parsed or rendered
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_png(svg_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing PNG to: {}", output_path.display());

    let png = rasterize_svg(svg_content)?;
    super::write_file(&png, output_path)?;

    info!(
        "PNG written successfully ({} bytes, {:.2} KB)",
        png.len(),
        png.len() as f64 / 1024.0
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_rasterize_svg() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="20"><rect width="40" height="20" fill="blue"/></svg>"#;
        let png = rasterize_svg(svg).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_rasterize_invalid_svg() {
        let result = rasterize_svg("not an svg");
        assert!(matches!(result, Err(OutputError::RasterFailed(_))));
    }

    #[test]
    fn test_write_png_creates_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("out/chart.png");
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"/>"#;

        write_png(svg, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
    }
}
