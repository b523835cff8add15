//! SVG to PDF/PNG conversion with TRUE vector fidelity via svg2pdf.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Raster scale for PNG previews; 2x keeps small card text legible.
pub const PNG_ZOOM: f32 = 2.0;

/// Exports a filled card to print formats.
///
/// PDF export goes through svg2pdf and keeps complete vector graphics
/// (no rasterization); PNG export rasterizes through resvg as a preview.
pub struct CardExporter;

impl CardExporter {
    /// Creates a new exporter with default options.
    pub fn new() -> Self {
        Self
    }

    /// Converts SVG content to a vector PDF at `output_path`.
    ///
    /// # Errors
    ///
    /// - SVG parsing errors (malformed XML, unsupported features)
    /// - Invalid dimensions (zero or negative width/height)
    /// - File I/O errors (permissions, disk full)
    pub fn to_pdf(&self, svg_content: &str, output_path: &Path) -> Result<()> {
        info!("Converting SVG to PDF (vector): output={}", output_path.display());

        let tree = self.parse_tree(svg_content)?;

        let pdf_data = svg2pdf::to_pdf(
            &tree,
            svg2pdf::ConversionOptions::default(),
            svg2pdf::PageOptions::default(),
        );

        fs::write(output_path, &pdf_data)
            .with_context(|| format!("Failed to write PDF to {}", output_path.display()))?;

        info!("PDF export complete (vector): {} bytes", pdf_data.len());
        Ok(())
    }

    /// Rasterizes SVG content to a PNG preview at `output_path`.
    ///
    /// The pixmap is scaled by `zoom` and filled white before rendering,
    /// since the card relies on the page background for contrast.
    pub fn to_png(&self, svg_content: &str, output_path: &Path, zoom: f32) -> Result<()> {
        use resvg::tiny_skia;

        info!("Rasterizing SVG to PNG: output={}", output_path.display());

        let tree = self.parse_tree(svg_content)?;
        let size = tree.size();
        let width = (size.width() * zoom).ceil() as u32;
        let height = (size.height() * zoom).ceil() as u32;

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .context("Failed to allocate pixmap")?;
        pixmap.fill(tiny_skia::Color::WHITE);

        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(zoom, zoom),
            &mut pixmap.as_mut(),
        );

        let png_data = pixmap.encode_png().context("Failed to encode PNG")?;
        fs::write(output_path, &png_data)
            .with_context(|| format!("Failed to write PNG to {}", output_path.display()))?;

        info!("PNG export complete: {} bytes", png_data.len());
        Ok(())
    }

    /// Parses SVG content to a usvg tree with system fonts available for
    /// text layout, rejecting degenerate dimensions.
    fn parse_tree(&self, svg_content: &str) -> Result<usvg::Tree> {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();

        let tree = usvg::Tree::from_str(svg_content, &options)
            .context("Failed to parse SVG content")?;

        let size = tree.size();
        if size.width() <= 0.0 || size.height() <= 0.0 {
            anyhow::bail!(
                "Invalid SVG dimensions: {}x{}",
                size.width(),
                size.height()
            );
        }

        Ok(tree)
    }
}

impl Default for CardExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const SIMPLE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
        <rect x="10" y="10" width="80" height="80" fill="blue"/>
    </svg>"#;

    #[test]
    fn test_convert_simple_svg() {
        let exporter = CardExporter::new();

        let temp = NamedTempFile::new().unwrap();
        let result = exporter.to_pdf(SIMPLE_SVG, temp.path());

        assert!(result.is_ok());
        let metadata = temp.as_file().metadata().unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_invalid_svg() {
        let exporter = CardExporter::new();

        let temp = NamedTempFile::new().unwrap();
        let result = exporter.to_pdf("not an svg", temp.path());

        assert!(result.is_err());
    }

    #[test]
    fn test_zero_dimensions() {
        let exporter = CardExporter::new();
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="0" height="0"></svg>"#;

        let temp = NamedTempFile::new().unwrap();
        let result = exporter.to_pdf(svg, temp.path());

        assert!(result.is_err());
    }

    #[test]
    fn test_png_export() {
        let exporter = CardExporter::new();

        let temp = NamedTempFile::new().unwrap();
        let result = exporter.to_png(SIMPLE_SVG, temp.path(), PNG_ZOOM);

        assert!(result.is_ok());
        let png_data = std::fs::read(temp.path()).unwrap();
        // PNG signature
        assert_eq!(&png_data[..4], &[0x89, b'P', b'N', b'G']);
    }
}
