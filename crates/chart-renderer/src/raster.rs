//! SVG-to-raster conversion for chart export.

use chart_common::error::{ChartError, ChartResult};

/// Rasterized chart image, straight-alpha RGBA.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Rasterize an SVG document to RGBA pixels at the requested size.
///
/// The SVG is scaled to fill the output, matching how the browser scales
/// the same markup into its container.
pub fn rasterize(svg: &str, width: u32, height: u32) -> ChartResult<RasterImage> {
    let opt = usvg::Options::default();
    let tree =
        usvg::Tree::from_str(svg, &opt).map_err(|e| ChartError::Raster(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
        ChartError::Raster(format!("invalid raster dimensions {}x{}", width, height))
    })?;

    let size = tree.size();
    let scale_x = width as f32 / size.width();
    let scale_y = height as f32 / size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let mut pixels = pixmap.take();
    unpremultiply(&mut pixels);

    Ok(RasterImage {
        pixels,
        width,
        height,
    })
}

/// Convert premultiplied RGBA (the pixmap's native representation) to the
/// straight alpha PNG expects.
fn unpremultiply(pixels: &mut [u8]) {
    for pixel in pixels.chunks_exact_mut(4) {
        let a = pixel[3];
        if a == 0 || a == 255 {
            continue;
        }
        let a16 = a as u16;
        pixel[0] = ((pixel[0] as u16 * 255 + a16 / 2) / a16).min(255) as u8;
        pixel[1] = ((pixel[1] as u16 * 255 + a16 / 2) / a16).min(255) as u8;
        pixel[2] = ((pixel[2] as u16 * 255 + a16 / 2) / a16).min(255) as u8;
    }
}

/// Render an SVG chart straight to an encoded PNG.
pub fn export_png(svg: &str, width: u32, height: u32) -> ChartResult<Vec<u8>> {
    let image = rasterize(svg, width, height)?;
    crate::png::encode_auto(&image.pixels, image.width as usize, image.height as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rasterize_dimension_check() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10"><rect x="0" y="0" width="10" height="10" fill="#ff0000"/></svg>"##;
        let image = rasterize(svg, 20, 20).unwrap();
        assert_eq!(image.pixels.len(), 20 * 20 * 4);

        // The rect covers the whole surface, so every pixel is opaque red
        assert_eq!(&image.pixels[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_rasterize_rejects_invalid_svg() {
        assert!(rasterize("not svg at all", 10, 10).is_err());
    }

    #[test]
    fn test_rasterize_rejects_zero_size() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"/>"#;
        assert!(rasterize(svg, 0, 10).is_err());
    }

    #[test]
    fn test_export_png_signature() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 10 10"><rect x="0" y="0" width="10" height="10" fill="#2563eb"/></svg>"##;
        let png = export_png(svg, 16, 16).unwrap();
        assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }
}
