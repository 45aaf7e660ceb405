//! PNG encoding for exported chart images.
//!
//! Chart rasters are flat-color figures with few unique colors, so the
//! encoder prefers indexed PNG (color type 3) and falls back to RGBA
//! (color type 6) when an image exceeds 256 unique colors.

use std::collections::HashMap;
use std::io::Write;

use chart_common::error::{ChartError, ChartResult};

/// Maximum colors for indexed PNG (PNG8).
const MAX_PALETTE_SIZE: usize = 256;

/// Encode RGBA pixels with automatic format selection.
pub fn encode_auto(pixels: &[u8], width: usize, height: usize) -> ChartResult<Vec<u8>> {
    match extract_palette(pixels) {
        Some((palette, indices)) => encode_indexed(width, height, &palette, &indices),
        None => encode_rgba(pixels, width, height),
    }
}

/// Pack RGBA bytes into a u32 for cheap hashing and comparison.
#[inline(always)]
fn pack_color(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (r as u32) | ((g as u32) << 8) | ((b as u32) << 16) | ((a as u32) << 24)
}

/// Map pixels to a palette of up to 256 colors.
///
/// Returns `None` when the image has too many unique colors for an
/// indexed encoding. Palette order follows first appearance in pixel
/// order, so encoding is deterministic.
fn extract_palette(pixels: &[u8]) -> Option<(Vec<(u8, u8, u8, u8)>, Vec<u8>)> {
    let mut color_to_index: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Vec<(u8, u8, u8, u8)> = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices: Vec<u8> = Vec::with_capacity(pixels.len() / 4);

    for chunk in pixels.chunks_exact(4) {
        let packed = pack_color(chunk[0], chunk[1], chunk[2], chunk[3]);

        let index = match color_to_index.get(&packed) {
            Some(&idx) => idx,
            None => {
                if palette.len() >= MAX_PALETTE_SIZE {
                    return None;
                }
                let idx = palette.len() as u8;
                palette.push((chunk[0], chunk[1], chunk[2], chunk[3]));
                color_to_index.insert(packed, idx);
                idx
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

/// Encode an indexed PNG (color type 3) from palette and indices.
pub fn encode_indexed(
    width: usize,
    height: usize,
    palette: &[(u8, u8, u8, u8)],
    indices: &[u8],
) -> ChartResult<Vec<u8>> {
    let mut png = Vec::new();

    // PNG signature
    png.extend_from_slice(&[137, 80, 78, 71, 13, 10, 26, 10]);

    // IHDR chunk
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr.push(8); // bit depth
    ihdr.push(3); // color type 3 = indexed
    ihdr.push(0); // compression method
    ihdr.push(0); // filter method
    ihdr.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr);

    // PLTE chunk
    let mut plte = Vec::with_capacity(palette.len() * 3);
    for (r, g, b, _) in palette {
        plte.push(*r);
        plte.push(*g);
        plte.push(*b);
    }
    write_chunk(&mut png, b"PLTE", &plte);

    // tRNS chunk only when some palette entry is translucent
    if palette.iter().any(|(_, _, _, a)| *a < 255) {
        let trns: Vec<u8> = palette.iter().map(|(_, _, _, a)| *a).collect();
        write_chunk(&mut png, b"tRNS", &trns);
    }

    let idat = deflate_scanlines(indices, width, height, 1)?;
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Encode an RGBA PNG (color type 6).
pub fn encode_rgba(pixels: &[u8], width: usize, height: usize) -> ChartResult<Vec<u8>> {
    let mut png = Vec::new();

    png.extend_from_slice(&[137, 80, 78, 71, 13, 10, 26, 10]);

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr.push(8); // bit depth
    ihdr.push(6); // color type 6 = RGBA
    ihdr.push(0);
    ihdr.push(0);
    ihdr.push(0);
    write_chunk(&mut png, b"IHDR", &ihdr);

    let idat = deflate_scanlines(pixels, width, height, 4)?;
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Write a PNG chunk: length, type, data, CRC over type+data.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Prefix each scanline with a filter byte (0 = none) and zlib-compress
/// the result for the IDAT chunk.
fn deflate_scanlines(
    data: &[u8],
    width: usize,
    height: usize,
    bytes_per_pixel: usize,
) -> ChartResult<Vec<u8>> {
    let stride = width * bytes_per_pixel;
    let mut raw = Vec::with_capacity(height * (1 + stride));

    for y in 0..height {
        raw.push(0); // filter type: none
        let row_start = y * stride;
        let row = data
            .get(row_start..row_start + stride)
            .ok_or_else(|| ChartError::PngEncode("pixel buffer shorter than scanlines".into()))?;
        raw.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
    encoder
        .write_all(&raw)
        .map_err(|e| ChartError::PngEncode(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| ChartError::PngEncode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_palette_dedupes() {
        // red, green, blue, red again
        let pixels = [
            255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 0, 0, 255,
        ];

        let (palette, indices) = extract_palette(&pixels).unwrap();
        assert_eq!(palette.len(), 3);
        assert_eq!(indices.len(), 4);
        assert_eq!(indices[0], indices[3]);
    }

    #[test]
    fn test_extract_palette_too_many_colors() {
        let mut pixels = Vec::with_capacity(300 * 4);
        for i in 0..300u32 {
            pixels.extend_from_slice(&[(i % 256) as u8, (i / 256) as u8, 0, 255]);
        }
        assert!(extract_palette(&pixels).is_none());
    }

    #[test]
    fn test_encode_auto_signature_and_iend() {
        let pixels = [
            255, 0, 0, 255, 0, 255, 0, 255, 0, 255, 0, 255, 255, 0, 0, 255,
        ];
        let png = encode_auto(&pixels, 2, 2).unwrap();
        assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
        assert_eq!(&png[png.len() - 8..png.len() - 4], b"IEND");
    }

    #[test]
    fn test_indexed_smaller_than_rgba_for_flat_image() {
        // A flat two-color 32x32 image, like a chart background plus a bar
        let mut pixels = Vec::with_capacity(32 * 32 * 4);
        for i in 0..(32 * 32) {
            if i % 32 < 16 {
                pixels.extend_from_slice(&[37, 99, 235, 255]);
            } else {
                pixels.extend_from_slice(&[255, 255, 255, 255]);
            }
        }

        let indexed = encode_auto(&pixels, 32, 32).unwrap();
        let rgba = encode_rgba(&pixels, 32, 32).unwrap();
        assert!(indexed.len() < rgba.len());
    }

    #[test]
    fn test_transparency_emits_trns() {
        let pixels = [255, 0, 0, 255, 0, 0, 0, 0];
        let png = encode_auto(&pixels, 2, 1).unwrap();
        let has_trns = png.windows(4).any(|w| w == b"tRNS");
        assert!(has_trns);
    }

    #[test]
    fn test_short_pixel_buffer_is_an_error() {
        let pixels = [255, 0, 0, 255];
        assert!(matches!(
            encode_rgba(&pixels, 2, 2),
            Err(ChartError::PngEncode(_))
        ));
    }

    #[test]
    fn test_deterministic_encoding() {
        let pixels: Vec<u8> = (0..16u8).flat_map(|i| [i, i, i, 255]).collect();
        assert_eq!(
            encode_auto(&pixels, 8, 2).unwrap(),
            encode_auto(&pixels, 8, 2).unwrap()
        );
    }
}
