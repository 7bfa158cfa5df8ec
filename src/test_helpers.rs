//! Shared test utilities for the photoweb test suite.
//!
//! Real JPEGs with embedded metadata are awkward to keep as fixtures, so
//! tests synthesize them: a tiny encoded JPEG from the `image` crate,
//! optionally spliced with a hand-built APP13 (IPTC) segment and/or an
//! APP1 (EXIF) segment directly after SOI.

use std::path::Path;

/// Encode a small solid-color JPEG in memory.
pub fn tiny_jpeg() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(8, 6, image::Rgb([120, 140, 160]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Jpeg,
        )
        .unwrap();
    bytes
}

/// Splice extra marker segments into a JPEG right after SOI.
fn splice_after_soi(jpeg: &[u8], segments: &[Vec<u8>]) -> Vec<u8> {
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8], "not a JPEG");
    let mut out = vec![0xFF, 0xD8];
    for seg in segments {
        out.extend_from_slice(seg);
    }
    out.extend_from_slice(&jpeg[2..]);
    out
}

/// Build an APP13 segment carrying IPTC ObjectName and Caption-Abstract.
fn app13_segment(title: &str, caption: &str) -> Vec<u8> {
    let mut iim = Vec::new();
    for (dataset, value) in [(5u8, title), (120u8, caption)] {
        iim.extend_from_slice(&[0x1C, 0x02, dataset]);
        iim.extend_from_slice(&(value.len() as u16).to_be_bytes());
        iim.extend_from_slice(value.as_bytes());
    }

    let mut content = Vec::new();
    content.extend_from_slice(b"Photoshop 3.0\0");
    content.extend_from_slice(b"8BIM");
    content.extend_from_slice(&0x0404u16.to_be_bytes());
    // empty pascal name, padded to even length
    content.extend_from_slice(&[0x00, 0x00]);
    content.extend_from_slice(&(iim.len() as u32).to_be_bytes());
    content.extend_from_slice(&iim);
    if iim.len() % 2 == 1 {
        content.push(0x00);
    }

    let mut seg = vec![0xFF, 0xED];
    seg.extend_from_slice(&((content.len() + 2) as u16).to_be_bytes());
    seg.extend_from_slice(&content);
    seg
}

/// Build an APP1 EXIF segment with DateTimeOriginal and pixel dimensions.
///
/// `date` must be in EXIF format: `YYYY:MM:DD HH:MM:SS` (19 chars).
fn app1_exif_segment(date: &str, width: u32, height: u32) -> Vec<u8> {
    assert_eq!(date.len(), 19, "EXIF date must be YYYY:MM:DD HH:MM:SS");

    let mut tiff = Vec::new();
    // Little-endian TIFF header, IFD0 at offset 8
    tiff.extend_from_slice(b"II");
    tiff.extend_from_slice(&42u16.to_le_bytes());
    tiff.extend_from_slice(&8u32.to_le_bytes());

    // IFD0: one entry, the Exif IFD pointer. Entry table ends at
    // 8 + 2 + 12 + 4 = 26, which is where the Exif IFD starts.
    tiff.extend_from_slice(&1u16.to_le_bytes());
    push_entry(&mut tiff, 0x8769, 4, 1, 26);
    tiff.extend_from_slice(&0u32.to_le_bytes());

    // Exif IFD: three entries. Value area starts at 26 + 2 + 36 + 4 = 68.
    tiff.extend_from_slice(&3u16.to_le_bytes());
    push_entry(&mut tiff, 0x9003, 2, 20, 68); // DateTimeOriginal, ASCII
    push_entry(&mut tiff, 0xA002, 4, 1, width); // PixelXDimension
    push_entry(&mut tiff, 0xA003, 4, 1, height); // PixelYDimension
    tiff.extend_from_slice(&0u32.to_le_bytes());

    tiff.extend_from_slice(date.as_bytes());
    tiff.push(0x00);

    let mut seg = vec![0xFF, 0xE1];
    seg.extend_from_slice(&((tiff.len() + 8) as u16).to_be_bytes());
    seg.extend_from_slice(b"Exif\0\0");
    seg.extend_from_slice(&tiff);
    seg
}

fn push_entry(tiff: &mut Vec<u8>, tag: u16, typ: u16, count: u32, value: u32) {
    tiff.extend_from_slice(&tag.to_le_bytes());
    tiff.extend_from_slice(&typ.to_le_bytes());
    tiff.extend_from_slice(&count.to_le_bytes());
    tiff.extend_from_slice(&value.to_le_bytes());
}

/// A JPEG with IPTC title and caption, no EXIF.
pub fn jpeg_with_iptc(title: &str, caption: &str) -> Vec<u8> {
    splice_after_soi(&tiny_jpeg(), &[app13_segment(title, caption)])
}

/// A JPEG with an EXIF capture date and pixel dimensions, no IPTC.
pub fn jpeg_with_exif(date: &str, width: u32, height: u32) -> Vec<u8> {
    splice_after_soi(&tiny_jpeg(), &[app1_exif_segment(date, width, height)])
}

/// A JPEG with both IPTC (title, caption) and EXIF (date, dimensions).
pub fn jpeg_with_meta(title: &str, caption: &str, date: &str) -> Vec<u8> {
    splice_after_soi(
        &tiny_jpeg(),
        &[app13_segment(title, caption), app1_exif_segment(date, 8, 6)],
    )
}

/// Write bytes as a file in `dir`.
pub fn write_photo(dir: &Path, name: &str, bytes: &[u8]) {
    std::fs::write(dir.join(name), bytes).unwrap();
}
