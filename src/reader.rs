//! Per-photo metadata extraction.
//!
//! One photo file yields a flat [`PhotoMeta`] record with six string
//! fields. The fields come from two embedded sources read in a single
//! pass over the file bytes:
//!
//! - **IPTC** (APP13 segment, parsed by [`crate::iptc`]): title from
//!   ObjectName, caption from Caption-Abstract. IPTC datasets are
//!   repeatable, so these arrive as lists.
//! - **EXIF** (APP1 segment, via `kamadak-exif`): capture date from
//!   DateTimeOriginal, pixel dimensions from PixelXDimension and
//!   PixelYDimension. These are single values.
//!
//! The two shapes are unified by [`TagValue`] — `Single` vs `First` —
//! which is collapsed to a plain string here, before records leave this
//! module. Any tag that is absent or malformed independently defaults to
//! an empty string; only a file that cannot be opened or that is not a
//! JPEG at all is an error, and the caller treats that as skippable.

use std::io::Cursor;
use std::path::Path;

use exif::{In, Tag};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a JPEG file")]
    NotJpeg,
}

/// A raw metadata tag result before collapsing.
///
/// EXIF tags carry one value; IPTC datasets are repeatable and arrive as
/// a list of which only the first entry is meaningful to the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    Single(String),
    First(Vec<String>),
}

impl TagValue {
    /// Collapse to the value the gallery uses: the single value, or the
    /// first list entry. Empty lists collapse to an empty string.
    pub fn collapse(self) -> String {
        match self {
            TagValue::Single(value) => value,
            TagValue::First(values) => values.into_iter().next().unwrap_or_default(),
        }
    }
}

/// Flat metadata record for one photo file.
///
/// Every field defaults to an empty string when the source tag is
/// missing; no single tag is required.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoMeta {
    pub title: String,
    pub caption: String,
    pub date: String,
    pub width: String,
    pub height: String,
}

/// Read the metadata record for one photo file.
///
/// Errors only when the file cannot be read or is not a JPEG; a valid
/// JPEG with no embedded metadata yields a record of empty strings.
pub fn read_photo_meta(path: &Path) -> Result<PhotoMeta, ReaderError> {
    let bytes = std::fs::read(path)?;
    if !bytes.starts_with(&[0xFF, 0xD8]) {
        return Err(ReaderError::NotJpeg);
    }

    let iptc = crate::iptc::scan_jpeg(&bytes);

    // A JPEG without an EXIF segment is still readable — every EXIF
    // field just defaults to empty.
    let exif = exif::Reader::new()
        .read_from_container(&mut Cursor::new(&bytes))
        .ok();

    let exif_tag = |tag: Tag| -> TagValue {
        let value = exif
            .as_ref()
            .and_then(|data| data.get_field(tag, In::PRIMARY))
            .map(|field| {
                // ASCII values display quoted; dates and numbers don't.
                field
                    .display_value()
                    .to_string()
                    .trim_matches('"')
                    .to_string()
            })
            .unwrap_or_default();
        TagValue::Single(value)
    };

    Ok(PhotoMeta {
        title: TagValue::First(iptc.object_name).collapse(),
        caption: TagValue::First(iptc.caption).collapse(),
        date: exif_tag(Tag::DateTimeOriginal).collapse(),
        width: exif_tag(Tag::PixelXDimension).collapse(),
        height: exif_tag(Tag::PixelYDimension).collapse(),
    })
}
