//! Minimal IPTC-IIM parser for JPEG files.
//!
//! Extracts the two Record 2 datasets the gallery uses:
//! - ObjectName (2:05) — photo title
//! - Caption-Abstract (2:120) — photo caption
//!
//! Both datasets are repeatable per the IIM spec, so values are collected
//! into lists; the [`reader`](crate::reader) collapses them to the first
//! entry before records leave that module.
//!
//! The data lives in the JPEG APP13 marker, inside a Photoshop 8BIM
//! resource block (id 0x0404) holding raw IIM bytes. Pure Rust, no
//! external dependencies.

/// IPTC values found in a JPEG, grouped by dataset.
///
/// Empty vectors mean the dataset was absent — never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IptcFields {
    pub object_name: Vec<String>,
    pub caption: Vec<String>,
}

const DATASET_OBJECT_NAME: u8 = 5;
const DATASET_CAPTION: u8 = 120;

/// Scan a whole JPEG byte stream for IPTC fields.
///
/// Returns empty fields when no APP13 segment (or no IPTC resource
/// inside it) is present.
pub fn scan_jpeg(data: &[u8]) -> IptcFields {
    match find_app13_iptc(data) {
        Some(iim) => parse_iim(iim),
        None => IptcFields::default(),
    }
}

/// Parse raw IPTC-IIM bytes into the fields we care about.
///
/// IIM dataset layout:
///   Byte 0:    0x1C (tag marker)
///   Byte 1:    record number (we want 0x02)
///   Byte 2:    dataset number
///   Bytes 3-4: data length (big-endian u16)
///   Bytes 5+:  data (UTF-8/ASCII string)
fn parse_iim(data: &[u8]) -> IptcFields {
    let mut fields = IptcFields::default();
    let mut pos = 0;

    while pos + 5 <= data.len() {
        if data[pos] != 0x1C {
            pos += 1;
            continue;
        }

        let record = data[pos + 1];
        let dataset = data[pos + 2];
        let length = u16::from_be_bytes([data[pos + 3], data[pos + 4]]) as usize;
        pos += 5;

        if pos + length > data.len() {
            break;
        }

        // Record 2 is the Application Record; everything else is envelope
        // bookkeeping we don't need.
        if record == 2 {
            let value = String::from_utf8_lossy(&data[pos..pos + length])
                .trim()
                .to_string();

            if !value.is_empty() {
                match dataset {
                    DATASET_OBJECT_NAME => fields.object_name.push(value),
                    DATASET_CAPTION => fields.caption.push(value),
                    _ => {}
                }
            }
        }

        pos += length;
    }

    fields
}

const PHOTOSHOP_HEADER: &[u8] = b"Photoshop 3.0\0";
const BIM_MARKER: &[u8] = b"8BIM";
const IPTC_RESOURCE_ID: u16 = 0x0404;

/// Locate the raw IPTC-IIM bytes inside a JPEG's APP13 segment.
///
/// Walks the marker stream from the start of the file, stopping at SOS
/// (start of scan) since no metadata follows the image data.
fn find_app13_iptc(data: &[u8]) -> Option<&[u8]> {
    let mut pos = 0;
    while pos + 4 < data.len() {
        if data[pos] == 0xFF && data[pos + 1] == 0xED {
            let seg_len = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;
            let seg_start = pos + 4;
            let seg_end = (pos + 2 + seg_len).clamp(seg_start, data.len());

            if let Some(iim) = iptc_from_8bim(&data[seg_start..seg_end]) {
                return Some(iim);
            }
        }

        if data[pos] == 0xFF && pos + 3 < data.len() && data[pos + 1] != 0x00 {
            let marker = data[pos + 1];
            if marker == 0xDA {
                break;
            }
            // SOI, EOI and the restart markers carry no length field
            if marker == 0xD8 || marker == 0xD9 || (0xD0..=0xD7).contains(&marker) {
                pos += 2;
            } else {
                let len = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;
                pos += 2 + len;
            }
        } else {
            pos += 1;
        }
    }
    None
}

/// Pull the IPTC resource out of a Photoshop 8BIM resource list.
///
/// Each resource: `8BIM` + resource id (u16) + pascal name (padded to
/// even length) + data length (u32) + data (padded to even length).
fn iptc_from_8bim(segment: &[u8]) -> Option<&[u8]> {
    let data = segment.strip_prefix(PHOTOSHOP_HEADER).unwrap_or(segment);

    let mut pos = 0;
    while pos + 12 <= data.len() {
        if &data[pos..pos + 4] != BIM_MARKER {
            pos += 1;
            continue;
        }
        pos += 4;

        if pos + 2 > data.len() {
            break;
        }
        let resource_id = u16::from_be_bytes([data[pos], data[pos + 1]]);
        pos += 2;

        if pos >= data.len() {
            break;
        }
        let name_len = data[pos] as usize;
        pos += 1 + name_len + ((1 + name_len) % 2);

        if pos + 4 > data.len() {
            break;
        }
        let res_len =
            u32::from_be_bytes([data[pos], data[pos + 1], data[pos + 2], data[pos + 3]]) as usize;
        pos += 4;

        if pos + res_len > data.len() {
            break;
        }

        if resource_id == IPTC_RESOURCE_ID {
            return Some(&data[pos..pos + res_len]);
        }

        pos += res_len + (res_len % 2);
    }

    None
}
