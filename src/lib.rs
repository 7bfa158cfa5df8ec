//! # Photoweb
//!
//! A minimal static gallery generator for directories of JPEG photos.
//! Point it at one or more directories: each gets an `index.html` gallery
//! page, optional per-photo detail pages, and optional thumbnails, all
//! rendered from user-editable HTML templates.
//!
//! # Pipeline
//!
//! Every directory goes through the same fixed sequence:
//!
//! ```text
//! collect   *.jpg / *.jpeg  →  metadata records, sorted by capture date
//! state     md.json         →  page title/description, CLI overrides merged
//! render    templates       →  index.html (+ one page per photo)
//! thumbs    originals       →  thumbnails/ (when the template asks for them)
//! ```
//!
//! Photo files are never modified; everything the tool writes lives next
//! to them (`index.html`, detail pages, `thumbnails/`, `md.json`).
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`collect`] | Directory scan, per-photo metadata records, date sort |
//! | [`reader`] | Single-photo metadata extraction (EXIF + IPTC) |
//! | [`iptc`] | JPEG APP13 / IPTC-IIM segment parser |
//! | [`state`] | `md.json` sidecar: sticky page title and description |
//! | [`layout`] | Grid row grouping and prev/next neighbor links |
//! | [`templates`] | Template set discovery, loading, per-set `md.json` config |
//! | [`render`] | HTML rendering from template source and page variables |
//! | [`thumbs`] | Bounded thumbnail generation into `thumbnails/` |
//! | [`run`] | Per-directory orchestration of all of the above |
//! | [`output`] | Console messages: progress, warnings, fatal errors |

pub mod collect;
pub mod iptc;
pub mod layout;
pub mod output;
pub mod reader;
pub mod render;
pub mod run;
pub mod state;
pub mod templates;
pub mod thumbs;

#[cfg(test)]
pub(crate) mod test_helpers;
