//! Photo collection and ordering.
//!
//! Lists one photo directory, keeps recognized picture files, reads each
//! file's embedded metadata, and produces [`Photo`] records sorted by
//! capture date with dense 1-based ordinals.
//!
//! Files whose metadata cannot be read are reported to stderr and
//! excluded — they never abort the run. A missing directory, by
//! contrast, is fatal for the whole invocation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::output;
use crate::reader;

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("Can't find {0}")]
    MissingDir(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// File extensions we consider pictures (matched case-insensitively).
pub const PIC_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// One photo's worth of page variables.
///
/// Field names are the template-facing variable names, so this record
/// serializes straight into the page-variables mapping. Rebuilt from the
/// directory on every run; never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Photo {
    /// Image file name within the photo directory.
    pub img_path: String,
    /// Detail page file name: `<stem>.html`.
    pub detail_path: String,
    pub title: String,
    pub caption: String,
    /// Raw capture-date string from the metadata source; compared
    /// lexicographically for sorting. Empty when the tag is absent,
    /// which sorts before every dated photo.
    pub date: String,
    pub w: String,
    pub h: String,
    /// 1-based position after sorting.
    pub num: usize,
    /// Previous photo's detail page name (absent for ordinal 1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
    /// Next photo's detail page name (absent for ordinal N).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Next photo's image file name, for preloading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_img: Option<String>,
}

/// Collect, sort, and number the photos in `dir`.
pub fn collect_photos(dir: &Path) -> Result<Vec<Photo>, CollectError> {
    if !dir.is_dir() {
        return Err(CollectError::MissingDir(dir.to_path_buf()));
    }

    let mut photos = Vec::new();
    for path in list_picture_files(dir)? {
        match reader::read_photo_meta(&path) {
            Ok(meta) => photos.push(build_photo(&path, meta)),
            Err(why) => output::warn_unreadable(&path, &why),
        }
    }

    sort_and_number(&mut photos);
    Ok(photos)
}

/// Picture files in `dir`, name-sorted for a deterministic enumeration
/// order (the order the stable date sort preserves on ties).
fn list_picture_files(dir: &Path) -> Result<Vec<PathBuf>, CollectError> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_picture(path))
        .collect();
    files.sort();
    Ok(files)
}

fn is_picture(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| PIC_EXTENSIONS.contains(&ext.as_str()))
}

fn build_photo(path: &Path, meta: reader::PhotoMeta) -> Photo {
    let img_path = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();

    Photo {
        img_path,
        detail_path: format!("{stem}.html"),
        title: meta.title,
        caption: meta.caption,
        date: meta.date,
        w: meta.width,
        h: meta.height,
        num: 0,
        prev: None,
        next: None,
        next_img: None,
    }
}

/// Sort by capture-date string ascending and assign ordinals 1..N.
///
/// `sort_by` is stable, so photos with equal (or empty) dates keep their
/// prior relative order.
pub fn sort_and_number(photos: &mut [Photo]) {
    photos.sort_by(|a, b| a.date.cmp(&b.date));
    for (index, photo) in photos.iter_mut().enumerate() {
        photo.num = index + 1;
    }
}
