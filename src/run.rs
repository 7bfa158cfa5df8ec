//! Per-directory orchestration.
//!
//! Wires the pipeline for each target directory:
//!
//! ```text
//! collect + sort → read/merge sidecar → group rows → render gallery
//!   → thumbnails → detail pages (with nav links) → persist sidecar
//! ```
//!
//! Multiple directories on one invocation are processed strictly
//! sequentially; the first fatal error terminates the whole invocation.
//! Per-file metadata failures were already downgraded to warnings inside
//! the collector — everything that reaches a `RunError` here is fatal.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::collect::{self, CollectError, Photo};
use crate::layout;
use crate::output::{self, RunReport};
use crate::render::{self, RenderError};
use crate::state::{self, GalleryMeta, StateError};
use crate::templates::{self, TemplateConfig, TemplateError, TemplateSet};
use crate::thumbs::{self, ThumbError};

/// Gallery page file name inside each processed directory.
pub const GALLERY_PAGE: &str = "index.html";

/// Everything one invocation needs, built once in `main` from the CLI.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub template_root: PathBuf,
    pub template: String,
    pub page_title: Option<String>,
    pub page_desc: Vec<String>,
    /// Skip thumbnail generation this run (`--html`).
    pub html_only: bool,
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Collect(#[from] CollectError),
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Thumb(#[from] ThumbError),
    #[error("Couldn't build page variables: {0}")]
    Vars(#[from] serde_json::Error),
}

/// Process every directory in order with one loaded template set.
pub fn run(config: &RunConfig, dirs: &[PathBuf]) -> Result<(), RunError> {
    let set = templates::load_template_set(&config.template_root, &config.template)?;
    for dir in dirs {
        run_dir(config, &set, dir)?;
    }
    Ok(())
}

/// Process one photo directory.
pub fn run_dir(config: &RunConfig, set: &TemplateSet, dir: &Path) -> Result<RunReport, RunError> {
    output::print_running(dir);

    let mut photos = collect::collect_photos(dir)?;

    let mut meta = state::read_meta(dir);
    meta.apply_overrides(config.page_title.as_deref(), &config.page_desc);

    let vars = page_vars(&photos, &meta, &set.config)?;
    let html = render::render_page(templates::GALLERY_TPL, &set.gallery, &vars)?;
    render::write_page(&dir.join(GALLERY_PAGE), &html)?;

    let mut report = RunReport {
        photos: photos.len(),
        ..RunReport::default()
    };

    if set.config.thumbnails && !config.html_only {
        for photo in &photos {
            thumbs::make_thumbnail(dir, &photo.img_path, &set.config)?;
            report.thumbnails += 1;
        }
    }

    if let Some(detail_src) = &set.detail {
        layout::link_neighbors(&mut photos);
        for photo in &photos {
            let vars = detail_vars(photo, &meta)?;
            let html = render::render_page(templates::DETAIL_TPL, detail_src, &vars)?;
            render::write_page(&dir.join(&photo.detail_path), &html)?;
            report.detail_pages += 1;
        }
    }

    state::write_meta(dir, &meta)?;

    output::print_summary(&report);
    Ok(report)
}

/// Assemble the gallery page variables: the flat photo list, the grid
/// rows when a column count is configured, and the merged gallery
/// metadata. Rebuilt from scratch every run.
pub fn page_vars(
    photos: &[Photo],
    meta: &GalleryMeta,
    config: &TemplateConfig,
) -> Result<serde_json::Value, serde_json::Error> {
    let mut map = serde_json::Map::new();
    map.insert("pics".to_string(), serde_json::to_value(photos)?);
    merge_meta(&mut map, meta)?;

    // Inserted after the metadata merge: the grid shape comes from the
    // template config alone, never from stray sidecar keys.
    if let Some(columns) = config.columns.filter(|&c| c > 0) {
        let rows = layout::group_rows(photos, columns);
        map.insert("pic_rows".to_string(), serde_json::to_value(rows)?);
        map.insert("columns".to_string(), serde_json::to_value(columns)?);
    }

    Ok(serde_json::Value::Object(map))
}

/// Per-photo variables for a detail page: the photo record (with nav
/// links already attached) plus the gallery metadata.
pub fn detail_vars(
    photo: &Photo,
    meta: &GalleryMeta,
) -> Result<serde_json::Value, serde_json::Error> {
    let mut map = match serde_json::to_value(photo)? {
        serde_json::Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };
    merge_meta(&mut map, meta)?;
    Ok(serde_json::Value::Object(map))
}

fn merge_meta(
    map: &mut serde_json::Map<String, serde_json::Value>,
    meta: &GalleryMeta,
) -> Result<(), serde_json::Error> {
    if let serde_json::Value::Object(meta_map) = serde_json::to_value(meta)? {
        map.extend(meta_map);
    }
    Ok(())
}
