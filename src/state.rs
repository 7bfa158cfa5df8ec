//! Persisted gallery metadata — the `md.json` sidecar.
//!
//! Each photo directory carries a small JSON sidecar holding page-level
//! metadata (title, description paragraphs) that survives re-runs.
//! Command-line overrides replace the stored values in memory, and the
//! merged result is written back at the end of every run — which is how
//! command-line metadata becomes a sticky default.
//!
//! Reading is lenient: a missing or corrupt sidecar is an empty mapping.
//! Writing is not: a failed write aborts the directory's run.
//!
//! Only page-level metadata lives here. Per-photo facts are recomputed
//! from the files every run, so adding or removing photos never requires
//! sidecar migration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sidecar file name inside each processed photo directory.
pub const SIDECAR_NAME: &str = "md.json";

#[derive(Error, Debug)]
pub enum StateError {
    #[error("Couldn't write metadata: {0}")]
    Io(#[from] std::io::Error),
    #[error("Couldn't serialize metadata: {0}")]
    Json(#[from] serde_json::Error),
}

/// One description paragraph: `{"p": "text"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub p: String,
}

/// Page-level gallery metadata.
///
/// Unknown keys in an existing sidecar are kept through the flattened
/// map, so hand-added template variables round-trip intact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_desc: Option<Vec<Paragraph>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl GalleryMeta {
    /// Apply command-line overrides: a title replaces `page_title`, and
    /// description lines replace `page_desc` one paragraph per line.
    pub fn apply_overrides(&mut self, title: Option<&str>, desc_lines: &[String]) {
        if let Some(title) = title {
            self.page_title = Some(title.to_string());
        }
        if !desc_lines.is_empty() {
            self.page_desc = Some(
                desc_lines
                    .iter()
                    .map(|line| Paragraph { p: line.clone() })
                    .collect(),
            );
        }
    }
}

/// Read the sidecar in `dir`. Missing or unparsable files are an empty
/// mapping — never an error.
pub fn read_meta(dir: &Path) -> GalleryMeta {
    fs::read_to_string(dir.join(SIDECAR_NAME))
        .ok()
        .and_then(|content| serde_json::from_str(&content).ok())
        .unwrap_or_default()
}

/// Write the sidecar in `dir`, unconditionally.
pub fn write_meta(dir: &Path, meta: &GalleryMeta) -> Result<(), StateError> {
    let json = serde_json::to_string(meta)?;
    fs::write(dir.join(SIDECAR_NAME), json)?;
    Ok(())
}
