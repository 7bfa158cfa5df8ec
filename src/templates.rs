//! Template set loading.
//!
//! Template sets live under a per-user root (`~/.photoweb/tpl` by
//! default), one directory per named set:
//!
//! ```text
//! ~/.photoweb/tpl/
//! └── default/
//!     ├── gallery.html   # required
//!     ├── detail.html    # optional — enables per-photo pages
//!     └── md.json        # optional template configuration
//! ```
//!
//! `md.json` (the template's, not the photo directory sidecar of the
//! same name):
//!
//! ```json
//! {
//!   "thumbnails": true,
//!   "columns": 3,
//!   "thumbnail_w": 250,
//!   "thumbnail_h": 250
//! }
//! ```
//!
//! If the root does not exist at all, it is created and populated with
//! the bundled default set, so a first run works out of the box. A
//! missing named set, missing gallery template, or malformed `md.json`
//! is fatal — templates are required configuration, unlike the lenient
//! photo-directory sidecar.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Template file names within a set directory.
pub const GALLERY_TPL: &str = "gallery.html";
pub const DETAIL_TPL: &str = "detail.html";
pub const TPL_CONFIG: &str = "md.json";

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Can't find {0} template.")]
    UnknownSet(String),
    #[error("Can't find gallery.html in {0} template.")]
    MissingGallery(String),
    #[error("Problem loading template: {0}")]
    Io(#[from] std::io::Error),
    #[error("Problem loading template metadata: {0}")]
    Config(#[from] serde_json::Error),
}

/// Template-level configuration from the set's `md.json`.
///
/// Only the known keys are read; anything else in the file is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Generate thumbnails for this template's gallery grid.
    pub thumbnails: bool,
    /// Photos per gallery row; absent means only the flat list is
    /// exposed to the template.
    pub columns: Option<u32>,
    pub thumbnail_w: u32,
    pub thumbnail_h: u32,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            thumbnails: false,
            columns: None,
            thumbnail_w: 250,
            thumbnail_h: 250,
        }
    }
}

/// A loaded template set, immutable for the duration of a run.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub gallery: String,
    pub detail: Option<String>,
    pub config: TemplateConfig,
}

/// The per-user template root: `~/.photoweb/tpl`.
pub fn default_template_root() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".photoweb").join("tpl"))
}

/// Install the bundled default template set under `root`.
pub fn install_default_set(root: &Path) -> Result<(), std::io::Error> {
    let set_dir = root.join("default");
    fs::create_dir_all(&set_dir)?;
    fs::write(
        set_dir.join(GALLERY_TPL),
        include_str!("../tpl-default/gallery.html"),
    )?;
    fs::write(
        set_dir.join(DETAIL_TPL),
        include_str!("../tpl-default/detail.html"),
    )?;
    fs::write(
        set_dir.join(TPL_CONFIG),
        include_str!("../tpl-default/md.json"),
    )?;
    Ok(())
}

/// Load the named template set from `root`, installing the bundled
/// default set first if the root doesn't exist yet.
pub fn load_template_set(root: &Path, name: &str) -> Result<TemplateSet, TemplateError> {
    if !root.is_dir() {
        install_default_set(root)?;
    }

    let set_dir = root.join(name);
    if !set_dir.is_dir() {
        return Err(TemplateError::UnknownSet(name.to_string()));
    }

    let gallery_path = set_dir.join(GALLERY_TPL);
    if !gallery_path.is_file() {
        return Err(TemplateError::MissingGallery(name.to_string()));
    }
    let gallery = fs::read_to_string(&gallery_path)?;

    let detail_path = set_dir.join(DETAIL_TPL);
    let detail = if detail_path.is_file() {
        Some(fs::read_to_string(&detail_path)?)
    } else {
        None
    };

    let config_path = set_dir.join(TPL_CONFIG);
    let config = if config_path.is_file() {
        serde_json::from_str(&fs::read_to_string(&config_path)?)?
    } else {
        TemplateConfig::default()
    };

    Ok(TemplateSet {
        gallery,
        detail,
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn set_up(root: &Path, name: &str, files: &[(&str, &str)]) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        for (file, content) in files {
            fs::write(dir.join(file), content).unwrap();
        }
    }

    #[test]
    fn missing_root_installs_default_set() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("tpl");

        let set = load_template_set(&root, "default").unwrap();
        assert!(set.gallery.contains("{{ page_title }}"));
        assert!(set.detail.is_some());
        assert!(set.config.thumbnails);
        assert_eq!(set.config.columns, Some(3));
    }

    #[test]
    fn unknown_set_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_template_set(tmp.path(), "fancy");
        assert!(matches!(result, Err(TemplateError::UnknownSet(name)) if name == "fancy"));
    }

    #[test]
    fn gallery_template_required() {
        let tmp = TempDir::new().unwrap();
        set_up(tmp.path(), "bare", &[("detail.html", "<html></html>")]);

        let result = load_template_set(tmp.path(), "bare");
        assert!(matches!(result, Err(TemplateError::MissingGallery(_))));
    }

    #[test]
    fn detail_template_optional() {
        let tmp = TempDir::new().unwrap();
        set_up(tmp.path(), "plain", &[("gallery.html", "<html></html>")]);

        let set = load_template_set(tmp.path(), "plain").unwrap();
        assert!(set.detail.is_none());
        assert!(!set.config.thumbnails);
        assert_eq!(set.config.thumbnail_w, 250);
    }

    #[test]
    fn config_values_parsed() {
        let tmp = TempDir::new().unwrap();
        set_up(
            tmp.path(),
            "grid",
            &[
                ("gallery.html", "g"),
                ("md.json", r#"{"thumbnails": true, "columns": 4, "thumbnail_w": 120}"#),
            ],
        );

        let set = load_template_set(tmp.path(), "grid").unwrap();
        assert!(set.config.thumbnails);
        assert_eq!(set.config.columns, Some(4));
        assert_eq!(set.config.thumbnail_w, 120);
        assert_eq!(set.config.thumbnail_h, 250);
    }

    #[test]
    fn malformed_config_is_fatal() {
        let tmp = TempDir::new().unwrap();
        set_up(
            tmp.path(),
            "broken",
            &[("gallery.html", "g"), ("md.json", "{nope")],
        );

        let result = load_template_set(tmp.path(), "broken");
        assert!(matches!(result, Err(TemplateError::Config(_))));
    }

    #[test]
    fn unknown_config_keys_ignored() {
        let tmp = TempDir::new().unwrap();
        set_up(
            tmp.path(),
            "extra",
            &[(
                "gallery.html",
                "g",
            ), (
                "md.json",
                r#"{"thumbnails": true, "author": "mnot"}"#,
            )],
        );

        let set = load_template_set(tmp.path(), "extra").unwrap();
        assert!(set.config.thumbnails);
        assert_eq!(set.config.columns, None);
    }
}
