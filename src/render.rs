//! Template rendering and page writes.
//!
//! Rendering is logic-less substitution of the page-variables mapping
//! into a loaded template string via minijinja. The template syntax
//! itself supplies iteration (`{% for %}`) and conditionals (`{% if %}`);
//! this module adds nothing on top. Missing keys render as empty under
//! minijinja's default lenient undefined handling, and values are
//! HTML-escaped because the template names end in `.html`.
//!
//! Writes are fatal on failure — a gallery that cannot be written is a
//! broken run, not a skippable item.

use std::path::Path;

use minijinja::Environment;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("Can't write page: {0}")]
    Io(#[from] std::io::Error),
}

/// Substitute `vars` into a template source, returning the page text.
pub fn render_page(
    name: &str,
    source: &str,
    vars: &serde_json::Value,
) -> Result<String, RenderError> {
    let env = Environment::new();
    Ok(env.render_named_str(name, source, vars)?)
}

/// Write rendered page text to `path` as UTF-8.
pub fn write_page(path: &Path, html: &str) -> Result<(), RenderError> {
    std::fs::write(path, html)?;
    Ok(())
}
