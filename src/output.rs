//! CLI output formatting.
//!
//! Format functions are pure and return strings; `print_*`/`warn_*`
//! wrappers do the actual writing. Progress goes to stdout, per-file
//! warnings to stderr, and fatal errors go through [`fatal`] — a single
//! `FATAL:` line and a non-zero exit, no stack traces.

use std::path::Path;

use crate::reader::ReaderError;

/// Counts for one processed directory.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub photos: usize,
    pub detail_pages: usize,
    pub thumbnails: usize,
}

/// Summary line for a finished directory.
///
/// ```text
/// 4 photos, 4 detail pages, 4 thumbnails
/// ```
pub fn format_summary(report: &RunReport) -> String {
    let plural = |n: usize| if n == 1 { "" } else { "s" };
    format!(
        "{} photo{}, {} detail page{}, {} thumbnail{}",
        report.photos,
        plural(report.photos),
        report.detail_pages,
        plural(report.detail_pages),
        report.thumbnails,
        plural(report.thumbnails),
    )
}

pub fn print_running(dir: &Path) {
    println!("Running {}", dir.display());
}

pub fn print_summary(report: &RunReport) {
    println!("{}", format_summary(report));
}

/// Warning line for a photo whose metadata couldn't be read.
pub fn format_unreadable(path: &Path, why: &ReaderError) -> String {
    format!("Can't find metadata for {} ({}).", path.display(), why)
}

/// Warn about a photo whose metadata couldn't be read; the file is
/// skipped and the run continues.
pub fn warn_unreadable(path: &Path, why: &ReaderError) {
    eprintln!("{}", format_unreadable(path, why));
}

/// Report a fatal error and exit non-zero. The only process exit path
/// besides a clean finish.
pub fn fatal(msg: &str) -> ! {
    eprintln!("FATAL: {msg}");
    std::process::exit(1);
}
