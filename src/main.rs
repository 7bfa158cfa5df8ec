use clap::Parser;
use photoweb::{output, run, templates};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photoweb")]
#[command(version)]
#[command(about = "Static HTML gallery generator for directories of photos")]
#[command(long_about = "\
Static HTML gallery generator for directories of photos

Each directory you pass gets an index.html gallery page rendered from a
template set, plus optional per-photo detail pages and thumbnails. Photo
metadata (title, caption, capture date) is read from the images' EXIF and
IPTC tags; photos are ordered by capture date.

Template sets live under ~/.photoweb/tpl/<name>/ and consist of a required
gallery.html, an optional detail.html, and an optional md.json with
rendering options (columns, thumbnails, thumbnail size). A default set is
installed on first run.

The page title and description given on the command line are saved to an
md.json file in the photo directory and reused on later runs, so they only
need to be given once.")]
struct Cli {
    /// Template set name under the template root
    #[arg(short = 't', long = "template", default_value = "default")]
    template: String,

    /// Gallery page title (saved for future runs)
    #[arg(short = 'p', long = "page-title")]
    page_title: Option<String>,

    /// Gallery description paragraph; repeat for multiple paragraphs
    #[arg(short = 'd', long = "desc")]
    page_desc: Vec<String>,

    /// Only regenerate HTML, skip thumbnails
    #[arg(long)]
    html: bool,

    /// Photo directories to process, in order
    #[arg(required = true)]
    dirs: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if ctrlc::set_handler(|| output::fatal("Interrupted.")).is_err() {
        output::fatal("Couldn't install the interrupt handler.");
    }

    let Some(template_root) = templates::default_template_root() else {
        output::fatal("Can't determine home directory.");
    };

    let config = run::RunConfig {
        template_root,
        template: cli.template,
        page_title: cli.page_title,
        page_desc: cli.page_desc,
        html_only: cli.html,
    };

    if let Err(why) = run::run(&config, &cli.dirs) {
        output::fatal(&why.to_string());
    }
}
