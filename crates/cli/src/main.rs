mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use hugo_utils_core::config::loader::ConfigLoader;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "hugo-utils",
    version,
    about = "Missing hugo tools",
    long_about = "hugo-utils lists the front matter of Hugo content files and updates it in place."
)]
struct Cli {
    /// Path to the config file (defaults to ~/.config/hugo-utils/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List all content under a given directory
    List(ListArgs),

    /// Update the front matter of a page
    Update(UpdateArgs),
}

/// Every content file (*.md) under the directory is printed to stdout.
///
/// Without FORMAT each page is shown as a table of title, file, slug, date,
/// last-mod, keywords, tags, and draft. FORMAT is a Jinja template rendered
/// once per page: the page's fields are top-level variables (`title`, `tags`,
/// `path`, ...) and `pages` holds every page found.
///
/// Examples:
///
///   hugo-utils list --directory ./content/blog
///
///   hugo-utils list --directory ./content/blog '{{ title }} - {{ keywords }}'
///
///   hugo-utils list --directory ./content/blog \
///     '{% if keywords | length == 0 %}{{ path }}{% endif %}'
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Directory where the content files live (defaults to content.root from config)
    #[arg(long, short = 'd')]
    pub directory: Option<PathBuf>,

    /// What to list entries by (pages|tags|categories)
    #[arg(long = "type", value_name = "TYPE")]
    pub list_type: Option<String>,

    /// Field to sort by (title|date|lastmod)
    #[arg(long)]
    pub sort: Option<String>,

    /// Only show drafts
    #[arg(long)]
    pub draft: bool,

    /// Template applied to every page
    pub format: Option<String>,
}

/// The page is parsed, the YAML fragment (if any) is merged over its front
/// matter, and the file is rewritten atomically. Fields in the fragment
/// replace the page's; other fields are kept.
///
/// Without a fragment the page is rewritten with every front matter field
/// written out, so a page without tags gains `tags: []`.
///
/// Examples:
///
///   hugo-utils update --filepath ./content/blog/page1.md
///
///   hugo-utils update --filepath ./content/blog/page1.md 'tags: ["tag3"]'
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Path to the page file
    #[arg(long)]
    pub filepath: PathBuf,

    /// YAML fragment merged over the page's front matter
    pub yaml: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let cfg = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    };

    logging::init(&cfg);

    match cli.command {
        Commands::List(args) => cmd::list::run(&cfg, args),
        Commands::Update(args) => cmd::update::run(&args.filepath, args.yaml.as_deref()),
    }
}
