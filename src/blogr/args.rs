use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Version string for `--version`: the crate version, plus the commit it was
/// built from when that is known.
pub fn version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    if GIT_HASH.is_empty() {
        VERSION
    } else {
        Box::leak(format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE).into_boxed_str())
    }
}

#[derive(Parser, Debug)]
#[command(name = "blogr")]
#[command(about = "Local blog post manager with undoable deletes and HTML publishing", long_about = None)]
#[command(version = version())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the user-wide store instead of the project-local one
    #[arg(short, long, global = true)]
    pub global: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new post
    #[command(alias = "n")]
    Add {
        /// Title of the post (blank becomes "Untitled")
        #[arg(required = false)]
        title: Option<String>,

        /// Body text of the post
        #[arg(required = false)]
        content: Option<String>,

        /// Cover image URL or path
        #[arg(long)]
        image: Option<String>,

        /// Dedicated detail page URL; generated single-post view otherwise
        #[arg(long)]
        url: Option<String>,
    },

    /// List posts
    #[command(alias = "ls")]
    List,

    /// Delete a post by its list position
    #[command(alias = "rm")]
    Delete {
        /// Position as shown by `list` (1-based)
        position: usize,
    },

    /// Print the rendered single-post page for an id
    #[command(alias = "v")]
    View {
        /// Post id; omitted renders the not-found page
        id: Option<String>,
    },

    /// Seed the store from pre-rendered markup (first run only)
    Seed {
        /// Markup file to scan; defaults to the configured seed source
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Render the listing page to disk
    Publish {
        /// Output file; defaults to the configured output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Interactive session with a live undo window
    #[command(alias = "sh")]
    Shell,

    /// Get or set configuration
    Config {
        /// Configuration key (seed-source, output-file, site-title)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the store directory
    Init,
}
