use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "gh-issues")]
#[command(about = "Browse open GitHub issues over the GraphQL API", version)]
#[command(after_help = "EXAMPLES:
    gh-issues issues rust-lang/rust          First page of open issues
    gh-issues issues rust-lang/rust --all    Every open issue
    gh-issues browse                         Interactive session
    gh-issues star rust-lang/rust            Star or unstar a repository")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Show debug logs and detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List open issues of a repository
    #[command(after_help = "EXAMPLES:
    gh-issues issues facebook/react
    gh-issues issues facebook/react --pages 3
    gh-issues issues facebook/react --all --json")]
    Issues(IssuesArgs),
    /// Browse issues interactively, loading more pages on demand
    #[command(after_help = "EXAMPLES:
    gh-issues browse
    gh-issues browse facebook/react --optimistic")]
    Browse(BrowseArgs),
    /// Star the repository, or unstar it if already starred
    #[command(after_help = "EXAMPLES:
    gh-issues star facebook/react")]
    Star(StarArgs),
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    gh-issues init")]
    Init,
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    gh-issues completions bash > ~/.bash_completion.d/gh-issues
    gh-issues completions zsh > ~/.zfunc/_gh-issues")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Args, Clone)]
pub struct IssuesArgs {
    /// Repository as <organization>/<repository> (uses default if not specified)
    pub path: Option<String>,

    /// Number of pages to fetch
    #[arg(long, short, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,

    /// Fetch all pages (may be slow for large repositories)
    #[arg(long, conflicts_with = "pages")]
    pub all: bool,
}

#[derive(Args, Clone)]
pub struct BrowseArgs {
    /// Repository as <organization>/<repository> (uses default if not specified)
    pub path: Option<String>,

    /// Update the star marker before the server confirms the change
    #[arg(long)]
    pub optimistic: bool,
}

#[derive(Args, Clone)]
pub struct StarArgs {
    /// Repository as <organization>/<repository> (uses default if not specified)
    pub path: Option<String>,
}
