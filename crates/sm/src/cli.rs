//! Clap CLI definitions for the `sm` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// sm -- Excel & Google Sheets formula generators.
#[derive(Parser, Debug)]
#[command(
    name = "sm",
    about = "Excel & Google Sheets formula generators",
    long_about = "Browse the SheetMaster formula catalog, fill in a generator's inputs and get a ready-to-paste spreadsheet formula.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // ===== Formulas =====
    /// List the formula catalog.
    #[command(alias = "ls")]
    List(ListArgs),

    /// Search formulas by function, category, description or slug.
    Search(SearchArgs),

    /// Show a formula generator and its inputs.
    #[command(alias = "view")]
    Show(ShowArgs),

    /// Generate a formula from input values.
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    // ===== Solutions =====
    /// Multi-tool solution pages.
    Solution(SolutionArgs),

    // ===== Site =====
    /// Page metadata and structured data for a formula or solution.
    Meta(MetaArgs),

    /// Open Graph card URLs.
    Og(OgArgs),

    /// Render the sitemap.
    Sitemap(SitemapArgs),

    /// Check the catalogs for structural problems.
    Check,

    // ===== Setup & housekeeping =====
    /// Manage configuration.
    Config(ConfigArgs),

    /// Print version information.
    Version,

    /// Generate shell completion scripts.
    Completion(CompletionArgs),
}

/// Arguments for `sm list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show formulas in this category (Lookup, Logic, Math, Text, Date).
    #[arg(long, short = 'c')]
    pub category: Option<String>,
}

/// Arguments for `sm search`.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search text (case-insensitive substring).
    pub query: String,
}

/// Arguments for `sm show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Formula slug (e.g. "vlookup").
    pub slug: String,
}

/// Input values shared by the generate commands.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Set an input value (repeatable): --set lookup_value=A2
    #[arg(long = "set", short = 's', value_name = "ID=VALUE")]
    pub set: Vec<String>,

    /// Read input values from a JSON or TOML file. --set wins on conflicts.
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,
}

/// Arguments for `sm generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Formula slug.
    pub slug: String,

    #[command(flatten)]
    pub inputs: InputArgs,
}

/// Arguments for `sm solution`.
#[derive(Args, Debug)]
pub struct SolutionArgs {
    #[command(subcommand)]
    pub command: SolutionCommands,
}

/// Solution subcommands.
#[derive(Subcommand, Debug)]
pub enum SolutionCommands {
    /// List solutions.
    List,
    /// Show a solution with its tools and scenarios.
    Show(SolutionShowArgs),
    /// Generate a formula with one of a solution's tools.
    Generate(SolutionGenerateArgs),
}

#[derive(Args, Debug)]
pub struct SolutionShowArgs {
    /// Solution slug (e.g. "loan-calculator").
    pub slug: String,
}

#[derive(Args, Debug)]
pub struct SolutionGenerateArgs {
    /// Solution slug.
    pub slug: String,

    /// Tool id (default: the solution's first tool).
    #[arg(long, short = 't')]
    pub tool: Option<String>,

    /// Start from a scenario preset. --set values are applied on top.
    #[arg(long)]
    pub scenario: Option<String>,

    #[command(flatten)]
    pub inputs: InputArgs,
}

/// Arguments for `sm meta`.
#[derive(Args, Debug)]
pub struct MetaArgs {
    /// Formula slug, or solution slug with --solution. Omit for the home page.
    pub slug: Option<String>,

    /// Treat the slug as a solution.
    #[arg(long, requires = "slug")]
    pub solution: bool,
}

/// Arguments for `sm og`.
#[derive(Args, Debug)]
pub struct OgArgs {
    /// Card title.
    #[arg(long, conflicts_with = "query")]
    pub title: Option<String>,

    /// Card description.
    #[arg(long, conflicts_with = "query")]
    pub description: Option<String>,

    /// Parse a card query string instead of building one.
    #[arg(long)]
    pub query: Option<String>,
}

/// Arguments for `sm sitemap`.
#[derive(Args, Debug)]
pub struct SitemapArgs {
    /// Write to a file instead of stdout.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Last-modified date for every entry (YYYY-MM-DD, default: today).
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `sm config`.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Create a .sheetmaster directory with a default config.yaml.
    Init,
    /// Set a configuration value.
    Set(ConfigSetArgs),
    /// Get a configuration value.
    Get(ConfigGetArgs),
    /// List all configuration values.
    List,
}

#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Configuration key (base_url, site_name, color).
    pub key: String,
    /// Value to set.
    pub value: String,
}

#[derive(Args, Debug)]
pub struct ConfigGetArgs {
    /// Configuration key.
    pub key: String,
}

/// Arguments for `sm completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    #[command(subcommand)]
    pub shell: CompletionShell,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}
