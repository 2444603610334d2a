mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use mdpubs_core::config::{ConfigLoader, ResolvedConfig};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mdpubs", version, about = "Publication frontmatter for markdown notes")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// Show the publication id, privacy flag and tags of a note
    Inspect(InspectArgs),

    /// Print every frontmatter field of a note as JSON
    Fields(FieldsArgs),

    /// Record a publication id in a note's frontmatter
    SetId(SetIdArgs),

    /// List notes under the watched folders with their publication ids
    Status(StatusArgs),

    /// Turn a title into a safe file name
    Sanitize(SanitizeArgs),

    /// Extract the error message from a response body read on stdin
    ErrorMessage,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Markdown note to inspect
    pub path: PathBuf,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct FieldsArgs {
    /// Markdown note to read
    pub path: PathBuf,
}

#[derive(Debug, Args)]
pub struct SetIdArgs {
    /// Markdown note to update
    pub path: PathBuf,

    /// Publication id returned by the service
    pub id: u64,
}

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SanitizeArgs {
    /// Title to convert
    pub name: String,
}

fn main() {
    let cli = Cli::parse();

    let loaded = ConfigLoader::load_or_default(cli.config.as_deref(), cli.profile.as_deref());
    let fallback = ResolvedConfig::default();
    let rc = loaded.as_ref().unwrap_or(&fallback);
    logging::init(rc);
    if let Err(e) = &loaded {
        tracing::warn!("using default settings: {e}");
    }

    match cli.command {
        Commands::Doctor => {
            cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref());
        }
        Commands::Inspect(args) => cmd::inspect::run(rc, &args),
        Commands::Fields(args) => cmd::fields::run(&args),
        Commands::SetId(args) => cmd::set_id::run(rc, &args),
        Commands::Status(args) => {
            cmd::status::run(cli.config.as_deref(), cli.profile.as_deref(), &args);
        }
        Commands::Sanitize(args) => cmd::sanitize::run(&args),
        Commands::ErrorMessage => cmd::error_message::run(),
    }
}
