//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use helpdesk_domain::Domain;
use std::path::PathBuf;

/// Helpdesk CLI - Check answers, routing and deep links offline.
#[derive(Debug, Parser)]
#[command(name = "helpdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "HELPDESK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Handle one chat turn: deep link, or gated answer from a recorded agent reply
    Ask(AskArgs),

    /// Run a candidate answer through the safety gate
    Validate(ValidateArgs),

    /// Show the domain a query routes to
    Classify(ClassifyArgs),

    /// Resolve a deep link for a query
    Link(LinkArgs),

    /// List catalog resources
    Resources(ResourcesArgs),

    /// Show one catalog resource
    Show(ShowArgs),
}

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// JSON file containing a validation request
    #[arg(long, conflicts_with_all = ["stdin", "response"])]
    pub file: Option<PathBuf>,

    /// Read a JSON validation request from stdin
    #[arg(long, conflicts_with = "response")]
    pub stdin: bool,

    /// Candidate answer text
    #[arg(short, long)]
    pub response: Option<String>,

    /// Classifier confidence (0.0-1.0)
    #[arg(short, long, requires = "response")]
    pub query_confidence: Option<f64>,

    /// Citation score; repeat for several citations
    #[arg(short = 's', long = "score", requires = "response")]
    pub scores: Vec<f64>,

    /// Domain whose fallback is used on refusal
    #[arg(short, long, default_value = "general")]
    pub domain: String,
}

/// Arguments for the ask command.
#[derive(Debug, Parser)]
pub struct AskArgs {
    /// Query text
    pub query: String,

    /// Route to this domain instead of classifying, and only link its systems
    #[arg(short, long)]
    pub domain: Option<Domain>,

    /// JSON file holding the agent's answer (`response` and `citations`)
    #[arg(short, long)]
    pub answer: Option<PathBuf>,

    /// Session id passed to the agent
    #[arg(long, default_value = "cli")]
    pub session: String,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Query text
    pub query: String,
}

/// Arguments for the link command.
#[derive(Debug, Parser)]
pub struct LinkArgs {
    /// Query text
    pub query: String,

    /// Restrict matching to one domain
    #[arg(short, long)]
    pub domain: Option<Domain>,
}

/// Arguments for the resources command.
#[derive(Debug, Parser)]
pub struct ResourcesArgs {
    /// Filter by category (takes precedence over --domain)
    #[arg(long)]
    pub category: Option<String>,

    /// Filter by domain
    #[arg(short, long)]
    pub domain: Option<Domain>,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Resource ID
    pub resource_id: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}
