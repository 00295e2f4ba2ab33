//! Helpdesk CLI - Offline access to the safety gate, router and catalog.

use clap::Parser;
use helpdesk_cli::commands;
use helpdesk_cli::{config, Cli, Command, Formatter, OutputFormat};
use helpdesk_router::supervisor::Supervisor;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays machine-readable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let format = cli.format.map(Into::into).unwrap_or(OutputFormat::Table);
    let formatter = Formatter::new(format, !cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

fn run(cli: Cli, formatter: &Formatter) -> helpdesk_cli::Result<()> {
    let config = config::load(cli.config.as_deref())?;
    let supervisor = Supervisor::from_config(&config)?;

    match cli.command {
        Command::Ask(args) => commands::execute_ask(args, &supervisor, formatter),
        Command::Validate(args) => commands::execute_validate(args, supervisor.gate(), formatter),
        Command::Classify(args) => commands::execute_classify(args, &supervisor, formatter),
        Command::Link(args) => commands::execute_link(args, supervisor.links(), formatter),
        Command::Resources(args) => {
            commands::execute_resources(args, supervisor.catalog(), formatter)
        }
        Command::Show(args) => commands::execute_show(args, supervisor.catalog(), formatter),
    }
}
