//! Helpdesk Router server
//!
//! Starts the HTTP service for classification, validation and deep links.

use helpdesk_router::{config::RouterConfig, start_server, RouterError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

const USAGE: &str = "Usage: helpdesk-router --config <path-to-config.toml>";

/// What the command line asked for
#[derive(Debug, PartialEq, Eq)]
enum Launch {
    /// Load configuration from the given file
    Config(String),
    /// No arguments: run with the built-in configuration
    Defaults,
    /// Print help and exit
    Help,
}

/// Interpret the command line; `args[0]` is the program name.
fn parse_args(args: &[String]) -> Result<Launch, String> {
    match args.get(1).map(String::as_str) {
        None => Ok(Launch::Defaults),
        Some("--help") | Some("-h") => Ok(Launch::Help),
        Some("--config") => match args.get(2) {
            Some(path) if !path.starts_with('-') => Ok(Launch::Config(path.clone())),
            _ => Err("--config requires a file path".to_string()),
        },
        Some(other) => Err(format!("Unknown argument: {}", other)),
    }
}

async fn run() -> Result<(), RouterError> {
    let args: Vec<String> = env::args().collect();

    let config = match parse_args(&args) {
        Ok(Launch::Config(path)) => RouterConfig::from_file(&path)?,
        Ok(Launch::Defaults) => {
            eprintln!("Warning: No config file specified, using default configuration");
            eprintln!("{}", USAGE);
            eprintln!();
            RouterConfig::default()
        }
        Ok(Launch::Help) => {
            print_help();
            process::exit(0);
        }
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Helpdesk Router - Query routing and response safety gate");
    println!();
    println!("USAGE:");
    println!("    helpdesk-router --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    -h, --help         Print this help message");
    println!();
    println!("EXAMPLE:");
    println!("    helpdesk-router --config config/helpdesk.toml");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address, bind_port: where to listen (default 127.0.0.1:8080)");
    println!("    - [gate]: confidence thresholds, fallbacks and PII allow-lists");
    println!("    - [classifier]: domain keywords and redirect patterns");
    println!("    - [sso]: okta_base_url and azure_apps_url");
    println!("    - [[resources]]: catalog entries (built-in catalog when absent)");
    println!();
    println!("    Set RUST_LOG to change the log level (default: info).");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("helpdesk-router")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_config_path() {
        assert_eq!(
            parse_args(&argv(&["--config", "config/helpdesk.toml"])),
            Ok(Launch::Config("config/helpdesk.toml".to_string()))
        );
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        assert_eq!(parse_args(&argv(&[])), Ok(Launch::Defaults));
        assert_eq!(parse_args(&argv(&["--help"])), Ok(Launch::Help));
    }

    #[test]
    fn test_config_without_path_is_rejected() {
        assert!(parse_args(&argv(&["--config"])).is_err());
        assert!(parse_args(&argv(&["--config", "--help"])).is_err());
    }

    #[test]
    fn test_unknown_argument_is_rejected() {
        let err = parse_args(&argv(&["--port", "9000"])).unwrap_err();
        assert!(err.contains("--port"));
    }
}
