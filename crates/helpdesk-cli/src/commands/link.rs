//! Link command implementation.

use crate::cli::LinkArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use helpdesk_router::deep_link::DeepLinkResolver;

/// Execute the link command.
pub fn execute_link(args: LinkArgs, links: &DeepLinkResolver, formatter: &Formatter) -> Result<()> {
    let query = args.query.trim();
    if query.is_empty() {
        return Err(CliError::InvalidInput("Query must not be empty".to_string()));
    }

    match links.resolve(query, args.domain) {
        Some(link) => {
            println!("{}", formatter.format_link(&link)?);
            Ok(())
        }
        None => {
            eprintln!("{}", formatter.warning("No matching resource found"));
            Err(CliError::NotFound(format!("no resource matches '{}'", query)))
        }
    }
}
