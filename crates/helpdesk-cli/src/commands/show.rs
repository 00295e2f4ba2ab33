//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use helpdesk_router::catalog::ResourceCatalog;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, catalog: &ResourceCatalog, formatter: &Formatter) -> Result<()> {
    let resource = catalog
        .get(&args.resource_id)
        .ok_or_else(|| CliError::NotFound(format!("resource '{}'", args.resource_id)))?;

    println!("{}", formatter.format_resource(resource)?);

    Ok(())
}
