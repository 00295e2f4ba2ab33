//! Resources command implementation.

use crate::cli::ResourcesArgs;
use crate::error::Result;
use crate::output::Formatter;
use helpdesk_router::catalog::ResourceCatalog;

/// Execute the resources command.
pub fn execute_resources(args: ResourcesArgs, catalog: &ResourceCatalog, formatter: &Formatter) -> Result<()> {
    let resources = catalog.search(args.category.as_deref(), args.domain);
    println!("{}", formatter.format_resources(&resources)?);

    if args.category.is_some() && args.domain.is_some() {
        eprintln!("{}", formatter.info("--category takes precedence; --domain was ignored"));
    }

    Ok(())
}
