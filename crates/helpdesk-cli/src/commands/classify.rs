//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use helpdesk_router::supervisor::Supervisor;

/// Execute the classify command.
pub fn execute_classify(args: ClassifyArgs, supervisor: &Supervisor, formatter: &Formatter) -> Result<()> {
    let query = args.query.trim();
    if query.is_empty() {
        return Err(CliError::InvalidInput("Query must not be empty".to_string()));
    }

    let classification = supervisor.classify(query);
    let redirectional = supervisor.redirects().is_redirectional(query);

    println!(
        "{}",
        formatter.format_classification(query, &classification, redirectional)?
    );

    Ok(())
}
