//! Ask command implementation.

use crate::cli::AskArgs;
use crate::error::Result;
use crate::output::Formatter;
use helpdesk_domain::{AgentAnswer, Domain, SpecialistAgent};
use helpdesk_router::supervisor::Supervisor;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Agent that replays an answer recorded as JSON.
///
/// With no recording every call fails, so the turn ends in the domain
/// fallback unless it resolves to a deep link.
#[derive(Debug, Default)]
pub struct RecordedAgent {
    answer: Option<AgentAnswer>,
}

impl RecordedAgent {
    /// Load a recorded answer, or build an agent with none.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let answer = match path {
            Some(path) => {
                debug!("Loading recorded answer from {}", path.display());
                Some(serde_json::from_str(&fs::read_to_string(path)?)?)
            }
            None => None,
        };
        Ok(Self { answer })
    }
}

impl SpecialistAgent for RecordedAgent {
    type Error = String;

    fn answer(
        &self,
        domain: Domain,
        _query: &str,
        _session_id: &str,
    ) -> std::result::Result<AgentAnswer, String> {
        self.answer
            .clone()
            .ok_or_else(|| format!("no recorded {} answer supplied", domain))
    }
}

/// Execute the ask command.
pub fn execute_ask(args: AskArgs, supervisor: &Supervisor, formatter: &Formatter) -> Result<()> {
    let agent = RecordedAgent::load(args.answer.as_deref())?;
    let reply = supervisor.handle(&args.query, &args.session, args.domain, &agent)?;

    println!("{}", formatter.format_reply(&reply)?);

    Ok(())
}
