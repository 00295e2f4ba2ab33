//! Validate command implementation.

use crate::cli::ValidateArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use helpdesk_domain::Citation;
use helpdesk_gatekeeper::{GateRequest, SafetyGate};
use std::fs;
use std::io::{self, Read};

/// Execute the validate command.
pub fn execute_validate(args: ValidateArgs, gate: &SafetyGate, formatter: &Formatter) -> Result<()> {
    let request = build_request(args, || {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    })?;

    let decision = gate.evaluate(&request);
    println!("{}", formatter.format_decision(&decision)?);

    Ok(())
}

/// Build a request from a JSON file, JSON on stdin, or inline arguments.
fn build_request<F>(args: ValidateArgs, read_stdin: F) -> Result<GateRequest>
where
    F: FnOnce() -> Result<String>,
{
    let json_data = if args.stdin {
        Some(read_stdin()?)
    } else if let Some(path) = &args.file {
        Some(fs::read_to_string(path)?)
    } else {
        None
    };

    if let Some(json_data) = json_data {
        return Ok(serde_json::from_str(&json_data)?);
    }

    let response = args.response.ok_or_else(|| {
        CliError::InvalidInput("Must specify --file, --stdin or --response".to_string())
    })?;
    let query_confidence = args.query_confidence.ok_or_else(|| {
        CliError::InvalidInput("--query-confidence is required with --response".to_string())
    })?;

    if let Some(bad) = args.scores.iter().find(|s| !(0.0..=1.0).contains(*s)) {
        return Err(CliError::InvalidInput(format!(
            "Citation score {} must be between 0.0 and 1.0",
            bad
        )));
    }

    Ok(GateRequest {
        response,
        citations: args.scores.into_iter().map(Citation::scored).collect(),
        query_confidence,
        domain: args.domain,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args() -> ValidateArgs {
        ValidateArgs {
            file: None,
            stdin: false,
            response: None,
            query_confidence: None,
            scores: Vec::new(),
            domain: "general".to_string(),
        }
    }

    fn no_stdin() -> Result<String> {
        panic!("stdin should not be read")
    }

    #[test]
    fn test_inline_request() {
        let request = build_request(
            ValidateArgs {
                response: Some("Annual leave is 14 days.".to_string()),
                query_confidence: Some(0.9),
                scores: vec![0.9, 0.8],
                domain: "hr".to_string(),
                ..args()
            },
            no_stdin,
        )
        .unwrap();

        assert_eq!(request.citations.len(), 2);
        assert_eq!(request.citations[1].score(), 0.8);
        assert_eq!(request.domain, "hr");
    }

    #[test]
    fn test_missing_input() {
        assert!(matches!(build_request(args(), no_stdin), Err(CliError::InvalidInput(_))));

        let missing_confidence = ValidateArgs {
            response: Some("text".to_string()),
            ..args()
        };
        assert!(matches!(
            build_request(missing_confidence, no_stdin),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_score_out_of_range() {
        let request = ValidateArgs {
            response: Some("text".to_string()),
            query_confidence: Some(0.5),
            scores: vec![1.5],
            ..args()
        };
        assert!(matches!(build_request(request, no_stdin), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_request_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"response": "Claims close after 30 days.", "citations": [{{"metadata": {{"score": 0.9}}}}], "query_confidence": 0.9, "domain": "finance"}}"#
        )
        .unwrap();

        let request = build_request(
            ValidateArgs {
                file: Some(file.path().to_path_buf()),
                ..args()
            },
            no_stdin,
        )
        .unwrap();
        assert_eq!(request.domain, "finance");
        assert_eq!(request.citations[0].score(), 0.9);
    }

    #[test]
    fn test_request_from_stdin() {
        let request = build_request(
            ValidateArgs {
                stdin: true,
                ..args()
            },
            || Ok(r#"{"response": "x", "query_confidence": 0.2}"#.to_string()),
        )
        .unwrap();
        assert_eq!(request.domain, "general");
    }

    #[test]
    fn test_malformed_json() {
        let result = build_request(
            ValidateArgs {
                stdin: true,
                ..args()
            },
            || Ok("not json".to_string()),
        );
        assert!(matches!(result, Err(CliError::Serialization(_))));
    }
}
