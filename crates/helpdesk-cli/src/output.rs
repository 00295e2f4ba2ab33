//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use helpdesk_gatekeeper::GateDecision;
use helpdesk_router::catalog::{Resource, ResourceSummary};
use helpdesk_router::classifier::Classification;
use helpdesk_router::deep_link::DeepLink;
use helpdesk_router::redirect::format_redirect;
use helpdesk_router::supervisor::SupervisorResponse;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a gate decision.
    pub fn format_decision(&self, decision: &GateDecision) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(decision)?);
        }

        let verdict = if decision.safe_to_respond {
            self.colorize("respond", "green")
        } else {
            self.colorize("fallback", "red")
        };
        let pii = match &decision.pii_detected {
            Some(found) if !found.is_empty() => found
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            Some(_) => "none".to_string(),
            None => "-".to_string(),
        };

        let rows = [
            ("Decision", verdict),
            ("Level", decision.confidence_level.to_string()),
            ("KB confidence", format!("{:.2}", decision.confidence)),
            ("Combined", format!("{:.2}", decision.combined_confidence)),
            (
                "Hallucination",
                decision
                    .hallucination_score
                    .map(|s| format!("{:.2}", s))
                    .unwrap_or_else(|| "-".to_string()),
            ),
            ("PII", pii),
            (
                "Reason",
                decision
                    .reason
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ];

        Ok(format!("{}\n\n{}", key_value_table(&rows), decision.response))
    }

    /// Format the reply to one chat turn.
    pub fn format_reply(&self, reply: &SupervisorResponse) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(reply)?);
        }

        match reply {
            SupervisorResponse::Redirect { link, .. } => self.format_link(link),
            SupervisorResponse::Answer {
                domain,
                message,
                decision,
                citations,
            } => {
                let verdict = if decision.safe_to_respond {
                    self.colorize("respond", "green")
                } else {
                    self.colorize("fallback", "red")
                };
                let rows = [
                    ("Domain", self.colorize(domain.as_str(), "cyan")),
                    ("Decision", verdict),
                    ("Level", decision.confidence_level.to_string()),
                    ("Combined", format!("{:.2}", decision.combined_confidence)),
                    ("Citations", citations.len().to_string()),
                ];
                Ok(format!("{}\n\n{}", key_value_table(&rows), message))
            }
        }
    }

    /// Format a query classification.
    pub fn format_classification(
        &self,
        query: &str,
        classification: &Classification,
        redirectional: bool,
    ) -> Result<String> {
        if self.format == OutputFormat::Json {
            let value = serde_json::json!({
                "query": query,
                "domain": classification.domain,
                "confidence": classification.confidence,
                "redirectional": redirectional,
            });
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        let rows = [
            ("Query", query.to_string()),
            ("Domain", self.colorize(classification.domain.as_str(), "cyan")),
            ("Confidence", format!("{:.2}", classification.confidence)),
            ("Redirect", if redirectional { "yes" } else { "no" }.to_string()),
        ];
        Ok(key_value_table(&rows))
    }

    /// Format a resolved deep link with its chat message.
    pub fn format_link(&self, link: &DeepLink) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(link)?);
        }

        let rows = [
            ("Resource", format!("{} ({})", link.resource_name, link.resource_id)),
            ("Category", link.category.clone()),
            ("Description", link.description.clone()),
            ("URL", self.colorize(&link.url, "blue")),
            ("SSO", if link.sso_enabled { "yes" } else { "no" }.to_string()),
            ("Contact", link.contact.clone().unwrap_or_else(|| "-".to_string())),
        ];
        Ok(format!("{}\n\n{}", key_value_table(&rows), format_redirect(link)))
    }

    /// Format a resource listing.
    pub fn format_resources(&self, resources: &[ResourceSummary]) -> Result<String> {
        if self.format == OutputFormat::Json {
            let value = serde_json::json!({
                "resources": resources,
                "count": resources.len(),
            });
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        if resources.is_empty() {
            return Ok(self.colorize("No resources found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Name", "Category", "Domain", "SSO", "Base URL"]);

        for resource in resources {
            builder.push_record([
                resource.resource_id.as_str(),
                resource.name.as_str(),
                resource.category.as_str(),
                resource.domain.as_str(),
                if resource.sso_enabled { "yes" } else { "no" },
                resource.base_url.as_str(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format one resource with its deep links.
    pub fn format_resource(&self, resource: &Resource) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(resource)?);
        }

        let sso = if resource.sso_enabled {
            format!("yes ({})", resource.sso_provider)
        } else {
            "no".to_string()
        };
        let rows = [
            ("ID", resource.resource_id.clone()),
            ("Name", resource.name.clone()),
            ("Category", resource.category.clone()),
            ("Domain", resource.domain.to_string()),
            ("Base URL", resource.base_url.clone()),
            ("SSO", sso),
            ("Keywords", resource.keywords.join(", ")),
            ("Contact", resource.contact.clone().unwrap_or_else(|| "-".to_string())),
        ];
        let mut output = key_value_table(&rows);

        if !resource.deep_links.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Link", "Path"]);
            for link in &resource.deep_links {
                builder.push_record([link.name.as_str(), link.path.as_str()]);
            }
            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            output.push_str("\n\n");
            output.push_str(&table.to_string());
        }

        Ok(output)
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Two-column field/value table.
fn key_value_table(rows: &[(&str, String)]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (field, value) in rows {
        builder.push_record([*field, value.as_str()]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}
