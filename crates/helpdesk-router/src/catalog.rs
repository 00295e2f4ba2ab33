//! Resource catalog of enterprise systems
//!
//! Built once at startup from the config file (or the built-in list) and
//! shared read-only across requests.

use crate::config::ConfigError;
use crate::keywords::KeywordSet;
use helpdesk_domain::Domain;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Single sign-on provider fronting a resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SsoProvider {
    /// Okta bookmark apps
    Okta,
    /// Azure AD "My Apps"
    AzureAd,
    /// No provider; link directly
    #[default]
    None,
}

impl SsoProvider {
    /// Get the provider name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SsoProvider::Okta => "okta",
            SsoProvider::AzureAd => "azure_ad",
            SsoProvider::None => "none",
        }
    }
}

impl fmt::Display for SsoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named path inside a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepLinkPath {
    /// Link name; underscores read as spaces when matching queries
    pub name: String,
    /// Path appended to the resource's base URL
    pub path: String,
}

impl DeepLinkPath {
    /// Create a deep link path
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Name as it appears in queries
    pub fn phrase(&self) -> String {
        self.name.replace('_', " ")
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique identifier
    pub resource_id: String,

    /// Display name
    pub name: String,

    /// Category label, e.g. `hr_system`
    pub category: String,

    /// Owning domain
    pub domain: Domain,

    /// Base URL for direct links
    pub base_url: String,

    /// Whether access goes through SSO
    #[serde(default)]
    pub sso_enabled: bool,

    /// SSO provider used when `sso_enabled`
    #[serde(default)]
    pub sso_provider: SsoProvider,

    /// Named paths, in matching order
    #[serde(default)]
    pub deep_links: Vec<DeepLinkPath>,

    /// Keywords that route queries to this resource
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Support contact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

/// Listing view of a resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSummary {
    /// Unique identifier
    pub resource_id: String,
    /// Display name
    pub name: String,
    /// Category label
    pub category: String,
    /// Owning domain
    pub domain: Domain,
    /// Base URL
    pub base_url: String,
    /// Whether access goes through SSO
    pub sso_enabled: bool,
}

impl From<&Resource> for ResourceSummary {
    fn from(resource: &Resource) -> Self {
        Self {
            resource_id: resource.resource_id.clone(),
            name: resource.name.clone(),
            category: resource.category.clone(),
            domain: resource.domain,
            base_url: resource.base_url.clone(),
            sso_enabled: resource.sso_enabled,
        }
    }
}

/// A resource with its compiled matchers
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    resource: Resource,
    keywords: KeywordSet,
    links: KeywordSet,
}

impl CatalogEntry {
    fn new(resource: Resource) -> Self {
        let keywords = KeywordSet::new(&resource.keywords);
        let links = KeywordSet::new(resource.deep_links.iter().map(DeepLinkPath::phrase));
        Self {
            resource,
            keywords,
            links,
        }
    }

    /// The catalog resource
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Number of this resource's keywords present in `query`
    pub fn score(&self, query: &str) -> usize {
        self.keywords.count_matches(query)
    }

    /// First deep link whose name occurs in `query`
    pub fn matching_link(&self, query: &str) -> Option<&DeepLinkPath> {
        self.links
            .first_match(query)
            .and_then(|idx| self.resource.deep_links.get(idx))
    }
}

/// Read-only catalog of enterprise systems
#[derive(Debug, Clone)]
pub struct ResourceCatalog {
    entries: Vec<CatalogEntry>,
}

impl ResourceCatalog {
    /// Build a catalog, rejecting blank or duplicate resource ids
    pub fn new(resources: Vec<Resource>) -> Result<Self, ConfigError> {
        {
            let mut seen = HashSet::new();
            for resource in &resources {
                if resource.resource_id.trim().is_empty() {
                    return Err(ConfigError::Invalid(format!(
                        "Resource '{}' has an empty resource_id",
                        resource.name
                    )));
                }
                if !seen.insert(resource.resource_id.as_str()) {
                    return Err(ConfigError::DuplicateResource(resource.resource_id.clone()));
                }
            }
        }

        Ok(Self::from_resources(resources))
    }

    /// The built-in catalog
    pub fn builtin() -> Self {
        Self::from_resources(default_resources())
    }

    fn from_resources(resources: Vec<Resource>) -> Self {
        Self {
            entries: resources.into_iter().map(CatalogEntry::new).collect(),
        }
    }

    /// Number of resources
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All resources in catalog order
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.entries.iter().map(CatalogEntry::resource)
    }

    /// Look up a resource by id
    pub fn get(&self, resource_id: &str) -> Option<&Resource> {
        self.resources().find(|r| r.resource_id == resource_id)
    }

    /// Best keyword match for a query, optionally within one domain
    ///
    /// Resources with no keyword hit are never returned. Ties go to the
    /// earlier catalog entry.
    pub fn find_by_query(&self, query: &str, domain: Option<Domain>) -> Option<&CatalogEntry> {
        let mut best: Option<(usize, &CatalogEntry)> = None;

        for entry in &self.entries {
            if domain.is_some_and(|d| entry.resource.domain != d) {
                continue;
            }
            let score = entry.score(query);
            if score > 0 && best.is_none_or(|(top, _)| score > top) {
                best = Some((score, entry));
            }
        }

        best.map(|(_, entry)| entry)
    }

    /// List resources by category, else by domain, else all
    pub fn search(&self, category: Option<&str>, domain: Option<Domain>) -> Vec<ResourceSummary> {
        self.resources()
            .filter(|r| match (category, domain) {
                (Some(category), _) => r.category == category,
                (None, Some(domain)) => r.domain == domain,
                (None, None) => true,
            })
            .map(ResourceSummary::from)
            .collect()
    }
}

impl Default for ResourceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn resource(
    resource_id: &str,
    name: &str,
    category: &str,
    domain: Domain,
    base_url: &str,
    sso_provider: SsoProvider,
    deep_links: &[(&str, &str)],
    keywords: &[&str],
    contact: &str,
) -> Resource {
    Resource {
        resource_id: resource_id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        domain,
        base_url: base_url.to_string(),
        sso_enabled: sso_provider != SsoProvider::None,
        sso_provider,
        deep_links: deep_links
            .iter()
            .map(|(name, path)| DeepLinkPath::new(*name, *path))
            .collect(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        contact: Some(contact.to_string()),
    }
}

/// The built-in enterprise systems
pub fn default_resources() -> Vec<Resource> {
    const HR_CONTACT: &str = "hr-support@company.com";
    const IT_CONTACT: &str = "it-support@company.com";
    const FINANCE_CONTACT: &str = "finance-support@company.com";
    const ADMIN_CONTACT: &str = "admin-support@company.com";

    vec![
        resource(
            "workday",
            "Workday",
            "hr_system",
            Domain::Hr,
            "https://company.workday.com",
            SsoProvider::Okta,
            &[
                ("leave_request", "/leave/request"),
                ("timesheet", "/time/entry"),
                ("benefits", "/benefits/enrollment"),
                ("payslip", "/payroll/payslip"),
            ],
            &["leave", "timesheet", "benefits", "payslip", "workday"],
            HR_CONTACT,
        ),
        resource(
            "hubbahub",
            "HubbaHub",
            "hr_portal",
            Domain::Hr,
            "https://hubbahub.company.com",
            SsoProvider::Okta,
            &[
                ("policies", "/policies"),
                ("org_chart", "/organization"),
                ("directory", "/directory"),
                ("announcements", "/news"),
            ],
            &["policies", "org chart", "directory", "employee", "hubbahub"],
            HR_CONTACT,
        ),
        resource(
            "servicenow",
            "ServiceNow",
            "it_system",
            Domain::It,
            "https://company.service-now.com",
            SsoProvider::Okta,
            &[
                ("create_incident", "/nav_to.do?uri=incident.do"),
                ("my_incidents", "/nav_to.do?uri=incident_list.do"),
                ("catalog", "/nav_to.do?uri=sc_catalog.do"),
                ("kb", "/nav_to.do?uri=kb_view.do"),
            ],
            &["incident", "ticket", "it support", "servicenow", "service request"],
            IT_CONTACT,
        ),
        resource(
            "vpn",
            "VPN Portal",
            "it_portal",
            Domain::It,
            "https://vpn.company.com",
            SsoProvider::Okta,
            &[
                ("connect", "/connect"),
                ("download", "/download"),
                ("troubleshoot", "/help"),
            ],
            &["vpn", "remote access", "network"],
            IT_CONTACT,
        ),
        resource(
            "okta",
            "Okta SSO",
            "it_system",
            Domain::It,
            "https://company.okta.com",
            SsoProvider::None,
            &[
                ("dashboard", "/app/UserHome"),
                ("profile", "/enduser/settings"),
                ("mfa", "/enduser/settings/mfa"),
            ],
            &["sso", "login", "password", "mfa", "okta"],
            IT_CONTACT,
        ),
        resource(
            "concur",
            "Concur",
            "finance_system",
            Domain::Finance,
            "https://company.concursolutions.com",
            SsoProvider::Okta,
            &[
                ("expense_report", "/expense/create"),
                ("travel_request", "/travel/request"),
                ("receipts", "/receipts/upload"),
                ("approvals", "/approvals/pending"),
            ],
            &["expense", "reimbursement", "travel", "concur", "receipt"],
            FINANCE_CONTACT,
        ),
        resource(
            "sap",
            "SAP",
            "finance_system",
            Domain::Finance,
            "https://sap.company.com",
            SsoProvider::Okta,
            &[
                ("purchase_order", "/po/create"),
                ("invoice", "/invoice/view"),
                ("vendor", "/vendor/manage"),
            ],
            &["purchase order", "invoice", "vendor", "sap", "procurement"],
            FINANCE_CONTACT,
        ),
        resource(
            "sharepoint",
            "SharePoint",
            "collaboration",
            Domain::General,
            "https://company.sharepoint.com",
            SsoProvider::AzureAd,
            &[
                ("documents", "/sites/HCG/Documents"),
                ("policies", "/sites/HCG/Policies"),
                ("templates", "/sites/HCG/Templates"),
            ],
            &["documents", "sharepoint", "files", "policies"],
            ADMIN_CONTACT,
        ),
        resource(
            "confluence",
            "Confluence",
            "collaboration",
            Domain::General,
            "https://company.atlassian.net/wiki",
            SsoProvider::Okta,
            &[("home", "/spaces"), ("search", "/search"), ("recent", "/recent")],
            &["wiki", "confluence", "documentation", "knowledge base"],
            ADMIN_CONTACT,
        ),
        resource(
            "slack",
            "Slack",
            "collaboration",
            Domain::General,
            "https://company.slack.com",
            SsoProvider::Okta,
            &[("channel", "/archives"), ("dm", "/messages"), ("search", "/search")],
            &["slack", "chat", "message", "channel"],
            ADMIN_CONTACT,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = ResourceCatalog::builtin();
        assert_eq!(catalog.len(), 10);
        assert!(ResourceCatalog::new(default_resources()).is_ok());

        let okta = catalog.get("okta").unwrap();
        assert!(!okta.sso_enabled);
        assert_eq!(okta.sso_provider, SsoProvider::None);
        assert_eq!(catalog.get("sharepoint").unwrap().sso_provider, SsoProvider::AzureAd);
        assert!(catalog.get("jira").is_none());
    }

    #[test]
    fn test_find_by_query_scores_keywords() {
        let catalog = ResourceCatalog::builtin();
        let entry = catalog.find_by_query("search confluence wiki", None).unwrap();
        assert_eq!(entry.resource().resource_id, "confluence");
        assert_eq!(entry.score("search confluence wiki"), 2);
    }

    #[test]
    fn test_find_by_query_tie_keeps_catalog_order() {
        let catalog = ResourceCatalog::builtin();
        // "policies" is a keyword of both HubbaHub and SharePoint
        let entry = catalog.find_by_query("view company policies", None).unwrap();
        assert_eq!(entry.resource().resource_id, "hubbahub");

        let entry = catalog
            .find_by_query("view company policies", Some(Domain::General))
            .unwrap();
        assert_eq!(entry.resource().resource_id, "sharepoint");
    }

    #[test]
    fn test_find_by_query_no_match() {
        let catalog = ResourceCatalog::builtin();
        assert!(catalog.find_by_query("what is for lunch", None).is_none());
        assert!(catalog.find_by_query("check my payslip", Some(Domain::It)).is_none());
    }

    #[test]
    fn test_matching_link_order() {
        let catalog = ResourceCatalog::builtin();
        let entry = catalog.find_by_query("submit travel request", None).unwrap();
        assert_eq!(entry.resource().resource_id, "concur");
        assert_eq!(
            entry.matching_link("submit travel request").map(|l| l.path.as_str()),
            Some("/travel/request")
        );
        assert!(entry.matching_link("submit a claim").is_none());
    }

    #[test]
    fn test_search_precedence() {
        let catalog = ResourceCatalog::builtin();
        assert_eq!(catalog.search(None, None).len(), 10);
        assert_eq!(catalog.search(Some("collaboration"), None).len(), 3);
        assert_eq!(catalog.search(None, Some(Domain::It)).len(), 3);

        // Category wins over domain
        let listed = catalog.search(Some("finance_system"), Some(Domain::Hr));
        let ids: Vec<_> = listed.iter().map(|r| r.resource_id.as_str()).collect();
        assert_eq!(ids, vec!["concur", "sap"]);

        assert!(catalog.search(Some("unknown"), None).is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut resources = default_resources();
        resources.push(resources[0].clone());
        let err = ResourceCatalog::new(resources).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateResource(id) if id == "workday"));
    }

    #[test]
    fn test_blank_id_rejected() {
        let mut resources = default_resources();
        resources[3].resource_id = " ".to_string();
        assert!(matches!(ResourceCatalog::new(resources), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_resource_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            resources: Vec<Resource>,
        }

        let parsed: Wrapper = toml::from_str(
            r#"
            [[resources]]
            resource_id = "jira"
            name = "Jira"
            category = "it_system"
            domain = "it"
            base_url = "https://company.atlassian.net/jira"
            sso_enabled = true
            sso_provider = "okta"
            keywords = ["jira", "bug"]
            deep_links = [
                { name = "create_issue", path = "/secure/CreateIssue.jspa" },
            ]
            "#,
        )
        .unwrap();

        let jira = &parsed.resources[0];
        assert_eq!(jira.domain, Domain::It);
        assert_eq!(jira.deep_links[0].phrase(), "create issue");
        assert!(jira.contact.is_none());
    }
}
