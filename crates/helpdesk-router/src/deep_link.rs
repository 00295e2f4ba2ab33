//! Deep-link resolution
//!
//! Maps a redirect query to a URL inside one of the catalog's systems,
//! routed through the resource's SSO provider where it has one.

use crate::catalog::{CatalogEntry, ResourceCatalog, SsoProvider};
use helpdesk_domain::Domain;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// SSO endpoints, the `[sso]` table of the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SsoConfig {
    /// Okta tenant base URL
    pub okta_base_url: String,
    /// Azure AD "My Apps" base URL
    pub azure_apps_url: String,
}

impl Default for SsoConfig {
    fn default() -> Self {
        Self {
            okta_base_url: "https://company.okta.com".to_string(),
            azure_apps_url: "https://myapps.microsoft.com".to_string(),
        }
    }
}

/// A resolved link into an enterprise system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeepLink {
    /// Catalog id of the resource
    pub resource_id: String,
    /// Display name of the resource
    pub resource_name: String,
    /// URL to open
    pub url: String,
    /// One-line description of the destination
    pub description: String,
    /// Whether the URL goes through SSO
    pub sso_enabled: bool,
    /// Resource category
    pub category: String,
    /// Support contact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

/// Resolves queries to deep links against a shared catalog
#[derive(Debug, Clone)]
pub struct DeepLinkResolver {
    catalog: Arc<ResourceCatalog>,
    sso: SsoConfig,
}

impl DeepLinkResolver {
    /// Create a resolver
    pub fn new(catalog: Arc<ResourceCatalog>, sso: SsoConfig) -> Self {
        Self { catalog, sso }
    }

    /// Underlying catalog
    pub fn catalog(&self) -> &ResourceCatalog {
        &self.catalog
    }

    /// Resolve a query to a deep link, optionally within one domain
    pub fn resolve(&self, query: &str, domain: Option<Domain>) -> Option<DeepLink> {
        let entry = self.catalog.find_by_query(query, domain)?;
        let link = self.build(entry, query);
        debug!("Resolved query to {} ({})", link.resource_id, link.url);
        Some(link)
    }

    /// Build the link for a catalog entry
    pub fn build(&self, entry: &CatalogEntry, query: &str) -> DeepLink {
        let resource = entry.resource();

        let (path, description) = match entry.matching_link(query) {
            Some(link) => (
                link.path.as_str(),
                format!("{} in {}", title_case(&link.phrase()), resource.name),
            ),
            None => ("/", format!("Access {}", resource.name)),
        };

        let direct = || format!("{}{}", resource.base_url, path);
        let url = if resource.sso_enabled {
            match resource.sso_provider {
                SsoProvider::Okta => format!(
                    "{}/home/bookmark/0oa{}/2557?fromHome=true",
                    self.sso.okta_base_url.trim_end_matches('/'),
                    resource.resource_id
                ),
                SsoProvider::AzureAd => format!(
                    "{}/signin/{}",
                    self.sso.azure_apps_url.trim_end_matches('/'),
                    resource.resource_id
                ),
                SsoProvider::None => direct(),
            }
        } else {
            direct()
        };

        DeepLink {
            resource_id: resource.resource_id.clone(),
            resource_name: resource.name.clone(),
            url,
            description,
            sso_enabled: resource.sso_enabled,
            category: resource.category.clone(),
            contact: resource.contact.clone(),
        }
    }
}

fn title_case(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> DeepLinkResolver {
        DeepLinkResolver::new(Arc::new(ResourceCatalog::builtin()), SsoConfig::default())
    }

    #[test]
    fn test_named_link_description() {
        let link = resolver()
            .resolve("How do I submit an expense report", Some(Domain::Finance))
            .unwrap();
        assert_eq!(link.resource_id, "concur");
        assert_eq!(link.description, "Expense Report in Concur");
        assert_eq!(
            link.url,
            "https://company.okta.com/home/bookmark/0oaconcur/2557?fromHome=true"
        );
        assert!(link.sso_enabled);
        assert_eq!(link.contact.as_deref(), Some("finance-support@company.com"));
    }

    #[test]
    fn test_generic_description() {
        let link = resolver()
            .resolve("where can i request leave", Some(Domain::Hr))
            .unwrap();
        assert_eq!(link.resource_id, "workday");
        assert_eq!(link.description, "Access Workday");
    }

    #[test]
    fn test_azure_ad_url() {
        let link = resolver()
            .resolve("view company policies", Some(Domain::General))
            .unwrap();
        assert_eq!(link.resource_id, "sharepoint");
        assert_eq!(link.url, "https://myapps.microsoft.com/signin/sharepoint");
        assert_eq!(link.description, "Policies in SharePoint");
    }

    #[test]
    fn test_direct_url_without_sso() {
        let link = resolver().resolve("reset my mfa", None).unwrap();
        assert_eq!(link.resource_id, "okta");
        assert!(!link.sso_enabled);
        assert_eq!(link.url, "https://company.okta.com/enduser/settings/mfa");
        assert_eq!(link.description, "Mfa in Okta SSO");
    }

    #[test]
    fn test_custom_sso_base() {
        let sso = SsoConfig {
            okta_base_url: "https://sso.example.org/".to_string(),
            ..SsoConfig::default()
        };
        let resolver = DeepLinkResolver::new(Arc::new(ResourceCatalog::builtin()), sso);
        let link = resolver.resolve("access vpn portal", Some(Domain::It)).unwrap();
        assert_eq!(link.resource_id, "vpn");
        assert_eq!(link.url, "https://sso.example.org/home/bookmark/0oavpn/2557?fromHome=true");
    }

    #[test]
    fn test_unresolved_query() {
        assert!(resolver().resolve("what is the meaning of life", None).is_none());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("org chart"), "Org Chart");
        assert_eq!(title_case("kb"), "Kb");
    }
}
