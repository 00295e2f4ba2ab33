//! Redirect detection and redirect message formatting

use crate::classifier::ClassifierConfig;
use crate::deep_link::DeepLink;
use crate::keywords::KeywordSet;

/// Detects queries asking where or how to reach a system
#[derive(Debug, Clone)]
pub struct RedirectDetector {
    patterns: KeywordSet,
}

impl RedirectDetector {
    /// Build a detector from the classifier's redirect patterns
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            patterns: KeywordSet::new(&config.redirect_patterns),
        }
    }

    /// Whether `query` asks for a link rather than an answer
    pub fn is_redirectional(&self, query: &str) -> bool {
        self.patterns.matches_any(query)
    }
}

impl Default for RedirectDetector {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

/// Render a deep link as a chat message
pub fn format_redirect(link: &DeepLink) -> String {
    let mut message = format!("🔗 **{}**\n\n", link.description);

    if link.sso_enabled {
        message.push_str(&format!("Click here to access via SSO: {}\n", link.url));
        message.push_str("✅ Single Sign-On enabled - you'll be logged in automatically\n");
    } else {
        message.push_str(&format!("Access link: {}\n", link.url));
        message.push_str("⚠️ You may need to log in manually\n");
    }

    if let Some(contact) = &link.contact {
        message.push_str(&format!("\n📧 Need help? Contact: {}", contact));
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(sso_enabled: bool, contact: Option<&str>) -> DeepLink {
        DeepLink {
            resource_id: "concur".to_string(),
            resource_name: "Concur".to_string(),
            url: "https://company.concursolutions.com/expense/create".to_string(),
            description: "Expense Report in Concur".to_string(),
            sso_enabled,
            category: "finance_system".to_string(),
            contact: contact.map(String::from),
        }
    }

    #[test]
    fn test_redirectional_queries() {
        let detector = RedirectDetector::default();
        assert!(detector.is_redirectional("Where can I request leave?"));
        assert!(detector.is_redirectional("How do I submit an expense report"));
        assert!(detector.is_redirectional("link to the vpn portal"));
        assert!(!detector.is_redirectional("How many days of annual leave do I get?"));
        assert!(!detector.is_redirectional("Is there a limit on overviews?"));
    }

    #[test]
    fn test_sso_message() {
        let message = format_redirect(&link(true, Some("finance-support@company.com")));
        assert!(message.starts_with("🔗 **Expense Report in Concur**\n\n"));
        assert!(message.contains("logged in automatically"));
        assert!(message.ends_with("Contact: finance-support@company.com"));
    }

    #[test]
    fn test_manual_login_message() {
        let message = format_redirect(&link(false, None));
        assert!(message.contains("Access link: https://company.concursolutions.com/expense/create"));
        assert!(message.contains("may need to log in manually"));
        assert!(!message.contains("Need help"));
    }
}
