//! Chat rendering for gated answers

use helpdesk_domain::{Citation, Domain};

/// Citations listed under an answer
pub const MAX_SOURCES: usize = 3;

/// Characters of each citation excerpt shown in the sources block
pub const SOURCE_EXCERPT_CHARS: usize = 100;

/// Suggested next questions for a domain, in display order
pub fn follow_up_suggestions(domain: Domain) -> &'static [&'static str] {
    match domain {
        Domain::Hr => &["View leave policy", "Check benefits", "Contact HR"],
        Domain::It => &["Create IT ticket", "Check VPN guide", "Password reset"],
        Domain::Finance => &["View expense policy", "Submit claim", "Contact finance"],
        Domain::General => &["Office locations", "Company policies", "Contact info"],
    }
}

/// Render the text a gate let through, with its sources and follow-ups
///
/// `response` is shown verbatim. Pass an empty `citations` slice for
/// refusals so no sources are listed under a fallback message.
pub fn format_answer(response: &str, citations: &[Citation], domain: Domain) -> String {
    let mut sections = vec![response.to_string()];

    if !citations.is_empty() {
        let mut sources = String::from("*Sources:*");
        for (i, citation) in citations.iter().take(MAX_SOURCES).enumerate() {
            let location = if citation.location.is_empty() {
                "Unknown"
            } else {
                citation.location.as_str()
            };
            sources.push_str(&format!(
                "\n{}. {}... _({})_",
                i + 1,
                citation.excerpt(SOURCE_EXCERPT_CHARS),
                location
            ));
        }
        sections.push(sources);
    }

    sections.push(format!(
        "*You might also ask:* {}",
        follow_up_suggestions(domain).join(" · ")
    ));

    sections.join("\n\n")
}
