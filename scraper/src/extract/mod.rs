//! Per-source extraction rules.
//!
//! Each rule turns one fetched page into candidate job postings and leads.
//! The [`Registry`] picks a rule from the page host, falling back to
//! [`GenericRule`] for hosts it does not know.

mod emails;
mod generic;
mod remoteok;
mod trabajo;
mod unjobnet;
mod wwr;

pub use emails::extract_emails;
pub use generic::GenericRule;
pub use remoteok::RemoteOkRule;
pub use trabajo::TrabajoRule;
pub use unjobnet::UnjobnetRule;
pub use wwr::WeWorkRemotelyRule;

use scout_common::{JobPosting, Lead};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Raw markup together with the URL it was fetched from.
pub struct Page<'a> {
    pub url: &'a Url,
    pub html: &'a str,
    /// The source URL exactly as configured; leads point back to it.
    pub listed_as: &'a str,
}

/// What a rule found on one page, before dedup and lead filtering.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Extraction {
    pub jobs: Vec<JobPosting>,
    pub leads: Vec<Lead>,
}

pub trait ExtractorRule {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Never fails: markup the rule can't use yields an empty `Extraction`.
    fn extract(&self, page: &Page<'_>, keywords: &[String]) -> Extraction;
}

impl<'a> Page<'a> {
    pub fn new(url: &'a Url, html: &'a str) -> Self {
        Self {
            url,
            html,
            listed_as: url.as_str(),
        }
    }

    pub fn listed_as(mut self, raw: &'a str) -> Self {
        self.listed_as = raw;
        self
    }

    /// `None` for empty or whitespace-only markup.
    pub(crate) fn parse(&self) -> Option<Html> {
        if self.html.trim().is_empty() {
            return None;
        }
        Some(Html::parse_document(self.html))
    }

    /// Absolute form of an element's `href`, resolved against the page URL.
    pub(crate) fn resolve(&self, element: &ElementRef<'_>) -> Option<Url> {
        let href = element.value().attr("href")?;
        self.url.join(href.trim()).ok()
    }

    /// Every distinct email in the page's visible text, as a lead with no company.
    pub(crate) fn leads(&self, document: &Html, source: &str) -> Vec<Lead> {
        extract_emails(&page_text(document))
            .into_iter()
            .map(|email| Lead::new("", email, source, self.listed_as))
            .collect()
    }
}

/// Stripped text nodes of `element`, joined with `sep`.
pub fn element_text(element: &ElementRef<'_>, sep: &str) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Visible text of the whole document: everything outside script/style blocks.
pub fn page_text(document: &Html) -> String {
    let mut parts = Vec::new();
    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node
            .ancestors()
            .filter_map(|n| n.value().as_element())
            .any(|el| matches!(el.name(), "script" | "style" | "noscript"));
        let text = text.trim();
        if !hidden && !text.is_empty() {
            parts.push(text);
        }
    }
    parts.join(" ")
}

/// Nearest ancestor of `element` matching `selector`.
pub(crate) fn enclosing<'a>(element: &ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| selector.matches(ancestor))
}

/// Text of the first `selector` match under `scope`, or empty.
pub(crate) fn first_text(scope: &ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .next()
        .map(|el| element_text(&el, " "))
        .unwrap_or_default()
}

pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad selector {css:?}: {e:?}"))
}

/// Host substrings mapped to rules, checked in order; anything else goes to
/// the generic rule.
pub struct Registry {
    rules: Vec<(&'static str, Box<dyn ExtractorRule>)>,
    fallback: GenericRule,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            rules: vec![
                ("trabajo.org", Box::new(TrabajoRule) as Box<dyn ExtractorRule>),
                ("remoteok.com", Box::new(RemoteOkRule) as Box<dyn ExtractorRule>),
                ("weworkremotely.com", Box::new(WeWorkRemotelyRule) as Box<dyn ExtractorRule>),
                ("unjobnet.org", Box::new(UnjobnetRule) as Box<dyn ExtractorRule>),
            ],
            fallback: GenericRule,
        }
    }

    pub fn rule_for(&self, host: &str) -> &dyn ExtractorRule {
        let host = host.to_lowercase();
        self.rules
            .iter()
            .find(|(pattern, _)| host.contains(pattern))
            .map(|(_, rule)| rule.as_ref())
            .unwrap_or(&self.fallback)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_routes_known_hosts() {
        let registry = Registry::new();
        assert_eq!(registry.rule_for("us.trabajo.org").name(), "Trabajo");
        assert_eq!(registry.rule_for("ke.trabajo.org").name(), "Trabajo");
        assert_eq!(registry.rule_for("remoteok.com").name(), "RemoteOK");
        assert_eq!(registry.rule_for("weworkremotely.com").name(), "WeWorkRemotely");
        assert_eq!(registry.rule_for("www.unjobnet.org").name(), "UNjobnet");
    }

    #[test]
    fn test_registry_falls_back_to_generic() {
        let registry = Registry::new();
        assert_eq!(registry.rule_for("www.indeed.com").name(), "generic");
        assert_eq!(registry.rule_for("").name(), "generic");
    }

    #[test]
    fn test_empty_markup_yields_nothing_for_every_rule() {
        let url = Url::parse("https://us.trabajo.org/jobs?q=graphic+designer").unwrap();
        let keywords = vec!["graphic".to_string()];
        let rules: [&dyn ExtractorRule; 5] = [
            &TrabajoRule,
            &RemoteOkRule,
            &WeWorkRemotelyRule,
            &UnjobnetRule,
            &GenericRule,
        ];
        for rule in rules {
            for html in ["", "   \n"] {
                let out = rule.extract(&Page::new(&url, html), &keywords);
                assert_eq!(out, Extraction::default(), "rule {}", rule.name());
            }
        }
    }

    #[test]
    fn test_relative_link_resolution() {
        let url = Url::parse("https://site.com/search").unwrap();
        let html = r#"<a href="/jobs/123">x</a>"#;
        let document = Html::parse_document(html);
        let a = document.select(&selector("a")).next().unwrap();
        let resolved = Page::new(&url, html).resolve(&a).unwrap();
        assert_eq!(resolved.as_str(), "https://site.com/jobs/123");
    }

    #[test]
    fn test_leads_link_to_configured_source_string() {
        let raw = "https://opportunitiesforyoungkenyans.co.ke";
        let url = Url::parse(raw).unwrap();
        let html = "<p>Send CVs to jobs@oyk.co.ke</p>";
        let page = Page::new(&url, html).listed_as(raw);
        let leads = page.leads(&Html::parse_document(html), "opportunitiesforyoungkenyans.co.ke");
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].link, "https://opportunitiesforyoungkenyans.co.ke");

        // Without a configured string the normalized URL is used.
        let leads = Page::new(&url, html).leads(&Html::parse_document(html), "x");
        assert_eq!(leads[0].link, "https://opportunitiesforyoungkenyans.co.ke/");
    }

    #[test]
    fn test_page_text_skips_scripts() {
        let html = r#"<html><head><style>p { color: red }</style></head>
            <body><p>Write to <b>hr@studio.com</b></p>
            <script>var x = "bot@tracker.io";</script></body></html>"#;
        let text = page_text(&Html::parse_document(html));
        assert!(text.contains("hr@studio.com"));
        assert!(!text.contains("tracker.io"));
        assert!(!text.contains("color"));
    }
}
