//! Structured data and per-route document metadata.
//!
//! The app is client-rendered, so JSON-LD scripts and the canonical/meta
//! tags are written into `<head>` on page mount. Injection is keyed so a
//! route remount replaces its documents instead of stacking duplicates.

use serde_json::{json, Value};
use web_sys::Document;

use crate::config;

#[derive(Clone, Copy, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub fn software_app_schema() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": "Zcomments — Comments on Zillow Listings",
        "description": "Zcomments adds a comment section to every Zillow listing. Discuss home prices, neighborhoods, and what people really think about properties.",
        "applicationCategory": "BrowserApplication",
        "operatingSystem": "Chrome, Safari, macOS, Windows",
        "offers": { "@type": "Offer", "price": "0", "priceCurrency": "USD" },
        "url": config::SITE_URL,
        "downloadUrl": [config::CHROME_STORE_URL, config::APP_STORE_URL],
        "browserRequirements": "Requires Chrome 116+ or Safari 17+",
        "softwareVersion": "4.3",
        "author": {
            "@type": "Organization",
            "name": "Zcomments",
            "url": config::SITE_URL,
        },
    })
}

pub fn organization_schema() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": "Zcomments",
        "url": config::SITE_URL,
        "logo": format!("{}/static/icon-512.png", config::SITE_URL),
        "sameAs": [config::CHROME_STORE_URL, config::APP_STORE_URL],
    })
}

pub fn faq_schema(entries: &[FaqEntry]) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": entries
            .iter()
            .map(|entry| {
                json!({
                    "@type": "Question",
                    "name": entry.question,
                    "acceptedAnswer": { "@type": "Answer", "text": entry.answer },
                })
            })
            .collect::<Vec<_>>(),
    })
}

/// Upsert a `<script type="application/ld+json">` keyed by `key`.
pub fn inject_json_ld(document: &Document, key: &str, schema: &Value) {
    let selector = format!("script[data-ld=\"{key}\"]");
    if let Ok(Some(existing)) = document.query_selector(&selector) {
        existing.set_text_content(Some(&schema.to_string()));
        return;
    }
    let head = match document.head() {
        Some(head) => head,
        None => return,
    };
    if let Ok(script) = document.create_element("script") {
        let _ = script.set_attribute("type", "application/ld+json");
        let _ = script.set_attribute("data-ld", key);
        script.set_text_content(Some(&schema.to_string()));
        let _ = head.append_child(&script);
    }
}

/// Set the document title plus the description and canonical tags for the
/// current route.
pub fn set_page_meta(document: &Document, title: &str, description: &str, canonical: &str) {
    document.set_title(title);

    if let Ok(Some(meta)) = document.query_selector("meta[name=\"description\"]") {
        let _ = meta.set_attribute("content", description);
    } else if let (Some(head), Ok(meta)) = (document.head(), document.create_element("meta")) {
        let _ = meta.set_attribute("name", "description");
        let _ = meta.set_attribute("content", description);
        let _ = head.append_child(&meta);
    }

    if let Ok(Some(link)) = document.query_selector("link[rel=\"canonical\"]") {
        let _ = link.set_attribute("href", canonical);
    } else if let (Some(head), Ok(link)) = (document.head(), document.create_element("link")) {
        let _ = link.set_attribute("rel", "canonical");
        let _ = link.set_attribute("href", canonical);
        let _ = head.append_child(&link);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn software_app_schema_shape() {
        let schema = software_app_schema();
        assert_eq!(schema["@type"], "SoftwareApplication");
        assert_eq!(schema["offers"]["price"], "0");
        assert_eq!(schema["downloadUrl"].as_array().map(Vec::len), Some(2));
        assert_eq!(schema["url"], config::SITE_URL);
    }

    #[test]
    fn organization_schema_shape() {
        let schema = organization_schema();
        assert_eq!(schema["@type"], "Organization");
        assert!(schema["logo"].as_str().is_some_and(|l| l.ends_with("icon-512.png")));
    }

    #[test]
    fn faq_schema_wraps_every_entry() {
        let entries = [
            FaqEntry { question: "What is it?", answer: "An extension." },
            FaqEntry { question: "Is it free?", answer: "Yes." },
        ];
        let schema = faq_schema(&entries);
        assert_eq!(schema["@type"], "FAQPage");
        let main = schema["mainEntity"].as_array().expect("mainEntity array");
        assert_eq!(main.len(), 2);
        assert_eq!(main[0]["@type"], "Question");
        assert_eq!(main[1]["acceptedAnswer"]["text"], "Yes.");
    }
}
