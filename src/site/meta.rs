//! src/site/meta.rs
//!
//! Document-head synchronization: a pure mapping from the configured strings
//! to the fixed tag set, plus the string-level adapter that applies it to a
//! document. The adapter never fails: an existing element is updated in
//! place, a missing one is created.
use crate::configuration::MetaSettings;

/// Open Graph tags are addressed by `property`, everything else by `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Name,
    Property,
}

impl Attribute {
    fn as_str(self) -> &'static str {
        match self {
            Attribute::Name => "name",
            Attribute::Property => "property",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub attribute: Attribute,
    pub key: &'static str,
    pub content: String,
}

/// The fixed tag set, in a fixed order, computed from configuration alone.
pub fn meta_tags(settings: &MetaSettings) -> Vec<MetaTag> {
    let name = |key, content: &str| MetaTag {
        attribute: Attribute::Name,
        key,
        content: content.to_owned(),
    };
    let property = |key, content: &str| MetaTag {
        attribute: Attribute::Property,
        key,
        content: content.to_owned(),
    };

    vec![
        name("description", &settings.description),
        name("keywords", &settings.keywords),
        property("og:title", &settings.title),
        property("og:description", &settings.description),
        property("og:image", &settings.og_image),
        property("og:url", &settings.url),
        property("og:type", "website"),
        name("twitter:card", "summary_large_image"),
        name("twitter:title", &settings.title),
        name("twitter:description", &settings.description),
        name("twitter:image", &settings.og_image),
        name("robots", "index, follow"),
        name("author", &settings.author),
        name("viewport", "width=device-width, initial-scale=1.0"),
    ]
}

/// Synchronizes the title and the whole tag set into `document`. Repeated
/// application converges on the same output.
pub fn apply(document: &str, settings: &MetaSettings) -> String {
    let mut document = set_title(document, &settings.title);
    for tag in meta_tags(settings) {
        document = upsert_meta(&document, &tag);
    }
    document
}

fn set_title(document: &str, title: &str) -> String {
    let encoded = htmlescape::encode_minimal(title);
    if let (Some(start), Some(end)) = (document.find("<title>"), document.find("</title>")) {
        if start < end {
            return format!("{}<title>{}{}", &document[..start], encoded, &document[end..]);
        }
    }
    insert_into_head(document, &format!("<title>{}</title>", encoded))
}

fn upsert_meta(document: &str, tag: &MetaTag) -> String {
    let needle = format!("<meta {}=\"{}\"", tag.attribute.as_str(), tag.key);
    match document.find(&needle) {
        Some(start) => {
            // Rewrite the whole opening element; its closing `>` bounds it.
            match document[start..].find('>') {
                Some(relative_end) => {
                    let end = start + relative_end + 1;
                    format!("{}{}{}", &document[..start], render_meta(tag), &document[end..])
                }
                None => document.to_owned(),
            }
        }
        None => insert_into_head(document, &render_meta(tag)),
    }
}

fn render_meta(tag: &MetaTag) -> String {
    format!(
        "<meta {}=\"{}\" content=\"{}\">",
        tag.attribute.as_str(),
        tag.key,
        htmlescape::encode_minimal(&tag.content)
    )
}

fn insert_into_head(document: &str, element: &str) -> String {
    match document.find("</head>") {
        Some(at) => format!("{}{}\n{}", &document[..at], element, &document[at..]),
        // No head to synchronize into; the document passes through untouched.
        None => document.to_owned(),
    }
}
