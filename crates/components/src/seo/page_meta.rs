use std::collections::HashMap;

use bootwire_core::{Attributes, Element, Fragment, Render};

use crate::pwa::PwaMeta;
use crate::seo::meta::{link, meta_name, OgType, Seo};

/// Link relations deduplicated by `(rel, href)`.
const KEYED_LINK_RELS: &[&str] = &[
    "canonical",
    "manifest",
    "icon",
    "shortcut icon",
    "apple-touch-icon",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum HeadKey {
    Title,
    MetaName(String),
    MetaProperty(String),
    Link { rel: String, href: String },
    Other(String),
}

fn head_key(element: &Element) -> HeadKey {
    match element.tag() {
        "title" => HeadKey::Title,
        "meta" => {
            if let Some(name) = element.get_attr("name") {
                HeadKey::MetaName(name.to_lowercase())
            } else if let Some(property) = element.get_attr("property") {
                HeadKey::MetaProperty(property.to_lowercase())
            } else {
                HeadKey::Other(element.to_html())
            }
        }
        "link" => {
            let rel = element.get_attr("rel").unwrap_or_default().to_lowercase();
            if KEYED_LINK_RELS.contains(&rel.as_str()) {
                HeadKey::Link {
                    rel,
                    href: element.get_attr("href").unwrap_or_default().to_string(),
                }
            } else {
                HeadKey::Other(element.to_html())
            }
        }
        _ => HeadKey::Other(element.to_html()),
    }
}

/// Deduplicates head elements. The last element for a key wins but keeps
/// the position of the first one.
pub fn dedupe_head(elements: Vec<Element>) -> Vec<Element> {
    let mut positions: HashMap<HeadKey, usize> = HashMap::new();
    let mut out: Vec<Element> = Vec::with_capacity(elements.len());

    for element in elements {
        let key = head_key(&element);
        match positions.get(&key) {
            Some(&index) => out[index] = element,
            None => {
                positions.insert(key, out.len());
                out.push(element);
            }
        }
    }
    out
}

fn is_empty_canonical(element: &Element) -> bool {
    element.tag() == "link"
        && element
            .get_attr("rel")
            .is_some_and(|rel| rel.eq_ignore_ascii_case("canonical"))
        && element.get_attr("href").unwrap_or_default().is_empty()
}

fn icon_type(url: &str) -> Option<&'static str> {
    let path = url.split(['?', '#']).next().unwrap_or(url).to_lowercase();
    if path.ends_with(".svg") {
        Some("image/svg+xml")
    } else if path.ends_with(".png") {
        Some("image/png")
    } else if path.ends_with(".ico") {
        Some("image/x-icon")
    } else {
        None
    }
}

/// Favicon links for a single icon file.
pub fn favicon_links(url: &str) -> Vec<Element> {
    vec![
        link("icon", url).attr_opt("type", icon_type(url)),
        link("shortcut icon", url),
        link("apple-touch-icon", url),
    ]
}

/// Composes a page head from a title, [`Seo`] tags, optional PWA metadata,
/// favicon links and extra metas, with duplicates removed.
#[derive(Debug, Clone, Default)]
pub struct PageMeta {
    seo: Seo,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    canonical: Option<String>,
    include_pwa: bool,
    pwa_name: Option<String>,
    pwa_short_name: Option<String>,
    pwa_theme_color: Option<String>,
    favicon_url: Option<String>,
    extra_meta: Vec<(String, String)>,
}

impl PageMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.seo = self.seo.title(title.as_str());
        self.title = Some(title);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.seo = self.seo.description(description.as_str());
        self.description = Some(description);
        self
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seo = self.seo.keywords(keywords);
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.seo = self.seo.image(image);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.seo = self.seo.url(url.as_str());
        self.url = Some(url);
        self
    }

    pub fn canonical(mut self, canonical: impl Into<String>) -> Self {
        let canonical = canonical.into();
        self.seo = self.seo.canonical(canonical.as_str());
        self.canonical = Some(canonical);
        self
    }

    pub fn og_type(mut self, og_type: OgType) -> Self {
        self.seo = self.seo.og_type(og_type);
        self
    }

    pub fn robots(mut self, robots: Option<&str>) -> Self {
        self.seo = self.seo.robots(robots);
        self
    }

    pub fn twitter_site(mut self, handle: impl Into<String>) -> Self {
        self.seo = self.seo.twitter_site(handle);
        self
    }

    pub fn twitter_creator(mut self, handle: impl Into<String>) -> Self {
        self.seo = self.seo.twitter_creator(handle);
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.seo = self.seo.locale(locale);
        self
    }

    /// Adds PWA metadata. The app name falls back to the page title.
    pub fn include_pwa(mut self, include: bool) -> Self {
        self.include_pwa = include;
        self
    }

    pub fn pwa_name(mut self, name: impl Into<String>) -> Self {
        self.pwa_name = Some(name.into());
        self
    }

    pub fn pwa_short_name(mut self, name: impl Into<String>) -> Self {
        self.pwa_short_name = Some(name.into());
        self
    }

    pub fn pwa_theme_color(mut self, color: impl Into<String>) -> Self {
        self.pwa_theme_color = Some(color.into());
        self
    }

    pub fn favicon(mut self, url: impl Into<String>) -> Self {
        self.favicon_url = Some(url.into());
        self
    }

    /// Extra `<meta name>`; underscores in the name become hyphens.
    pub fn meta(mut self, name: &str, content: impl Into<String>) -> Self {
        self.extra_meta.push((name.replace('_', "-"), content.into()));
        self
    }

    pub fn elements(self) -> Vec<Element> {
        let mut elements: Vec<Element> = Vec::new();

        if let Some(title) = &self.title {
            elements.push(bootwire_core::html::title().child(title.as_str()));
        }
        elements.extend(self.seo.elements());

        if self.include_pwa {
            let name = self
                .pwa_name
                .clone()
                .or_else(|| self.title.clone())
                .unwrap_or_else(|| "Bootwire App".to_string());
            let short_name = self
                .pwa_short_name
                .or(self.pwa_name)
                .unwrap_or_else(|| "Bootwire".to_string());
            let mut pwa = PwaMeta::new(name).short_name(short_name);
            if let Some(description) = &self.description {
                pwa = pwa.description(description.as_str());
            }
            if let Some(color) = self.pwa_theme_color {
                pwa = pwa.theme_color(color);
            }
            elements.extend(pwa.elements());
        }

        if let Some(favicon) = &self.favicon_url {
            elements.extend(favicon_links(favicon));
        }

        for (name, content) in self.extra_meta {
            elements.push(meta_name(&name, content));
        }

        let canonical = self.canonical.or(self.url).unwrap_or_default();
        elements.push(link("canonical", canonical));

        elements.retain(|element| !is_empty_canonical(element));
        dedupe_head(elements)
    }

    pub fn render(self) -> Fragment {
        self.elements().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootwire_core::html;

    fn canonical_hrefs(elements: &[Element]) -> Vec<&str> {
        elements
            .iter()
            .filter(|e| e.get_attr("rel") == Some("canonical"))
            .filter_map(|e| e.get_attr("href"))
            .collect()
    }

    #[test]
    fn test_single_title() {
        let elements = PageMeta::new().title("Docs").elements();

        let titles: Vec<_> = elements.iter().filter(|e| e.tag() == "title").collect();
        assert_eq!(titles.len(), 1);
        assert_eq!(elements[0].text_content(), "Docs");
    }

    #[test]
    fn test_url_then_canonical_keeps_one_link() {
        let elements = PageMeta::new()
            .url("https://example.com/a")
            .canonical("https://example.com/b")
            .elements();

        assert_eq!(canonical_hrefs(&elements), ["https://example.com/b"]);
    }

    #[test]
    fn test_empty_canonical_dropped() {
        let elements = PageMeta::new().title("No URL").elements();
        assert!(canonical_hrefs(&elements).is_empty());
    }

    #[test]
    fn test_pwa_description_replaces_seo_description() {
        let elements = PageMeta::new()
            .title("App")
            .description("An app")
            .include_pwa(true)
            .favicon("/static/favicon.svg")
            .elements();

        let descriptions = elements
            .iter()
            .filter(|e| e.get_attr("name") == Some("description"))
            .count();
        assert_eq!(descriptions, 1);
        assert!(elements.iter().any(|e| e.get_attr("rel") == Some("manifest")));
        assert!(elements
            .iter()
            .any(|e| e.get_attr("rel") == Some("icon") && e.get_attr("type") == Some("image/svg+xml")));
    }

    #[test]
    fn test_extra_meta_overrides_in_place() {
        let elements = PageMeta::new()
            .robots(Some("index, follow"))
            .meta("robots", "noindex")
            .elements();

        let robots: Vec<_> = elements
            .iter()
            .filter(|e| e.get_attr("name") == Some("robots"))
            .collect();
        assert_eq!(robots.len(), 1);
        assert_eq!(robots[0].get_attr("content"), Some("noindex"));
        assert_eq!(elements[0].get_attr("name"), Some("robots"));
    }

    #[test]
    fn test_dedupe_last_wins_first_position() {
        let first = html::meta().attr("name", "Theme-Color").attr("content", "#fff");
        let other = html::meta().attr("property", "og:title").attr("content", "x");
        let last = html::meta().attr("name", "theme-color").attr("content", "#000");

        let out = dedupe_head(vec![first, other, last.clone()]);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0], last);
    }

    #[test]
    fn test_unkeyed_links_dedupe_on_full_markup() {
        let a = html::link().attr("rel", "preconnect").attr("href", "https://cdn.test");
        let b = html::link().attr("rel", "preconnect").attr("href", "https://fonts.test");

        let out = dedupe_head(vec![a.clone(), b, a]);
        assert_eq!(out.len(), 2);
    }
}
