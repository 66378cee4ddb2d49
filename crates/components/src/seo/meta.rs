use bootwire_core::{html, Attributes, Element, Fragment};

/// Open Graph object type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OgType {
    #[default]
    Website,
    Article,
    Product,
}

impl OgType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OgType::Website => "website",
            OgType::Article => "article",
            OgType::Product => "product",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TwitterCard {
    Summary,
    #[default]
    SummaryLargeImage,
    App,
    Player,
}

impl TwitterCard {
    pub fn as_str(&self) -> &'static str {
        match self {
            TwitterCard::Summary => "summary",
            TwitterCard::SummaryLargeImage => "summary_large_image",
            TwitterCard::App => "app",
            TwitterCard::Player => "player",
        }
    }
}

/// `<meta name=... content=...>`.
pub fn meta_name(name: &str, content: impl Into<String>) -> Element {
    html::meta().attr("name", name).attr("content", content.into())
}

/// `<meta property=... content=...>`.
pub fn meta_property(property: &str, content: impl Into<String>) -> Element {
    html::meta()
        .attr("property", property)
        .attr("content", content.into())
}

pub(crate) fn link(rel: &str, href: impl Into<String>) -> Element {
    html::link().attr("rel", rel).attr("href", href.into())
}

/// Search and social metadata: basic metas, canonical link, Open Graph and
/// Twitter Card tags.
///
/// The canonical link uses `canonical` when set, otherwise `url`. Setting
/// `article` forces the Open Graph type to `article` and enables the
/// `article:*` tags.
#[derive(Debug, Clone)]
pub struct Seo {
    title: Option<String>,
    description: Option<String>,
    keywords: Vec<String>,
    image: Option<String>,
    url: Option<String>,
    og_type: OgType,
    article: bool,
    published_time: Option<String>,
    modified_time: Option<String>,
    author: Option<String>,
    section: Option<String>,
    tags: Vec<String>,
    twitter_card: TwitterCard,
    twitter_site: Option<String>,
    twitter_creator: Option<String>,
    robots: Option<String>,
    canonical: Option<String>,
    locale: Option<String>,
    alternate_locales: Vec<String>,
    extra: Vec<(String, String)>,
}

impl Default for Seo {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            keywords: Vec::new(),
            image: None,
            url: None,
            og_type: OgType::Website,
            article: false,
            published_time: None,
            modified_time: None,
            author: None,
            section: None,
            tags: Vec::new(),
            twitter_card: TwitterCard::SummaryLargeImage,
            twitter_site: None,
            twitter_creator: None,
            robots: Some("index, follow".to_string()),
            canonical: None,
            locale: None,
            alternate_locales: Vec::new(),
            extra: Vec::new(),
        }
    }
}

macro_rules! opt_setters {
    ($($field:ident),* $(,)?) => {
        $(
            pub fn $field(mut self, value: impl Into<String>) -> Self {
                self.$field = Some(value.into());
                self
            }
        )*
    };
}

impl Seo {
    pub fn new() -> Self {
        Self::default()
    }

    opt_setters!(
        title,
        description,
        image,
        url,
        published_time,
        modified_time,
        author,
        section,
        twitter_site,
        twitter_creator,
        canonical,
        locale,
    );

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn alternate_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternate_locales = locales.into_iter().map(Into::into).collect();
        self
    }

    pub fn og_type(mut self, og_type: OgType) -> Self {
        self.og_type = og_type;
        self
    }

    pub fn article(mut self, article: bool) -> Self {
        self.article = article;
        self
    }

    pub fn twitter_card(mut self, card: TwitterCard) -> Self {
        self.twitter_card = card;
        self
    }

    /// `None` omits the robots meta.
    pub fn robots(mut self, robots: Option<&str>) -> Self {
        self.robots = robots.map(str::to_string);
        self
    }

    /// Extra `<meta name>`; underscores in the name become hyphens.
    pub fn meta(mut self, name: &str, content: impl Into<String>) -> Self {
        self.extra.push((name.replace('_', "-"), content.into()));
        self
    }

    pub fn elements(self) -> Vec<Element> {
        let mut out = Vec::new();

        if let Some(title) = &self.title {
            out.push(html::title().child(title.as_str()));
            out.push(meta_name("title", title));
        }
        if let Some(description) = &self.description {
            out.push(meta_name("description", description));
        }
        if !self.keywords.is_empty() {
            out.push(meta_name("keywords", self.keywords.join(", ")));
        }
        if let Some(robots) = &self.robots {
            out.push(meta_name("robots", robots));
        }
        if let Some(canonical) = self.canonical.as_ref().or(self.url.as_ref()) {
            out.push(link("canonical", canonical));
        }

        if let Some(title) = &self.title {
            out.push(meta_property("og:title", title));
        }
        if let Some(description) = &self.description {
            out.push(meta_property("og:description", description));
        }
        if let Some(image) = &self.image {
            out.push(meta_property("og:image", image));
        }
        if let Some(url) = &self.url {
            out.push(meta_property("og:url", url));
        }
        let og_type = if self.article {
            OgType::Article
        } else {
            self.og_type
        };
        out.push(meta_property("og:type", og_type.as_str()));
        if let Some(locale) = &self.locale {
            out.push(meta_property("og:locale", locale));
        }
        for locale in &self.alternate_locales {
            out.push(meta_property("og:locale:alternate", locale));
        }

        if og_type == OgType::Article {
            let article_tags = [
                ("article:published_time", &self.published_time),
                ("article:modified_time", &self.modified_time),
                ("article:author", &self.author),
                ("article:section", &self.section),
            ];
            for (property, value) in article_tags {
                if let Some(value) = value {
                    out.push(meta_property(property, value));
                }
            }
            for tag in &self.tags {
                out.push(meta_property("article:tag", tag));
            }
        }

        out.push(meta_name("twitter:card", self.twitter_card.as_str()));
        let twitter_tags = [
            ("twitter:title", &self.title),
            ("twitter:description", &self.description),
            ("twitter:image", &self.image),
            ("twitter:site", &self.twitter_site),
            ("twitter:creator", &self.twitter_creator),
        ];
        for (name, value) in twitter_tags {
            if let Some(value) = value {
                out.push(meta_name(name, value));
            }
        }

        for (name, content) in self.extra {
            out.push(meta_name(&name, content));
        }

        out
    }

    pub fn render(self) -> Fragment {
        self.elements().into_iter().collect()
    }
}
