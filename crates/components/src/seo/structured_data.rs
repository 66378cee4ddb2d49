//! Schema.org structured data rendered as JSON-LD.

use bootwire_core::{html, Attributes, Element, Node};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::Result;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// A JSON-LD document ready to be placed in the page head.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonLd {
    data: Map<String, Value>,
}

impl JsonLd {
    fn build<T: Serialize>(kind: &str, body: &T) -> Result<Self> {
        let mut data = Map::new();
        data.insert("@context".into(), Value::from(SCHEMA_CONTEXT));
        data.insert("@type".into(), Value::from(kind));
        if let Value::Object(fields) = serde_json::to_value(body)? {
            data.extend(fields);
        }
        Ok(Self { data })
    }

    /// Adds or replaces a top-level property.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.data)?)
    }

    /// `<script type="application/ld+json">` with the document inside.
    ///
    /// `</` is written as `<\/` so string values cannot close the script.
    pub fn render(&self) -> Result<Element> {
        let json = self.to_json()?.replace("</", "<\\/");
        Ok(html::script()
            .attr("type", "application/ld+json")
            .child(Node::raw(json)))
    }
}

fn person<S: Serializer>(name: &str, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    #[derive(Serialize)]
    struct Person<'a> {
        #[serde(rename = "@type")]
        kind: &'static str,
        name: &'a str,
    }

    Person {
        kind: "Person",
        name,
    }
    .serialize(serializer)
}

fn schema_url<S: Serializer>(value: &str, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{SCHEMA_CONTEXT}/{value}"))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Article {
    pub headline: String,
    pub description: String,
    pub image: String,
    #[serde(serialize_with = "person")]
    pub author: String,
    #[serde(rename = "datePublished")]
    pub published: String,
    #[serde(rename = "dateModified", skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: String,
    pub currency: String,
    /// Schema.org availability name, e.g. `InStock`.
    pub availability: String,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            image: String::new(),
            price: String::new(),
            currency: "USD".to_string(),
            availability: "InStock".to_string(),
            rating: None,
            review_count: None,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductLd<'a> {
    name: &'a str,
    description: &'a str,
    image: &'a str,
    offers: OfferLd<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    aggregate_rating: Option<RatingLd>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OfferLd<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    price: &'a str,
    price_currency: &'a str,
    #[serde(serialize_with = "schema_url")]
    availability: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RatingLd {
    #[serde(rename = "@type")]
    kind: &'static str,
    rating_value: f64,
    review_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Organization {
    pub name: String,
    pub url: String,
    pub logo: String,
    #[serde(rename = "sameAs", skip_serializing_if = "Vec::is_empty")]
    pub social_links: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostalAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalBusiness {
    pub name: String,
    pub address: PostalAddress,
    pub phone: String,
    /// `(days, "09:00-17:00")` pairs.
    pub hours: Vec<(String, String)>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LocalBusinessLd<'a> {
    name: &'a str,
    address: AddressLd<'a>,
    telephone: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    opening_hours_specification: Vec<OpeningHoursLd<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddressLd<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    street_address: &'a str,
    address_locality: &'a str,
    address_region: &'a str,
    postal_code: &'a str,
    address_country: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OpeningHoursLd<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    day_of_week: &'a str,
    opens: &'a str,
    closes: &'a str,
}

#[derive(Serialize)]
struct ListItemLd<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    position: usize,
    name: &'a str,
    item: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BreadcrumbLd<'a> {
    item_list_element: Vec<ListItemLd<'a>>,
}

/// Builders for the supported Schema.org types.
pub struct StructuredData;

impl StructuredData {
    pub fn article(article: &Article) -> Result<JsonLd> {
        JsonLd::build("Article", article)
    }

    /// `aggregateRating` is only emitted when both rating and review count
    /// are present.
    pub fn product(product: &Product) -> Result<JsonLd> {
        let aggregate_rating = match (product.rating, product.review_count) {
            (Some(rating_value), Some(review_count)) => Some(RatingLd {
                kind: "AggregateRating",
                rating_value,
                review_count,
            }),
            _ => None,
        };

        JsonLd::build(
            "Product",
            &ProductLd {
                name: &product.name,
                description: &product.description,
                image: &product.image,
                offers: OfferLd {
                    kind: "Offer",
                    price: &product.price,
                    price_currency: &product.currency,
                    availability: &product.availability,
                },
                aggregate_rating,
            },
        )
    }

    /// Breadcrumb trail from `(name, url)` pairs, positions starting at 1.
    pub fn breadcrumb<'a, I>(items: I) -> Result<JsonLd>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let item_list_element = items
            .into_iter()
            .enumerate()
            .map(|(index, (name, item))| ListItemLd {
                kind: "ListItem",
                position: index + 1,
                name,
                item,
            })
            .collect();

        JsonLd::build("BreadcrumbList", &BreadcrumbLd { item_list_element })
    }

    pub fn organization(organization: &Organization) -> Result<JsonLd> {
        JsonLd::build("Organization", organization)
    }

    pub fn local_business(business: &LocalBusiness) -> Result<JsonLd> {
        let address = &business.address;
        let opening_hours_specification = business
            .hours
            .iter()
            .map(|(days, range)| {
                let (opens, closes) = range
                    .split_once('-')
                    .unwrap_or((range.as_str(), range.as_str()));
                OpeningHoursLd {
                    kind: "OpeningHoursSpecification",
                    day_of_week: days,
                    opens,
                    closes,
                }
            })
            .collect();

        JsonLd::build(
            "LocalBusiness",
            &LocalBusinessLd {
                name: &business.name,
                address: AddressLd {
                    kind: "PostalAddress",
                    street_address: &address.street,
                    address_locality: &address.city,
                    address_region: &address.state,
                    postal_code: &address.zip,
                    address_country: &address.country,
                },
                telephone: &business.phone,
                opening_hours_specification,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootwire_core::Render;
    use serde_json::json;

    #[test]
    fn test_article() {
        let ld = StructuredData::article(&Article {
            headline: "Hello".into(),
            description: "First post".into(),
            image: "/img.png".into(),
            author: "Ada".into(),
            published: "2026-01-01".into(),
            modified: None,
        })
        .unwrap();

        assert_eq!(
            Value::Object(ld.data().clone()),
            json!({
                "@context": "https://schema.org",
                "@type": "Article",
                "headline": "Hello",
                "description": "First post",
                "image": "/img.png",
                "author": { "@type": "Person", "name": "Ada" },
                "datePublished": "2026-01-01"
            })
        );
        assert_eq!(ld.data().keys().next().map(String::as_str), Some("@context"));
    }

    #[test]
    fn test_product_rating_needs_both_fields() {
        let mut product = Product {
            name: "Widget".into(),
            price: "9.99".into(),
            rating: Some(4.5),
            ..Product::default()
        };

        let ld = StructuredData::product(&product).unwrap();
        assert!(ld.data().get("aggregateRating").is_none());
        assert_eq!(
            ld.data()["offers"],
            json!({
                "@type": "Offer",
                "price": "9.99",
                "priceCurrency": "USD",
                "availability": "https://schema.org/InStock"
            })
        );

        product.review_count = Some(12);
        let ld = StructuredData::product(&product).unwrap();
        assert_eq!(
            ld.data()["aggregateRating"],
            json!({ "@type": "AggregateRating", "ratingValue": 4.5, "reviewCount": 12 })
        );
    }

    #[test]
    fn test_breadcrumb_positions() {
        let ld = StructuredData::breadcrumb([("Home", "/"), ("Docs", "/docs")]).unwrap();

        assert_eq!(ld.data()["itemListElement"][0]["position"], json!(1));
        assert_eq!(ld.data()["itemListElement"][1]["position"], json!(2));
        assert_eq!(ld.data()["itemListElement"][1]["name"], json!("Docs"));
    }

    #[test]
    fn test_organization_and_extras() {
        let ld = StructuredData::organization(&Organization {
            name: "Acme".into(),
            url: "https://acme.test".into(),
            logo: "https://acme.test/logo.png".into(),
            social_links: vec![],
        })
        .unwrap()
        .with("foundingDate", "1999")
        .with("name", "Acme Inc.");

        assert!(ld.data().get("sameAs").is_none());
        assert_eq!(ld.data()["foundingDate"], json!("1999"));
        assert_eq!(ld.data()["name"], json!("Acme Inc."));
    }

    #[test]
    fn test_local_business_hours() {
        let ld = StructuredData::local_business(&LocalBusiness {
            name: "Cafe".into(),
            address: PostalAddress {
                city: "Montevideo".into(),
                ..PostalAddress::default()
            },
            phone: "+598 000".into(),
            hours: vec![("Mo-Fr".into(), "08:00-18:00".into())],
        })
        .unwrap();

        assert_eq!(ld.data()["address"]["@type"], json!("PostalAddress"));
        assert_eq!(ld.data()["address"]["addressLocality"], json!("Montevideo"));
        assert_eq!(
            ld.data()["openingHoursSpecification"][0],
            json!({
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": "Mo-Fr",
                "opens": "08:00",
                "closes": "18:00"
            })
        );
    }

    #[test]
    fn test_script_cannot_be_closed_early() {
        let html = StructuredData::breadcrumb([("</script><script>alert(1)", "/")])
            .unwrap()
            .render()
            .unwrap()
            .to_html();

        assert!(html.starts_with(r#"<script type="application/ld+json">{"#));
        assert!(html.contains(r"<\/script>"));
        assert_eq!(html.matches("</script>").count(), 1);
    }
}
