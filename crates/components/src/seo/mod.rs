mod meta;
mod page_meta;
mod structured_data;

pub use meta::{meta_name, meta_property, OgType, Seo, TwitterCard};
pub use page_meta::{dedupe_head, favicon_links, PageMeta};
pub use structured_data::{
    Article, JsonLd, LocalBusiness, Organization, PostalAddress, Product, StructuredData,
};
