//! Progressive Web App support: head metadata, web manifest, service worker
//! script and offline page.

mod manifest;
mod meta;
mod offline;
mod service_worker;

pub use manifest::{Manifest, ManifestIcon};
pub use meta::PwaMeta;
pub use offline::offline_page;
pub use service_worker::{register_script, ServiceWorker, DEFAULT_PRECACHE_URLS};
