//! Landing-page building blocks. All of these are beta.

mod feature;
mod footer;
mod navbar;
mod pricing;
mod testimonial;

pub use feature::{Feature, FeatureGrid};
pub use footer::{FooterColumn, FooterModern};
pub use navbar::NavbarModern;
pub use pricing::{PricingGroup, PricingTier};
pub use testimonial::{Testimonial, TestimonialSection};

/// Column span for `columns` equal-width columns.
pub(crate) fn column_span(columns: usize) -> u8 {
    match columns {
        0 => 12,
        n => u8::try_from(12 / n.min(12)).unwrap_or(12).max(1),
    }
}
