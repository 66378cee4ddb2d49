use bootwire_core::{html, Attributes, Attrs, Element, Node};

use crate::display::Card;
use crate::forms::Button;
use crate::layout::{row, Col};
use crate::patterns::column_span;
use crate::variant::{Size, Variant};

/// One pricing card: name, price, feature list and a call to action.
#[derive(Debug, Clone)]
pub struct PricingTier {
    name: String,
    price: String,
    period: String,
    features: Vec<String>,
    button_text: String,
    button_href: String,
    highlighted: bool,
    attrs: Attrs,
}

impl PricingTier {
    pub fn new(name: impl Into<String>, price: impl ToString) -> Self {
        Self {
            name: name.into(),
            price: price.to_string(),
            period: "month".to_string(),
            features: Vec::new(),
            button_text: "Get Started".to_string(),
            button_href: "#".to_string(),
            highlighted: false,
            attrs: Attrs::new(),
        }
    }

    pub fn period(mut self, period: impl Into<String>) -> Self {
        self.period = period.into();
        self
    }

    pub fn feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    pub fn features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features.extend(features.into_iter().map(Into::into));
        self
    }

    pub fn button(mut self, text: impl Into<String>, href: impl Into<String>) -> Self {
        self.button_text = text.into();
        self.button_href = href.into();
        self
    }

    /// Primary border, large shadow and a solid button.
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    pub fn render(self) -> Element {
        let price = html::div()
            .class("mb-4")
            .child(html::span().class("fs-4").child("$"))
            .child(html::span().class("display-4 fw-bold").child(self.price))
            .child(html::span().class("text-muted").child(format!("/{}", self.period)));

        let features = html::ul()
            .class("list-unstyled")
            .children_from(self.features.into_iter().map(|f| html::li().child(f)));

        let cta = Button::new(self.button_text)
            .variant(Variant::Primary)
            .outline(!self.highlighted)
            .size(Size::Lg)
            .href(self.button_href)
            .class("w-100");

        let mut card = Card::new().class("h-100 text-center");
        if self.highlighted {
            card = card.class("border-primary").shadow("lg");
        }

        card.attrs(self.attrs)
            .child(html::h3().class("card-title").child(self.name))
            .child(price)
            .child(features)
            .child(cta)
            .render()
    }
}

impl Attributes for PricingTier {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<PricingTier> for Node {
    fn from(tier: PricingTier) -> Self {
        tier.render().into()
    }
}

/// Section of pricing tiers sharing one row.
#[derive(Debug, Clone)]
pub struct PricingGroup {
    tiers: Vec<Node>,
    title: String,
    subtitle: Option<String>,
    attrs: Attrs,
}

impl Default for PricingGroup {
    fn default() -> Self {
        Self {
            tiers: Vec::new(),
            title: "Choose Your Plan".to_string(),
            subtitle: None,
            attrs: Attrs::new(),
        }
    }
}

impl PricingGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tier(mut self, tier: impl Into<Node>) -> Self {
        self.tiers.push(tier.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn render(self) -> Element {
        let span = column_span(self.tiers.len());
        let header = html::div()
            .child(html::h2().class("text-center mb-2").child(self.title))
            .child_opt(
                self.subtitle
                    .map(|s| html::p().class("text-center text-muted mb-5").child(s)),
            );

        html::div()
            .class("pricing-group py-5")
            .attrs(self.attrs)
            .child(header)
            .child(row().children_from(
                self.tiers
                    .into_iter()
                    .map(|tier| Col::new().md(span).class("mb-4").child(tier)),
            ))
    }
}

impl Attributes for PricingGroup {
    fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }
}

impl From<PricingGroup> for Node {
    fn from(group: PricingGroup) -> Self {
        group.render().into()
    }
}
