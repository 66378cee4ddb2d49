//! Static stability records for every public component.

use bootwire_core::{ComponentInfo, Stability};

use Stability::{Beta, Experimental, Stable};

const COMPONENTS: &[ComponentInfo] = &[
    ComponentInfo::new("Button", "forms", Stable, "0.1.0"),
    ComponentInfo::new("ToggleGroup", "forms", Stable, "0.3.0"),
    ComponentInfo::new("FormGroup", "forms", Stable, "0.1.0"),
    ComponentInfo::new("ThemeToggle", "forms", Beta, "0.4.0"),
    ComponentInfo::new("SearchableSelect", "forms", Beta, "0.4.0"),
    ComponentInfo::new("Toast", "feedback", Stable, "0.1.0"),
    ComponentInfo::new("ToastContainer", "feedback", Stable, "0.1.0"),
    ComponentInfo::new("SimpleToast", "feedback", Stable, "0.2.0"),
    ComponentInfo::new("Alert", "feedback", Stable, "0.1.0"),
    ComponentInfo::new("Modal", "feedback", Stable, "0.1.0"),
    ComponentInfo::new("ErrorPage", "feedback", Stable, "0.3.0"),
    ComponentInfo::new("ErrorDialog", "feedback", Beta, "0.3.0"),
    ComponentInfo::new("InstallPrompt", "feedback", Experimental, "0.5.0"),
    ComponentInfo::new("EmptyState", "display", Stable, "0.2.0"),
    ComponentInfo::new("Card", "display", Stable, "0.1.0"),
    ComponentInfo::new("Icon", "display", Stable, "0.1.0"),
    ComponentInfo::new("TextClamp", "display", Beta, "0.4.0"),
    ComponentInfo::new("Col", "layout", Stable, "0.1.0"),
    ComponentInfo::new("AuthLayout", "layout", Beta, "0.4.0"),
    ComponentInfo::new("Navbar", "navigation", Stable, "0.1.0"),
    ComponentInfo::new("Feature", "patterns", Beta, "0.4.0"),
    ComponentInfo::new("FeatureGrid", "patterns", Beta, "0.4.0"),
    ComponentInfo::new("FooterModern", "patterns", Beta, "0.4.0"),
    ComponentInfo::new("NavbarModern", "patterns", Beta, "0.4.0"),
    ComponentInfo::new("PricingTier", "patterns", Beta, "0.4.0"),
    ComponentInfo::new("PricingGroup", "patterns", Beta, "0.4.0"),
    ComponentInfo::new("Testimonial", "patterns", Beta, "0.4.0"),
    ComponentInfo::new("TestimonialSection", "patterns", Beta, "0.4.0"),
    ComponentInfo::new("SkipLink", "accessibility", Stable, "0.5.0"),
    ComponentInfo::new("VisuallyHidden", "accessibility", Stable, "0.5.0"),
    ComponentInfo::new("LiveRegion", "accessibility", Stable, "0.5.0"),
    ComponentInfo::new("FocusTrap", "accessibility", Beta, "0.5.0"),
    ComponentInfo::new("ActiveSearch", "presets", Stable, "0.3.0"),
    ComponentInfo::new("InfiniteScroll", "presets", Stable, "0.3.0"),
    ComponentInfo::new("AutoRefresh", "presets", Stable, "0.3.0"),
    ComponentInfo::new("LazyLoad", "presets", Stable, "0.3.0"),
    ComponentInfo::new("LoadingButton", "presets", Stable, "0.3.0"),
    ComponentInfo::new("Seo", "seo", Stable, "0.4.0"),
    ComponentInfo::new("PageMeta", "seo", Beta, "0.5.0"),
    ComponentInfo::new("StructuredData", "seo", Stable, "0.4.0"),
    ComponentInfo::new("PwaMeta", "pwa", Beta, "0.5.0"),
    ComponentInfo::new("ServiceWorker", "pwa", Beta, "0.5.0"),
];

/// All component records, grouped by module.
pub fn components() -> &'static [ComponentInfo] {
    COMPONENTS
}

pub fn component_info(name: &str) -> Option<&'static ComponentInfo> {
    COMPONENTS.iter().find(|info| info.name == name)
}

pub fn components_with(stability: Stability) -> impl Iterator<Item = &'static ComponentInfo> {
    COMPONENTS
        .iter()
        .filter(move |info| info.stability == stability)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let info = component_info("FooterModern").unwrap();
        assert_eq!(info.stability, Stability::Beta);
        assert_eq!(info.module, "patterns");
        assert!(component_info("Carousel").is_none());
    }

    #[test]
    fn test_patterns_are_beta() {
        assert!(components()
            .iter()
            .filter(|info| info.module == "patterns")
            .all(|info| info.stability == Stability::Beta));
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = components().iter().map(|info| info.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), components().len());
    }

    #[test]
    fn test_filter_by_stability() {
        assert!(components_with(Stability::Experimental).any(|info| info.name == "InstallPrompt"));
        assert!(components_with(Stability::Stable).all(|info| info.stability == Stability::Stable));
    }
}
