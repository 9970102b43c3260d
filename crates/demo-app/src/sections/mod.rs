//! The marketing page, one module per section.
//!
//! Each section owns its static content arrays and knows two things: how to
//! mount itself (track its elements with the controller at a vertical
//! origin) and which reveal sequences it registers. The page drives both in
//! document order and releases every returned handle on teardown.

use unveil_core::controller::{RegistrationHandle, RevealController};
use unveil_core::easing::EasingFunction;
use unveil_config::DefaultsConfig;

pub mod blog;
pub mod case_studies;
pub mod cta_banner;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod services;
pub mod testimonials;
pub mod why_choose_us;

/// Shared reveal parameters resolved from configuration.
#[derive(Debug, Clone)]
pub struct HouseStyle {
    /// Easing applied to every tween.
    pub easing: EasingFunction,
    /// Entry threshold used where a section has no opinion of its own.
    pub start: f32,
    /// Stagger used for card grids.
    pub stagger_ms: f32,
}

impl HouseStyle {
    /// Resolve the house style from the `[defaults]` config section.
    pub fn from_defaults(defaults: &DefaultsConfig) -> Self {
        Self {
            easing: easing_by_name(&defaults.easing),
            start: defaults.start,
            stagger_ms: defaults.stagger_ms,
        }
    }
}

impl Default for HouseStyle {
    fn default() -> Self {
        Self {
            easing: EasingFunction::PowerOut { exponent: 4 },
            start: 0.8,
            stagger_ms: 100.0,
        }
    }
}

/// Map a tween-style easing name ("power3.out", "ease_in_out", "linear")
/// to an easing function. Unknown names fall back to the house quartic
/// ease-out.
pub fn easing_by_name(name: &str) -> EasingFunction {
    match name {
        "linear" | "none" => EasingFunction::Linear,
        "ease" => EasingFunction::Ease,
        "ease_in" | "ease.in" => EasingFunction::EaseIn,
        "ease_out" | "ease.out" => EasingFunction::EaseOut,
        "ease_in_out" | "ease.in_out" => EasingFunction::EaseInOut,
        "power1.in" => EasingFunction::PowerIn { exponent: 2 },
        "power1.out" => EasingFunction::PowerOut { exponent: 2 },
        "power1.in_out" => EasingFunction::PowerInOut { exponent: 2 },
        "power2.in" => EasingFunction::PowerIn { exponent: 3 },
        "power2.out" => EasingFunction::PowerOut { exponent: 3 },
        "power2.in_out" => EasingFunction::PowerInOut { exponent: 3 },
        "power3.in" => EasingFunction::PowerIn { exponent: 4 },
        "power3.out" => EasingFunction::PowerOut { exponent: 4 },
        "power3.in_out" => EasingFunction::PowerInOut { exponent: 4 },
        "power4.in" => EasingFunction::PowerIn { exponent: 5 },
        "power4.out" => EasingFunction::PowerOut { exponent: 5 },
        "power4.in_out" => EasingFunction::PowerInOut { exponent: 5 },
        _ => EasingFunction::PowerOut { exponent: 4 },
    }
}

/// One page section: static content plus its reveal choreography.
pub trait Section {
    fn name(&self) -> &'static str;

    /// Track the section's elements starting at `origin_y`. Returns the
    /// section height so the page can stack the next section below.
    fn mount(&self, origin_y: f32, controller: &mut RevealController) -> f32;

    /// Register the section's reveal sequences. The returned handles are
    /// owned by the page and released on unmount.
    fn reveals(
        &self,
        controller: &mut RevealController,
        style: &HouseStyle,
    ) -> unveil_core::Result<Vec<RegistrationHandle>>;
}

/// The canonical section order of the page.
pub fn all_sections() -> Vec<Box<dyn Section>> {
    vec![
        Box::new(navbar::Navbar),
        Box::new(hero::HeroSection),
        Box::new(why_choose_us::WhyChooseUs),
        Box::new(services::ServicesSection),
        Box::new(case_studies::CaseStudies),
        Box::new(testimonials::Testimonials),
        Box::new(cta_banner::CtaBanner),
        Box::new(blog::BlogSection),
        Box::new(footer::Footer),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_by_name() {
        assert_eq!(easing_by_name("linear"), EasingFunction::Linear);
        assert_eq!(
            easing_by_name("power3.out"),
            EasingFunction::PowerOut { exponent: 4 }
        );
        assert_eq!(
            easing_by_name("power1.in_out"),
            EasingFunction::PowerInOut { exponent: 2 }
        );
        // Unknown names fall back to the house curve.
        assert_eq!(
            easing_by_name("bounce"),
            EasingFunction::PowerOut { exponent: 4 }
        );
    }

    #[test]
    fn test_section_order() {
        let names: Vec<&str> = all_sections().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "navbar",
                "hero",
                "why-choose-us",
                "services",
                "case-studies",
                "testimonials",
                "cta-banner",
                "blog",
                "footer"
            ]
        );
    }
}
