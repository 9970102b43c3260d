//! Call-to-action banner: one block, one fade-up, plays once.

use unveil_core::controller::{RegistrationHandle, RevealController};
use unveil_core::geometry::Rect;
use unveil_core::sequence::{RevealSequence, TimingSpec};
use unveil_core::trigger::TriggerSpec;
use unveil_core::types::PropertyState;

use super::{HouseStyle, Section};
use crate::page::PAGE_WIDTH;

pub const HEADLINE: &str = "Stay ahead of the competition";
pub const TAGLINE: &str = "Deploy in one click. No setup. No stress.";

pub const BADGES: [&str; 6] = [
    "SOC 2 Ready",
    "No credit card needed",
    "EU-hosted",
    "Cancel anytime",
    "GDPR Compliant",
    "Setup in minutes",
];

const SECTION_HEIGHT: f32 = 700.0;

pub struct CtaBanner;

impl Section for CtaBanner {
    fn name(&self) -> &'static str {
        "cta-banner"
    }

    fn mount(&self, origin_y: f32, controller: &mut RevealController) -> f32 {
        controller.track_element(
            "cta-banner",
            Rect::new(0.0, origin_y, PAGE_WIDTH, SECTION_HEIGHT),
        );
        controller.track_element(
            "cta-banner.content",
            Rect::new(180.0, origin_y + 120.0, 920.0, 460.0),
        );
        SECTION_HEIGHT
    }

    fn reveals(
        &self,
        controller: &mut RevealController,
        style: &HouseStyle,
    ) -> unveil_core::Result<Vec<RegistrationHandle>> {
        let handle = controller.register(
            RevealSequence::new(["cta-banner.content"])
                .from(PropertyState::new().opacity(0.0).y(50.0))
                .to(PropertyState::new().opacity(1.0).y(0.0))
                .timing(TimingSpec::new(800.0).with_easing(style.easing))
                .trigger(TriggerSpec::once(0.75)),
        )?;
        Ok(vec![handle])
    }
}
