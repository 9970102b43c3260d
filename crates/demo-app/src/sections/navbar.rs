//! Fixed navigation bar: slides down once on load.

use unveil_core::controller::{RegistrationHandle, RevealController};
use unveil_core::geometry::Rect;
use unveil_core::sequence::{RevealSequence, TimingSpec};
use unveil_core::trigger::TriggerSpec;
use unveil_core::types::PropertyState;

use super::{HouseStyle, Section};
use crate::page::PAGE_WIDTH;

pub const NAV_LINKS: [&str; 5] = ["Services", "Why Us", "Case Studies", "Testimonials", "Blog"];

pub struct Navbar;

impl Section for Navbar {
    fn name(&self) -> &'static str {
        "navbar"
    }

    fn mount(&self, origin_y: f32, controller: &mut RevealController) -> f32 {
        controller.track_element("navbar", Rect::new(0.0, origin_y, PAGE_WIDTH, 80.0));
        // Fixed overlay: contributes no height to the document flow.
        0.0
    }

    fn reveals(
        &self,
        controller: &mut RevealController,
        style: &HouseStyle,
    ) -> unveil_core::Result<Vec<RegistrationHandle>> {
        let handle = controller.register(
            RevealSequence::new(["navbar"])
                .from(PropertyState::new().opacity(0.0).y(-100.0))
                .to(PropertyState::new().opacity(1.0).y(0.0))
                .timing(TimingSpec::new(800.0).with_easing(style.easing))
                .trigger(TriggerSpec::once(style.start)),
        )?;
        Ok(vec![handle])
    }
}
