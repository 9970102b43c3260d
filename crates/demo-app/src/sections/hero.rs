//! Hero section: the load-time choreography plus a parallax glow layer.
//!
//! Badge, headline, subtext, call-to-action, and logo marquee reveal as one
//! overlapping timeline off a single trigger; the background glow scrubs
//! against scroll position instead of a clock.

use unveil_core::controller::{RegistrationHandle, RevealController};
use unveil_core::easing::EasingFunction;
use unveil_core::geometry::Rect;
use unveil_core::sequence::{RevealSequence, TimingSpec};
use unveil_core::timeline::{RevealTimeline, TimelineStep};
use unveil_core::trigger::TriggerSpec;
use unveil_core::types::PropertyState;

use super::{HouseStyle, Section};
use crate::page::PAGE_WIDTH;

pub const HEADLINE: &str = "Autonomous Intelligence for the Decentralized Era";
pub const SUBTEXT: &str = "We build agentic AI systems and Web3 infrastructure that operate \
    autonomously, scale infinitely, and transform how businesses interact with the future.";
pub const BADGE: &str = "Trusted by over 50+ companies worldwide";

pub const CLIENT_LOGOS: [&str; 6] = [
    "InFlux",
    "ChainVault",
    "NeuraCorp",
    "MetaDAO",
    "ZKLabs",
    "AgentForge",
];

const SECTION_HEIGHT: f32 = 960.0;

pub struct HeroSection;

impl Section for HeroSection {
    fn name(&self) -> &'static str {
        "hero"
    }

    fn mount(&self, origin_y: f32, controller: &mut RevealController) -> f32 {
        controller.track_element("hero", Rect::new(0.0, origin_y, PAGE_WIDTH, SECTION_HEIGHT));
        controller.track_element(
            "hero.glow",
            Rect::new(240.0, origin_y + 100.0, 800.0, 600.0),
        );
        controller.track_element(
            "hero.badge",
            Rect::new(460.0, origin_y + 180.0, 360.0, 40.0),
        );
        controller.track_element(
            "hero.headline",
            Rect::new(140.0, origin_y + 260.0, 1000.0, 220.0),
        );
        controller.track_element(
            "hero.subtext",
            Rect::new(280.0, origin_y + 520.0, 720.0, 80.0),
        );
        controller.track_element("hero.cta", Rect::new(440.0, origin_y + 640.0, 400.0, 60.0));
        controller.track_element(
            "hero.marquee",
            Rect::new(80.0, origin_y + 780.0, 1120.0, 100.0),
        );
        SECTION_HEIGHT
    }

    fn reveals(
        &self,
        controller: &mut RevealController,
        style: &HouseStyle,
    ) -> unveil_core::Result<Vec<RegistrationHandle>> {
        // The hero sits in the initial viewport, so this fires on the first
        // scroll evaluation the way a mount-time timeline does.
        let timeline = RevealTimeline::new("hero")
            .trigger(TriggerSpec::once(0.85))
            .step(
                TimelineStep::new(["hero.badge"])
                    .from(PropertyState::new().opacity(0.0).y(20.0))
                    .to(PropertyState::new().opacity(1.0).y(0.0))
                    .timing(TimingSpec::new(600.0).with_easing(style.easing)),
            )
            .step(
                TimelineStep::new(["hero.headline"])
                    .from(PropertyState::new().opacity(0.0).y(40.0))
                    .to(PropertyState::new().opacity(1.0).y(0.0))
                    .timing(TimingSpec::new(800.0).with_easing(style.easing))
                    .position(-300.0),
            )
            .step(
                TimelineStep::new(["hero.subtext"])
                    .from(PropertyState::new().opacity(0.0).y(30.0))
                    .to(PropertyState::new().opacity(1.0).y(0.0))
                    .timing(TimingSpec::new(600.0).with_easing(style.easing))
                    .position(-400.0),
            )
            .step(
                TimelineStep::new(["hero.cta"])
                    .from(PropertyState::new().opacity(0.0).y(20.0))
                    .to(PropertyState::new().opacity(1.0).y(0.0))
                    .timing(TimingSpec::new(500.0).with_easing(style.easing))
                    .position(-300.0),
            )
            .step(
                TimelineStep::new(["hero.marquee"])
                    .from(PropertyState::new().opacity(0.0))
                    .to(PropertyState::new().opacity(1.0))
                    .timing(TimingSpec::new(600.0).with_easing(style.easing))
                    .position(-200.0),
            );
        let choreography = controller.register_timeline(timeline)?;

        // Background glow drifts upward at half scroll speed.
        let parallax = controller.register(
            RevealSequence::new(["hero.glow"])
                .from(PropertyState::new().y(0.0))
                .to(PropertyState::new().y(-120.0))
                .timing(TimingSpec::new(1.0).with_easing(EasingFunction::Linear))
                .trigger(TriggerSpec::scrub(1.0, 0.0)),
        )?;

        Ok(vec![choreography, parallax])
    }
}
