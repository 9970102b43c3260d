//! Feature grid: heading, six staggered cards, and a highlight panel that
//! slides in from the left.

use unveil_core::controller::{RegistrationHandle, RevealController};
use unveil_core::geometry::Rect;
use unveil_core::sequence::TimingSpec;
use unveil_core::timeline::{RevealTimeline, TimelineStep};
use unveil_core::trigger::TriggerSpec;
use unveil_core::types::PropertyState;

use super::{HouseStyle, Section};
use crate::page::PAGE_WIDTH;

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        title: "Rapid Delivery",
        description: "From concept to launch in record time, without compromising quality.",
    },
    Feature {
        title: "Battle-Tested Security",
        description: "Audited smart contracts and enterprise-grade security protocols.",
    },
    Feature {
        title: "Cutting-Edge Tech",
        description: "We leverage the latest in Web3 and AI to give you a competitive edge.",
    },
    Feature {
        title: "Expert Team",
        description: "Senior engineers with decades of combined blockchain experience.",
    },
    Feature {
        title: "Proven Track Record",
        description: "Trusted by leading protocols and Fortune 500 companies.",
    },
    Feature {
        title: "Scalable Solutions",
        description: "Architecture designed for millions of users from day one.",
    },
];

const SECTION_HEIGHT: f32 = 1200.0;

pub struct WhyChooseUs;

impl Section for WhyChooseUs {
    fn name(&self) -> &'static str {
        "why-choose-us"
    }

    fn mount(&self, origin_y: f32, controller: &mut RevealController) -> f32 {
        controller.track_element(
            "why-choose-us",
            Rect::new(0.0, origin_y, PAGE_WIDTH, SECTION_HEIGHT),
        );
        controller.track_element(
            "why-choose-us.heading",
            Rect::new(240.0, origin_y + 120.0, 800.0, 140.0),
        );
        for i in 0..FEATURES.len() {
            let col = (i % 3) as f32;
            let row = (i / 3) as f32;
            controller.track_element(
                format!("why-choose-us.card-{i}"),
                Rect::new(
                    80.0 + col * 390.0,
                    origin_y + 320.0 + row * 260.0,
                    370.0,
                    220.0,
                ),
            );
        }
        controller.track_element(
            "why-choose-us.highlight",
            Rect::new(80.0, origin_y + 880.0, 1120.0, 240.0),
        );
        SECTION_HEIGHT
    }

    fn reveals(
        &self,
        controller: &mut RevealController,
        style: &HouseStyle,
    ) -> unveil_core::Result<Vec<RegistrationHandle>> {
        let cards: Vec<String> = (0..FEATURES.len())
            .map(|i| format!("why-choose-us.card-{i}"))
            .collect();

        let timeline = RevealTimeline::new("why-choose-us")
            .trigger(TriggerSpec::play_reverse(0.8))
            .step(
                TimelineStep::new(["why-choose-us.heading"])
                    .from(PropertyState::new().opacity(0.0).y(50.0))
                    .to(PropertyState::new().opacity(1.0).y(0.0))
                    .timing(TimingSpec::new(800.0).with_easing(style.easing)),
            )
            .step(
                TimelineStep::new(cards)
                    .from(PropertyState::new().opacity(0.0).y(40.0).scale(0.95))
                    .to(PropertyState::new().opacity(1.0).y(0.0).scale(1.0))
                    .timing(
                        TimingSpec::new(600.0)
                            .with_stagger(style.stagger_ms)
                            .with_easing(style.easing),
                    )
                    .position(-400.0),
            )
            .step(
                TimelineStep::new(["why-choose-us.highlight"])
                    .from(PropertyState::new().opacity(0.0).x(-50.0))
                    .to(PropertyState::new().opacity(1.0).x(0.0))
                    .timing(TimingSpec::new(800.0).with_easing(style.easing))
                    .position(-300.0),
            );

        Ok(vec![controller.register_timeline(timeline)?])
    }
}
