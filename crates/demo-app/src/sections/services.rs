//! Services grid: heading plus six cards that tilt upright as they fade in.

use unveil_core::controller::{RegistrationHandle, RevealController};
use unveil_core::geometry::Rect;
use unveil_core::sequence::TimingSpec;
use unveil_core::timeline::{RevealTimeline, TimelineStep};
use unveil_core::trigger::TriggerSpec;
use unveil_core::types::PropertyState;

use super::{HouseStyle, Section};
use crate::page::PAGE_WIDTH;

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: [&'static str; 3],
}

pub const SERVICES: [Service; 6] = [
    Service {
        title: "Web3 Development",
        description: "Full-stack decentralized applications built on leading blockchain protocols.",
        tags: ["DeFi", "DAOs", "dApps"],
    },
    Service {
        title: "Blockchain Solutions",
        description: "Custom blockchain networks, layer 2 solutions, and cross-chain bridges.",
        tags: ["L1/L2", "Bridges", "Nodes"],
    },
    Service {
        title: "Agentic AI Systems",
        description: "Autonomous AI agents that execute complex tasks with human-level reasoning.",
        tags: ["LLMs", "Automation", "RAG"],
    },
    Service {
        title: "Smart Contracts",
        description: "Secure, audited smart contracts for tokens, NFTs, and complex protocols.",
        tags: ["Solidity", "Rust", "Audits"],
    },
    Service {
        title: "Full-Stack Products",
        description: "End-to-end product development from ideation to production deployment.",
        tags: ["MVP", "Scale", "Launch"],
    },
    Service {
        title: "UI/UX Engineering",
        description: "Beautiful, intuitive interfaces that make complex technology accessible.",
        tags: ["Design", "Frontend", "Motion"],
    },
];

const SECTION_HEIGHT: f32 = 1300.0;

pub struct ServicesSection;

impl Section for ServicesSection {
    fn name(&self) -> &'static str {
        "services"
    }

    fn mount(&self, origin_y: f32, controller: &mut RevealController) -> f32 {
        controller.track_element(
            "services",
            Rect::new(0.0, origin_y, PAGE_WIDTH, SECTION_HEIGHT),
        );
        controller.track_element(
            "services.heading",
            Rect::new(240.0, origin_y + 120.0, 800.0, 180.0),
        );
        for i in 0..SERVICES.len() {
            let col = (i % 3) as f32;
            let row = (i / 3) as f32;
            controller.track_element(
                format!("services.card-{i}"),
                Rect::new(
                    80.0 + col * 390.0,
                    origin_y + 360.0 + row * 320.0,
                    370.0,
                    280.0,
                ),
            );
        }
        SECTION_HEIGHT
    }

    fn reveals(
        &self,
        controller: &mut RevealController,
        style: &HouseStyle,
    ) -> unveil_core::Result<Vec<RegistrationHandle>> {
        let cards: Vec<String> = (0..SERVICES.len())
            .map(|i| format!("services.card-{i}"))
            .collect();

        let timeline = RevealTimeline::new("services")
            .trigger(TriggerSpec::play_reverse(0.75))
            .step(
                TimelineStep::new(["services.heading"])
                    .from(PropertyState::new().opacity(0.0).y(50.0))
                    .to(PropertyState::new().opacity(1.0).y(0.0))
                    .timing(TimingSpec::new(800.0).with_easing(style.easing)),
            )
            .step(
                TimelineStep::new(cards)
                    .from(PropertyState::new().opacity(0.0).y(50.0).rotate(-10.0))
                    .to(PropertyState::new().opacity(1.0).y(0.0).rotate(0.0))
                    .timing(
                        TimingSpec::new(700.0)
                            .with_stagger(120.0)
                            .with_easing(style.easing),
                    )
                    .position(-400.0),
            );

        Ok(vec![controller.register_timeline(timeline)?])
    }
}
