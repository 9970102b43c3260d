//! Case studies: heading plus project cards sliding in from the left.

use unveil_core::controller::{RegistrationHandle, RevealController};
use unveil_core::geometry::Rect;
use unveil_core::sequence::TimingSpec;
use unveil_core::timeline::{RevealTimeline, TimelineStep};
use unveil_core::trigger::TriggerSpec;
use unveil_core::types::PropertyState;

use super::{HouseStyle, Section};
use crate::page::PAGE_WIDTH;

pub struct Project {
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tech: [&'static str; 4],
}

pub const PROJECTS: [Project; 5] = [
    Project {
        name: "InFlux Cloud",
        category: "Infrastructure",
        description: "Decentralized cloud computing platform enabling globally distributed \
            peer-to-peer infrastructure with FluxAI integration.",
        tech: ["Rust", "WebAssembly", "Kubernetes", "AI/ML"],
    },
    Project {
        name: "ChainVault Protocol",
        category: "DeFi",
        description: "Cross-chain yield aggregator managing over $500M in TVL across 8 \
            blockchain networks.",
        tech: ["Solidity", "The Graph", "React", "Hardhat"],
    },
    Project {
        name: "NeurAgent",
        category: "AI Platform",
        description: "Enterprise AI agent platform enabling autonomous task execution with \
            human-in-the-loop workflows.",
        tech: ["Python", "LangChain", "Vector DB", "FastAPI"],
    },
    Project {
        name: "MetaDAO Governance",
        category: "DAO Tooling",
        description: "Comprehensive governance suite for DAOs including voting, treasury \
            management, and proposal automation.",
        tech: ["Solidity", "IPFS", "Next.js", "Wagmi"],
    },
    Project {
        name: "ZeroKnowledge ID",
        category: "Identity",
        description: "Privacy-preserving identity verification using zero-knowledge proofs \
            for Web3 applications.",
        tech: ["Circom", "SnarkJS", "Rust", "TypeScript"],
    },
];

const SECTION_HEIGHT: f32 = 1600.0;

pub struct CaseStudies;

impl Section for CaseStudies {
    fn name(&self) -> &'static str {
        "case-studies"
    }

    fn mount(&self, origin_y: f32, controller: &mut RevealController) -> f32 {
        controller.track_element(
            "case-studies",
            Rect::new(0.0, origin_y, PAGE_WIDTH, SECTION_HEIGHT),
        );
        controller.track_element(
            "case-studies.heading",
            Rect::new(240.0, origin_y + 120.0, 800.0, 160.0),
        );
        for i in 0..PROJECTS.len() {
            controller.track_element(
                format!("case-studies.project-{i}"),
                Rect::new(80.0, origin_y + 340.0 + i as f32 * 240.0, 1120.0, 220.0),
            );
        }
        SECTION_HEIGHT
    }

    fn reveals(
        &self,
        controller: &mut RevealController,
        style: &HouseStyle,
    ) -> unveil_core::Result<Vec<RegistrationHandle>> {
        let projects: Vec<String> = (0..PROJECTS.len())
            .map(|i| format!("case-studies.project-{i}"))
            .collect();

        let timeline = RevealTimeline::new("case-studies")
            .trigger(TriggerSpec::play_reverse(0.75))
            .step(
                TimelineStep::new(["case-studies.heading"])
                    .from(PropertyState::new().opacity(0.0).y(50.0))
                    .to(PropertyState::new().opacity(1.0).y(0.0))
                    .timing(TimingSpec::new(800.0).with_easing(style.easing)),
            )
            .step(
                TimelineStep::new(projects)
                    .from(PropertyState::new().opacity(0.0).x(-30.0).scale(0.98))
                    .to(PropertyState::new().opacity(1.0).x(0.0).scale(1.0))
                    .timing(
                        TimingSpec::new(700.0)
                            .with_stagger(150.0)
                            .with_easing(style.easing),
                    )
                    .position(-400.0),
            );

        Ok(vec![controller.register_timeline(timeline)?])
    }
}
