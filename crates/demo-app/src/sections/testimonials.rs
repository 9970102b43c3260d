//! Testimonials: only the heading reveals; the quote marquee itself runs on
//! a continuous loop outside the reveal system.

use unveil_core::controller::{RegistrationHandle, RevealController};
use unveil_core::geometry::Rect;
use unveil_core::sequence::{RevealSequence, TimingSpec};
use unveil_core::trigger::TriggerSpec;
use unveil_core::types::PropertyState;

use super::{HouseStyle, Section};
use crate::page::PAGE_WIDTH;

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        quote: "Wellcrafted Tech delivered our DeFi platform ahead of schedule with impeccable \
            security standards. Their expertise in smart contract development is unmatched.",
        author: "Sarah Chen",
        role: "CTO, ChainVault",
        company: "ChainVault Protocol",
    },
    Testimonial {
        quote: "The AI agent system they built has transformed our operations. We've reduced \
            manual tasks by 80% while improving accuracy. Truly game-changing.",
        author: "Marcus Williams",
        role: "Head of Operations",
        company: "NeuraCorp",
    },
    Testimonial {
        quote: "Working with Wellcrafted felt like an extension of our team. Their deep \
            understanding of Web3 and commitment to quality is exceptional.",
        author: "Elena Rodriguez",
        role: "Founder & CEO",
        company: "MetaDAO",
    },
    Testimonial {
        quote: "They took our complex requirements and delivered an elegant solution. The \
            zero-knowledge implementation was flawless and ahead of industry standards.",
        author: "David Park",
        role: "Chief Architect",
        company: "ZeroKnowledge Labs",
    },
    Testimonial {
        quote: "From ideation to deployment, Wellcrafted Tech guided us through every step. \
            Our platform now serves millions of users globally.",
        author: "Aisha Thompson",
        role: "VP Engineering",
        company: "InFlux Technologies",
    },
    Testimonial {
        quote: "The team's ability to bridge cutting-edge AI with blockchain technology opened \
            entirely new possibilities for our product roadmap.",
        author: "James Liu",
        role: "Product Lead",
        company: "AgentForge",
    },
];

const SECTION_HEIGHT: f32 = 800.0;

pub struct Testimonials;

impl Section for Testimonials {
    fn name(&self) -> &'static str {
        "testimonials"
    }

    fn mount(&self, origin_y: f32, controller: &mut RevealController) -> f32 {
        controller.track_element(
            "testimonials",
            Rect::new(0.0, origin_y, PAGE_WIDTH, SECTION_HEIGHT),
        );
        controller.track_element(
            "testimonials.heading",
            Rect::new(240.0, origin_y + 120.0, 800.0, 140.0),
        );
        controller.track_element(
            "testimonials.marquee",
            Rect::new(0.0, origin_y + 320.0, PAGE_WIDTH, 400.0),
        );
        SECTION_HEIGHT
    }

    fn reveals(
        &self,
        controller: &mut RevealController,
        style: &HouseStyle,
    ) -> unveil_core::Result<Vec<RegistrationHandle>> {
        let handle = controller.register(
            RevealSequence::new(["testimonials.heading"])
                .from(PropertyState::new().opacity(0.0).y(50.0))
                .to(PropertyState::new().opacity(1.0).y(0.0))
                .timing(TimingSpec::new(800.0).with_easing(style.easing))
                .trigger(TriggerSpec::play_reverse(0.8)),
        )?;
        Ok(vec![handle])
    }
}
