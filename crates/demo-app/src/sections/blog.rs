//! Blog teasers: heading plus a staggered card grid.

use unveil_core::controller::{RegistrationHandle, RevealController};
use unveil_core::geometry::Rect;
use unveil_core::sequence::TimingSpec;
use unveil_core::timeline::{RevealTimeline, TimelineStep};
use unveil_core::trigger::TriggerSpec;
use unveil_core::types::PropertyState;

use super::{HouseStyle, Section};
use crate::page::PAGE_WIDTH;

pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
}

pub const BLOG_POSTS: [BlogPost; 4] = [
    BlogPost {
        title: "The Rise of Agentic AI: Beyond Traditional Automation",
        excerpt: "Exploring how autonomous AI agents are reshaping enterprise operations and \
            decision-making.",
        category: "AI",
        date: "Dec 18, 2024",
        read_time: "8 min read",
    },
    BlogPost {
        title: "Web3 Security Best Practices for 2025",
        excerpt: "A comprehensive guide to securing your decentralized applications against \
            emerging threats.",
        category: "Security",
        date: "Dec 15, 2024",
        read_time: "12 min read",
    },
    BlogPost {
        title: "Building Scalable Cross-Chain Bridges",
        excerpt: "Technical deep-dive into architecting reliable and secure blockchain \
            interoperability solutions.",
        category: "Blockchain",
        date: "Dec 10, 2024",
        read_time: "15 min read",
    },
    BlogPost {
        title: "Zero-Knowledge Proofs Explained",
        excerpt: "Demystifying ZK technology and its transformative potential for privacy-first \
            applications.",
        category: "Cryptography",
        date: "Dec 5, 2024",
        read_time: "10 min read",
    },
];

const SECTION_HEIGHT: f32 = 1100.0;

pub struct BlogSection;

impl Section for BlogSection {
    fn name(&self) -> &'static str {
        "blog"
    }

    fn mount(&self, origin_y: f32, controller: &mut RevealController) -> f32 {
        controller.track_element("blog", Rect::new(0.0, origin_y, PAGE_WIDTH, SECTION_HEIGHT));
        controller.track_element(
            "blog.heading",
            Rect::new(240.0, origin_y + 120.0, 800.0, 140.0),
        );
        for i in 0..BLOG_POSTS.len() {
            let col = (i % 2) as f32;
            let row = (i / 2) as f32;
            controller.track_element(
                format!("blog.card-{i}"),
                Rect::new(
                    80.0 + col * 580.0,
                    origin_y + 320.0 + row * 340.0,
                    560.0,
                    300.0,
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
        let cards: Vec<String> = (0..BLOG_POSTS.len())
            .map(|i| format!("blog.card-{i}"))
            .collect();

        let timeline = RevealTimeline::new("blog")
            .trigger(TriggerSpec::play_reverse(0.75))
            .step(
                TimelineStep::new(["blog.heading"])
                    .from(PropertyState::new().opacity(0.0).y(50.0))
                    .to(PropertyState::new().opacity(1.0).y(0.0))
                    .timing(TimingSpec::new(800.0).with_easing(style.easing)),
            )
            .step(
                TimelineStep::new(cards)
                    .from(PropertyState::new().opacity(0.0).y(30.0))
                    .to(PropertyState::new().opacity(1.0).y(0.0))
                    .timing(
                        TimingSpec::new(600.0)
                            .with_stagger(style.stagger_ms)
                            .with_easing(style.easing),
                    )
                    .position(-400.0),
            );

        Ok(vec![controller.register_timeline(timeline)?])
    }
}
