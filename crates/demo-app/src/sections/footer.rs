//! Footer: static link columns, no reveal choreography.

use unveil_core::controller::{RegistrationHandle, RevealController};
use unveil_core::geometry::Rect;

use super::{HouseStyle, Section};
use crate::page::PAGE_WIDTH;

pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub const COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        title: "Services",
        links: &[
            "Web3 Development",
            "Blockchain Solutions",
            "Agentic AI Systems",
            "Smart Contracts",
        ],
    },
    FooterColumn {
        title: "Company",
        links: &["About", "Case Studies", "Blog", "Careers"],
    },
    FooterColumn {
        title: "Connect",
        links: &["Twitter", "LinkedIn", "GitHub"],
    },
];

const SECTION_HEIGHT: f32 = 480.0;

pub struct Footer;

impl Section for Footer {
    fn name(&self) -> &'static str {
        "footer"
    }

    fn mount(&self, origin_y: f32, controller: &mut RevealController) -> f32 {
        controller.track_element("footer", Rect::new(0.0, origin_y, PAGE_WIDTH, SECTION_HEIGHT));
        SECTION_HEIGHT
    }

    fn reveals(
        &self,
        _controller: &mut RevealController,
        _style: &HouseStyle,
    ) -> unveil_core::Result<Vec<RegistrationHandle>> {
        // The footer sits at the document end and renders as-is.
        Ok(Vec::new())
    }
}
