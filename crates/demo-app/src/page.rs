//! Document assembly: stacks the sections vertically and wires their
//! reveals into one controller.

use tracing::debug;

use unveil_core::controller::{RegistrationHandle, RevealController};

use crate::sections::{HouseStyle, Section, all_sections};

/// Layout width of the simulated document.
pub const PAGE_WIDTH: f32 = 1280.0;

/// The mounted page: total scrollable height plus every reveal handle the
/// sections registered. Handles are released together on teardown.
pub struct Page {
    pub content_height: f32,
    pub handles: Vec<RegistrationHandle>,
}

/// Mount every section in document order, then register their reveals.
///
/// Mounting runs first for the whole page so that cross-section anchors are
/// all tracked before any registration validates its targets.
pub fn build(
    controller: &mut RevealController,
    style: &HouseStyle,
) -> unveil_core::Result<Page> {
    let sections = all_sections();

    let mut content_height = 0.0;
    for section in &sections {
        let height = section.mount(content_height, controller);
        debug!(
            section = section.name(),
            origin = content_height,
            height,
            "mounted section"
        );
        content_height += height;
    }

    let mut handles = Vec::new();
    for section in &sections {
        let section_handles = section.reveals(controller, style)?;
        debug!(
            section = section.name(),
            reveals = section_handles.len(),
            "registered reveals"
        );
        handles.extend(section_handles);
    }

    Ok(Page {
        content_height,
        handles,
    })
}
