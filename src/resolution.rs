//! Resolution gate: suppresses per-feature drawing when zoomed too far out.

use crate::model::Viewport;

/// True when `current` is at or below `max` (`current < max + 1`).
pub fn should_render(current_resolution: u32, max_resolution: u32) -> bool {
    u64::from(current_resolution) < u64::from(max_resolution) + 1
}

/// A gate decision taken once per draw pass.
///
/// Filtering and container sizing both read this snapshot, so they can never
/// disagree about whether the track is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionGate {
    pub resolution: u32,
    pub max_resolution: u32,
    open: bool,
}

impl ResolutionGate {
    pub fn snapshot(viewport: &Viewport) -> Self {
        Self {
            resolution: viewport.resolution,
            max_resolution: viewport.max_resolution,
            open: should_render(viewport.resolution, viewport.max_resolution),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
