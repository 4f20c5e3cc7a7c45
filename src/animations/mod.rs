//! Scroll-linked page effects.
//!
//! Pages call [`init`] from a mount effect and keep the returned
//! [`PageEffects`] alive until unmount; dropping it detaches every
//! listener the effects installed.

mod counter;
mod parallax;
mod reveal;

pub use counter::{CountUp, COUNT_DURATION_MS, COUNT_TICK_MS};
pub use parallax::{parallax_offset, parse_speed, Parallax, PARALLAX_DEBOUNCE_MS};
pub use reveal::{
    delay_for_tier, tier_from_classes, RevealEngine, ScrollReveal, REVEAL_OFFSET_PX,
    REVEAL_SELECTOR, SWEEP_DEBOUNCE_MS,
};

/// The effects a page mounts after it renders.
pub struct PageEffects {
    reveal: Option<ScrollReveal>,
    parallax: Option<Parallax>,
}

/// Scans the current document for tagged elements and starts the reveal
/// and parallax passes over them.
pub fn init() -> PageEffects {
    PageEffects {
        reveal: ScrollReveal::mount(),
        parallax: Parallax::mount(),
    }
}

impl PageEffects {
    pub fn is_active(&self) -> bool {
        self.reveal.is_some() || self.parallax.is_some()
    }
}
