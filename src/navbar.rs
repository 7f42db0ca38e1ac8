//! Navbar styling and hide-on-scroll.
//!
//! The rule only looks at the previous and current scroll offsets:
//! past `scrolled_threshold_px` the navbar is styled as scrolled, and while
//! moving down past `hide_threshold_px` it slides off-screen. Any other
//! movement (including none) shows it.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use crate::config::SiteConfig;
use crate::consts::{NAVBAR_HIDDEN_TRANSFORM, NAVBAR_VISIBLE_TRANSFORM, SCROLLED_CLASS};
use crate::dom::{Dom, set_class};
use crate::error::ChromeError;

/// What the navbar should look like after a scroll sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarState {
    pub scrolled: bool,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub scrolled_px: f64,
    pub hide_px: f64,
}

impl Thresholds {
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self { scrolled_px: config.scrolled_threshold_px, hide_px: config.hide_threshold_px }
    }
}

#[must_use]
pub fn evaluate(previous: f64, current: f64, thresholds: Thresholds) -> NavbarState {
    NavbarState {
        scrolled: current > thresholds.scrolled_px,
        visible: !(current > previous && current > thresholds.hide_px),
    }
}

/// Navbar handle plus the last observed offset.
pub struct NavbarTracker<D: Dom> {
    navbar: Option<D::Node>,
    thresholds: Thresholds,
    last_offset: f64,
}

impl<D: Dom> NavbarTracker<D> {
    pub fn bind(dom: &D, config: &SiteConfig) -> Self {
        Self { navbar: dom.element_by_id(&config.navbar_id), thresholds: Thresholds::from_config(config), last_offset: 0.0 }
    }

    /// Feed a scroll offset. Returns the applied state, or `None` when the
    /// page has no navbar.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if the navbar class or transform cannot be written.
    pub fn on_scroll(&mut self, dom: &D, offset: f64) -> Result<Option<NavbarState>, ChromeError> {
        let Some(navbar) = &self.navbar else {
            return Ok(None);
        };
        let state = evaluate(self.last_offset, offset, self.thresholds);
        self.last_offset = offset;
        set_class(dom, navbar, SCROLLED_CLASS, state.scrolled)?;
        let transform = if state.visible { NAVBAR_VISIBLE_TRANSFORM } else { NAVBAR_HIDDEN_TRANSFORM };
        dom.set_style(navbar, "transform", transform)?;
        Ok(Some(state))
    }
}
