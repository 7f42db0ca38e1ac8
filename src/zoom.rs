//! Profile logo zoom with a dimming overlay.
//!
//! The logo carries `expanded` while zoomed and the overlay carries
//! `active` in lockstep. Page scroll is locked while zoomed.
//!
//! The overlay is optional in markup: when the page has none, one is created
//! at bind time and appended to the body. Binding happens once per page, so
//! the overlay is never appended twice.
//!
//! Every element matching the logo or wrapper selector counts as a hit, so a
//! page may repeat the logo (header and footer). Only the first logo zooms.

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use crate::config::SiteConfig;
use crate::consts::{ACTIVE_CLASS, EXPANDED_CLASS, OVERLAY_CLASS};
use crate::dom::{Dom, is_within, set_class, set_scroll_lock};
use crate::error::ChromeError;

pub struct LogoZoom<D: Dom> {
    logo: Option<D::Node>,
    hit_targets: Vec<D::Node>,
    overlay: Option<D::Node>,
}

impl<D: Dom> LogoZoom<D> {
    pub fn bind(dom: &D, config: &SiteConfig) -> Self {
        let logo = dom.query(&config.logo);
        if let Some(logo) = &logo {
            if let Err(err) = dom.set_attribute(logo, "tabindex", "0") {
                log::warn!("logo not focusable: {err}");
            }
        }
        let overlay = match ensure_overlay(dom, config) {
            Ok(overlay) => Some(overlay),
            Err(err) => {
                log::warn!("logo overlay unavailable: {err}");
                None
            }
        };
        let hit_targets = dom.query_all(&format!("{}, {}", config.logo, config.logo_wrapper));
        Self { logo, hit_targets, overlay }
    }

    #[must_use]
    pub fn is_expanded(&self, dom: &D) -> bool {
        self.logo.as_ref().is_some_and(|logo| dom.has_class(logo, EXPANDED_CLASS))
    }

    /// Whether `target` is any logo or wrapper, or anything layered inside one.
    #[must_use]
    pub fn is_logo_hit(&self, dom: &D, target: &D::Node) -> bool {
        self.hit_targets.iter().any(|candidate| is_within(dom, target, Some(candidate)))
    }

    #[must_use]
    pub fn is_overlay_hit(&self, dom: &D, target: &D::Node) -> bool {
        is_within(dom, target, self.overlay.as_ref())
    }

    /// Flip the zoom. A page without a logo never zooms.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if a class cannot be written.
    pub fn toggle(&self, dom: &D) -> Result<bool, ChromeError> {
        if self.logo.is_none() {
            return Ok(false);
        }
        let expanded = !self.is_expanded(dom);
        self.set_expanded(dom, expanded)?;
        Ok(expanded)
    }

    /// Collapse the zoom. No-op when already collapsed, so a scroll lock held
    /// by the open menu is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if a class cannot be written.
    pub fn close(&self, dom: &D) -> Result<(), ChromeError> {
        if !self.is_expanded(dom) {
            return Ok(());
        }
        self.set_expanded(dom, false)
    }

    fn set_expanded(&self, dom: &D, expanded: bool) -> Result<(), ChromeError> {
        if let Some(logo) = &self.logo {
            set_class(dom, logo, EXPANDED_CLASS, expanded)?;
        }
        if let Some(overlay) = &self.overlay {
            set_class(dom, overlay, ACTIVE_CLASS, expanded)?;
        }
        set_scroll_lock(dom, expanded);
        Ok(())
    }
}

/// Find the overlay, or create and append one to the body.
fn ensure_overlay<D: Dom>(dom: &D, config: &SiteConfig) -> Result<D::Node, ChromeError> {
    if let Some(existing) = dom.query(&config.overlay) {
        return Ok(existing);
    }
    let body = dom.body().ok_or_else(|| ChromeError::Dom("document has no body".into()))?;
    let overlay = dom.create_element("div")?;
    dom.add_class(&overlay, OVERLAY_CLASS)?;
    dom.append_child(&body, &overlay)?;
    log::debug!("created logo overlay");
    Ok(overlay)
}
