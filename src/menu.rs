//! Mobile navigation menu.
//!
//! Open means: the panel carries `active`, the hamburger reports
//! `aria-expanded="true"`, and the body scroll is locked. Closing reverses
//! all three. Either element may be missing from a page; the calls then
//! touch whatever is present.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::config::SiteConfig;
use crate::consts::ACTIVE_CLASS;
use crate::dom::{Dom, is_within, set_class, set_scroll_lock};
use crate::error::ChromeError;

pub struct MobileMenu<D: Dom> {
    trigger: Option<D::Node>,
    panel: Option<D::Node>,
}

impl<D: Dom> MobileMenu<D> {
    pub fn bind(dom: &D, config: &SiteConfig) -> Self {
        Self { trigger: dom.element_by_id(&config.hamburger_id), panel: dom.element_by_id(&config.menu_id) }
    }

    #[must_use]
    pub fn is_open(&self, dom: &D) -> bool {
        self.panel.as_ref().is_some_and(|panel| dom.has_class(panel, ACTIVE_CLASS))
    }

    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if the panel or trigger cannot be updated.
    pub fn open(&self, dom: &D) -> Result<(), ChromeError> {
        self.set_open(dom, true)
    }

    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if the panel or trigger cannot be updated.
    pub fn close(&self, dom: &D) -> Result<(), ChromeError> {
        self.set_open(dom, false)
    }

    /// Flip the menu. Needs both the panel and its trigger; otherwise a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if the panel or trigger cannot be updated.
    pub fn toggle(&self, dom: &D) -> Result<bool, ChromeError> {
        if self.panel.is_none() || self.trigger.is_none() {
            return Ok(false);
        }
        let open = !self.is_open(dom);
        self.set_open(dom, open)?;
        Ok(open)
    }

    /// Whether a click on `target` hit the hamburger.
    #[must_use]
    pub fn is_trigger_hit(&self, dom: &D, target: &D::Node) -> bool {
        is_within(dom, target, self.trigger.as_ref())
    }

    /// Close the menu when a click lands outside both the panel and the
    /// hamburger. Returns whether it closed.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if closing the menu fails.
    pub fn dismiss_on_outside_click(&self, dom: &D, target: Option<&D::Node>) -> Result<bool, ChromeError> {
        if !self.is_open(dom) {
            return Ok(false);
        }
        if let Some(target) = target {
            if is_within(dom, target, self.panel.as_ref()) || self.is_trigger_hit(dom, target) {
                return Ok(false);
            }
        }
        self.close(dom)?;
        Ok(true)
    }

    fn set_open(&self, dom: &D, open: bool) -> Result<(), ChromeError> {
        if let Some(panel) = &self.panel {
            set_class(dom, panel, ACTIVE_CLASS, open)?;
        }
        if let Some(trigger) = &self.trigger {
            dom.set_attribute(trigger, "aria-expanded", if open { "true" } else { "false" })?;
        }
        set_scroll_lock(dom, open);
        Ok(())
    }
}
