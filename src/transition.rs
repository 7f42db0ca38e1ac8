//! Page fade transitions around navigation.
//!
//! Following a navigation link fades the body out and navigates once the
//! fade has run. The host schedules that navigation as a fire-and-forget
//! timer with no cancellation: if the browser navigates by other means
//! first, the pending one is simply superseded. A body carrying
//! `data-no-transition="true"` navigates immediately.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use crate::config::SiteConfig;
use crate::consts::NO_TRANSITION_ATTRIBUTE;
use crate::dom::Dom;
use crate::error::ChromeError;

/// What a clicked link's `href` points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// No `href`, or an empty one.
    Missing,
    /// In-page anchor (`#...`), left to the smooth-scroll handler.
    Anchor,
    /// Another page.
    Page(&'a str),
}

#[must_use]
pub fn classify(href: Option<&str>) -> LinkKind<'_> {
    match href {
        None | Some("") => LinkKind::Missing,
        Some(href) if href.starts_with('#') => LinkKind::Anchor,
        Some(href) => LinkKind::Page(href),
    }
}

/// How the host should follow a page link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Plan {
    Immediate,
    AfterFade { delay_ms: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageTransition {
    fade_ms: u32,
}

impl PageTransition {
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self { fade_ms: config.fade_duration_ms }
    }

    /// Whether the body opts out of transitions.
    #[must_use]
    pub fn is_disabled<D: Dom>(dom: &D) -> bool {
        dom.body()
            .and_then(|body| dom.attribute(&body, NO_TRANSITION_ATTRIBUTE))
            .is_some_and(|flag| flag == "true")
    }

    /// Start leaving the page. Fades the body out unless transitions are
    /// disabled, and tells the host when to navigate.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if the body style cannot be written.
    pub fn begin<D: Dom>(&self, dom: &D) -> Result<Plan, ChromeError> {
        if Self::is_disabled(dom) {
            return Ok(Plan::Immediate);
        }
        self.set_body_opacity(dom, "0")?;
        Ok(Plan::AfterFade { delay_ms: self.fade_ms })
    }

    /// Fade the body in after load.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if the body style cannot be written.
    pub fn fade_in<D: Dom>(&self, dom: &D) -> Result<(), ChromeError> {
        self.set_body_opacity(dom, "1")
    }

    fn set_body_opacity<D: Dom>(&self, dom: &D, opacity: &str) -> Result<(), ChromeError> {
        let Some(body) = dom.body() else {
            return Ok(());
        };
        dom.set_style(&body, "transition", &format!("opacity {}ms ease", self.fade_ms))?;
        dom.set_style(&body, "opacity", opacity)
    }
}
