//! Bound page controller.
//!
//! ARCHITECTURE
//! ============
//! [`SiteChrome::bind`] resolves every element the page chrome needs once,
//! at startup, and owns those handles. The browser host forwards raw events
//! (`click` and `keydown` on the document, `scroll` on the window) to the
//! `on_*` methods and carries out the returned [`Action`]s, which are the
//! only things the controller cannot do through the [`Dom`] itself.
//!
//! Click handling is delegated: one document-level listener receives every
//! click and the controller matches the target against its element handles
//! with [`is_within`], so clicks on elements layered over the logo still
//! register.

#[cfg(test)]
#[path = "chrome_test.rs"]
mod chrome_test;

use crate::anchor::scroll_to_anchor;
use crate::config::SiteConfig;
use crate::dom::{Dom, PreferenceStore, is_within};
use crate::error::ChromeError;
use crate::input::Key;
use crate::menu::MobileMenu;
use crate::navbar::{NavbarState, NavbarTracker};
use crate::theme::{Theme, ThemeController};
use crate::transition::{LinkKind, PageTransition, Plan, classify};
use crate::zoom::LogoZoom;

/// Work the host performs after an event has been handled.
///
/// Both navigation variants imply that the event's default was prevented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Call `preventDefault()` on the event.
    PreventDefault,
    /// Navigate to `href` now.
    Navigate { href: String },
    /// Navigate to `href` once `delay_ms` has elapsed. Fire-and-forget.
    NavigateAfter { href: String, delay_ms: u32 },
}

pub struct SiteChrome<D: Dom, S: PreferenceStore> {
    dom: D,
    store: S,
    theme: ThemeController<D>,
    menu: MobileMenu<D>,
    zoom: LogoZoom<D>,
    navbar: NavbarTracker<D>,
    transition: PageTransition,
    nav_links: Vec<D::Node>,
    anchors: Vec<D::Node>,
}

impl<D: Dom, S: PreferenceStore> SiteChrome<D, S> {
    /// Resolve elements, apply the stored theme, and create the logo overlay
    /// if the markup lacks one.
    pub fn bind(dom: D, store: S, config: &SiteConfig) -> Self {
        let theme = ThemeController::bind(&dom, config);
        match theme.initialize(&dom, &store) {
            Ok(applied) => log::debug!("theme initialized: {}", applied.as_str()),
            Err(err) => log::warn!("theme not applied: {err}"),
        }
        let menu = MobileMenu::bind(&dom, config);
        let zoom = LogoZoom::bind(&dom, config);
        let navbar = NavbarTracker::bind(&dom, config);
        let nav_links = dom.query_all(&config.nav_links);
        let anchors = dom.query_all(&config.anchors);
        log::debug!("page chrome bound: {} nav links, {} anchors", nav_links.len(), anchors.len());
        Self {
            dom,
            store,
            theme,
            menu,
            zoom,
            navbar,
            transition: PageTransition::from_config(config),
            nav_links,
            anchors,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn dom(&self) -> &D {
        &self.dom
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.current(&self.dom, &self.store)
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open(&self.dom)
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_expanded(&self.dom)
    }

    // --- Operations ---

    /// # Errors
    ///
    /// See [`ThemeController::toggle`].
    pub fn toggle_theme(&self) -> Result<Theme, ChromeError> {
        self.theme.toggle(&self.dom, &self.store)
    }

    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if the menu cannot be updated.
    pub fn open_menu(&self) -> Result<(), ChromeError> {
        self.menu.open(&self.dom)
    }

    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if the menu cannot be updated.
    pub fn close_menu(&self) -> Result<(), ChromeError> {
        self.menu.close(&self.dom)
    }

    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if the menu cannot be updated.
    pub fn toggle_menu(&self) -> Result<bool, ChromeError> {
        self.menu.toggle(&self.dom)
    }

    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if the logo or overlay cannot be updated.
    pub fn toggle_zoom(&self) -> Result<bool, ChromeError> {
        self.zoom.toggle(&self.dom)
    }

    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if the logo or overlay cannot be updated.
    pub fn close_zoom(&self) -> Result<(), ChromeError> {
        self.zoom.close(&self.dom)
    }

    // --- Events ---

    /// Page finished loading: fade the body in.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if the body style cannot be written.
    pub fn on_load(&self) -> Result<(), ChromeError> {
        self.transition.fade_in(&self.dom)
    }

    /// Document-level click. `target` is `None` when the event did not
    /// originate from an element.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if a DOM write fails. A refused theme save
    /// is logged and does not stop the click.
    pub fn on_click(&self, target: Option<&D::Node>) -> Result<Vec<Action>, ChromeError> {
        let Some(target) = target else {
            self.menu.dismiss_on_outside_click(&self.dom, None)?;
            return Ok(Vec::new());
        };
        if self.menu.is_trigger_hit(&self.dom, target) {
            self.menu.toggle(&self.dom)?;
            return Ok(Vec::new());
        }
        if is_within(&self.dom, target, self.theme.trigger()) {
            if let Err(err) = self.theme.toggle(&self.dom, &self.store) {
                log::warn!("theme toggle incomplete: {err}");
            }
        }
        self.menu.dismiss_on_outside_click(&self.dom, Some(target))?;

        let mut actions = Vec::new();
        if self.zoom.is_logo_hit(&self.dom, target) {
            self.zoom.toggle(&self.dom)?;
            actions.push(Action::PreventDefault);
            return Ok(actions);
        }
        if self.zoom.is_overlay_hit(&self.dom, target) {
            self.zoom.close(&self.dom)?;
        }

        if let Some(link) = self.hit(&self.nav_links, target) {
            self.menu.close(&self.dom)?;
            let href = self.dom.attribute(link, "href");
            if let LinkKind::Page(href) = classify(href.as_deref()) {
                let href = href.to_owned();
                let action = match self.transition.begin(&self.dom)? {
                    Plan::Immediate => Action::Navigate { href },
                    Plan::AfterFade { delay_ms } => Action::NavigateAfter { href, delay_ms },
                };
                actions.push(action);
                return Ok(actions);
            }
        }

        if let Some(anchor) = self.hit(&self.anchors, target) {
            if let Some(href) = self.dom.attribute(anchor, "href") {
                if scroll_to_anchor(&self.dom, &href) {
                    actions.push(Action::PreventDefault);
                }
            }
        }
        Ok(actions)
    }

    /// Document-level keydown. Escape closes everything; Enter or Space on
    /// the focused logo toggles the zoom.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if a DOM write fails.
    pub fn on_key_down(&self, key: &Key, target: Option<&D::Node>) -> Result<Vec<Action>, ChromeError> {
        if *key == Key::Escape {
            self.zoom.close(&self.dom)?;
            self.menu.close(&self.dom)?;
            return Ok(Vec::new());
        }
        if key.is_activation() && target.is_some_and(|target| self.zoom.is_logo_hit(&self.dom, target)) {
            self.zoom.toggle(&self.dom)?;
            return Ok(vec![Action::PreventDefault]);
        }
        Ok(Vec::new())
    }

    /// Window scroll at vertical `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if the navbar cannot be updated.
    pub fn on_scroll(&mut self, offset: f64) -> Result<Option<NavbarState>, ChromeError> {
        self.navbar.on_scroll(&self.dom, offset)
    }

    fn hit<'a>(&self, candidates: &'a [D::Node], target: &D::Node) -> Option<&'a D::Node> {
        candidates.iter().find(|candidate| is_within(&self.dom, target, Some(*candidate)))
    }
}
