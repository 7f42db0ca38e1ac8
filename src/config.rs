//! Selectors and tuning values for the page chrome.
//!
//! Defaults match the site's markup. Pages use [`SiteConfig::default`];
//! tests build variants with struct update syntax.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{FADE_DURATION_MS, HIDE_THRESHOLD_PX, SCROLLED_THRESHOLD_PX};

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Theme toggle button.
    pub theme_toggle: String,
    /// Icon inside the theme toggle whose class reflects the theme.
    pub theme_icon: String,
    /// Element id of the hamburger button.
    pub hamburger_id: String,
    /// Element id of the collapsible menu panel.
    pub menu_id: String,
    /// Element id of the navigation bar.
    pub navbar_id: String,
    pub nav_links: String,
    /// Zoomable logo. Clicks anywhere inside it, or inside `logo_wrapper`, toggle the zoom.
    pub logo: String,
    pub logo_wrapper: String,
    pub overlay: String,
    /// In-page anchors that scroll smoothly.
    pub anchors: String,
    pub scrolled_threshold_px: f64,
    pub hide_threshold_px: f64,
    pub fade_duration_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_toggle: "#theme-toggle".into(),
            theme_icon: "#theme-toggle i".into(),
            hamburger_id: "hamburger".into(),
            menu_id: "nav-menu".into(),
            navbar_id: "navbar".into(),
            nav_links: ".nav-link".into(),
            logo: ".nav-logo".into(),
            logo_wrapper: ".nav-logo-wrapper".into(),
            overlay: ".nav-overlay".into(),
            anchors: "a[href^=\"#\"]".into(),
            scrolled_threshold_px: SCROLLED_THRESHOLD_PX,
            hide_threshold_px: HIDE_THRESHOLD_PX,
            fade_duration_ms: FADE_DURATION_MS,
        }
    }
}
