//! Shared constants for the page chrome.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on the root `<html>` element that the stylesheet keys off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Full icon class for the dark theme.
pub const ICON_CLASS_DARK: &str = "fas fa-moon";

/// Full icon class for the light theme.
pub const ICON_CLASS_LIGHT: &str = "fas fa-sun";

// ── Class names ─────────────────────────────────────────────────

/// Open menu panel / visible overlay.
pub const ACTIVE_CLASS: &str = "active";

/// Zoomed logo.
pub const EXPANDED_CLASS: &str = "expanded";

/// Navbar past the styling threshold.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Class given to a lazily created overlay element.
pub const OVERLAY_CLASS: &str = "nav-overlay";

// ── Navbar ──────────────────────────────────────────────────────

/// Offset (px) above which the navbar gets the `scrolled` class.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Offset (px) above which scrolling down hides the navbar.
pub const HIDE_THRESHOLD_PX: f64 = 80.0;

/// Transform that moves the navbar off-screen.
pub const NAVBAR_HIDDEN_TRANSFORM: &str = "translateY(-110%)";

/// Transform that restores the navbar.
pub const NAVBAR_VISIBLE_TRANSFORM: &str = "translateY(0)";

// ── Transitions ─────────────────────────────────────────────────

/// Fade duration before following a navigation link.
pub const FADE_DURATION_MS: u32 = 280;

/// Body attribute that disables the fade when set to `"true"`.
pub const NO_TRANSITION_ATTRIBUTE: &str = "data-no-transition";
