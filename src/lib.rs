//! Page chrome for a static portfolio site, compiled to WebAssembly.
//!
//! This crate owns the small amount of behavior the site's markup needs:
//! a persisted dark/light theme, the mobile navigation menu, a zoomable
//! profile logo with a dimming overlay, navbar hide-on-scroll, smooth
//! in-page anchor scrolling, and a fade-out transition before following a
//! navigation link.
//!
//! All decisions are made against the [`dom::Dom`] trait so they can be
//! tested natively. The browser binding lives in [`web`] and is only
//! compiled with the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`chrome`] | Bound controller ([`chrome::SiteChrome`]) and host [`chrome::Action`]s |
//! | [`theme`] | Theme preference and root attribute / icon updates |
//! | [`menu`] | Mobile menu open/close and scroll lock |
//! | [`zoom`] | Logo zoom overlay |
//! | [`navbar`] | Scroll-direction navbar rule |
//! | [`transition`] | Page fade in/out around navigation |
//! | [`anchor`] | Smooth scrolling to in-page anchors |
//! | [`input`] | Keyboard key classification |
//! | [`dom`] | DOM and storage seams, `is_within`, guarded scroll lock |
//! | [`config`] | Selectors, thresholds and fade duration |
//! | [`consts`] | Shared constants (storage key, class names, thresholds) |
//! | [`error`] | Crate error type |

pub mod anchor;
pub mod chrome;
pub mod config;
pub mod consts;
pub mod dom;
pub mod error;
pub mod input;
pub mod menu;
pub mod navbar;
pub mod theme;
pub mod transition;
pub mod zoom;

#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(test)]
mod fake;
