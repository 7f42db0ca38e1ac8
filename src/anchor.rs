//! Smooth scrolling for in-page anchors.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

use crate::dom::Dom;

/// The element id an anchor `href` points at. The bare `"#"` points nowhere.
#[must_use]
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll to the anchor's target. Returns whether the default jump should
/// be prevented, which is only when a target exists.
#[must_use]
pub fn scroll_to_anchor<D: Dom>(dom: &D, href: &str) -> bool {
    let Some(target) = anchor_target_id(href).and_then(|id| dom.element_by_id(id)) else {
        return false;
    };
    dom.scroll_into_view(&target);
    true
}
