//! DOM and storage seams.
//!
//! Controllers never touch `web-sys` directly. They hold handles of type
//! [`Dom::Node`] and ask the [`Dom`] to read or mutate them, which lets the
//! same logic run against the browser (`web::WebDom`) and against the
//! in-memory fake used by the tests.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use crate::error::ChromeError;

/// Minimal document surface needed by the page chrome.
pub trait Dom {
    /// Element handle. Cheap to clone.
    type Node: Clone;

    /// The `<html>` element.
    fn document_element(&self) -> Option<Self::Node>;

    /// The `<body>` element.
    fn body(&self) -> Option<Self::Node>;

    /// First element matching `selector`, in document order.
    fn query(&self, selector: &str) -> Option<Self::Node>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// Element by `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Create a detached element with the given tag name.
    fn create_element(&self, tag: &str) -> Result<Self::Node, ChromeError>;

    /// Append `child` as the last child of `parent`.
    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), ChromeError>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<(), ChromeError>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn add_class(&self, node: &Self::Node, class: &str) -> Result<(), ChromeError>;

    fn remove_class(&self, node: &Self::Node, class: &str) -> Result<(), ChromeError>;

    /// Replace the whole `class` attribute.
    fn set_class_name(&self, node: &Self::Node, value: &str);

    /// Set an inline style property. An empty value clears it.
    fn set_style(&self, node: &Self::Node, property: &str, value: &str) -> Result<(), ChromeError>;

    /// Inclusive containment, matching `Node.contains`.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    /// Smoothly scroll `node` into view, aligned to its top edge.
    fn scroll_into_view(&self, node: &Self::Node);
}

/// Durable key-value storage for preferences (`localStorage` in the browser).
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    fn save(&self, key: &str, value: &str) -> Result<(), ChromeError>;
}

/// Whether `node` is `root` or one of its descendants.
///
/// A missing `root` never contains anything, so handlers for elements the
/// page does not have fall through silently.
#[must_use]
pub fn is_within<D: Dom>(dom: &D, node: &D::Node, root: Option<&D::Node>) -> bool {
    root.is_some_and(|root| dom.contains(root, node))
}

/// Lock or release page scrolling by setting `overflow` on the body.
///
/// Failures are swallowed. Restricted contexts may refuse style writes and
/// that must not stop the caller.
pub fn set_scroll_lock<D: Dom>(dom: &D, locked: bool) {
    let Some(body) = dom.body() else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(err) = dom.set_style(&body, "overflow", value) {
        log::debug!("scroll lock ignored: {err}");
    }
}

/// Add `class` when `on`, remove it otherwise.
///
/// # Errors
///
/// Returns the error from the underlying class write.
pub fn set_class<D: Dom>(dom: &D, node: &D::Node, class: &str, on: bool) -> Result<(), ChromeError> {
    if on { dom.add_class(node, class) } else { dom.remove_class(node, class) }
}
