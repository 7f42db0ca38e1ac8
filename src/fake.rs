//! In-memory document and storage used by the unit tests.
//!
//! Nodes live in an arena indexed by [`NodeId`]. Node 0 is `<html>` and
//! node 1 is `<body>`. Selector support covers what the page chrome uses:
//! comma lists, descendant combinators, and compounds of a tag, `#id`,
//! `.class`, and `[attr^="prefix"]` / `[attr="value"]`.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::dom::{Dom, PreferenceStore};
use crate::error::ChromeError;

pub type NodeId = usize;

pub const HTML: NodeId = 0;
pub const BODY: NodeId = 1;

#[derive(Debug, Default, Clone)]
struct FakeNode {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    parent: Option<NodeId>,
}

/// Clones share the same document.
#[derive(Debug, Clone)]
pub struct FakeDom {
    nodes: Rc<RefCell<Vec<FakeNode>>>,
    /// When set, every `set_style` call fails.
    pub refuse_styles: Rc<Cell<bool>>,
    scrolled: Rc<RefCell<Vec<NodeId>>>,
}

impl FakeDom {
    pub fn new() -> Self {
        let html = FakeNode { tag: "html".into(), ..FakeNode::default() };
        let body = FakeNode { tag: "body".into(), parent: Some(HTML), ..FakeNode::default() };
        Self {
            nodes: Rc::new(RefCell::new(vec![html, body])),
            refuse_styles: Rc::new(Cell::new(false)),
            scrolled: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Append a new element under `parent`. `attrs` may include `id` and `class`.
    pub fn add(&self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let mut node = FakeNode { tag: tag.into(), parent: Some(parent), ..FakeNode::default() };
        for (name, value) in attrs {
            if *name == "class" {
                node.classes = value.split_whitespace().map(str::to_owned).collect();
            } else {
                node.attrs.insert((*name).to_owned(), (*value).to_owned());
            }
        }
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        nodes.len() - 1
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[node].styles.get(property).cloned()
    }

    pub fn class_name(&self, node: NodeId) -> String {
        self.nodes.borrow()[node].classes.join(" ")
    }

    pub fn scrolled_into_view(&self) -> Vec<NodeId> {
        self.scrolled.borrow().clone()
    }

    pub fn children_of(&self, parent: NodeId) -> Vec<NodeId> {
        self.nodes.borrow().iter().enumerate().filter(|(_, n)| n.parent == Some(parent)).map(|(i, _)| i).collect()
    }

    fn is_attached(&self, node: NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = Some(node);
        while let Some(id) = current {
            if id == HTML {
                return true;
            }
            current = nodes[id].parent;
        }
        false
    }

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        selector.split(',').map(str::trim).filter(|s| !s.is_empty()).any(|complex| self.matches_complex(node, complex))
    }

    fn matches_complex(&self, node: NodeId, complex: &str) -> bool {
        let parts: Vec<&str> = complex.split_whitespace().collect();
        let Some((last, ancestors)) = parts.split_last() else {
            return false;
        };
        if !self.matches_compound(node, last) {
            return false;
        }
        let nodes = self.nodes.borrow();
        let mut current = nodes[node].parent;
        for part in ancestors.iter().rev() {
            loop {
                let Some(id) = current else {
                    return false;
                };
                current = nodes[id].parent;
                if compound_matches(&nodes[id], part) {
                    break;
                }
            }
        }
        true
    }

    fn matches_compound(&self, node: NodeId, compound: &str) -> bool {
        compound_matches(&self.nodes.borrow()[node], compound)
    }
}

fn compound_matches(node: &FakeNode, compound: &str) -> bool {
    let tag_end = compound.find(['#', '.', '[']).unwrap_or(compound.len());
    let tag = &compound[..tag_end];
    if !tag.is_empty() && tag != node.tag {
        return false;
    }
    let mut rest = &compound[tag_end..];
    while !rest.is_empty() {
        if let Some(attr) = rest.strip_prefix('[') {
            let Some(close) = attr.find(']') else {
                return false;
            };
            if !attr_matches(node, &attr[..close]) {
                return false;
            }
            rest = &attr[close + 1..];
            continue;
        }
        let marker = &rest[..1];
        let body = &rest[1..];
        let end = body.find(['#', '.', '[']).unwrap_or(body.len());
        let name = &body[..end];
        let ok = match marker {
            "#" => node.attrs.get("id").is_some_and(|id| id == name),
            "." => node.classes.iter().any(|c| c == name),
            _ => false,
        };
        if !ok {
            return false;
        }
        rest = &body[end..];
    }
    true
}

fn attr_matches(node: &FakeNode, expr: &str) -> bool {
    let unquote = |v: &str| v.trim_matches('"').to_owned();
    if let Some((name, value)) = expr.split_once("^=") {
        node.attrs.get(name).is_some_and(|v| v.starts_with(&unquote(value)))
    } else if let Some((name, value)) = expr.split_once('=') {
        node.attrs.get(name).is_some_and(|v| *v == unquote(value))
    } else {
        node.attrs.contains_key(expr)
    }
}

impl Dom for FakeDom {
    type Node = NodeId;

    fn document_element(&self) -> Option<NodeId> {
        Some(HTML)
    }

    fn body(&self) -> Option<NodeId> {
        Some(BODY)
    }

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let count = self.nodes.borrow().len();
        (0..count).filter(|&id| self.is_attached(id) && self.matches(id, selector)).collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.query(&format!("#{id}"))
    }

    fn create_element(&self, tag: &str) -> Result<NodeId, ChromeError> {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode { tag: tag.into(), ..FakeNode::default() });
        Ok(nodes.len() - 1)
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<(), ChromeError> {
        self.nodes.borrow_mut()[*child].parent = Some(*parent);
        Ok(())
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let nodes = self.nodes.borrow();
        if name == "class" {
            return Some(nodes[*node].classes.join(" "));
        }
        nodes[*node].attrs.get(name).cloned()
    }

    fn set_attribute(&self, node: &NodeId, name: &str, value: &str) -> Result<(), ChromeError> {
        self.nodes.borrow_mut()[*node].attrs.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[*node].classes.iter().any(|c| c == class)
    }

    fn add_class(&self, node: &NodeId, class: &str) -> Result<(), ChromeError> {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[*node].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
        Ok(())
    }

    fn remove_class(&self, node: &NodeId, class: &str) -> Result<(), ChromeError> {
        self.nodes.borrow_mut()[*node].classes.retain(|c| c != class);
        Ok(())
    }

    fn set_class_name(&self, node: &NodeId, value: &str) {
        self.nodes.borrow_mut()[*node].classes = value.split_whitespace().map(str::to_owned).collect();
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) -> Result<(), ChromeError> {
        if self.refuse_styles.get() {
            return Err(ChromeError::Dom("style writes refused".into()));
        }
        let mut nodes = self.nodes.borrow_mut();
        if value.is_empty() {
            nodes[*node].styles.remove(property);
        } else {
            nodes[*node].styles.insert(property.to_owned(), value.to_owned());
        }
        Ok(())
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = Some(*node);
        while let Some(id) = current {
            if id == *ancestor {
                return true;
            }
            current = nodes[id].parent;
        }
        false
    }

    fn scroll_into_view(&self, node: &NodeId) {
        self.scrolled.borrow_mut().push(*node);
    }
}

/// `localStorage` stand-in. Clones share the same entries.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    /// When set, every `save` call fails.
    pub refuse_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ChromeError> {
        if self.refuse_writes.get() {
            return Err(ChromeError::Storage("quota exceeded".into()));
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// The markup the site ships, minus content.
pub struct Page {
    pub dom: FakeDom,
    pub theme_toggle: NodeId,
    pub theme_icon: NodeId,
    pub navbar: NodeId,
    pub logo_wrapper: NodeId,
    pub logo: NodeId,
    pub logo_img: NodeId,
    pub hamburger: NodeId,
    pub menu: NodeId,
    pub about_link: NodeId,
    pub projects_link: NodeId,
    pub bare_hash_link: NodeId,
    pub about_section: NodeId,
    pub content: NodeId,
}

impl Page {
    pub fn new() -> Self {
        let dom = FakeDom::new();
        let navbar = dom.add(BODY, "nav", &[("id", "navbar"), ("class", "navbar")]);
        let logo_wrapper = dom.add(navbar, "a", &[("class", "nav-logo-wrapper"), ("href", "#")]);
        let logo = dom.add(logo_wrapper, "div", &[("class", "nav-logo")]);
        let logo_img = dom.add(logo, "img", &[("src", "profile.jpg")]);
        let hamburger = dom.add(navbar, "button", &[("id", "hamburger"), ("aria-expanded", "false")]);
        let menu = dom.add(navbar, "ul", &[("id", "nav-menu"), ("class", "nav-menu")]);
        let about_item = dom.add(menu, "li", &[]);
        let about_link = dom.add(about_item, "a", &[("class", "nav-link"), ("href", "#about")]);
        let projects_item = dom.add(menu, "li", &[]);
        let projects_link = dom.add(projects_item, "a", &[("class", "nav-link"), ("href", "projects.html")]);
        let theme_toggle = dom.add(navbar, "button", &[("id", "theme-toggle")]);
        let theme_icon = dom.add(theme_toggle, "i", &[("class", "fas fa-moon")]);
        let content = dom.add(BODY, "main", &[]);
        let about_section = dom.add(content, "section", &[("id", "about")]);
        let bare_hash_link = dom.add(content, "a", &[("href", "#")]);
        Self {
            dom,
            theme_toggle,
            theme_icon,
            navbar,
            logo_wrapper,
            logo,
            logo_img,
            hamburger,
            menu,
            about_link,
            projects_link,
            bare_hash_link,
            about_section,
            content,
        }
    }
}
