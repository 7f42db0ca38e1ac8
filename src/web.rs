//! Browser binding: `web-sys` implementations of the DOM and storage seams,
//! and the event wiring that drives [`SiteChrome`].
//!
//! Listeners live for the whole page, so their closures are leaked with
//! `forget`. Page-leave navigation after a fade is a forgotten
//! `gloo_timers` timeout with no cancellation hook.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Storage, Window,
};

use crate::chrome::{Action, SiteChrome};
use crate::config::SiteConfig;
use crate::dom::{Dom, PreferenceStore};
use crate::error::ChromeError;
use crate::input::Key;

/// The live document.
#[derive(Clone)]
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] outside a browser document.
    pub fn new() -> Result<Self, ChromeError> {
        let window = web_sys::window().ok_or_else(|| ChromeError::Dom("no window".into()))?;
        let document = window.document().ok_or_else(|| ChromeError::Dom("no document".into()))?;
        Ok(Self { window, document })
    }

    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(offset) => offset,
            Err(_) => self.document.document_element().map_or(0.0, |root| f64::from(root.scroll_top())),
        }
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn document_element(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn query(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("bad selector {selector}: {err:?}");
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("bad selector {selector}: {err:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn create_element(&self, tag: &str) -> Result<Element, ChromeError> {
        Ok(self.document.create_element(tag)?)
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<(), ChromeError> {
        parent.append_child(child)?;
        Ok(())
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) -> Result<(), ChromeError> {
        Ok(node.set_attribute(name, value)?)
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) -> Result<(), ChromeError> {
        Ok(node.class_list().add_1(class)?)
    }

    fn remove_class(&self, node: &Element, class: &str) -> Result<(), ChromeError> {
        Ok(node.class_list().remove_1(class)?)
    }

    fn set_class_name(&self, node: &Element, value: &str) {
        node.set_class_name(value);
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) -> Result<(), ChromeError> {
        let html = node
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| ChromeError::Dom(format!("<{}> has no inline style", node.tag_name())))?;
        Ok(html.style().set_property(property, value)?)
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &web_sys::Node = node;
        ancestor.contains(Some(node))
    }

    fn scroll_into_view(&self, node: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        node.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// `window.localStorage`, which may be unavailable (private modes, sandboxed frames).
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("could not read {key}: {err:?}");
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ChromeError> {
        let storage = self.storage.as_ref().ok_or_else(|| ChromeError::Storage("localStorage unavailable".into()))?;
        storage.set_item(key, value).map_err(|err| ChromeError::Storage(format!("{err:?}")))
    }
}

type Chrome = Rc<RefCell<SiteChrome<WebDom, LocalStore>>>;

/// Module entry point: install logging, then bind once the DOM is ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        log::warn!("logger already installed: {err}");
    }

    let dom = match WebDom::new() {
        Ok(dom) => dom,
        Err(err) => {
            log::warn!("page chrome disabled: {err}");
            return;
        }
    };
    if dom.document.ready_state() != "loading" {
        report(mount(dom));
        return;
    }
    let target = dom.document.clone();
    let mut pending = Some(dom);
    report(listen(&target, "DOMContentLoaded", move |_| {
        if let Some(dom) = pending.take() {
            report(mount(dom));
        }
    }));
}

fn mount(dom: WebDom) -> Result<(), ChromeError> {
    let config = SiteConfig::default();
    let store = LocalStore::new(&dom.window);
    let chrome: Chrome = Rc::new(RefCell::new(SiteChrome::bind(dom.clone(), store, &config)));
    report(chrome.borrow().on_load());

    let on_click = Rc::clone(&chrome);
    let window = dom.window.clone();
    listen(&dom.document, "click", move |event| {
        let target = event_element(&event);
        match on_click.borrow().on_click(target.as_ref()) {
            Ok(actions) => perform(&window, &event, actions),
            Err(err) => log::warn!("click not handled: {err}"),
        }
    })?;

    let on_key = Rc::clone(&chrome);
    let window = dom.window.clone();
    listen(&dom.document, "keydown", move |event| {
        let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = Key::from_event_key(&keyboard.key());
        let target = event_element(&event);
        match on_key.borrow().on_key_down(&key, target.as_ref()) {
            Ok(actions) => perform(&window, &event, actions),
            Err(err) => log::warn!("keydown not handled: {err}"),
        }
    })?;

    let on_scroll = Rc::clone(&chrome);
    let scroll_dom = dom.clone();
    listen(&dom.window, "scroll", move |_| {
        let offset = scroll_dom.scroll_offset();
        if let Err(err) = on_scroll.borrow_mut().on_scroll(offset) {
            log::warn!("navbar not updated: {err}");
        }
    })?;

    log::info!("page chrome mounted");
    Ok(())
}

fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), ChromeError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn perform(window: &Window, event: &Event, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::PreventDefault => event.prevent_default(),
            Action::Navigate { href } => {
                event.prevent_default();
                navigate(window, &href);
            }
            Action::NavigateAfter { href, delay_ms } => {
                event.prevent_default();
                let window = window.clone();
                Timeout::new(delay_ms, move || navigate(&window, &href)).forget();
            }
        }
    }
}

fn navigate(window: &Window, href: &str) {
    if let Err(err) = window.location().set_href(href) {
        log::warn!("navigation to {href} failed: {err:?}");
    }
}

fn report(result: Result<(), ChromeError>) {
    if let Err(err) = result {
        log::warn!("{err}");
    }
}
