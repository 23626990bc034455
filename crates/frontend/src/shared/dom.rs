//! Thin helpers over `web-sys` for the static page markup.

use contracts::shared::locale::Locale;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// `<html>`; querying from it covers the whole document.
pub fn document_root() -> Option<Element> {
    document()?.document_element()
}

/// Runs `f` once the document has been parsed.
pub fn when_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(document) = document() else {
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    if let Err(err) =
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
    {
        log::error!("Failed to wait for DOMContentLoaded: {:?}", err);
    }
}

pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("Invalid selector `{}`", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn text_of(element: &Element) -> String {
    element.text_content().unwrap_or_default()
}

/// Shows or hides an element through its inline `display` style.
pub fn set_displayed(element: &Element, shown: bool) {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    let _ = if shown {
        style.remove_property("display").map(|_| ())
    } else {
        style.set_property("display", "none")
    };
}

pub fn set_document_lang(locale: Locale) {
    if let Some(root) = document_root() {
        let _ = root.set_attribute("lang", locale.as_str());
    }
}

/// Adds an event listener that lives as long as the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(err) = target.add_event_listener_with_callback(
        event,
        closure.as_ref().unchecked_ref::<js_sys::Function>(),
    ) {
        log::error!("Failed to attach `{}` listener: {:?}", event, err);
    }
    closure.forget(); // Keep the closure alive
}
