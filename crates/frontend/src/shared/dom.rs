//! Small DOM helpers: startup scans of the rendered book and window listeners.

use contracts::domain::b003_flying_content::TopicKey;
use contracts::domain::b005_book::Viewport;
use contracts::BookError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, EventTarget, Window};

/// Attributes that carry a topic key on a click target.
pub const TOPIC_ATTRIBUTES: [&str; 8] = [
    "data-about-topic",
    "data-page-content",
    "data-journey-content",
    "data-skills-content",
    "data-skill-topic",
    "data-flying",
    "data-target",
    "data-design",
];

fn elements(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

/// `data-page-id` of every `.book__page`, in document order.
pub fn page_ids(document: &Document) -> Vec<Option<String>> {
    elements(document, ".book__page")
        .iter()
        .map(|page| page.get_attribute("data-page-id"))
        .collect()
}

/// Every topic key the markup carries, plus the attributes that did not parse.
pub fn topic_keys(document: &Document) -> (Vec<TopicKey>, Vec<BookError>) {
    let mut keys = Vec::new();
    let mut problems = Vec::new();
    for name in TOPIC_ATTRIBUTES {
        for element in elements(document, &format!("[{name}]")) {
            let value = element.get_attribute(name).unwrap_or_default();
            match TopicKey::from_attribute(name, &value) {
                Ok(key) => keys.push(key),
                Err(err) => problems.push(err),
            }
        }
    }
    (keys, problems)
}

pub fn viewport(window: &Window) -> Viewport {
    let dimension = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or_default()
    };
    Viewport {
        width: dimension(window.inner_width()),
        height: dimension(window.inner_height()),
    }
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or_default()
}

pub fn set_body_class(document: &Document, class: &str, on: bool) {
    if let Some(body) = document.body() {
        let _ = body.class_list().toggle_with_force(class, on);
    }
}

/// Attach a listener for the lifetime of the page.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    // The book lives as long as the page; keep the closure alive.
    closure.forget();
}
