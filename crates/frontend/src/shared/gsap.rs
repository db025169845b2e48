//! GSAP binding of the animation engine.
//!
//! `gsap`, `ScrollTrigger` and `ScrollToPlugin` are loaded by `index.html` as globals.

use std::cell::RefCell;

use contracts::shared::animation::{AnimTarget, AnimationEngine, Ease, Props, ScrollRange, Tween};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

#[wasm_bindgen]
extern "C" {
    type GsapTween;

    #[wasm_bindgen(method, js_name = kill)]
    fn kill_tween(this: &GsapTween);

    #[wasm_bindgen(method, getter, js_name = scrollTrigger)]
    fn scroll_trigger(this: &GsapTween) -> Option<ScrollTriggerInstance>;

    type ScrollTriggerInstance;

    #[wasm_bindgen(method, js_name = kill)]
    fn kill_trigger(this: &ScrollTriggerInstance);

    #[wasm_bindgen(js_namespace = gsap, js_name = set)]
    fn gsap_set(targets: &JsValue, vars: &JsValue);

    #[wasm_bindgen(js_namespace = gsap, js_name = to)]
    fn gsap_to(targets: &JsValue, vars: &JsValue) -> GsapTween;

    #[wasm_bindgen(js_namespace = gsap, js_name = killTweensOf)]
    fn gsap_kill_tweens_of(targets: &JsValue);

    #[wasm_bindgen(js_namespace = ScrollTrigger, js_name = refresh)]
    fn scroll_trigger_refresh();

    #[wasm_bindgen(js_namespace = ["gsap", "globalTimeline"], js_name = pause)]
    fn global_timeline_pause();

    #[wasm_bindgen(js_namespace = ["gsap", "globalTimeline"], js_name = resume)]
    fn global_timeline_resume();
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Vars<'a> {
    #[serde(flatten)]
    props: &'a Props,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ease: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scroll_trigger: Option<TriggerVars>,
}

#[derive(Serialize)]
struct TriggerVars {
    start: f64,
    end: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    scrub: Option<f64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScrollToVars {
    scroll_to: f64,
    duration: f64,
    ease: &'static str,
}

fn seconds(ms: u32) -> f64 {
    f64::from(ms) / 1000.0
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer).unwrap_or_else(|err| {
        log::warn!("gsap vars not serializable: {err}");
        JsValue::UNDEFINED
    })
}

/// Drives the book through GSAP. Targets are resolved once, when the engine is built.
pub struct GsapEngine {
    pages: Vec<Element>,
    book: Option<Element>,
    flying_content: Option<Element>,
    scroll_tweens: RefCell<Vec<GsapTween>>,
}

impl GsapEngine {
    pub fn from_document(document: &Document) -> Self {
        let mut pages = Vec::new();
        if let Ok(nodes) = document.query_selector_all(".book__page") {
            for i in 0..nodes.length() {
                if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                    pages.push(el);
                }
            }
        }
        Self {
            pages,
            book: document.query_selector(".book").ok().flatten(),
            flying_content: document.get_element_by_id("flyingContent"),
            scroll_tweens: RefCell::new(Vec::new()),
        }
    }

    fn element(&self, target: AnimTarget) -> Option<JsValue> {
        let el = match target {
            AnimTarget::Page(index) => self.pages.get(index),
            AnimTarget::Book => self.book.as_ref(),
            AnimTarget::FlyingContent => self.flying_content.as_ref(),
        };
        if el.is_none() {
            log::debug!("gsap: no element for {target:?}");
        }
        el.map(JsValue::from)
    }
}

impl AnimationEngine for GsapEngine {
    fn set(&self, target: AnimTarget, props: &Props) {
        if let Some(el) = self.element(target) {
            let vars = Vars {
                props,
                duration: None,
                ease: None,
                scroll_trigger: None,
            };
            gsap_set(&el, &to_js(&vars));
        }
    }

    fn tween(&self, target: AnimTarget, props: &Props, tween: Tween) {
        let Some(el) = self.element(target) else {
            return;
        };
        // a new tween on the overlay replaces whatever transition is still running
        if target == AnimTarget::FlyingContent {
            gsap_kill_tweens_of(&el);
        }
        let vars = Vars {
            props,
            duration: Some(seconds(tween.duration_ms)),
            ease: Some(tween.ease.as_gsap()),
            scroll_trigger: None,
        };
        gsap_to(&el, &to_js(&vars));
    }

    fn bind_to_scroll(&self, target: AnimTarget, props: &Props, range: ScrollRange) {
        let Some(el) = self.element(target) else {
            return;
        };
        let vars = Vars {
            props,
            duration: Some(1.0),
            ease: Some(Ease::Linear.as_gsap()),
            scroll_trigger: Some(TriggerVars {
                start: range.start,
                end: range.end,
                scrub: range.scrub,
            }),
        };
        let tween = gsap_to(&el, &to_js(&vars));
        self.scroll_tweens.borrow_mut().push(tween);
    }

    fn clear_scroll_bindings(&self) {
        for tween in self.scroll_tweens.borrow_mut().drain(..) {
            if let Some(trigger) = tween.scroll_trigger() {
                trigger.kill_trigger();
            }
            tween.kill_tween();
        }
    }

    fn refresh(&self) {
        scroll_trigger_refresh();
    }

    fn scroll_to(&self, offset: f64, tween: Tween) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let vars = ScrollToVars {
            scroll_to: offset,
            duration: seconds(tween.duration_ms),
            ease: tween.ease.as_gsap(),
        };
        gsap_to(&JsValue::from(window), &to_js(&vars));
    }

    fn set_paused(&self, paused: bool) {
        if paused {
            global_timeline_pause();
        } else {
            global_timeline_resume();
        }
    }
}
