//! One-shot reveal of section titles and cards as they scroll into view.
//!
//! Elements carrying the `reveal` class stay hidden until at least
//! [`config::REVEAL_VISIBLE_FRACTION`] of them is on screen, then get
//! `in-view` (which starts their CSS animation) and are no longer watched.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

pub const REVEAL_CLASS: &str = "reveal";
pub const IN_VIEW_CLASS: &str = "in-view";

pub fn should_reveal(is_intersecting: bool, visible_ratio: f64) -> bool {
    is_intersecting && visible_ratio >= config::REVEAL_VISIBLE_FRACTION
}

fn reveal_targets(container: &Element) -> Vec<Element> {
    let Ok(nodes) = container.query_selector_all(&format!(".{}", REVEAL_CLASS)) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn mark_in_view(element: &Element) {
    let _ = element.class_list().add_1(IN_VIEW_CLASS);
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn watch(container: &Element) -> Option<Self> {
        let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if should_reveal(entry.is_intersecting(), entry.intersection_ratio()) {
                    let target = entry.target();
                    mark_in_view(&target);
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config::REVEAL_VISIBLE_FRACTION));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

        for target in reveal_targets(container) {
            observer.observe(&target);
        }
        Some(Self { observer, _callback: callback })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watches every `.reveal` element under `container` until it has been shown.
#[hook]
pub fn use_reveal_on_scroll(container: NodeRef) {
    use_effect_with_deps(
        move |_| {
            let observer = container.cast::<Element>().and_then(|element| {
                let observer = RevealObserver::watch(&element);
                if observer.is_none() {
                    // Without an observer, show everything rather than leave it hidden.
                    warn!("IntersectionObserver unavailable, revealing content immediately");
                    reveal_targets(&element).iter().for_each(mark_in_view);
                }
                observer
            });
            move || drop(observer)
        },
        (),
    );
}
