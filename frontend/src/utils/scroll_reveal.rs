use js_sys::Array;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Elements carrying any of these classes start hidden and animate in.
const SELECTOR: &str = ".animate-on-scroll, .fade-in-up, .fade-in-left, .fade-in-right, .scale-in";
const ANIMATED_CLASS: &str = "animated";
const THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Adds `animated` to each revealable element the first time it scrolls
/// into view. Disconnects the observer on drop.
pub struct ScrollReveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ScrollReveal {
    pub fn attach(document: &Document) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Err(e) = target.class_list().add_1(ANIMATED_CLASS) {
                        log::warn!("Failed to mark element animated: {:?}", e);
                    }
                    observer.unobserve(&target);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(THRESHOLD));
        options.set_root_margin(ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let nodes = document.query_selector_all(SELECTOR)?;
        let mut observed = 0;
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&element);
                observed += 1;
            }
        }
        log::debug!("Scroll reveal observing {} elements", observed);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Registers scroll reveal once when the calling component mounts and tears
/// it down when it unmounts.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        |_| {
            let reveal = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|document| match ScrollReveal::attach(&document) {
                    Ok(reveal) => Some(reveal),
                    Err(e) => {
                        log::error!("Failed to set up scroll animations: {:?}", e);
                        None
                    }
                });
            move || drop(reveal)
        },
        (),
    );
}
