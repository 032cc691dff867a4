use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::error::DomError;

pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

pub fn page_y_offset() -> Result<f64, DomError> {
    Ok(window()?.page_y_offset()?)
}

/// Sets an inline style property. An empty value removes it.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), DomError> {
    element.style().set_property(property, value)?;
    Ok(())
}

fn supports_intersection_observer() -> bool {
    web_sys::window()
        .and_then(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).ok())
        .unwrap_or(false)
}

/// True on touch-first devices, where pointer-driven effects are skipped.
pub fn is_coarse_pointer() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(COARSE_POINTER_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn preload_images(paths: &[String]) -> Result<(), DomError> {
    for path in paths {
        let image = HtmlImageElement::new()?;
        image.set_src(path);
        debug!("Preloading {}", path);
    }
    Ok(())
}

/// An IntersectionObserver that fires its callback at most once and then
/// stops watching. Dropping it disconnects the observer.
pub struct VisibilityWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn run_pending<F: FnOnce()>(slot: &RefCell<Option<F>>) -> bool {
    let pending = slot.borrow_mut().take();
    match pending {
        Some(on_visible) => {
            on_visible();
            true
        }
        None => false,
    }
}

/// Runs `on_visible` the first time at least `threshold` of `element` is in
/// the viewport. Without a working observer it runs right away, so watched
/// content never stays hidden.
pub fn when_visible<F>(element: &Element, threshold: f64, on_visible: F) -> Option<VisibilityWatch>
where
    F: FnOnce() + 'static,
{
    let pending = Rc::new(RefCell::new(Some(on_visible)));
    if !supports_intersection_observer() {
        run_pending(&pending);
        return None;
    }

    match watch_visible_once(element, threshold, pending.clone()) {
        Ok(watch) => Some(watch),
        Err(e) => {
            debug!("Observer not created, showing immediately: {}", e);
            run_pending(&pending);
            None
        }
    }
}

fn watch_visible_once<F>(
    element: &Element,
    threshold: f64,
    pending: Rc<RefCell<Option<F>>>,
) -> Result<VisibilityWatch, DomError>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            observer.unobserve(&entry.target());
            run_pending(&pending);
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin("0px");

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(VisibilityWatch {
        observer,
        _callback: callback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn pending_callback_runs_only_once() {
        let runs = Rc::new(Cell::new(0));
        let counted = runs.clone();
        let slot = RefCell::new(Some(move || counted.set(counted.get() + 1)));

        // An observer that failed to build and a later intersection both
        // reach the same slot.
        assert!(run_pending(&slot));
        assert!(!run_pending(&slot));
        assert_eq!(runs.get(), 1);
    }
}
