use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Window};
use yew::prelude::*;

use crate::dom;
use crate::error::DomError;

/// "Already scheduled, skip" flag shared by one effect's handlers.
#[derive(Clone, Debug, Default)]
pub struct FrameGate {
    ticking: Rc<Cell<bool>>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the next frame. False while a frame is already pending.
    pub fn try_acquire(&self) -> bool {
        !self.ticking.replace(true)
    }

    pub fn release(&self) {
        self.ticking.set(false);
    }
}

pub fn schedule_frame<F>(gate: &FrameGate, update: F)
where
    F: FnOnce() + 'static,
{
    if !gate.try_acquire() {
        return;
    }

    let gate_for_frame = gate.clone();
    let callback = Closure::once_into_js(move || {
        update();
        gate_for_frame.release();
    });

    let requested = dom::window().and_then(|window| {
        window
            .request_animation_frame(callback.unchecked_ref())
            .map_err(DomError::from)
    });
    if let Err(e) = requested {
        debug!("Animation frame unavailable: {}", e);
        gate.release();
    }
}

/// Passive window scroll listener that funnels events into one update per
/// frame. Removed from the window on drop.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    /// Runs `on_frame` once immediately, then on every coalesced scroll.
    pub fn attach<F>(on_frame: F) -> Result<Self, DomError>
    where
        F: Fn() + 'static,
    {
        let window = dom::window()?;
        let gate = FrameGate::new();
        let on_frame = Rc::new(on_frame);

        on_frame();

        let callback = Closure::wrap(Box::new(move || {
            let on_frame = on_frame.clone();
            schedule_frame(&gate, move || on_frame());
        }) as Box<dyn FnMut()>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            callback.as_ref().unchecked_ref(),
            &options,
        )?;

        Ok(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            debug!("Scroll listener not removed: {:?}", e);
        }
    }
}

#[hook]
pub fn use_scroll_frame<F>(enabled: bool, on_frame: F)
where
    F: Fn() + 'static,
{
    use_effect_with_deps(
        move |enabled| {
            let listener = if *enabled {
                ScrollListener::attach(on_frame)
                    .map_err(|e| debug!("Scroll listener not attached: {}", e))
                    .ok()
            } else {
                None
            };
            move || drop(listener)
        },
        enabled,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_admits_one_frame_until_released() {
        let gate = FrameGate::new();
        assert!(gate.try_acquire());
        assert!(!gate.try_acquire());

        gate.release();
        assert!(gate.try_acquire());
    }

    #[test]
    fn clones_share_the_flag() {
        let gate = FrameGate::new();
        let other = gate.clone();
        assert!(gate.try_acquire());
        assert!(!other.try_acquire());
        other.release();
        assert!(gate.try_acquire());
    }
}
