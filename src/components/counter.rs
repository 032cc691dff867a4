use std::fmt::Display;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config::use_landing_config;
use crate::dom;
use crate::error::DomError;

pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Formats with `,` between groups of three digits.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterFrame {
    pub value: u64,
    pub done: bool,
}

/// A 0-to-target count-up started at `started_at` (milliseconds on the
/// animation-frame clock).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    duration_ms: f64,
    started_at: f64,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: f64, started_at: f64) -> Self {
        Self {
            target,
            duration_ms,
            started_at,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn progress(&self, now: f64) -> f64 {
        if !(self.duration_ms > 0.0) {
            return 1.0;
        }
        let progress = (now - self.started_at) / self.duration_ms;
        if progress.is_nan() {
            1.0
        } else {
            progress.clamp(0.0, 1.0)
        }
    }

    pub fn frame_at(&self, now: f64) -> CounterFrame {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return CounterFrame {
                value: self.target,
                done: true,
            };
        }
        let value = (self.target as f64 * ease_out_cubic(progress)).floor() as u64;
        CounterFrame {
            value: value.min(self.target),
            done: false,
        }
    }
}

/// Shows the final value when no frames can be scheduled.
fn jump_to_target(animation: &CounterAnimation, on_value: &dyn Fn(u64), reason: &dyn Display) {
    debug!("Counter jumps to target: {}", reason);
    on_value(animation.target());
}

fn request_frames(animation: CounterAnimation, on_value: Rc<dyn Fn(u64)>) {
    let window = match dom::window() {
        Ok(window) => window,
        Err(e) => return jump_to_target(&animation, on_value.as_ref(), &e),
    };

    let on_frame = on_value.clone();
    let step = Closure::once_into_js(move |now: f64| {
        let frame = animation.frame_at(now);
        on_frame(frame.value);
        if !frame.done {
            request_frames(animation, on_frame);
        }
    });

    if let Err(e) = window.request_animation_frame(step.unchecked_ref()) {
        jump_to_target(&animation, on_value.as_ref(), &DomError::from(e));
    }
}

pub fn animate_counter(target: u64, duration_ms: f64, on_value: Rc<dyn Fn(u64)>) {
    let started_at = dom::window()
        .ok()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_default();
    request_frames(CounterAnimation::new(target, duration_ms, started_at), on_value);
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u64,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let config = use_landing_config();
    let node_ref = use_node_ref();
    let shown = use_state_eq(|| 0u64);

    {
        let node_ref = node_ref.clone();
        let shown = shown.clone();
        let target = props.target;
        let duration_ms = config.counter_duration_ms;
        let threshold = config.counter_threshold;
        use_effect_with_deps(
            move |_| {
                let start = move || {
                    animate_counter(target, duration_ms, Rc::new(move |value: u64| shown.set(value)))
                };
                let watch = match node_ref.cast::<Element>() {
                    None => {
                        debug!("Counter target not mounted");
                        None
                    }
                    Some(element) => dom::when_visible(&element, threshold, start),
                };
                move || drop(watch)
            },
            (),
        );
    }

    html! {
        <span
            ref={node_ref}
            class={classes!("stat-number", props.class.clone())}
            data-count={props.target.to_string()}
        >
            { format_thousands(*shown) }{ props.suffix.clone() }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;

    #[test]
    fn ease_hits_both_ends() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(50000), "50,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn zero_duration_finishes_on_first_frame() {
        let animation = CounterAnimation::new(5000, 0.0, 10.0);
        assert_eq!(animation.frame_at(10.0), CounterFrame { value: 5000, done: true });
    }

    #[test]
    fn frame_before_start_shows_zero() {
        let animation = CounterAnimation::new(5000, 2000.0, 100.0);
        assert_eq!(animation.frame_at(90.0), CounterFrame { value: 0, done: false });
    }

    #[test]
    fn halfway_uses_eased_value() {
        let animation = CounterAnimation::new(1000, 2000.0, 0.0);
        assert_eq!(animation.frame_at(1000.0), CounterFrame { value: 875, done: false });
    }

    #[test]
    fn unscheduled_animation_shows_final_value() {
        let shown = RefCell::new(Vec::new());
        let animation = CounterAnimation::new(50_000, 2000.0, 0.0);

        jump_to_target(&animation, &|value: u64| shown.borrow_mut().push(value), &DomError::NoWindow);

        assert_eq!(*shown.borrow(), vec![50_000]);
    }

    proptest! {
        #[test]
        fn ends_exactly_on_target(target in 0u64..10_000_000, duration in 0.0f64..10_000.0) {
            let animation = CounterAnimation::new(target, duration, 0.0);
            let frame = animation.frame_at(duration + 1.0);
            prop_assert!(frame.done);
            prop_assert_eq!(frame.value, target);
        }

        #[test]
        fn values_never_decrease(
            target in 0u64..10_000_000,
            duration in 1.0f64..10_000.0,
            times in proptest::collection::vec(0.0f64..12_000.0, 1..50),
        ) {
            let mut times = times;
            times.sort_by(|a, b| a.partial_cmp(b).unwrap());
            let animation = CounterAnimation::new(target, duration, 0.0);
            let mut last = 0;
            for now in times {
                let frame = animation.frame_at(now);
                prop_assert!(frame.value >= last);
                prop_assert!(frame.value <= target);
                last = frame.value;
            }
        }
    }
}
