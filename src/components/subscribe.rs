use std::rc::Rc;

use log::debug;
use web_sys::{HtmlInputElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::config::use_landing_config;
use crate::components::toast::use_toast;
use crate::timer::ResetTimer;
use crate::validation::validate_email;

pub const SUCCESS_COLOR: &str = "#22c55e";
pub const ERROR_COLOR: &str = "#ef4444";
pub const INVALID_EMAIL_NOTICE: &str = "Please enter a valid email address";
pub const SUBSCRIBED_NOTICE: &str = "Thanks for subscribing!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubscribeState {
    pub error: bool,
    pub error_generation: u32,
    pub subscribed: bool,
    pub success_generation: u32,
}

pub enum SubscribeAction {
    Rejected { generation: u32 },
    ClearError(u32),
    Edited,
    Accepted { generation: u32 },
    Revert(u32),
}

impl Reducible for SubscribeState {
    type Action = SubscribeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            SubscribeAction::Rejected { generation } => {
                next.error = true;
                next.error_generation = generation;
            }
            SubscribeAction::ClearError(generation) if generation == self.error_generation => {
                next.error = false;
            }
            SubscribeAction::Edited => next.error = false,
            SubscribeAction::Accepted { generation } => {
                next.error = false;
                next.subscribed = true;
                next.success_generation = generation;
            }
            SubscribeAction::Revert(generation) if generation == self.success_generation => {
                next.subscribed = false;
            }
            SubscribeAction::ClearError(_) | SubscribeAction::Revert(_) => return self,
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub fn subscribe_notice(email: &str) -> Result<&'static str, &'static str> {
    validate_email(email)
        .map(|()| SUBSCRIBED_NOTICE)
        .map_err(|_| INVALID_EMAIL_NOTICE)
}

#[function_component(SubscribeForm)]
pub fn subscribe_form() -> Html {
    let config = use_landing_config();
    let toast = use_toast();
    let state = use_reducer_eq(SubscribeState::default);
    let input_ref = use_node_ref();
    let error_timer = use_mut_ref(ResetTimer::default);
    let label_timer = use_mut_ref(ResetTimer::default);

    let submit = {
        let dispatcher = state.dispatcher();
        let input_ref = input_ref.clone();
        let error_timer = error_timer.clone();
        let label_timer = label_timer.clone();
        let reset_ms = config.subscribe_reset_ms;
        Rc::new(move || {
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            match subscribe_notice(&input.value()) {
                Err(notice) => {
                    if let Err(e) = input.focus() {
                        debug!("Subscribe input not focused: {:?}", e);
                    }
                    let clear = dispatcher.clone();
                    let generation = error_timer
                        .borrow_mut()
                        .arm(reset_ms, move |generation| clear.dispatch(SubscribeAction::ClearError(generation)));
                    dispatcher.dispatch(SubscribeAction::Rejected { generation });
                    toast.emit(notice.to_string());
                }
                Ok(notice) => {
                    input.set_value("");
                    error_timer.borrow_mut().cancel();
                    let revert = dispatcher.clone();
                    let generation = label_timer
                        .borrow_mut()
                        .arm(reset_ms, move |generation| revert.dispatch(SubscribeAction::Revert(generation)));
                    dispatcher.dispatch(SubscribeAction::Accepted { generation });
                    toast.emit(notice.to_string());
                }
            }
        })
    };

    use_effect_with_deps(
        move |_| {
            move || {
                error_timer.borrow_mut().cancel();
                label_timer.borrow_mut().cancel();
            }
        },
        (),
    );

    let onclick = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit())
    };

    let onkeypress = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            submit();
        }
    });

    let oninput = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: InputEvent| dispatcher.dispatch(SubscribeAction::Edited))
    };

    let input_style = state.error.then(|| format!("border-color: {}", ERROR_COLOR));
    let button_style = state.subscribed.then(|| format!("background: {}", SUCCESS_COLOR));

    html! {
        <div class="cta-form">
            <input
                ref={input_ref}
                id="emailInput"
                type="email"
                class="cta-input"
                placeholder="Enter your email"
                autocomplete="email"
                style={input_style}
                {oninput}
                {onkeypress}
            />
            <button id="ctaButton" class="btn btn-primary" style={button_style} {onclick}>
                if state.subscribed {
                    <>
                    <svg class="btn-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
                        <polyline points="22 4 12 14.01 9 11.01" />
                    </svg>
                    {"Subscribed!"}
                    </>
                } else {
                    <>
                    {"Get Early Access"}
                    <svg class="btn-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <path d="M5 12h14M12 5l7 7-7 7" />
                    </svg>
                    </>
                }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Rc<SubscribeState> {
        Rc::new(SubscribeState::default())
    }

    #[test]
    fn empty_and_malformed_addresses_get_the_same_notice() {
        assert_eq!(subscribe_notice(""), Err(INVALID_EMAIL_NOTICE));
        assert_eq!(subscribe_notice("a@b"), Err(INVALID_EMAIL_NOTICE));
        assert_eq!(subscribe_notice(" a@b.com "), Ok(SUBSCRIBED_NOTICE));
    }

    #[test]
    fn typing_clears_the_error_border() {
        let state = start().reduce(SubscribeAction::Rejected { generation: 1 });
        assert!(state.error);
        assert!(!state.reduce(SubscribeAction::Edited).error);
    }

    #[test]
    fn stale_error_reset_is_ignored() {
        let state = start()
            .reduce(SubscribeAction::Rejected { generation: 1 })
            .reduce(SubscribeAction::Rejected { generation: 2 })
            .reduce(SubscribeAction::ClearError(1));
        assert!(state.error);
        assert!(!state.reduce(SubscribeAction::ClearError(2)).error);
    }

    #[test]
    fn success_label_reverts_only_for_latest_submit() {
        let state = start()
            .reduce(SubscribeAction::Accepted { generation: 1 })
            .reduce(SubscribeAction::Accepted { generation: 2 })
            .reduce(SubscribeAction::Revert(1));
        assert!(state.subscribed);

        let state = state.reduce(SubscribeAction::Revert(2));
        assert!(!state.subscribed);
    }

    #[test]
    fn accepting_clears_a_pending_error() {
        let state = start()
            .reduce(SubscribeAction::Rejected { generation: 1 })
            .reduce(SubscribeAction::Accepted { generation: 1 });
        assert!(!state.error);
        assert!(state.subscribed);
    }
}
