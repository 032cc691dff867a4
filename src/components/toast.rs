use std::rc::Rc;

use yew::prelude::*;

use crate::config::use_landing_config;
use crate::timer::ResetTimer;

pub const TOAST_ID: &str = "toast";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub message: String,
    pub visible: bool,
    pub generation: u32,
}

pub enum ToastAction {
    Show { message: String, generation: u32 },
    Hide(u32),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Show { message, generation } => Rc::new(ToastState {
                message,
                visible: true,
                generation,
            }),
            // A hide scheduled for an earlier notice must not cut a newer one short
            ToastAction::Hide(generation) if generation == self.generation && self.visible => {
                Rc::new(ToastState {
                    visible: false,
                    ..(*self).clone()
                })
            }
            ToastAction::Hide(_) => self,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toaster {
    show: Callback<String>,
}

impl Toaster {
    pub fn show(&self, message: impl Into<String>) {
        self.show.emit(message.into());
    }
}

/// Raises a notice if a [`ToastProvider`] is mounted above; otherwise does nothing.
#[hook]
pub fn use_toast() -> Callback<String> {
    let toaster = use_context::<Toaster>();
    Callback::from(move |message: String| {
        if let Some(toaster) = &toaster {
            toaster.show(message);
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let config = use_landing_config();
    let state = use_reducer_eq(ToastState::default);
    let hide_timer = use_mut_ref(ResetTimer::default);

    let toaster = {
        let dispatcher = state.dispatcher();
        let hide_timer = hide_timer.clone();
        let duration = config.toast_duration_ms;
        use_memo(
            move |_| Toaster {
                show: Callback::from(move |message: String| {
                    let hide = dispatcher.clone();
                    let generation = hide_timer
                        .borrow_mut()
                        .arm(duration, move |generation| hide.dispatch(ToastAction::Hide(generation)));
                    dispatcher.dispatch(ToastAction::Show { message, generation });
                }),
            },
            duration,
        )
    };

    use_effect_with_deps(
        move |_| {
            move || {
                hide_timer.borrow_mut().cancel();
            }
        },
        (),
    );

    html! {
        <ContextProvider<Toaster> context={(*toaster).clone()}>
            { for props.children.iter() }
            <div
                id={TOAST_ID}
                class={classes!("toast", state.visible.then(|| "show"))}
                role="status"
                aria-live="polite"
            >
                <span class="toast-message">{ state.message.clone() }</span>
            </div>
        </ContextProvider<Toaster>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(state: Rc<ToastState>, message: &str, generation: u32) -> Rc<ToastState> {
        state.reduce(ToastAction::Show {
            message: message.to_string(),
            generation,
        })
    }

    #[test]
    fn hide_for_current_notice_hides_it() {
        let state = show(Rc::new(ToastState::default()), "Thanks for subscribing!", 1);
        assert!(state.visible);
        let state = state.reduce(ToastAction::Hide(1));
        assert!(!state.visible);
        assert_eq!(state.message, "Thanks for subscribing!");
    }

    #[test]
    fn stale_hide_leaves_newer_notice_up() {
        let state = show(Rc::new(ToastState::default()), "first", 1);
        let state = show(state, "second", 2);
        let state = state.reduce(ToastAction::Hide(1));
        assert!(state.visible);
        assert_eq!(state.message, "second");
    }
}
