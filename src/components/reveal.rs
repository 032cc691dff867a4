use std::rc::Rc;

use log::debug;
use web_sys::Element;
use yew::prelude::*;

use crate::config::use_landing_config;
use crate::dom;

/// Revealed-or-not flag of one `[data-reveal]` element. Once set it stays set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    pub revealed: bool,
}

impl RevealState {
    /// Returns true only for the call that flips the element to revealed.
    pub fn mark_visible(&mut self) -> bool {
        !std::mem::replace(&mut self.revealed, true)
    }
}

pub enum RevealAction {
    Intersected,
}

impl Reducible for RevealState {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RevealAction::Intersected => {
                let mut next = *self;
                if next.mark_visible() {
                    Rc::new(next)
                } else {
                    self
                }
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let config = use_landing_config();
    let node_ref = use_node_ref();
    let state = use_reducer_eq(RevealState::default);

    {
        let node_ref = node_ref.clone();
        let dispatcher = state.dispatcher();
        let threshold = config.reveal_threshold;
        use_effect_with_deps(
            move |_| {
                let watch = match node_ref.cast::<Element>() {
                    None => {
                        debug!("Reveal target not mounted");
                        None
                    }
                    Some(element) => dom::when_visible(&element, threshold, move || {
                        dispatcher.dispatch(RevealAction::Intersected)
                    }),
                };
                move || drop(watch)
            },
            (),
        );
    }

    html! {
        <div
            ref={node_ref}
            data-reveal=""
            class={classes!(props.class.clone(), state.revealed.then(|| "revealed"))}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_intersection_reveals() {
        let state = Rc::new(RevealState::default()).reduce(RevealAction::Intersected);
        assert!(state.revealed);
    }

    #[test]
    fn mark_visible_reports_the_transition_once() {
        let mut state = RevealState::default();
        assert!(state.mark_visible());
        assert!(state.revealed);
        assert!(!state.mark_visible());
        assert!(state.revealed);
    }

    #[test]
    fn later_intersections_change_nothing() {
        let revealed = Rc::new(RevealState::default()).reduce(RevealAction::Intersected);
        let mut state = revealed.clone();
        for _ in 0..5 {
            state = state.reduce(RevealAction::Intersected);
            assert!(Rc::ptr_eq(&state, &revealed));
        }
    }
}
