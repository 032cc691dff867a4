use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::use_landing_config;
use crate::dom;
use crate::frame::use_scroll_frame;

pub const NAVBAR_ID: &str = "navbar";

pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

pub enum MenuAction {
    Toggle,
    Close,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            MenuAction::Toggle => Rc::new(MenuState { open: !self.open }),
            MenuAction::Close if self.open => Rc::new(MenuState { open: false }),
            MenuAction::Close => self,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub links: Vec<NavLink>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let config = use_landing_config();
    let is_scrolled_state = use_state_eq(|| false);
    let menu = use_reducer_eq(MenuState::default);
    let button_ref = use_node_ref();
    let links_ref = use_node_ref();

    {
        let is_scrolled_state = is_scrolled_state.clone();
        let threshold = config.navbar_threshold;
        use_scroll_frame(true, move || match dom::page_y_offset() {
            Ok(offset) => is_scrolled_state.set(is_scrolled(offset, threshold)),
            Err(e) => debug!("Navbar offset unavailable: {}", e),
        });
    }

    // Block page scrolling behind the open menu
    use_effect_with_deps(
        move |open| {
            let overflow = if *open { "hidden" } else { "" };
            if let Err(e) = dom::body().and_then(|body| dom::set_style(&body, "overflow", overflow)) {
                debug!("Body overflow not updated: {}", e);
            }
            || ()
        },
        menu.open,
    );

    // Close on any click outside the toggle and the menu itself
    {
        let dispatcher = menu.dispatcher();
        let button_ref = button_ref.clone();
        let links_ref = links_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = |node: Option<Node>| {
                node.map_or(false, |node| node.contains(target.as_ref()))
            };
            if !inside(button_ref.get()) && !inside(links_ref.get()) {
                dispatcher.dispatch(MenuAction::Close);
            }
        });
    }

    let toggle_menu = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MenuAction::Toggle))
    };

    let close_menu = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(MenuAction::Close))
    };

    let active = menu.open.then(|| "active");

    html! {
        <nav id={NAVBAR_ID} class={classes!("navbar", (*is_scrolled_state).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <span class="logo-mark">{"◆"}</span>
                    {"Nexus"}
                </a>

                <ul ref={links_ref} class={classes!("nav-links", active)}>
                    { for props.links.iter().map(|link| html! {
                        <li>
                            <a href={link.href} onclick={close_menu.clone()}>{ link.label }</a>
                        </li>
                    }) }
                </ul>

                <button
                    ref={button_ref}
                    id="mobileMenuBtn"
                    class={classes!("mobile-menu-btn", active)}
                    aria-label="Toggle menu"
                    aria-expanded={menu.open.to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn toggle_times(n: usize) -> Rc<MenuState> {
        (0..n).fold(Rc::new(MenuState::default()), |state, _| state.reduce(MenuAction::Toggle))
    }

    #[test]
    fn threshold_itself_is_not_scrolled() {
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
        assert!(!is_scrolled(0.0, 50.0));
    }

    #[test]
    fn close_is_a_no_op_when_already_closed() {
        let closed = Rc::new(MenuState::default());
        let after = closed.clone().reduce(MenuAction::Close);
        assert!(Rc::ptr_eq(&closed, &after));
    }

    #[test]
    fn close_shuts_an_open_menu() {
        let open = toggle_times(1);
        assert!(open.open);
        assert!(!open.reduce(MenuAction::Close).open);
    }

    proptest! {
        #[test]
        fn scrolled_class_tracks_threshold(offset in 0.0f64..10_000.0, threshold in 0.0f64..1_000.0) {
            prop_assert_eq!(is_scrolled(offset, threshold), offset > threshold);
        }

        #[test]
        fn toggle_parity(n in 0usize..64) {
            prop_assert_eq!(toggle_times(n).open, n % 2 == 1);
        }
    }
}
