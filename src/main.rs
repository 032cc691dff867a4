use log::{debug, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod error;
mod frame;
mod smooth_scroll;
mod timer;
mod validation;
mod components {
    pub mod contact;
    pub mod counter;
    pub mod cursor_glow;
    pub mod navbar;
    pub mod parallax;
    pub mod reveal;
    pub mod subscribe;
    pub mod toast;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use components::toast::ToastProvider;
use config::LandingConfig;
use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: LandingConfig,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<LandingConfig> context={props.config.clone()}>
            <ToastProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastProvider>
        </ContextProvider<LandingConfig>>
    }
}

fn print_banner() {
    gloo_console::log!("%c◆ Nexus", "font-size: 24px; font-weight: bold; color: #6366f1;");
    gloo_console::log!("%cBuilt with Rust, Yew & WebAssembly", "font-size: 12px; color: #888;");
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    print_banner();

    let config = LandingConfig::load();
    if let Err(e) = dom::preload_images(&config.preload_images) {
        debug!("Image preload skipped: {}", e);
    }

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
