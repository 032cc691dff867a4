use log::debug;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::use_landing_config;
use crate::dom;
use crate::frame::use_scroll_frame;

pub fn parallax_transform(offset: f64, rate: f64) -> String {
    format!("translateY({}px)", offset * rate)
}

#[function_component(HeroBackground)]
pub fn hero_background() -> Html {
    let config = use_landing_config();
    let layer_ref = use_node_ref();
    let enabled = use_memo(|_| !dom::is_coarse_pointer(), ());

    {
        let layer_ref = layer_ref.clone();
        let rate = config.parallax_rate;
        use_scroll_frame(*enabled, move || {
            let Some(layer) = layer_ref.cast::<HtmlElement>() else {
                return;
            };
            let moved = dom::page_y_offset()
                .and_then(|offset| dom::set_style(&layer, "transform", &parallax_transform(offset, rate)));
            if let Err(e) = moved {
                debug!("Parallax frame skipped: {}", e);
            }
        });
    }

    html! {
        <div class="hero-bg">
            <img
                ref={layer_ref}
                class="hero-bg-img"
                src="images/hero-bg.jpg"
                alt=""
                aria-hidden="true"
            />
            <div class="hero-overlay"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_moves_at_a_fraction_of_the_scroll() {
        assert_eq!(parallax_transform(0.0, 0.3), "translateY(0px)");
        assert_eq!(parallax_transform(200.0, 0.3), "translateY(60px)");
        assert_eq!(parallax_transform(50.0, 0.5), "translateY(25px)");
    }
}
