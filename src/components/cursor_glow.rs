use log::debug;
use web_sys::{Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::config::use_landing_config;
use crate::dom;
use crate::frame::{schedule_frame, FrameGate};

/// Transforms for the two glow layers given the cursor position inside the
/// section. The second layer mirrors the first.
pub fn glow_transforms(x: f64, y: f64, rate: f64) -> (String, String) {
    (
        format!("translate({}px, {}px)", x * rate, y * rate),
        format!("translate({}px, {}px)", -x * rate, -y * rate),
    )
}

fn apply(layers: &[&NodeRef], transforms: &[&str]) {
    for (layer, transform) in layers.iter().zip(transforms) {
        if let Some(layer) = layer.cast::<HtmlElement>() {
            if let Err(e) = dom::set_style(&layer, "transform", transform) {
                debug!("Glow layer not moved: {}", e);
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaSectionProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CtaSection)]
pub fn cta_section(props: &CtaSectionProps) -> Html {
    let config = use_landing_config();
    let section_ref = use_node_ref();
    let glow_one = use_node_ref();
    let glow_two = use_node_ref();
    let gate = use_memo(|_| FrameGate::new(), ());
    let enabled = use_memo(|_| !dom::is_coarse_pointer(), ());

    let onmousemove = {
        let section_ref = section_ref.clone();
        let glow_one = glow_one.clone();
        let glow_two = glow_two.clone();
        let rate = config.glow_rate;
        Callback::from(move |e: MouseEvent| {
            let (client_x, client_y) = (f64::from(e.client_x()), f64::from(e.client_y()));
            let section_ref = section_ref.clone();
            let glow_one = glow_one.clone();
            let glow_two = glow_two.clone();
            schedule_frame(&gate, move || {
                let Some(section) = section_ref.cast::<Element>() else {
                    return;
                };
                let rect = section.get_bounding_client_rect();
                let (first, second) = glow_transforms(client_x - rect.left(), client_y - rect.top(), rate);
                apply(&[&glow_one, &glow_two], &[first.as_str(), second.as_str()]);
            });
        })
    };

    let onmouseleave = {
        let glow_one = glow_one.clone();
        let glow_two = glow_two.clone();
        Callback::from(move |_: MouseEvent| apply(&[&glow_one, &glow_two], &["", ""]))
    };

    html! {
        <section
            id="subscribe"
            ref={section_ref}
            class="cta"
            onmousemove={(*enabled).then(|| onmousemove)}
            onmouseleave={(*enabled).then(|| onmouseleave)}
        >
            <div ref={glow_one} class="cta-glow cta-glow-1"></div>
            <div ref={glow_two} class="cta-glow cta-glow-2"></div>
            <div class="container cta-content">
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_glow_mirrors_the_first() {
        let (first, second) = glow_transforms(100.0, 50.0, 0.02);
        assert_eq!(first, "translate(2px, 1px)");
        assert_eq!(second, "translate(-2px, -1px)");
    }
}
