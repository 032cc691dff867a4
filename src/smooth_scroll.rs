use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::navbar::NAVBAR_ID;
use crate::dom;
use crate::error::DomError;

const IN_PAGE_LINK: &str = r##"a[href^="#"]"##;

/// Selector for an in-page link target, or `None` for a bare `#` or an
/// off-page href.
pub fn anchor_selector(href: &str) -> Option<&str> {
    (href.starts_with('#') && href != "#").then_some(href)
}

/// Page offset to scroll to so the target clears the fixed navbar.
pub fn scroll_destination(target_top: f64, page_offset: f64, navbar_height: f64, margin: f64) -> f64 {
    target_top + page_offset - navbar_height - margin
}

fn handle_anchor_click(e: &MouseEvent, margin: f64) -> Result<(), DomError> {
    let Some(link) = e
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(IN_PAGE_LINK).ok().flatten())
    else {
        return Ok(());
    };
    let Some(href) = link.get_attribute("href") else {
        return Ok(());
    };
    let Some(selector) = anchor_selector(&href) else {
        return Ok(());
    };

    let document = dom::document()?;
    // An unparsable selector is treated like a missing target
    let Some(target) = document.query_selector(selector).ok().flatten() else {
        return Ok(());
    };

    e.prevent_default();

    let window = dom::window()?;
    let navbar_height = document
        .get_element_by_id(NAVBAR_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| f64::from(el.offset_height()))
        .unwrap_or(0.0);
    let top = scroll_destination(
        target.get_bounding_client_rect().top(),
        window.page_y_offset()?,
        navbar_height,
        margin,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Intercepts same-page anchor clicks anywhere in the document and glides to
/// the target instead of jumping.
#[hook]
pub fn use_smooth_scroll(margin: f64) {
    use_event_with_window("click", move |e: MouseEvent| {
        if let Err(err) = handle_anchor_click(&e, margin) {
            debug!("Smooth scroll skipped: {}", err);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_is_ignored() {
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector("/pricing#plans"), None);
        assert_eq!(anchor_selector("#features"), Some("#features"));
    }

    #[test]
    fn destination_accounts_for_navbar_and_margin() {
        assert_eq!(scroll_destination(300.0, 1200.0, 72.0, 20.0), 1408.0);
        assert_eq!(scroll_destination(-500.0, 1200.0, 0.0, 20.0), 680.0);
    }
}
