use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollToOptions, Window};

use crate::behavior::dom;
use crate::behavior::nav::NAVBAR_ID;
use crate::behavior::registry::ListenerTable;
use crate::config::BehaviorConfig;
use crate::error::{absorb, BehaviorError};

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Element id named by an in-page link, if any.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll offset that puts the target's top just below the fixed header.
pub fn scroll_target(element_top: f64, header_height: f64, gap: f64) -> f64 {
    element_top - header_height - gap
}

fn scroll_to_fragment(
    window: &Window,
    document: &Document,
    href: &str,
    gap: f64,
) -> Result<(), BehaviorError> {
    let Some(id) = fragment_id(href) else {
        return Ok(());
    };
    let Some(target) = document.get_element_by_id(id) else {
        return Ok(());
    };
    let Some(target) = dom::as_html(&target) else {
        return Ok(());
    };

    let header_height = document
        .get_element_by_id(NAVBAR_ID)
        .as_ref()
        .and_then(dom::as_html)
        .map_or(0.0, |navbar| f64::from(navbar.offset_height()));
    let top = scroll_target(f64::from(target.offset_top()), header_height, gap);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Reads the link's `href` at click time so later markup edits are honored.
fn clicked_href(event: &Event) -> Option<String> {
    event
        .current_target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|link| link.get_attribute("href"))
}

pub fn attach(
    table: &mut ListenerTable,
    window: &Window,
    document: &Document,
    config: &BehaviorConfig,
) -> Result<(), BehaviorError> {
    let gap = config.scroll_gap;
    for link in dom::query_all(document, ANCHOR_SELECTOR)? {
        let window = window.clone();
        let document = document.clone();
        table.listen(&link, ANCHOR_SELECTOR, "click", move |event| {
            event.prevent_default();
            let href = clicked_href(&event).unwrap_or_default();
            absorb("smooth scroll", scroll_to_fragment(&window, &document, &href, gap));
        })?;
    }
    Ok(())
}
