use web_sys::{Document, Window};

use crate::behavior::debounce::{BrowserTimers, Debouncer};
use crate::behavior::dom;
use crate::behavior::registry::ListenerTable;
use crate::config::BehaviorConfig;
use crate::error::{absorb, BehaviorError};

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

const HERO_SELECTOR: &str = ".hero";

pub fn hero_transform(scroll_y: f64, rate: f64) -> String {
    let offset = scroll_y * rate;
    // Avoid rendering `-0px` at the top of the page
    let offset = if offset == 0.0 { 0.0 } else { offset };
    format!("translateY({}px)", offset)
}

pub fn attach(
    table: &mut ListenerTable,
    window: &Window,
    document: &Document,
    config: &BehaviorConfig,
) -> Result<(), BehaviorError> {
    let hero = document
        .query_selector(HERO_SELECTOR)?
        .ok_or(BehaviorError::MissingElement(HERO_SELECTOR))?;

    let rate = config.parallax_rate;
    let scroll_window = window.clone();
    let shift = Debouncer::new(BrowserTimers, config.parallax_debounce_ms, move || {
        let transform = hero_transform(dom::scroll_y(&scroll_window), rate);
        absorb("parallax", dom::set_style(&hero, "transform", &transform));
    });
    table.listen(window, "window", "scroll", move |_| shift.trigger())
}
