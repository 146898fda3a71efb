//! Fade-and-slide reveal for cards as they scroll into view.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Document;

use crate::behavior::dom;
use crate::behavior::oneshot::OneShot;
use crate::behavior::registry::ListenerTable;
use crate::behavior::visibility::{ObserveOptions, VisibilityStrategy};
use crate::config::BehaviorConfig;
use crate::error::{absorb, BehaviorError};

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const REVEAL_SELECTOR: &str = ".service-card, .team-member, .story-card, .testimonial, \
     .job-card, .contact-card, .value-prop, .system-card";

#[derive(Debug, Clone, PartialEq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: String,
    pub transition: String,
}

/// Initial styling for the `index`-th card; delays are staggered by index.
pub fn hidden_style(index: usize, config: &BehaviorConfig) -> RevealStyle {
    let delay = format_seconds(index as f64 * config.reveal_stagger_s);
    let duration = format_seconds(config.reveal_duration_s);
    RevealStyle {
        opacity: "0",
        transform: format!("translateY({}px)", config.reveal_translate),
        transition: format!(
            "opacity {duration}s ease {delay}s, transform {duration}s ease {delay}s"
        ),
    }
}

pub fn shown_style() -> (&'static str, &'static str) {
    ("1", "translateY(0)")
}

/// Trims float noise such as `0.30000000000000004`.
fn format_seconds(seconds: f64) -> String {
    let rounded = (seconds * 1000.0).round() / 1000.0;
    format!("{}", rounded)
}

pub fn attach(
    table: &mut ListenerTable,
    document: &Document,
    strategy: VisibilityStrategy,
    config: &BehaviorConfig,
) -> Result<(), BehaviorError> {
    if !strategy.is_supported() {
        log::info!("reveal animations disabled: no IntersectionObserver");
        return Ok(());
    }

    let cards = dom::query_all(document, REVEAL_SELECTOR)?;
    let shots = Rc::new(RefCell::new(OneShot::new()));
    for (index, card) in cards.iter().enumerate() {
        let style = hidden_style(index, config);
        dom::set_style(card, "opacity", style.opacity)?;
        dom::set_style(card, "transform", &style.transform)?;
        dom::set_style(card, "transition", &style.transition)?;
        shots.borrow_mut().stamp(card);
    }

    let options = ObserveOptions {
        threshold: Some(config.reveal_threshold),
        root_margin: Some(config.reveal_root_margin.clone()),
    };
    let handle = strategy.observe(&options, &cards, move |card, observer| {
        if !shots.borrow_mut().claim_element(card) {
            return;
        }
        observer.unobserve(card);
        let (opacity, transform) = shown_style();
        let result = dom::set_style(card, "opacity", opacity)
            .and_then(|_| dom::set_style(card, "transform", transform));
        absorb("reveal", result);
    })?;

    if let Some(handle) = handle {
        table.hold_observer(handle);
    }
    log::debug!("reveal watching {} cards", cards.len());
    Ok(())
}
