//! Navigation highlighting and the header's scrolled state.

use std::rc::Rc;

use web_sys::{Document, Window};

use crate::behavior::dom;
use crate::behavior::registry::ListenerTable;
use crate::config::BehaviorConfig;
use crate::error::{absorb, BehaviorError};

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

pub const NAVBAR_ID: &str = "navbar";
const SECTION_SELECTOR: &str = "section[id]";
const NAV_LINK_SELECTOR: &str = ".nav-link";
const ACTIVE_CLASS: &str = "active";
const SCROLLED_CLASS: &str = "scrolled";

/// Vertical extent of a named section, sampled from the live layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Lower bound inclusive, upper bound exclusive.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// The section holding `scroll_y + offset`. Later sections win when spans
/// overlap.
pub fn active_section(spans: &[SectionSpan], scroll_y: f64, offset: f64) -> Option<&SectionSpan> {
    let position = scroll_y + offset;
    spans.iter().rev().find(|span| span.contains(position))
}

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

fn section_spans(document: &Document) -> Result<Vec<SectionSpan>, BehaviorError> {
    Ok(dom::query_all(document, SECTION_SELECTOR)?
        .iter()
        .filter_map(|section| {
            let html = dom::as_html(section)?;
            Some(SectionSpan::new(
                section.id(),
                f64::from(html.offset_top()),
                f64::from(html.offset_height()),
            ))
        })
        .collect())
}

fn highlight(document: &Document, window: &Window, offset: f64) -> Result<(), BehaviorError> {
    // Sections are re-read every time so layout changes are picked up.
    let spans = section_spans(document)?;
    let Some(active) = active_section(&spans, dom::scroll_y(window), offset) else {
        return Ok(());
    };

    for link in dom::query_all(document, NAV_LINK_SELECTOR)? {
        link.class_list().remove_1(ACTIVE_CLASS)?;
    }
    let selector = format!("{}[href=\"#{}\"]", NAV_LINK_SELECTOR, active.id);
    if let Some(link) = document.query_selector(&selector)? {
        link.class_list().add_1(ACTIVE_CLASS)?;
    }
    Ok(())
}

pub fn attach_highlighter(
    table: &mut ListenerTable,
    window: &Window,
    document: &Document,
    config: &BehaviorConfig,
) -> Result<(), BehaviorError> {
    let offset = config.nav_offset;
    let update: Rc<dyn Fn()> = {
        let window = window.clone();
        let document = document.clone();
        Rc::new(move || absorb("nav highlighter", highlight(&document, &window, offset)))
    };

    let on_scroll = Rc::clone(&update);
    table.listen(window, "window", "scroll", move |_| on_scroll())?;
    update();
    Ok(())
}

pub fn attach_scroll_styler(
    table: &mut ListenerTable,
    window: &Window,
    document: &Document,
    config: &BehaviorConfig,
) -> Result<(), BehaviorError> {
    let navbar = dom::by_id(document, NAVBAR_ID)?;
    let threshold = config.scrolled_threshold;
    let scroll_window = window.clone();
    table.listen(window, "window", "scroll", move |_| {
        let scrolled = is_scrolled(dom::scroll_y(&scroll_window), threshold);
        let result = navbar
            .class_list()
            .toggle_with_force(SCROLLED_CLASS, scrolled)
            .map(|_| ())
            .map_err(BehaviorError::from);
        absorb("scroll styler", result);
    })
}
