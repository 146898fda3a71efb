use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAnchorElement};

use crate::behavior::dom;
use crate::behavior::registry::ListenerTable;
use crate::error::{absorb, BehaviorError};

#[cfg(test)]
#[path = "skip_link_test.rs"]
mod skip_link_test;

pub const SKIP_TARGET: &str = "#home";
pub const SKIP_TEXT: &str = "Skip to main content";
const SKIP_CLASS: &str = "skip-link";

const BASE_STYLE: &str = "position: absolute; top: -40px; left: 6px; background: #2b6cb0; \
     color: white; padding: 8px; text-decoration: none; border-radius: 4px; \
     z-index: 10000; transition: top 0.3s;";

/// Vertical position of the skip link; it only comes on screen with focus.
pub fn skip_link_top(focused: bool) -> &'static str {
    if focused {
        "6px"
    } else {
        "-40px"
    }
}

/// How the link got onto the page, which decides who removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Inserted,
    /// Already in the markup (or left by someone else): keep it on detach.
    Reused,
}

impl Placement {
    pub fn for_existing(found: bool) -> Self {
        if found {
            Placement::Reused
        } else {
            Placement::Inserted
        }
    }

    pub fn removes_on_detach(self) -> bool {
        self == Placement::Inserted
    }
}

/// The skip link wired by [`attach`]. Focus handlers are registered in every
/// placement; only an inserted link is taken out again by [`SkipLink::detach`].
pub struct SkipLink {
    link: HtmlAnchorElement,
    placement: Placement,
}

impl SkipLink {
    pub fn detach(self) {
        if self.placement.removes_on_detach() {
            self.link.remove();
        }
    }
}

fn create(document: &Document) -> Result<HtmlAnchorElement, BehaviorError> {
    let link = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| BehaviorError::Js("created element is not an anchor".to_string()))?;
    link.set_href(SKIP_TARGET);
    link.set_text_content(Some(SKIP_TEXT));
    link.set_class_name(SKIP_CLASS);
    link.style().set_css_text(BASE_STYLE);
    Ok(link)
}

pub fn attach(table: &mut ListenerTable, document: &Document) -> Result<SkipLink, BehaviorError> {
    let body = document
        .body()
        .ok_or(BehaviorError::MissingElement("body"))?;
    let existing = document
        .query_selector(&format!("a.{}", SKIP_CLASS))?
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok());
    let placement = Placement::for_existing(existing.is_some());
    let link = match existing {
        Some(link) => link,
        None => create(document)?,
    };

    for (event, focused) in [("focus", true), ("blur", false)] {
        let target = link.clone();
        table.listen(&link, SKIP_CLASS, event, move |_| {
            absorb("skip link", dom::set_style(&target, "top", skip_link_top(focused)));
        })?;
    }

    if placement == Placement::Inserted {
        body.insert_before(&link, body.first_child().as_ref())?;
    }
    Ok(SkipLink { link, placement })
}
