use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use crate::error::BehaviorError;

pub fn window() -> Result<Window, BehaviorError> {
    web_sys::window().ok_or(BehaviorError::MissingElement("window"))
}

pub fn document() -> Result<Document, BehaviorError> {
    window()?
        .document()
        .ok_or(BehaviorError::MissingElement("document"))
}

pub fn by_id(document: &Document, id: &'static str) -> Result<Element, BehaviorError> {
    document
        .get_element_by_id(id)
        .ok_or(BehaviorError::MissingElement(id))
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, BehaviorError> {
    Ok(elements(document.query_selector_all(selector)?))
}

pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, BehaviorError> {
    Ok(elements(root.query_selector_all(selector)?))
}

pub fn as_html(element: &Element) -> Option<&HtmlElement> {
    element.dyn_ref::<HtmlElement>()
}

pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), BehaviorError> {
    if let Some(html) = as_html(element) {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}
