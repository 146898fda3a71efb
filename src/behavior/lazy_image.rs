use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement};

use crate::behavior::dom;
use crate::behavior::registry::ListenerTable;
use crate::behavior::visibility::{ObserveOptions, VisibilityStrategy};
use crate::error::{absorb, BehaviorError};

const LAZY_SELECTOR: &str = "img[data-src]";
const PENDING_ATTRIBUTE: &str = "data-src";

fn load(image: &HtmlImageElement) -> Result<bool, BehaviorError> {
    let Some(source) = image.get_attribute(PENDING_ATTRIBUTE) else {
        return Ok(false);
    };
    image.set_src(&source);
    image.remove_attribute(PENDING_ATTRIBUTE)?;
    let classes = image.class_list();
    classes.remove_1("lazy")?;
    classes.add_1("loaded")?;
    Ok(true)
}

pub fn attach(
    table: &mut ListenerTable,
    document: &Document,
    strategy: VisibilityStrategy,
) -> Result<(), BehaviorError> {
    if !strategy.is_supported() {
        log::info!("lazy images disabled: no IntersectionObserver");
        return Ok(());
    }

    let images = dom::query_all(document, LAZY_SELECTOR)?;
    let handle = strategy.observe(&ObserveOptions::default(), &images, |element, observer| {
        let Some(image) = element.dyn_ref::<HtmlImageElement>() else {
            return;
        };
        match load(image) {
            Ok(true) => observer.unobserve(element),
            Ok(false) => {}
            Err(e) => absorb("lazy image", Err(e)),
        }
    })?;

    if let Some(handle) = handle {
        table.hold_observer(handle);
    }
    Ok(())
}
