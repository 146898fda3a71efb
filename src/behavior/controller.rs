//! Wires every page behavior to the rendered landing page.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, Window};

use crate::behavior::counter::RunningCounter;
use crate::behavior::registry::ListenerTable;
use crate::behavior::skip_link::SkipLink;
use crate::behavior::visibility::{ObserverHandle, VisibilityStrategy};
use crate::behavior::{
    counter, dom, form, lazy_image, menu, nav, parallax, reveal, skip_link, smooth_scroll,
};
use crate::config::BehaviorConfig;
use crate::error::{absorb, BehaviorError};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

const LOADED_CLASS: &str = "loaded";

/// Live page behaviors. Dropping it detaches listeners, disconnects
/// observers, stops running counters, removes the skip link it inserted and
/// cancels the deferred counter start.
pub struct PageBehavior {
    table: ListenerTable,
    skip_link: Option<SkipLink>,
    counter_start: Option<Timeout>,
    counters: Rc<RefCell<Option<ObserverHandle>>>,
    running_counters: Rc<RefCell<Vec<RunningCounter>>>,
}

pub fn is_load_complete(ready_state: &str) -> bool {
    ready_state == "complete"
}

fn mark_loaded(document: &Document) -> Result<(), BehaviorError> {
    let body = document
        .body()
        .ok_or(BehaviorError::MissingElement("body"))?;
    body.class_list().add_1(LOADED_CLASS)?;
    Ok(())
}

fn attach_load_marker(
    table: &mut ListenerTable,
    window: &Window,
    document: &Document,
) -> Result<(), BehaviorError> {
    if is_load_complete(&document.ready_state()) {
        return mark_loaded(document);
    }
    let document = document.clone();
    table.listen(window, "window", "load", move |_| {
        absorb("load marker", mark_loaded(&document))
    })
}

impl PageBehavior {
    /// Attaches to the current browser page.
    pub fn attach_to_page() -> Result<Self, BehaviorError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let config = BehaviorConfig::load(&document);
        Ok(Self::attach(&window, &document, config))
    }

    pub fn attach(window: &Window, document: &Document, config: BehaviorConfig) -> Self {
        let strategy = VisibilityStrategy::detect(window);
        let mut table = ListenerTable::new();

        absorb("nav highlighter", nav::attach_highlighter(&mut table, window, document, &config));
        absorb("scroll styler", nav::attach_scroll_styler(&mut table, window, document, &config));
        absorb("mobile menu", menu::attach(&mut table, window, document, &config));
        absorb("smooth scroll", smooth_scroll::attach(&mut table, window, document, &config));
        absorb("reveal", reveal::attach(&mut table, document, strategy, &config));
        let skip_link = match skip_link::attach(&mut table, document) {
            Ok(link) => Some(link),
            Err(e) => {
                absorb("skip link", Err(e));
                None
            }
        };
        absorb("form guard", form::attach(&mut table, document));
        absorb("parallax", parallax::attach(&mut table, window, document, &config));
        absorb("lazy image", lazy_image::attach(&mut table, document, strategy));
        absorb("load marker", attach_load_marker(&mut table, window, document));

        let counters = Rc::new(RefCell::new(None));
        let running_counters = Rc::new(RefCell::new(Vec::new()));
        let counter_start = {
            let counters = Rc::clone(&counters);
            let running = Rc::clone(&running_counters);
            let window = window.clone();
            let document = document.clone();
            let config = config.clone();
            Timeout::new(config.counter_start_delay_ms, move || {
                match counter::attach(&window, &document, strategy, &config, running) {
                    Ok(handle) => *counters.borrow_mut() = handle,
                    Err(e) => absorb("counter", Err(e)),
                }
            })
        };

        log::debug!(
            "page behaviors attached: {} listeners, visibility {:?}",
            table.entries().count(),
            strategy
        );
        for (event, target) in table.entries() {
            log::trace!("  {} on {}", event, target);
        }

        Self {
            table,
            skip_link,
            counter_start: Some(counter_start),
            counters,
            running_counters,
        }
    }
}

impl PageBehavior {
    pub fn listener_count(&self) -> usize {
        self.table.entries().count()
    }
}

impl Drop for PageBehavior {
    fn drop(&mut self) {
        if let Some(timeout) = self.counter_start.take() {
            timeout.cancel();
        }
        if let Some(handle) = self.counters.borrow_mut().take() {
            handle.disconnect();
        }
        for counter in self.running_counters.borrow_mut().drain(..) {
            counter.cancel();
        }
        if let Some(link) = self.skip_link.take() {
            link.detach();
        }
    }
}
