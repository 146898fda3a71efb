//! Viewport visibility observation.
//!
//! Support for `IntersectionObserver` is checked once when the page behaviors
//! attach. Components receive the resulting [`VisibilityStrategy`] and never
//! branch on the browser's capabilities themselves.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::error::BehaviorError;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityStrategy {
    Observer,
    /// Observation unavailable: visibility-driven components do nothing.
    Inert,
}

#[derive(Debug, Clone, Default)]
pub struct ObserveOptions {
    pub threshold: Option<f64>,
    pub root_margin: Option<String>,
}

/// An observer together with the callback it invokes.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl ObserverHandle {
    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl VisibilityStrategy {
    pub fn detect(window: &Window) -> Self {
        match js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")) {
            Ok(true) => VisibilityStrategy::Observer,
            _ => VisibilityStrategy::Inert,
        }
    }

    pub fn is_supported(self) -> bool {
        self == VisibilityStrategy::Observer
    }

    /// Watches `targets` and calls `on_visible` for each one that intersects.
    /// The callback gets the observer so it can stop watching one-shot
    /// elements. Returns `None` under [`VisibilityStrategy::Inert`].
    pub fn observe<F>(
        self,
        options: &ObserveOptions,
        targets: &[Element],
        mut on_visible: F,
    ) -> Result<Option<ObserverHandle>, BehaviorError>
    where
        F: FnMut(&Element, &IntersectionObserver) + 'static,
    {
        if !self.is_supported() || targets.is_empty() {
            return Ok(None);
        }

        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        on_visible(&entry.target(), &observer);
                    }
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        if let Some(threshold) = options.threshold {
            init.set_threshold(&JsValue::from_f64(threshold));
        }
        if let Some(margin) = &options.root_margin {
            init.set_root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for target in targets {
            observer.observe(target);
        }

        Ok(Some(ObserverHandle {
            observer,
            _callback: callback,
        }))
    }
}
