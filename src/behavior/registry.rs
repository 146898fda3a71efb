use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::behavior::visibility::ObserverHandle;
use crate::error::BehaviorError;

pub type Handler = Closure<dyn FnMut(Event)>;

struct Registration {
    event: &'static str,
    label: String,
    target: EventTarget,
    handler: Handler,
}

/// Every listener the page behaviors install, in registration order.
/// Dropping the table detaches all of them.
#[derive(Default)]
pub struct ListenerTable {
    entries: Vec<Registration>,
    observers: Vec<ObserverHandle>,
}

impl ListenerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen<F>(
        &mut self,
        target: &EventTarget,
        label: impl Into<String>,
        event: &'static str,
        handler: F,
    ) -> Result<(), BehaviorError>
    where
        F: FnMut(Event) + 'static,
    {
        let handler = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())?;
        self.entries.push(Registration {
            event,
            label: label.into(),
            target: target.clone(),
            handler,
        });
        Ok(())
    }

    /// Keeps an observer alive until the table is dropped.
    pub fn hold_observer(&mut self, handle: ObserverHandle) {
        self.observers.push(handle);
    }

    /// `(event type, target label)` pairs for auditing.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|r| (r.event, r.label.as_str()))
    }
}

impl Drop for ListenerTable {
    fn drop(&mut self) {
        for r in self.entries.drain(..) {
            let _ = r
                .target
                .remove_event_listener_with_callback(r.event, r.handler.as_ref().unchecked_ref());
        }
        for handle in self.observers.drain(..) {
            handle.disconnect();
        }
    }
}
