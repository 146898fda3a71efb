use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Starts one-shot timers. Dropping the returned handle cancels the timer.
pub trait TimerFactory {
    type Handle;

    fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers via `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl TimerFactory for BrowserTimers {
    type Handle = Timeout;

    fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

/// Collapses a burst of triggers into one run of `action`, `wait_ms` after
/// the last trigger.
pub struct Debouncer<T: TimerFactory> {
    timers: T,
    wait_ms: u32,
    pending: RefCell<Option<T::Handle>>,
    action: Rc<RefCell<dyn FnMut()>>,
}

impl<T: TimerFactory> Debouncer<T> {
    pub fn new<F>(timers: T, wait_ms: u32, action: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self {
            timers,
            wait_ms,
            pending: RefCell::new(None),
            action: Rc::new(RefCell::new(action)),
        }
    }

    pub fn trigger(&self) {
        let action = Rc::clone(&self.action);
        let handle = self.timers.start(
            self.wait_ms,
            Box::new(move || {
                if let Ok(mut action) = action.try_borrow_mut() {
                    (&mut *action)();
                }
            }),
        );
        // Replacing the handle drops, and so cancels, the previous timer.
        *self.pending.borrow_mut() = Some(handle);
    }
}
