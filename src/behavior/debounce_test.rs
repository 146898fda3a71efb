use std::cell::Cell;

use super::*;

struct Scheduled {
    due: u64,
    cancelled: Rc<Cell<bool>>,
    callback: Option<Box<dyn FnOnce()>>,
}

/// Virtual clock standing in for `setTimeout`.
#[derive(Clone, Default)]
struct ManualTimers {
    now: Rc<Cell<u64>>,
    queue: Rc<RefCell<Vec<Scheduled>>>,
}

struct ManualHandle(Rc<Cell<bool>>);

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

impl TimerFactory for ManualTimers {
    type Handle = ManualHandle;

    fn start(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        self.queue.borrow_mut().push(Scheduled {
            due: self.now.get() + u64::from(delay_ms),
            cancelled: Rc::clone(&cancelled),
            callback: Some(callback),
        });
        ManualHandle(cancelled)
    }
}

impl ManualTimers {
    fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        self.now.set(target);
        let ready: Vec<Box<dyn FnOnce()>> = self
            .queue
            .borrow_mut()
            .iter_mut()
            .filter(|s| s.due <= target && !s.cancelled.get())
            .filter_map(|s| s.callback.take())
            .collect();
        for callback in ready {
            callback();
        }
    }
}

fn counting_debouncer(wait_ms: u32) -> (ManualTimers, Debouncer<ManualTimers>, Rc<Cell<u32>>) {
    let timers = ManualTimers::default();
    let runs = Rc::new(Cell::new(0));
    let counter = Rc::clone(&runs);
    let debouncer = Debouncer::new(timers.clone(), wait_ms, move || counter.set(counter.get() + 1));
    (timers, debouncer, runs)
}

#[test]
fn burst_of_resizes_runs_once() {
    let (timers, debouncer, runs) = counting_debouncer(250);
    for _ in 0..10 {
        debouncer.trigger();
        timers.advance(20);
    }
    assert_eq!(runs.get(), 0);
    timers.advance(250);
    assert_eq!(runs.get(), 1);
    timers.advance(1000);
    assert_eq!(runs.get(), 1);
}

#[test]
fn nothing_runs_before_quiet_window() {
    let (timers, debouncer, runs) = counting_debouncer(250);
    debouncer.trigger();
    timers.advance(249);
    assert_eq!(runs.get(), 0);
    timers.advance(1);
    assert_eq!(runs.get(), 1);
}

#[test]
fn separated_bursts_run_separately() {
    let (timers, debouncer, runs) = counting_debouncer(10);
    debouncer.trigger();
    timers.advance(10);
    debouncer.trigger();
    debouncer.trigger();
    timers.advance(10);
    assert_eq!(runs.get(), 2);
}

#[test]
fn dropping_debouncer_cancels_pending_run() {
    let (timers, debouncer, runs) = counting_debouncer(250);
    debouncer.trigger();
    drop(debouncer);
    timers.advance(500);
    assert_eq!(runs.get(), 0);
}
