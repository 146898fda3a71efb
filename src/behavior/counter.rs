//! Count-up animation for the hero stats.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::behavior::dom;
use crate::behavior::oneshot::OneShot;
use crate::behavior::visibility::{ObserveOptions, ObserverHandle, VisibilityStrategy};
use crate::config::BehaviorConfig;
use crate::error::BehaviorError;

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

pub const COUNTER_SELECTOR: &str = ".stat h3";

/// A stat such as `1500+`, split into its number and trailing text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSpec {
    pub target: u64,
    pub suffix: String,
}

impl CounterSpec {
    /// Digits form the target, everything else the suffix. Text without a
    /// usable number yields `None` and is left as rendered.
    pub fn parse(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        let target = digits.parse::<u64>().ok()?;
        let suffix = text.chars().filter(|c| !c.is_ascii_digit()).collect();
        Some(Self { target, suffix })
    }

    pub fn render(&self, value: u64) -> String {
        format!("{}{}", value, self.suffix)
    }
}

pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

/// Shared "stop now" switch for a running animation.
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Rc<Cell<bool>>);

impl StopFlag {
    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    spec: CounterSpec,
    start: u64,
    duration_ms: f64,
    started_at: Option<f64>,
    stop: StopFlag,
}

impl CounterAnimation {
    pub fn new(spec: CounterSpec, duration_ms: f64) -> Self {
        Self {
            spec,
            start: 0,
            duration_ms,
            started_at: None,
            stop: StopFlag::default(),
        }
    }

    pub fn stop_flag(&self) -> StopFlag {
        self.stop.clone()
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// Text to show at `now_ms`. The clock starts on the first call.
    pub fn frame(&mut self, now_ms: f64) -> CounterFrame {
        let started_at = *self.started_at.get_or_insert(now_ms);
        let progress = if self.duration_ms > 0.0 {
            ((now_ms - started_at) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };

        if progress >= 1.0 {
            return CounterFrame {
                text: self.spec.render(self.spec.target),
                done: true,
            };
        }

        let start = self.start as f64;
        let span = self.spec.target as f64 - start;
        let value = (start + span * ease_out_quart(progress)).floor().max(0.0) as u64;
        CounterFrame {
            text: self.spec.render(value),
            done: false,
        }
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A count-up in flight. `cancel` stops it before the next frame.
pub struct RunningCounter {
    window: Window,
    stop: StopFlag,
    frame_id: Rc<Cell<Option<i32>>>,
    holder: Rc<RefCell<Option<FrameCallback>>>,
}

impl RunningCounter {
    pub fn cancel(&self) {
        self.stop.stop();
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Breaks the callback's reference cycle through `holder`
        self.holder.borrow_mut().take();
    }
}

fn run(window: Window, element: Element, mut animation: CounterAnimation) -> Option<RunningCounter> {
    let holder: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let frame_id = Rc::new(Cell::new(None));
    let stop = animation.stop_flag();

    let holder_for_cb = Rc::clone(&holder);
    let frame_id_for_cb = Rc::clone(&frame_id);
    let frame_window = window.clone();
    let cb = Closure::wrap(Box::new(move |now: f64| {
        frame_id_for_cb.set(None);
        if animation.is_stopped() {
            return;
        }
        let frame = animation.frame(now);
        element.set_text_content(Some(&frame.text));
        if frame.done {
            holder_for_cb.borrow_mut().take();
            return;
        }
        if let Some(cb) = holder_for_cb.borrow().as_ref() {
            match frame_window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => frame_id_for_cb.set(Some(id)),
                Err(_) => log::warn!("counter: animation frame request failed"),
            }
        }
    }) as Box<dyn FnMut(f64)>);

    let id = window.request_animation_frame(cb.as_ref().unchecked_ref()).ok()?;
    frame_id.set(Some(id));
    *holder.borrow_mut() = Some(cb);
    Some(RunningCounter {
        window,
        stop,
        frame_id,
        holder,
    })
}

/// Starts watching the stat counters. Called once layout has settled.
pub fn attach(
    window: &Window,
    document: &Document,
    strategy: VisibilityStrategy,
    config: &BehaviorConfig,
    running: Rc<RefCell<Vec<RunningCounter>>>,
) -> Result<Option<ObserverHandle>, BehaviorError> {
    if !strategy.is_supported() {
        log::info!("counters left static: no IntersectionObserver");
        return Ok(None);
    }

    let counters = dom::query_all(document, COUNTER_SELECTOR)?;
    let mut shots = OneShot::new();
    for counter in &counters {
        shots.stamp(counter);
    }

    let window = window.clone();
    let duration_ms = config.counter_duration_ms;
    strategy.observe(&ObserveOptions::default(), &counters, move |counter, observer| {
        if !shots.claim_element(counter) {
            return;
        }
        observer.unobserve(counter);
        let text = counter.text_content().unwrap_or_default();
        match CounterSpec::parse(&text) {
            Some(spec) => {
                let animation = CounterAnimation::new(spec, duration_ms);
                if let Some(started) = run(window.clone(), counter.clone(), animation) {
                    running.borrow_mut().push(started);
                }
            }
            None => log::debug!("counter: no number in {:?}, leaving as is", text),
        }
    })
}
