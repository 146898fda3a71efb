//! Slide-out mobile menu.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent, Node, Window};

use crate::behavior::debounce::{BrowserTimers, Debouncer};
use crate::behavior::dom;
use crate::behavior::registry::ListenerTable;
use crate::config::BehaviorConfig;
use crate::error::{absorb, BehaviorError};

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

pub const HAMBURGER_ID: &str = "hamburger";
pub const NAV_MENU_ID: &str = "nav-menu";
const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    HamburgerActivated,
    OutsideClick,
    Escape,
    LinkClicked,
    ViewportResized { width: f64 },
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn apply(self, event: MenuEvent, breakpoint: f64) -> MenuState {
        match event {
            MenuEvent::HamburgerActivated => match self {
                MenuState::Closed => MenuState::Open,
                MenuState::Open => MenuState::Closed,
            },
            MenuEvent::OutsideClick | MenuEvent::Escape | MenuEvent::LinkClicked => {
                MenuState::Closed
            }
            MenuEvent::ViewportResized { width } if width > breakpoint => MenuState::Closed,
            MenuEvent::ViewportResized { .. } => self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
}

/// Styles for the hamburger's three bars: an "X" while open.
pub fn bar_styles(state: MenuState) -> [BarStyle; 3] {
    match state {
        MenuState::Open => [
            BarStyle { transform: "rotate(45deg) translate(5px, 5px)", opacity: "1" },
            BarStyle { transform: "none", opacity: "0" },
            BarStyle { transform: "rotate(-45deg) translate(7px, -6px)", opacity: "1" },
        ],
        MenuState::Closed => [BarStyle { transform: "none", opacity: "1" }; 3],
    }
}

/// Owns the menu state and the elements it drives.
pub struct MobileMenu {
    state: MenuState,
    breakpoint: f64,
    hamburger: Element,
    menu: Element,
}

impl MobileMenu {
    pub fn handle(&mut self, event: MenuEvent) -> Result<(), BehaviorError> {
        let next = self.state.apply(event, self.breakpoint);
        if next == self.state {
            return Ok(());
        }
        self.state = next;
        log::debug!("mobile menu {:?} after {:?}", next, event);
        self.render()
    }

    fn render(&self) -> Result<(), BehaviorError> {
        let open = self.state.is_open();
        self.hamburger.class_list().toggle_with_force(ACTIVE_CLASS, open)?;
        self.menu.class_list().toggle_with_force(ACTIVE_CLASS, open)?;

        let bars = dom::query_all_in(&self.hamburger, "span")?;
        for (bar, style) in bars.iter().zip(bar_styles(self.state)) {
            dom::set_style(bar, "transform", style.transform)?;
            dom::set_style(bar, "opacity", style.opacity)?;
        }
        Ok(())
    }

    fn contains(&self, target: &Node) -> bool {
        self.hamburger.contains(Some(target)) || self.menu.contains(Some(target))
    }
}

fn dispatch(menu: &Rc<RefCell<MobileMenu>>, event: MenuEvent) {
    let result = match menu.try_borrow_mut() {
        Ok(mut menu) => menu.handle(event),
        Err(_) => return,
    };
    absorb("mobile menu", result);
}

pub fn attach(
    table: &mut ListenerTable,
    window: &Window,
    document: &Document,
    config: &BehaviorConfig,
) -> Result<(), BehaviorError> {
    let hamburger = dom::by_id(document, HAMBURGER_ID)?;
    let nav_menu = dom::by_id(document, NAV_MENU_ID)?;
    let menu = Rc::new(RefCell::new(MobileMenu {
        state: MenuState::default(),
        breakpoint: config.mobile_breakpoint,
        hamburger: hamburger.clone(),
        menu: nav_menu,
    }));

    {
        let menu = Rc::clone(&menu);
        table.listen(&hamburger, HAMBURGER_ID, "click", move |_| {
            dispatch(&menu, MenuEvent::HamburgerActivated)
        })?;
    }

    for link in dom::query_all(document, ".nav-link")? {
        let menu = Rc::clone(&menu);
        table.listen(&link, ".nav-link", "click", move |_| {
            dispatch(&menu, MenuEvent::LinkClicked)
        })?;
    }

    {
        let menu = Rc::clone(&menu);
        table.listen(document, "document", "click", move |event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            let outside = menu.try_borrow().map_or(false, |m| !m.contains(&target));
            if outside {
                dispatch(&menu, MenuEvent::OutsideClick);
            }
        })?;
    }

    {
        let menu = Rc::clone(&menu);
        table.listen(document, "document", "keydown", move |event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .map_or(false, |key| key.key() == "Escape");
            if is_escape {
                dispatch(&menu, MenuEvent::Escape);
            }
        })?;
    }

    let resize_window = window.clone();
    let resized = Debouncer::new(BrowserTimers, config.resize_debounce_ms, move || {
        let width = resize_window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        dispatch(&menu, MenuEvent::ViewportResized { width });
    });
    table.listen(window, "window", "resize", move |_| resized.trigger())
}
