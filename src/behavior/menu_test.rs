use super::*;

const BREAKPOINT: f64 = 768.0;

fn closing_events() -> Vec<MenuEvent> {
    vec![
        MenuEvent::HamburgerActivated,
        MenuEvent::OutsideClick,
        MenuEvent::Escape,
        MenuEvent::LinkClicked,
        MenuEvent::ViewportResized { width: 1024.0 },
    ]
}

#[test]
fn starts_closed() {
    assert_eq!(MenuState::default(), MenuState::Closed);
}

#[test]
fn hamburger_opens_closed_menu() {
    assert_eq!(
        MenuState::Closed.apply(MenuEvent::HamburgerActivated, BREAKPOINT),
        MenuState::Open
    );
}

#[test]
fn every_close_trigger_closes_open_menu() {
    for event in closing_events() {
        assert_eq!(
            MenuState::Open.apply(event, BREAKPOINT),
            MenuState::Closed,
            "{:?}",
            event
        );
    }
}

#[test]
fn close_triggers_are_idempotent() {
    for event in closing_events().into_iter().skip(1) {
        let once = MenuState::Open.apply(event, BREAKPOINT);
        assert_eq!(once.apply(event, BREAKPOINT), once, "{:?}", event);
    }
}

#[test]
fn narrow_resize_keeps_menu_open() {
    let state = MenuState::Open.apply(MenuEvent::ViewportResized { width: 768.0 }, BREAKPOINT);
    assert_eq!(state, MenuState::Open);
    let state = MenuState::Open.apply(MenuEvent::ViewportResized { width: 400.0 }, BREAKPOINT);
    assert_eq!(state, MenuState::Open);
}

#[test]
fn close_events_do_not_open_closed_menu() {
    for event in closing_events().into_iter().skip(1) {
        assert_eq!(MenuState::Closed.apply(event, BREAKPOINT), MenuState::Closed);
    }
}

#[test]
fn open_bars_form_an_x() {
    let [top, middle, bottom] = bar_styles(MenuState::Open);
    assert_eq!(top.transform, "rotate(45deg) translate(5px, 5px)");
    assert_eq!(middle.opacity, "0");
    assert_eq!(bottom.transform, "rotate(-45deg) translate(7px, -6px)");
}

#[test]
fn closed_bars_are_neutral() {
    for bar in bar_styles(MenuState::Closed) {
        assert_eq!(bar, BarStyle { transform: "none", opacity: "1" });
    }
}
