use super::*;

#[test]
fn ids_are_sequential() {
    let mut shots = OneShot::new();
    assert_eq!(shots.register(), 0);
    assert_eq!(shots.register(), 1);
    assert_eq!(shots.register(), 2);
}

#[test]
fn claim_fires_once_per_element() {
    let mut shots = OneShot::new();
    let card = shots.register();
    assert!(shots.claim(card));
    // Scrolling back into view again must not re-trigger
    for _ in 0..5 {
        assert!(!shots.claim(card));
    }
}

#[test]
fn claims_are_independent() {
    let mut shots = OneShot::new();
    let a = shots.register();
    let b = shots.register();
    assert!(shots.claim(b));
    assert!(shots.claim(a));
    assert!(!shots.claim(b));
}

#[test]
fn unregistered_id_cannot_be_claimed() {
    let mut shots = OneShot::new();
    assert!(!shots.claim(7));
    shots.register();
    assert!(!shots.claim(7));
}
