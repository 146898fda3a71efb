use std::collections::HashSet;

use web_sys::Element;

#[cfg(test)]
#[path = "oneshot_test.rs"]
mod oneshot_test;

pub const ID_ATTRIBUTE: &str = "data-behavior-id";

/// Per-element "already animated" flags. Elements are stamped with a numeric
/// id when registered; `claim` succeeds once per id.
#[derive(Debug, Default)]
pub struct OneShot {
    next_id: u32,
    fired: HashSet<u32>,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn claim(&mut self, id: u32) -> bool {
        id < self.next_id && self.fired.insert(id)
    }

    pub fn stamp(&mut self, element: &Element) -> u32 {
        let id = self.register();
        let _ = element.set_attribute(ID_ATTRIBUTE, &id.to_string());
        id
    }

    pub fn claim_element(&mut self, element: &Element) -> bool {
        element
            .get_attribute(ID_ATTRIBUTE)
            .and_then(|raw| raw.parse::<u32>().ok())
            .map_or(false, |id| self.claim(id))
    }
}
