use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement};

use crate::behavior::dom;
use crate::behavior::registry::ListenerTable;
use crate::error::{absorb, BehaviorError};

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

const REQUIRED_SELECTOR: &str = "input[required], textarea[required]";
const ERROR_CLASS: &str = "error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Accepted,
    /// Indices of the required fields left blank.
    Rejected { empty: Vec<usize> },
}

impl FormOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, FormOutcome::Accepted)
    }

    pub fn is_empty_field(&self, index: usize) -> bool {
        match self {
            FormOutcome::Accepted => false,
            FormOutcome::Rejected { empty } => empty.contains(&index),
        }
    }
}

pub fn validate<S: AsRef<str>>(values: &[S]) -> FormOutcome {
    let empty: Vec<usize> = values
        .iter()
        .enumerate()
        .filter(|(_, value)| value.as_ref().trim().is_empty())
        .map(|(index, _)| index)
        .collect();
    if empty.is_empty() {
        FormOutcome::Accepted
    } else {
        FormOutcome::Rejected { empty }
    }
}

fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn check(form: &Element) -> Result<FormOutcome, BehaviorError> {
    let fields = dom::query_all_in(form, REQUIRED_SELECTOR)?;
    let values: Vec<String> = fields.iter().map(field_value).collect();
    let outcome = validate(&values);
    for (index, field) in fields.iter().enumerate() {
        field
            .class_list()
            .toggle_with_force(ERROR_CLASS, outcome.is_empty_field(index))?;
    }
    Ok(outcome)
}

pub fn attach(table: &mut ListenerTable, document: &Document) -> Result<(), BehaviorError> {
    for form in dom::query_all(document, "form")? {
        let target = form.clone();
        table.listen(&form, "form", "submit", move |event| {
            event.prevent_default();
            match check(&target) {
                Ok(outcome) if outcome.is_accepted() => {
                    log::info!("Form is valid, ready to submit")
                }
                Ok(outcome) => log::debug!("form rejected: {:?}", outcome),
                Err(e) => absorb("form guard", Err(e)),
            }
        })?;
    }
    Ok(())
}
