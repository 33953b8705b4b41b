use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlInputElement, HtmlSelectElement};

pub struct Input {}

impl Input {
    /// Sets the value of a `<select>` or `<input>`. Returns `false` for
    /// anything else.
    pub fn set_value(element: &web_sys::Element, value: &str) -> bool {
        if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else {
            return false;
        }
        true
    }

    pub fn value_of(target: &EventTarget) -> Option<String> {
        if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
            return Some(select.value());
        }
        target
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::value)
    }
}
