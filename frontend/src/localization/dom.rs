use std::future::Future;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::helpers::prelude::*;

use super::page::{TranslatableNode, TranslatablePage};

/// The live document.
pub struct DomPage {
    document: Document,
}

pub struct DomNode {
    element: web_sys::Element,
    key: String,
}

impl DomPage {
    pub fn new() -> Option<Self> {
        Some(Self {
            document: WebPage::document()?,
        })
    }
}

impl TranslatablePage for DomPage {
    type Node = DomNode;

    fn translatable_nodes(&self, attribute: &str) -> Vec<DomNode> {
        Element::query_all_in(&self.document, &format!("[{attribute}]"))
            .into_iter()
            .filter_map(|element| {
                let key = element.get_attribute(attribute)?;
                Some(DomNode { element, key })
            })
            .collect()
    }

    fn set_element_attribute(&self, element_id: &str, attribute: &str, value: &str) -> bool {
        let Some(element) = self.document.get_element_by_id(element_id) else {
            return false;
        };
        if let Err(err) = element.set_attribute(attribute, value) {
            log::warn!("Unable to set `{attribute}` on `#{element_id}`: {err:?}");
        }
        true
    }

    fn set_document_language(&self, code: &str) {
        if let Some(root) = self.document.document_element() {
            if let Err(err) = root.set_attribute("lang", code) {
                log::warn!("Unable to set document language: {err:?}");
            }
        }
    }

    fn set_selector_value(&self, selector_id: &str, code: &str) -> bool {
        match self.document.get_element_by_id(selector_id) {
            Some(selector) => Input::set_value(&selector, code),
            None => false,
        }
    }

    fn on_language_selected<F, Fut>(&self, selector_id: &str, handler: F) -> bool
    where
        F: Fn(String) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let Some(selector) = self.document.get_element_by_id(selector_id) else {
            return false;
        };

        Events::listen(&selector, "change", move |event| {
            let code = event.target().and_then(|target| Input::value_of(&target));
            if let Some(code) = code {
                wasm_bindgen_futures::spawn_local(handler(code));
            }
        })
    }
}

impl TranslatableNode for DomNode {
    fn translation_key(&self) -> &str {
        &self.key
    }

    fn is_submit_input(&self) -> bool {
        self.element
            .dyn_ref::<HtmlInputElement>()
            .map_or(false, |input| input.type_() == "submit")
    }

    fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn set_value(&self, value: &str) {
        Input::set_value(&self.element, value);
    }
}
