use wasm_bindgen::JsCast;
use web_sys::{Document, NodeList};

use super::prelude::*;

pub struct Element {}

impl Element {
    #[inline]
    pub fn query(selector: &str) -> Option<web_sys::Element> {
        WebPage::document()?.query_selector(selector).ok().flatten()
    }

    pub fn query_all(selector: &str) -> Vec<web_sys::Element> {
        match WebPage::document() {
            Some(document) => Self::query_all_in(&document, selector),
            None => Vec::new(),
        }
    }

    pub fn query_all_in(document: &Document, selector: &str) -> Vec<web_sys::Element> {
        Self::collect(document.query_selector_all(selector).ok())
    }

    pub fn query_all_within(parent: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
        Self::collect(parent.query_selector_all(selector).ok())
    }

    fn collect(list: Option<NodeList>) -> Vec<web_sys::Element> {
        let Some(list) = list else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .collect()
    }
}
