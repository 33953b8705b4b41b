use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::helpers::prelude::*;

/// `#` alone and an empty href keep the browser's default behavior.
pub fn is_in_page_anchor(href: &str) -> bool {
    !href.is_empty() && href != "#"
}

pub fn scroll_top_for(offset_top: i32, navbar_offset: i32) -> f64 {
    f64::from(offset_top - navbar_offset)
}

/// Scrolls smoothly to in-page anchors, leaving room for the fixed navbar.
pub fn init_smooth_scroll(navbar_offset: i32) {
    for anchor in Element::query_all("a[href^=\"#\"]") {
        let link = anchor.clone();
        Events::listen(&anchor, "click", move |event| {
            let href = link.get_attribute("href").unwrap_or_default();
            if !is_in_page_anchor(&href) {
                return;
            }
            event.prevent_default();

            let target = Element::query(&href).and_then(|t| t.dyn_into::<HtmlElement>().ok());
            let (Some(target), Some(window)) = (target, WebPage::window()) else {
                return;
            };

            let options = ScrollToOptions::new();
            options.set_top(scroll_top_for(target.offset_top(), navbar_offset));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
    }
}
