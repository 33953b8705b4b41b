use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::{config::NavbarConfig, helpers::prelude::*};

/// Deepens the navbar shadow once the page is scrolled.
pub fn init_navbar_scroll(config: &NavbarConfig) {
    let navbar = Element::query(".navbar").and_then(|e| e.dyn_into::<HtmlElement>().ok());
    let (Some(navbar), Some(window)) = (navbar, WebPage::window()) else {
        log::debug!("No navbar on this page.");
        return;
    };

    let config = config.clone();
    Events::listen(&window, "scroll", move |_| {
        let shadow = config.shadow_for(WebPage::scroll_y());
        if let Err(err) = navbar.style().set_property("box-shadow", shadow) {
            log::warn!("Unable to set navbar shadow: {err:?}");
        }
    });
}
