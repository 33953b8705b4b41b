use web_sys::Element as DomElement;

use crate::helpers::prelude::*;

const ACTIVE: &str = "active";

/// Opens and closes the collapsed navigation on small screens.
pub fn init_mobile_menu() {
    let (Some(toggle), Some(menu)) = (Element::query(".nav-toggle"), Element::query(".nav-menu"))
    else {
        log::debug!("No mobile menu on this page.");
        return;
    };

    {
        let toggle_button = toggle.clone();
        let menu = menu.clone();
        Events::listen(&toggle, "click", move |_| {
            set_active(&menu, None);
            set_active(&toggle_button, None);
        });
    }

    for link in Element::query_all_within(&menu, "a") {
        let toggle = toggle.clone();
        let menu = menu.clone();
        Events::listen(&link, "click", move |_| {
            set_active(&menu, Some(false));
            set_active(&toggle, Some(false));
        });
    }
}

/// `None` toggles.
fn set_active(element: &DomElement, active: Option<bool>) {
    let classes = element.class_list();
    let result = match active {
        None => classes.toggle(ACTIVE).map(|_| ()),
        Some(true) => classes.add_1(ACTIVE),
        Some(false) => classes.remove_1(ACTIVE),
    };
    if let Err(err) = result {
        log::warn!("Unable to update menu state: {err:?}");
    }
}
