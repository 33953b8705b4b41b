use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{Event, EventTarget};

use super::prelude::*;

pub struct Events {}

impl Events {
    /// Registers `handler` for the page lifetime. Returns `false` when the
    /// browser rejects the listener.
    pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> bool
    where
        F: FnMut(Event) + 'static,
    {
        let cb: Closure<dyn FnMut(Event)> = Closure::new(handler);
        let result = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
        cb.forget();

        if let Err(err) = result {
            log::error!("Unable to listen to `{event}`: {err:?}");
            return false;
        }
        true
    }

    /// Runs `callback` once the DOM is parsed.
    pub fn on_dom_ready<F>(callback: F)
    where
        F: FnOnce() + 'static,
    {
        let Some(document) = WebPage::document() else {
            log::error!("Document is not available.");
            return;
        };

        if is_parsed(&document.ready_state()) {
            callback();
            return;
        }

        let mut callback = Some(callback);
        Self::listen(&document, "DOMContentLoaded", move |_| {
            if let Some(callback) = callback.take() {
                callback();
            }
        });
    }
}

/// `document.readyState` is `loading` until the HTML is parsed.
fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}
