pub mod config;
pub mod error;
pub mod helpers;
pub mod localization;
pub mod ui;

#[cfg(test)]
mod test_utils;

use std::rc::Rc;

use config::SiteConfig;
use localization::{dom::DomPage, source::HttpSource, store::LocalStore, Localization};

/// Wires up the page once the DOM is ready.
pub fn start() {
    let config = SiteConfig::default();
    ui::init(&config);

    let Some(page) = DomPage::new() else {
        log::error!("Document is not available, skipping localization.");
        return;
    };
    let source = HttpSource::new(&config.translations_dir);
    let localization = Rc::new(Localization::new(config, source, LocalStore::new(), page));
    wasm_bindgen_futures::spawn_local(localization.initialize());
}
