use web_sys::{Document, Storage, Window};

pub struct WebPage {}

impl WebPage {
    #[inline]
    pub fn window() -> Option<Window> {
        web_sys::window()
    }

    #[inline]
    pub fn document() -> Option<Document> {
        Self::window()?.document()
    }

    #[inline]
    pub fn local_storage() -> Option<Storage> {
        Self::window()?.local_storage().ok().flatten()
    }

    pub fn scroll_y() -> f64 {
        Self::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }
}
