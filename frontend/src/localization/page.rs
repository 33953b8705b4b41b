use std::future::Future;

use super::translations::Translations;

/// An element that opted into translation.
pub trait TranslatableNode {
    fn translation_key(&self) -> &str;
    /// Submit inputs show their `value`, not their text content.
    fn is_submit_input(&self) -> bool;
    fn set_text(&self, text: &str);
    fn set_value(&self, value: &str);
}

/// The parts of the document localization writes to.
pub trait TranslatablePage {
    type Node: TranslatableNode;

    fn translatable_nodes(&self, attribute: &str) -> Vec<Self::Node>;

    /// Returns `false` when no element has `element_id`.
    fn set_element_attribute(&self, element_id: &str, attribute: &str, value: &str) -> bool;

    fn set_document_language(&self, code: &str);

    fn set_selector_value(&self, selector_id: &str, code: &str) -> bool;

    /// Runs `handler` with the newly chosen code whenever the selector changes.
    fn on_language_selected<F, Fut>(&self, selector_id: &str, handler: F) -> bool
    where
        F: Fn(String) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static;
}

/// Pushes `translations` into every node marked with `attribute`.
///
/// Nodes whose key does not resolve to a non-empty string keep their
/// current content. Returns how many nodes were updated.
pub fn render_into<D: TranslatablePage>(
    page: &D,
    translations: &Translations,
    attribute: &str,
) -> usize {
    let mut updated = 0;
    for node in page.translatable_nodes(attribute) {
        let text = match translations.resolve(node.translation_key()) {
            Some(text) if !text.is_empty() => text,
            _ => continue,
        };

        if node.is_submit_input() {
            node.set_value(text);
        } else {
            node.set_text(text);
        }
        updated += 1;
    }
    updated
}
