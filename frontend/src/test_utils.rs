//! In-memory stand-ins for the browser collaborators.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use crate::{
    error::LoadError,
    localization::{
        page::{TranslatableNode, TranslatablePage},
        source::TranslationSource,
        store::PreferenceStore,
        translations::Translations,
    },
};

type Handler = Rc<dyn Fn(String) -> Pin<Box<dyn Future<Output = ()>>>>;

/// Serves registered JSON bodies and answers 404 for everything else.
#[derive(Clone, Default)]
pub struct FakeSource {
    inner: Rc<RefCell<SourceState>>,
}

#[derive(Default)]
struct SourceState {
    bodies: HashMap<String, String>,
    fetches: Vec<String>,
}

impl FakeSource {
    pub fn with(self, code: &str, body: &str) -> Self {
        self.inner
            .borrow_mut()
            .bodies
            .insert(code.to_owned(), body.to_owned());
        self
    }

    pub fn fetches(&self) -> Vec<String> {
        self.inner.borrow().fetches.clone()
    }

    pub fn fetch_count(&self, code: &str) -> usize {
        self.inner
            .borrow()
            .fetches
            .iter()
            .filter(|fetched| *fetched == code)
            .count()
    }
}

impl TranslationSource for FakeSource {
    async fn fetch(&self, code: &str) -> Result<Translations, LoadError> {
        self.inner.borrow_mut().fetches.push(code.to_owned());
        let body = self.inner.borrow().bodies.get(code).cloned();
        match body {
            Some(body) => Ok(Translations::from_json(&body)?),
            None => Err(LoadError::Status {
                url: format!("translations/{code}.json"),
                status: 404,
            }),
        }
    }
}

#[derive(Clone, Default)]
pub struct FakeStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl FakeStore {
    pub fn with(self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for FakeStore {
    fn get(&self, key: &str) -> Option<String> {
        self.value(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}

/// Records everything localization writes to the document.
#[derive(Clone, Default)]
pub struct FakePage {
    state: Rc<RefCell<PageState>>,
}

#[derive(Default)]
struct PageState {
    nodes: Vec<NodeState>,
    elements: HashMap<String, HashMap<String, String>>,
    document_language: Option<String>,
    selector: Option<String>,
    handler: Option<Handler>,
}

struct NodeState {
    key: String,
    submit: bool,
    text: String,
    value: String,
}

pub struct FakeNode {
    state: Rc<RefCell<PageState>>,
    index: usize,
    key: String,
}

impl FakePage {
    pub fn with_node(self, key: &str, text: &str) -> Self {
        self.push_node(key, false, text, "")
    }

    pub fn with_submit(self, key: &str, value: &str) -> Self {
        self.push_node(key, true, "", value)
    }

    fn push_node(self, key: &str, submit: bool, text: &str, value: &str) -> Self {
        self.state.borrow_mut().nodes.push(NodeState {
            key: key.to_owned(),
            submit,
            text: text.to_owned(),
            value: value.to_owned(),
        });
        self
    }

    pub fn with_element(self, id: &str) -> Self {
        self.state
            .borrow_mut()
            .elements
            .insert(id.to_owned(), HashMap::new());
        self
    }

    pub fn with_selector(self) -> Self {
        self.state.borrow_mut().selector = Some(String::new());
        self
    }

    pub fn text(&self, index: usize) -> String {
        self.state.borrow().nodes[index].text.clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.state
            .borrow()
            .nodes
            .iter()
            .map(|node| node.text.clone())
            .collect()
    }

    pub fn value(&self, index: usize) -> String {
        self.state.borrow().nodes[index].value.clone()
    }

    pub fn attribute(&self, id: &str, attribute: &str) -> Option<String> {
        self.state.borrow().elements.get(id)?.get(attribute).cloned()
    }

    pub fn document_language(&self) -> Option<String> {
        self.state.borrow().document_language.clone()
    }

    pub fn selector_value(&self) -> Option<String> {
        self.state.borrow().selector.clone()
    }

    /// Simulates the user picking `code`, returning the handler's future.
    pub fn select(&self, code: &str) -> Option<Pin<Box<dyn Future<Output = ()>>>> {
        let handler = self.state.borrow().handler.clone()?;
        self.state.borrow_mut().selector = Some(code.to_owned());
        Some(handler(code.to_owned()))
    }
}

impl TranslatablePage for FakePage {
    type Node = FakeNode;

    fn translatable_nodes(&self, _attribute: &str) -> Vec<FakeNode> {
        self.state
            .borrow()
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| FakeNode {
                state: self.state.clone(),
                index,
                key: node.key.clone(),
            })
            .collect()
    }

    fn set_element_attribute(&self, element_id: &str, attribute: &str, value: &str) -> bool {
        match self.state.borrow_mut().elements.get_mut(element_id) {
            Some(attributes) => {
                attributes.insert(attribute.to_owned(), value.to_owned());
                true
            }
            None => false,
        }
    }

    fn set_document_language(&self, code: &str) {
        self.state.borrow_mut().document_language = Some(code.to_owned());
    }

    fn set_selector_value(&self, _selector_id: &str, code: &str) -> bool {
        match &mut self.state.borrow_mut().selector {
            Some(value) => {
                *value = code.to_owned();
                true
            }
            None => false,
        }
    }

    fn on_language_selected<F, Fut>(&self, _selector_id: &str, handler: F) -> bool
    where
        F: Fn(String) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let mut state = self.state.borrow_mut();
        if state.selector.is_none() {
            return false;
        }
        let handler: Handler = Rc::new(move |code: String| -> Pin<Box<dyn Future<Output = ()>>> {
            Box::pin(handler(code))
        });
        state.handler = Some(handler);
        true
    }
}

impl TranslatableNode for FakeNode {
    fn translation_key(&self) -> &str {
        &self.key
    }

    fn is_submit_input(&self) -> bool {
        self.state.borrow().nodes[self.index].submit
    }

    fn set_text(&self, text: &str) {
        self.state.borrow_mut().nodes[self.index].text = text.to_owned();
    }

    fn set_value(&self, value: &str) {
        self.state.borrow_mut().nodes[self.index].value = value.to_owned();
    }
}
