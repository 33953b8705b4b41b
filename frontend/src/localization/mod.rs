use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{config::SiteConfig, error::LoadError};

use self::{
    page::{render_into, TranslatablePage},
    source::TranslationSource,
    store::PreferenceStore,
    translations::Translations,
};

pub mod dom;
pub mod page;
pub mod source;
pub mod store;
pub mod translations;

/// Current language plus every translation mapping loaded so far.
///
/// Created once per page and shared behind an `Rc`. Loaded mappings are
/// never evicted or re-fetched.
pub struct Localization<S, P, D> {
    config: SiteConfig,
    source: S,
    store: P,
    page: D,
    current: RefCell<String>,
    cache: RefCell<HashMap<String, Rc<Translations>>>,
}

impl<S, P, D> Localization<S, P, D>
where
    S: TranslationSource,
    P: PreferenceStore,
    D: TranslatablePage,
{
    pub fn new(config: SiteConfig, source: S, store: P, page: D) -> Self {
        let current = store
            .get(&config.storage_key)
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| config.default_language.clone());

        Self {
            config,
            source,
            store,
            page,
            current: RefCell::new(current),
            cache: RefCell::default(),
        }
    }

    pub fn current_language(&self) -> String {
        self.current.borrow().clone()
    }

    pub fn is_cached(&self, code: &str) -> bool {
        self.cache.borrow().contains_key(code)
    }

    /// Resolves `key_path` against the current language, if it is loaded.
    pub fn translate(&self, key_path: &str) -> Option<String> {
        let cache = self.cache.borrow();
        let translations = cache.get(self.current.borrow().as_str())?;
        translations.resolve(key_path).map(str::to_owned)
    }

    /// Returns the mapping for `code`, fetching it on first use.
    ///
    /// A failed load falls back to the default language once; if that fails
    /// too, the result is an empty mapping.
    pub async fn load_language(&self, code: &str) -> Rc<Translations> {
        let err = match self.load_cached(code).await {
            Ok(translations) => return translations,
            Err(err) => err,
        };
        log::error!("Error loading translations for `{code}`: {err}");

        let default = self.config.default_language.as_str();
        if code == default {
            return Rc::default();
        }

        log::warn!("Falling back to `{default}` translations.");
        match self.load_cached(default).await {
            Ok(translations) => translations,
            Err(err) => {
                log::error!("Error loading translations for `{default}`: {err}");
                Rc::default()
            }
        }
    }

    async fn load_cached(&self, code: &str) -> Result<Rc<Translations>, LoadError> {
        if let Some(translations) = self.cache.borrow().get(code) {
            log::debug!("Translations for `{code}` served from cache.");
            return Ok(translations.clone());
        }

        let translations = Rc::new(self.source.fetch(code).await?);
        Ok(self
            .cache
            .borrow_mut()
            .entry(code.to_owned())
            .or_insert(translations)
            .clone())
    }

    pub async fn switch_language(&self, code: &str) {
        self.load_language(code).await;

        self.current.replace(code.to_owned());
        self.store.set(&self.config.storage_key, code);
        self.apply(code);
    }

    /// Loads the saved language and its sibling, renders the page and
    /// starts listening to the language selector.
    pub async fn initialize(self: Rc<Self>)
    where
        S: 'static,
        P: 'static,
        D: 'static,
    {
        let current = self.current_language();
        self.load_language(&current).await;
        self.load_language(self.config.sibling_of(&current)).await;

        self.apply(&current);

        let context = Rc::clone(&self);
        let bound = self
            .page
            .on_language_selected(&self.config.selector_id, move |code| {
                let context = Rc::clone(&context);
                async move { context.switch_language(&code).await }
            });
        if !bound {
            log::debug!("No `#{}` on this page.", self.config.selector_id);
        }

        log::info!("Localization ready in `{current}`.");
    }

    /// Renders `code`'s own mapping. A language that failed to load keeps
    /// the page text as it is; assets, `lang` and the selector still follow.
    fn apply(&self, code: &str) {
        let translations = self.cache.borrow().get(code).cloned();
        match translations {
            Some(translations) => {
                let updated =
                    render_into(&self.page, &translations, &self.config.translate_attribute);
                log::debug!("Rendered {updated} translated elements in `{code}`.");
            }
            None => log::warn!("No translations for `{code}`, page text left unchanged."),
        }

        self.apply_language_assets(code);
        self.page.set_document_language(code);
        self.page.set_selector_value(&self.config.selector_id, code);
    }

    /// Points language-dependent images and links at `code`'s resources.
    pub fn apply_language_assets(&self, code: &str) {
        for asset in &self.config.language_assets {
            self.page
                .set_element_attribute(&asset.element_id, &asset.attribute, &asset.url_for(code));
        }
    }
}
