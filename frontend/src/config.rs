/// Placeholder substituted with the language code in asset templates.
const LANGUAGE_PLACEHOLDER: &str = "{lang}";

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub default_language: String,
    /// Preloaded next to the default language; the site ships exactly two.
    pub alternate_language: String,
    pub translations_dir: String,
    pub storage_key: String,
    pub translate_attribute: String,
    pub selector_id: String,
    pub language_assets: Vec<LanguageAsset>,
    pub navbar: NavbarConfig,
}

/// An element whose attribute points at a per-language resource.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageAsset {
    pub element_id: String,
    pub attribute: String,
    pub template: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavbarConfig {
    /// Height of the fixed navbar, subtracted from smooth scroll targets.
    pub offset: i32,
    pub shadow_threshold: f64,
    pub raised_shadow: String,
    pub resting_shadow: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_language: "en".into(),
            alternate_language: "tr".into(),
            translations_dir: "translations".into(),
            storage_key: "language".into(),
            translate_attribute: "data-translate".into(),
            selector_id: "languageSelect".into(),
            language_assets: vec![
                LanguageAsset::new("appStoreIcon", "src", "resources/icons/{lang}/appstore.svg"),
                LanguageAsset::new("appStoreIcon2", "src", "resources/icons/{lang}/appstore.svg"),
                LanguageAsset::new("privacyLink", "href", "content/{lang}/privacy-policy.html"),
                LanguageAsset::new("termsLink", "href", "content/{lang}/terms-of-service.html"),
                LanguageAsset::new("kvkkLink", "href", "content/{lang}/kvkk.html"),
            ],
            navbar: NavbarConfig::default(),
        }
    }
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            offset: 80,
            shadow_threshold: 100.0,
            raised_shadow: "0 4px 6px rgba(0, 0, 0, 0.1)".into(),
            resting_shadow: "0 2px 4px rgba(0, 0, 0, 0.05)".into(),
        }
    }
}

impl SiteConfig {
    /// The language worth preloading next to `code`.
    pub fn sibling_of(&self, code: &str) -> &str {
        if code == self.default_language {
            &self.alternate_language
        } else {
            &self.default_language
        }
    }
}

impl LanguageAsset {
    pub fn new(element_id: &str, attribute: &str, template: &str) -> Self {
        Self {
            element_id: element_id.into(),
            attribute: attribute.into(),
            template: template.into(),
        }
    }

    pub fn url_for(&self, code: &str) -> String {
        self.template.replace(LANGUAGE_PLACEHOLDER, code)
    }
}

impl NavbarConfig {
    pub fn shadow_for(&self, scroll_y: f64) -> &str {
        if scroll_y > self.shadow_threshold {
            &self.raised_shadow
        } else {
            &self.resting_shadow
        }
    }
}
