use gloo_net::http::Request;

use crate::error::LoadError;

use super::translations::Translations;

/// Where translation files come from.
#[allow(async_fn_in_trait)]
pub trait TranslationSource {
    async fn fetch(&self, code: &str) -> Result<Translations, LoadError>;
}

/// Fetches `<directory>/<code>.json` relative to the page.
pub struct HttpSource {
    directory: String,
}

impl HttpSource {
    pub fn new(directory: &str) -> Self {
        Self {
            directory: directory.trim_end_matches('/').to_owned(),
        }
    }

    pub fn url_for(&self, code: &str) -> String {
        format!("{}/{code}.json", self.directory)
    }
}

impl TranslationSource for HttpSource {
    async fn fetch(&self, code: &str) -> Result<Translations, LoadError> {
        let url = self.url_for(code);
        let response = Request::get(&url).send().await?;
        if !response.ok() {
            return Err(LoadError::Status {
                url,
                status: response.status(),
            });
        }

        let body = response.text().await?;
        Ok(Translations::from_json(&body)?)
    }
}
