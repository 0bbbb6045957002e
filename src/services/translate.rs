use crate::config::TranslateConfig;
use crate::models::{Language, TargetLang, TranslateResponse};
use anyhow::Result;
use reqwest::header;
use std::collections::BTreeMap;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Proxy to the public Google Translate endpoint. No caching, no retries.
#[derive(Clone)]
pub struct Translator {
    client: reqwest::Client,
    api_base: String,
    source_lang: String,
}

impl Translator {
    pub fn new(client: reqwest::Client, config: &TranslateConfig) -> Self {
        Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            source_lang: config.source_lang.clone(),
        }
    }

    pub async fn translate(&self, text: &str, lang: Language) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let url = format!("{}/translate_a/single", self.api_base);
        tracing::debug!("Translating {} chars to {}", text.len(), lang);

        let body: serde_json::Value = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", self.source_lang.as_str()),
                ("tl", lang.code()),
                ("dt", "t"),
                ("q", text),
            ])
            .header(header::USER_AGENT, BROWSER_USER_AGENT)
            .header(
                header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.5")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match extract_translation(&body) {
            Some(translated) => Ok(translated),
            None => {
                tracing::debug!("No translation segments in response, returning original");
                Ok(text.to_string())
            }
        }
    }

    /// Answers a `/api/translate` request. With [`TargetLang::All`] a
    /// language whose call fails is left out of the result.
    pub async fn relay(&self, text: &str, target: TargetLang) -> Result<TranslateResponse> {
        let mut response = TranslateResponse {
            original: text.to_string(),
            lang: target.to_string(),
            ..Default::default()
        };

        match target {
            TargetLang::One(lang) => {
                response.translated = self.translate(text, lang).await?;
            }
            TargetLang::All => {
                let (uz, en) = tokio::join!(
                    self.translate(text, Language::Uz),
                    self.translate(text, Language::En)
                );
                let mut translations = BTreeMap::new();
                for (lang, result) in [(Language::Uz, uz), (Language::En, en)] {
                    match result {
                        Ok(translated) => {
                            translations.insert(lang.code().to_string(), translated);
                        }
                        Err(e) => tracing::warn!("Translation to {} failed: {:#}", lang, e),
                    }
                }
                response.translations = translations;
            }
        }

        Ok(response)
    }
}

/// Joins the translated text of every segment in a `translate_a/single`
/// response (`[[["seg", "src", ...], ...], ...]`).
pub fn extract_translation(body: &serde_json::Value) -> Option<String> {
    let segments = body.get(0)?.as_array()?;
    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|s| s.as_str()))
        .collect();
    (!text.is_empty()).then_some(text)
}
