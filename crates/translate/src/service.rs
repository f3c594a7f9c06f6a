//! Translation service

use crate::completion::request_completion;
use crate::extract::extract_code;
use crate::prompt::build_prompt;
use crate::transport::{HttpTransport, ReqwestTransport};
use polyrun_config::TranslatorConfig;
use polyrun_core::{Error, GeneratedJs, Result, SourceUnit, OPENAI_API_KEY_VAR};

/// Turns source units into JavaScript with one completion request each
#[derive(Debug, Clone)]
pub struct TranslationService<T> {
    transport: T,
}

impl TranslationService<ReqwestTransport> {
    /// Service using the `reqwest` transport
    pub fn with_reqwest() -> Self {
        Self::new(ReqwestTransport::new())
    }
}

impl<T: HttpTransport> TranslationService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Translate `unit` into JavaScript.
    ///
    /// Fails with a configuration error before touching the network when no
    /// credential is configured. The request is bounded by `config.timeout`.
    pub async fn translate(
        &self,
        unit: &SourceUnit,
        config: &TranslatorConfig,
    ) -> Result<GeneratedJs> {
        let credential = config.api_key().ok_or_else(|| {
            Error::configuration(format!(
                "{OPENAI_API_KEY_VAR} is not set; it is required to translate '{}'",
                unit.id()
            ))
        })?;

        let model = config.model();
        let prompt = build_prompt(unit);
        tracing::info!(source_id = %unit.id(), model = %model, "translating source");

        let call = request_completion(
            &self.transport,
            model,
            credential,
            config.base_url(),
            &prompt,
        );
        let raw = tokio::time::timeout(config.timeout, call)
            .await
            .map_err(|_| Error::timeout("translation request", config.timeout))??;

        let code = extract_code(&raw);
        let generated = GeneratedJs::new(code).ok_or_else(|| Error::empty_translation(unit.id()))?;

        tracing::info!(source_id = %unit.id(), bytes = generated.len(), "translation complete");
        Ok(generated)
    }
}
