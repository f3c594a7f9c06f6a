//! Translate, cache, execute

use polyrun_cache::{CacheEntry, CacheKey, CacheStore};
use polyrun_config::{Settings, TranslatorConfig};
use polyrun_core::{Error, GeneratedJs, Result, SourceUnit, JAVASCRIPT_LANGUAGE};
use polyrun_sandbox::{ExecutionSandbox, SubprocessSandbox};
use polyrun_translate::{HttpTransport, ReqwestTransport, TranslationService};
use polyrun_utils::tracing::cache_event;
use tracing::Instrument;

/// How the JavaScript for a run was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactOrigin {
    /// The source already was JavaScript
    Passthrough,
    CacheHit,
    Translated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedArtifact {
    pub js: GeneratedJs,
    pub origin: ArtifactOrigin,
}

/// Sequential pipeline for one source unit
pub struct Pipeline<T, S> {
    translator: TranslationService<T>,
    sandbox: S,
    config: TranslatorConfig,
    cache: Option<CacheStore>,
    force_llm: bool,
}

impl Pipeline<ReqwestTransport, SubprocessSandbox> {
    /// Production pipeline for resolved settings
    pub fn from_settings(settings: &Settings) -> Self {
        let pipeline = Pipeline::new(
            TranslationService::with_reqwest(),
            SubprocessSandbox::new(settings.runtime.clone()),
            settings.translator.clone(),
        )
        .force_llm(settings.force_llm);

        if settings.no_cache {
            pipeline
        } else {
            pipeline.with_cache(CacheStore::new(settings.cache_dir.clone()))
        }
    }
}

impl<T, S> Pipeline<T, S>
where
    T: HttpTransport,
    S: ExecutionSandbox,
{
    /// Pipeline without a cache
    pub fn new(translator: TranslationService<T>, sandbox: S, config: TranslatorConfig) -> Self {
        Self {
            translator,
            sandbox,
            config,
            cache: None,
            force_llm: false,
        }
    }

    pub fn with_cache(mut self, cache: CacheStore) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Translate JavaScript sources too instead of running them as-is
    pub fn force_llm(mut self, force: bool) -> Self {
        self.force_llm = force;
        self
    }

    pub fn translator(&self) -> &TranslationService<T> {
        &self.translator
    }

    pub fn sandbox(&self) -> &S {
        &self.sandbox
    }

    /// Obtain JavaScript for `unit` without running it.
    ///
    /// Order: passthrough for JavaScript sources, then the cache, then a
    /// translation that is written back to the cache. A failed cache write
    /// only logs a warning.
    pub async fn prepare(&self, unit: &SourceUnit) -> Result<PreparedArtifact> {
        if !self.force_llm && unit.language_hint() == Some(JAVASCRIPT_LANGUAGE) {
            tracing::debug!(source_id = %unit.id(), "source is JavaScript, skipping translation");
            let js = GeneratedJs::new(unit.text()).ok_or_else(|| Error::empty_translation(unit.id()))?;
            return Ok(PreparedArtifact {
                js,
                origin: ArtifactOrigin::Passthrough,
            });
        }

        let key = CacheKey::for_request(unit, self.config.model(), self.config.base_url());

        if let Some(cache) = &self.cache {
            let hit = cache.get(&key).await;
            cache_event(unit.id(), key.as_str(), hit.is_some());
            if let Some(entry) = hit {
                return Ok(PreparedArtifact {
                    js: entry.generated_js,
                    origin: ArtifactOrigin::CacheHit,
                });
            }
        }

        let js = self.translator.translate(unit, &self.config).await?;

        if let Some(cache) = &self.cache {
            let entry = CacheEntry::new(unit, &js);
            if let Err(e) = cache.put(&key, &entry).await {
                tracing::warn!(error = %e, "could not write translation to cache");
            }
        }

        Ok(PreparedArtifact {
            js,
            origin: ArtifactOrigin::Translated,
        })
    }

    /// Run a prepared artifact for `unit`
    pub async fn execute(&self, artifact: &PreparedArtifact, unit: &SourceUnit) -> Result<()> {
        self.sandbox.execute(&artifact.js, unit.id()).await
    }

    /// Prepare and execute in one step
    pub async fn run(&self, unit: &SourceUnit) -> Result<PreparedArtifact> {
        let span = polyrun_utils::tracing::pipeline_span(unit.id());
        async {
            let artifact = self.prepare(unit).await?;
            self.execute(&artifact, unit).await?;
            Ok(artifact)
        }
        .instrument(span)
        .await
    }
}
