use polyrun_config::Settings;
use polyrun_core::{Error, GeneratedJs, Result, EVAL_SOURCE_ID};
use polyrun_sandbox::{ExecutionSandbox, SubprocessSandbox};
use tracing::Instrument;

/// Run inline JavaScript in the sandbox, bypassing translation and the cache
pub async fn execute(code: &str, settings: &Settings) -> Result<()> {
    let js = GeneratedJs::new(code)
        .ok_or_else(|| Error::configuration("eval needs a non-empty JavaScript snippet"))?;

    let span = polyrun_utils::tracing::pipeline_span(EVAL_SOURCE_ID);
    SubprocessSandbox::new(settings.runtime.clone())
        .execute(&js, EVAL_SOURCE_ID)
        .instrument(span)
        .await
}
