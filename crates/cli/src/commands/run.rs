use super::RunArgs;
use crate::input::{read_source, SourceInput};
use crate::pipeline::{ArtifactOrigin, Pipeline, PreparedArtifact};
use polyrun_config::Settings;
use polyrun_core::{Result, SourceUnit};
use polyrun_utils::write_atomic_string;
use std::io::Write;
use tracing::Instrument;

const JS_BANNER_START: &str = "----- polyrun: generated JavaScript -----";
const JS_BANNER_END: &str = "----- polyrun: end generated JavaScript -----";

pub async fn execute(args: &RunArgs, settings: &Settings) -> Result<()> {
    let input = SourceInput::from_arg(args.file.as_deref());
    let unit = read_source(&input, settings.language.as_deref()).await?;

    let span = polyrun_utils::tracing::pipeline_span(unit.id());
    run_unit(args, settings, &unit).instrument(span).await
}

async fn run_unit(args: &RunArgs, settings: &Settings, unit: &SourceUnit) -> Result<()> {
    let pipeline = Pipeline::from_settings(settings);
    let artifact = pipeline.prepare(unit).await?;
    tracing::debug!(origin = ?artifact.origin, "artifact ready");

    if settings.print_js {
        print_js(&artifact);
    }

    if let Some(path) = &args.emit {
        write_atomic_string(path, artifact.js.as_str()).await?;
        tracing::info!(path = %path.display(), "wrote generated JavaScript");
        return Ok(());
    }

    if artifact.origin == ArtifactOrigin::Passthrough {
        tracing::info!("running JavaScript source directly");
    }
    pipeline.execute(&artifact, unit).await
}

fn print_js(artifact: &PreparedArtifact) {
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "{JS_BANNER_START}");
    let _ = writeln!(stderr, "{}", artifact.js.as_str().trim_end());
    let _ = writeln!(stderr, "{JS_BANNER_END}");
}
