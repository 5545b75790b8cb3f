use crate::{cli::args::GenerateArgs, core::patcher::build_workflow_from_file, Result};
use anyhow::Context;
use std::path::PathBuf;
use tracing::info;

/// Patch the base workflow and write it to `args.output`.
///
/// Nothing is written unless every mutation succeeded.
pub fn generate(args: &GenerateArgs) -> Result<PathBuf> {
    let request = args.to_request();
    let document = build_workflow_from_file(&args.base_workflow, &request).with_context(|| {
        format!(
            "failed to build workflow from {}",
            args.base_workflow.display()
        )
    })?;

    document
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(output = %args.output.display(), "wrote workflow");

    Ok(args.output.clone())
}
