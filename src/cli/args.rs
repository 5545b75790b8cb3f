use crate::core::patcher::{PatchRequest, BASE_WORKFLOW};
use crate::core::types::{Motion, Quality};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Image loaded into both start-frame loader nodes
    #[arg(long, value_name = "PATH", help_heading = "Frames")]
    pub start_image: String,

    /// Image loaded into both end-frame loader nodes
    #[arg(long, value_name = "PATH", help_heading = "Frames")]
    pub end_image: String,

    /// Camera motion preset
    #[arg(long, value_enum, value_name = "NAME", help_heading = "Motion")]
    pub motion: Motion,

    /// Override the preset's motion video path/URL
    #[arg(long, value_name = "PATH", help_heading = "Motion")]
    pub motion_video: Option<String>,

    /// Render a quick preview (sample) or the final video (full)
    #[arg(long, value_enum, default_value_t = Quality::Sample, help_heading = "Output")]
    pub quality: Quality,

    /// Base graph to patch
    #[arg(long, default_value = BASE_WORKFLOW, value_name = "FILE", help_heading = "Output")]
    pub base_workflow: PathBuf,

    /// Where to write the generated workflow
    #[arg(long, value_name = "FILE", help_heading = "Output")]
    pub output: PathBuf,

    /// Log patch steps at debug level
    #[arg(long, help_heading = "Output Options")]
    pub verbose: bool,
}

impl GenerateArgs {
    pub fn to_request(&self) -> PatchRequest {
        PatchRequest {
            start_image: self.start_image.clone(),
            end_image: self.end_image.clone(),
            motion: self.motion,
            quality: self.quality,
            motion_video: self.motion_video.clone(),
        }
    }
}
