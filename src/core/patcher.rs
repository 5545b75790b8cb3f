//! Field mutations applied to the 4I2V base graph.
//!
//! Each setter targets a fixed node id of the base graph, asserts the shape of
//! its `widgets_values` and initialises it when missing. [`build_workflow`]
//! runs them in a fixed order after checking every targeted node is present.

use crate::core::error::PatchError;
use crate::core::presets::MotionPreset;
use crate::core::types::{Motion, Quality};
use crate::core::workflow::{NodeRef, Widgets, WorkflowDocument};
use serde_json::{json, Map, Value};
use std::path::Path;
use tracing::{debug, info};

/// File name of the base graph when `--base-workflow` is not given.
pub const BASE_WORKFLOW: &str = "4I2V Flow";

pub const LOAD_IMAGE_START_IDS: [i64; 2] = [142, 135];
pub const LOAD_IMAGE_END_IDS: [i64; 2] = [680, 683];
pub const MOTION_VIDEO_NODE_ID: i64 = 568;
pub const CONTROLNET_APPLY_NODE_ID: i64 = 125;
pub const MOTION_SCALE_NODE_ID: i64 = 256;
pub const VIDEO_PREVIEW_NODE_ID: i64 = 53;
pub const VIDEO_FINAL_NODE_ID: i64 = 205;
pub const VIDEO_INTERPOLATED_NODE_ID: i64 = 219;
pub const VIDEO_UPSCALED_NODE_ID: i64 = 272;

/// Every node id the patcher writes to.
pub const REQUIRED_NODE_IDS: [i64; 11] = [
    LOAD_IMAGE_START_IDS[0],
    LOAD_IMAGE_START_IDS[1],
    LOAD_IMAGE_END_IDS[0],
    LOAD_IMAGE_END_IDS[1],
    MOTION_VIDEO_NODE_ID,
    CONTROLNET_APPLY_NODE_ID,
    MOTION_SCALE_NODE_ID,
    VIDEO_PREVIEW_NODE_ID,
    VIDEO_FINAL_NODE_ID,
    VIDEO_INTERPOLATED_NODE_ID,
    VIDEO_UPSCALED_NODE_ID,
];

const IMAGE_UPLOAD_KIND: &str = "image";

/// Inputs for one generated segment workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchRequest {
    pub start_image: String,
    pub end_image: String,
    pub motion: Motion,
    pub quality: Quality,
    pub motion_video: Option<String>,
}

/// Point an image-loader node at `image_path`, keeping its `[path, "image"]` layout.
pub fn set_load_image(node: &mut NodeRef<'_>, image_path: &str) -> Result<(), PatchError> {
    let widgets = node.positional_widgets_or_insert_with(|| {
        vec![Value::from(""), Value::from(IMAGE_UPLOAD_KIND)]
    })?;
    if widgets.is_empty() {
        widgets.extend([Value::from(""), Value::from(IMAGE_UPLOAD_KIND)]);
    }
    widgets[0] = Value::from(image_path);
    if widgets.len() == 1 {
        widgets.push(Value::from(IMAGE_UPLOAD_KIND));
    }
    debug!(node_id = node.id(), image = image_path, "set load image");
    Ok(())
}

/// Resolve the motion video: a non-empty override wins over the preset default.
pub fn resolve_motion_video<'a>(
    preset: &'a MotionPreset,
    override_video: Option<&'a str>,
) -> &'a str {
    match override_video {
        Some(video) if !video.is_empty() => video,
        _ => preset.video,
    }
}

pub fn set_motion_settings(
    document: &mut WorkflowDocument,
    motion: Motion,
    override_video: Option<&str>,
) -> Result<(), PatchError> {
    let preset = motion.preset();
    let video_value = resolve_motion_video(preset, override_video);

    let mut video_node = document.find_node(MOTION_VIDEO_NODE_ID)?;
    let widgets = video_node.keyed_widgets_or_insert()?;
    widgets.insert("video".to_string(), Value::from(video_value));
    if let Some(Value::Object(preview)) = widgets.get_mut("videopreview") {
        let params = preview.entry("params").or_insert(Value::Null);
        if params.is_null() {
            *params = Value::Object(Map::new());
        }
        let Value::Object(params) = params else {
            return Err(PatchError::WidgetShape {
                node_id: MOTION_VIDEO_NODE_ID,
                expected: "an object at videopreview.params",
            });
        };
        params.insert("filename".to_string(), Value::from(video_value));
    }
    debug!(
        node_id = MOTION_VIDEO_NODE_ID,
        video = video_value,
        "set motion video"
    );

    let mut controlnet = document.find_node(CONTROLNET_APPLY_NODE_ID)?;
    let cn_widgets = controlnet
        .positional_widgets_or_insert_with(|| vec![json!(0.45), json!(0), json!(0.35)])?;
    while cn_widgets.len() < 3 {
        cn_widgets.push(json!(0));
    }
    cn_widgets[0] = json!(preset.controlnet_strength);
    cn_widgets[2] = json!(preset.controlnet_end);
    debug!(
        node_id = CONTROLNET_APPLY_NODE_ID,
        strength = preset.controlnet_strength,
        end = preset.controlnet_end,
        "set controlnet"
    );

    let mut scale_node = document.find_node(MOTION_SCALE_NODE_ID)?;
    let scale_widgets = scale_node.positional_widgets_or_insert_with(|| vec![json!(1.0)])?;
    match scale_widgets.first_mut() {
        Some(first) => *first = json!(preset.motion_scale),
        None => scale_widgets.push(json!(preset.motion_scale)),
    }
    debug!(
        node_id = MOTION_SCALE_NODE_ID,
        scale = preset.motion_scale,
        "set motion scale"
    );

    Ok(())
}

pub fn set_quality(document: &mut WorkflowDocument, quality: Quality) -> Result<(), PatchError> {
    let modes = quality.output_modes();
    for (node_id, mode) in [
        (VIDEO_PREVIEW_NODE_ID, modes.preview),
        (VIDEO_FINAL_NODE_ID, modes.final_video),
        (VIDEO_INTERPOLATED_NODE_ID, modes.interpolated),
        (VIDEO_UPSCALED_NODE_ID, modes.upscaled),
    ] {
        document.find_node(node_id)?.set_mode(mode);
        debug!(node_id, mode = mode.as_i64(), "set node mode");
    }
    Ok(())
}

/// `filename_prefix` written to the video output nodes.
pub fn output_prefix(motion: Motion, quality: Quality) -> String {
    format!("%date:yyyy-MM-dd%/{quality}/{motion}_{quality}/AD")
}

pub fn set_output_prefix(
    document: &mut WorkflowDocument,
    motion: Motion,
    quality: Quality,
) -> Result<(), PatchError> {
    let prefix = output_prefix(motion, quality);
    for node_id in [VIDEO_PREVIEW_NODE_ID, VIDEO_FINAL_NODE_ID] {
        let mut node = document.find_node(node_id)?;
        match node.widgets() {
            Some(Widgets::Keyed(widgets)) => {
                widgets.insert("filename_prefix".to_string(), Value::from(prefix.as_str()));
                debug!(node_id, prefix = %prefix, "set output prefix");
            }
            _ => debug!(node_id, "widgets not keyed, output prefix left unchanged"),
        }
    }
    Ok(())
}

/// Apply every mutation for `request`, in order, to `document`.
pub fn build_workflow(
    mut document: WorkflowDocument,
    request: &PatchRequest,
) -> Result<WorkflowDocument, PatchError> {
    document.require_nodes(&REQUIRED_NODE_IDS)?;

    for node_id in LOAD_IMAGE_START_IDS {
        set_load_image(&mut document.find_node(node_id)?, &request.start_image)?;
    }
    for node_id in LOAD_IMAGE_END_IDS {
        set_load_image(&mut document.find_node(node_id)?, &request.end_image)?;
    }

    set_motion_settings(&mut document, request.motion, request.motion_video.as_deref())?;
    set_quality(&mut document, request.quality)?;
    set_output_prefix(&mut document, request.motion, request.quality)?;

    info!(
        motion = %request.motion,
        quality = %request.quality,
        "patched workflow"
    );
    Ok(document)
}

/// Load the base graph from `base_workflow` and patch it.
pub fn build_workflow_from_file(
    base_workflow: &Path,
    request: &PatchRequest,
) -> Result<WorkflowDocument, PatchError> {
    let document = WorkflowDocument::load(base_workflow)?;
    info!(
        path = %base_workflow.display(),
        nodes = document.nodes().len(),
        "loaded base workflow"
    );
    build_workflow(document, request)
}
