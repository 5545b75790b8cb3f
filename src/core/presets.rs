//! Static motion presets and the quality-to-mode table.

use crate::core::types::{Motion, NodeMode, Quality};

/// Parameters applied to the motion nodes of the base graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionPreset {
    pub video: &'static str,
    pub controlnet_strength: f64,
    pub controlnet_end: f64,
    pub motion_scale: f64,
}

const ZOOM: MotionPreset = MotionPreset {
    video: "motions/zoom.mp4",
    controlnet_strength: 0.55,
    controlnet_end: 0.45,
    motion_scale: 1.15,
};

const ROTATE_LEFT: MotionPreset = MotionPreset {
    video: "motions/rotate_left.mp4",
    controlnet_strength: 0.60,
    controlnet_end: 0.55,
    motion_scale: 1.12,
};

const ROTATE_RIGHT: MotionPreset = MotionPreset {
    video: "motions/rotate_right.mp4",
    controlnet_strength: 0.60,
    controlnet_end: 0.55,
    motion_scale: 1.12,
};

const TILT_UP: MotionPreset = MotionPreset {
    video: "motions/tilt_up.mp4",
    controlnet_strength: 0.60,
    controlnet_end: 0.55,
    motion_scale: 1.10,
};

const TILT_DOWN: MotionPreset = MotionPreset {
    video: "motions/tilt_down.mp4",
    controlnet_strength: 0.60,
    controlnet_end: 0.55,
    motion_scale: 1.10,
};

impl Motion {
    pub fn preset(self) -> &'static MotionPreset {
        match self {
            Motion::Zoom => &ZOOM,
            Motion::RotateLeft => &ROTATE_LEFT,
            Motion::RotateRight => &ROTATE_RIGHT,
            Motion::Up => &TILT_UP,
            Motion::Down => &TILT_DOWN,
        }
    }
}

/// Execution modes for the four output nodes of the base graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputModes {
    pub preview: NodeMode,
    pub final_video: NodeMode,
    pub interpolated: NodeMode,
    pub upscaled: NodeMode,
}

// Interpolation and upscaling stay bypassed for both qualities.
const SAMPLE_MODES: OutputModes = OutputModes {
    preview: NodeMode::Enabled,
    final_video: NodeMode::Bypassed,
    interpolated: NodeMode::Bypassed,
    upscaled: NodeMode::Bypassed,
};

const FULL_MODES: OutputModes = OutputModes {
    preview: NodeMode::Bypassed,
    final_video: NodeMode::Enabled,
    interpolated: NodeMode::Bypassed,
    upscaled: NodeMode::Bypassed,
};

impl Quality {
    pub fn output_modes(self) -> &'static OutputModes {
        match self {
            Quality::Sample => &SAMPLE_MODES,
            Quality::Full => &FULL_MODES,
        }
    }
}
