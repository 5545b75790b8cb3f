use crate::core::error::PatchError;
use std::fmt;
use std::str::FromStr;

/// Camera motion styles backed by a preset in [`crate::core::presets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Motion {
    #[value(name = "zoom")]
    Zoom,
    #[value(name = "rotate_left")]
    RotateLeft,
    #[value(name = "rotate_right")]
    RotateRight,
    #[value(name = "up")]
    Up,
    #[value(name = "down")]
    Down,
}

impl Motion {
    pub const ALL: [Motion; 5] = [
        Motion::Zoom,
        Motion::RotateLeft,
        Motion::RotateRight,
        Motion::Up,
        Motion::Down,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Motion::Zoom => "zoom",
            Motion::RotateLeft => "rotate_left",
            Motion::RotateRight => "rotate_right",
            Motion::Up => "up",
            Motion::Down => "down",
        }
    }
}

impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Motion {
    type Err = PatchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Motion::ALL
            .into_iter()
            .find(|motion| motion.as_str() == value)
            .ok_or_else(|| PatchError::UnknownPreset(value.to_string()))
    }
}

/// Render quality: a quick preview pass or the full-resolution output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Quality {
    #[default]
    Sample,
    Full,
}

impl Quality {
    pub fn as_str(self) -> &'static str {
        match self {
            Quality::Sample => "sample",
            Quality::Full => "full",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quality {
    type Err = PatchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "sample" => Ok(Quality::Sample),
            "full" => Ok(Quality::Full),
            other => Err(PatchError::UnknownQuality(other.to_string())),
        }
    }
}

/// Node execution flag as stored in the graph's `mode` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeMode {
    Enabled,
    Bypassed,
}

impl NodeMode {
    pub fn as_i64(self) -> i64 {
        match self {
            NodeMode::Enabled => 0,
            NodeMode::Bypassed => 2,
        }
    }
}

/// Error category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    ValidationError,
    IoError,
    SerializationError,
    WorkflowError,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
