pub mod error;
pub mod patcher;
pub mod presets;
pub mod types;
pub mod workflow;

pub use error::{DefaultErrorReporter, ErrorReporter, PatchError};
pub use patcher::{build_workflow, build_workflow_from_file, PatchRequest};
pub use presets::{MotionPreset, OutputModes};
pub use types::*;
pub use workflow::{NodeRef, Widgets, WorkflowDocument};
