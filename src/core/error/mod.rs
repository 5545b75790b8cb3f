use crate::core::types::ErrorCategory;
use std::path::PathBuf;

/// Failures raised while loading, patching or writing a workflow document.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("Base workflow not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid workflow JSON in {}", path.display())]
    DecodeError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid workflow document: {0}")]
    InvalidDocument(String),
    #[error("Node id {0} not found in workflow")]
    NodeNotFound(i64),
    #[error("Node {node_id} has unexpected widgets_values (expected {expected})")]
    WidgetShape {
        node_id: i64,
        expected: &'static str,
    },
    #[error("Unknown motion preset '{0}' (expected one of: down, rotate_left, rotate_right, up, zoom)")]
    UnknownPreset(String),
    #[error("Unknown quality '{0}' (expected sample or full)")]
    UnknownQuality(String),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PatchError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            PatchError::FileNotFound { path }
        } else {
            PatchError::Io { path, source }
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PatchError::FileNotFound { .. } | PatchError::Io { .. } => ErrorCategory::IoError,
            PatchError::DecodeError { .. } | PatchError::Serialize(_) => {
                ErrorCategory::SerializationError
            }
            PatchError::InvalidDocument(_)
            | PatchError::NodeNotFound(_)
            | PatchError::WidgetShape { .. } => ErrorCategory::WorkflowError,
            PatchError::UnknownPreset(_) | PatchError::UnknownQuality(_) => {
                ErrorCategory::ValidationError
            }
        }
    }
}

pub trait ErrorReporter {
    fn report_error(&self, error: &anyhow::Error);
    fn report_warning(&self, message: &str, context: Option<String>);
}

pub struct DefaultErrorReporter;

impl DefaultErrorReporter {
    pub fn new() -> Self {
        DefaultErrorReporter
    }

    /// Render the report written by [`ErrorReporter::report_error`].
    pub fn render(error: &anyhow::Error) -> String {
        let category = error
            .chain()
            .find_map(|cause| cause.downcast_ref::<PatchError>())
            .map(PatchError::category);
        let mut out = match category {
            Some(category) => format!("[ERROR] {}: {}", category, error),
            None => format!("[ERROR] {}", error),
        };
        for cause in error.chain().skip(1) {
            out.push_str(&format!("\n  Caused by: {}", cause));
        }
        out
    }
}

impl Default for DefaultErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorReporter for DefaultErrorReporter {
    fn report_error(&self, error: &anyhow::Error) {
        eprintln!("{}", Self::render(error));
    }

    fn report_warning(&self, message: &str, context: Option<String>) {
        eprintln!("[WARNING] {}", message);
        if let Some(ref ctx) = context {
            eprintln!("  Context: {}", ctx);
        }
    }
}
