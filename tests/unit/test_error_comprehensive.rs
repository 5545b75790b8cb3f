use segflow::core::error::{DefaultErrorReporter, PatchError};
use segflow::core::types::ErrorCategory;
use std::io;
use std::path::PathBuf;

fn decode_error() -> serde_json::Error {
    serde_json::from_str::<serde_json::Value>("{").unwrap_err()
}

#[test]
fn test_error_category_mapping() {
    let test_cases = vec![
        (
            PatchError::FileNotFound {
                path: PathBuf::from("4I2V Flow"),
            },
            ErrorCategory::IoError,
        ),
        (
            PatchError::Io {
                path: PathBuf::from("out.json"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            },
            ErrorCategory::IoError,
        ),
        (
            PatchError::DecodeError {
                path: PathBuf::from("flow.json"),
                source: decode_error(),
            },
            ErrorCategory::SerializationError,
        ),
        (PatchError::Serialize(decode_error()), ErrorCategory::SerializationError),
        (
            PatchError::InvalidDocument("missing `nodes` array".to_string()),
            ErrorCategory::WorkflowError,
        ),
        (PatchError::NodeNotFound(568), ErrorCategory::WorkflowError),
        (
            PatchError::WidgetShape {
                node_id: 125,
                expected: "a positional array",
            },
            ErrorCategory::WorkflowError,
        ),
        (
            PatchError::UnknownPreset("spin".to_string()),
            ErrorCategory::ValidationError,
        ),
        (
            PatchError::UnknownQuality("draft".to_string()),
            ErrorCategory::ValidationError,
        ),
    ];

    for (error, expected) in test_cases {
        assert_eq!(error.category(), expected, "{error}");
    }
}

#[test]
fn test_error_messages_name_the_culprit() {
    assert_eq!(
        PatchError::FileNotFound {
            path: PathBuf::from("4I2V Flow")
        }
        .to_string(),
        "Base workflow not found: 4I2V Flow"
    );
    assert_eq!(
        PatchError::NodeNotFound(53).to_string(),
        "Node id 53 not found in workflow"
    );
    assert!(PatchError::UnknownPreset("spin".to_string())
        .to_string()
        .contains("'spin'"));
    assert!(PatchError::UnknownQuality("draft".to_string())
        .to_string()
        .contains("sample or full"));
    assert_eq!(
        PatchError::WidgetShape {
            node_id: 568,
            expected: "a keyed object"
        }
        .to_string(),
        "Node 568 has unexpected widgets_values (expected a keyed object)"
    );
}

#[test]
fn test_decode_error_exposes_source() {
    let error = PatchError::DecodeError {
        path: PathBuf::from("flow.json"),
        source: decode_error(),
    };
    assert!(std::error::Error::source(&error).is_some());
    assert!(error.to_string().starts_with("Invalid workflow JSON in flow.json"));
}

#[test]
fn test_reporter_renders_plain_anyhow_errors() {
    let error = anyhow::anyhow!("output directory is read-only");
    assert_eq!(
        DefaultErrorReporter::render(&error),
        "[ERROR] output directory is read-only"
    );
}

#[test]
fn test_reporter_renders_category_from_cause_chain() {
    let error = anyhow::Error::new(PatchError::FileNotFound {
        path: PathBuf::from("missing.json"),
    })
    .context("failed to build workflow from missing.json");
    let rendered = DefaultErrorReporter::render(&error);
    assert!(rendered.starts_with("[ERROR] IoError: failed to build workflow from missing.json"));
    assert!(rendered.contains("Caused by: Base workflow not found: missing.json"));
}

#[test]
fn test_reporter_prints_decode_cause_once() {
    let source = decode_error();
    let cause = source.to_string();
    let error = anyhow::Error::new(PatchError::DecodeError {
        path: PathBuf::from("bad.json"),
        source,
    });
    let rendered = DefaultErrorReporter::render(&error);
    assert!(rendered.starts_with("[ERROR] SerializationError: Invalid workflow JSON in bad.json\n"));
    assert_eq!(rendered.matches(cause.as_str()).count(), 1, "{rendered}");
}
