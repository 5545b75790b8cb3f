//! Order-preserving view over a node-graph workflow document.
//!
//! The document is kept as raw JSON so that keys the patcher never touches
//! (links, groups, editor metadata) survive a load/save cycle unchanged. Nodes
//! are exposed through [`NodeRef`], which knows the two shapes a node's
//! `widgets_values` can take.

use crate::core::error::PatchError;
use crate::core::types::NodeMode;
use crate::utils::serialization::{FileSerializer, FileUtils, JsonSerializer};
use serde_json::{Map, Value};
use std::path::Path;

const NODES_KEY: &str = "nodes";
const ID_KEY: &str = "id";
const MODE_KEY: &str = "mode";
const WIDGETS_KEY: &str = "widgets_values";

/// Root of a workflow graph document.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowDocument {
    root: Map<String, Value>,
}

impl WorkflowDocument {
    /// Wrap a parsed JSON value, checking it is an object with a `nodes` array.
    pub fn from_value(value: Value) -> Result<Self, PatchError> {
        let Value::Object(root) = value else {
            return Err(PatchError::InvalidDocument(
                "top-level value must be an object".to_string(),
            ));
        };
        match root.get(NODES_KEY) {
            Some(Value::Array(_)) => Ok(Self { root }),
            Some(_) => Err(PatchError::InvalidDocument(
                "`nodes` must be an array".to_string(),
            )),
            None => Err(PatchError::InvalidDocument(
                "missing `nodes` array".to_string(),
            )),
        }
    }

    /// Read and decode a workflow document from disk.
    pub fn load(path: &Path) -> Result<Self, PatchError> {
        let value: Value = FileUtils.load_from_file(path, &JsonSerializer::pretty())?;
        Self::from_value(value)
    }

    /// Write the document as 2-space indented JSON.
    pub fn save(&self, path: &Path) -> Result<(), PatchError> {
        FileUtils.save_to_file(path, &self.root, &JsonSerializer::pretty())
    }

    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }

    pub fn nodes(&self) -> &[Value] {
        match self.root.get(NODES_KEY) {
            Some(Value::Array(nodes)) => nodes.as_slice(),
            _ => &[],
        }
    }

    fn nodes_mut(&mut self) -> Result<&mut Vec<Value>, PatchError> {
        self.root
            .get_mut(NODES_KEY)
            .and_then(Value::as_array_mut)
            .ok_or_else(|| PatchError::InvalidDocument("missing `nodes` array".to_string()))
    }

    /// Mutable handle on the first node whose `id` equals `node_id`.
    pub fn find_node(&mut self, node_id: i64) -> Result<NodeRef<'_>, PatchError> {
        find_node(self.nodes_mut()?, node_id)
    }

    pub fn contains_node(&self, node_id: i64) -> bool {
        self.nodes()
            .iter()
            .any(|node| node_id_of(node) == Some(node_id))
    }

    /// Fail with the first id in `node_ids` that has no matching node.
    pub fn require_nodes(&self, node_ids: &[i64]) -> Result<(), PatchError> {
        match node_ids.iter().find(|id| !self.contains_node(**id)) {
            Some(missing) => Err(PatchError::NodeNotFound(*missing)),
            None => Ok(()),
        }
    }
}

fn node_id_of(node: &Value) -> Option<i64> {
    node.get(ID_KEY).and_then(Value::as_i64)
}

/// Linear first-match lookup over a node sequence.
pub fn find_node(nodes: &mut [Value], node_id: i64) -> Result<NodeRef<'_>, PatchError> {
    nodes
        .iter_mut()
        .filter_map(Value::as_object_mut)
        .find(|fields| fields.get(ID_KEY).and_then(Value::as_i64) == Some(node_id))
        .map(|fields| NodeRef {
            id: node_id,
            fields,
        })
        .ok_or(PatchError::NodeNotFound(node_id))
}

/// The two observed shapes of a node's `widgets_values`.
#[derive(Debug)]
pub enum Widgets<'a> {
    Positional(&'a mut Vec<Value>),
    Keyed(&'a mut Map<String, Value>),
}

/// Borrowed node object inside a [`WorkflowDocument`].
#[derive(Debug)]
pub struct NodeRef<'a> {
    id: i64,
    fields: &'a mut Map<String, Value>,
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn mode(&self) -> Option<i64> {
        self.fields.get(MODE_KEY).and_then(Value::as_i64)
    }

    pub fn set_mode(&mut self, mode: NodeMode) {
        self.fields
            .insert(MODE_KEY.to_string(), Value::from(mode.as_i64()));
    }

    /// Current widgets, or `None` when absent, `null` or a bare scalar.
    pub fn widgets(&mut self) -> Option<Widgets<'_>> {
        match self.fields.get_mut(WIDGETS_KEY)? {
            Value::Array(items) => Some(Widgets::Positional(items)),
            Value::Object(map) => Some(Widgets::Keyed(map)),
            _ => None,
        }
    }

    /// Positional widgets, initialised with `default` when absent or `null`.
    pub fn positional_widgets_or_insert_with<F>(
        &mut self,
        default: F,
    ) -> Result<&mut Vec<Value>, PatchError>
    where
        F: FnOnce() -> Vec<Value>,
    {
        let node_id = self.id;
        let slot = self.widgets_slot();
        if slot.is_null() {
            *slot = Value::Array(default());
        }
        match slot {
            Value::Array(items) => Ok(items),
            _ => Err(PatchError::WidgetShape {
                node_id,
                expected: "a positional array",
            }),
        }
    }

    /// Keyed widgets, initialised to an empty object when absent or `null`.
    pub fn keyed_widgets_or_insert(&mut self) -> Result<&mut Map<String, Value>, PatchError> {
        let node_id = self.id;
        let slot = self.widgets_slot();
        if slot.is_null() {
            *slot = Value::Object(Map::new());
        }
        match slot {
            Value::Object(map) => Ok(map),
            _ => Err(PatchError::WidgetShape {
                node_id,
                expected: "a keyed object",
            }),
        }
    }

    fn widgets_slot(&mut self) -> &mut Value {
        self.fields
            .entry(WIDGETS_KEY)
            .or_insert(Value::Null)
    }
}
