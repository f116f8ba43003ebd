//! Maps read-statement rows back into [`Node`]s.
//!
//! Each row is expected to carry the node's property map under `n` and its
//! label list under `labels`. Rows that don't are reported and skipped; one
//! bad row never fails the whole result.

use serde_json::Value;
use thiserror::Error;

use crate::cypher_query_generator::{LABELS_COLUMN, NODE_COLUMN};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::graph_model::{Node, Properties, PropertyValue};

use super::executor::ResultRow;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DecodeError {
    #[error("row has no bound node under `{0}`")]
    MissingNode(&'static str),
    #[error("bound node is not a property map: {0}")]
    InvalidNode(String),
    #[error("row has no label list under `{0}`")]
    MissingLabels(&'static str),
    #[error("label list contains a non-string entry: {0}")]
    InvalidLabel(String),
}

/// Decode every row, skipping (and reporting) rows that cannot be decoded.
pub fn decode_nodes(rows: &[ResultRow], sink: &dyn DiagnosticSink) -> Vec<Node> {
    rows.iter()
        .enumerate()
        .filter_map(|(position, row)| match decode_node(row, sink) {
            Ok(node) => Some(node),
            Err(e) => {
                sink.emit(Diagnostic::error(format!(
                    "skipping result row {}: {} ({})",
                    position,
                    e,
                    Value::Object(row.clone())
                )));
                None
            }
        })
        .collect()
}

/// Decode one row.
///
/// Property values outside the integer/float/text variants (booleans, lists,
/// maps, nulls) are dropped from the node with a warning.
pub fn decode_node(row: &ResultRow, sink: &dyn DiagnosticSink) -> Result<Node, DecodeError> {
    let bound = match row.get(NODE_COLUMN) {
        None | Some(Value::Null) => return Err(DecodeError::MissingNode(NODE_COLUMN)),
        Some(Value::Object(map)) => map,
        Some(other) => return Err(DecodeError::InvalidNode(other.to_string())),
    };

    let labels = match row.get(LABELS_COLUMN) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(label) => Ok(label.clone()),
                other => Err(DecodeError::InvalidLabel(other.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?,
        _ => return Err(DecodeError::MissingLabels(LABELS_COLUMN)),
    };

    let mut properties = Properties::new();
    for (key, value) in bound {
        match property_from_json(value) {
            Some(value) => {
                properties.insert(key.clone(), value);
            }
            None => sink.emit(Diagnostic::warn(format!(
                "dropping property `{}` with unsupported value {}",
                key, value
            ))),
        }
    }

    Ok(Node {
        labels,
        properties: if properties.is_empty() {
            None
        } else {
            Some(properties)
        },
    })
}

fn property_from_json(value: &Value) -> Option<PropertyValue> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(PropertyValue::Integer)
            .or_else(|| n.as_f64().map(PropertyValue::Float)),
        Value::String(s) => Some(PropertyValue::Text(s.clone())),
        _ => None,
    }
}
