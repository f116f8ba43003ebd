//! # Graph entity model
//!
//! Typed descriptions of the nodes and relationships handed to the Cypher
//! generator. Entities are plain values: they are built by the caller (or
//! parsed from a JSON payload), consumed by a builder, and dropped.
//!
//! Property mappings keep insertion order, which is the order keys appear in
//! generated inline maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Insertion-ordered property mapping.
pub type Properties = IndexMap<String, PropertyValue>;

/// Scalar property value.
///
/// Deserialization tries integer, then float, then text, so JSON `5` becomes
/// `Integer(5)` and `5.0` becomes `Float(5.0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Integer(i) => write!(f, "{}", i),
            // Debug keeps the fractional part on integral floats (2022.0, not 2022)
            PropertyValue::Float(x) => write!(f, "{:?}", x),
            PropertyValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Integer(value.into())
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Float(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

/// A graph node: ordered labels (the first one is the primary label) plus
/// optional properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

impl Node {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            properties: None,
        }
    }

    /// Append a property, keeping insertion order.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties
            .get_or_insert_with(Properties::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn primary_label(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }
}

/// A directed, typed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    #[serde(rename = "type")]
    pub rel_type: String,
    pub from_node: Node,
    pub to_node: Node,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

impl Relationship {
    pub fn new(rel_type: impl Into<String>, from_node: Node, to_node: Node) -> Self {
        Self {
            rel_type: rel_type.into(),
            from_node,
            to_node,
            properties: None,
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties
            .get_or_insert_with(Properties::new)
            .insert(key.into(), value.into());
        self
    }
}

/// An ordered batch of create requests. Position in the batch is the index
/// used for generated variable names.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateBatch {
    Nodes(Vec<Node>),
    Relationships(Vec<Relationship>),
}

impl CreateBatch {
    pub fn len(&self) -> usize {
        match self {
            CreateBatch::Nodes(nodes) => nodes.len(),
            CreateBatch::Relationships(relationships) => relationships.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
