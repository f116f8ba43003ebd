//! JSON payload intake.
//!
//! Converts loosely typed input (JSON text or an already parsed
//! [`serde_json::Value`]) into typed entities. Property values must be
//! numbers or strings; anything else is rejected here rather than at
//! generation time.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::graph_model::{Node, Relationship};

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Malformed {kind} payload: {source}")]
    Malformed {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub fn parse_node(text: &str) -> Result<Node, PayloadError> {
    parse("node", text)
}

pub fn parse_nodes(text: &str) -> Result<Vec<Node>, PayloadError> {
    parse("node list", text)
}

pub fn parse_relationships(text: &str) -> Result<Vec<Relationship>, PayloadError> {
    parse("relationship list", text)
}

pub fn node_from_value(value: Value) -> Result<Node, PayloadError> {
    from_value("node", value)
}

pub fn nodes_from_value(value: Value) -> Result<Vec<Node>, PayloadError> {
    from_value("node list", value)
}

pub fn relationships_from_value(value: Value) -> Result<Vec<Relationship>, PayloadError> {
    from_value("relationship list", value)
}

fn parse<T: DeserializeOwned>(kind: &'static str, text: &str) -> Result<T, PayloadError> {
    serde_json::from_str(text).map_err(|source| PayloadError::Malformed { kind, source })
}

fn from_value<T: DeserializeOwned>(kind: &'static str, value: Value) -> Result<T, PayloadError> {
    serde_json::from_value(value).map_err(|source| PayloadError::Malformed { kind, source })
}
