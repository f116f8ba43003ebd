use std::fmt;
use thiserror::Error;

/// Which end of a relationship an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => write!(f, "Source"),
            Endpoint::Target => write!(f, "Target"),
        }
    }
}

/// What kind of name an identifier check was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Label,
    RelationshipType,
    PropertyKey,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::Label => write!(f, "label"),
            IdentifierKind::RelationshipType => write!(f, "relationship type"),
            IdentifierKind::PropertyKey => write!(f, "property key"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CypherGeneratorError {
    #[error("Node has no labels (MERGE needs a primary label)")]
    MissingLabel,
    #[error("{endpoint} node of `{rel_type}` relationship has no labels (MATCH needs a label to scope the endpoint)")]
    MissingEndpointLabel { rel_type: String, endpoint: Endpoint },
    #[error("Relationship type is empty")]
    EmptyRelationshipType,
    #[error("Invalid {kind} `{value}` (must be a letter or underscore followed by letters, digits or underscores)")]
    InvalidIdentifier { kind: IdentifierKind, value: String },
    #[error("Property `{key}` cannot be rendered: {reason}")]
    UnrenderableValue { key: String, reason: String },
    #[error("Batch is empty (nothing to generate)")]
    EmptyBatch,
    #[error("Batch entry {index} rejected: {source}")]
    BatchEntry {
        index: usize,
        source: Box<CypherGeneratorError>,
    },
}

impl CypherGeneratorError {
    /// Attach the batch position of the entity that failed.
    pub fn at_batch_entry(self, index: usize) -> Self {
        CypherGeneratorError::BatchEntry {
            index,
            source: Box::new(self),
        }
    }

    /// True for errors caused by the shape of an entity (missing labels,
    /// missing type, bad identifiers), as opposed to its property values.
    pub fn is_invalid_entity(&self) -> bool {
        match self {
            CypherGeneratorError::MissingLabel
            | CypherGeneratorError::MissingEndpointLabel { .. }
            | CypherGeneratorError::EmptyRelationshipType
            | CypherGeneratorError::InvalidIdentifier { .. } => true,
            CypherGeneratorError::BatchEntry { source, .. } => source.is_invalid_entity(),
            CypherGeneratorError::UnrenderableValue { .. } | CypherGeneratorError::EmptyBatch => {
                false
            }
        }
    }
}
