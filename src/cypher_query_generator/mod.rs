//! # Cypher statement generation
//!
//! Turns typed graph entities into Cypher text:
//!
//! - [`generate_node_match`] / [`generate_node_create`] for single nodes
//! - [`generate_relationship_create`] for single relationships (match + create halves)
//! - [`generate_nodes_create`] / [`generate_relationships_create`] for ordered batches
//! - [`generate_nodes_read`] for read statements with an optional LIMIT
//!
//! Generation is a pure function of its input: no I/O, no logging, no shared
//! state. The same input always yields byte-identical text.

mod batch;
mod common;
mod errors;
mod node;
mod properties;
mod relationship;
mod retrieval;

pub use batch::{generate_batch_create, generate_nodes_create, generate_relationships_create};
pub use errors::{CypherGeneratorError, Endpoint, IdentifierKind};
pub use node::{generate_node_create, generate_node_match};
pub use properties::format_properties;
pub use relationship::{generate_relationship_create, RelationshipFragments};
pub use retrieval::{generate_nodes_read, LABELS_COLUMN, NODE_COLUMN};
