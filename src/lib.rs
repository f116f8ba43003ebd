//! graph-intake - Cypher statement generation for graph ingestion
//!
//! This crate turns typed node and relationship descriptions into Cypher text:
//! - Inline property-map formatting
//! - Node MATCH / MERGE fragments and relationship MATCH + CREATE pairs
//! - Batch composition with per-entity variable naming
//! - Read statements with an optional result cap
//!
//! Execution against a store goes through the [`intake::QueryExecutor`] seam.

pub mod config;
pub mod cypher_query_generator;
pub mod diagnostics;
pub mod graph_model;
pub mod intake;
