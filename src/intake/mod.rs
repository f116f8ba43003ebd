//! # Graph intake service
//!
//! Glue between callers, the Cypher generator and the graph store:
//! generate a statement, hand it to a [`QueryExecutor`] with empty
//! parameters, and decode whatever rows come back.

mod errors;
pub mod executor;
pub mod payload;
pub mod result_decoder;

use std::sync::Arc;

use crate::config::IntakeConfig;
use crate::cypher_query_generator::{
    generate_nodes_create, generate_nodes_read, generate_relationships_create,
};
use crate::diagnostics::{Diagnostic, DiagnosticSink, LogSink};
use crate::graph_model::{Node, Relationship};

pub use errors::IntakeError;
pub use executor::{DryRunExecutor, ExecutorError, Parameters, QueryExecutor, ResultRow};

pub struct GraphIntake<E: QueryExecutor> {
    executor: E,
    config: IntakeConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl<E: QueryExecutor> GraphIntake<E> {
    /// Create a service reporting through the `log` facade.
    pub fn new(executor: E, config: IntakeConfig) -> Self {
        Self {
            executor,
            config,
            sink: Arc::new(LogSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    /// Upsert `nodes` in one statement.
    pub async fn create_nodes(&self, nodes: &[Node]) -> Result<(), IntakeError> {
        let statement = generate_nodes_create(nodes)?;
        self.run(&statement).await?;
        Ok(())
    }

    /// Create `relationships` in one statement.
    ///
    /// Source nodes must already exist or nothing is created for that entry.
    /// Missing target nodes are created without labels.
    pub async fn create_relationships(
        &self,
        relationships: &[Relationship],
    ) -> Result<(), IntakeError> {
        let statement = generate_relationships_create(relationships)?;
        self.run(&statement).await?;
        Ok(())
    }

    /// Fetch nodes matching `pattern`.
    ///
    /// `limit` falls back to the configured default when `None`; zero or a
    /// negative value means no cap.
    pub async fn get_nodes(
        &self,
        pattern: &Node,
        limit: Option<i64>,
    ) -> Result<Vec<Node>, IntakeError> {
        let limit = limit.unwrap_or(self.config.default_limit);
        let statement = generate_nodes_read(pattern, limit)?;
        let rows = self.run(&statement).await?;

        let nodes = result_decoder::decode_nodes(&rows, self.sink.as_ref());
        self.sink.emit(Diagnostic::info(format!(
            "decoded {} of {} rows into nodes",
            nodes.len(),
            rows.len()
        )));
        Ok(nodes)
    }

    /// [`create_nodes`](Self::create_nodes) for a JSON array of nodes.
    pub async fn create_nodes_from_json(&self, json: &str) -> Result<(), IntakeError> {
        let nodes = payload::parse_nodes(json)?;
        self.create_nodes(&nodes).await
    }

    /// [`create_relationships`](Self::create_relationships) for a JSON array
    /// of relationships.
    pub async fn create_relationships_from_json(&self, json: &str) -> Result<(), IntakeError> {
        let relationships = payload::parse_relationships(json)?;
        self.create_relationships(&relationships).await
    }

    /// [`get_nodes`](Self::get_nodes) for a JSON node pattern.
    pub async fn get_nodes_from_json(
        &self,
        json: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Node>, IntakeError> {
        let pattern = payload::parse_node(json)?;
        self.get_nodes(&pattern, limit).await
    }

    async fn run(&self, statement: &str) -> Result<Vec<ResultRow>, IntakeError> {
        if self.config.log_statements {
            self.sink.emit(Diagnostic::debug(format!("query: {}", statement)));
        }

        let rows = self.executor.execute(statement, &Parameters::new()).await?;

        self.sink.emit(Diagnostic::debug(format!(
            "statement returned {} rows",
            rows.len()
        )));
        Ok(rows)
    }
}
