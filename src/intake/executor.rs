//! Boundary to the graph store.
//!
//! The store itself (driver, connection, credentials) lives behind
//! [`QueryExecutor`]. Rows come back as JSON objects keyed by column name.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

/// One result row, keyed by RETURN column.
pub type ResultRow = Map<String, Value>;

/// Statement parameters. Generated statements inline their literals, so this
/// is always sent empty.
pub type Parameters = HashMap<String, Value>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExecutorError {
    #[error("Could not reach graph store: {0}")]
    Connection(String),
    #[error("Graph store rejected statement: {0}")]
    Statement(String),
}

#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Run `statement` and return its rows in store order.
    async fn execute(
        &self,
        statement: &str,
        parameters: &Parameters,
    ) -> Result<Vec<ResultRow>, ExecutorError>;
}

/// Executor that records statements instead of running them. Every call
/// returns zero rows.
#[derive(Debug, Default)]
pub struct DryRunExecutor {
    statements: Mutex<Vec<String>>,
}

impl DryRunExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statements received so far, in call order.
    pub fn statements(&self) -> Vec<String> {
        self.statements
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl QueryExecutor for DryRunExecutor {
    async fn execute(
        &self,
        statement: &str,
        _parameters: &Parameters,
    ) -> Result<Vec<ResultRow>, ExecutorError> {
        self.statements
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(statement.to_string());
        Ok(Vec::new())
    }
}
