use thiserror::Error;

use crate::cypher_query_generator::CypherGeneratorError;

use super::executor::ExecutorError;
use super::payload::PayloadError;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Query generation failed: {0}")]
    Generation(#[from] CypherGeneratorError),
    #[error("Query execution failed: {0}")]
    Execution(#[from] ExecutorError),
    #[error(transparent)]
    Payload(#[from] PayloadError),
}
