use lazy_static::lazy_static;
use regex::Regex;

use super::errors::{CypherGeneratorError, IdentifierKind};

lazy_static! {
    /// Labels, relationship types and property keys are emitted unquoted, so
    /// they must be plain (Unicode) identifiers.
    static ref IDENTIFIER_PATTERN: Regex = Regex::new(r"^[\p{L}_][\p{L}\p{N}_]*$").unwrap();
}

/// Variable bound to the node in a read statement.
pub const READ_VARIABLE: &str = "n";

pub fn node_variable(index: usize) -> String {
    format!("n{}", index)
}

pub fn source_variable(index: usize) -> String {
    format!("sn{}", index)
}

pub fn target_variable(index: usize) -> String {
    format!("tn{}", index)
}

pub fn check_identifier(kind: IdentifierKind, value: &str) -> Result<&str, CypherGeneratorError> {
    if IDENTIFIER_PATTERN.is_match(value) {
        Ok(value)
    } else {
        Err(CypherGeneratorError::InvalidIdentifier {
            kind,
            value: value.to_string(),
        })
    }
}
