use crate::graph_model::{Node, Relationship};

use super::common::{check_identifier, source_variable, target_variable};
use super::errors::{CypherGeneratorError, Endpoint, IdentifierKind};
use super::properties::format_properties;

/// The two halves of a relationship create request.
///
/// Cypher evaluates every MATCH of a statement before its writes, so a batch
/// emits all `match_clause`s first and all `create_clause`s after them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipFragments {
    /// `MATCH (sn<i>:..)\nOPTIONAL MATCH (tn<i>:..)`
    pub match_clause: String,
    /// `\nCREATE (sn<i>)-[:TYPE ..]->(tn<i>)`, newline included.
    pub create_clause: String,
}

/// Build the fragments creating `relationship` between its endpoints, using
/// `sn<index>` and `tn<index>` as endpoint variables.
///
/// The source is a required MATCH and the target an OPTIONAL MATCH. When the
/// target does not exist yet, its variable binds to null and the CREATE
/// materializes a new, unlabeled target node. Callers that care must create
/// target nodes first.
///
/// Only the first label of each endpoint scopes its pattern.
pub fn generate_relationship_create(
    relationship: &Relationship,
    index: usize,
) -> Result<RelationshipFragments, CypherGeneratorError> {
    if relationship.rel_type.is_empty() {
        return Err(CypherGeneratorError::EmptyRelationshipType);
    }
    let rel_type = check_identifier(IdentifierKind::RelationshipType, &relationship.rel_type)?;

    let source = source_variable(index);
    let target = target_variable(index);
    let source_pattern =
        endpoint_pattern(&relationship.from_node, &source, rel_type, Endpoint::Source)?;
    let target_pattern =
        endpoint_pattern(&relationship.to_node, &target, rel_type, Endpoint::Target)?;
    let props = format_properties(relationship.properties.as_ref())?;

    Ok(RelationshipFragments {
        match_clause: format!("MATCH {}\nOPTIONAL MATCH {}", source_pattern, target_pattern),
        create_clause: format!("\nCREATE ({})-[:{}{}]->({})", source, rel_type, props, target),
    })
}

/// `(<variable>:<primary label><props>)`
fn endpoint_pattern(
    node: &Node,
    variable: &str,
    rel_type: &str,
    endpoint: Endpoint,
) -> Result<String, CypherGeneratorError> {
    let label = node
        .primary_label()
        .ok_or_else(|| CypherGeneratorError::MissingEndpointLabel {
            rel_type: rel_type.to_string(),
            endpoint,
        })?;
    let label = check_identifier(IdentifierKind::Label, label)?;
    let props = format_properties(node.properties.as_ref())?;

    Ok(format!("({}:{}{})", variable, label, props))
}
