use crate::graph_model::{CreateBatch, Node, Relationship};

use super::errors::CypherGeneratorError;
use super::node::generate_node_create;
use super::relationship::{generate_relationship_create, RelationshipFragments};

/// Compose one statement creating every node of the batch, one MERGE block
/// per line, variables `n0..n<N-1>` in batch order.
///
/// The first invalid entry aborts the whole batch; no partial text is returned.
pub fn generate_nodes_create(nodes: &[Node]) -> Result<String, CypherGeneratorError> {
    if nodes.is_empty() {
        return Err(CypherGeneratorError::EmptyBatch);
    }

    let fragments = nodes
        .iter()
        .enumerate()
        .map(|(index, node)| {
            generate_node_create(node, index).map_err(|e| e.at_batch_entry(index))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(fragments.join("\n"))
}

/// Compose one statement creating every relationship of the batch.
///
/// All match halves come first, newline separated, followed by all create
/// halves, both in batch order.
pub fn generate_relationships_create(
    relationships: &[Relationship],
) -> Result<String, CypherGeneratorError> {
    if relationships.is_empty() {
        return Err(CypherGeneratorError::EmptyBatch);
    }

    let fragments = relationships
        .iter()
        .enumerate()
        .map(|(index, relationship)| {
            generate_relationship_create(relationship, index).map_err(|e| e.at_batch_entry(index))
        })
        .collect::<Result<Vec<RelationshipFragments>, _>>()?;

    let mut query = fragments
        .iter()
        .map(|f| f.match_clause.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    for f in &fragments {
        query.push_str(&f.create_clause);
    }

    Ok(query)
}

pub fn generate_batch_create(batch: &CreateBatch) -> Result<String, CypherGeneratorError> {
    match batch {
        CreateBatch::Nodes(nodes) => generate_nodes_create(nodes),
        CreateBatch::Relationships(relationships) => generate_relationships_create(relationships),
    }
}
