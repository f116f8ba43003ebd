use crate::graph_model::Node;

use super::common::{check_identifier, node_variable, READ_VARIABLE};
use super::errors::{CypherGeneratorError, IdentifierKind};
use super::properties::format_properties;

/// Build the MATCH fragment locating every node that carries the given
/// properties and at least one of the given labels.
///
/// Labels are OR-ed in declaration order in a WHERE filter. A node with no
/// labels produces no filter, so the fragment matches every node in the store.
pub fn generate_node_match(node: &Node) -> Result<String, CypherGeneratorError> {
    let props = format_properties(node.properties.as_ref())?;
    let mut query = format!("MATCH ({}{})", READ_VARIABLE, props);

    if !node.labels.is_empty() {
        let filters = node
            .labels
            .iter()
            .map(|label| {
                check_identifier(IdentifierKind::Label, label)
                    .map(|label| format!("{}:{}", READ_VARIABLE, label))
            })
            .collect::<Result<Vec<_>, _>>()?;
        query.push_str("\nWHERE ");
        query.push_str(&filters.join(" OR "));
    }

    Ok(query)
}

/// Build the MERGE fragment upserting `node` as variable `n<index>`.
///
/// MERGE keys on the primary label plus properties. Secondary labels are
/// attached afterwards with one SET line each, since MERGE on the full label
/// set would only match nodes carrying exactly those labels.
pub fn generate_node_create(node: &Node, index: usize) -> Result<String, CypherGeneratorError> {
    let (primary, secondary) = node
        .labels
        .split_first()
        .ok_or(CypherGeneratorError::MissingLabel)?;
    let primary = check_identifier(IdentifierKind::Label, primary)?;
    for label in secondary {
        check_identifier(IdentifierKind::Label, label)?;
    }
    let props = format_properties(node.properties.as_ref())?;

    let variable = node_variable(index);
    let mut query = format!("MERGE({}:{}{})", variable, primary, props);
    for label in secondary {
        query.push_str(&format!("\nSET {}:{}", variable, label));
    }

    Ok(query)
}
