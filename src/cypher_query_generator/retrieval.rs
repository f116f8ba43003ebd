use crate::graph_model::Node;

use super::errors::CypherGeneratorError;
use super::node::generate_node_match;

/// Column holding the matched node in read results.
pub const NODE_COLUMN: &str = "n";
/// Column holding the matched node's labels in read results.
pub const LABELS_COLUMN: &str = "labels";

const RETURN_PROJECTION: &str = "RETURN n, labels(n) as labels";

/// Build the read statement returning nodes matching `pattern`.
///
/// A `limit` of zero or less means no LIMIT clause.
pub fn generate_nodes_read(pattern: &Node, limit: i64) -> Result<String, CypherGeneratorError> {
    let mut query = generate_node_match(pattern)?;
    query.push('\n');
    query.push_str(RETURN_PROJECTION);
    if limit > 0 {
        query.push_str(&format!(" LIMIT {}", limit));
    }
    Ok(query)
}
