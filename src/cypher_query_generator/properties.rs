//! Inline property-map rendering.
//!
//! `{name: "Alice", age: 30}` style literals used inside MATCH, MERGE and
//! CREATE patterns. Keys are emitted unquoted; text values are wrapped in
//! double quotes without escaping, so text that would break the quoting is
//! rejected instead.

use crate::graph_model::{Properties, PropertyValue};

use super::common::check_identifier;
use super::errors::{CypherGeneratorError, IdentifierKind};

/// Render a property mapping as `" { k1: v1, k2: v2 }"`.
///
/// Absent and empty mappings render as the empty string, so the result can be
/// appended directly after a variable or label.
pub fn format_properties(properties: Option<&Properties>) -> Result<String, CypherGeneratorError> {
    let properties = match properties {
        Some(properties) if !properties.is_empty() => properties,
        _ => return Ok(String::new()),
    };

    let entries = properties
        .iter()
        .map(|(key, value)| -> Result<String, CypherGeneratorError> {
            let key = check_identifier(IdentifierKind::PropertyKey, key)?;
            Ok(format!("{}: {}", key, format_value(key, value)?))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format!(" {{ {} }}", entries.join(", ")))
}

/// Render one value: numbers as numerals, text double-quoted.
fn format_value(key: &str, value: &PropertyValue) -> Result<String, CypherGeneratorError> {
    match value {
        PropertyValue::Integer(_) => Ok(value.to_string()),
        PropertyValue::Float(x) if x.is_finite() => Ok(value.to_string()),
        PropertyValue::Float(x) => Err(CypherGeneratorError::UnrenderableValue {
            key: key.to_string(),
            reason: format!("non-finite float {} has no literal form", x),
        }),
        PropertyValue::Text(s) => {
            if let Some(c) = s.chars().find(|c| *c == '"' || *c == '\\') {
                return Err(CypherGeneratorError::UnrenderableValue {
                    key: key.to_string(),
                    reason: format!("text contains `{}`, which would break the quoted literal", c),
                });
            }
            Ok(format!("\"{}\"", s))
        }
    }
}
