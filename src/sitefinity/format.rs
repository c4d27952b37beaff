//! Text and lookup rendering of OData responses.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::endpoints::EntitySet;
use super::error::{ToolError, ToolResult};
use crate::http::ResponseEnvelope;

/// A property to print and the label printed in front of it.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
}

pub const fn field(key: &'static str, label: &'static str) -> Field {
    Field { key, label }
}

/// The `value` array of a collection response.
pub fn collection<'a>(set: EntitySet, envelope: &'a ResponseEnvelope) -> ToolResult<&'a [Value]> {
    match envelope.get("value") {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(ToolError::UnexpectedShape {
            entity: set.path().to_string(),
            message: "'value' is not an array".to_string(),
        }),
        None => Err(ToolError::UnexpectedShape {
            entity: set.path().to_string(),
            message: "response has no 'value' array".to_string(),
        }),
    }
}

/// One block per item, blocks separated by a blank line.
pub fn render_collection(
    set: EntitySet,
    fields: &[Field],
    envelope: &ResponseEnvelope,
) -> ToolResult<String> {
    let items = collection(set, envelope)?;
    if items.is_empty() {
        return Ok(format!("No {} found.", set.label()));
    }

    let mut text = String::new();
    for item in items {
        match item {
            Value::Object(map) => text.push_str(&render_item(fields, map)),
            _ => {
                return Err(ToolError::UnexpectedShape {
                    entity: set.path().to_string(),
                    message: "collection entry is not an object".to_string(),
                });
            }
        }
    }
    Ok(text)
}

/// `Label: value` lines for one item; every line after the first is
/// indented by one space and the block ends with a blank line.
pub fn render_item(fields: &[Field], item: &Map<String, Value>) -> String {
    let mut text = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            text.push(' ');
        }
        text.push_str(field.label);
        text.push_str(": ");
        text.push_str(&display_value(item.get(field.key)));
        text.push('\n');
    }
    text.push('\n');
    text
}

fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Id to title mapping for parent lookups. Items without a string `Id`
/// are skipped; `Name` stands in when there is no `Title`.
pub fn id_title_map(
    set: EntitySet,
    envelope: &ResponseEnvelope,
) -> ToolResult<BTreeMap<String, String>> {
    let items = collection(set, envelope)?;
    Ok(items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|item| {
            let id = item.get("Id")?.as_str()?;
            let title = item
                .get("Title")
                .or_else(|| item.get("Name"))
                .and_then(Value::as_str)
                .unwrap_or_default();
            Some((id.to_string(), title.to_string()))
        })
        .collect())
}
