use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::cli::args::QueryArgs;
use crate::cli::common::{emit, to_json};
use crate::note::NoteRecord;

pub(super) fn output_results(results: &[&NoteRecord], args: &QueryArgs) -> Result<()> {
    let output = match &args.fields {
        Some(fields) => filter_fields(results, fields)?,
        None => serde_json::to_value(results)?,
    };
    emit("query", &to_json(&output, args.pretty)?, args.output.as_deref())
}

/// Keep only the requested fields, `id` always first.
///
/// Unknown fields are reported as `null`.
fn filter_fields(results: &[&NoteRecord], fields: &[String]) -> Result<JsonValue> {
    let mut notes = Vec::with_capacity(results.len());
    for note in results {
        let JsonValue::Object(record) = serde_json::to_value(note)? else {
            continue;
        };

        let mut obj = Map::new();
        obj.insert("id".to_string(), JsonValue::String(note.id.clone()));
        for field in fields {
            let value = record.get(field).cloned().unwrap_or(JsonValue::Null);
            obj.insert(field.clone(), value);
        }
        notes.push(JsonValue::Object(obj));
    }
    Ok(JsonValue::Array(notes))
}
