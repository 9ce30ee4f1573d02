//! Field discovery and extraction over arbitrary record shapes.
//!
//! Two operations back every renderer:
//!
//! - [`field_names`] resolves the ordered list of columns, either from an
//!   explicit request or by introspecting the first record's shape
//! - [`field_values`] walks each record and produces the display string
//!   for every column, in column order
//!
//! Extraction is tolerant by design: heterogeneous records are expected,
//! so a path that does not resolve on some record yields an empty cell in
//! that record's row, never an error and never a shifted column.

use serde_json::Value;

use crate::error::{OutputError, Result};
use crate::format::{display_value, TimeFormat};
use crate::record::Record;

/// How many levels past the top the auto-discovery descends. One level
/// means `Outer.Inner` is flattened into its own column but anything
/// deeper stays a single compact-JSON cell.
pub const FIELDS_DEPTH: usize = 1;

/// Resolves the ordered column names for a record set.
///
/// When `requested` is non-empty it is taken verbatim (insertion order is
/// the column order). Otherwise names are discovered from the first
/// record's shape, descending `depth` levels into nested objects and
/// flattening each nested field into a dotted path.
///
/// # Errors
/// Returns [`OutputError::NoRecords`] if auto-discovery is requested
/// against an empty record set, since there is no shape to introspect.
pub fn field_names(records: &[Record], requested: &[String], depth: usize) -> Result<Vec<String>> {
    if !requested.is_empty() {
        return Ok(requested.to_vec());
    }

    let first = records.first().ok_or(OutputError::NoRecords)?;
    let mut names = Vec::new();
    discover(first.value(), "", depth, &mut names);
    Ok(names)
}

/// Recursively collects dotted field names from `value` in declaration
/// order, descending `depth` more levels into nested objects.
fn discover(value: &Value, prefix: &str, depth: usize, names: &mut Vec<String>) {
    let Some(map) = value.as_object() else {
        return;
    };

    for (key, child) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match child {
            Value::Object(_) if depth > 0 => discover(child, &path, depth - 1, names),
            _ => names.push(path),
        }
    }
}

/// Extracts the display values for every record, one row per record in
/// input order, one cell per field name in column order.
///
/// Missing or unresolvable paths produce empty cells so every row has the
/// same arity as the header.
pub fn field_values(
    records: &[Record],
    names: &[String],
    time_format: TimeFormat,
) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|record| {
            names
                .iter()
                .map(|name| match record.lookup(name) {
                    Some(value) => display_value(value, time_format),
                    None => String::new(),
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(values: Vec<Value>) -> Vec<Record> {
        values.into_iter().map(Record::new).collect()
    }

    #[test]
    fn test_explicit_request_passes_through() {
        let recs = records(vec![json!({"a": 1})]);
        let requested = vec!["x".to_string(), "y.z".to_string()];
        let names = field_names(&recs, &requested, FIELDS_DEPTH).unwrap();
        assert_eq!(names, requested);
    }

    #[test]
    fn test_discovery_flattens_one_nested_level() {
        let recs = records(vec![json!({
            "Name": "foo1",
            "Nested": {"NName": "baz1", "NValue": "qux1"},
        })]);

        let names = field_names(&recs, &[], FIELDS_DEPTH).unwrap();
        assert_eq!(names, vec!["Name", "Nested.NName", "Nested.NValue"]);
    }

    #[test]
    fn test_discovery_stops_at_depth_limit() {
        let recs = records(vec![json!({
            "Outer": {"Inner": {"Deep": 1}},
        })]);

        let names = field_names(&recs, &[], FIELDS_DEPTH).unwrap();
        // Outer.Inner is a column; Outer.Inner.Deep is not
        assert_eq!(names, vec!["Outer.Inner"]);
    }

    #[test]
    fn test_discovery_uses_first_record_shape() {
        let recs = records(vec![json!({"a": 1}), json!({"b": 2})]);
        let names = field_names(&recs, &[], FIELDS_DEPTH).unwrap();
        assert_eq!(names, vec!["a"]);
    }

    #[test]
    fn test_discovery_over_empty_set_fails() {
        let err = field_names(&[], &[], FIELDS_DEPTH).unwrap_err();
        assert!(matches!(err, OutputError::NoRecords));
    }

    #[test]
    fn test_values_align_with_columns() {
        let recs = records(vec![
            json!({"Name": "foo1", "Nested": {"NName": "baz1"}}),
            json!({"Name": "foo2"}),
        ]);
        let names = vec!["Name".to_string(), "Nested.NName".to_string()];

        let rows = field_values(&recs, &names, TimeFormat::Raw);
        assert_eq!(rows, vec![vec!["foo1", "baz1"], vec!["foo2", ""]]);
    }

    #[test]
    fn test_missing_path_is_empty_not_error() {
        let recs = records(vec![json!({"Name": "foo1"})]);
        let names = vec!["Does.Not.Exist".to_string()];

        let rows = field_values(&recs, &names, TimeFormat::Raw);
        assert_eq!(rows, vec![vec![""]]);
    }

    #[test]
    fn test_deep_nested_value_renders_compact_json() {
        let recs = records(vec![json!({"Outer": {"Inner": {"Deep": 1}}})]);
        let names = vec!["Outer.Inner".to_string()];

        let rows = field_values(&recs, &names, TimeFormat::Raw);
        assert_eq!(rows, vec![vec![r#"{"Deep":1}"#]]);
    }
}
