use rtab::output::{print_items, OutputOption, PrintOptions};
use rtab::{OutputFlags, Record};
use serde_json::json;

fn nested_record() -> Record {
    Record::new(json!({
        "Name": "foo1",
        "Value": "bar1",
        "Nested": {"NName": "baz1", "NValue": "qux1"},
    }))
}

#[test]
fn test_table_renders_only_primary_fields() {
    let records = vec![Record::new(json!({
        "Name": "foo1",
        "Nested": {"NName": "baz1", "NValue": "qux1"},
    }))];

    let opts = PrintOptions {
        fields: vec!["Name".to_string()],
        fields_long: vec!["Nested.NName".to_string(), "Nested.NValue".to_string()],
        no_header: true,
        ..PrintOptions::default()
    };

    let mut out = Vec::new();
    print_items(&mut out, &records, &OutputFlags::default(), &opts).unwrap();

    // Long mode inactive: only the Name column
    assert_eq!(String::from_utf8(out).unwrap(), "foo1\n");
}

#[test]
fn test_table_renders_nested_paths_as_columns() {
    let opts = PrintOptions {
        fields: vec![
            "Name".to_string(),
            "Value".to_string(),
            "Nested.NName".to_string(),
            "Nested.NValue".to_string(),
        ],
        no_header: true,
        ..PrintOptions::default()
    };

    let mut out = Vec::new();
    print_items(&mut out, &[nested_record()], &OutputFlags::default(), &opts).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "foo1  bar1  baz1  qux1\n");
}

#[test]
fn test_card_renders_name_value_block() {
    let records = vec![Record::new(json!({
        "Name": "foo1",
        "Nested": {"NName": "baz1", "NValue": "qux1"},
    }))];

    let opts = PrintOptions {
        fields: vec!["Name".to_string()],
        fields_long: vec!["Nested.NName".to_string(), "Nested.NValue".to_string()],
        output: Some(OutputOption::Card),
        ..PrintOptions::default()
    };

    let mut out = Vec::new();
    print_items(&mut out, &records, &OutputFlags::default(), &opts).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().next(), Some("Name  foo1"));
}

#[test]
fn test_fields_long_flag_activates_long_columns() {
    let flags = OutputFlags {
        fields: Some("long".to_string()),
        ..OutputFlags::default()
    };
    let opts = PrintOptions {
        fields: vec!["Name".to_string()],
        fields_long: vec!["Nested.NName".to_string(), "Nested.NValue".to_string()],
        no_header: true,
        ..PrintOptions::default()
    };

    let mut out = Vec::new();
    print_items(&mut out, &[nested_record()], &flags, &opts).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "foo1  baz1  qux1\n");
}

#[test]
fn test_json_output_is_an_indented_array() {
    let flags = OutputFlags {
        output: Some("json".to_string()),
        ..OutputFlags::default()
    };

    let mut out = Vec::new();
    print_items(
        &mut out,
        &[Record::new(json!({"Name": "foo1"}))],
        &flags,
        &PrintOptions::default(),
    )
    .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("[\n"));
    assert!(text.contains("\"Name\": \"foo1\""));
}

#[test]
fn test_unrecognized_format_renders_nothing() {
    let flags = OutputFlags {
        output: Some("xml".to_string()),
        ..OutputFlags::default()
    };

    let mut out = Vec::new();
    print_items(
        &mut out,
        &[nested_record()],
        &flags,
        &PrintOptions::default(),
    )
    .unwrap();

    assert!(out.is_empty());
}

#[test]
fn test_auto_discovery_renders_all_columns() {
    let records = vec![Record::new(json!({"Name": "foo1", "Status": "ok"}))];

    let mut out = Vec::new();
    print_items(
        &mut out,
        &records,
        &OutputFlags::default(),
        &PrintOptions::default(),
    )
    .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "Name  Status\nfoo1  ok\n");
}

#[test]
fn test_records_missing_fields_render_blank_cells() {
    let records = vec![
        Record::new(json!({"Name": "foo1", "Status": "ok"})),
        Record::new(json!({"Name": "foo2"})),
    ];

    let opts = PrintOptions {
        fields: vec!["Name".to_string(), "Status".to_string()],
        no_header: true,
        ..PrintOptions::default()
    };

    let mut out = Vec::new();
    print_items(&mut out, &records, &OutputFlags::default(), &opts).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "foo1  ok\nfoo2\n");
}
