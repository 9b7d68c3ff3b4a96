use rs_jss_data::types::{JssField, JssFieldEntry, JssFieldGroup, JssItem};
use rs_jss_data::{normalize_jss, DataField, DataImage, DataProcessor, Options};
use serde_json::{json, Value};

fn processor() -> DataProcessor {
    DataProcessor::new(Options::default())
}

fn entry(value: Value) -> JssFieldEntry {
    serde_json::from_value(value).expect("valid field entry")
}

fn text(s: &str) -> Option<DataField> {
    Some(DataField::Text(s.to_string()))
}

#[test]
fn single_line_text_passes_value_through() {
    let out = processor().process_jss_field(Some(&entry(json!({
        "fieldType": "Single-Line Text",
        "value": "Hello"
    }))));

    assert_eq!(out, text("Hello"));
}

#[test]
fn image_projects_known_keys_and_omits_missing_ones() {
    let out = processor().process_jss_field(Some(&entry(json!({
        "fieldType": "Image",
        "value": { "src": "/img/a.png", "alt": "A", "class": "hero" }
    }))));

    assert_eq!(
        out,
        Some(DataField::Image(DataImage {
            src: Some("/img/a.png".to_string()),
            width: None,
            height: None,
            alt: Some("A".to_string()),
        }))
    );
    assert_eq!(
        serde_json::to_value(&out).expect("serializes"),
        json!({ "src": "/img/a.png", "alt": "A" })
    );
}

#[test]
fn general_link_omits_absent_keys_and_keeps_empty_ones() {
    let out = processor().process_jss_field(Some(&entry(json!({
        "fieldType": "General Link",
        "value": { "href": "/contact", "text": "Contact", "anchor": "", "linktype": "internal" }
    }))));

    let json = serde_json::to_value(&out).expect("serializes");
    assert_eq!(json["href"], json!("/contact"));
    assert_eq!(json["anchor"], json!(""));
    assert!(json.get("title").is_none());
    assert!(json.get("target").is_none());
}

#[test]
fn checkbox_and_number_keep_their_json_kind() {
    let group = JssFieldGroup::default()
        .with("enabled", JssField::new("Checkbox", true))
        .with("count", JssField::new("Integer", 3))
        .with("ratio", JssField::new("Number", 1.5));

    let json = serde_json::to_value(processor().process_jss_fields(&group)).expect("serializes");

    assert_eq!(json, json!({ "enabled": true, "count": 3, "ratio": 1.5 }));
}

#[test]
fn nested_items_become_children_in_source_order() {
    let item = normalize_jss(
        r#"{
            "componentName": "Cards",
            "fields": {
                "title": { "fieldType": "Single-Line Text", "value": "Cards" },
                "items": [
                    { "name": "first", "displayName": "First", "fields": {} },
                    { "name": "second", "fields": {} }
                ]
            }
        }"#,
        &Options::default(),
    )
    .expect("parses")
    .expect("item");

    let children = item.children.as_ref().expect("children");
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].name.as_deref(), Some("first"));
    assert_eq!(children[0].display_name.as_deref(), Some("First"));
    assert_eq!(children[1].name.as_deref(), Some("second"));

    let fields = item.fields.as_ref().expect("fields");
    assert!(fields.contains_key("title"));
    assert!(!fields.contains_key("items"));
}

#[test]
fn items_key_never_reaches_any_output_field_group() {
    let item = normalize_jss(
        r#"{
            "fields": {
                "items": [
                    { "name": "a", "fields": { "items": [ { "name": "a1", "fields": { "items": [] } } ] } }
                ]
            }
        }"#,
        &Options::default(),
    )
    .expect("parses")
    .expect("item");

    let json = serde_json::to_value(&item).expect("serializes");
    assert_eq!(json["fields"], json!({}));
    assert_eq!(json["children"][0]["name"], json!("a"));
    assert_eq!(json["children"][0]["fields"], json!({}));
    assert_eq!(json["children"][0]["children"][0]["fields"], json!({}));
    assert_eq!(json["children"][0]["children"][0]["children"], json!([]));
}

#[test]
fn unrecognized_field_type_is_null_and_siblings_survive() {
    let group = JssFieldGroup::default()
        .with("weird", JssField::new("Bogus-Type", "x"))
        .with("title", JssField::new("Single-Line Text", "kept"));

    let out = processor().process_jss_fields(&group);

    assert_eq!(out.get("weird"), Some(&None));
    assert_eq!(out.get("title"), Some(&text("kept")));
}

#[test]
fn field_group_keeps_source_key_order() {
    let group: JssFieldGroup = serde_json::from_value(json!({
        "zeta": { "fieldType": "Single-Line Text", "value": "z" },
        "alpha": { "fieldType": "Single-Line Text", "value": "a" },
        "mid": { "fieldType": "Single-Line Text", "value": "m" }
    }))
    .expect("valid group");

    let out = processor().process_jss_fields(&group);
    let keys: Vec<&str> = out.keys().map(String::as_str).collect();

    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn item_fields_and_params_keep_document_order() {
    let item = normalize_jss(
        r#"{
            "params": { "zeta": "1", "alpha": "2" },
            "fields": {
                "zeta": { "fieldType": "Single-Line Text", "value": "z" },
                "alpha": { "fieldType": "Single-Line Text", "value": "a" },
                "mid": { "fieldType": "Single-Line Text", "value": "m" }
            },
            "zulu": true,
            "alpha": true
        }"#,
        &Options::default(),
    )
    .expect("parses")
    .expect("item");

    let fields: Vec<&str> = item.fields.as_ref().expect("fields").keys().map(String::as_str).collect();
    assert_eq!(fields, ["zeta", "alpha", "mid"]);

    let params: Vec<&str> = item.params.as_ref().expect("params").keys().map(String::as_str).collect();
    assert_eq!(params, ["zeta", "alpha"]);

    let extra: Vec<&str> = item.extra.keys().map(String::as_str).collect();
    assert_eq!(extra, ["zulu", "alpha"]);
}

#[test]
fn numeric_image_properties_read_as_strings() {
    let out = processor().process_jss_field(Some(&entry(json!({
        "fieldType": "Image",
        "value": { "src": "/img/a.png", "width": 320, "height": 180 }
    }))));

    assert_eq!(
        serde_json::to_value(&out).expect("serializes"),
        json!({ "src": "/img/a.png", "width": "320", "height": "180" })
    );
}

#[test]
fn non_string_field_id_keeps_the_field() {
    let item = normalize_jss(
        r#"{ "fields": { "count": { "fieldType": "Integer", "value": 3, "id": 7 } } }"#,
        &Options::default(),
    )
    .expect("parses")
    .expect("item");

    assert_eq!(
        serde_json::to_value(item.field("count")).expect("serializes"),
        json!(3)
    );
}

#[test]
fn multi_value_fields_keep_length_and_order() {
    let out = processor().process_jss_field(Some(&entry(json!([
        { "fieldType": "Droplink", "fields": { "Name": { "fieldType": "Single-Line Text", "value": "one" } } },
        { "fieldType": "Bogus-Type" },
        { "fieldType": "Droplink", "fields": { "Name": { "fieldType": "Single-Line Text", "value": "three" } } }
    ]))));

    let list = out.as_ref().and_then(DataField::as_list).expect("list");
    assert_eq!(list.len(), 3);

    let name_of = |field: &Option<DataField>| {
        field
            .as_ref()
            .and_then(DataField::as_group)
            .and_then(|group| group.get("Name"))
            .cloned()
            .flatten()
    };
    assert_eq!(name_of(&list[0]), text("one"));
    assert!(list[1].is_none());
    assert_eq!(name_of(&list[2]), text("three"));
}

#[test]
fn reference_fields_flatten_into_a_field_group() {
    let dp = processor();
    let out = dp
        .process_jss_field(Some(&entry(json!({
            "fieldType": "Droptree",
            "fields": {
                "Label": { "fieldType": "Single-Line Text", "value": "L" },
                "Parent": {
                    "fieldType": "Droplink",
                    "fields": { "Label": { "fieldType": "Single-Line Text", "value": "P" } }
                }
            }
        }))))
        .expect("group");

    let group = out.as_group().expect("group");
    assert_eq!(group.get("Label"), Some(&text("L")));

    let parent = group.get("Parent").cloned().flatten().expect("parent");
    assert_eq!(
        parent.as_group().and_then(|g| g.get("Label")).cloned().flatten(),
        text("P")
    );
}

#[test]
fn canonical_output_is_not_a_fixed_point() {
    let dp = processor();
    let group = JssFieldGroup::default().with("title", JssField::new("Single-Line Text", "T"));
    let once = dp.process_jss_fields(&group);

    // Canonical values carry no fieldType, so they normalize to nothing.
    let fed_back: JssFieldGroup =
        serde_json::from_value(serde_json::to_value(&once).expect("serializes")).expect("parses");
    let again = dp.process_jss_fields(&fed_back);

    assert_eq!(again.get("title"), Some(&None));
}

#[test]
fn rendering_properties_are_copied() {
    let item: JssItem = serde_json::from_value(json!({
        "componentName": "Hero",
        "uid": "u-1",
        "dataSource": "{DS}",
        "params": { "theme": "dark" },
        "placeholders": { "inner": [ { "componentName": "Child" } ] },
        "experiences": {},
        "fields": { "title": { "fieldType": "Single-Line Text", "value": "T" } }
    }))
    .expect("valid item");

    let out = processor().process_jss_item(Some(&item)).expect("item");

    assert_eq!(out.component_name.as_deref(), Some("Hero"));
    assert_eq!(out.uid.as_deref(), Some("u-1"));
    assert_eq!(out.data_source.as_deref(), Some("{DS}"));
    assert_eq!(out.params.as_ref().and_then(|p| p.get("theme")), Some(&json!("dark")));
    assert!(out.placeholders.as_ref().is_some_and(|p| p.contains_key("inner")));
    assert!(out.extra.contains_key("experiences"));
    assert_eq!(out.field("title").and_then(DataField::as_str), Some("T"));
    assert!(out.children.is_none());
}

#[test]
fn normalizing_leaves_the_input_untouched() {
    let item: JssItem = serde_json::from_value(json!({
        "name": "x",
        "fields": { "items": [ { "name": "y", "fields": {} } ] }
    }))
    .expect("valid item");
    let before = item.clone();

    let _ = processor().process_jss_item(Some(&item));

    assert_eq!(item, before);
}

#[test]
fn absent_item_and_null_document_are_none() {
    assert!(processor().process_jss_item(None).is_none());
    assert!(processor().process_jss_field(None).is_none());
    assert!(normalize_jss("null", &Options::default()).expect("parses").is_none());
}
