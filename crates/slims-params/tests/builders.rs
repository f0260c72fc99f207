//! Formas exactas de los descriptores (contrato con SLimsGate).

use serde_json::{json, Value};
use slims_params::{
    boolean_input, date_input, date_time_input, extras, file_input, file_output, float_input, integer_input,
    multiple_choice_with_field_list_input, multiple_choice_with_value_map_input, password_input, rich_text_input,
    single_choice_with_field_list_input, single_choice_with_value_map_input, table_input, text_input, time_input,
    value_map_output, FieldList, ParamError, ValueMap,
};

#[test]
fn text_input_has_exact_shape() {
    assert_eq!(text_input("x", "X").to_value(), json!({"name": "x", "label": "X", "type": "STRING"}));
}

#[test]
fn integer_input_merges_default_value() {
    let p = integer_input("n", "N").with("defaultValue", 5);
    assert_eq!(p.to_value(), json!({"name": "n", "label": "N", "type": "INTEGER", "defaultValue": 5}));

    let same = integer_input("n", "N").with_extras(extras! { "defaultValue" => 5 });
    assert_eq!(p, same);
}

#[test]
fn scalar_inputs_use_their_fixed_tags() {
    let cases = vec![(date_input("a", "A"), "DATE"),
                     (date_time_input("a", "A"), "DATETIME"),
                     (time_input("a", "A"), "TIME"),
                     (boolean_input("a", "A"), "BOOLEAN"),
                     (rich_text_input("a", "A"), "TEXT"),
                     (float_input("a", "A"), "FLOAT"),
                     (password_input("a", "A"), "PASSWORD"),
                     (file_input("a", "A"), "FILE")];
    for (param, tag) in cases {
        assert_eq!(param.to_value(), json!({"name": "a", "label": "A", "type": tag}));
    }
}

#[test]
fn extras_override_fixed_keys() {
    let p = text_input("x", "X").with("type", "PASSWORD").with("name", "y");
    assert_eq!(p.to_value(), json!({"name": "y", "label": "X", "type": "PASSWORD"}));
    // las claves sobreescritas conservan su posición
    assert_eq!(p.keys().collect::<Vec<_>>(), vec!["name", "label", "type"]);
}

#[test]
fn single_choice_field_list_with_types() {
    let p = single_choice_with_field_list_input("c", "C", FieldList::new(["a", "b"]).with_types(["T1", "T2"])).unwrap();
    assert_eq!(p.to_value(),
               json!({
                   "name": "c",
                   "label": "C",
                   "type": "SINGLE_CHOICE",
                   "fieldList": {"entries": [{"type": "T1", "field": "a"}, {"type": "T2", "field": "b"}]}
               }));
}

#[test]
fn single_choice_field_list_without_types_has_null_types() {
    let p = single_choice_with_field_list_input("c", "C", FieldList::new(["a", "b"])).unwrap();
    let entries = &p.get("fieldList").unwrap()["entries"];
    assert_eq!(entries, &json!([{"type": null, "field": "a"}, {"type": null, "field": "b"}]));
}

#[test]
fn multiple_choice_field_list_merges_extras_after_payload() {
    let p = multiple_choice_with_field_list_input("m", "M", FieldList::new(["a"]))
        .unwrap()
        .with("defaultValue", json!(["a"]));
    assert_eq!(p.param_type(), Some("MULTIPLE_CHOICE"));
    assert_eq!(p.keys().collect::<Vec<_>>(), vec!["name", "label", "type", "fieldList", "defaultValue"]);
}

#[test]
fn shorter_field_types_is_a_bounds_error() {
    let err = single_choice_with_field_list_input("c", "C", FieldList::new(["a", "b"]).with_types(["T1"])).unwrap_err();
    assert_eq!(err, ParamError::MissingFieldType { index: 1, elements: 2, types: 1 });
    assert!(err.to_string().contains("element 1"));

    let err = multiple_choice_with_field_list_input("c", "C", FieldList::new(["a"]).with_types(Vec::<String>::new()))
        .unwrap_err();
    assert_eq!(err, ParamError::MissingFieldType { index: 0, elements: 1, types: 0 });
}

#[test]
fn value_map_choice_defaults_to_nulls() {
    let p = single_choice_with_value_map_input("v", "V", ValueMap::new());
    assert_eq!(p.to_value(),
               json!({
                   "name": "v",
                   "label": "V",
                   "type": "SINGLE_CHOICE",
                   "valueMap": {"filter": null, "reference": null, "table": null, "fixedChoiceCustomField": null}
               }));
}

#[test]
fn value_map_choice_with_all_fields() {
    let vm = ValueMap::new().table("Content")
                            .filter(json!({"fieldName": "cntn_status", "operator": "equals", "value": 1}))
                            .reference("ids")
                            .fixed_choice_custom_field("cntn_cf_kind");
    let p = multiple_choice_with_value_map_input("v", "V", vm).with("required", true);
    let value_map = p.get("valueMap").unwrap();
    assert_eq!(p.param_type(), Some("MULTIPLE_CHOICE"));
    assert_eq!(value_map["table"], json!("Content"));
    assert_eq!(value_map["reference"], json!("ids"));
    assert_eq!(value_map["fixedChoiceCustomField"], json!("cntn_cf_kind"));
    assert_eq!(value_map["filter"]["operator"], json!("equals"));
    assert_eq!(p.get("required"), Some(&Value::Bool(true)));
}

#[test]
fn table_input_wraps_subparameters_verbatim() {
    let columns = vec![text_input("sample", "Sample"), float_input("volume", "Volume").with("defaultValue", 1.5)];
    let p = table_input("rows", "Rows", columns.clone());
    assert_eq!(p.to_value(),
               json!({
                   "name": "rows",
                   "label": "Rows",
                   "type": "TABLE",
                   "subParameters": [columns[0].to_value(), columns[1].to_value()]
               }));
}

#[test]
fn outputs_have_exact_shapes() {
    assert_eq!(file_output().to_value(), json!({"name": "file", "type": "FILE"}));
    assert_eq!(file_output().len(), 2);

    let v = value_map_output("ids", "TEXT");
    assert_eq!(v.to_value(), json!({"name": "ids", "datatype": "TEXT", "type": "VALUEMAP"}));
    assert_eq!(v.keys().collect::<Vec<_>>(), vec!["name", "datatype", "type"]);
}
