//! End-to-end tests: build forms through store mutations, synthesize their
//! schemas, and validate submissions against them.

use std::collections::HashMap;

use uuid::Uuid;

use formkit_core::{FormKitError, Value};
use formkit_fields::{
    ChoiceOption, DateConfig, FieldConfig, FieldKind, FieldSpec, SelectConfig, TextConfig,
};
use formkit_store::{synthesize, FieldUpdate, FormStore};

fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn submission(pairs: &[(Uuid, Value)]) -> HashMap<Uuid, Value> {
    pairs.iter().cloned().collect()
}

#[test]
fn test_signup_form_lifecycle() {
    let mut store = FormStore::new();
    let form = store.create_form("Signup", Some("Create an account".to_string()));

    let name = store
        .add_field(
            form.id,
            FieldSpec::new(FieldKind::Text, "Name")
                .required(true)
                .config(FieldConfig::Text(TextConfig {
                    min_length: Some(3),
                    max_length: Some(5),
                    ..TextConfig::default()
                })),
            None,
        )
        .unwrap();
    let terms = store
        .add_field(
            form.id,
            FieldSpec::new(FieldKind::Checkbox, "Accept terms").required(true),
            None,
        )
        .unwrap();

    let schema = synthesize(store.form(form.id).unwrap());
    assert_eq!(schema.keys(), vec![name.id, terms.id]);

    // Too short, box unchecked: both reported.
    let errors = schema
        .validate(&submission(&[
            (name.id, Value::from("ab")),
            (terms.id, Value::Bool(false)),
        ]))
        .unwrap_err();
    assert_eq!(errors.len(), 2);

    // Too long.
    assert!(schema
        .validate(&submission(&[
            (name.id, Value::from("abcdef")),
            (terms.id, Value::Bool(true)),
        ]))
        .is_err());

    // Valid.
    assert!(schema
        .validate(&submission(&[
            (name.id, Value::from("abcd")),
            (terms.id, Value::Bool(true)),
        ]))
        .is_ok());
}

#[test]
fn test_schema_recomputed_after_mutations() {
    let mut store = FormStore::new();
    let form = store.create_form("Survey", None);
    let field = store
        .add_field(
            form.id,
            FieldSpec::new(FieldKind::Text, "Name").required(true),
            None,
        )
        .unwrap();

    let schema = synthesize(store.form(form.id).unwrap());
    assert!(schema.validate(&HashMap::new()).is_err());

    // Making the field optional changes the next synthesized schema, not
    // the one already derived.
    store
        .update_field(
            form.id,
            field.id,
            FieldUpdate {
                required: Some(false),
                ..FieldUpdate::default()
            },
        )
        .unwrap();
    assert!(schema.validate(&HashMap::new()).is_err());
    let fresh = synthesize(store.form(form.id).unwrap());
    assert!(fresh.validate(&HashMap::new()).is_ok());
}

#[test]
fn test_event_form_with_date_range_and_choices() {
    let mut store = FormStore::new();
    let form = store.create_form("Event registration", None);

    let day = store
        .add_field(
            form.id,
            FieldSpec::new(FieldKind::Date, "Day").config(FieldConfig::Date(DateConfig {
                min_date: Some(date(2024, 6, 1)),
                max_date: Some(date(2024, 6, 30)),
                ..DateConfig::default()
            })),
            None,
        )
        .unwrap();
    let meal = store
        .add_field(
            form.id,
            FieldSpec::new(FieldKind::Select, "Meal")
                .required(true)
                .config(FieldConfig::Select(SelectConfig {
                    options: vec![
                        ChoiceOption::new("veg", "Vegetarian"),
                        ChoiceOption::new("fish", "Fish"),
                    ],
                    ..SelectConfig::default()
                })),
            None,
        )
        .unwrap();

    let schema = synthesize(store.form(form.id).unwrap());

    assert!(schema
        .validate(&submission(&[
            (day.id, Value::Date(date(2024, 6, 15))),
            (meal.id, Value::from("veg")),
        ]))
        .is_ok());
    assert!(schema
        .validate(&submission(&[
            (day.id, Value::Date(date(2024, 5, 31))),
            (meal.id, Value::from("veg")),
        ]))
        .is_err());
    assert!(schema
        .validate(&submission(&[
            (day.id, Value::Date(date(2024, 7, 1))),
            (meal.id, Value::from("fish")),
        ]))
        .is_err());
    // Empty selection on a required select.
    assert!(schema
        .validate(&submission(&[(
            day.id,
            Value::Date(date(2024, 6, 15))
        )]))
        .is_err());
}

#[test]
fn test_synthesize_twice_same_pass_fail_behavior() {
    let mut store = FormStore::new();
    let form = store.create_form("Survey", None);
    let field = store
        .add_field(
            form.id,
            FieldSpec::new(FieldKind::Number, "Qty").required(true),
            None,
        )
        .unwrap();

    let snapshot = store.form(form.id).unwrap();
    let first = synthesize(snapshot);
    let second = synthesize(snapshot);
    assert_eq!(first.keys(), second.keys());

    for value in [Value::Null, Value::Int(0), Value::Int(7), Value::from("x")] {
        let a = first.validate(&submission(&[(field.id, value.clone())]));
        let b = second.validate(&submission(&[(field.id, value)]));
        assert_eq!(a.is_ok(), b.is_ok());
    }
}

#[test]
fn test_fields_added_mid_list_validate_in_order() {
    let mut store = FormStore::new();
    let form = store.create_form("Survey", None);
    for label in ["A", "B", "C"] {
        store
            .add_field(form.id, FieldSpec::new(FieldKind::Text, label), None)
            .unwrap();
    }
    let inserted = store
        .add_field(form.id, FieldSpec::new(FieldKind::Text, "D"), Some(1))
        .unwrap();

    store.reorder_fields(form.id, 0, 3).unwrap();
    let snapshot = store.form(form.id).unwrap();
    let labels: Vec<&str> = snapshot.fields.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(labels, ["D", "B", "C", "A"]);
    assert_eq!(synthesize(snapshot).keys()[0], inserted.id);
}

#[test]
fn test_operations_on_missing_form_are_explicit_failures() {
    let mut store = FormStore::new();
    let missing = Uuid::new_v4();
    assert!(matches!(
        store.add_field(missing, FieldSpec::new(FieldKind::Text, "X"), None),
        Err(FormKitError::FormNotFound(_))
    ));
    assert!(matches!(
        store.clear_fields(missing),
        Err(FormKitError::FormNotFound(_))
    ));
    assert!(matches!(
        store.reorder_fields(missing, 0, 1),
        Err(FormKitError::FormNotFound(_))
    ));
}
