//! Tests for merging field and model validation.

mod common;

use formdom::find_by_data;
use formwork::prelude::*;
use formwork::template::ERROR_CLASS;
use formwork::validation::GeneralError;
use serde_json::json;

use common::{RecordingModel, bind, name_age, new_log, recording, required, spy_editors};

fn form_with(schema: Schema, errors: Option<ModelErrors>) -> Form {
    let model = recording(RecordingModel {
        errors,
        ..Default::default()
    });
    Form::new(FormConfig::new().schema(schema).model(bind(&model))).expect("form")
}

#[test]
fn test_valid_form_returns_none() {
    let mut form = Form::new(FormConfig::new().schema(name_age())).expect("form");
    assert!(form.validate().is_none());
}

#[test]
fn test_field_errors_in_field_order() {
    let schema = Schema::new()
        .field("b", required())
        .field("a", required());
    let mut form = Form::new(FormConfig::new().schema(schema)).expect("form");

    let errors = form.validate().expect("invalid");
    assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    assert!(errors.others().is_empty());
}

#[test]
fn test_model_only_error_lands_on_field() {
    common::init_logging();
    let errors = ModelErrors::keyed([("name", ValidationError::model("required"))]);
    let mut form = form_with(name_age(), Some(errors));
    form.render().expect("renders");

    let errors = form.validate().expect("model reported an error");
    assert_eq!(errors.get("name"), Some(&ValidationError::model("required")));
    assert!(errors.others().is_empty());

    let field = form.field("name").expect("field");
    assert_eq!(field.error(), Some("required"));
    let el = field.element().expect("mounted");
    assert!(el.has_class(ERROR_CLASS));
    assert_eq!(find_by_data(el, "error")[0].text_content(), Some("required"));
}

#[test]
fn test_rendered_form_shows_and_clears_errors() {
    let errors = ModelErrors::keyed([("name", ValidationError::model("required"))]);
    let schema = name_age().field("age", required());
    let mut form = form_with(schema, Some(errors));
    form.render().expect("renders");

    form.validate().expect("invalid");
    let el = form.element().expect("mounted");
    let units = find_by_data(el, "field");
    assert!(units.iter().all(|unit| unit.has_class(ERROR_CLASS)));
    let shown: Vec<_> = find_by_data(el, "error")
        .into_iter()
        .filter_map(|slot| slot.text_content())
        .collect();
    assert_eq!(shown, vec!["required", "Required"]);

    form.set_value("age", json!("41"));
    form.validate().expect("name still fails");
    let el = form.element().expect("mounted");
    let age = find_by_data(el, "field")
        .into_iter()
        .find(|unit| unit.get_data("field").is_some_and(|key| key == "age"))
        .expect("age unit");
    assert!(!age.has_class(ERROR_CLASS));
    assert_eq!(find_by_data(age, "error")[0].text_content(), None);
}

#[test]
fn test_field_error_is_not_overridden_by_model() {
    let schema = Schema::new()
        .field("name", required())
        .field("age", FieldSchema::default());
    let errors = ModelErrors::keyed([("name", ValidationError::model("name is taken"))]);
    let mut form = form_with(schema, Some(errors));

    let errors = form.validate().expect("invalid");
    assert_eq!(errors.get("name").map(|e| e.kind.as_str()), Some("required"));
    assert_eq!(form.field("name").and_then(Field::error), Some("Required"));
    assert_eq!(
        errors.others(),
        [OtherError::Demoted {
            key: "name".into(),
            error: ValidationError::model("name is taken"),
        }]
    );
}

#[test]
fn test_model_error_without_field_is_demoted() {
    let errors = ModelErrors::keyed([("ghost", ValidationError::model("boo"))]);
    let mut form = form_with(name_age(), Some(errors));

    let errors = form.validate().expect("invalid");
    assert!(!errors.contains_key("ghost"));
    assert!(matches!(
        &errors.others()[0],
        OtherError::Demoted { key, .. } if key == "ghost"
    ));
}

#[test]
fn test_general_model_errors_go_to_others() {
    let mut form = form_with(name_age(), Some(ModelErrors::list(["one", "two"])));

    let errors = form.validate().expect("invalid");
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.others(),
        [OtherError::General(GeneralError::List(vec![
            "one".into(),
            "two".into()
        ]))]
    );
}

#[test]
fn test_errors_serialize_with_others_bucket() {
    let schema = Schema::new()
        .field("name", required())
        .field("age", FieldSchema::default());
    let errors = ModelErrors::keyed([
        ("name", ValidationError::model("taken")),
        ("age", ValidationError::model("too young")),
    ]);
    let mut form = form_with(schema, Some(errors));

    let errors = form.validate().expect("invalid");
    assert_eq!(
        serde_json::to_value(&errors).expect("serializes"),
        json!({
            "name": {"type": "required", "message": "Required"},
            "age": {"type": "model", "message": "too young"},
            "_others": [{"name": {"type": "model", "message": "taken"}}]
        })
    );
}

#[test]
fn test_revalidation_clears_previous_errors() {
    let mut form = Form::new(FormConfig::new().schema(Schema::new().field("name", required())))
        .expect("form");
    form.render().expect("renders");
    assert!(form.validate().is_some());

    form.set_value("name", json!("Ada"));
    assert!(form.validate().is_none());
    let field = form.field("name").expect("field");
    assert_eq!(field.error(), None);
    assert!(!field.element().expect("mounted").has_class(ERROR_CLASS));
}

#[test]
fn test_every_editor_validated_once_in_order() {
    let log = new_log();
    let config = FormConfig::new()
        .schema(name_age())
        .editors(spy_editors(&log));
    let mut form = Form::new(config).expect("form");
    let _ = form.validate();

    assert_eq!(common::calls(&log), vec!["name:validate", "age:validate"]);
}
