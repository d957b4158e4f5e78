//! Tests for form rendering and slot composition.

mod common;

use formdom::{find_by_data, outline};
use formwork::prelude::*;
use formwork::template::{FieldsetTemplateData, FormTemplateData};

use common::name_age;

fn field_keys(el: &Element) -> Vec<String> {
    find_by_data(el, "field")
        .into_iter()
        .filter_map(|f| f.get_data("field").cloned())
        .collect()
}

fn chrome_with(parts: Vec<Element>) -> Template<FormTemplateData> {
    template(move |data: &FormTemplateData| {
        Element::tag("form")
            .id(data.id.clone())
            .children(parts.clone())
    })
}

#[test]
fn test_fieldsets_render_in_construction_order() {
    let config = FormConfig::new().schema(name_age()).fieldsets([
        FieldsetSchema::new(["age"]).legend("Second key first"),
        FieldsetSchema::new(["name"]),
    ]);
    let mut form = Form::new(config).expect("form");
    let el = form.render().expect("renders");

    let fieldsets = find_by_data(el, slots::FIELDSETS)[0].content.children();
    assert_eq!(fieldsets.len(), 2);
    assert_eq!(field_keys(&fieldsets[0]), vec!["age"]);
    assert_eq!(field_keys(&fieldsets[1]), vec!["name"]);
}

#[test]
fn test_wildcard_fields_slot_uses_selection_order() {
    let chrome = chrome_with(vec![Element::box_().data(slots::FIELDS, "*")]);
    let config = FormConfig::new()
        .schema(name_age())
        .fields(["age", "name"])
        .fieldsets(Vec::<FieldsetSchema>::new())
        .template(chrome);
    let mut form = Form::new(config).expect("form");

    let el = form.render().expect("renders");
    assert_eq!(field_keys(el), vec!["age", "name"]);
}

#[test]
fn test_chrome_with_both_slots() {
    let chrome = chrome_with(vec![
        Element::box_().data(slots::FIELDS, "name"),
        Element::box_().data(slots::FIELDSETS, ""),
    ]);
    let config = FormConfig::new()
        .schema(name_age())
        .fieldsets([vec!["age"]])
        .template(chrome);
    let mut form = Form::new(config).expect("form");

    let el = form.render().expect("renders");
    assert_eq!(field_keys(el), vec!["name", "age"]);
}

#[test]
fn test_rerender_replaces_unit_and_reflects_state() {
    let mut form = Form::new(FormConfig::new().schema(name_age())).expect("form");
    let first = form.render().expect("renders").clone();

    form.set_value("name", "Ada".into());
    let second = form.render().expect("renders").clone();

    assert_ne!(first, second);
    assert_eq!(form.element(), Some(&second));
    assert!(outline(&second).contains("[Ada]"));
    assert!(!outline(&first).contains("[Ada]"));
}

#[test]
fn test_field_chrome_shows_title_and_help() {
    let schema = Schema::new().field(
        "email",
        FieldSchema::text()
            .title("E-mail")
            .help("We never share it")
            .field_attr("class", "wide"),
    );
    let mut form = Form::new(FormConfig::new().schema(schema)).expect("form");
    let el = form.render().expect("renders");

    let field = find_by_data(el, "field")[0];
    assert_eq!(field.get_data("class").map(String::as_str), Some("wide"));
    let label = find_by_data(field, "for")[0];
    assert_eq!(label.text_content(), Some("E-mail"));
    assert_eq!(find_by_data(field, "help")[0].text_content(), Some("We never share it"));
}

#[test]
fn test_custom_fieldset_template() {
    let fieldset = template(|data: &FieldsetTemplateData| {
        Element::tag("section")
            .class("group")
            .child(Element::text(data.legend.clone().unwrap_or_default()))
            .child(Element::box_().data(slots::FIELDS, ""))
    });
    let config = FormConfig::new()
        .schema(name_age())
        .fieldsets([FieldsetSchema::new(["name", "age"]).legend("People")])
        .fieldset_template(fieldset);
    let mut form = Form::new(config).expect("form");
    let el = form.render().expect("renders");

    let section = &find_by_data(el, slots::FIELDSETS)[0].content.children()[0];
    assert_eq!(section.tag, "section");
    assert_eq!(section.content.children()[0].text_content(), Some("People"));
    assert_eq!(field_keys(section), vec!["name", "age"]);
}

#[test]
fn test_focusable_order_follows_layout() {
    let config = FormConfig::new()
        .schema(name_age())
        .fieldsets([vec!["age", "name"]]);
    let mut form = Form::new(config).expect("form");
    let el = form.render().expect("renders");

    assert_eq!(formdom::collect_focusable(el), vec!["age", "name"]);
}
