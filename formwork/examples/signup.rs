//! Builds a signup form, renders it as an outline, validates and commits.
//!
//! Logs go to `signup.log`.

use std::fs::File;

use formdom::outline;
use formwork::Validator;
use formwork::prelude::*;
use serde_json::{Value, json};
use simplelog::{Config, LevelFilter, WriteLogger};

const FORM: &str = r#"{
    "schema": {
        "email": {"type": "Text", "title": "E-mail", "editorAttrs": {"placeholder": "you@example.com"}},
        "password": "Password",
        "age": {"type": "Number", "help": "Optional"},
        "plan": {"type": "Select", "options": [{"val": "free", "label": "Free"}, {"val": "pro", "label": "Pro"}]},
        "newsletter": "Checkbox"
    },
    "fieldsets": [
        {"legend": "Account", "fields": ["email", "password"]},
        {"legend": "Extras", "fields": ["age", "plan", "newsletter"]}
    ],
    "idPrefix": "signup_"
}"#;

fn required(message: &'static str) -> Validator {
    validator(move |value: &Value| {
        value
            .as_str()
            .is_none_or(str::is_empty)
            .then(|| ValidationError::new("required", message))
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Ok(log_file) = File::create("signup.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let mut config = FormConfig::from_json(FORM)?;
    if let Some(source) = config.schema.take() {
        let mut schema = source.resolve();
        for key in ["email", "password"] {
            if let Some(field) = schema.get(key).cloned() {
                schema.insert(key, field.validator(required("Required")));
            }
        }
        config = config.schema(schema);
    }

    let model = shared(MemoryModel::new().validator(|values| {
        let email = values.get("email").and_then(Value::as_str).unwrap_or_default();
        (!email.is_empty() && !email.contains('@'))
            .then(|| ModelErrors::keyed([("email", ValidationError::model("Not an e-mail address"))]))
    }));
    let mut form = Form::new(config.model(model.clone()))?;

    form.focus();
    println!("{}", outline(form.render()?));

    if let Some(errors) = form.validate() {
        println!("empty form: {}", serde_json::to_string_pretty(&errors)?);
    }

    form.set_value("email", json!("ada.example.com"));
    form.set_value("password", json!("hunter2"));
    if let Err(err) = form.commit(SetOptions::new()) {
        println!("commit refused: {err}");
        if let Some(errors) = err.validation_errors() {
            println!("{}", serde_json::to_string_pretty(errors)?);
        }
    }

    form.set_value("email", json!("ada@example.com"));
    form.set_value("age", json!("36"));
    form.commit(SetOptions::new())?;
    println!("committed: {}", serde_json::to_string_pretty(&form.values())?);

    form.remove();
    Ok(())
}
