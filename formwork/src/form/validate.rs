use super::Form;
use crate::fieldset::FieldMap;
use crate::model::read_model;
use crate::validation::{FormErrors, ModelErrors, OtherError};

impl Form {
    /// Validate every field, then the bound model against the current values.
    ///
    /// Field errors take precedence. A keyed model error is shown on its
    /// field only when that field exists and has no error of its own;
    /// otherwise it goes to the `_others` bucket, as do non-keyed model
    /// errors. The mounted render unit, if any, shows the outcome. Returns
    /// `None` when nothing failed.
    pub fn validate(&mut self) -> Option<FormErrors> {
        let mut errors = FormErrors::new();

        for field in self.fields.iter_mut() {
            if let Some(error) = field.validate() {
                errors.insert(field.key(), error);
            }
        }

        if let Some(model) = &self.model {
            let values = self.values();
            if let Some(model_errors) = read_model(model, |m| m.validate(&values)) {
                merge_model_errors(&mut errors, model_errors, &mut self.fields);
            }
        }

        self.sync_mounted_fields();
        if !errors.is_empty() {
            log::debug!("form {} invalid: {} error(s)", self.id, errors.len());
        }
        errors.into_option()
    }
}

fn merge_model_errors(errors: &mut FormErrors, model_errors: ModelErrors, fields: &mut FieldMap) {
    match model_errors {
        ModelErrors::General(general) => errors.push_other(OtherError::General(general)),
        ModelErrors::Keyed(keyed) => {
            for (key, error) in keyed {
                let taken = errors.contains_key(&key);
                match fields.get_mut(&key) {
                    Some(field) if !taken => {
                        field.set_error(error.message.clone());
                        errors.insert(key, error);
                    }
                    _ => {
                        log::debug!("model error for {key:?} moved to _others");
                        errors.push_other(OtherError::Demoted { key, error });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::config::FormConfig;
    use crate::error::ValidationError;
    use crate::form::Form;
    use crate::model::{MemoryModel, shared};
    use crate::schema::{FieldSchema, Schema};
    use crate::validation::{ModelErrors, OtherError, validator};

    fn required() -> FieldSchema {
        FieldSchema::text().validator(validator(|v| {
            v.as_str()
                .is_none_or(str::is_empty)
                .then(|| ValidationError::new("required", "Required"))
        }))
    }

    #[test]
    fn test_field_error_beats_model_error() {
        let model = MemoryModel::new().validator(|_| {
            Some(ModelErrors::keyed([
                ("name", ValidationError::model("taken")),
                ("email", ValidationError::model("bad domain")),
            ]))
        });
        let schema = Schema::new()
            .field("name", required())
            .field("email", FieldSchema::text());
        let mut form = Form::new(FormConfig::new().schema(schema).model(shared(model)))
            .expect("form");

        let errors = form.validate().expect("invalid");
        assert_eq!(errors.get("name").map(|e| e.kind.as_str()), Some("required"));
        assert_eq!(errors.get("email").map(|e| e.message.as_str()), Some("bad domain"));
        assert_eq!(form.field("email").and_then(|f| f.error()), Some("bad domain"));
        assert_eq!(
            errors.others(),
            [OtherError::Demoted {
                key: "name".into(),
                error: ValidationError::model("taken"),
            }]
        );
    }

    #[test]
    fn test_model_error_for_unselected_key_is_demoted() {
        let model = MemoryModel::new()
            .validator(|_| Some(ModelErrors::keyed([("hidden", ValidationError::model("no"))])));
        let schema = Schema::new()
            .field("name", FieldSchema::text())
            .field("hidden", FieldSchema::text());
        let config = FormConfig::new().schema(schema).model(shared(model)).fields(["name"]);
        let mut form = Form::new(config).expect("form");

        let errors = form.validate().expect("invalid");
        assert!(!errors.contains_key("hidden"));
        assert_eq!(errors.others().len(), 1);
    }

    #[test]
    fn test_general_model_error_goes_to_others() {
        let model = MemoryModel::new().validator(|values| {
            (values.get("a") == values.get("b")).then(|| ModelErrors::message("a and b match"))
        });
        let schema = Schema::new()
            .field("a", FieldSchema::text())
            .field("b", FieldSchema::text());
        let mut form = Form::new(FormConfig::new().schema(schema).model(shared(model)))
            .expect("form");

        let errors = form.validate().expect("both empty");
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors.others()[0], OtherError::General(_)));

        form.set_value("a", json!("x"));
        assert!(form.validate().is_none());
    }
}
