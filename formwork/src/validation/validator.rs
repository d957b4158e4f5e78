use std::sync::Arc;

use serde_json::Value;

use crate::error::ValidationError;

/// A validation rule for one field value.
pub type Validator = Arc<dyn Fn(&Value) -> Option<ValidationError> + Send + Sync>;

/// Wrap a closure as a [`Validator`].
pub fn validator<F>(f: F) -> Validator
where
    F: Fn(&Value) -> Option<ValidationError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Run `validators` in order and return the first failure.
pub fn first_error(validators: &[Validator], value: &Value) -> Option<ValidationError> {
    validators.iter().find_map(|rule| rule(value))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_first_error_stops_at_first_failure() {
        let rules = vec![
            validator(|_| None),
            validator(|_| Some(ValidationError::new("a", "first"))),
            validator(|_| Some(ValidationError::new("b", "second"))),
        ];
        let err = first_error(&rules, &json!("x")).expect("fails");
        assert_eq!(err.kind, "a");
    }

    #[test]
    fn test_no_rules_passes() {
        assert!(first_error(&[], &Value::Null).is_none());
    }
}
