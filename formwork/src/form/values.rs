use serde_json::Value;

use super::Form;
use crate::error::{CommitError, Result};
use crate::model::{SetOptions, Values, write_model};

impl Form {
    /// Every field's current value, keyed by field key in selection order.
    pub fn values(&self) -> Values {
        self.fields
            .iter()
            .map(|field| (field.key().to_string(), field.value()))
            .collect()
    }

    /// One field's current value.
    pub fn value(&self, key: &str) -> Result<Value> {
        Ok(self.field_or_err(key)?.value())
    }

    /// Set one field's value. Keys without a field are ignored.
    pub fn set_value(&mut self, key: &str, value: Value) {
        let mut values = Values::new();
        values.insert(key.to_string(), value);
        self.set_values(&values);
    }

    /// Set several values at once.
    ///
    /// Only schema keys that have a field are applied, in schema order.
    /// Everything else in `values` is ignored.
    pub fn set_values(&mut self, values: &Values) {
        for key in self.schema.keys() {
            let Some(value) = values.get(key) else {
                continue;
            };
            match self.fields.get_mut(key) {
                Some(field) => field.set_value(value.clone()),
                None => log::trace!("form {}: {key:?} is not selected, skipped", self.id),
            }
        }
    }

    /// Validate, then write all current values to the bound model in one call.
    ///
    /// Nothing is written when validation fails. A model that refuses the
    /// write is reported as [`CommitError::Rejected`].
    pub fn commit(&mut self, options: SetOptions) -> std::result::Result<(), CommitError> {
        if let Some(errors) = self.validate() {
            log::debug!("form {} commit aborted: validation failed", self.id);
            return Err(CommitError::Invalid(errors));
        }

        let model = self.model.as_ref().ok_or(CommitError::Unbound)?;
        let values = self.values();
        write_model(model, |m| m.set(&values, &options)).map_err(|err| {
            log::debug!("form {} commit rejected: {err}", self.id);
            CommitError::Rejected(err)
        })?;

        log::debug!("form {} committed {} value(s)", self.id, values.len());
        Ok(())
    }
}
