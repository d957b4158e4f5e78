use super::Form;
use crate::editor::Editor;
use crate::error::Result;

impl Form {
    /// The editor of the field at `key`.
    pub fn editor(&self, key: &str) -> Result<&dyn Editor> {
        Ok(self.field_or_err(key)?.editor())
    }

    pub fn editor_mut(&mut self, key: &str) -> Result<&mut dyn Editor> {
        Ok(self.field_mut_or_err(key)?.editor_mut())
    }

    /// Focus the first field of the first fieldset. No-op without fieldsets.
    pub fn focus(&mut self) {
        let Some(fieldset) = self.fieldsets.first() else {
            return;
        };
        if let Some(field) = fieldset.field_at_mut(0, &mut self.fields) {
            field.focus();
        }
        self.sync_mounted_fields();
    }

    /// Blur whichever field currently has focus, if any.
    pub fn blur(&mut self) {
        if let Some(field) = self.fields.iter_mut().find(|field| field.has_focus()) {
            field.blur();
        }
        self.sync_mounted_fields();
    }

    /// Remove fieldsets, then fields, then the form's own render unit.
    pub fn remove(&mut self) {
        for fieldset in &mut self.fieldsets {
            fieldset.remove();
        }
        for field in self.fields.iter_mut() {
            field.remove();
        }
        self.view.remove();
        log::debug!("form {} removed", self.id);
    }
}
