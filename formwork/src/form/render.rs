use formdom::{Element, find_by_data, find_element_mut, update_by_data};

use super::Form;
use crate::error::Result;
use crate::field::apply_error;
use crate::template::{FormTemplateData, slots};

impl Form {
    /// Render the form chrome, fill its slots and mount the result.
    ///
    /// Every `fields` slot receives the fields it selects (`*` or a
    /// comma-separated key list) and every `fieldsets` slot receives all
    /// fieldsets. Rendering again replaces the previous render unit. A slot
    /// naming an unknown key fails before any field is rendered.
    pub fn render(&mut self) -> Result<&Element> {
        let data = FormTemplateData {
            id: self.id.element_id(),
        };
        let mut el = (self.template)(&data);

        // Slots are located on the bare chrome, before anything is inserted.
        let field_slots: Vec<(String, Vec<String>)> = find_by_data(&el, slots::FIELDS)
            .into_iter()
            .map(|slot| {
                let selection = slot.get_data(slots::FIELDS).map(String::as_str).unwrap_or_default();
                (slot.id.clone(), self.select_fields(selection))
            })
            .collect();
        for key in field_slots.iter().flat_map(|(_, keys)| keys) {
            self.field_or_err(key)?;
        }
        let fieldset_slots: Vec<String> = find_by_data(&el, slots::FIELDSETS)
            .into_iter()
            .map(|slot| slot.id.clone())
            .collect();

        for (slot_id, keys) in field_slots {
            let mut rendered = Vec::with_capacity(keys.len());
            for key in &keys {
                rendered.push(self.field_mut_or_err(key)?.render());
            }
            if let Some(slot) = find_element_mut(&mut el, &slot_id) {
                rendered.into_iter().for_each(|f| slot.push_child(f));
            }
        }

        for slot_id in fieldset_slots {
            let mut rendered = Vec::with_capacity(self.fieldsets.len());
            for fieldset in &mut self.fieldsets {
                rendered.push(fieldset.render(&mut self.fields)?);
            }
            if let Some(slot) = find_element_mut(&mut el, &slot_id) {
                rendered.into_iter().for_each(|f| slot.push_child(f));
            }
        }

        log::debug!("form {} rendered", self.id);
        Ok(self.view.set_element(el))
    }

    /// Push each field's error and focus state into the mounted render unit.
    pub(super) fn sync_mounted_fields(&mut self) {
        let Some(root) = self.view.element_mut() else {
            return;
        };
        for field in self.fields.iter() {
            let error = field.error();
            let editor_id = field.editor_id();
            let focused = field.has_focus();
            update_by_data(root, slots::FIELD, field.key(), &mut |unit| {
                apply_error(unit, error);
                if let Some(input) = find_element_mut(unit, editor_id) {
                    input.focused = focused;
                }
            });
        }
    }

    /// Resolve a `fields` slot selection to keys.
    fn select_fields(&self, selection: &str) -> Vec<String> {
        if selection.trim() == "*" {
            return self.selected_fields.clone();
        }
        selection
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// The mounted render unit, if rendered and not removed.
    pub fn element(&self) -> Option<&Element> {
        self.view.element()
    }

    pub fn is_mounted(&self) -> bool {
        self.view.is_mounted()
    }
}
