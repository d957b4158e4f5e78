//! Schema-driven form composition.
//!
//! A [`Form`] is built from a [`Schema`] (field key to [`FieldSchema`]). It
//! creates one [`Field`] per selected key, each wrapping an [`Editor`] chosen
//! by the schema's type tag, and groups fields into [`Fieldset`]s for layout.
//! Rendering produces a [`formdom::Element`] tree from pluggable templates.
//!
//! A form may be bound to a [`Model`]. Field values are seeded from it,
//! [`Form::validate`] merges field errors with the model's own validation,
//! and [`Form::commit`] writes every value back in one call.
//!
//! ```ignore
//! use formwork::prelude::*;
//!
//! let schema = Schema::new()
//!     .field("name", FieldSchema::text())
//!     .field("age", FieldSchema::new("Number"));
//! let model = shared(MemoryModel::new());
//! let mut form = Form::new(FormConfig::new().schema(schema).model(model))?;
//! form.render()?;
//! form.set_value("name", "Ada".into());
//! form.commit(SetOptions::new())?;
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod field;
pub mod fieldset;
pub mod form;
pub mod model;
pub mod schema;
pub mod template;
pub mod validation;

pub use config::{FormConfig, FormDefaults};
pub use editor::{Editor, EditorOptions, EditorRegistry};
pub use error::{CommitError, FormError, ModelError, Result, ValidationError};
pub use field::{Binding, Field, FieldOptions};
pub use fieldset::{FieldMap, Fieldset};
pub use form::{Form, FormId};
pub use model::{MemoryModel, Model, SetOptions, SharedModel, Values, shared};
pub use schema::{FieldSchema, FieldsetSchema, Schema, SchemaSource, SelectOption};
pub use validation::{FormErrors, ModelErrors, OtherError, Validator, validator};

pub mod prelude {
    pub use crate::config::{FormConfig, FormDefaults};
    pub use crate::editor::{Editor, EditorOptions, EditorRegistry, editor_factory};
    pub use crate::error::{CommitError, FormError, ModelError, ValidationError};
    pub use crate::field::{Field, field_factory};
    pub use crate::fieldset::{Fieldset, fieldset_factory};
    pub use crate::form::{Form, FormId};
    pub use crate::model::{MemoryModel, Model, SetOptions, SharedModel, Values, shared};
    pub use crate::schema::{FieldSchema, FieldsetSchema, Schema, SchemaSource};
    pub use crate::template::{Template, slots, template};
    pub use crate::validation::{FormErrors, ModelErrors, OtherError, validator};

    pub use formdom::Element;
}
