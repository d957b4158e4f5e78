//! Validation types shared by editors, fields and the form.
//!
//! Validators are opaque: a [`Validator`] looks at one value and either
//! passes or returns a [`ValidationError`](crate::ValidationError). The form
//! merges per-field results with the bound model's own validator into a
//! single [`FormErrors`] report.

mod errors;
mod validator;

pub use errors::{FormErrors, GeneralError, ModelErrors, OtherError};
pub use validator::{Validator, first_error, validator};
