use std::borrow::Cow;

use convert_case::{Case, Casing};
use validator::{ValidationError, ValidationErrors};

use crate::types::error::{FieldError, FieldErrors};

pub const BLANK: &str = "blank";

/// Rejects strings that are empty once surrounding whitespace is trimmed.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(BLANK)
            .with_message(Cow::Borrowed("This field may not be blank.")));
    }
    Ok(())
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        for (field, errs) in errors.field_errors() {
            // error keys match the JSON the client sent: first_name -> firstName
            let key = field.to_case(Case::Camel);
            // a blank value is only reported as blank
            let blank = errs.iter().any(|e| e.code == BLANK);
            for err in errs.iter().filter(|e| !blank || e.code == BLANK) {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({}).", err.code));
                out.push(key.clone(), FieldError::new(err.code.to_string(), message));
            }
        }
        out
    }
}
