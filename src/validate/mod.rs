use chrono::NaiveDate;
use std::fmt;

use crate::placeholder::{Field, FieldSource};
use crate::wire::FormData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.name(), self.message)
    }
}

fn label(field: Field) -> &'static str {
    match field {
        Field::ProductName => "Product name",
        Field::Description => "Product description",
        Field::TargetAudience => "Target audience",
        Field::LaunchDate => "Launch date",
    }
}

/// Inclusive character-count bounds; `None` means the field has no length rule.
fn length_rule(field: Field) -> Option<(usize, usize)> {
    match field {
        Field::ProductName => Some((3, 100)),
        Field::Description => Some((10, 500)),
        Field::TargetAudience => Some((5, 200)),
        Field::LaunchDate => None,
    }
}

/// Required-field and length checks. Returns every problem found, in field order.
pub fn check(form: &FormData) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    for field in Field::ALL {
        let value = form.value(field).unwrap_or_default().trim();
        let fail = |message: String| FieldError { field, message };

        if value.is_empty() {
            errors.push(fail(format!("{} is required", label(field))));
            continue;
        }
        if let Some((min, max)) = length_rule(field) {
            let n = value.chars().count();
            if n < min {
                errors.push(fail(format!("{} must be at least {min} characters", label(field))));
            } else if n > max {
                errors.push(fail(format!("{} must be no more than {max} characters", label(field))));
            }
        }
        if field == Field::LaunchDate && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
            errors.push(fail(format!("{} must be a date like 2025-06-01", label(field))));
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FormData {
        FormData {
            product_name: "Aero".into(),
            description: "Lightweight drone".into(),
            target_audience: "hobbyists".into(),
            launch_date: "2025-06-01".into(),
            tone: "minimal".into(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert!(check(&form()).is_ok());
    }

    #[test]
    fn blank_fields_are_required() {
        let mut f = form();
        f.product_name = "   ".into();
        f.launch_date = String::new();
        let errs = check(&f).unwrap_err();
        assert_eq!(errs.len(), 2);
        assert_eq!(errs[0].field, Field::ProductName);
        assert_eq!(errs[0].message, "Product name is required");
        assert_eq!(errs[1].field, Field::LaunchDate);
    }

    #[test]
    fn length_bounds_count_characters() {
        let mut f = form();
        f.description = "too short".into();
        f.target_audience = "é".repeat(201);
        let errs = check(&f).unwrap_err();
        assert_eq!(errs[0].to_string(), "description: Product description must be at least 10 characters");
        assert_eq!(errs[1].message, "Target audience must be no more than 200 characters");

        f = form();
        f.target_audience = "é".repeat(200);
        assert!(check(&f).is_ok());
    }

    #[test]
    fn launch_date_must_be_iso() {
        let mut f = form();
        f.launch_date = "June 1st".into();
        let errs = check(&f).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].field, Field::LaunchDate);
    }
}
