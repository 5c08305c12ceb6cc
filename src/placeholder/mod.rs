//! `{name}` substitution over the closed set of form fields.
//!
//! Unknown names and fields with no (or an empty) value are left verbatim.
//! Substitution is single-pass: inserted values are never re-scanned.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::wire::FormData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ProductName,
    Description,
    TargetAudience,
    LaunchDate,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::ProductName,
        Field::Description,
        Field::TargetAudience,
        Field::LaunchDate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::ProductName => "productName",
            Field::Description => "description",
            Field::TargetAudience => "targetAudience",
            Field::LaunchDate => "launchDate",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// Anything that can supply values for template fields.
pub trait FieldSource {
    fn value(&self, field: Field) -> Option<&str>;
}

impl FieldSource for FormData {
    fn value(&self, field: Field) -> Option<&str> {
        Some(match field {
            Field::ProductName => &self.product_name,
            Field::Description => &self.description,
            Field::TargetAudience => &self.target_audience,
            Field::LaunchDate => &self.launch_date,
        })
    }
}

impl FieldSource for HashMap<String, String> {
    fn value(&self, field: Field) -> Option<&str> {
        self.get(field.name()).map(String::as_str)
    }
}

fn pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"))
}

pub fn resolve<S: FieldSource + ?Sized>(template: &str, data: &S) -> String {
    pattern()
        .replace_all(template, |caps: &Captures| {
            let token = &caps[0];
            Field::from_name(&caps[1])
                .and_then(|f| data.value(f))
                .filter(|v| !v.is_empty())
                .unwrap_or(token)
                .to_string()
        })
        .into_owned()
}

/// Placeholder tokens still present in `text`, in order of appearance.
pub fn unresolved(text: &str) -> Vec<String> {
    pattern()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
