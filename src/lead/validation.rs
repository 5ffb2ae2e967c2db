//! Schema validation and normalization of inbound lead records.
//!
//! Pure functions only: no I/O and no web types.

use email_address::{EmailAddress, Options};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::model::Lead;

/// One rejected field, in the shape returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Location of the field, e.g. `["body", "email"]`.
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl FieldError {
    fn new(loc: &[&str], msg: impl Into<String>, kind: &'static str) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind,
        }
    }

    fn body(field: &str, msg: impl Into<String>, kind: &'static str) -> Self {
        Self::new(&["body", field], msg, kind)
    }
}

/// A record failed schema validation. Carries every field error found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} validation error(s) for Lead", .errors.len())]
pub struct LeadValidationError {
    pub errors: Vec<FieldError>,
}

impl LeadValidationError {
    /// The request body as a whole could not be used.
    pub fn malformed_body(msg: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(&["body"], msg, "value_error.jsondecode")],
        }
    }

    /// Whether `field` is among the rejected fields.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors
            .iter()
            .any(|e| e.loc.last().map(String::as_str) == Some(field))
    }
}

impl Lead {
    /// Validate an untyped record and build a normalized lead.
    ///
    /// The name is trimmed and title-cased, the email is reduced to its
    /// canonical form (see [`normalize_email`]); `company` and `message`
    /// default to empty strings. Unknown fields are ignored.
    pub fn from_record(record: &Value) -> Result<Lead, LeadValidationError> {
        let Some(fields) = record.as_object() else {
            return Err(LeadValidationError {
                errors: vec![FieldError::new(
                    &["body"],
                    "value is not a valid dict",
                    "type_error.dict",
                )],
            });
        };

        let mut errors = Vec::new();

        let name = match required_str(fields, "name", &mut errors) {
            Some(raw) if raw.trim().is_empty() => {
                errors.push(FieldError::body("name", "Name cannot be empty", "value_error"));
                None
            }
            Some(raw) => Some(title_case(raw.trim())),
            None => None,
        };

        let email = match required_str(fields, "email", &mut errors) {
            Some(raw) => match normalize_email(raw) {
                Some(email) => Some(email),
                None => {
                    errors.push(FieldError::body(
                        "email",
                        "value is not a valid email address",
                        "value_error.email",
                    ));
                    None
                }
            },
            None => None,
        };

        let company = optional_str(fields, "company", &mut errors);
        let message = optional_str(fields, "message", &mut errors);

        match (name, email) {
            (Some(name), Some(email)) if errors.is_empty() => Ok(Lead {
                name,
                email,
                company,
                message,
            }),
            _ => Err(LeadValidationError { errors }),
        }
    }
}

fn required_str<'a>(
    fields: &'a Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    match fields.get(field) {
        Some(Value::String(s)) => Some(s),
        Some(_) => {
            errors.push(FieldError::body(field, "str type expected", "type_error.str"));
            None
        }
        None => {
            errors.push(FieldError::body(field, "field required", "value_error.missing"));
            None
        }
    }
}

fn optional_str(fields: &Map<String, Value>, field: &str, errors: &mut Vec<FieldError>) -> String {
    match fields.get(field) {
        Some(Value::String(s)) => s.clone(),
        Some(_) => {
            errors.push(FieldError::body(field, "str type expected", "type_error.str"));
            String::new()
        }
        None => String::new(),
    }
}

/// Title-case the first letter of every word and lower-case the rest.
///
/// A word starts at any alphabetic character that follows a non-alphabetic
/// one, so `"mary-jane o'neil"` becomes `"Mary-Jane O'Neil"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                push_titlecase(&mut out, ch);
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Titlecase differs from uppercase for the Latin digraphs (`ǆ` -> `ǅ`, not
/// `Ǆ`) and for letters that uppercase to several characters (`ß` -> `Ss`).
fn push_titlecase(out: &mut String, ch: char) {
    let digraph = match ch {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        _ => None,
    };
    if let Some(title) = digraph {
        out.push(title);
        return;
    }

    let mut upper = ch.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
    }
    for rest in upper {
        out.extend(rest.to_lowercase());
    }
}

/// Parse an address and return it in canonical form, or `None` if invalid.
///
/// Surrounding whitespace is dropped and the domain is lower-cased; the local
/// part is kept as written. Display text (`Jane <jane@example.com>`), domain
/// literals, quoted local parts and undotted domains are rejected.
pub fn normalize_email(candidate: &str) -> Option<String> {
    let options = Options::default()
        .without_display_text()
        .without_domain_literal();
    let address = EmailAddress::parse_with_options(candidate.trim(), options).ok()?;

    let local = address.local_part();
    let domain = address.domain();
    if local.starts_with('"') {
        return None;
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return None;
    }
    Some(format!("{}@{}", local, domain.to_lowercase()))
}

/// Whether `candidate` is an address [`normalize_email`] accepts.
pub fn is_valid_email(candidate: &str) -> bool {
    normalize_email(candidate).is_some()
}
