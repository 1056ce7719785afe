//! Field validation for student records.
//!
//! [`validate`] is shared by the add and edit paths. Every rule runs, so a
//! form with a short name and a bad email reports both problems at once.
//!
//! Rules:
//! - name must be at least 2 characters after trimming
//! - email must look like `local@domain.tld`
//! - email must not already belong to another student (case-insensitive)
//! - grade must be selected

use crate::model::{Student, StudentId};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

const MIN_NAME_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Grade,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Grade => "grade",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    NameTooShort,
    EmailMalformed,
    EmailDuplicate,
    GradeRequired,
}

impl ValidationErrorKind {
    pub fn field(&self) -> Field {
        match self {
            ValidationErrorKind::NameTooShort => Field::Name,
            ValidationErrorKind::EmailMalformed | ValidationErrorKind::EmailDuplicate => {
                Field::Email
            }
            ValidationErrorKind::GradeRequired => Field::Grade,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ValidationErrorKind::NameTooShort => "Name must be at least 2 characters",
            ValidationErrorKind::EmailMalformed => "Please enter a valid email address",
            ValidationErrorKind::EmailDuplicate => "Email already exists",
            ValidationErrorKind::GradeRequired => "Please select a grade",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field(), self.message())
    }
}

/// All rule failures for one candidate, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationErrorKind>);

impl ValidationErrors {
    pub fn kinds(&self) -> &[ValidationErrorKind] {
        &self.0
    }

    pub fn contains(&self, kind: ValidationErrorKind) -> bool {
        self.0.contains(&kind)
    }

    /// Failures attached to one field, for inline display.
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &ValidationErrorKind> {
        self.0.iter().filter(move |k| k.field() == field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn push(&mut self, kind: ValidationErrorKind) {
        self.0.push(kind);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|k| k.to_string()).collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Checks a candidate's name, email and grade against `existing`.
///
/// `exclude_id` is the record being edited; its own email never counts as a
/// duplicate.
pub fn validate(
    existing: &[Student],
    name: &str,
    email: &str,
    grade: &str,
    exclude_id: Option<StudentId>,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let email = email.trim();

    if name.trim().chars().count() < MIN_NAME_CHARS {
        errors.push(ValidationErrorKind::NameTooShort);
    }

    if !is_valid_email(email) {
        errors.push(ValidationErrorKind::EmailMalformed);
    }

    let wanted = email.to_lowercase();
    let duplicate = existing
        .iter()
        .filter(|s| Some(s.id) != exclude_id)
        .any(|s| s.email.to_lowercase() == wanted);
    if duplicate {
        errors.push(ValidationErrorKind::EmailDuplicate);
    }

    if grade.trim().is_empty() {
        errors.push(ValidationErrorKind::GradeRequired);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
