//! Validator builder for fluent validation API.

use regex::Regex;

use crate::error::Error;
use crate::error::ValidationError;
use crate::model::Value;

/// Type alias for validation rule closures.
type Rule = Box<dyn Fn(&Value) -> bool + Send + Sync>;

/// Internal representation of a field being validated.
struct FieldEntry {
    name: String,
    value: Value,
    rules: Vec<(Rule, String)>,
}

impl FieldEntry {
    /// Returns the message of the first failing rule.
    fn first_error(&self) -> Option<&str> {
        self.rules
            .iter()
            .find(|(rule, _)| !rule(&self.value))
            .map(|(_, msg)| msg.as_str())
    }
}

/// Result of validating one or more fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed validation.
    #[default]
    Valid,
    /// One or more fields failed validation.
    Invalid(Vec<ValidationError>),
}

impl ValidationResult {
    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get all validation errors.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Get the first validation error (if any).
    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }

    /// Get the error message of a field, if it failed.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Converts into a `Result`, failing with [`Error::Validation`].
    pub fn into_result(self) -> Result<(), Error> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(errors) => Err(Error::Validation(errors)),
        }
    }
}

/// Builder for validating multiple form fields.
///
/// Each field reports only its first failing rule.
///
/// # Example
///
/// ```
/// use essieux_lib::model::Value;
/// use essieux_lib::validation::Validator;
///
/// let result = Validator::new()
///     .field("nom", "")
///         .required("Le nom est requis")
///     .field("email", "jean@example")
///         .required("L'email est requis")
///         .pattern(r"\S+@\S+\.\S+", "L'email n'est pas valide")
///     .field("quantite", Value::Int(3))
///         .at_least(0.0, "La quantité ne peut pas être négative")
///     .validate();
///
/// assert!(result.is_invalid());
/// assert_eq!(result.errors().len(), 2);
/// assert_eq!(result.error_for("email"), Some("L'email n'est pas valide"));
/// ```
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field to validate.
    pub fn field(self, name: impl Into<String>, value: impl Into<Value>) -> FieldBuilder {
        FieldBuilder {
            validator: self,
            entry: FieldEntry {
                name: name.into(),
                value: value.into(),
                rules: Vec::new(),
            },
        }
    }

    /// Run all validations.
    pub fn validate(self) -> ValidationResult {
        let errors: Vec<ValidationError> = self
            .fields
            .iter()
            .filter_map(|field| {
                field
                    .first_error()
                    .map(|msg| ValidationError::new(field.name.as_str(), msg))
            })
            .collect();

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            log::debug!("Validation failed on {} field(s)", errors.len());
            ValidationResult::Invalid(errors)
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder {
    validator: Validator,
    entry: FieldEntry,
}

impl FieldBuilder {
    /// Add a custom validation rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.entry.rules.push((Box::new(f), msg.into()));
        self
    }

    /// Continue to the next field.
    pub fn field(self, name: impl Into<String>, value: impl Into<Value>) -> FieldBuilder {
        self.finalize().field(name, value)
    }

    /// Finalize and run all validations.
    pub fn validate(self) -> ValidationResult {
        self.finalize().validate()
    }

    /// Finalize this field and return the validator.
    fn finalize(self) -> Validator {
        let mut validator = self.validator;
        validator.fields.push(self.entry);
        validator
    }

    // =========================================================================
    // Built-in rules
    // =========================================================================

    /// Require the field to be set and, for text, not blank.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v| match v {
                Value::Null => false,
                Value::String(s) => !s.trim().is_empty(),
                _ => true,
            },
            msg,
        )
    }

    /// Require the text to match a regex pattern.
    ///
    /// Empty values pass; use [`required`](Self::required) for non-empty.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex.
    pub fn pattern(self, pattern: &str, msg: impl Into<String>) -> Self {
        let re = Regex::new(pattern).expect("Invalid regex pattern");
        self.regex(&re, msg)
    }

    /// Require the text to match an already compiled regex.
    ///
    /// Same as [`pattern`](Self::pattern), for rules applied to many records.
    pub fn regex(self, re: &Regex, msg: impl Into<String>) -> Self {
        let re = re.clone();
        self.rule(
            move |v| {
                let text = v.to_string();
                text.is_empty() || re.is_match(&text)
            },
            msg,
        )
    }

    /// Require a number strictly greater than `min`.
    pub fn greater_than(self, min: f64, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.as_f64().is_some_and(|n| n > min), msg)
    }

    /// Require a number greater than or equal to `min`.
    pub fn at_least(self, min: f64, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.as_f64().is_some_and(|n| n >= min), msg)
    }
}
