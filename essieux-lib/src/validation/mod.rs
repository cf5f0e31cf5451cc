//! Form validation
//!
//! A fluent [`Validator`] over field values, and the save rules of the
//! add/edit forms of each entity ([`Validate`], [`EntityKind::validate`]).
//!
//! # Example
//!
//! ```
//! use essieux_lib::model::EntityKind;
//! use essieux_lib::model::Record;
//!
//! let record = Record::new("essieux")
//!     .set("numero_ordre", "A-1042")
//!     .set("date_rev", "2024-01-15")
//!     .set("wagon", "")
//!     .set("d_roue", 920i64);
//!
//! let result = EntityKind::Essieux.validate(&record);
//! assert_eq!(result.error_for("wagon"), Some("Le wagon est requis"));
//! ```
//!
//! [`EntityKind::validate`]: crate::model::EntityKind::validate

mod rules;
mod validator;

pub use rules::EMAIL_PATTERN;
pub use rules::Validate;
pub use validator::FieldBuilder;
pub use validator::ValidationResult;
pub use validator::Validator;
