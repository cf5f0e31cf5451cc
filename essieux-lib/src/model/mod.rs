//! Typed models

mod entity;
mod record;
mod record_serde;
pub mod types;
mod value;

pub use entity::*;
pub use record::*;
pub use value::*;
