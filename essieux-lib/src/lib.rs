//! Essieux fleet data library
//!
//! Client-side data layer for the axle fleet dashboard: dynamic records, the
//! list-view engine (search, filter, sort, paginate, CSV export), dashboard
//! aggregates and form validation rules.

pub mod config;
pub mod error;
pub mod model;
pub mod stats;
pub mod table;
pub mod validation;

pub use config::PagePolicy;
pub use config::TableConfig;
