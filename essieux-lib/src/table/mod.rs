//! List-view engine
//!
//! Turns a fully loaded record collection into what a list page shows:
//! search and filter ([`Filter`]), ordering ([`OrderBy`]), pagination
//! ([`Page`]) and CSV export ([`CsvExport`]). [`TableView`] ties them to a
//! [`ViewState`] driven by [`ViewEvent`]s.

mod column;
pub mod export;
mod filter;
mod order;
pub mod page;
mod preset;
mod state;
mod view;

pub use column::*;
pub use export::CsvExport;
pub use export::export_csv;
pub use filter::*;
pub use order::*;
pub use page::Page;
pub use preset::NON_DEFINI;
pub use state::*;
pub use view::*;
