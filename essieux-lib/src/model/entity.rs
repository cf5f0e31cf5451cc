//! Entity kinds of the fleet backend

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The tables managed by the dashboard.
///
/// Each kind knows its table name in the hosted backend, which is also the
/// plural used for export file names.
///
/// # Examples
///
/// ```
/// use essieux_lib::model::EntityKind;
///
/// let kind: EntityKind = "travailleurs".parse().unwrap();
/// assert_eq!(kind.csv_filename(), "travailleurs.csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Railway axles.
    Essieux,
    /// Maintenance technicians.
    Travailleurs,
    /// Spare-parts stock.
    Stock,
    /// Fault and incident records.
    Pannes,
}

impl EntityKind {
    /// All entity kinds, in menu order.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Essieux,
        EntityKind::Travailleurs,
        EntityKind::Stock,
        EntityKind::Pannes,
    ];

    /// Returns the table name in the backend (e.g. `stock_items`).
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Essieux => "essieux",
            Self::Travailleurs => "travailleurs",
            Self::Stock => "stock_items",
            Self::Pannes => "pannes",
        }
    }

    /// Returns the plural display name, used for export files.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Essieux => "essieux",
            Self::Travailleurs => "travailleurs",
            Self::Stock => "stock",
            Self::Pannes => "pannes",
        }
    }

    /// Returns the export file name (`<plural>.csv`).
    pub fn csv_filename(&self) -> String {
        format!("{}.csv", self.plural())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.plural() == name || kind.table_name() == name)
            .ok_or_else(|| Error::UnknownEntity(s.to_string()))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}
