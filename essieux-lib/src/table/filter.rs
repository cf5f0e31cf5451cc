//! Record predicates for search and filter selections.

use crate::model::Record;

/// Selection value meaning "no restriction".
pub const ALL: &str = "all";

/// Selection value meaning "the field is not set".
pub const NULL: &str = "null";

/// A predicate over records.
///
/// Predicates never fail: an absent field is treated as null, and null
/// never matches a search or a value.
///
/// # Example
///
/// ```
/// use essieux_lib::model::Record;
/// use essieux_lib::table::Filter;
///
/// let record = Record::new("essieux").set("marque", "SKF").set("wagon", "W-881");
///
/// let filter = Filter::search("skf").and_also(Filter::contains("wagon", "w-8"));
/// assert!(filter.matches(&record));
/// assert!(!Filter::is_null("marque").matches(&record));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Matches every record.
    Any,
    /// Any field's text contains the term, case-insensitively.
    Search(String),
    /// Field's text equals the value exactly.
    Eq(String, String),
    /// Field's text contains the value, case-insensitively.
    Contains(String, String),
    /// Field is null or absent.
    IsNull(String),
    /// Logical AND of multiple filters.
    And(Vec<Filter>),
}

impl Filter {
    /// Creates a free-text search over all fields. An empty term matches all.
    pub fn search(term: impl AsRef<str>) -> Self {
        let term = term.as_ref().to_lowercase();
        if term.is_empty() {
            Filter::Any
        } else {
            Filter::Search(term)
        }
    }

    /// Creates an exact equality filter.
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Eq(field.into(), value.into())
    }

    /// Creates a case-insensitive substring filter. An empty value matches all.
    pub fn contains(field: impl Into<String>, value: impl AsRef<str>) -> Self {
        let value = value.as_ref().to_lowercase();
        if value.is_empty() {
            Filter::Any
        } else {
            Filter::Contains(field.into(), value)
        }
    }

    /// Creates an is-null filter.
    pub fn is_null(field: impl Into<String>) -> Self {
        Filter::IsNull(field.into())
    }

    /// Creates a logical AND of multiple filters.
    pub fn and(filters: impl IntoIterator<Item = Filter>) -> Self {
        Filter::And(filters.into_iter().collect())
    }

    /// Combines this filter with another using logical AND.
    pub fn and_also(self, other: Filter) -> Self {
        match self {
            Filter::And(mut filters) => {
                filters.push(other);
                Filter::And(filters)
            }
            _ => Filter::And(vec![self, other]),
        }
    }

    /// Returns `true` if the record satisfies this filter.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Filter::Any => true,
            Filter::Search(term) => {
                let term = term.to_lowercase();
                record
                    .fields()
                    .values()
                    .filter(|value| !value.is_null())
                    .any(|value| value.to_string().to_lowercase().contains(&term))
            }
            Filter::Eq(field, expected) => {
                let value = record.value(field);
                !value.is_null() && value.to_string() == *expected
            }
            Filter::Contains(field, needle) => {
                let value = record.value(field);
                !value.is_null()
                    && value
                        .to_string()
                        .to_lowercase()
                        .contains(&needle.to_lowercase())
            }
            Filter::IsNull(field) => record.value(field).is_null(),
            Filter::And(filters) => filters.iter().all(|f| f.matches(record)),
        }
    }

    /// Returns the matching records, in their original order.
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// How a named filter compares its selection with the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Select box: `all`, `null`/empty, or an exact value.
    Exact,
    /// Free-text box: case-insensitive substring, empty means no restriction.
    Contains,
}

/// A named filter control of a list view (e.g. the "situation" select).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDef {
    name: String,
    field: String,
    kind: FilterKind,
}

impl FilterDef {
    /// Declares a select-box filter on a field.
    pub fn exact(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            kind: FilterKind::Exact,
        }
    }

    /// Declares a free-text filter on a field.
    pub fn contains(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            kind: FilterKind::Contains,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    /// The selection a fresh view starts with.
    pub fn default_selection(&self) -> &'static str {
        match self.kind {
            FilterKind::Exact => ALL,
            FilterKind::Contains => "",
        }
    }

    /// Builds the predicate for a selected value.
    pub fn to_filter(&self, selected: &str) -> Filter {
        match self.kind {
            FilterKind::Exact => match selected {
                ALL => Filter::Any,
                NULL | "" => Filter::is_null(self.field.as_str()),
                value => Filter::eq(self.field.as_str(), value),
            },
            FilterKind::Contains => Filter::contains(self.field.as_str(), selected),
        }
    }
}
