//! Record ordering.

use std::cmp::Ordering;

use crate::model::Record;
use crate::model::Value;

/// Sort direction for ordering results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

/// Specifies the ordering of a list view.
///
/// Sorting is stable, and records whose sort field is null always come
/// after every non-null record, in both directions.
///
/// # Example
///
/// ```
/// use essieux_lib::model::Record;
/// use essieux_lib::model::Value;
/// use essieux_lib::table::OrderBy;
///
/// let records = vec![
///     Record::new("essieux").set("id", "1").set("situation", "EN EXPLOITATION"),
///     Record::new("essieux").set("id", "2").set("situation", Value::Null),
/// ];
/// let rows: Vec<&Record> = records.iter().collect();
///
/// let sorted = OrderBy::desc("situation").apply(rows);
/// assert_eq!(sorted[0].id().as_deref(), Some("1"));
/// assert_eq!(sorted[1].id().as_deref(), Some("2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    field: String,
    direction: Direction,
}

impl OrderBy {
    /// Creates an ascending order on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending order on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }

    /// Returns the sort field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the sort direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the same field with the opposite direction.
    pub fn toggled(&self) -> Self {
        Self {
            field: self.field.clone(),
            direction: self.direction.toggled(),
        }
    }

    /// Orders the rows by this field.
    ///
    /// Two numbers compare numerically and two texts compare as lower-cased
    /// text. A number always sorts before a text value.
    pub fn apply<'a>(&self, rows: Vec<&'a Record>) -> Vec<&'a Record> {
        let mut keyed: Vec<(SortKey, &'a Record)> = rows
            .into_iter()
            .map(|r| (SortKey::of(r.value(&self.field)), r))
            .collect();

        // slice::sort_by is stable: equal keys keep their filtered order
        keyed.sort_by(|(a, _), (b, _)| a.compare(b, self.direction));

        keyed.into_iter().map(|(_, r)| r).collect()
    }
}

/// Precomputed comparison key of one record.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Null,
    Number(f64),
    Text(String),
}

impl SortKey {
    fn of(value: &Value) -> Self {
        if value.is_null() {
            return SortKey::Null;
        }
        match value.as_f64() {
            Some(n) => SortKey::Number(n),
            None => SortKey::Text(value.to_string().to_lowercase()),
        }
    }

    fn compare(&self, other: &SortKey, direction: Direction) -> Ordering {
        match (self, other) {
            (SortKey::Null, SortKey::Null) => Ordering::Equal,
            // Nulls last regardless of direction
            (SortKey::Null, _) => Ordering::Greater,
            (_, SortKey::Null) => Ordering::Less,
            (SortKey::Number(a), SortKey::Number(b)) => direction.apply(a.total_cmp(b)),
            (SortKey::Text(a), SortKey::Text(b)) => direction.apply(a.cmp(b)),
            (SortKey::Number(_), SortKey::Text(_)) => direction.apply(Ordering::Less),
            (SortKey::Text(_), SortKey::Number(_)) => direction.apply(Ordering::Greater),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(rows: &[&Record]) -> Vec<String> {
        rows.iter().filter_map(|r| r.id()).collect()
    }

    fn record(id: &str, field: &str, value: impl Into<Value>) -> Record {
        Record::new("essieux").set("id", id).set(field, value)
    }

    #[test]
    fn test_numeric_sort() {
        let records = vec![
            record("a", "serie", 9102i64),
            record("b", "serie", 910i64),
            record("c", "serie", 9101.5),
        ];
        let rows: Vec<&Record> = records.iter().collect();

        assert_eq!(ids(&OrderBy::asc("serie").apply(rows.clone())), ["b", "c", "a"]);
        assert_eq!(ids(&OrderBy::desc("serie").apply(rows)), ["a", "c", "b"]);
    }

    #[test]
    fn test_text_sort_is_case_insensitive() {
        let records = vec![
            record("a", "marque", "timken"),
            record("b", "marque", "SKF"),
            record("c", "marque", "Fag"),
        ];
        let rows: Vec<&Record> = records.iter().collect();

        assert_eq!(ids(&OrderBy::asc("marque").apply(rows)), ["c", "b", "a"]);
    }

    #[test]
    fn test_mixed_values_keep_numeric_order() {
        let records = vec![
            record("a", "post", 10i64),
            record("b", "post", 9i64),
            record("c", "post", "x"),
        ];
        let rows: Vec<&Record> = records.iter().collect();

        assert_eq!(ids(&OrderBy::asc("post").apply(rows.clone())), ["b", "a", "c"]);
        assert_eq!(ids(&OrderBy::desc("post").apply(rows)), ["c", "a", "b"]);
    }

    #[test]
    fn test_numeric_text_is_still_text() {
        // Only number values compare numerically; "10" stays a string
        let records = vec![record("a", "post", 9i64), record("b", "post", "10"), record("c", "post", "2")];
        let rows: Vec<&Record> = records.iter().collect();

        assert_eq!(ids(&OrderBy::asc("post").apply(rows)), ["a", "b", "c"]);
    }

    #[test]
    fn test_nulls_last_in_both_directions() {
        let records = vec![
            record("n1", "situation", Value::Null),
            record("a", "situation", "DEMANDE"),
            Record::new("essieux").set("id", "n2"),
            record("b", "situation", "EN EXPLOITATION"),
        ];
        let rows: Vec<&Record> = records.iter().collect();

        assert_eq!(
            ids(&OrderBy::asc("situation").apply(rows.clone())),
            ["a", "b", "n1", "n2"]
        );
        assert_eq!(
            ids(&OrderBy::desc("situation").apply(rows)),
            ["b", "a", "n1", "n2"]
        );
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let records = vec![
            record("1", "marque", "SKF"),
            record("2", "marque", "Fag"),
            record("3", "marque", "skf"),
            record("4", "marque", "SKF"),
        ];
        let rows: Vec<&Record> = records.iter().collect();

        assert_eq!(ids(&OrderBy::asc("marque").apply(rows.clone())), ["2", "1", "3", "4"]);
        assert_eq!(ids(&OrderBy::desc("marque").apply(rows)), ["1", "3", "4", "2"]);
    }

    #[test]
    fn test_toggled() {
        let order = OrderBy::asc("serie");
        assert_eq!(order.toggled(), OrderBy::desc("serie"));
        assert_eq!(order.toggled().toggled(), order);
    }
}
