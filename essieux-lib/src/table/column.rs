//! Column descriptors

use crate::model::Record;
use crate::model::Value;

/// Display transform for a column cell.
///
/// Receives the whole record so a cell can depend on sibling fields (the
/// stock alert badge compares `quantite` with `seuil_minimum`).
pub type Renderer = fn(&Record) -> String;

/// Describes one column of a list view.
///
/// Every column is sortable by its key. The renderer only affects display;
/// searching, filtering, sorting and export work on the raw value.
///
/// # Example
///
/// ```
/// use essieux_lib::model::Record;
/// use essieux_lib::table::Column;
///
/// let column = Column::new("d_roue", "Diamètre Roue")
///     .with_renderer(|record| format!("{}mm", record.value("d_roue")));
///
/// let record = Record::new("essieux").set("d_roue", 920i64);
/// assert_eq!(column.display(&record), "920mm");
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    key: String,
    label: String,
    renderer: Option<Renderer>,
}

impl Column {
    /// Creates a column with the default renderer.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            renderer: None,
        }
    }

    /// Sets a display renderer.
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Returns the field key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the header label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the raw value of this column for a record.
    pub fn value<'r>(&self, record: &'r Record) -> &'r Value {
        record.value(&self.key)
    }

    /// Returns the display text of this column for a record.
    pub fn display(&self, record: &Record) -> String {
        match self.renderer {
            Some(render) => render(record),
            None => self.value(record).to_string(),
        }
    }
}

impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.label == other.label
    }
}
