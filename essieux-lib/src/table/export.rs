//! CSV export of list views

use std::path::Path;
use std::path::PathBuf;

use csv::QuoteStyle;
use csv::Terminator;
use csv::WriterBuilder;

use crate::error::Error;
use crate::model::EntityKind;
use crate::model::Record;
use crate::table::Column;

/// A named CSV document ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

impl CsvExport {
    /// Exports rows under `<plural>.csv` for the entity.
    pub fn new(kind: EntityKind, columns: &[Column], rows: &[&Record]) -> Self {
        Self::named(kind.csv_filename(), columns, rows)
    }

    /// Exports rows under an explicit file name.
    pub fn named(filename: impl Into<String>, columns: &[Column], rows: &[&Record]) -> Self {
        Self {
            filename: filename.into(),
            content: export_csv(columns, rows),
        }
    }

    /// Writes the document into `dir` and returns the full path.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, Error> {
        let path = dir.as_ref().join(&self.filename);
        std::fs::write(&path, self.content.as_bytes())?;
        log::info!("Exported {} to {}", self.filename, path.display());
        Ok(path)
    }
}

/// Serializes rows to CSV text.
///
/// The header holds the column labels unquoted. Every data cell is quoted,
/// null cells are empty and lists are joined with `"; "`. Lines end with
/// `\n` and there is no trailing newline.
///
/// # Example
///
/// ```
/// use essieux_lib::model::Record;
/// use essieux_lib::table::Column;
/// use essieux_lib::table::export_csv;
///
/// let columns = vec![Column::new("nom", "Nom"), Column::new("competences", "Compétences")];
/// let record = Record::new("travailleurs")
///     .set("nom", "Martin")
///     .set("competences", vec!["Mécanique", "Soudure"]);
///
/// let csv = export_csv(&columns, &[&record]);
/// assert_eq!(csv, "Nom,Compétences\n\"Martin\",\"Mécanique; Soudure\"");
/// ```
pub fn export_csv(columns: &[Column], rows: &[&Record]) -> String {
    let header = columns
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header);

    for (index, record) in rows.iter().enumerate() {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| c.value(record).to_export_text())
            .collect();
        match csv_row(&cells) {
            Ok(line) => lines.push(line),
            Err(e) => log::warn!(
                "Skipping row {} ({:?}) in CSV export: {}",
                index + 1,
                record.id(),
                e
            ),
        }
    }

    lines.join("\n")
}

fn csv_row(cells: &[String]) -> Result<String, Error> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(cells)?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    let line = String::from_utf8_lossy(&bytes);
    Ok(line.trim_end_matches('\n').to_string())
}
