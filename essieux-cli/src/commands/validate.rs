//! `essieux validate`

use std::io::Write;
use std::path::Path;

use essieux_lib::model::EntityKind;

use crate::commands::load_records;
use crate::error::CliError;

/// Checks every record and prints the failures.
///
/// Returns `true` when all records are valid.
pub fn run(kind: EntityKind, data: &Path, out: &mut dyn Write) -> Result<bool, CliError> {
    let records = load_records(kind, data)?;
    let mut invalid = 0;

    for (index, record) in records.iter().enumerate() {
        let result = kind.validate(record);
        if result.is_valid() {
            continue;
        }
        invalid += 1;
        let id = record.id().unwrap_or_else(|| "-".to_string());
        for error in result.errors() {
            writeln!(out, "#{} (id {}): {}", index + 1, id, error)?;
        }
    }

    log::info!("Validated {} {}: {} invalid", records.len(), kind, invalid);
    writeln!(
        out,
        "{}/{} enregistrements valides",
        records.len() - invalid,
        records.len()
    )?;
    Ok(invalid == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::ESSIEUX;
    use crate::commands::tests::write_data;

    #[test]
    fn test_reports_invalid_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_data(dir.path(), "essieux.json", ESSIEUX);

        let mut out = Vec::new();
        let ok = run(EntityKind::Essieux, &path, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!ok);
        assert!(text.contains("#2 (id 2): d_roue: Le diamètre de roue doit être positif\n"));
        assert!(text.ends_with("2/3 enregistrements valides\n"));
    }

    #[test]
    fn test_all_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_data(
            dir.path(),
            "stock.json",
            r#"[{"id": "s1", "nom": "Roulement", "quantite": 4, "seuil_minimum": 2,
                 "date_derniere_commande": "2024-02-10"}]"#,
        );

        let mut out = Vec::new();
        assert!(run(EntityKind::Stock, &path, &mut out).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "1/1 enregistrements valides\n");
    }
}
