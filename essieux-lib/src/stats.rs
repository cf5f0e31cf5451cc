//! Dashboard aggregates
//!
//! Everything here is computed from fully loaded record lists, the same
//! records the list views work on. Missing or null fields are skipped by
//! sums and grouped under [`NON_DEFINI`] by counts.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::model::Record;
use crate::table::NON_DEFINI;

// =============================================================================
// Generic helpers
// =============================================================================

/// Counts records per distinct value of a field.
pub fn count_by(records: &[Record], field: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        let value = record.value(field);
        let key = if value.is_null() {
            NON_DEFINI.to_string()
        } else {
            value.to_string()
        };
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Counts records whose field text equals `expected`.
pub fn count_where(records: &[Record], field: &str, expected: &str) -> usize {
    records
        .iter()
        .filter(|r| {
            let value = r.value(field);
            !value.is_null() && value.to_string() == expected
        })
        .count()
}

/// Sums the numeric values of a field.
pub fn sum(records: &[Record], field: &str) -> f64 {
    records.iter().filter_map(|r| r.value(field).as_f64()).sum()
}

/// Sums a field as exact decimals.
pub fn sum_decimal(records: &[Record], field: &str) -> Decimal {
    records
        .iter()
        .filter_map(|r| r.get_decimal(field).ok().flatten())
        .sum()
}

/// Average of a field over all records, 0 for an empty list.
pub fn average(records: &[Record], field: &str) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    sum(records, field) / records.len() as f64
}

/// Returns the first record with the highest numeric value of a field.
pub fn max_by<'a>(records: &'a [Record], field: &str) -> Option<&'a Record> {
    let mut best: Option<(&'a Record, f64)> = None;
    for record in records {
        let Some(value) = record.value(field).as_f64() else {
            continue;
        };
        match best {
            Some((_, top)) if value <= top => {}
            _ => best = Some((record, value)),
        }
    }
    best.map(|(record, _)| record)
}

/// Percentage of `part` in `total`, `None` when `total` is zero.
pub fn percentage(part: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(part as f64 / total as f64 * 100.0)
    }
}

// =============================================================================
// Fleet (essieux)
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetSummary {
    pub total: usize,
    pub en_exploitation: usize,
    pub demande: usize,
    pub sans_situation: usize,
    pub par_serie: BTreeMap<String, usize>,
    pub par_marque: BTreeMap<String, usize>,
    pub age_calage_moyen: f64,
    pub diametre_roue_moyen: f64,
}

impl FleetSummary {
    pub fn from_records(essieux: &[Record]) -> Self {
        Self {
            total: essieux.len(),
            en_exploitation: count_where(essieux, "situation", "EN EXPLOITATION"),
            demande: count_where(essieux, "situation", "DEMANDE"),
            sans_situation: essieux
                .iter()
                .filter(|r| r.value("situation").is_null())
                .count(),
            par_serie: count_by(essieux, "serie"),
            par_marque: count_by(essieux, "marque"),
            age_calage_moyen: average(essieux, "age_calage_annee"),
            diametre_roue_moyen: average(essieux, "d_roue"),
        }
    }

    /// Share of axles in service, in percent.
    pub fn taux_exploitation(&self) -> Option<f64> {
        percentage(self.en_exploitation, self.total)
    }
}

// =============================================================================
// Team (travailleurs)
// =============================================================================

/// A technician singled out by one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlight {
    pub id: Option<String>,
    pub name: String,
    pub value: f64,
}

impl Highlight {
    fn of(record: &Record, field: &str) -> Option<Self> {
        let value = record.value(field).as_f64()?;
        let name = format!("{} {}", record.value("prenom"), record.value("nom"));
        Some(Self {
            id: record.id(),
            name: name.trim().to_string(),
            value,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    pub total: usize,
    pub actifs: usize,
    pub en_conge: usize,
    pub inactifs: usize,
    pub total_interventions: f64,
    pub note_moyenne: f64,
    pub essieux_assignes: f64,
    pub par_niveau: BTreeMap<String, usize>,
    pub par_specialite: BTreeMap<String, usize>,
    pub meilleur_technicien: Option<Highlight>,
    pub plus_productif: Option<Highlight>,
}

impl TeamSummary {
    pub fn from_records(travailleurs: &[Record]) -> Self {
        Self {
            total: travailleurs.len(),
            actifs: count_where(travailleurs, "statut", "ACTIF"),
            en_conge: count_where(travailleurs, "statut", "CONGE"),
            inactifs: count_where(travailleurs, "statut", "INACTIF"),
            total_interventions: sum(travailleurs, "interventions_realisees"),
            note_moyenne: average(travailleurs, "note_moyenne"),
            essieux_assignes: sum(travailleurs, "essieux_assignes"),
            par_niveau: count_by(travailleurs, "niveau"),
            par_specialite: count_by(travailleurs, "specialite"),
            meilleur_technicien: max_by(travailleurs, "note_moyenne")
                .and_then(|r| Highlight::of(r, "note_moyenne")),
            plus_productif: max_by(travailleurs, "interventions_realisees")
                .and_then(|r| Highlight::of(r, "interventions_realisees")),
        }
    }

    /// Number of distinct specialities.
    pub fn diversite_specialites(&self) -> usize {
        self.par_specialite.len()
    }

    /// Interventions per technician, `None` without technicians.
    pub fn efficacite(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.total_interventions / self.total as f64)
        }
    }
}

/// Assigned axles over fleet size, in percent.
pub fn occupation_rate(fleet: &FleetSummary, team: &TeamSummary) -> Option<f64> {
    if fleet.total == 0 {
        None
    } else {
        Some(team.essieux_assignes / fleet.total as f64 * 100.0)
    }
}

// =============================================================================
// Stock
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockSummary {
    pub total: usize,
    /// Items at or below their reorder threshold.
    pub stock_faible: usize,
    pub rupture: usize,
    pub valeur_totale: Decimal,
}

impl StockSummary {
    pub fn from_records(items: &[Record]) -> Self {
        let mut stock_faible = 0;
        let mut rupture = 0;
        let mut valeur_totale = Decimal::ZERO;

        for item in items {
            let quantite = item.value("quantite").as_f64();
            let seuil = item.value("seuil_minimum").as_f64();
            if matches!((quantite, seuil), (Some(q), Some(s)) if q <= s) {
                stock_faible += 1;
            }
            if quantite.is_some_and(|q| q <= 0.0) {
                rupture += 1;
            }
            let q = item.get_decimal("quantite").ok().flatten();
            let prix = item.get_decimal("prix_unitaire").ok().flatten();
            if let (Some(q), Some(prix)) = (q, prix) {
                valeur_totale += q * prix;
            }
        }

        Self {
            total: items.len(),
            stock_faible,
            rupture,
            valeur_totale,
        }
    }
}

// =============================================================================
// Faults (pannes)
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanneSummary {
    pub total: usize,
    pub par_urgence: BTreeMap<String, usize>,
    pub par_statut: BTreeMap<String, usize>,
    /// Faults not yet resolved.
    pub ouvertes: usize,
    pub cout_total: Decimal,
}

impl PanneSummary {
    pub fn from_records(pannes: &[Record]) -> Self {
        Self {
            total: pannes.len(),
            par_urgence: count_by(pannes, "niveau_urgence"),
            par_statut: count_by(pannes, "statut"),
            ouvertes: pannes.len() - count_where(pannes, "statut", "RESOLUE"),
            cout_total: sum_decimal(pannes, "cout_reparation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    fn essieu(situation: Option<&str>, serie: i64, marque: &str, d_roue: f64) -> Record {
        Record::new("essieux")
            .set("situation", situation)
            .set("serie", serie)
            .set("marque", marque)
            .set("d_roue", d_roue)
            .set("age_calage_annee", 10i64)
    }

    fn travailleur(id: &str, statut: &str, note: f64, interventions: i64, assignes: i64) -> Record {
        Record::new("travailleurs")
            .set("id", id)
            .set("prenom", "Jean")
            .set("nom", id)
            .set("statut", statut)
            .set("specialite", if note > 4.0 { "Mécanique" } else { "Soudure" })
            .set("niveau", "Senior")
            .set("note_moyenne", note)
            .set("interventions_realisees", interventions)
            .set("essieux_assignes", assignes)
    }

    #[test]
    fn test_count_by_groups_nulls() {
        let records = vec![
            essieu(Some("DEMANDE"), 9101, "SKF", 920.0),
            essieu(None, 9101, "SKF", 920.0),
            essieu(None, 9102, "FAG", 920.0),
        ];
        let counts = count_by(&records, "situation");
        assert_eq!(counts.get("DEMANDE"), Some(&1));
        assert_eq!(counts.get(NON_DEFINI), Some(&2));
    }

    #[test]
    fn test_average_of_empty_is_zero() {
        assert_eq!(average(&[], "d_roue"), 0.0);
    }

    #[test]
    fn test_max_by_keeps_first_of_equal_values() {
        let records = vec![
            travailleur("a", "ACTIF", 4.5, 10, 0),
            travailleur("b", "ACTIF", 4.8, 10, 0),
            travailleur("c", "ACTIF", 4.8, 10, 0),
        ];
        assert_eq!(max_by(&records, "note_moyenne").and_then(|r| r.id()), Some("b".into()));
        assert_eq!(
            max_by(&records, "interventions_realisees").and_then(|r| r.id()),
            Some("a".into())
        );
        assert!(max_by(&records, "absent").is_none());
    }

    #[test]
    fn test_fleet_summary() {
        let records = vec![
            essieu(Some("EN EXPLOITATION"), 9101, "SKF", 900.0),
            essieu(Some("DEMANDE"), 9101, "SKF", 920.0),
            essieu(None, 9102, "FAG", 940.0),
            essieu(Some("EN EXPLOITATION"), 9103, "SKF", 920.0),
        ];
        let fleet = FleetSummary::from_records(&records);

        assert_eq!(fleet.total, 4);
        assert_eq!(fleet.en_exploitation, 2);
        assert_eq!(fleet.demande, 1);
        assert_eq!(fleet.sans_situation, 1);
        assert_eq!(fleet.par_serie.get("9101"), Some(&2));
        assert_eq!(fleet.par_marque.get("SKF"), Some(&3));
        assert_eq!(fleet.diametre_roue_moyen, 920.0);
        assert_eq!(fleet.taux_exploitation(), Some(50.0));
    }

    #[test]
    fn test_team_summary() {
        let records = vec![
            travailleur("a", "ACTIF", 4.5, 12, 3),
            travailleur("b", "CONGE", 3.5, 30, 2),
            travailleur("c", "INACTIF", 4.0, 0, 0),
        ];
        let team = TeamSummary::from_records(&records);

        assert_eq!((team.actifs, team.en_conge, team.inactifs), (1, 1, 1));
        assert_eq!(team.total_interventions, 42.0);
        assert_eq!(team.note_moyenne, 4.0);
        assert_eq!(team.efficacite(), Some(14.0));
        assert_eq!(team.diversite_specialites(), 2);
        assert_eq!(team.meilleur_technicien.as_ref().map(|h| h.name.as_str()), Some("Jean a"));
        assert_eq!(team.plus_productif.as_ref().map(|h| h.value), Some(30.0));

        let fleet = FleetSummary::from_records(&[
            essieu(None, 1, "SKF", 900.0),
            essieu(None, 1, "SKF", 900.0),
            essieu(None, 1, "SKF", 900.0),
            essieu(None, 1, "SKF", 900.0),
            essieu(None, 1, "SKF", 900.0),
            essieu(None, 1, "SKF", 900.0),
            essieu(None, 1, "SKF", 900.0),
            essieu(None, 1, "SKF", 900.0),
            essieu(None, 1, "SKF", 900.0),
            essieu(None, 1, "SKF", 900.0),
        ]);
        assert_eq!(occupation_rate(&fleet, &team), Some(50.0));
    }

    #[test]
    fn test_empty_team_has_no_efficiency() {
        let team = TeamSummary::from_records(&[]);
        assert_eq!(team.efficacite(), None);
        assert!(team.meilleur_technicien.is_none());
        let fleet = FleetSummary::from_records(&[]);
        assert_eq!(occupation_rate(&fleet, &team), None);
    }

    #[test]
    fn test_stock_summary() {
        let items = vec![
            Record::new("stock_items")
                .set("quantite", 0i64)
                .set("seuil_minimum", 5i64)
                .set("prix_unitaire", Decimal::new(1250, 2)),
            Record::new("stock_items")
                .set("quantite", 4i64)
                .set("seuil_minimum", 5i64)
                .set("prix_unitaire", Decimal::new(1000, 2)),
            Record::new("stock_items")
                .set("quantite", 10i64)
                .set("seuil_minimum", 5i64)
                .set("prix_unitaire", Value::Null),
        ];
        let stock = StockSummary::from_records(&items);

        assert_eq!(stock.total, 3);
        assert_eq!(stock.stock_faible, 2);
        assert_eq!(stock.rupture, 1);
        assert_eq!(stock.valeur_totale, Decimal::new(4000, 2));
    }

    #[test]
    fn test_panne_summary() {
        let pannes = vec![
            Record::new("pannes")
                .set("niveau_urgence", "CRITIQUE")
                .set("statut", "EN_COURS")
                .set("cout_reparation", 150.5),
            Record::new("pannes")
                .set("niveau_urgence", "FAIBLE")
                .set("statut", "RESOLUE")
                .set("cout_reparation", 49.5),
            Record::new("pannes")
                .set("niveau_urgence", "CRITIQUE")
                .set("statut", "EN_ATTENTE"),
        ];
        let summary = PanneSummary::from_records(&pannes);

        assert_eq!(summary.par_urgence.get("CRITIQUE"), Some(&2));
        assert_eq!(summary.ouvertes, 2);
        assert_eq!(summary.cout_total, Decimal::new(200, 0));
    }
}
