//! Columns and filter controls of each list page.

use chrono::DateTime;
use chrono::NaiveDate;

use crate::model::EntityKind;
use crate::model::Record;
use crate::model::Value;
use crate::table::Column;
use crate::table::FilterDef;

/// Label shown for an axle with no situation.
pub const NON_DEFINI: &str = "Non défini";

impl EntityKind {
    /// Returns the columns of the entity's list page, in display order.
    pub fn columns(&self) -> Vec<Column> {
        match self {
            Self::Essieux => vec![
                Column::new("serie", "Série"),
                Column::new("post", "Position"),
                Column::new("numero_ordre", "N° D'ordre"),
                Column::new("date_rev", "Date Révision"),
                Column::new("mise_sce_rmt", "Mise en Service"),
                Column::new("d_roue", "Diamètre Roue").with_renderer(render_diametre),
                Column::new("wagon", "Wagon"),
                Column::new("bogie1", "Bogie 1"),
                Column::new("bogie2", "Bogie 2"),
                Column::new("situation", "Situation").with_renderer(render_situation),
                Column::new("age_revision_jours", "Âge Révision"),
                Column::new("age_calage_annee", "Âge Calage (ans)").with_renderer(render_age_calage),
                Column::new("marque", "Marque"),
            ],
            Self::Travailleurs => vec![
                Column::new("matricule", "Matricule"),
                Column::new("nom", "Nom"),
                Column::new("prenom", "Prénom"),
                Column::new("specialite", "Spécialité"),
                Column::new("niveau", "Niveau"),
                Column::new("statut", "Statut"),
                Column::new("date_embauche", "Date Embauche"),
                Column::new("telephone", "Téléphone"),
                Column::new("email", "Email"),
                Column::new("essieux_assignes", "Essieux Assignés"),
                Column::new("interventions_realisees", "Interventions"),
                Column::new("note_moyenne", "Note Moyenne"),
                Column::new("derniere_intervention", "Dernière Intervention"),
                Column::new("competences", "Compétences").with_renderer(render_competences),
            ],
            Self::Stock => vec![
                Column::new("nom", "Nom de la pièce"),
                Column::new("reference", "Référence"),
                Column::new("quantite", "Quantité"),
                Column::new("seuil_minimum", "Seuil minimum"),
                Column::new("date_derniere_commande", "Dernière commande")
                    .with_renderer(|r| render_date(r.value("date_derniere_commande"))),
                Column::new("statut", "Statut").with_renderer(render_stock_alert),
            ],
            Self::Pannes => vec![
                Column::new("date_detection", "Date")
                    .with_renderer(|r| render_date(r.value("date_detection"))),
                Column::new("essieu_id", "Essieu"),
                Column::new("type", "Type"),
                Column::new("description", "Description"),
                Column::new("niveau_urgence", "Urgence"),
                Column::new("statut", "Statut"),
                Column::new("technicien_id", "Technicien"),
            ],
        }
    }

    /// Returns the filter controls of the entity's list page.
    pub fn filters(&self) -> Vec<FilterDef> {
        match self {
            Self::Essieux => vec![
                FilterDef::exact("situation", "situation"),
                FilterDef::contains("wagon", "wagon"),
            ],
            Self::Travailleurs => vec![
                FilterDef::exact("statut", "statut"),
                FilterDef::exact("specialite", "specialite"),
                FilterDef::exact("niveau", "niveau"),
            ],
            Self::Stock => vec![FilterDef::exact("statut", "statut")],
            Self::Pannes => vec![
                FilterDef::exact("statut", "statut"),
                FilterDef::exact("niveau_urgence", "niveau_urgence"),
            ],
        }
    }
}

// =============================================================================
// Renderers
// =============================================================================

fn render_diametre(record: &Record) -> String {
    format!("{}mm", record.value("d_roue"))
}

fn render_age_calage(record: &Record) -> String {
    format!("{} ans", record.value("age_calage_annee"))
}

fn render_situation(record: &Record) -> String {
    match record.value("situation") {
        Value::Null => NON_DEFINI.to_string(),
        Value::String(s) if s.is_empty() => NON_DEFINI.to_string(),
        other => other.to_string(),
    }
}

/// First two skills, then a `+N` counter for the rest.
fn render_competences(record: &Record) -> String {
    let Some(skills) = record.get_list("competences").ok().flatten() else {
        return record.value("competences").to_string();
    };
    let mut shown = skills.iter().take(2).cloned().collect::<Vec<_>>().join(", ");
    if skills.len() > 2 {
        shown.push_str(&format!(" +{}", skills.len() - 2));
    }
    shown
}

fn render_stock_alert(record: &Record) -> String {
    let quantite = record.value("quantite").as_f64();
    let seuil = record.value("seuil_minimum").as_f64();
    match (quantite, seuil) {
        (Some(q), Some(s)) if q <= s => "Stock faible".to_string(),
        _ => "Stock normal".to_string(),
    }
}

/// Formats an ISO date as `dd/mm/yyyy`; other text is shown unchanged.
fn render_date(value: &Value) -> String {
    let Some(text) = value.as_str() else {
        return value.to_string();
    };
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.format("%d/%m/%Y").to_string();
    }
    match DateTime::parse_from_rfc3339(text) {
        Ok(timestamp) => timestamp.format("%d/%m/%Y").to_string(),
        Err(_) => text.to_string(),
    }
}
