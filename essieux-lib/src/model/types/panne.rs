//! Fault record entity

use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::model::Record;

/// How urgently a fault must be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NiveauUrgence {
    Faible,
    Moyen,
    Eleve,
    Critique,
}

impl NiveauUrgence {
    /// Returns the value stored in the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Faible => "FAIBLE",
            Self::Moyen => "MOYEN",
            Self::Eleve => "ELEVE",
            Self::Critique => "CRITIQUE",
        }
    }
}

impl fmt::Display for NiveauUrgence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress of a fault's repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatutPanne {
    EnAttente,
    EnCours,
    Resolue,
}

impl StatutPanne {
    /// Returns the value stored in the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnAttente => "EN_ATTENTE",
            Self::EnCours => "EN_COURS",
            Self::Resolue => "RESOLUE",
        }
    }
}

impl fmt::Display for StatutPanne {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fault detected on an axle ("panne").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panne {
    pub id: String,
    pub essieu_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub date_detection: String,
    pub niveau_urgence: NiveauUrgence,
    pub statut: StatutPanne,
    #[serde(default)]
    pub technicien_id: Option<String>,
    #[serde(default)]
    pub date_intervention: Option<String>,
    /// Intervention duration in hours.
    #[serde(default)]
    pub duree_intervention: Option<f64>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub cout_reparation: Option<Decimal>,
    #[serde(default)]
    pub pieces_utilisees: Option<Vec<String>>,
    #[serde(default)]
    pub notes_intervention: Option<String>,
}

impl From<&Panne> for Record {
    fn from(p: &Panne) -> Self {
        Record::new("pannes")
            .set("id", p.id.as_str())
            .set("essieu_id", p.essieu_id.as_str())
            .set("type", p.kind.as_str())
            .set("description", p.description.as_str())
            .set("date_detection", p.date_detection.as_str())
            .set("niveau_urgence", p.niveau_urgence.as_str())
            .set("statut", p.statut.as_str())
            .set("technicien_id", p.technicien_id.clone())
            .set("date_intervention", p.date_intervention.clone())
            .set("duree_intervention", p.duree_intervention)
            .set("cout_reparation", p.cout_reparation)
            .set("pieces_utilisees", p.pieces_utilisees.clone())
            .set("notes_intervention", p.notes_intervention.clone())
    }
}
