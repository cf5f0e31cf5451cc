//! Technician entity

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::timestamp_value;
use crate::model::Record;

/// Employment status of a technician.
///
/// Older rows use lower-case values (`actif`, `en_conge`), accepted as
/// aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatutTravailleur {
    #[serde(rename = "ACTIF", alias = "actif")]
    Actif,
    #[serde(rename = "INACTIF", alias = "inactif")]
    Inactif,
    #[serde(rename = "CONGE", alias = "en_conge")]
    Conge,
}

impl StatutTravailleur {
    /// Returns the value stored in the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Actif => "ACTIF",
            Self::Inactif => "INACTIF",
            Self::Conge => "CONGE",
        }
    }
}

impl fmt::Display for StatutTravailleur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A maintenance technician ("travailleur").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Travailleur {
    pub id: String,
    pub matricule: String,
    pub nom: String,
    pub prenom: String,
    pub specialite: String,
    pub niveau: String,
    pub statut: StatutTravailleur,
    pub date_embauche: String,
    pub telephone: String,
    pub email: String,
    pub essieux_assignes: i64,
    pub interventions_realisees: i64,
    pub note_moyenne: f64,
    pub derniere_intervention: String,
    #[serde(default)]
    pub competences: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Travailleur {
    /// Returns "Prénom Nom".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.prenom, self.nom)
    }
}

impl From<&Travailleur> for Record {
    fn from(t: &Travailleur) -> Self {
        Record::new("travailleurs")
            .set("id", t.id.as_str())
            .set("matricule", t.matricule.as_str())
            .set("nom", t.nom.as_str())
            .set("prenom", t.prenom.as_str())
            .set("specialite", t.specialite.as_str())
            .set("niveau", t.niveau.as_str())
            .set("statut", t.statut.as_str())
            .set("date_embauche", t.date_embauche.as_str())
            .set("telephone", t.telephone.as_str())
            .set("email", t.email.as_str())
            .set("essieux_assignes", t.essieux_assignes)
            .set("interventions_realisees", t.interventions_realisees)
            .set("note_moyenne", t.note_moyenne)
            .set("derniere_intervention", t.derniere_intervention.as_str())
            .set("competences", t.competences.clone())
            .set("created_at", timestamp_value(&t.created_at))
            .set("updated_at", timestamp_value(&t.updated_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statut_aliases() {
        let statut: StatutTravailleur = serde_json::from_str(r#""en_conge""#).unwrap();
        assert_eq!(statut, StatutTravailleur::Conge);
        assert_eq!(serde_json::to_string(&statut).unwrap(), r#""CONGE""#);
    }

    #[test]
    fn test_into_record_keeps_competences_list() {
        let json = r#"{
            "id": "t1", "matricule": "M-001", "nom": "Benali", "prenom": "Karim",
            "specialite": "Mécanique", "niveau": "senior", "statut": "ACTIF",
            "date_embauche": "2019-03-01", "telephone": "0555 00 00 00",
            "email": "k.benali@example.com", "essieux_assignes": 12,
            "interventions_realisees": 48, "note_moyenne": 4.6,
            "derniere_intervention": "2024-05-02",
            "competences": ["Mécanique", "Soudure"]
        }"#;
        let travailleur: Travailleur = serde_json::from_str(json).unwrap();
        assert_eq!(travailleur.full_name(), "Karim Benali");

        let record = Record::from(&travailleur);
        assert_eq!(record.get_list("competences").unwrap().map(|c| c.len()), Some(2));
        assert_eq!(record.get_string("statut").unwrap(), Some("ACTIF"));
    }
}
