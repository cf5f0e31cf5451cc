//! Axle entity

use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::timestamp_value;
use crate::model::Record;
use crate::model::Value;

/// Operational situation of an axle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Situation {
    /// In service on a wagon.
    #[serde(rename = "EN EXPLOITATION")]
    EnExploitation,
    /// Requested, not yet in service.
    #[serde(rename = "DEMANDE")]
    Demande,
}

impl Situation {
    /// Returns the value stored in the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnExploitation => "EN EXPLOITATION",
            Self::Demande => "DEMANDE",
        }
    }
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A railway axle ("essieu") of the fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Essieu {
    pub id: String,
    pub serie: i64,
    pub post: i64,
    pub numero_ordre: String,
    pub date_rev: String,
    pub mise_sce_rmt: String,
    /// Wheel diameter in millimetres.
    pub d_roue: f64,
    pub wagon: String,
    pub bogie1: i64,
    pub bogie2: i64,
    /// `None` when the situation has not been recorded yet.
    pub situation: Option<Situation>,
    pub age_revision_jours: String,
    pub age_calage_annee: f64,
    pub marque: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Essieu> for Record {
    fn from(e: &Essieu) -> Self {
        Record::new("essieux")
            .set("id", e.id.as_str())
            .set("serie", e.serie)
            .set("post", e.post)
            .set("numero_ordre", e.numero_ordre.as_str())
            .set("date_rev", e.date_rev.as_str())
            .set("mise_sce_rmt", e.mise_sce_rmt.as_str())
            .set("d_roue", e.d_roue)
            .set("wagon", e.wagon.as_str())
            .set("bogie1", e.bogie1)
            .set("bogie2", e.bogie2)
            .set("situation", e.situation.map(|s| Value::from(s.as_str())))
            .set("age_revision_jours", e.age_revision_jours.as_str())
            .set("age_calage_annee", e.age_calage_annee)
            .set("marque", e.marque.as_str())
            .set("created_at", timestamp_value(&e.created_at))
            .set("updated_at", timestamp_value(&e.updated_at))
    }
}
