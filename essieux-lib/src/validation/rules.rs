//! Form rules of each entity.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::EntityKind;
use crate::model::Record;
use crate::model::types::Essieu;
use crate::model::types::Panne;
use crate::model::types::StockItem;
use crate::model::types::Travailleur;
use crate::validation::ValidationResult;
use crate::validation::Validator;

/// Loose email shape accepted by the technician form.
pub const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Types that can be checked against their form rules before saving.
pub trait Validate {
    fn validate(&self) -> ValidationResult;
}

impl EntityKind {
    /// Checks a record against the form rules of this entity.
    ///
    /// Absent fields are treated as empty.
    pub fn validate(&self, record: &Record) -> ValidationResult {
        let v = |field: &str| record.value(field).clone();
        match self {
            Self::Essieux => Validator::new()
                .field("numero_ordre", v("numero_ordre"))
                .required("Le numéro d'ordre est requis")
                .field("date_rev", v("date_rev"))
                .required("La date de révision est requise")
                .field("wagon", v("wagon"))
                .required("Le wagon est requis")
                .field("d_roue", v("d_roue"))
                .greater_than(0.0, "Le diamètre de roue doit être positif")
                .validate(),
            Self::Travailleurs => Validator::new()
                .field("matricule", v("matricule"))
                .required("Le matricule est requis")
                .field("nom", v("nom"))
                .required("Le nom est requis")
                .field("prenom", v("prenom"))
                .required("Le prénom est requis")
                .field("email", v("email"))
                .required("L'email est requis")
                .regex(&EMAIL_REGEX, "L'email n'est pas valide")
                .field("telephone", v("telephone"))
                .required("Le téléphone est requis")
                .field("date_embauche", v("date_embauche"))
                .required("La date d'embauche est requise")
                .validate(),
            Self::Stock => Validator::new()
                .field("nom", v("nom"))
                .required("Le nom de l'article est requis")
                .field("quantite", v("quantite"))
                .at_least(0.0, "La quantité ne peut pas être négative")
                .field("seuil_minimum", v("seuil_minimum"))
                .at_least(0.0, "Le seuil minimum ne peut pas être négatif")
                .field("date_derniere_commande", v("date_derniere_commande"))
                .required("La date de dernière commande est requise")
                .validate(),
            Self::Pannes => Validator::new()
                .field("date_detection", v("date_detection"))
                .required("La date de détection est requise")
                .field("essieu_id", v("essieu_id"))
                .required("L'essieu est requis")
                .field("description", v("description"))
                .required("La description est requise")
                .field("technicien_id", v("technicien_id"))
                .required("Le technicien est requis")
                .validate(),
        }
    }
}

impl Validate for Essieu {
    fn validate(&self) -> ValidationResult {
        EntityKind::Essieux.validate(&Record::from(self))
    }
}

impl Validate for Travailleur {
    fn validate(&self) -> ValidationResult {
        EntityKind::Travailleurs.validate(&Record::from(self))
    }
}

impl Validate for StockItem {
    fn validate(&self) -> ValidationResult {
        EntityKind::Stock.validate(&Record::from(self))
    }
}

impl Validate for Panne {
    fn validate(&self) -> ValidationResult {
        EntityKind::Pannes.validate(&Record::from(self))
    }
}
