//! Spare-parts stock entity

use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

use crate::model::Record;

/// Availability status of a stock item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatutStock {
    EnStock,
    Rupture,
    CommandeEnCours,
}

impl StatutStock {
    /// Returns the value stored in the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnStock => "EN_STOCK",
            Self::Rupture => "RUPTURE",
            Self::CommandeEnCours => "COMMANDE_EN_COURS",
        }
    }
}

impl fmt::Display for StatutStock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A spare part held in stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: String,
    pub nom: String,
    pub reference: String,
    pub quantite: i64,
    pub seuil_minimum: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub prix_unitaire: Decimal,
    pub fournisseur: String,
    pub emplacement: String,
    pub date_derniere_commande: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_expiration: Option<String>,
    pub statut: StatutStock,
}

impl StockItem {
    /// Returns `true` when the quantity is at or below the minimum threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantite <= self.seuil_minimum
    }

    /// Returns the value of the items held (quantity × unit price).
    pub fn stock_value(&self) -> Decimal {
        Decimal::from(self.quantite) * self.prix_unitaire
    }
}

impl From<&StockItem> for Record {
    fn from(s: &StockItem) -> Self {
        Record::new("stock_items")
            .set("id", s.id.as_str())
            .set("nom", s.nom.as_str())
            .set("reference", s.reference.as_str())
            .set("quantite", s.quantite)
            .set("seuil_minimum", s.seuil_minimum)
            .set("prix_unitaire", s.prix_unitaire)
            .set("fournisseur", s.fournisseur.as_str())
            .set("emplacement", s.emplacement.as_str())
            .set("date_derniere_commande", s.date_derniere_commande.as_str())
            .set("date_expiration", s.date_expiration.clone())
            .set("statut", s.statut.as_str())
    }
}
