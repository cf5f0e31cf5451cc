//! `essieux stats`

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use essieux_lib::model::EntityKind;
use essieux_lib::stats::FleetSummary;
use essieux_lib::stats::PanneSummary;
use essieux_lib::stats::StockSummary;
use essieux_lib::stats::TeamSummary;
use essieux_lib::stats::occupation_rate;

use crate::commands::load_records;
use crate::error::CliError;

pub struct StatsInput<'a> {
    pub essieux: &'a Path,
    pub travailleurs: &'a Path,
    pub stock: Option<&'a Path>,
    pub pannes: Option<&'a Path>,
}

pub fn run(input: &StatsInput<'_>, out: &mut dyn Write) -> Result<(), CliError> {
    let fleet = FleetSummary::from_records(&load_records(EntityKind::Essieux, input.essieux)?);
    let team = TeamSummary::from_records(&load_records(EntityKind::Travailleurs, input.travailleurs)?);

    writeln!(out, "Essieux: {}", fleet.total)?;
    writeln!(out, "  En exploitation: {}", fleet.en_exploitation)?;
    writeln!(out, "  Demandé: {}", fleet.demande)?;
    writeln!(out, "  Sans situation: {}", fleet.sans_situation)?;
    writeln!(out, "  Âge moyen de calage: {:.1} ans", fleet.age_calage_moyen)?;
    writeln!(out, "  Diamètre moyen de roue: {:.1} mm", fleet.diametre_roue_moyen)?;
    write_counts(out, "Par série", &fleet.par_serie)?;
    write_counts(out, "Par marque", &fleet.par_marque)?;

    writeln!(out, "Techniciens: {}", team.total)?;
    writeln!(out, "  Actifs: {}", team.actifs)?;
    writeln!(out, "  En congé: {}", team.en_conge)?;
    writeln!(out, "  Inactifs: {}", team.inactifs)?;
    writeln!(out, "  Interventions: {}", team.total_interventions)?;
    writeln!(out, "  Note moyenne: {:.1}", team.note_moyenne)?;
    if let Some(best) = &team.meilleur_technicien {
        writeln!(out, "  Meilleur technicien: {} ({:.1})", best.name, best.value)?;
    }
    if let Some(top) = &team.plus_productif {
        writeln!(out, "  Plus productif: {} ({} interventions)", top.name, top.value)?;
    }
    writeln!(out, "  Spécialités: {}", team.diversite_specialites())?;
    write_counts(out, "Par niveau", &team.par_niveau)?;
    write_counts(out, "Par spécialité", &team.par_specialite)?;

    writeln!(out, "Performance")?;
    writeln!(out, "  Taux d'occupation: {}", percent(occupation_rate(&fleet, &team)))?;
    writeln!(out, "  Taux d'exploitation: {}", percent(fleet.taux_exploitation()))?;
    match team.efficacite() {
        Some(value) => writeln!(out, "  Efficacité équipe: {:.1} interventions/technicien", value)?,
        None => writeln!(out, "  Efficacité équipe: -")?,
    }

    if let Some(path) = input.stock {
        let stock = StockSummary::from_records(&load_records(EntityKind::Stock, path)?);
        writeln!(out, "Stock: {} articles", stock.total)?;
        writeln!(out, "  Stock faible: {}", stock.stock_faible)?;
        writeln!(out, "  En rupture: {}", stock.rupture)?;
        writeln!(out, "  Valeur totale: {:.2}", stock.valeur_totale)?;
    }

    if let Some(path) = input.pannes {
        let pannes = PanneSummary::from_records(&load_records(EntityKind::Pannes, path)?);
        writeln!(out, "Pannes: {}", pannes.total)?;
        writeln!(out, "  Ouvertes: {}", pannes.ouvertes)?;
        writeln!(out, "  Coût total: {:.2}", pannes.cout_total)?;
        write_counts(out, "Par urgence", &pannes.par_urgence)?;
        write_counts(out, "Par statut", &pannes.par_statut)?;
    }

    Ok(())
}

fn write_counts(
    out: &mut dyn Write,
    title: &str,
    counts: &BTreeMap<String, usize>,
) -> Result<(), CliError> {
    writeln!(out, "  {}:", title)?;
    for (key, count) in counts {
        writeln!(out, "    {}: {}", key, count)?;
    }
    Ok(())
}

fn percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v),
        None => "-".to_string(),
    }
}
