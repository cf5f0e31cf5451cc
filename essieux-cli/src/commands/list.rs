//! `essieux list`

use std::io::Write;

use essieux_lib::TableConfig;
use essieux_lib::model::Record;
use essieux_lib::table::Column;
use essieux_lib::table::Page;

use crate::args::ViewArgs;
use crate::commands::build_view;
use crate::commands::load_records;
use crate::error::CliError;

pub fn run(args: &ViewArgs, config: TableConfig, out: &mut dyn Write) -> Result<(), CliError> {
    let records = load_records(args.entity, &args.data)?;
    let view = build_view(args, &records, config)?;
    let page = view.derive();

    out.write_all(render_table(view.columns(), page.records()).as_bytes())?;
    writeln!(out, "{}", summary(&page))?;
    Ok(())
}

/// Renders rows as left-aligned text columns under their labels.
pub fn render_table(columns: &[Column], rows: &[&Record]) -> String {
    let header: Vec<String> = columns.iter().map(|c| c.label().to_string()).collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| columns.iter().map(|c| c.display(r)).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut text = String::new();
    push_line(&mut text, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut text, &rule, &widths);
    for row in &cells {
        push_line(&mut text, row, &widths);
    }
    text
}

fn push_line(text: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    text.push_str(line.trim_end());
    text.push('\n');
}

/// Pagination footer of a list page.
pub fn summary(page: &Page<'_>) -> String {
    match page.range() {
        Some((first, last)) => format!(
            "Affichage de {} à {} sur {} résultats (page {}/{})",
            first,
            last,
            page.total_count(),
            page.page(),
            page.total_pages()
        ),
        None => format!(
            "Aucun résultat (page {}/{}, {} au total)",
            page.page(),
            page.total_pages(),
            page.total_count()
        ),
    }
}
