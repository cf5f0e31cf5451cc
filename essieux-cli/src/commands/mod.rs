//! Subcommand implementations.

pub mod export;
pub mod list;
pub mod stats;
pub mod validate;

use std::path::Path;

use essieux_lib::TableConfig;
use essieux_lib::error::Error;
use essieux_lib::model::EntityKind;
use essieux_lib::model::Record;
use essieux_lib::table::TableView;
use essieux_lib::table::ViewEvent;

use crate::args::ViewArgs;
use crate::error::CliError;
use crate::paths;

/// Loads the table settings.
///
/// An explicit path must exist; the default `config.json` is optional.
/// `page_size` overrides whatever the file says.
pub fn load_config(path: Option<&Path>, page_size: Option<usize>) -> Result<TableConfig, CliError> {
    let file = match path {
        Some(path) => Some(path.to_path_buf()),
        None => paths::config_file().filter(|p| p.exists()),
    };

    let mut config = match file {
        Some(file) => {
            let text = std::fs::read_to_string(&file)?;
            let config: TableConfig =
                serde_json::from_str(&text).map_err(|source| CliError::Config {
                    path: file.clone(),
                    source,
                })?;
            log::info!("Loaded table settings from {}", file.display());
            config
        }
        None => TableConfig::default(),
    };

    if let Some(size) = page_size {
        config = config.with_page_size(size);
    }
    Ok(config)
}

/// Reads a JSON array of records for one table.
pub fn load_records(kind: EntityKind, path: &Path) -> Result<Vec<Record>, CliError> {
    let data_error = |source: Error| CliError::Data {
        path: path.to_path_buf(),
        source,
    };

    let text = std::fs::read_to_string(path).map_err(|e| data_error(e.into()))?;
    let mut records: Vec<Record> =
        serde_json::from_str(&text).map_err(|e| data_error(e.into()))?;
    for record in &mut records {
        record.set_entity_name(kind.table_name());
    }

    log::info!("Loaded {} {} from {}", records.len(), kind, path.display());
    Ok(records)
}

/// Builds the list view and replays the requested state on it.
pub fn build_view<'a>(
    args: &ViewArgs,
    records: &'a [Record],
    config: TableConfig,
) -> Result<TableView<'a>, CliError> {
    let mut view = TableView::for_entity(args.entity, records).with_config(config);

    if let Some(term) = &args.search {
        view.dispatch(ViewEvent::Search(term.clone()))?;
    }
    for (name, value) in &args.filters {
        view.dispatch(ViewEvent::Filter {
            name: name.clone(),
            value: value.clone(),
        })?;
    }
    for field in &args.sort {
        view.dispatch(ViewEvent::SortBy(field.clone()))?;
    }
    view.dispatch(ViewEvent::GoToPage(args.page))?;

    Ok(view)
}
