//! Table view: record store, columns, filters and state in one place.

use crate::config::TableConfig;
use crate::error::Error;
use crate::model::EntityKind;
use crate::model::Record;
use crate::table::Column;
use crate::table::CsvExport;
use crate::table::Filter;
use crate::table::FilterDef;
use crate::table::Page;
use crate::table::ViewEvent;
use crate::table::ViewState;
use crate::table::page::total_pages;

/// A searchable, filterable, sortable and paginated view over records.
///
/// The view borrows the record store and recomputes the derived rows on
/// demand; nothing derived is cached.
///
/// # Example
///
/// ```
/// use essieux_lib::model::EntityKind;
/// use essieux_lib::model::Record;
/// use essieux_lib::table::TableView;
/// use essieux_lib::table::ViewEvent;
///
/// let records = vec![
///     Record::new("essieux").set("id", "1").set("situation", "EN EXPLOITATION"),
///     Record::new("essieux").set("id", "2").set("situation", None::<String>),
/// ];
///
/// let mut view = TableView::for_entity(EntityKind::Essieux, &records);
/// view.dispatch(ViewEvent::Filter {
///     name: "situation".into(),
///     value: "null".into(),
/// })
/// .unwrap();
///
/// let page = view.derive();
/// assert_eq!(page.total_count(), 1);
/// assert_eq!(page.records()[0].id().as_deref(), Some("2"));
/// ```
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    records: &'a [Record],
    columns: Vec<Column>,
    filter_defs: Vec<FilterDef>,
    export_name: String,
    config: TableConfig,
    state: ViewState,
}

impl<'a> TableView<'a> {
    /// Creates a view with the given columns and no named filters.
    pub fn new(records: &'a [Record], columns: Vec<Column>) -> Self {
        Self {
            records,
            columns,
            filter_defs: Vec::new(),
            export_name: "export.csv".to_string(),
            config: TableConfig::default(),
            state: ViewState::default(),
        }
    }

    /// Creates a view with the columns and filters of an entity's list page.
    pub fn for_entity(kind: EntityKind, records: &'a [Record]) -> Self {
        Self::new(records, kind.columns())
            .with_filters(kind.filters())
            .with_export_name(kind.csv_filename())
    }

    /// Declares the named filter controls.
    pub fn with_filters(mut self, filter_defs: Vec<FilterDef>) -> Self {
        self.filter_defs = filter_defs;
        self
    }

    /// Sets the export file name.
    pub fn with_export_name(mut self, name: impl Into<String>) -> Self {
        self.export_name = name.into();
        self
    }

    /// Sets page size and page policy.
    pub fn with_config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn filter_defs(&self) -> &[FilterDef] {
        &self.filter_defs
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns the size of the record store.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Applies a user action.
    ///
    /// Rejects filters that were not declared and sort keys that are not
    /// columns; the state is left untouched in that case.
    pub fn dispatch(&mut self, event: ViewEvent) -> Result<(), Error> {
        match &event {
            ViewEvent::Filter { name, .. } if self.filter_def(name).is_none() => {
                return Err(Error::UnknownFilter(name.clone()));
            }
            ViewEvent::SortBy(field) if !self.columns.iter().any(|c| c.key() == field) => {
                return Err(Error::UnknownColumn(field.clone()));
            }
            _ => {}
        }

        log::debug!("Table view event: {:?}", event);

        let pages = self.total_pages();
        self.state.apply(event, self.config.page_policy, pages);
        Ok(())
    }

    fn filter_def(&self, name: &str) -> Option<&FilterDef> {
        self.filter_defs.iter().find(|def| def.name() == name)
    }

    // =========================================================================
    // Derived view
    // =========================================================================

    /// Builds the predicate for the current search and filter selections.
    pub fn predicate(&self) -> Filter {
        let mut filter = Filter::search(&self.state.search);
        for def in &self.filter_defs {
            let selected = self
                .state
                .filter(def.name())
                .unwrap_or(def.default_selection());
            filter = filter.and_also(def.to_filter(selected));
        }
        filter
    }

    /// Returns the matching records in store order.
    pub fn filtered(&self) -> Vec<&'a Record> {
        self.predicate().apply(self.records)
    }

    /// Returns the matching records in display order.
    pub fn sorted(&self) -> Vec<&'a Record> {
        let rows = self.filtered();
        match &self.state.order {
            Some(order) => order.apply(rows),
            None => rows,
        }
    }

    /// Returns the number of pages of the current derived view.
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.config.effective_page_size())
    }

    /// Computes the current page.
    pub fn derive(&self) -> Page<'a> {
        let rows = self.sorted();
        let page = Page::paginate(&rows, self.state.page, self.config.effective_page_size());
        log::debug!(
            "Derived page {}/{} ({} of {} records)",
            page.page(),
            page.total_pages(),
            page.total_count(),
            self.records.len()
        );
        page
    }

    /// Exports every matching record in display order, ignoring pagination.
    pub fn export(&self) -> CsvExport {
        let rows = self.sorted();
        CsvExport::named(self.export_name.clone(), &self.columns, &rows)
    }
}
