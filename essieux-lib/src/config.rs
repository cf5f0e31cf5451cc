//! List-view configuration

use serde::Deserialize;
use serde::Serialize;

/// Number of rows shown per page in every list view.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// What happens to the current page when search, filters or sort change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagePolicy {
    /// Keep the current page number. The view may then show an empty page
    /// until the user navigates back.
    #[default]
    Preserve,
    /// Go back to page 1.
    ResetOnChange,
}

/// Configuration for a list view.
///
/// # Example
///
/// ```
/// use essieux_lib::config::PagePolicy;
/// use essieux_lib::config::TableConfig;
///
/// let config = TableConfig::default()
///     .with_page_size(50)
///     .with_page_policy(PagePolicy::ResetOnChange);
///
/// assert_eq!(config.page_size, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page.
    ///
    /// Default: 20
    pub page_size: usize,

    /// Page behavior on search/filter/sort changes.
    ///
    /// Default: [`PagePolicy::Preserve`]
    pub page_policy: PagePolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_policy: PagePolicy::Preserve,
        }
    }
}

impl TableConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size. A size of zero is replaced by the default.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        self
    }

    /// Sets the page policy.
    pub fn with_page_policy(mut self, page_policy: PagePolicy) -> Self {
        self.page_policy = page_policy;
        self
    }

    /// Returns the page size, falling back to the default when zero.
    pub fn effective_page_size(&self) -> usize {
        if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }
}
