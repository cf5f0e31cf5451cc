//! Page type for paginated list views.

use crate::model::Record;

/// Number of pages needed for `count` rows, never less than one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Returns the rows of a 1-based page.
///
/// Out-of-range pages yield an empty slice; page 0 is read as page 1.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// One page of a derived list view, with pagination information.
///
/// # Example
///
/// ```
/// use essieux_lib::model::Record;
/// use essieux_lib::table::Page;
///
/// let records: Vec<Record> = (0..45)
///     .map(|i| Record::new("essieux").set("id", i as i64))
///     .collect();
/// let rows: Vec<&Record> = records.iter().collect();
///
/// let page = Page::paginate(&rows, 3, 20);
/// assert_eq!(page.total_pages(), 3);
/// assert_eq!(page.len(), 5);
/// assert_eq!(page.range(), Some((41, 45)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    records: Vec<&'a Record>,
    page: usize,
    page_size: usize,
    total_count: usize,
}

impl<'a> Page<'a> {
    /// Slices page `page` (1-based) out of the ordered rows.
    pub fn paginate(rows: &[&'a Record], page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            records: page_slice(rows, page, page_size).to_vec(),
            page: page.max(1),
            page_size,
            total_count: rows.len(),
        }
    }

    /// Returns the records in this page.
    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    /// Consumes the page and returns the records.
    pub fn into_records(self) -> Vec<&'a Record> {
        self.records
    }

    /// Returns the current page number (1-based).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of rows across all pages.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns the number of pages, at least one.
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count, self.page_size)
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Returns `true` if a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Returns `true` if the page number is past the last page.
    pub fn is_out_of_range(&self) -> bool {
        self.page > self.total_pages()
    }

    /// Returns the 1-based positions of the first and last rows shown.
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.records.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        Some((first, first + self.records.len() - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::new("essieux").set("id", i as i64))
            .collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 20), 1);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(45, 20), 3);
    }

    #[test]
    fn test_page_slices() {
        let items: Vec<usize> = (0..45).collect();
        assert_eq!(page_slice(&items, 1, 20), &items[0..20]);
        assert_eq!(page_slice(&items, 2, 20), &items[20..40]);
        assert_eq!(page_slice(&items, 3, 20), &items[40..45]);
        assert!(page_slice(&items, 4, 20).is_empty());
        assert!(page_slice(&items, 10, 20).is_empty());
        assert_eq!(page_slice(&items, 0, 20), &items[0..20]);
    }

    #[test]
    fn test_empty_collection_is_one_empty_page() {
        let rows: Vec<&Record> = Vec::new();
        let page = Page::paginate(&rows, 1, 20);
        assert_eq!(page.total_pages(), 1);
        assert!(page.is_empty());
        assert_eq!(page.range(), None);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let records = records(45);
        let rows: Vec<&Record> = records.iter().collect();
        let page = Page::paginate(&rows, 10, 20);
        assert!(page.is_empty());
        assert!(page.is_out_of_range());
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.total_count(), 45);
    }

    #[test]
    fn test_range_and_navigation() {
        let records = records(45);
        let rows: Vec<&Record> = records.iter().collect();

        let page = Page::paginate(&rows, 2, 20);
        assert_eq!(page.range(), Some((21, 40)));
        assert!(page.has_previous());
        assert!(page.has_next());

        let last = Page::paginate(&rows, 3, 20);
        assert!(!last.has_next());
    }
}
