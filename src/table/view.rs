//! Generic table renderer.
//!
//! [`DataTable`] turns rows, columns and optional pagination/selection state
//! into a [`RenderedTable`]: a header, exactly one body shape (placeholders,
//! the empty indicator, or data rows) and an optional pagination footer.
//! The terminal UI draws that model; tests inspect it directly.
//!
//! Pagination is external. When a paginator is supplied the renderer still
//! draws every row it is given, so callers pass the current page only.

use super::column::{Cell, ColumnDescriptor, Header};
use super::pagination::{PaginationState, Paginator, PAGE_SIZE_OPTIONS};
use super::selection::SelectionMap;

/// Placeholder rows drawn while loading.
pub const DEFAULT_LOADERS: usize = 4;

/// Text of the empty-state row.
pub const NO_RESULTS: &str = "No results found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub id: &'static str,
    pub label: Option<&'static str>,
    pub size: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    pub id: String,
    pub cells: Vec<Cell>,
    pub selected: bool,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    /// `rows` skeleton rows of `columns` blank cells each.
    Loading { rows: usize, columns: usize },
    /// One full-width "no results" row.
    Empty { colspan: usize },
    Rows(Vec<RenderedRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationFooter {
    pub state: PaginationState,
    pub page_count: usize,
    /// "Page 2 of 5".
    pub label: String,
    pub can_previous: bool,
    pub can_next: bool,
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTable {
    pub header: Vec<HeaderCell>,
    pub body: TableBody,
    pub footer: Option<PaginationFooter>,
}

impl RenderedTable {
    pub fn row_count(&self) -> usize {
        match &self.body {
            TableBody::Loading { rows, .. } => *rows,
            TableBody::Empty { .. } => 1,
            TableBody::Rows(rows) => rows.len(),
        }
    }
}

/// Render request. Build with [`DataTable::new`], chain the optional parts,
/// finish with [`DataTable::render`].
///
/// `get_row_id` must return unique ids within `rows`; duplicates are passed
/// through untouched and make selection/focus for those rows ambiguous.
pub struct DataTable<'a, T, F>
where
    F: Fn(&T) -> String,
{
    rows: &'a [T],
    columns: &'a [ColumnDescriptor<T>],
    get_row_id: F,
    pagination: Option<&'a Paginator>,
    page_size_options: &'a [usize],
    is_loading: bool,
    loaders: usize,
    selection: Option<&'a SelectionMap>,
    cursor: Option<usize>,
}

impl<'a, T, F> DataTable<'a, T, F>
where
    F: Fn(&T) -> String,
{
    pub fn new(rows: &'a [T], columns: &'a [ColumnDescriptor<T>], get_row_id: F) -> Self {
        Self {
            rows,
            columns,
            get_row_id,
            pagination: None,
            page_size_options: &PAGE_SIZE_OPTIONS,
            is_loading: false,
            loaders: DEFAULT_LOADERS,
            selection: None,
            cursor: None,
        }
    }

    pub fn pagination(mut self, paginator: &'a Paginator) -> Self {
        self.pagination = Some(paginator);
        self
    }

    pub fn page_size_options(mut self, options: &'a [usize]) -> Self {
        self.page_size_options = options;
        self
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn loaders(mut self, loaders: usize) -> Self {
        self.loaders = loaders;
        self
    }

    pub fn selection(mut self, selection: &'a SelectionMap) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Index into `rows` of the keyboard-focused row.
    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn render(&self) -> RenderedTable {
        RenderedTable {
            header: self.header(),
            body: self.body(),
            footer: self.footer(),
        }
    }

    fn header(&self) -> Vec<HeaderCell> {
        self.columns
            .iter()
            .map(|column| HeaderCell {
                id: column.id,
                label: match column.header {
                    Header::Text(text) => Some(text),
                    Header::Hidden => None,
                },
                size: column.size,
            })
            .collect()
    }

    fn body(&self) -> TableBody {
        if self.is_loading {
            return TableBody::Loading {
                rows: self.loaders,
                columns: self.columns.len(),
            };
        }
        if self.rows.is_empty() || self.columns.is_empty() {
            return TableBody::Empty {
                colspan: self.columns.len().max(1),
            };
        }
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let id = (self.get_row_id)(row);
                let selected = self
                    .selection
                    .map(|selection| selection.is_selected(&id))
                    .unwrap_or(false);
                RenderedRow {
                    cells: self.columns.iter().map(|column| column.cell(row)).collect(),
                    selected,
                    focused: self.cursor == Some(idx),
                    id,
                }
            })
            .collect();
        TableBody::Rows(rows)
    }

    fn footer(&self) -> Option<PaginationFooter> {
        let paginator = self.pagination?;
        if paginator.page_count() == 0 {
            return None;
        }
        Some(PaginationFooter {
            state: paginator.state(),
            page_count: paginator.page_count(),
            label: paginator.to_string(),
            can_previous: paginator.can_previous_page(),
            can_next: paginator.can_next_page(),
            page_size_options: self.page_size_options.to_vec(),
        })
    }
}
