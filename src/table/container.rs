//! Entity table container: owns the collection handed to it, the
//! pagination controller, the row cursor, the selection map and the
//! "selected for detail" slot, and slices the current page for the
//! renderer.

use log::{debug, info};

use super::column::{ColumnDescriptor, RowAction};
use super::error::TableError;
use super::pagination::{Paginator, PaginationState, PAGE_SIZE_OPTIONS};
use super::selection::SelectionMap;
use super::view::{DataTable, RenderedTable, DEFAULT_LOADERS};

/// Case-insensitive substring search over a row's searchable fields.
pub trait Searchable {
    /// `needle` is already lowercased and non-empty.
    fn matches(&self, needle: &str) -> bool;
}

/// What a row action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Detail view opened for the row with this id.
    Opened(String),
    /// The action has no backing store; nothing changed.
    Unavailable(RowAction),
}

pub struct EntityTable<T> {
    name: &'static str,
    rows: Vec<T>,
    visible: Vec<T>,
    columns: Vec<ColumnDescriptor<T>>,
    row_id: fn(&T) -> String,
    paginator: Paginator,
    page_size_options: Vec<usize>,
    query: Option<String>,
    cursor: usize,
    selection: SelectionMap,
    detail: Option<T>,
    loading: bool,
    loaders: usize,
}

impl<T: Clone> EntityTable<T> {
    pub fn new(
        name: &'static str,
        rows: Vec<T>,
        columns: Vec<ColumnDescriptor<T>>,
        row_id: fn(&T) -> String,
        page_size: usize,
    ) -> Self {
        let paginator = Paginator::new(page_size, rows.len());
        Self {
            name,
            visible: rows.clone(),
            rows,
            columns,
            row_id,
            paginator,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            query: None,
            cursor: 0,
            selection: SelectionMap::new(),
            detail: None,
            loading: false,
            loaders: DEFAULT_LOADERS,
        }
    }

    pub fn with_page_size_options(mut self, options: Vec<usize>) -> Self {
        if !options.is_empty() {
            self.page_size_options = options;
        }
        self
    }

    pub fn with_loaders(mut self, loaders: usize) -> Self {
        self.loaders = loaders;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn columns(&self) -> &[ColumnDescriptor<T>] {
        &self.columns
    }

    /// Full collection, unfiltered.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Collection after the active query.
    pub fn visible_rows(&self) -> &[T] {
        &self.visible
    }

    /// Rows of the current page.
    pub fn page_rows(&self) -> &[T] {
        &self.visible[self.paginator.page_range()]
    }

    pub fn row_id(&self, row: &T) -> String {
        (self.row_id)(row)
    }

    pub fn pagination(&self) -> &Paginator {
        &self.paginator
    }

    pub fn pagination_state(&self) -> PaginationState {
        self.paginator.state()
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    /// Swap in a new collection. The page index is re-clamped and the
    /// active query is re-applied; selection and detail are left as they are.
    pub fn replace_rows(&mut self, rows: Vec<T>)
    where
        T: Searchable,
    {
        self.rows = rows;
        self.refilter();
        self.clamp_cursor();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn render(&self) -> RenderedTable {
        let cursor = (!self.page_rows().is_empty()).then_some(self.cursor);
        DataTable::new(self.page_rows(), &self.columns, self.row_id)
            .pagination(&self.paginator)
            .page_size_options(&self.page_size_options)
            .loading(self.loading)
            .loaders(self.loaders)
            .selection(&self.selection)
            .cursor(cursor)
            .render()
    }

    // --- pagination ---

    pub fn next_page(&mut self) {
        self.paginator.next_page();
        self.after_page_change();
    }

    pub fn previous_page(&mut self) {
        self.paginator.previous_page();
        self.after_page_change();
    }

    pub fn first_page(&mut self) {
        self.paginator.first_page();
        self.after_page_change();
    }

    pub fn last_page(&mut self) {
        self.paginator.last_page();
        self.after_page_change();
    }

    pub fn set_page_index(&mut self, index: usize) {
        self.paginator.set_page_index(index);
        self.after_page_change();
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.paginator.set_page_size(size);
        self.after_page_change();
    }

    pub fn cycle_page_size(&mut self) {
        self.paginator.cycle_page_size(&self.page_size_options);
        self.after_page_change();
    }

    fn after_page_change(&mut self) {
        self.clamp_cursor();
        debug!("{} table: {} (size {})", self.name, self.paginator, self.paginator.page_size());
    }

    // --- cursor & selection ---

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let len = self.page_rows().len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
        self.clamp_cursor();
    }

    pub fn cursor_row(&self) -> Option<&T> {
        self.page_rows().get(self.cursor)
    }

    fn clamp_cursor(&mut self) {
        let len = self.page_rows().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn selection(&self) -> &SelectionMap {
        &self.selection
    }

    /// Toggle selection of the cursor row. Returns the new state.
    pub fn toggle_selection(&mut self) -> Result<bool, TableError> {
        let id = self
            .cursor_row()
            .map(|row| (self.row_id)(row))
            .ok_or(TableError::NoCursorRow)?;
        Ok(self.selection.toggle(&id))
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // --- detail ---

    pub fn detail(&self) -> Option<&T> {
        self.detail.as_ref()
    }

    /// Open the detail view for `row`. Replaces any open detail.
    pub fn view(&mut self, row: &T) {
        info!("{} table: view {}", self.name, (self.row_id)(row));
        self.detail = Some(row.clone());
    }

    pub fn view_cursor_row(&mut self) -> Result<(), TableError> {
        let row = self.cursor_row().cloned().ok_or(TableError::NoCursorRow)?;
        self.view(&row);
        Ok(())
    }

    /// Open the detail view for the row with `id`, searching the full
    /// collection.
    pub fn open_detail(&mut self, id: &str) -> Result<(), TableError> {
        let row = self
            .rows
            .iter()
            .find(|row| (self.row_id)(row) == id)
            .cloned()
            .ok_or_else(|| TableError::RowNotFound {
                table: self.name,
                id: id.to_string(),
            })?;
        self.view(&row);
        Ok(())
    }

    pub fn close_detail(&mut self) {
        if self.detail.take().is_some() {
            debug!("{} table: detail closed", self.name);
        }
    }

    /// Run a menu action against the cursor row.
    pub fn trigger(&mut self, action: RowAction) -> Result<RowOutcome, TableError> {
        let row = self.cursor_row().cloned().ok_or(TableError::NoCursorRow)?;
        match action {
            RowAction::View => {
                self.view(&row);
                Ok(RowOutcome::Opened((self.row_id)(&row)))
            }
            RowAction::Edit | RowAction::Delete => Ok(RowOutcome::Unavailable(action)),
        }
    }
}

impl<T: Clone + Searchable> EntityTable<T> {
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Filter the collection. Page count is recomputed from the filtered
    /// length and the table returns to the first page.
    pub fn set_query(&mut self, query: Option<&str>) {
        let query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);
        if query == self.query {
            return;
        }
        self.query = query;
        self.refilter();
        self.paginator.first_page();
        self.cursor = 0;
        debug!(
            "{} table: query {:?} matches {} rows",
            self.name,
            self.query,
            self.visible.len()
        );
    }

    fn refilter(&mut self) {
        self.visible = match self.query.as_deref() {
            Some(needle) => self
                .rows
                .iter()
                .filter(|row| row.matches(needle))
                .cloned()
                .collect(),
            None => self.rows.clone(),
        };
        self.paginator.set_total_rows(self.visible.len());
    }
}

/// Entity-agnostic controls, so the app can drive whichever table is on
/// screen without knowing its row type.
pub trait TableControl {
    fn name(&self) -> &'static str;
    fn pagination(&self) -> &Paginator;
    fn render(&self) -> RenderedTable;
    fn next_page(&mut self);
    fn previous_page(&mut self);
    fn first_page(&mut self);
    fn last_page(&mut self);
    fn set_page_index(&mut self, index: usize);
    fn set_page_size(&mut self, size: usize);
    fn cycle_page_size(&mut self);
    fn cursor_up(&mut self);
    fn cursor_down(&mut self);
    fn cursor_row_id(&self) -> Option<String>;
    fn toggle_selection(&mut self) -> Result<bool, TableError>;
    fn selected_count(&self) -> usize;
    fn query(&self) -> Option<&str>;
    fn set_query(&mut self, query: Option<&str>);
    fn visible_len(&self) -> usize;
    fn trigger(&mut self, action: RowAction) -> Result<RowOutcome, TableError>;
    fn open_detail(&mut self, id: &str) -> Result<(), TableError>;
    fn has_detail(&self) -> bool;
    fn close_detail(&mut self);
    fn set_loading(&mut self, loading: bool);
}

impl<T: Clone + Searchable> TableControl for EntityTable<T> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn pagination(&self) -> &Paginator {
        &self.paginator
    }

    fn render(&self) -> RenderedTable {
        EntityTable::render(self)
    }

    fn next_page(&mut self) {
        EntityTable::next_page(self)
    }

    fn previous_page(&mut self) {
        EntityTable::previous_page(self)
    }

    fn first_page(&mut self) {
        EntityTable::first_page(self)
    }

    fn last_page(&mut self) {
        EntityTable::last_page(self)
    }

    fn set_page_index(&mut self, index: usize) {
        EntityTable::set_page_index(self, index)
    }

    fn set_page_size(&mut self, size: usize) {
        EntityTable::set_page_size(self, size)
    }

    fn cycle_page_size(&mut self) {
        EntityTable::cycle_page_size(self)
    }

    fn cursor_up(&mut self) {
        EntityTable::cursor_up(self)
    }

    fn cursor_down(&mut self) {
        EntityTable::cursor_down(self)
    }

    fn cursor_row_id(&self) -> Option<String> {
        self.cursor_row().map(|row| (self.row_id)(row))
    }

    fn toggle_selection(&mut self) -> Result<bool, TableError> {
        EntityTable::toggle_selection(self)
    }

    fn selected_count(&self) -> usize {
        self.selection.len()
    }

    fn query(&self) -> Option<&str> {
        EntityTable::query(self)
    }

    fn set_query(&mut self, query: Option<&str>) {
        EntityTable::set_query(self, query)
    }

    fn visible_len(&self) -> usize {
        self.visible.len()
    }

    fn trigger(&mut self, action: RowAction) -> Result<RowOutcome, TableError> {
        EntityTable::trigger(self, action)
    }

    fn open_detail(&mut self, id: &str) -> Result<(), TableError> {
        EntityTable::open_detail(self, id)
    }

    fn has_detail(&self) -> bool {
        self.detail.is_some()
    }

    fn close_detail(&mut self) {
        EntityTable::close_detail(self)
    }

    fn set_loading(&mut self, loading: bool) {
        EntityTable::set_loading(self, loading)
    }
}
