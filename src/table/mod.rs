//! Paginated, selectable data-table core.
//!
//! - [`pagination`]: page index/size controller.
//! - [`column`]: column descriptors and cell shapes.
//! - [`selection`]: sparse row selection.
//! - [`view`]: the renderer producing a [`RenderedTable`].
//! - [`container`]: per-entity table state (page, cursor, detail).

pub mod column;
pub mod container;
pub mod error;
pub mod pagination;
pub mod selection;
pub mod view;

pub use column::{Cell, ColumnDescriptor, Header, RowAction};
pub use container::{EntityTable, RowOutcome, Searchable, TableControl};
pub use error::TableError;
pub use pagination::{page_count, PaginationState, Paginator, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use selection::SelectionMap;
pub use view::{
    DataTable, HeaderCell, PaginationFooter, RenderedRow, RenderedTable, TableBody,
    DEFAULT_LOADERS, NO_RESULTS,
};
