//! Column descriptors.
//!
//! A column projects a row into a [`Cell`], a closed set of cell shapes the
//! UI knows how to draw. Projections are plain `fn` pointers, so a column
//! list is deterministic and can be rebuilt at will.

use crate::domain::{Badge, Money};

/// Per-row menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    pub const MENU: &'static [RowAction] = &[RowAction::View, RowAction::Edit, RowAction::Delete];

    pub fn label(self) -> &'static str {
        match self {
            RowAction::View => "View",
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }
}

/// Rendered content of one cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Muted(String),
    Strong(String),
    /// Initials bubble followed by a name.
    Avatar { initials: String, name: String },
    /// Primary line with a secondary muted line.
    Stacked { primary: String, secondary: String },
    Badge(Badge),
    Currency(Money),
    Count(u64),
    Actions(&'static [RowAction]),
}

impl Cell {
    /// Single-line text form, used by exports and plain renderers.
    pub fn plain_text(&self) -> String {
        match self {
            Cell::Text(text) | Cell::Muted(text) | Cell::Strong(text) => text.clone(),
            Cell::Avatar { name, .. } => name.clone(),
            Cell::Stacked { primary, secondary } => format!("{primary} <{secondary}>"),
            Cell::Badge(badge) => badge.label.to_string(),
            Cell::Currency(amount) => amount.to_string(),
            Cell::Count(count) => count.to_string(),
            Cell::Actions(_) => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    Text(&'static str),
    /// Column has no header text (the actions column).
    Hidden,
}

impl Header {
    pub fn text(&self) -> Option<&'static str> {
        match self {
            Header::Text(text) => Some(text),
            Header::Hidden => None,
        }
    }
}

enum Projection<T> {
    Field(fn(&T) -> Cell),
    Actions(&'static [RowAction]),
}

impl<T> Clone for Projection<T> {
    fn clone(&self) -> Self {
        match self {
            Projection::Field(project) => Projection::Field(*project),
            Projection::Actions(actions) => Projection::Actions(actions),
        }
    }
}

/// One column: id, header, advisory width and a projection of the row.
pub struct ColumnDescriptor<T> {
    pub id: &'static str,
    pub header: Header,
    /// Width hint in terminal cells. Not enforced.
    pub size: u16,
    projection: Projection<T>,
}

impl<T> ColumnDescriptor<T> {
    pub fn new(id: &'static str, header: &'static str, size: u16, project: fn(&T) -> Cell) -> Self {
        Self {
            id,
            header: Header::Text(header),
            size,
            projection: Projection::Field(project),
        }
    }

    /// Trailing actions column with a hidden header.
    pub fn actions(actions: &'static [RowAction], size: u16) -> Self {
        Self {
            id: "actions",
            header: Header::Hidden,
            size,
            projection: Projection::Actions(actions),
        }
    }

    pub fn cell(&self, row: &T) -> Cell {
        match &self.projection {
            Projection::Field(project) => project(row),
            Projection::Actions(actions) => Cell::Actions(actions),
        }
    }

    pub fn is_actions(&self) -> bool {
        matches!(self.projection, Projection::Actions(_))
    }
}

impl<T> Clone for ColumnDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            header: self.header,
            size: self.size,
            projection: self.projection.clone(),
        }
    }
}

impl<T> std::fmt::Debug for ColumnDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("size", &self.size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tone;

    struct Pair(&'static str, u64);

    fn columns() -> Vec<ColumnDescriptor<Pair>> {
        vec![
            ColumnDescriptor::new("name", "Name", 20, |row: &Pair| Cell::Text(row.0.to_string())),
            ColumnDescriptor::new("count", "Count", 8, |row: &Pair| Cell::Count(row.1)),
            ColumnDescriptor::actions(RowAction::MENU, 6),
        ]
    }

    #[test]
    fn test_projection_is_pure() {
        let row = Pair("alpha", 3);
        let cols = columns();
        assert_eq!(cols[0].cell(&row), Cell::Text("alpha".into()));
        assert_eq!(cols[1].cell(&row), Cell::Count(3));
        assert_eq!(cols[2].cell(&row), Cell::Actions(RowAction::MENU));
        assert_eq!(cols[0].cell(&row), cols[0].cell(&row));
    }

    #[test]
    fn test_actions_header_hidden() {
        let cols = columns();
        assert_eq!(cols[2].header.text(), None);
        assert!(cols[2].is_actions());
        assert_eq!(cols[0].header.text(), Some("Name"));
    }

    #[test]
    fn test_plain_text() {
        let badge = Cell::Badge(Badge {
            label: "Paid",
            tone: Tone::Success,
        });
        assert_eq!(badge.plain_text(), "Paid");
        let stacked = Cell::Stacked {
            primary: "Ada".into(),
            secondary: "ada@example.com".into(),
        };
        assert_eq!(stacked.plain_text(), "Ada <ada@example.com>");
        assert_eq!(Cell::Actions(RowAction::MENU).plain_text(), "");
    }
}
