mod common;

use std::cell::Cell as Counter;

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use xoro::domain::Customer;
use xoro::modules::customers::{customer_columns, customer_row_id};
use xoro::table::{ColumnDescriptor, DataTable, Paginator, SelectionMap, TableBody, DEFAULT_LOADERS, NO_RESULTS};
use xoro::ui::table::draw_table;

use common::{buffer_text, customers};

#[test]
fn loading_renders_placeholders_without_reading_rows() {
    let rows = customers(3);
    let columns = customer_columns();
    let calls = Counter::new(0);
    let get_row_id = |row: &Customer| {
        calls.set(calls.get() + 1);
        row.id.clone()
    };

    let rendered = DataTable::new(&rows, &columns, get_row_id)
        .loading(true)
        .render();
    assert_eq!(
        rendered.body,
        TableBody::Loading {
            rows: DEFAULT_LOADERS,
            columns: columns.len()
        }
    );
    assert_eq!(calls.get(), 0);

    let rendered = DataTable::new(&rows, &columns, customer_row_id)
        .loading(true)
        .loaders(7)
        .render();
    assert_eq!(rendered.row_count(), 7);
}

#[test]
fn empty_rows_render_one_full_width_row() {
    let rows: Vec<Customer> = Vec::new();
    let columns = customer_columns();
    let rendered = DataTable::new(&rows, &columns, customer_row_id).render();
    assert_eq!(rendered.body, TableBody::Empty { colspan: columns.len() });
    assert_eq!(rendered.row_count(), 1);
    assert_eq!(rendered.header.len(), columns.len());
}

#[test]
fn rows_render_in_order_and_are_not_sliced() {
    let rows = customers(25);
    let columns = customer_columns();
    let pager = Paginator::new(10, rows.len());
    let rendered = DataTable::new(&rows, &columns, customer_row_id)
        .pagination(&pager)
        .render();

    let TableBody::Rows(rendered_rows) = &rendered.body else {
        panic!("expected data rows, got {:?}", rendered.body);
    };
    assert_eq!(rendered_rows.len(), 25);
    let ids: Vec<&str> = rendered_rows.iter().map(|row| row.id.as_str()).collect();
    assert_eq!(ids[0], "c_1");
    assert_eq!(ids[24], "c_25");
    assert!(rendered_rows.iter().all(|row| row.cells.len() == columns.len()));
}

#[test]
fn footer_follows_the_paginator() {
    let rows = customers(25);
    let columns = customer_columns();

    let without = DataTable::new(&rows, &columns, customer_row_id).render();
    assert!(without.footer.is_none());

    let pager = Paginator::new(10, rows.len());
    let rendered = DataTable::new(&rows[..10], &columns, customer_row_id)
        .pagination(&pager)
        .render();
    let footer = rendered.footer.expect("footer");
    assert_eq!(footer.label, "Page 1 of 3");
    assert_eq!(footer.page_count, 3);
    assert!(!footer.can_previous);
    assert!(footer.can_next);
    assert_eq!(footer.page_size_options, vec![10, 20, 30, 40, 50]);

    let empty: Vec<Customer> = Vec::new();
    let empty_pager = Paginator::new(10, 0);
    let rendered = DataTable::new(&empty, &columns, customer_row_id)
        .pagination(&empty_pager)
        .render();
    assert!(rendered.footer.is_none());
}

#[test]
fn selection_and_cursor_mark_rows() {
    let rows = customers(4);
    let columns = customer_columns();
    let mut selection = SelectionMap::new();
    selection.set("c_2", true);
    selection.set("c_99", true);

    let rendered = DataTable::new(&rows, &columns, customer_row_id)
        .selection(&selection)
        .cursor(Some(3))
        .render();
    let TableBody::Rows(rendered_rows) = rendered.body else {
        panic!("expected data rows");
    };
    let selected: Vec<bool> = rendered_rows.iter().map(|row| row.selected).collect();
    let focused: Vec<bool> = rendered_rows.iter().map(|row| row.focused).collect();
    assert_eq!(selected, vec![false, true, false, false]);
    assert_eq!(focused, vec![false, false, false, true]);
}

#[test]
fn draws_header_rows_and_footer() {
    let rows = customers(25);
    let columns = customer_columns();
    let pager = Paginator::new(10, rows.len());
    let rendered = DataTable::new(&rows[..10], &columns, customer_row_id)
        .pagination(&pager)
        .render();

    let mut terminal = Terminal::new(TestBackend::new(160, 20)).unwrap();
    terminal
        .draw(|f| draw_table(f, f.size(), &rendered, "Customers"))
        .unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Customers"));
    assert!(text.contains("Email"));
    assert!(text.contains("Customer 1"));
    assert!(text.contains("Page 1 of 3"));
    assert!(text.contains("Rows per page"));
}

#[test]
fn draws_no_results_row() {
    let rows: Vec<Customer> = Vec::new();
    let columns = customer_columns();
    let rendered = DataTable::new(&rows, &columns, customer_row_id).render();

    let mut terminal = Terminal::new(TestBackend::new(120, 10)).unwrap();
    terminal
        .draw(|f| draw_table(f, f.size(), &rendered, "Customers"))
        .unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains(NO_RESULTS));
}

#[test]
fn no_columns_render_a_headerless_no_results_row() {
    let rows = customers(3);
    let columns: Vec<ColumnDescriptor<Customer>> = Vec::new();
    let rendered = DataTable::new(&rows, &columns, customer_row_id).render();
    assert!(rendered.header.is_empty());
    assert_eq!(rendered.body, TableBody::Empty { colspan: 1 });
    assert_eq!(rendered.row_count(), 1);
}

#[test]
fn duplicate_row_ids_pass_through() {
    let mut rows = customers(2);
    rows[1].id = rows[0].id.clone();
    let columns = customer_columns();
    let mut selection = SelectionMap::new();
    selection.set("c_1", true);

    let rendered = DataTable::new(&rows, &columns, customer_row_id)
        .selection(&selection)
        .cursor(Some(1))
        .render();
    let TableBody::Rows(rendered_rows) = rendered.body else {
        panic!("expected data rows");
    };
    assert_eq!(rendered_rows.len(), 2);
    assert!(rendered_rows.iter().all(|row| row.id == "c_1"));
    assert!(rendered_rows.iter().all(|row| row.selected));
    assert!(!rendered_rows[0].focused);
    assert!(rendered_rows[1].focused);
    assert_ne!(rendered_rows[0].cells, rendered_rows[1].cells);
}
