//! App-level flows driven through commands and app methods, without a terminal.

mod common;

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use xoro::app::{App, InputMode, StatusLevel, Tab};
use xoro::config::Config;
use xoro::store::Fixtures;
use xoro::table::{RowAction, TableControl};

use common::buffer_text;

fn app() -> App {
    App::with_fixtures(Fixtures::builtin(), Config::default())
}

fn run(app: &mut App, input: &str) {
    app.enter_command(None);
    app.command.input = input.to_string();
    app.apply_command();
}

fn status(app: &App) -> (String, StatusLevel) {
    let (text, level) = app.status_text().expect("status message");
    (text.to_string(), level)
}

#[test]
fn starts_loading_until_fixtures_arrive() {
    let mut app = App::new(Config::default());
    assert!(app.is_loading());
    assert!(app.customers.rows().is_empty());

    app.apply_fixtures(Fixtures::builtin());
    assert!(!app.is_loading());
    assert_eq!(app.customers.rows().len(), 24);
    assert_eq!(app.orders.rows().len(), 32);
}

#[test]
fn navigation_commands_switch_tabs() {
    let mut app = app();
    assert_eq!(app.current_tab, Tab::Dashboard);
    run(&mut app, "customers");
    assert_eq!(app.current_tab, Tab::Customers);
    run(&mut app, ":orders");
    assert_eq!(app.current_tab, Tab::Orders);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.command.last.as_deref(), Some("orders"));
}

#[test]
fn paging_commands_drive_the_active_table() {
    let mut app = app();
    run(&mut app, "customers");

    run(&mut app, "page 3");
    assert_eq!(app.customers.pagination().page_index(), 2);
    assert_eq!(status(&app), ("Page 3 of 3".to_string(), StatusLevel::Info));

    run(&mut app, "page 99");
    assert_eq!(app.customers.pagination().page_index(), 2);

    run(&mut app, "first");
    assert_eq!(app.customers.pagination().page_index(), 0);
    run(&mut app, "next");
    assert_eq!(app.customers.pagination().page_index(), 1);
    run(&mut app, "prev");
    assert_eq!(app.customers.pagination().page_index(), 0);
    run(&mut app, "last");
    assert_eq!(app.customers.pagination().page_index(), 2);

    run(&mut app, "size 50");
    assert_eq!(app.customers.pagination().page_size(), 50);
    assert_eq!(app.customers.pagination().page_index(), 0);

    run(&mut app, "size 0");
    assert_eq!(app.customers.pagination().page_size(), 1);
}

#[test]
fn paging_without_a_table_warns() {
    let mut app = app();
    run(&mut app, "next");
    assert_eq!(status(&app).1, StatusLevel::Warn);
}

#[test]
fn view_command_and_escape() {
    let mut app = app();
    run(&mut app, "customers");
    run(&mut app, "view c_5");
    assert_eq!(app.customers.detail().map(|c| c.id.as_str()), Some("c_5"));

    assert!(app.close_overlay());
    assert!(app.customers.detail().is_none());
    assert!(!app.close_overlay());

    run(&mut app, "view c_999");
    let (text, level) = status(&app);
    assert_eq!(level, StatusLevel::Warn);
    assert!(text.contains("c_999"));
}

#[test]
fn enter_views_the_cursor_row() {
    let mut app = app();
    app.set_tab(Tab::Orders);
    app.cursor_down();
    app.activate();
    assert_eq!(app.orders.detail().map(|o| o.id.as_str()), Some("o_2"));
}

#[test]
fn edit_and_delete_are_unavailable() {
    let mut app = app();
    app.set_tab(Tab::Customers);
    let before = app.customers.rows().to_vec();
    app.trigger_row_action(RowAction::Edit);
    assert_eq!(
        status(&app),
        ("Edit is not available in mock mode".to_string(), StatusLevel::Info)
    );
    app.trigger_row_action(RowAction::Delete);
    assert_eq!(app.customers.rows(), before.as_slice());
}

#[test]
fn find_filters_and_clears() {
    let mut app = app();
    run(&mut app, "customers");
    let name = app.customers.rows()[3].name.clone();
    run(&mut app, &format!("find {name}"));
    assert!(app.customers.visible_rows().iter().all(|c| c.name == name));
    assert!(!app.customers.visible_rows().is_empty());

    run(&mut app, "find");
    assert_eq!(app.customers.query(), None);
    assert_eq!(app.customers.visible_rows().len(), 24);
}

#[test]
fn live_search_updates_the_table() {
    let mut app = app();
    app.set_tab(Tab::Customers);
    app.enter_search();
    assert_eq!(app.input_mode, InputMode::Search);
    for ch in "@nomatch".chars() {
        app.push_input(ch);
    }
    assert!(app.customers.visible_rows().is_empty());
    for _ in 0.."@nomatch".len() {
        app.pop_input();
    }
    assert_eq!(app.customers.visible_rows().len(), 24);
    app.cancel_input();
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn unknown_command_warns() {
    let mut app = app();
    run(&mut app, "frobnicate");
    assert_eq!(
        status(&app),
        ("Unknown command: frobnicate".to_string(), StatusLevel::Warn)
    );
}

#[test]
fn read_all_marks_notifications() {
    let mut app = app();
    assert_eq!(app.notifications.unread_count(), 3);
    run(&mut app, "read-all");
    assert_eq!(app.notifications.unread_count(), 0);
    assert_eq!(status(&app).0, "Marked 3 notifications read");
    run(&mut app, "read-all");
    assert_eq!(status(&app).0, "No unread notifications");
}

#[test]
fn copy_requests_the_cursor_id() {
    let mut app = app();
    app.copy_cursor_id();
    assert_eq!(app.take_copy_request(), None);
    assert_eq!(status(&app).1, StatusLevel::Warn);

    app.set_tab(Tab::Customers);
    app.cursor_down();
    app.copy_cursor_id();
    assert_eq!(app.take_copy_request(), Some("c_2".to_string()));
    assert_eq!(app.take_copy_request(), None);
}

#[test]
fn selection_toggles_through_the_app() {
    let mut app = app();
    app.set_tab(Tab::Orders);
    app.toggle_selection();
    assert_eq!(app.active_table().map(|t| t.selected_count()), Some(1));
    app.toggle_selection();
    assert_eq!(app.active_table().map(|t| t.selected_count()), Some(0));
}

#[test]
fn inbox_select_and_reply() {
    let mut app = app();
    app.set_tab(Tab::Inbox);
    let unread_id = app
        .inbox
        .chats()
        .iter()
        .find(|chat| chat.unread > 0)
        .map(|chat| chat.id.clone())
        .unwrap();
    assert!(app.inbox.select_chat(&unread_id));
    let chat = app.inbox.selected_chat().unwrap();
    assert_eq!(chat.unread, 0);
    let before = app.inbox.conversation().len();

    app.enter_compose();
    assert_eq!(app.input_mode, InputMode::Compose);
    for ch in "   ".chars() {
        app.push_input(ch);
    }
    app.submit_input();
    assert_eq!(app.inbox.conversation().len(), before);

    app.input.clear();
    for ch in "  On its way! ".chars() {
        app.push_input(ch);
    }
    app.submit_input();
    assert!(app.input.is_empty());
    let last = app.inbox.conversation().last().unwrap();
    assert_eq!(last.content, "On its way!");
    assert!(last.is_agent);
    let chat = app.inbox.selected_chat().unwrap();
    assert_eq!(chat.last_message, "On its way!");
    assert_eq!(chat.time_away, "Just now");
}

#[test]
fn inbox_find_and_profile() {
    let mut app = app();
    run(&mut app, "inbox");
    let name = app.inbox.chats()[1].name.clone();
    run(&mut app, &format!("find {name}"));
    assert_eq!(app.inbox.filtered_chats().len(), 1);

    app.activate();
    assert_eq!(app.inbox.selected_chat().map(|c| c.name.clone()), Some(name.clone()));
    app.inbox.toggle_profile();
    assert_eq!(
        app.inbox.selected_customer().map(|c| c.name.clone()),
        Some(name)
    );
    assert!(app.close_overlay());
    assert!(!app.inbox.profile_open);
}

#[test]
fn product_detail_opens_by_id() {
    let mut app = app();
    run(&mut app, "products");
    run(&mut app, "view p_4");
    assert_eq!(app.products.detail().map(|p| p.id.as_str()), Some("p_4"));
    assert!(app.close_overlay());
    assert!(app.products.detail().is_none());
}

#[test]
fn quit_command() {
    let mut app = app();
    run(&mut app, "quit");
    assert!(app.should_quit);
}

#[test]
fn every_tab_draws() {
    let mut app = app();
    let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();
    for tab in Tab::ALL {
        app.set_tab(tab);
        terminal.draw(|f| xoro::ui::draw(f, &app)).unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains(tab.title()), "{} tab missing title", tab.title());
    }

    app.set_tab(Tab::Customers);
    run(&mut app, "view c_1");
    app.notifications.toggle();
    terminal.draw(|f| xoro::ui::draw(f, &app)).unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Customer Details"));
    assert!(text.contains("Notifications (3 unread)"));
}

#[test]
fn conversation_shows_newest_reply_after_wrapping() {
    let mut app = app();
    app.set_tab(Tab::Inbox);
    for n in 0..12 {
        app.inbox.send_message(&format!(
            "reply number {n} with quite a lot of extra words so that it wraps across rows"
        ));
    }
    app.inbox.send_message("NEWEST-MARKER");

    let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
    terminal.draw(|f| xoro::ui::draw(f, &app)).unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("You: NEWEST-MARKER"), "newest reply not drawn:\n{text}");

    app.inbox.scroll_older();
    terminal.draw(|f| xoro::ui::draw(f, &app)).unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(!text.contains("You: NEWEST-MARKER"));
    assert!(text.contains("reply number 11"));
}

#[test]
fn revenue_card_shows_the_trend() {
    let app = app();
    assert!(!app.dashboard.revenue_trend.is_empty());
    let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();
    terminal.draw(|f| xoro::ui::draw(f, &app)).unwrap();
    let text = buffer_text(terminal.backend().buffer());
    let rows: Vec<&str> = text.lines().collect();
    let title = rows
        .iter()
        .position(|row| row.contains("Total Revenue"))
        .expect("revenue card");
    let glyphs = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    assert!(rows[title + 3].chars().any(|ch| glyphs.contains(&ch)));
}
