//! Fixture files, exports and config files on disk.

use std::fs;

use xoro::app::{App, StatusLevel, Tab};
use xoro::config::{self, Config, ConfigError};
use xoro::domain::Customer;
use xoro::modules::customers::customer_table;
use xoro::modules::export::{write_table, ExportFormat};
use xoro::store::{Fixtures, StoreError};

#[test]
fn fixture_file_loads_like_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixtures.json");
    let fixtures = Fixtures::builtin();
    fs::write(&path, fixtures.to_json().unwrap()).unwrap();

    let loaded = Fixtures::load(&path).unwrap();
    assert_eq!(loaded, fixtures);
}

#[test]
fn fixture_errors_are_typed() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("missing.json");
    assert!(matches!(Fixtures::load(&missing), Err(StoreError::Io { .. })));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(Fixtures::load(&broken), Err(StoreError::Json { .. })));

    let duplicated = dir.path().join("dup.json");
    let mut fixtures = Fixtures::builtin();
    fixtures.orders.push(fixtures.orders[0].clone());
    fs::write(&duplicated, fixtures.to_json().unwrap()).unwrap();
    match Fixtures::load(&duplicated) {
        Err(StoreError::DuplicateId { collection, id }) => {
            assert_eq!(collection, "order");
            assert_eq!(id, "o_1");
        }
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[test]
fn csv_export_uses_column_headers() {
    let dir = tempfile::tempdir().unwrap();
    let table = customer_table(Fixtures::builtin().customers, 10);

    let (path, count) = write_table(&table, ExportFormat::Csv, dir.path()).unwrap();
    assert_eq!(count, 24);
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("csv"));

    let content = fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("Customer,Email,Phone,Status,Orders,Total Spent,Joined")
    );
    assert_eq!(lines.count(), 24);
}

#[test]
fn json_export_writes_full_records() {
    let dir = tempfile::tempdir().unwrap();
    let customers = Fixtures::builtin().customers;
    let table = customer_table(customers.clone(), 10);

    let (path, _) = write_table(&table, ExportFormat::Json, dir.path()).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    let back: Vec<Customer> = serde_json::from_str(&content).unwrap();
    assert_eq!(back, customers);
}

#[test]
fn export_covers_the_filtered_collection() {
    let dir = tempfile::tempdir().unwrap();
    let mut table = customer_table(Fixtures::builtin().customers, 5);
    let name = table.rows()[0].name.clone();
    table.set_query(Some(&name));
    let expected = table.visible_rows().len();

    let (_, count) = write_table(&table, ExportFormat::Csv, dir.path()).unwrap();
    assert_eq!(count, expected);
    assert!(count >= 1);
}

#[test]
fn export_command_writes_into_configured_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        export_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    let mut app = App::with_fixtures(Fixtures::builtin(), config);
    app.set_tab(Tab::Orders);

    let action = app.execute_command(&xoro::core::Command::Export(Some("json".into())));
    app.apply_action(action);
    let (text, level) = app.status_text().unwrap();
    assert_eq!(level, StatusLevel::Info);
    assert!(text.starts_with("Exported 32 orders"));

    let files: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(files.len(), 1);

    let action = app.execute_command(&xoro::core::Command::Export(Some("xml".into())));
    app.apply_action(action);
    assert_eq!(app.status_text().map(|(_, level)| level), Some(StatusLevel::Warn));
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "page_size = 25\npage_size_options = [0, 25, 50]\nlog_level = \"debug\"\n",
    )
    .unwrap();

    let config = config::load_from(&path).unwrap();
    assert_eq!(config.page_size, 25);
    assert_eq!(config.page_size_options, vec![25, 50]);
    assert_eq!(config.log_level.as_deref(), Some("debug"));
    assert_eq!(config.loaders, Config::default().loaders);

    let app = App::with_fixtures(Fixtures::builtin(), config);
    assert_eq!(app.customers.pagination().page_size(), 25);
}

#[test]
fn missing_config_is_default_and_broken_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = config::load_from(&dir.path().join("none.toml")).unwrap();
    assert_eq!(missing, Config::default());

    let path = dir.path().join("broken.toml");
    fs::write(&path, "page_size = \"many\"").unwrap();
    assert!(matches!(
        config::load_from(&path),
        Err(ConfigError::Toml { .. })
    ));
}

#[test]
fn repeated_exports_do_not_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let table = customer_table(Fixtures::builtin().customers, 10);

    let (first, _) = write_table(&table, ExportFormat::Csv, dir.path()).unwrap();
    let (second, _) = write_table(&table, ExportFormat::Csv, dir.path()).unwrap();
    assert_ne!(first, second);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
}
