use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::{error, info, warn};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use xoro::app::{App, InputMode, StatusLevel, Tab};
use xoro::config::{self, Config};
use xoro::logging;
use xoro::store::{Fixtures, StoreError};
use xoro::table::RowAction;
use xoro::ui;

#[derive(Debug, Parser)]
#[command(
    name = "xoro",
    version,
    about = "Xoro: a terminal console for customers, orders and conversations"
)]
struct Args {
    /// Config file (default: $XORO_CONFIG or ~/.config/xoro/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON fixture file to load instead of the built-in dataset
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// Initial rows per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Log file (default: <data dir>/xoro.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

/// Fixture load result delivered by the loader thread.
type FixtureEvent = (Fixtures, String, Option<StoreError>);

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(config::config_path);
    let (mut config, config_error) = match config_path.as_deref() {
        Some(path) => match config::load_from(path) {
            Ok(config) => (config, None),
            Err(err) => (Config::default(), Some(err)),
        },
        None => (Config::default(), None),
    };
    apply_args(&mut config, &args);

    let log_path = config.log_file.clone().or_else(config::default_log_path);
    let log_error = log_path.as_deref().and_then(|path| {
        logging::init(path, logging::parse_level(config.log_level.as_deref())).err()
    });
    info!("xoro starting");

    let mut app = App::new(config.clone());
    app.sources.config_path = config_path;
    app.sources.log_file = log_path.filter(|_| log_error.is_none());
    app.sources.fixtures = "loading…".to_string();
    if let Some(err) = config_error {
        warn!("{err}");
        app.set_status(format!("Config ignored: {err}"), StatusLevel::Warn);
    }
    if let Some(err) = log_error {
        app.set_status(format!("Logging disabled: {err}"), StatusLevel::Warn);
    }

    let fixture_rx = spawn_fixture_loader(config.fixtures.clone());

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, fixture_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("{err:?}");
        eprintln!("{err:?}");
    }
    info!("xoro stopped");

    Ok(())
}

/// CLI values win over the config file.
fn apply_args(config: &mut Config, args: &Args) {
    if let Some(size) = args.page_size {
        config.page_size = size.max(1);
    }
    if let Some(path) = args.fixtures.clone() {
        config.fixtures = Some(path);
    }
    if let Some(path) = args.log_file.clone() {
        config.log_file = Some(path);
    }
    if let Some(level) = args.log_level.clone() {
        config.log_level = Some(level);
    }
}

fn spawn_fixture_loader(path: Option<PathBuf>) -> Receiver<FixtureEvent> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let event = load_fixtures(path.as_deref());
        let _ = tx.send(event);
    });
    rx
}

/// Load the fixture file, falling back to the built-in set on failure.
fn load_fixtures(path: Option<&Path>) -> FixtureEvent {
    match path {
        None => (Fixtures::builtin(), "built-in".to_string(), None),
        Some(path) => match Fixtures::load(path) {
            Ok(fixtures) => (fixtures, path.display().to_string(), None),
            Err(err) => {
                error!("{err}");
                (Fixtures::builtin(), "built-in (fallback)".to_string(), Some(err))
            }
        },
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    fixture_rx: Receiver<FixtureEvent>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        pump_background(&mut app, &fixture_rx);
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                handle_key(&mut app, key);
            }
        }

        if let Some(text) = app.take_copy_request() {
            copy_to_clipboard(&mut app, text);
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn pump_background(app: &mut App, fixture_rx: &Receiver<FixtureEvent>) {
    while let Ok((fixtures, source, err)) = fixture_rx.try_recv() {
        app.apply_fixtures(fixtures);
        app.sources.fixtures = source;
        if let Some(err) = err {
            app.set_status(
                format!("Fixtures failed, using built-in data: {err}"),
                StatusLevel::Error,
            );
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
        InputMode::Search | InputMode::Compose => handle_input_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    if app.notifications.open {
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') => app.notifications.open = false,
            KeyCode::Char('m') => {
                let cmd = xoro::core::Command::ReadAll;
                let action = app.execute_command(&cmd);
                app.apply_action(action);
            }
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        }
        return;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }
        (KeyCode::Char('q'), _) => app.should_quit = true,
        (KeyCode::Char('?'), _) => app.help_open = true,
        (KeyCode::Char(':'), _) => app.enter_command(None),
        (KeyCode::Char('/'), _) => app.enter_search(),
        (KeyCode::Char('n'), _) => app.notifications.toggle(),
        (KeyCode::Char('y'), _) => app.copy_cursor_id(),
        (KeyCode::Char(ch), _) if Tab::from_shortcut(ch).is_some() => {
            if let Some(tab) = Tab::from_shortcut(ch) {
                app.set_tab(tab);
            }
        }
        (KeyCode::Tab, _) => app.cycle_tab(true),
        (KeyCode::BackTab, _) => app.cycle_tab(false),
        (KeyCode::Up | KeyCode::Char('k'), _) => app.cursor_up(),
        (KeyCode::Down | KeyCode::Char('j'), _) => app.cursor_down(),
        (KeyCode::Enter, _) => app.activate(),
        (KeyCode::Esc, _) => {
            app.close_overlay();
        }
        _ => match app.current_tab {
            Tab::Customers | Tab::Orders => handle_table_key(app, key),
            Tab::Inbox => handle_inbox_key(app, key),
            Tab::Settings => {
                if key.code == KeyCode::Char(']') {
                    app.settings_tab = app.settings_tab.next();
                }
            }
            Tab::Dashboard | Tab::Products => {}
        },
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') => app.toggle_selection(),
        KeyCode::Char('e') => app.trigger_row_action(RowAction::Edit),
        KeyCode::Char('d') => app.trigger_row_action(RowAction::Delete),
        code => {
            let Some(table) = app.active_table_mut() else {
                return;
            };
            match code {
                KeyCode::Left | KeyCode::Char('h') => table.previous_page(),
                KeyCode::Right | KeyCode::Char('l') => table.next_page(),
                KeyCode::Char('g') | KeyCode::Home => table.first_page(),
                KeyCode::Char('G') | KeyCode::End => table.last_page(),
                KeyCode::Char('z') => table.cycle_page_size(),
                _ => {}
            }
        }
    }
}

fn handle_inbox_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('i') => app.enter_compose(),
        KeyCode::Char('f') => app.inbox.cycle_filter(),
        KeyCode::Char('p') => app.inbox.toggle_profile(),
        KeyCode::PageUp => app.inbox.scroll_older(),
        KeyCode::PageDown => app.inbox.scroll_newer(),
        _ => {}
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

fn handle_input_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Enter => app.submit_input(),
        KeyCode::Backspace => app.pop_input(),
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.push_input(ch);
        }
        _ => {}
    }
}

fn copy_to_clipboard(app: &mut App, text: String) {
    use arboard::Clipboard;

    match Clipboard::new() {
        Ok(mut clipboard) => {
            if clipboard.set_text(text.clone()).is_ok() {
                info!("copied {text} to clipboard");
                app.set_status(format!("Copied: {text}"), StatusLevel::Info);
            } else {
                app.set_status("Failed to copy to clipboard", StatusLevel::Error);
            }
        }
        Err(_) => {
            app.set_status("Clipboard not available", StatusLevel::Error);
        }
    }
}
