use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::config::Config;
use crate::core::{parse_command, Action, Command, NotifyLevel};
use crate::modules::customers::{customer_table, CustomerTable};
use crate::modules::dashboard::{summarize, DashboardSummary};
use crate::modules::export::{export_table, ExportFormat};
use crate::modules::inbox::Inbox;
use crate::modules::notifications::NotificationCenter;
use crate::modules::orders::{order_table, OrderTable};
use crate::modules::products::ProductCatalog;
use crate::store::Fixtures;
use crate::table::{RowAction, RowOutcome, TableControl};

/// Main tabs in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Inbox,
    Products,
    Customers,
    Orders,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::Inbox,
        Tab::Products,
        Tab::Customers,
        Tab::Orders,
        Tab::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Inbox => "Inbox",
            Tab::Products => "Products",
            Tab::Customers => "Customers",
            Tab::Orders => "Orders",
            Tab::Settings => "Settings",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::Dashboard => '1',
            Tab::Inbox => '2',
            Tab::Products => '3',
            Tab::Customers => '4',
            Tab::Orders => '5',
            Tab::Settings => '6',
        }
    }

    pub fn from_shortcut(ch: char) -> Option<Tab> {
        Tab::ALL.iter().copied().find(|tab| tab.shortcut() == ch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// `:` command line
    Command,
    /// Live search of the active table or chat list
    Search,
    /// Typing a reply in the inbox
    Compose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

impl From<NotifyLevel> for StatusLevel {
    fn from(level: NotifyLevel) -> Self {
        match level {
            NotifyLevel::Info => StatusLevel::Info,
            NotifyLevel::Warn => StatusLevel::Warn,
            NotifyLevel::Error => StatusLevel::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsTab {
    Channels,
    AgentConfig,
    Notifications,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 3] = [
        SettingsTab::Channels,
        SettingsTab::AgentConfig,
        SettingsTab::Notifications,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SettingsTab::Channels => "Channels",
            SettingsTab::AgentConfig => "Agent Config",
            SettingsTab::Notifications => "Notifications",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SettingsTab::Channels => SettingsTab::AgentConfig,
            SettingsTab::AgentConfig => SettingsTab::Notifications,
            SettingsTab::Notifications => SettingsTab::Channels,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

const STATUS_TTL: Duration = Duration::from_secs(3);

/// Where the running instance got its settings, shown on the Settings tab.
#[derive(Debug, Clone, Default)]
pub struct Sources {
    pub config_path: Option<PathBuf>,
    pub fixtures: String,
    pub log_file: Option<PathBuf>,
}

pub struct App {
    /// Current active tab
    pub current_tab: Tab,
    pub input_mode: InputMode,
    pub command: CommandBar,
    /// Text typed in Search or Compose mode
    pub input: String,
    pub customers: CustomerTable,
    pub orders: OrderTable,
    pub products: ProductCatalog,
    pub inbox: Inbox,
    pub notifications: NotificationCenter,
    pub dashboard: DashboardSummary,
    pub settings_tab: SettingsTab,
    pub config: Config,
    pub sources: Sources,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
    pending_copy: Option<String>,
}

impl App {
    /// Empty app whose tables show loading placeholders until
    /// [`App::apply_fixtures`] hands them their collections.
    pub fn new(config: Config) -> Self {
        let mut customers = customer_table(Vec::new(), config.page_size)
            .with_page_size_options(config.page_size_options.clone())
            .with_loaders(config.loaders);
        let mut orders = order_table(Vec::new(), config.page_size)
            .with_page_size_options(config.page_size_options.clone())
            .with_loaders(config.loaders);
        customers.set_loading(true);
        orders.set_loading(true);

        Self {
            current_tab: Tab::Dashboard,
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            input: String::new(),
            customers,
            orders,
            products: ProductCatalog::default(),
            inbox: Inbox::new(Vec::new(), Default::default(), Vec::new()),
            notifications: NotificationCenter::default(),
            dashboard: summarize(&[], &[]),
            settings_tab: SettingsTab::Channels,
            config,
            sources: Sources::default(),
            status: None,
            help_open: false,
            should_quit: false,
            pending_copy: None,
        }
    }

    pub fn with_fixtures(fixtures: Fixtures, config: Config) -> Self {
        let mut app = Self::new(config);
        app.apply_fixtures(fixtures);
        app
    }

    /// Hand every screen its collection and leave the loading state.
    pub fn apply_fixtures(&mut self, fixtures: Fixtures) {
        let Fixtures {
            customers,
            orders,
            products,
            chats,
            messages,
            notifications,
        } = fixtures;
        info!(
            "applying fixtures: {} customers, {} orders, {} products, {} chats",
            customers.len(),
            orders.len(),
            products.len(),
            chats.len()
        );

        self.dashboard = summarize(&orders, &chats);
        self.inbox = Inbox::new(chats, messages, customers.clone());
        self.customers.replace_rows(customers);
        self.customers.set_loading(false);
        self.orders.replace_rows(orders);
        self.orders.set_loading(false);
        self.products = ProductCatalog::new(products);
        self.notifications = NotificationCenter::new(notifications);
    }

    pub fn is_loading(&self) -> bool {
        self.customers.is_loading() || self.orders.is_loading()
    }

    // --- status line ---

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    // --- tabs ---

    pub fn set_tab(&mut self, tab: Tab) {
        if self.current_tab == tab {
            return;
        }
        debug!("tab {} -> {}", self.current_tab.title(), tab.title());
        self.current_tab = tab;
        if matches!(self.input_mode, InputMode::Search | InputMode::Compose) {
            self.input_mode = InputMode::Normal;
            self.input.clear();
        }
    }

    pub fn cycle_tab(&mut self, forward: bool) {
        let idx = Tab::ALL
            .iter()
            .position(|tab| *tab == self.current_tab)
            .unwrap_or(0);
        let len = Tab::ALL.len();
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        self.set_tab(Tab::ALL[next]);
    }

    /// Table on the current tab, if it has one.
    pub fn active_table(&self) -> Option<&dyn TableControl> {
        match self.current_tab {
            Tab::Customers => Some(&self.customers as &dyn TableControl),
            Tab::Orders => Some(&self.orders as &dyn TableControl),
            _ => None,
        }
    }

    pub fn active_table_mut(&mut self) -> Option<&mut dyn TableControl> {
        match self.current_tab {
            Tab::Customers => Some(&mut self.customers as &mut dyn TableControl),
            Tab::Orders => Some(&mut self.orders as &mut dyn TableControl),
            _ => None,
        }
    }

    fn on_table(&mut self, f: impl FnOnce(&mut dyn TableControl) -> Action) -> Action {
        match self.active_table_mut() {
            Some(table) => f(table),
            None => Action::Notify(
                "No table on this tab".to_string(),
                NotifyLevel::Warn,
            ),
        }
    }

    // --- cursor, rows, overlays ---

    pub fn cursor_up(&mut self) {
        match self.current_tab {
            Tab::Inbox => self.inbox.cursor_up(),
            Tab::Products => self.products.move_cursor(-1),
            _ => {
                if let Some(table) = self.active_table_mut() {
                    table.cursor_up();
                }
            }
        }
    }

    pub fn cursor_down(&mut self) {
        match self.current_tab {
            Tab::Inbox => self.inbox.cursor_down(),
            Tab::Products => self.products.move_cursor(1),
            _ => {
                if let Some(table) = self.active_table_mut() {
                    table.cursor_down();
                }
            }
        }
    }

    /// Enter on the current tab.
    pub fn activate(&mut self) {
        match self.current_tab {
            Tab::Customers | Tab::Orders => self.trigger_row_action(RowAction::View),
            Tab::Inbox => {
                self.inbox.select_cursor();
            }
            Tab::Products => {
                if !self.products.open_cursor() {
                    self.set_status("No products found.", StatusLevel::Warn);
                }
            }
            Tab::Settings => self.settings_tab = self.settings_tab.next(),
            Tab::Dashboard => {}
        }
    }

    pub fn trigger_row_action(&mut self, action: RowAction) {
        let outcome = match self.active_table_mut() {
            Some(table) => table.trigger(action),
            None => return,
        };
        let action = match outcome {
            Ok(RowOutcome::Opened(_)) => Action::None,
            Ok(RowOutcome::Unavailable(action)) => Action::Notify(
                format!("{} is not available in mock mode", action.label()),
                NotifyLevel::Info,
            ),
            Err(err) => Action::Notify(err.to_string(), NotifyLevel::Warn),
        };
        self.apply_action(action);
    }

    pub fn toggle_selection(&mut self) {
        let action = self.on_table(|table| match table.toggle_selection() {
            Ok(_) => Action::Notify(
                format!("{} selected", table.selected_count()),
                NotifyLevel::Info,
            ),
            Err(err) => Action::Notify(err.to_string(), NotifyLevel::Warn),
        });
        self.apply_action(action);
    }

    /// Id of the row under the cursor, or the open chat.
    pub fn cursor_id(&self) -> Option<String> {
        match self.current_tab {
            Tab::Customers | Tab::Orders => self.active_table().and_then(|t| t.cursor_row_id()),
            Tab::Products => self
                .products
                .products()
                .get(self.products.cursor())
                .map(|product| product.id.clone()),
            Tab::Inbox => self.inbox.selected_chat().map(|chat| chat.id.clone()),
            Tab::Dashboard | Tab::Settings => None,
        }
    }

    pub fn copy_cursor_id(&mut self) {
        let action = match self.cursor_id() {
            Some(id) => Action::Copy(id),
            None => Action::Notify("Nothing to copy".to_string(), NotifyLevel::Warn),
        };
        self.apply_action(action);
    }

    pub fn take_copy_request(&mut self) -> Option<String> {
        self.pending_copy.take()
    }

    /// Close the topmost overlay. Returns false when nothing was open.
    pub fn close_overlay(&mut self) -> bool {
        if self.help_open {
            self.help_open = false;
            return true;
        }
        if self.notifications.open {
            self.notifications.open = false;
            return true;
        }
        match self.current_tab {
            Tab::Products if self.products.detail().is_some() => {
                self.products.close_detail();
                true
            }
            Tab::Inbox if self.inbox.profile_open => {
                self.inbox.profile_open = false;
                true
            }
            _ => match self.active_table_mut() {
                Some(table) if table.has_detail() => {
                    table.close_detail();
                    true
                }
                _ => false,
            },
        }
    }

    // --- input modes ---

    pub fn enter_command(&mut self, prefix: Option<String>) {
        self.input_mode = InputMode::Command;
        self.command.input = prefix.unwrap_or_default();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().trim_start_matches(':').to_string();
        if input.is_empty() {
            self.exit_command();
            return;
        }
        let cmd = parse_command(&input);
        let action = self.execute_command(&cmd);
        self.command.last = Some(input);
        self.exit_command();
        self.apply_action(action);
    }

    /// Search the active table or the chat list, starting from the
    /// current query.
    pub fn enter_search(&mut self) {
        let current = match self.current_tab {
            Tab::Inbox => Some(self.inbox.search().to_string()),
            _ => self
                .active_table()
                .map(|table| table.query().unwrap_or_default().to_string()),
        };
        match current {
            Some(query) => {
                self.input = query;
                self.input_mode = InputMode::Search;
            }
            None => self.set_status("Search is not available here", StatusLevel::Warn),
        }
    }

    pub fn enter_compose(&mut self) {
        if self.current_tab != Tab::Inbox || self.inbox.selected_chat().is_none() {
            self.set_status("Select a conversation first", StatusLevel::Warn);
            return;
        }
        self.input.clear();
        self.input_mode = InputMode::Compose;
    }

    pub fn push_input(&mut self, ch: char) {
        self.input.push(ch);
        if self.input_mode == InputMode::Search {
            self.apply_search();
        }
    }

    pub fn pop_input(&mut self) {
        self.input.pop();
        if self.input_mode == InputMode::Search {
            self.apply_search();
        }
    }

    /// Enter in Search or Compose mode.
    pub fn submit_input(&mut self) {
        match self.input_mode {
            InputMode::Search => {
                self.apply_search();
                self.input_mode = InputMode::Normal;
                self.input.clear();
            }
            InputMode::Compose => {
                if self.inbox.send_message(&self.input).is_some() {
                    self.input.clear();
                }
            }
            InputMode::Normal | InputMode::Command => {}
        }
    }

    /// Esc in Search or Compose mode. The search query stays applied.
    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input.clear();
    }

    fn apply_search(&mut self) {
        let query = self.input.clone();
        match self.current_tab {
            Tab::Inbox => self.inbox.set_search(query),
            _ => {
                if let Some(table) = self.active_table_mut() {
                    table.set_query(Some(&query));
                }
            }
        }
    }

    // --- commands & actions ---

    /// Execute a parsed command
    pub fn execute_command(&mut self, cmd: &Command) -> Action {
        match cmd {
            Command::Dashboard => Action::Navigate(Tab::Dashboard),
            Command::Inbox => Action::Navigate(Tab::Inbox),
            Command::Products => Action::Navigate(Tab::Products),
            Command::Customers => Action::Navigate(Tab::Customers),
            Command::Orders => Action::Navigate(Tab::Orders),
            Command::Settings => Action::Navigate(Tab::Settings),

            Command::Page(number) => {
                let index = number.saturating_sub(1);
                self.on_table(|table| {
                    table.set_page_index(index);
                    page_notice(table)
                })
            }
            Command::Size(size) => {
                let size = *size;
                self.on_table(|table| {
                    table.set_page_size(size);
                    Action::Notify(
                        format!("Rows per page: {}", table.pagination().page_size()),
                        NotifyLevel::Info,
                    )
                })
            }
            Command::First => self.on_table(|table| {
                table.first_page();
                page_notice(table)
            }),
            Command::Last => self.on_table(|table| {
                table.last_page();
                page_notice(table)
            }),
            Command::Next => self.on_table(|table| {
                table.next_page();
                page_notice(table)
            }),
            Command::Prev => self.on_table(|table| {
                table.previous_page();
                page_notice(table)
            }),

            Command::View(id) => {
                if self.current_tab == Tab::Products {
                    return self.open_product(id);
                }
                self.on_table(|table| match table.open_detail(id) {
                    Ok(()) => Action::None,
                    Err(err) => Action::Notify(err.to_string(), NotifyLevel::Warn),
                })
            }
            Command::Find(query) => self.find(query.as_deref()),
            Command::Export(format) => self.export(format.as_deref()),

            Command::ReadAll => match self.notifications.mark_all_read() {
                0 => Action::Notify("No unread notifications".to_string(), NotifyLevel::Info),
                n => Action::Notify(format!("Marked {n} notifications read"), NotifyLevel::Info),
            },
            Command::Quit => Action::Quit,

            Command::Unknown(s) => {
                warn!("unknown command {s:?}");
                Action::Notify(format!("Unknown command: {}", s), NotifyLevel::Warn)
            }
        }
    }

    fn open_product(&mut self, id: &str) -> Action {
        let Some(idx) = self.products.products().iter().position(|p| p.id == id) else {
            return Action::Notify(format!("Product {id:?} not found"), NotifyLevel::Warn);
        };
        let current = self.products.cursor() as isize;
        self.products.move_cursor(idx as isize - current);
        self.products.open_cursor();
        Action::None
    }

    fn find(&mut self, query: Option<&str>) -> Action {
        if self.current_tab == Tab::Inbox {
            self.inbox.set_search(query.unwrap_or_default());
            return Action::Notify(
                format!("{} conversations", self.inbox.filtered_chats().len()),
                NotifyLevel::Info,
            );
        }
        self.on_table(|table| {
            table.set_query(query);
            match table.query() {
                Some(q) => Action::Notify(
                    format!("{} {} match {:?}", table.visible_len(), table.name(), q),
                    NotifyLevel::Info,
                ),
                None => Action::Notify("Search cleared".to_string(), NotifyLevel::Info),
            }
        })
    }

    fn export(&self, format: Option<&str>) -> Action {
        let raw = format.unwrap_or_default();
        let Some(format) = ExportFormat::parse(raw) else {
            return Action::Notify(
                format!("Unknown export format: {raw} (use csv or json)"),
                NotifyLevel::Warn,
            );
        };
        let dir = self.config.export_dir.as_deref();
        match self.current_tab {
            Tab::Customers => export_table(&self.customers, format, dir),
            Tab::Orders => export_table(&self.orders, format, dir),
            _ => Action::Notify(
                "Export is available on the Customers and Orders tabs".to_string(),
                NotifyLevel::Warn,
            ),
        }
    }

    /// Apply an action returned by a command or module
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(tab) => self.set_tab(tab),
            Action::Copy(text) => self.pending_copy = Some(text),
            Action::Notify(msg, level) => self.set_status(msg, level.into()),
            Action::Quit => self.should_quit = true,
        }
    }
}

fn page_notice(table: &dyn TableControl) -> Action {
    Action::Notify(table.pagination().to_string(), NotifyLevel::Info)
}
