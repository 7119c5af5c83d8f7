//! Command parser for the : command line

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation
    Dashboard,
    Inbox,
    Products,
    Customers,
    Orders,
    Settings,

    // Table paging; `Page` is 1-based as typed
    Page(usize),
    Size(usize),
    First,
    Last,
    Next,
    Prev,

    // Rows
    View(String),
    Find(Option<String>),
    Export(Option<String>),

    ReadAll,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        "dashboard" | "home" | "dash" => Command::Dashboard,
        "inbox" | "chats" => Command::Inbox,
        "products" | "catalog" => Command::Products,
        "customers" | "cust" => Command::Customers,
        "orders" => Command::Orders,
        "settings" | "set" => Command::Settings,

        "page" | "p" => match args.as_deref().and_then(|s| s.parse().ok()) {
            Some(n) if n > 0 => Command::Page(n),
            _ => Command::Unknown(input.to_string()),
        },
        "size" => match args.as_deref().and_then(|s| s.parse::<i64>().ok()) {
            Some(n) => Command::Size(usize::try_from(n.max(1)).unwrap_or(1)),
            None => Command::Unknown(input.to_string()),
        },
        "first" => Command::First,
        "last" => Command::Last,
        "next" | "n" => Command::Next,
        "prev" | "previous" => Command::Prev,

        "view" | "open" => match args {
            Some(id) => Command::View(id),
            None => Command::Unknown(input.to_string()),
        },
        "find" | "search" | "f" => Command::Find(args),
        "export" | "exp" => Command::Export(args),

        "read-all" | "readall" => Command::ReadAll,
        "quit" | "q" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}
