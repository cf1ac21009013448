//! Terminal session layer.
//!
//! Runs the interactive loop: reads a line, parses it into a
//! [`SessionCommand`] with clap, dispatches to exactly one command handler,
//! and prints the rendered reply plus any active notices. View state (the
//! current search text and stock filter) lives here as an explicit value
//! passed into the query engine - it is never read back from rendered
//! output.

/// Command handlers mapping user actions onto store/query operations
pub mod commands;
/// Transient notices with auto-dismiss
pub mod notify;
/// Pure text rendering of items, summaries, and notices
pub mod render;

use crate::cli::commands::DraftOverrides;
use crate::cli::notify::{Notice, Notifier};
use crate::core::item::ItemDraft;
use crate::core::query::StockFilter;
use crate::core::store::InventoryStore;
use crate::errors::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};

/// Transient list-view state owned by the session.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Free-text search over item name and code
    pub search: String,
    /// Active stock filter
    pub filter: StockFilter,
}

/// One line of user input, parsed as a command.
#[derive(Debug, Parser)]
#[command(name = "stock-buddy", no_binary_name = true, disable_version_flag = true)]
pub enum SessionCommand {
    /// Show the item list
    List {
        /// Free-text search over name and code; sticks for the session
        #[arg(long)]
        search: Option<String>,
        /// Stock filter: all, available or low; sticks for the session
        #[arg(long)]
        filter: Option<StockFilter>,
    },
    /// Add a new item
    Add {
        /// Item name (required to pass validation)
        #[arg(long)]
        name: Option<String>,
        /// Units on hand (required to pass validation)
        #[arg(long)]
        stock: Option<String>,
        /// Item code; derived from the name when omitted
        #[arg(long)]
        code: Option<String>,
        /// Free-form category tag
        #[arg(long)]
        category: Option<String>,
        /// Unit of measure
        #[arg(long)]
        unit: Option<String>,
        /// Purchase cost per unit
        #[arg(long)]
        cost: Option<String>,
        /// Selling price per unit
        #[arg(long)]
        price: Option<String>,
        /// Free-form description
        #[arg(long)]
        description: Option<String>,
        /// Low-stock threshold
        #[arg(long)]
        min_stock: Option<String>,
    },
    /// Edit an existing item; omitted fields keep their current values
    Edit {
        /// Id of the item to edit
        id: i64,
        /// New item name
        #[arg(long)]
        name: Option<String>,
        /// New item code
        #[arg(long)]
        code: Option<String>,
        /// New category tag
        #[arg(long)]
        category: Option<String>,
        /// New stock count
        #[arg(long)]
        stock: Option<i64>,
        /// New unit of measure
        #[arg(long)]
        unit: Option<String>,
        /// New purchase cost per unit
        #[arg(long)]
        cost: Option<f64>,
        /// New selling price per unit
        #[arg(long)]
        price: Option<f64>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New low-stock threshold
        #[arg(long)]
        min_stock: Option<i64>,
    },
    /// Delete an item
    Delete {
        /// Id of the item to delete
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show aggregate inventory figures
    Summary,
    /// End the session
    Quit,
}

/// Runs the interactive session until `quit` or end of input.
pub async fn run_session(store: &mut InventoryStore) -> Result<()> {
    let notifier = Notifier::new();
    let mut view = ViewState::default();

    let mut output = io::stdout();
    let mut input = io::stdin().lock();
    notifier.post(Notice::info(format!("Loaded {} items.", store.len())));
    writeln!(
        output,
        "stock-buddy - type 'help' for commands, 'quit' to leave."
    )?;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let tokens = tokenize(&line);
        if tokens.is_empty() {
            continue;
        }

        match SessionCommand::try_parse_from(&tokens) {
            Ok(command) => {
                let Some(reply) =
                    dispatch(store, &mut view, &notifier, command, &mut input, &mut output).await?
                else {
                    break;
                };
                writeln!(output, "{reply}")?;
                for notice in notifier.active() {
                    writeln!(output, "{}", render::notice_line(&notice))?;
                }
            }
            // clap renders help/usage text through the error path too
            Err(parse_error) => writeln!(output, "{parse_error}")?,
        }
    }

    writeln!(output, "Bye.")?;
    Ok(())
}

/// Maps one parsed command onto one handler call. Returns `None` when the
/// session should end.
async fn dispatch(
    store: &mut InventoryStore,
    view: &mut ViewState,
    notifier: &Notifier,
    command: SessionCommand,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<String>> {
    match command {
        SessionCommand::List { search, filter } => {
            if let Some(search) = search {
                view.search = search;
            }
            if let Some(filter) = filter {
                view.filter = filter;
            }
            Ok(Some(commands::show_list(store, view)))
        }
        SessionCommand::Add {
            name,
            stock,
            code,
            category,
            unit,
            cost,
            price,
            description,
            min_stock,
        } => {
            let draft = ItemDraft {
                name: name.unwrap_or_default(),
                code: code.unwrap_or_default(),
                category: category.unwrap_or_default(),
                stock: coerce_count(stock, 0),
                unit: unit.unwrap_or_default(),
                cost: coerce_amount(cost),
                price: coerce_amount(price),
                description: description.unwrap_or_default(),
                min_stock: coerce_count(min_stock, 5),
            };
            commands::add_item(store, notifier, draft).await.map(Some)
        }
        SessionCommand::Edit {
            id,
            name,
            code,
            category,
            stock,
            unit,
            cost,
            price,
            description,
            min_stock,
        } => {
            let overrides = DraftOverrides {
                name,
                code,
                category,
                stock,
                unit,
                cost,
                price,
                description,
                min_stock,
            };
            commands::edit_item(store, notifier, id, overrides)
                .await
                .map(Some)
        }
        SessionCommand::Delete { id, yes } => {
            if !yes && !confirm(input, output, "Delete this item? [y/N] ")? {
                return Ok(Some("Delete cancelled.".to_string()));
            }
            commands::delete_item(store, notifier, id).await.map(Some)
        }
        SessionCommand::Summary => Ok(Some(commands::show_summary(store))),
        SessionCommand::Quit => Ok(None),
    }
}

/// Asks a yes/no question; anything but `y`/`yes` declines.
fn confirm(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> Result<bool> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Splits an input line into tokens, honoring single and double quotes so
/// names with spaces survive (`add --name "Teh Tarik" ...`).
#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        if let Some(open) = quote {
            if ch == open {
                quote = None;
            } else {
                current.push(ch);
            }
        } else if ch == '"' || ch == '\'' {
            quote = Some(ch);
            in_token = true;
        } else if ch.is_whitespace() {
            if in_token {
                tokens.push(std::mem::take(&mut current));
                in_token = false;
            }
        } else {
            current.push(ch);
            in_token = true;
        }
    }
    if in_token {
        tokens.push(current);
    }
    tokens
}

/// Coerces an optional count argument, falling back to `default` when the
/// value is missing or unparsable. A missing stock therefore reaches the
/// store as 0 and is rejected there, matching the form this replaces.
fn coerce_count(raw: Option<String>, default: i64) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

/// Coerces an optional money argument, falling back to 0.
fn coerce_amount(raw: Option<String>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::setup_seeded_store;
    use std::io::Cursor;

    #[test]
    fn test_tokenize_honors_quotes() {
        let tokens = tokenize(r#"add --name "Teh Tarik" --stock 10"#);
        assert_eq!(tokens, vec!["add", "--name", "Teh Tarik", "--stock", "10"]);

        let tokens = tokenize("list --search 'es jeruk'");
        assert_eq!(tokens, vec!["list", "--search", "es jeruk"]);
    }

    #[test]
    fn test_tokenize_blank_line_is_empty() {
        assert!(tokenize("   \n").is_empty());
    }

    #[test]
    fn test_parse_add_command() {
        let tokens = tokenize(r#"add --name "Teh Botol" --stock 10 --price 5000"#);
        let command = SessionCommand::try_parse_from(&tokens).unwrap();

        match command {
            SessionCommand::Add {
                name,
                stock,
                price,
                code,
                ..
            } => {
                assert_eq!(name.as_deref(), Some("Teh Botol"));
                assert_eq!(stock.as_deref(), Some("10"));
                assert_eq!(price.as_deref(), Some("5000"));
                assert!(code.is_none());
            }
            other => panic!("expected add, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_filter() {
        let command = SessionCommand::try_parse_from(["list", "--filter", "low"]).unwrap();
        match command {
            SessionCommand::List { filter, .. } => assert_eq!(filter, Some(StockFilter::Low)),
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_command_is_a_parse_error() {
        assert!(SessionCommand::try_parse_from(["frobnicate"]).is_err());
    }

    #[test]
    fn test_coerce_count_defaults_on_garbage() {
        assert_eq!(coerce_count(Some("12".to_string()), 0), 12);
        assert_eq!(coerce_count(Some("dua belas".to_string()), 0), 0);
        assert_eq!(coerce_count(None, 5), 5);
    }

    #[test]
    fn test_coerce_amount_defaults_on_garbage() {
        assert_eq!(coerce_amount(Some("12000".to_string())), 12000.0);
        assert_eq!(coerce_amount(Some("gratis".to_string())), 0.0);
        assert_eq!(coerce_amount(None), 0.0);
    }

    #[tokio::test]
    async fn test_dispatch_list_updates_view_state() -> Result<()> {
        let mut store = setup_seeded_store().await?;
        let notifier = Notifier::new();
        let mut view = ViewState::default();
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        let command = SessionCommand::List {
            search: Some("teh".to_string()),
            filter: Some(StockFilter::Low),
        };
        let reply = dispatch(
            &mut store,
            &mut view,
            &notifier,
            command,
            &mut input,
            &mut output,
        )
        .await?
        .unwrap();

        assert_eq!(view.search, "teh");
        assert_eq!(view.filter, StockFilter::Low);
        assert!(reply.contains("Teh Tarik"));

        // The filter sticks: a bare `list` re-derives with the same state.
        let command = SessionCommand::List {
            search: None,
            filter: None,
        };
        let reply = dispatch(
            &mut store,
            &mut view,
            &notifier,
            command,
            &mut input,
            &mut output,
        )
        .await?
        .unwrap();
        assert!(reply.contains("Teh Tarik"));
        assert!(!reply.contains("Kopi Arabika"));
        Ok(())
    }

    #[tokio::test]
    async fn test_dispatch_delete_respects_declined_confirmation() -> Result<()> {
        let mut store = setup_seeded_store().await?;
        let notifier = Notifier::new();
        let mut view = ViewState::default();
        let id = store.items()[0].id;
        let before = store.len();

        let mut input = Cursor::new(b"n\n".to_vec());
        let mut output = Vec::new();
        let command = SessionCommand::Delete { id, yes: false };
        let reply = dispatch(
            &mut store,
            &mut view,
            &notifier,
            command,
            &mut input,
            &mut output,
        )
        .await?
        .unwrap();

        assert_eq!(reply, "Delete cancelled.");
        assert_eq!(store.len(), before);

        // Confirming with `y` goes through.
        let mut input = Cursor::new(b"y\n".to_vec());
        let command = SessionCommand::Delete { id, yes: false };
        let reply = dispatch(
            &mut store,
            &mut view,
            &notifier,
            command,
            &mut input,
            &mut output,
        )
        .await?
        .unwrap();
        assert!(reply.starts_with("✅"));
        assert_eq!(store.len(), before - 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_dispatch_quit_ends_the_session() -> Result<()> {
        let mut store = setup_seeded_store().await?;
        let notifier = Notifier::new();
        let mut view = ViewState::default();
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        let reply = dispatch(
            &mut store,
            &mut view,
            &notifier,
            SessionCommand::Quit,
            &mut input,
            &mut output,
        )
        .await?;
        assert!(reply.is_none());
        Ok(())
    }
}
