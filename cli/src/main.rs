//! shopping-list: command line front end for the shopping list calculator
//!
//! Each invocation opens the stored list, runs one operation and prints the
//! outcome. Set `RUST_LOG=debug` to see what the backend is doing.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::debug;

use shared::{ListSnapshot, OperationOutcome, OutcomeKind, PriceMode};
use shopping_list_backend::{AddItemCommand, Backend, FileKeyValueRepository, ListStore, SaveEditCommand};

/// Shopping list calculator
#[derive(Parser, Debug)]
#[command(name = "shopping-list")]
#[command(about = "Keep a shopping list and see the estimated total")]
struct Cli {
    /// Data directory (defaults to SHOPPING_LIST_DATA_DIR or the platform data directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the list and the total
    List,
    /// Add an item with a fixed price or a price range
    Add {
        name: String,
        /// Fixed price
        #[arg(short, long, conflicts_with_all = ["min", "max"])]
        price: Option<String>,
        /// Lowest expected price
        #[arg(long, requires = "max")]
        min: Option<String>,
        /// Highest expected price
        #[arg(long, requires = "min")]
        max: Option<String>,
        #[arg(short, long, default_value = "")]
        note: String,
    },
    /// Edit an item; fields that are not given keep their current value
    Edit {
        id: u64,
        #[arg(long)]
        name: Option<String>,
        /// Set a fixed price
        #[arg(short, long, conflicts_with_all = ["min", "max"])]
        price: Option<String>,
        #[arg(long)]
        min: Option<String>,
        #[arg(long)]
        max: Option<String>,
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Remove an item
    Remove { id: u64 },
    /// Remove every item
    Clear {
        /// Confirm clearing the whole list
        #[arg(long)]
        yes: bool,
    },
    /// Show or change the price mode used by `add` without a price flag
    Mode { mode: Option<ModeArg> },
    /// Show the estimated total
    Total,
    /// Write the list to a JSON file
    Export {
        /// Directory to write the export file into
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Fixed,
    Range,
    Toggle,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut backend = Backend::open(cli.data_dir)?;
    debug!("Using data directory {}", backend.data_directory().display());
    let store = &mut backend.store;

    let outcome = match cli.command.unwrap_or(Command::List) {
        Command::List => {
            print_list(&store.snapshot());
            return Ok(ExitCode::SUCCESS);
        }
        Command::Total => {
            println!("{}", store.snapshot().formatted_total);
            return Ok(ExitCode::SUCCESS);
        }
        Command::Add {
            name,
            price,
            min,
            max,
            note,
        } => {
            let command = match (price, min, max) {
                (Some(price), _, _) => {
                    switch_mode(store, PriceMode::Fixed)?;
                    AddItemCommand::fixed(name, price)
                }
                (None, Some(min), Some(max)) => {
                    switch_mode(store, PriceMode::Range)?;
                    AddItemCommand::range(name, min, max)
                }
                _ => AddItemCommand {
                    name,
                    ..AddItemCommand::default()
                },
            };
            store.add_item(command.with_note(note)).outcome
        }
        Command::Edit {
            id,
            name,
            price,
            min,
            max,
            note,
        } => {
            let begin = store.begin_edit(id);
            let item = match store.get_item(id) {
                Some(item) => item,
                None => return Ok(report(&begin)),
            };

            let (min_price, max_price) = match price {
                Some(price) => (price.clone(), price),
                None => (
                    min.unwrap_or_else(|| item.min_price.to_string()),
                    max.unwrap_or_else(|| item.max_price.to_string()),
                ),
            };
            let command = SaveEditCommand {
                id,
                name: name.unwrap_or_else(|| item.name.clone()),
                note: note.unwrap_or_else(|| item.note.clone()),
                min_price,
                max_price,
            };
            store.save_edit(command)
        }
        Command::Remove { id } => store.remove_item(id),
        Command::Clear { yes } => {
            if !yes {
                eprintln!("This removes every item. Run again with --yes to confirm.");
                return Ok(ExitCode::FAILURE);
            }
            store.clear_all()
        }
        Command::Mode { mode } => match mode {
            None => {
                println!("{}", store.price_entry_mode());
                return Ok(ExitCode::SUCCESS);
            }
            Some(ModeArg::Fixed) => store.set_price_entry_mode(PriceMode::Fixed),
            Some(ModeArg::Range) => store.set_price_entry_mode(PriceMode::Range),
            Some(ModeArg::Toggle) => store.toggle_price_entry_mode(),
        },
        Command::Export { output } => {
            let result = store.export();
            if let (Some(document), Some(file_name)) = (&result.document, &result.file_name) {
                let json = store.export_service().to_json(document)?;
                let path = output.join(file_name);
                fs::write(&path, json)
                    .with_context(|| format!("Failed to write export file {}", path.display()))?;
                println!("{}", path.display());
            }
            result.outcome
        }
    };

    Ok(report(&outcome))
}

/// Switch the entry mode so the add form reads the price fields that were given
fn switch_mode(store: &mut ListStore<FileKeyValueRepository>, mode: PriceMode) -> Result<()> {
    let outcome = store.set_price_entry_mode(mode);
    if outcome.is_error() {
        anyhow::bail!("{}", outcome.message);
    }
    Ok(())
}

fn report(outcome: &OperationOutcome) -> ExitCode {
    match outcome.kind {
        OutcomeKind::Success => {
            println!("✓ {}", outcome.message);
            ExitCode::SUCCESS
        }
        OutcomeKind::Info => {
            println!("{}", outcome.message);
            ExitCode::SUCCESS
        }
        OutcomeKind::Error => {
            eprintln!("✗ {}", outcome.message);
            ExitCode::FAILURE
        }
    }
}

fn print_list(snapshot: &ListSnapshot) {
    if snapshot.is_empty {
        println!("The shopping list is empty");
        return;
    }

    let name_width = snapshot
        .items
        .iter()
        .map(|item| item.name.chars().count())
        .max()
        .unwrap_or(0);

    for item in &snapshot.items {
        let marker = if item.is_editing { "*" } else { " " };
        print!(
            "{}{:>4}  {:<width$}  {:<20}  {}",
            marker,
            item.id,
            item.name,
            item.formatted_price,
            item.created_date,
            width = name_width
        );
        if !item.note.is_empty() {
            print!("  ({})", item.note);
        }
        println!();
    }

    println!();
    println!("Total: {}", snapshot.formatted_total);
    println!("Entry mode: {}", snapshot.price_entry_mode);
}
