use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use grocery_list::categorizer::categorize;
use grocery_list::config::{AppConfig, LogFormat};
use grocery_list::grocery_list::GroceryList;
use grocery_list::ingredient_parser::parse_ingredient;
use grocery_list::storage::JsonFileStore;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grocery-list", about = "Turn recipe ingredients into a grocery list")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse one ingredient line and print the result as JSON
    Parse { line: String },
    /// Import a recipe's ingredient lines from a file or stdin
    Import {
        recipe_id: String,
        recipe_name: String,
        /// Read lines from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Add a manually typed item, e.g. "2 lbs potatoes"
    Add { line: String },
    /// Show the list grouped by category
    List {
        /// Include checked items
        #[arg(long)]
        all: bool,
    },
    /// Show the items imported from one recipe
    Recipe { recipe_id: String },
    /// Check or uncheck an item
    Toggle { id: String },
    /// Remove an item
    Remove { id: String },
    /// Remove every checked item
    ClearChecked,
    /// Remove every item
    ClearAll,
}

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

fn load_list(store: &JsonFileStore) -> GroceryList {
    match store.load_grocery_list() {
        Ok(list) => list,
        Err(err) => {
            warn!(error = %err, "Could not load grocery list, starting empty");
            GroceryList::new()
        }
    }
}

fn read_lines(file: Option<PathBuf>) -> Result<Vec<String>> {
    let text = match file {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read ingredients from {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read ingredients from stdin")?;
            text
        }
    };
    Ok(text.lines().map(str::to_string).collect())
}

fn print_list(list: &GroceryList, include_checked: bool) {
    let sections = list.sections(include_checked);
    if sections.is_empty() {
        println!("The grocery list is empty.");
        return;
    }
    for section in sections {
        print!("{section}");
    }
}

fn print_parsed(line: &str) -> Result<()> {
    let parsed = parse_ingredient(line);
    let category = categorize(&parsed.name);
    let output = serde_json::json!({
        "name": parsed.name,
        "quantity": parsed.quantity,
        "unit": parsed.unit,
        "category": category,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Run a command against the stored list; returns whether the list changed
fn run_list_command(list: &mut GroceryList, command: Command) -> Result<bool> {
    match command {
        Command::Parse { line } => {
            print_parsed(&line)?;
            Ok(false)
        }
        Command::Import {
            recipe_id,
            recipe_name,
            file,
        } => {
            let lines = read_lines(file)?;
            let summary = list.add_items_from_recipe(&recipe_id, &recipe_name, lines.as_slice());
            println!(
                "{} added, {} updated, {} skipped from \"{}\"",
                summary.added, summary.updated, summary.skipped, recipe_name
            );
            Ok(true)
        }
        Command::Add { line } => match list.add_item_from_text(&line) {
            Some(item) => {
                println!("Added {} ({}) as {}", item.name, item.category, item.id);
                Ok(true)
            }
            None => {
                println!("Nothing to add: \"{line}\" has no ingredient name");
                Ok(false)
            }
        },
        Command::List { all } => {
            print_list(list, all);
            Ok(false)
        }
        Command::Recipe { recipe_id } => {
            for item in list.recipe_items(&recipe_id) {
                println!("{}  {}", item.id, item);
            }
            Ok(false)
        }
        Command::Toggle { id } => match list.toggle_checked(&id) {
            Some(checked) => {
                println!("{id} is now {}", if checked { "checked" } else { "unchecked" });
                Ok(true)
            }
            None => anyhow::bail!("No grocery item with id {id}"),
        },
        Command::Remove { id } => {
            if !list.remove_item(&id) {
                anyhow::bail!("No grocery item with id {id}");
            }
            println!("Removed {id}");
            Ok(true)
        }
        Command::ClearChecked => {
            let removed = list.clear_checked_items();
            println!("Removed {removed} checked items");
            Ok(removed > 0)
        }
        Command::ClearAll => {
            list.clear_all_items();
            println!("Cleared the grocery list");
            Ok(true)
        }
    }
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let config = AppConfig::from_env();
    init_logging(config.log_format);

    let cli = Cli::parse();

    // Parsing needs no stored state
    if let Command::Parse { line } = &cli.command {
        return print_parsed(line);
    }

    let store = JsonFileStore::open(&config.storage_dir)
        .with_context(|| format!("Failed to open storage at {}", config.storage_dir.display()))?;
    let mut list = load_list(&store);
    info!(items = list.len(), "Grocery list ready");

    if run_list_command(&mut list, cli.command)? {
        store
            .save_grocery_list(&list)
            .context("Failed to save grocery list")?;
    }
    Ok(())
}
