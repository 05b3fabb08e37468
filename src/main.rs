// cinelist - tell your watch-list what to do in plain words
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use anyhow::{Context, Result};
use cinelist_lib::{
    core::{
        AddOutcome, BulkTools, LibraryTools, MaintenanceTools, PickStrategy, Searcher, SortOrder,
        ViewingTools,
    },
    interpreter::{looks_like_multi_action, normalize_title, PlanBuilder},
    Catalog, Config, Database, Orchestrator, WatchStatus,
};
use std::env;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    init_logging(&config);

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let args = &args[1..];
    if route(args) == Route::Interpret {
        return handle_run(&config, args).await;
    }

    let command = &args[0];

    match command.as_str() {
        "run" => handle_run(&config, &args[1..]).await,
        "add" => handle_add(&config, &args[1..]).await,
        "remove" | "seen" | "dislike" => handle_single(&config, command, &args[1..]).await,
        "status" => handle_status(&config, &args[1..]).await,
        "show" => handle_show(&config, &args[1..]).await,
        "add-many" => handle_add_many(&config, &args[1..]).await,
        "remove-many" => handle_remove_many(&config, &args[1..]).await,
        "set-many" => handle_set_many(&config, &args[1..]).await,
        "list" => handle_list(&config, &args[1..]).await,
        "sorted" => handle_sorted(&config, &args[1..]).await,
        "stats" => handle_stats(&config).await,
        "rename" => handle_rename(&config, &args[1..]).await,
        "prune" => handle_prune(&config, &args[1..]).await,
        "next" => handle_next(&config, &args[1..]).await,
        "search" => handle_search(&config, &args[1..]).await,
        "export" => handle_export(&config).await,
        "version" | "-v" | "--version" => {
            println!("cinelist v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    }
}

/// Commands that take a single title
const TITLE_COMMANDS: &[&str] = &["add", "remove", "seen", "dislike", "status"];

const OTHER_COMMANDS: &[&str] = &[
    "run", "show", "add-many", "remove-many", "set-many", "list", "sorted", "stats", "rename",
    "prune", "next", "search", "export", "version", "-v", "--version", "help", "-h", "--help",
];

#[derive(Debug, PartialEq, Eq)]
enum Route {
    /// Hand the whole command line to the interpreter
    Interpret,
    /// Dispatch on the first word
    Command,
}

/// Decide whether a command line is really a free-form instruction
///
/// Unknown first words go to the interpreter when the text reads like
/// several actions. So do title commands, as long as the interpreter finds
/// more than one action: "add Pride and Prejudice" stays a single title.
fn route(args: &[String]) -> Route {
    let Some(first) = args.first() else {
        return Route::Command;
    };

    let text = args.join(" ");
    if !looks_like_multi_action(&text) {
        return Route::Command;
    }

    let first = first.as_str();
    if TITLE_COMMANDS.contains(&first) {
        if PlanBuilder::build(&text).len() > 1 {
            Route::Interpret
        } else {
            Route::Command
        }
    } else if OTHER_COMMANDS.contains(&first) {
        Route::Command
    } else {
        Route::Interpret
    }
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn handle_run(config: &Config, args: &[String]) -> Result<()> {
    let instruction = args.join(" ");
    let orchestrator = Orchestrator::new(get_catalog(config).await?);

    info!(instruction = %instruction, "Interpreting instruction");
    println!("{}", orchestrator.interpret_and_execute(&instruction).await);

    Ok(())
}

async fn handle_add(config: &Config, args: &[String]) -> Result<()> {
    if args.is_empty() {
        eprintln!("Error: No title provided");
        return Ok(());
    }

    let tools = LibraryTools::new(get_catalog(config).await?);

    match tools.add_to_wishlist(&args.join(" ")).await {
        Ok(AddOutcome::Added(title)) => println!("Added to wishlist: {}", title),
        Ok(AddOutcome::AddedMany(n)) => println!("Added {} title(s) to wishlist", n),
        Err(e) => eprintln!("Error: {}", e.user_message()),
    }

    Ok(())
}

async fn handle_single(config: &Config, command: &str, args: &[String]) -> Result<()> {
    if args.is_empty() {
        eprintln!("Error: No title provided");
        return Ok(());
    }

    let tools = LibraryTools::new(get_catalog(config).await?);
    let title = args.join(" ");

    let (result, status) = match command {
        "seen" => (tools.mark_seen(&title).await, WatchStatus::Seen),
        "dislike" => (tools.mark_disliked(&title).await, WatchStatus::Disliked),
        _ => (tools.remove_from_wishlist(&title).await, WatchStatus::Disliked),
    };

    match result {
        Ok(title) => println!("{} → {}", title, status),
        Err(e) => eprintln!("Error: {}", e.user_message()),
    }

    Ok(())
}

async fn handle_status(config: &Config, args: &[String]) -> Result<()> {
    // Last word is the status, the rest is the title
    let Some((status, title)) = args.split_last() else {
        eprintln!("Usage: cinelist status <title> <status>");
        return Ok(());
    };

    let tools = LibraryTools::new(get_catalog(config).await?);

    match tools.set_status(&title.join(" "), status).await {
        Ok((title, status)) => println!("{} → {}", title, status),
        Err(e) => eprintln!("Error: {}", e.user_message()),
    }

    Ok(())
}

async fn handle_show(config: &Config, args: &[String]) -> Result<()> {
    if args.is_empty() {
        eprintln!("Error: No title provided");
        return Ok(());
    }

    let db = get_database(config).await?;

    match db.require_entry(&normalize_title(&args.join(" "))).await {
        Ok(entry) => println!(
            "{} ({}, updated {})",
            entry.title, entry.status, entry.updated_at
        ),
        Err(e) => eprintln!("Error: {}", e.user_message()),
    }

    Ok(())
}

async fn handle_add_many(config: &Config, args: &[String]) -> Result<()> {
    let tools = BulkTools::new(get_catalog(config).await?);
    let n = tools.add_many(&args.join(" ")).await?;

    println!("Added {} title(s) to wishlist", n);
    Ok(())
}

async fn handle_remove_many(config: &Config, args: &[String]) -> Result<()> {
    let tools = BulkTools::new(get_catalog(config).await?);
    let n = tools.remove_many(&args.join(" ")).await?;

    println!("Removed {} title(s) from wishlist", n);
    Ok(())
}

async fn handle_set_many(config: &Config, args: &[String]) -> Result<()> {
    let Some((status, titles)) = args.split_first() else {
        eprintln!("Usage: cinelist set-many <status> <title, title, ...>");
        return Ok(());
    };

    let tools = BulkTools::new(get_catalog(config).await?);
    let (n, status) = tools.set_many_status(&titles.join(" "), status).await?;

    println!("Set {} title(s) to {}", n, status);
    Ok(())
}

async fn handle_list(config: &Config, args: &[String]) -> Result<()> {
    let tools = LibraryTools::new(get_catalog(config).await?);

    let statuses: Vec<String> = match args.first() {
        Some(status) => vec![status.clone()],
        None => WatchStatus::ALL.iter().map(|s| s.to_string()).collect(),
    };

    for status in statuses {
        let titles = tools.list_by_status(&status).await?;
        print_titles(&status, &titles);
    }

    Ok(())
}

async fn handle_sorted(config: &Config, args: &[String]) -> Result<()> {
    let status = args.first().map(String::as_str).unwrap_or("wanted");
    let order = args.get(1).map(|o| SortOrder::parse(o)).unwrap_or_default();

    let tools = MaintenanceTools::new(get_catalog(config).await?);
    let titles = tools.sorted_by_status(status, order).await?;

    print_titles(status, &titles);
    Ok(())
}

async fn handle_stats(config: &Config) -> Result<()> {
    let db = get_database(config).await?;
    let stats = db.stats().await?;

    println!("\ncinelist Status");
    println!("{}", "=".repeat(60));
    println!("\nCatalog:");
    println!("  Total:    {}", stats.total_entries);
    println!("  Wanted:   {}", stats.wanted);
    println!("  Seen:     {}", stats.seen);
    println!("  Disliked: {}", stats.disliked);
    println!("\nStorage:");
    println!("  Path:        {}", db.path().display());
    println!("  Connections: {} ({} idle)", stats.pool_size, stats.idle_connections);
    println!("{}", "=".repeat(60));

    Ok(())
}

async fn handle_rename(config: &Config, args: &[String]) -> Result<()> {
    if args.len() != 2 {
        eprintln!("Usage: cinelist rename \"<old title>\" \"<new title>\"");
        return Ok(());
    }

    let tools = MaintenanceTools::new(get_catalog(config).await?);

    match tools.rename(&args[0], &args[1]).await {
        Ok(status) => println!("Renamed {} → {} ({})", args[0], args[1], status),
        Err(e) => eprintln!("Error: {}", e.user_message()),
    }

    Ok(())
}

async fn handle_prune(config: &Config, args: &[String]) -> Result<()> {
    let status = args.first().map(String::as_str).unwrap_or("wanted");

    let tools = MaintenanceTools::new(get_catalog(config).await?);
    let pruned = tools.prune_blanks(status).await?;

    println!("Pruned {} blank title(s)", pruned);
    Ok(())
}

async fn handle_next(config: &Config, args: &[String]) -> Result<()> {
    let strategy = args
        .first()
        .map(|s| PickStrategy::parse(s))
        .unwrap_or(config.pick_strategy);

    let tools = ViewingTools::new(get_catalog(config).await?);

    match tools.pick_next(strategy).await? {
        Some(title) => println!("Up next: {}", title),
        None => println!("Your wishlist is empty."),
    }

    Ok(())
}

async fn handle_search(config: &Config, args: &[String]) -> Result<()> {
    if args.is_empty() {
        eprintln!("Error: No search query provided");
        return Ok(());
    }

    let query = args.join(" ");
    let searcher = Searcher::new(get_catalog(config).await?);
    let hits = searcher.search(&query, config.search_limit).await?;

    if hits.is_empty() {
        println!("No titles found matching '{}'", query);
    } else {
        println!("\nFound {} title(s) matching '{}':", hits.len(), query);
        println!("{}", "=".repeat(60));
        for (i, hit) in hits.iter().enumerate() {
            println!("{:3}. {} ({})", i + 1, hit.title, hit.status);
        }
        println!("{}", "=".repeat(60));
    }

    Ok(())
}

async fn handle_export(config: &Config) -> Result<()> {
    let db = get_database(config).await?;
    let entries = db.all_entries().await?;

    let json = serde_json::to_string_pretty(&entries).context("Failed to serialize catalog")?;
    println!("{}", json);

    Ok(())
}

fn print_titles(status: &str, titles: &[String]) {
    println!("\n{} ({}):", status, titles.len());
    for (i, title) in titles.iter().enumerate() {
        println!("{:3}. {}", i + 1, title);
    }
}

async fn get_database(config: &Config) -> Result<Database> {
    Database::new(&config.storage_path)
        .await
        .with_context(|| format!("Failed to open catalog at {}", config.storage_path.display()))
}

async fn get_catalog(config: &Config) -> Result<Arc<dyn Catalog>> {
    let db: Arc<dyn Catalog> = Arc::new(get_database(config).await?);
    Ok(db)
}

fn print_usage() {
    println!(
        r#"cinelist v{} - Tell your watch-list what to do in plain words

USAGE:
    cinelist <COMMAND> [ARGS]
    cinelist <instruction>

COMMANDS:
    run <instruction>          Interpret and apply a free-form instruction
    add <title>                Add a title to the wishlist
    remove <title>             Take a title off the wishlist
    seen <title>               Mark a title as seen
    dislike <title>            Mark a title as disliked
    status <title> <status>    Set any status on a title
    show <title>               Show a title's status
    add-many <titles>          Add comma-separated titles
    remove-many <titles>       Remove comma-separated titles
    set-many <status> <titles> Set a status on comma-separated titles
    list [status]              List titles (default: every status)
    sorted [status] [asc|desc] List titles alphabetically
    stats                      Show catalog statistics
    rename <old> <new>         Rename a title, keeping its status
    prune [status]             Drop blank titles from a list
    next [first|random]        Pick what to watch next
    search <query>             Fuzzy search titles
    export                     Dump the catalog as JSON
    version                    Show version
    help                       Show this help

EXAMPLES:
    cinelist run "add Heat and mark Alien as seen"
    cinelist ajoute « Amélie » et retire Titanic de ma liste
    cinelist set-many seen "Heat, Alien"
    cinelist next first

Storage defaults to ~/.cinelist/catalog.db (override with CINELIST_STORAGE).
"#,
        env!("CARGO_PKG_VERSION")
    );
}
