use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;

use ordr::domain::Order;
use ordr::store::{CsvStore, next_id};
use ordr::validation::{validate_draft, validate_patch};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ordr")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("ordr.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() || config.debug {
        println!("{}", "Verbose mode enabled".yellow());
    }

    let store = CsvStore::new(config.orders_path());

    match &cli.command {
        // Default: list all orders
        None => handle_list(&store, None, false),
        Some(Commands::List { status, json }) => handle_list(&store, status.as_deref(), *json),
        Some(Commands::Add {
            customer,
            item,
            qty,
            status,
        }) => handle_add(&store, customer, item, *qty, status.as_deref()),
        Some(Commands::Edit {
            id,
            customer,
            item,
            qty,
            status,
        }) => handle_edit(&store, *id, customer.as_deref(), item.as_deref(), *qty, status.as_deref()),
        Some(Commands::Remove { id }) => handle_remove(&store, *id),
        Some(Commands::Show { id, json }) => handle_show(&store, *id, *json),
    }
}

fn handle_list(store: &CsvStore, status: Option<&str>, json: bool) -> Result<()> {
    info!("Listing orders - status filter: {:?}", status);

    let mut orders = store.read_all().context("Failed to load orders")?;
    if let Some(wanted) = status {
        orders.retain(|o| o.status == wanted);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&orders)?);
        return Ok(());
    }

    if orders.is_empty() {
        match status {
            Some(s) => println!("No orders with status {:?}.", s),
            None => println!("No orders."),
        }
        return Ok(());
    }

    print_table(&orders);
    println!("{} order(s)", orders.len());
    Ok(())
}

fn handle_add(store: &CsvStore, customer: &str, item: &str, qty: u32, status: Option<&str>) -> Result<()> {
    info!("Adding order for customer: {}", customer);

    let draft = validate_draft(customer, item, qty, status)?;

    let orders = store.read_all().context("Failed to load orders")?;
    let order = Order::create(next_id(&orders), draft);
    store.append(&order).context("Failed to add order")?;

    println!("{} #{} {} x{} for {}", "Added:".green(), order.id, order.item, order.qty, order.customer);
    Ok(())
}

fn handle_edit(
    store: &CsvStore,
    id: u64,
    customer: Option<&str>,
    item: Option<&str>,
    qty: Option<u32>,
    status: Option<&str>,
) -> Result<()> {
    info!("Editing order: {}", id);

    let patch = validate_patch(customer, item, qty, status)?;

    match store.update(id, &patch).context("Failed to update order")? {
        Some(order) => {
            println!("{} #{}", "Updated:".green(), order.id);
            print_order(&order);
            Ok(())
        }
        None => eyre::bail!("Order not found: {}", id),
    }
}

fn handle_remove(store: &CsvStore, id: u64) -> Result<()> {
    info!("Removing order: {}", id);

    if store.delete(id).context("Failed to delete order")? {
        println!("{} #{}", "Removed:".red(), id);
        Ok(())
    } else {
        eyre::bail!("Order not found: {}", id)
    }
}

fn handle_show(store: &CsvStore, id: u64, json: bool) -> Result<()> {
    info!("Showing order: {}", id);

    let orders = store.read_all().context("Failed to load orders")?;
    let Some(order) = orders.iter().find(|o| o.id == id) else {
        eyre::bail!("Order not found: {}", id)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(order)?);
    } else {
        print_order(order);
    }
    Ok(())
}

fn print_table(orders: &[Order]) {
    let customer_width = orders.iter().map(|o| o.customer.len()).max().unwrap_or(0).max("customer".len());
    let item_width = orders.iter().map(|o| o.item.len()).max().unwrap_or(0).max("item".len());
    let status_width = orders.iter().map(|o| o.status.len()).max().unwrap_or(0).max("status".len());

    // Pad before colorizing; escape codes would otherwise count toward width
    let header = format!(
        "{:>4}  {:customer_width$}  {:item_width$}  {:>4}  {:status_width$}  {}",
        "id", "customer", "item", "qty", "status", "created",
    );
    println!("{}", header.bold());

    for order in orders {
        let status_cell = format!("{:status_width$}", order.status);
        println!(
            "{:>4}  {:customer_width$}  {:item_width$}  {:>4}  {}  {}",
            order.id,
            order.customer,
            order.item,
            order.qty,
            colorize_status(&status_cell),
            order.created_at,
        );
    }
}

fn print_order(order: &Order) {
    println!("  id:       {}", order.id);
    println!("  customer: {}", order.customer);
    println!("  item:     {}", order.item);
    println!("  qty:      {}", order.qty);
    println!("  status:   {}", colorize_status(&order.status));
    println!("  created:  {}", order.created_at);
}

fn colorize_status(status: &str) -> ColoredString {
    // May receive a right-padded cell; match on the trimmed value
    match status.trim_end() {
        "processing" => status.yellow(),
        "shipped" => status.cyan(),
        "delivered" => status.green(),
        _ => status.normal(),
    }
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config)?;

    Ok(())
}
