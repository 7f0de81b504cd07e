//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: show all orders, optionally filtered by status
//! - add: create a new order
//! - edit: update fields of an existing order
//! - remove: delete an order
//! - show: display a single order

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ordr - a CSV-backed order management tool
#[derive(Parser, Debug)]
#[command(name = "ordr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List orders (the default when no subcommand is given)
    List {
        /// Show only orders with this exact status
        #[arg(short, long)]
        status: Option<String>,

        /// Print the collection as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Add a new order
    Add {
        /// Customer name
        customer: String,

        /// Ordered item
        item: String,

        /// Quantity ordered
        #[arg(short, long, default_value_t = 1)]
        qty: u32,

        /// Initial status (defaults to "processing")
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Edit fields of an existing order
    Edit {
        /// Order id to edit
        id: u64,

        /// New customer name
        #[arg(long)]
        customer: Option<String>,

        /// New item
        #[arg(long)]
        item: Option<String>,

        /// New quantity
        #[arg(short, long)]
        qty: Option<u32>,

        /// New status
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Remove an order
    Remove {
        /// Order id to remove
        id: u64,
    },

    /// Show a single order
    Show {
        /// Order id to show
        id: u64,

        /// Print the order as JSON
        #[arg(long)]
        json: bool,
    },
}
