use crate::export::ExportFormat;
use crate::store::TableKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for farmledger
#[derive(Parser)]
#[command(
    name = "farmledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Farm operations record keeper: workers and wages, tools and storage places, bale and cold-storage inventory",
    long_about = None
)]
pub struct Cli {
    /// Override workbook path (useful for tests or a second farm)
    #[arg(global = true, long = "workbook")]
    pub workbook: Option<String>,

    /// Application password (or FARMLEDGER_PASSWORD)
    #[arg(global = true, long = "password")]
    pub password: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the workbook and configuration
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing configuration fields with defaults")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the workbook file (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending workbook migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check workbook integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the workbook using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show workbook information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage workers
    Worker {
        #[command(subcommand)]
        action: WorkerAction,
    },

    /// Manage work types
    WorkType {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Manage storage places
    Place {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Daily work logs and wage payments
    Work {
        #[command(subcommand)]
        action: WorkAction,
    },

    /// Tools, their status and their movements between places
    Tool {
        #[command(subcommand)]
        action: ToolAction,
    },

    /// Chekkulu (harvested bale lots)
    Chekkulu {
        #[command(subcommand)]
        action: ChekkuluAction,
    },

    /// Cold storage inventory
    Cold {
        #[command(subcommand)]
        action: ColdAction,
    },

    /// Show workers, tools needing attention and outstanding wages
    Dashboard {
        #[arg(long, help = "Print the dashboard as JSON")]
        json: bool,
    },

    /// Import sheets from <sheet>.csv files (full overwrite of each table found)
    Import {
        #[arg(long, value_name = "DIR")]
        dir: String,
    },

    /// Export one table
    Export {
        #[arg(long, value_enum)]
        table: TableKind,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the workbook
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum WorkerAction {
    /// Add a worker
    Add {
        name: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, help = "Default daily wage (config default_daily_wage if omitted)")]
        wage: Option<i64>,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Change a worker's details (the id never changes)
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        wage: Option<i64>,

        #[arg(long, conflicts_with = "inactive", help = "Mark the worker active")]
        active: bool,

        #[arg(long, help = "Mark the worker inactive")]
        inactive: bool,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List workers
    List {
        #[arg(long, help = "Include inactive workers")]
        all: bool,
    },
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// Add an entry
    Add { name: String },

    /// List entries
    List,
}

#[derive(Subcommand)]
pub enum WorkAction {
    /// Log a day (or half day) of work
    Add {
        #[arg(long, help = "Worker id (active workers only)")]
        worker: String,

        #[arg(long = "type", help = "Work type id")]
        work_type: String,

        #[arg(long, help = "Date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long, default_value = "FULL", help = "FULL or HALF")]
        unit: String,

        #[arg(long, help = "Daily rate (worker's default wage if omitted)")]
        rate: Option<i64>,

        #[arg(long, default_value_t = 0, help = "Amount paid now")]
        paid: i64,

        #[arg(long, default_value = "cash", help = "cash or UPI")]
        method: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Record a payment against a work log
    Pay {
        id: String,

        amount: i64,

        #[arg(long, default_value = "cash", help = "cash or UPI")]
        method: String,
    },

    /// List work logs
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range (A:B)")]
        period: Option<String>,

        #[arg(long, help = "Worker id or part of the name")]
        worker: Option<String>,

        #[arg(long, help = "UNPAID, PARTIAL or PAID")]
        status: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ToolAction {
    /// Add a tool at a storage place
    Add {
        name: String,

        #[arg(long = "type", default_value = "")]
        tool_type: String,

        #[arg(long, default_value_t = 1)]
        quantity: i64,

        #[arg(long, default_value = "OK", help = "OK, NEEDS_REPAIR or BROKEN")]
        status: String,

        #[arg(long, help = "Storage place id")]
        place: String,

        #[arg(long, help = "Date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Change a tool's status
    Status {
        id: String,

        #[arg(help = "OK, NEEDS_REPAIR or BROKEN")]
        status: String,

        #[arg(long, help = "Date (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Move a tool to another storage place
    Move {
        id: String,

        #[arg(long, help = "Destination place id")]
        to: String,

        #[arg(long, help = "Date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "by", default_value = "")]
        moved_by: String,

        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List tools
    List {
        #[arg(long = "type")]
        tool_type: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long, help = "Storage place id")]
        place: Option<String>,
    },

    /// Movement history, newest first
    History {
        #[arg(help = "Tool id (all tools if omitted)")]
        id: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ChekkuluAction {
    /// Add a chekkulu record
    Add {
        #[arg(long, help = "Date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long)]
        rate: f64,

        #[arg(long)]
        weight: f64,

        #[arg(long, default_value = "")]
        tbgr: String,

        #[arg(long = "type", default_value = "")]
        kind: String,
    },

    /// List chekkulu records
    List {
        #[arg(long, short)]
        period: Option<String>,

        #[arg(long)]
        tbgr: Option<String>,

        #[arg(long = "type")]
        kind: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ColdAction {
    /// Put an item into cold storage
    Add {
        #[arg(long, help = "Date stored (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long, default_value_t = 0)]
        count: i64,

        #[arg(long, default_value_t = 0.0)]
        weight: f64,

        #[arg(long, default_value = "")]
        serial: String,

        #[arg(long = "type", default_value = "")]
        kind: String,
    },

    /// Mark an item as taken out of cold storage
    Remove {
        id: String,

        #[arg(long, help = "Removal date (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// List cold storage items
    List {
        #[arg(long, help = "Stored-date period")]
        stored: Option<String>,

        #[arg(long, help = "Removed-date period")]
        removed: Option<String>,

        #[arg(long)]
        serial: Option<String>,

        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(long, help = "Only items still in storage")]
        active: bool,
    },
}
