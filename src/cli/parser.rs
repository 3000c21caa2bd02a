use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for refectory
#[derive(Parser)]
#[command(
    name = "refectory",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track refectory entry/exit scans and aggregate meal statistics over a spreadsheet-style store",
    long_about = None
)]
pub struct Cli {
    /// Override the store directory (useful for tests or custom deployments)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Pin the clock to "DD/MM/YY HH:mm" (deterministic runs)
    #[arg(global = true, long = "at", hide = true)]
    pub at: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the local store skeleton
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Register scan events: each id closes today's open entry or opens a new one
    Scan {
        /// Collaborator identifiers, in scan order
        #[arg(required = true)]
        ids: Vec<String>,

        /// Target sheet or range (defaults to the records sheet)
        #[arg(long)]
        range: Option<String>,
    },

    /// List time records
    Records {
        /// Only records of this sector
        #[arg(long, group = "filter")]
        sector: Option<String>,

        /// Only records of this day (DD/MM/YY)
        #[arg(long, group = "filter")]
        day: Option<String>,

        /// Only records whose entry falls in this turn
        #[arg(long, group = "filter")]
        turn: Option<String>,
    },

    /// Meal-count reports for a month (1-12)
    Meals {
        month: u32,

        /// Restrict to entries inside this turn
        #[arg(long)]
        turn: Option<String>,

        /// Count for one sector
        #[arg(long, group = "view")]
        sector: Option<String>,

        /// Count for one collaborator id
        #[arg(long, group = "view")]
        collaborator: Option<String>,

        /// Counts for every collaborator
        #[arg(long, group = "view")]
        collaborators: bool,

        /// Counts per collaborator type
        #[arg(long, group = "view")]
        types: bool,

        /// Only the five sectors that ate the most
        #[arg(long, group = "view")]
        top: bool,
    },

    /// Average meal duration per sector for a month (1-12)
    Mealtime {
        month: u32,

        /// Restrict to entries inside this turn
        #[arg(long)]
        turn: Option<String>,
    },

    /// Manage the collaborator roster
    Collaborators {
        #[command(subcommand)]
        action: CollaboratorsAction,
    },

    /// Export a month of records to CSV / JSON / XLSX
    Export {
        month: u32,

        #[arg(long)]
        turn: Option<String>,

        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file path
        #[arg(long)]
        out: String,
    },

    /// Archive the local store directory to a .tar.gz file
    Backup {
        /// Destination archive path
        dest: String,

        #[arg(long, help = "Overwrite the destination if it exists")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum CollaboratorsAction {
    /// List the roster, optionally by sector
    List {
        #[arg(long)]
        sector: Option<String>,
    },

    /// Show one collaborator by id
    Get { id: String },

    /// Register a collaborator
    Add {
        id: String,
        name: String,
        sector: String,
        /// One of: resident, visitor, outsourced, staff
        kind: String,
    },
}
