use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rFleetLog
#[derive(Parser)]
#[command(
    name = "rfleetlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track drivers' departures and returns: CSV roster, movement history and a small JSON web surface",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory holding the tables (useful for tests)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Free-text context of a movement, shared by `register` and `edit`.
#[derive(Args, Debug, Clone, Default)]
pub struct ContextArgs {
    #[arg(long = "destination", help = "Destination (destino)")]
    pub destination: Option<String>,

    #[arg(long = "union-rep", help = "Union representative (dirigencia)")]
    pub union_rep: Option<String>,

    #[arg(long = "rationale", help = "Backing rationale (sustento)")]
    pub rationale: Option<String>,

    #[arg(
        long = "transport-request",
        help = "Transport request reference (solicitud_movilidad)"
    )]
    pub transport_request: Option<String>,

    #[arg(long = "directed-by", help = "Who directs the movement (quien_dirige)")]
    pub directed_by: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration, data directory and empty tables
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Show the roster or add a driver to it
    Roster {
        #[arg(long = "add", value_name = "NAME", help = "Add a driver (status: disponible)")]
        add: Option<String>,

        #[arg(long = "id", requires = "add", help = "Id of the new driver (default: next number)")]
        id: Option<String>,
    },

    /// Register a departure or return
    Register {
        /// Driver name, as written in the roster
        name: String,

        /// Action; the departure action marks the driver busy, any other available
        action: String,

        /// Event time (HH:MM:SS); used only together with --date
        #[arg(long = "time")]
        time: Option<String>,

        /// Event date (YYYY-MM-DD); used only together with --time
        #[arg(long = "date")]
        date: Option<String>,

        #[command(flatten)]
        context: ContextArgs,
    },

    /// List roster and history
    List {
        #[arg(long = "roster", help = "Show only the roster")]
        roster: bool,

        #[arg(long = "events", help = "Show only the history")]
        events: bool,
    },

    /// Edit the event at a position (fields not given are kept)
    Edit {
        /// Position of the event (as shown by `list`)
        index: usize,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "action")]
        action: Option<String>,

        #[arg(long = "time", help = "Event time (HH:MM:SS)")]
        time: Option<String>,

        #[arg(long = "date", help = "Event date (YYYY-MM-DD)")]
        date: Option<String>,

        #[command(flatten)]
        context: ContextArgs,
    },

    /// Delete the event at a position
    Del {
        /// Position of the event (as shown by `list`)
        index: usize,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Copy the tables to a backup location
    Backup {
        #[arg(long, value_name = "PATH", help = "Destination directory (or .zip with --compress)")]
        file: String,

        #[arg(long, help = "Write a single zip archive")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite existing backup files")]
        force: bool,
    },

    /// Export the history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, start:end)"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log")]
        print: bool,
    },

    /// Start the web server
    Serve {
        #[arg(long = "bind", value_name = "ADDR", help = "Listen address (default from config)")]
        bind: Option<String>,
    },
}
