use crate::export::{ExportEntity, ExportFormat};
use clap::{Parser, Subcommand};

/// Command-line interface definition for ledcat
/// CLI application to catalog LED panels, cabinets and projects
#[derive(Parser)]
#[command(
    name = "ledcat",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple LED equipment catalog CLI: panels, cabinets and installation projects",
    long_about = None
)]
pub struct Cli {
    /// Override data directory (useful for tests or custom locations)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Override storage backend: json or sqlite
    #[arg(global = true, long = "storage")]
    pub storage: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory and configuration
    Init,

    /// Manage the configuration file (view, check or migrate)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,
    },

    /// Manage the catalog storage (migrations, integrity checks, etc.)
    Store {
        #[arg(long = "migrate", help = "Rewrite persisted documents at the current schema version")]
        migrate: bool,

        #[arg(long = "check", help = "Check that all persisted documents parse")]
        check: bool,

        #[arg(long = "info", help = "Show storage information")]
        info: bool,
    },

    /// Manage LED panels
    Panel {
        #[command(subcommand)]
        cmd: PanelCmd,
    },

    /// Manage LED cabinets
    Cabinet {
        #[command(subcommand)]
        cmd: CabinetCmd,
    },

    /// Manage installation projects
    Project {
        #[command(subcommand)]
        cmd: ProjectCmd,
    },

    /// Export a catalog collection
    Export {
        /// Collection to export
        #[arg(long, value_enum)]
        entity: ExportEntity,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup archive of the catalog data
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        /// Overwrite an existing archive without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum PanelCmd {
    /// Add a new panel
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        manufacturer: String,
        #[arg(long)]
        model: String,
        /// Width in millimeters
        #[arg(long)]
        width: f64,
        /// Height in millimeters
        #[arg(long)]
        height: f64,
        /// Pixel pitch in millimeters
        #[arg(long)]
        pitch: f64,
        /// Power draw in watts
        #[arg(long)]
        power: f64,
        /// Input voltage (V)
        #[arg(long)]
        voltage: f64,
        /// Brightness in nits
        #[arg(long)]
        brightness: u32,
        /// Refresh rate in Hz
        #[arg(long)]
        refresh: u32,
        /// Minimum operating temperature (°C)
        #[arg(long = "temp-min", allow_hyphen_values = true)]
        temp_min: i32,
        /// Maximum operating temperature (°C)
        #[arg(long = "temp-max", allow_hyphen_values = true)]
        temp_max: i32,
        /// Ingress-protection rating, e.g. IP65
        #[arg(long = "ip")]
        ip_rating: String,
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long = "desc")]
        description: Option<String>,
    },

    /// Edit an existing panel (only the given fields change)
    Edit {
        /// Panel id (or unique prefix)
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        manufacturer: Option<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        width: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
        #[arg(long)]
        pitch: Option<f64>,
        #[arg(long)]
        power: Option<f64>,
        #[arg(long)]
        voltage: Option<f64>,
        #[arg(long)]
        brightness: Option<u32>,
        #[arg(long)]
        refresh: Option<u32>,
        #[arg(long = "temp-min", allow_hyphen_values = true)]
        temp_min: Option<i32>,
        #[arg(long = "temp-max", allow_hyphen_values = true)]
        temp_max: Option<i32>,
        #[arg(long = "ip")]
        ip_rating: Option<String>,
        #[arg(long)]
        weight: Option<f64>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long = "desc")]
        description: Option<String>,
    },

    /// Delete a panel by id
    Del {
        /// Panel id (or unique prefix)
        id: String,
    },

    /// Duplicate a panel under a "(Copy)" name
    Dup {
        /// Panel id (or unique prefix)
        id: String,
    },

    /// Show one panel with its computed metrics
    Show {
        /// Panel id (or unique prefix)
        id: String,
    },

    /// List panels
    List {
        /// Case-insensitive search over name, manufacturer and model
        #[arg(long)]
        search: Option<String>,

        /// Filter by exact manufacturer
        #[arg(long)]
        manufacturer: Option<String>,

        /// Sort key: name, manufacturer, pitch, power, created
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Print aggregate statistics
        #[arg(long)]
        stats: bool,
    },
}

#[derive(Subcommand)]
pub enum CabinetCmd {
    /// Add a new cabinet (pixel pitch is derived, never supplied)
    Add {
        #[arg(long)]
        name: String,
        /// Enclosure class: indoor or outdoor
        #[arg(long)]
        kind: String,
        /// Width in millimeters
        #[arg(long)]
        width: f64,
        /// Height in millimeters
        #[arg(long)]
        height: f64,
        /// Pixel resolution as WIDTHxHEIGHT, e.g. 192x192
        #[arg(long)]
        resolution: String,
        /// Power draw in watts
        #[arg(long)]
        power: f64,
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
        /// Supply voltage (V)
        #[arg(long)]
        voltage: f64,
        /// Supports dual voltage input
        #[arg(long = "dual-voltage")]
        dual_voltage: bool,
        #[arg(long)]
        brightness: Option<u32>,
        #[arg(long)]
        refresh: Option<u32>,
        #[arg(long = "power-factor")]
        power_factor: Option<f64>,
        #[arg(long = "desc")]
        description: Option<String>,
    },

    /// Edit an existing cabinet (pixel pitch is recomputed)
    Edit {
        /// Cabinet id (or unique prefix)
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        kind: Option<String>,
        #[arg(long)]
        width: Option<f64>,
        #[arg(long)]
        height: Option<f64>,
        /// Pixel resolution as WIDTHxHEIGHT
        #[arg(long)]
        resolution: Option<String>,
        #[arg(long)]
        power: Option<f64>,
        #[arg(long)]
        weight: Option<f64>,
        #[arg(long)]
        voltage: Option<f64>,
        #[arg(long = "dual-voltage")]
        dual_voltage: Option<bool>,
        #[arg(long)]
        brightness: Option<u32>,
        #[arg(long)]
        refresh: Option<u32>,
        #[arg(long = "power-factor")]
        power_factor: Option<f64>,
        #[arg(long = "desc")]
        description: Option<String>,
    },

    /// Delete a cabinet by id
    Del {
        /// Cabinet id (or unique prefix)
        id: String,
    },

    /// Show one cabinet
    Show {
        /// Cabinet id (or unique prefix)
        id: String,
    },

    /// List cabinets
    List {
        /// Case-insensitive search over the cabinet name
        #[arg(long)]
        search: Option<String>,

        /// Filter by kind: indoor, outdoor or all
        #[arg(long)]
        kind: Option<String>,

        /// Sort key: name, pitch, power, created
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Print aggregate statistics
        #[arg(long)]
        stats: bool,
    },
}

#[derive(Subcommand)]
pub enum ProjectCmd {
    /// Add a new project
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        client: String,
        /// Delivery date (YYYY-MM-DD), must not be in the past
        #[arg(long)]
        delivery: String,
        /// Status: planning, in-progress, delivered, cancelled
        #[arg(long, default_value = "planning")]
        status: String,
        #[arg(long = "desc")]
        description: Option<String>,
    },

    /// Edit an existing project
    Edit {
        /// Project id (or unique prefix)
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        client: Option<String>,
        /// Delivery date (YYYY-MM-DD)
        #[arg(long)]
        delivery: Option<String>,
        /// Status: planning, in-progress, delivered, cancelled
        #[arg(long)]
        status: Option<String>,
        #[arg(long = "desc")]
        description: Option<String>,
    },

    /// Delete a project by id
    Del {
        /// Project id (or unique prefix)
        id: String,
    },

    /// Show one project
    Show {
        /// Project id (or unique prefix)
        id: String,
    },

    /// List projects
    List {
        /// Case-insensitive search over name and client
        #[arg(long)]
        search: Option<String>,

        /// Filter by status: planning, in-progress, delivered, cancelled or all
        #[arg(long)]
        status: Option<String>,

        /// Sort key: name, client, delivery, created
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Print aggregate statistics
        #[arg(long)]
        stats: bool,
    },
}
