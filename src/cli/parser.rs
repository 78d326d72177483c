use clap::{Parser, Subcommand};

/// Command-line interface definition for ttracker
/// CLI application to track clients, projects, tasks and time entries
/// with SQLite
#[derive(Parser)]
#[command(
    name = "ttracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time tracking CLI: manage clients, projects, tasks and time entries in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (table listing, reset, info)
    Db {
        #[arg(long = "tables", help = "List all tables in the database")]
        tables: bool,

        #[arg(long = "reset", help = "Drop and recreate the whole schema")]
        reset: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(
            long = "force",
            short = 'f',
            help = "Skip the confirmation prompt (with --reset)"
        )]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage clients
    Client {
        #[command(subcommand)]
        action: ClientAction,
    },

    /// Manage projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Manage tasks
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Log and list time entries
    Entry {
        #[command(subcommand)]
        action: EntryAction,
    },
}

#[derive(Subcommand)]
pub enum ClientAction {
    /// Add a new client
    Add {
        /// Company name
        #[arg(long)]
        company: String,

        /// Contact person name
        #[arg(long)]
        name: String,

        /// Contact email address
        #[arg(long, default_value = "")]
        email: String,

        /// Contact phone number
        #[arg(long = "phone", default_value = "")]
        phone: String,

        /// Timezone: UTC offset (+02:00) or zone name (Europe/Paris)
        #[arg(long = "tz")]
        timezone: Option<String>,
    },

    /// List all clients
    List,

    /// Edit an existing client (only the given fields change)
    Edit {
        /// Client id
        id: i32,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long = "phone")]
        phone: Option<String>,

        #[arg(long = "tz")]
        timezone: Option<String>,
    },

    /// Delete a client by id
    Del {
        /// Client id
        id: i32,

        #[arg(long, short = 'f', help = "Skip the confirmation prompt")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Add a new project for a client
    Add {
        /// Owning client id
        #[arg(long)]
        client: i32,

        /// Project name
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Estimated effort in minutes
        #[arg(long = "estimate", default_value_t = 0)]
        estimated_min: i64,

        /// Hourly rate
        #[arg(long = "rate", default_value_t = 0.0)]
        hourly_rate: f64,

        /// Fixed price (alternative to an hourly rate)
        #[arg(long = "fixed", default_value_t = 0.0)]
        fixed_price: f64,

        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: String,
    },

    /// List projects, optionally for one client
    List {
        #[arg(long, help = "Only projects of this client id")]
        client: Option<i32>,
    },

    /// Edit an existing project (only the given fields change)
    Edit {
        /// Project id
        id: i32,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long = "estimate")]
        estimated_min: Option<i64>,

        #[arg(long = "rate")]
        hourly_rate: Option<f64>,

        #[arg(long = "fixed")]
        fixed_price: Option<f64>,

        #[arg(long, help = "Deadline (YYYY-MM-DD)")]
        deadline: Option<String>,
    },

    /// Delete a project by id
    Del {
        /// Project id
        id: i32,

        #[arg(long, short = 'f', help = "Skip the confirmation prompt")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a new task to a project
    Add {
        /// Owning project id
        #[arg(long)]
        project: i32,

        /// Task name
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Estimated effort in minutes
        #[arg(long = "estimate", default_value_t = 0)]
        estimated_min: i64,

        /// Status label (defaults to the configured one)
        #[arg(long)]
        status: Option<String>,

        /// Type label (defaults to the configured one)
        #[arg(long = "type")]
        task_type: Option<String>,
    },

    /// List tasks, optionally for one project
    List {
        #[arg(long, help = "Only tasks of this project id")]
        project: Option<i32>,
    },

    /// Change the status of a task
    Status {
        /// Task id
        id: i32,

        /// New status label
        label: String,
    },

    /// Delete a task by id
    Del {
        /// Task id
        id: i32,

        #[arg(long, short = 'f', help = "Skip the confirmation prompt")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum EntryAction {
    /// Log time against a task or a project
    Add {
        /// Task id (conflicts with --project)
        #[arg(long, conflicts_with = "project")]
        task: Option<i32>,

        /// Project id (conflicts with --task)
        #[arg(long)]
        project: Option<i32>,

        /// Duration in minutes
        #[arg(long)]
        minutes: i64,

        /// Mark the entry billable (project entries only)
        #[arg(long)]
        billable: bool,
    },

    /// List logged entries
    List {
        #[arg(long, conflicts_with = "project", help = "Only entries of this task id")]
        task: Option<i32>,

        #[arg(long, help = "Only entries of this project id")]
        project: Option<i32>,
    },
}
