use clap::{CommandFactory, Parser, Subcommand};
use roster::model::StudentId;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

const ABOUT: &str = "Manage a school's student roster from the terminal";

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    bin_name = "roster",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = ABOUT, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the roster and its config
    #[arg(
        long,
        global = true,
        env = "ROSTER_DATA_DIR",
        value_name = "DIR",
        help_heading = "Options"
    )]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Core,
    Student,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Core => "Core Commands:",
            CommandGroup::Student => "Per-Student Commands:",
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "add" => Some(CommandGroup::Core),
            "view" | "edit" | "delete" => Some(CommandGroup::Student),
            "export" | "print" => Some(CommandGroup::Data),
            "config" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Core,
            CommandGroup::Student,
            CommandGroup::Data,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("roster {version}\n"));
    output.push_str(ABOUT);
    output.push_str("\n\n");
    output.push_str("Usage: roster [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --data-dir <DIR>  Directory holding the roster [env: ROSTER_DATA_DIR]\n");
    output.push_str("  -v, --verbose         Verbose output\n");
    output.push_str("      --no-color        Disable colored output\n");
    output.push_str("  -h, --help            Print help\n");
    output.push_str("  -V, --version         Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints clap's help for one subcommand, falling back to the grouped help.
pub fn print_subcommand_help(command: &Option<Commands>) {
    let name = match command {
        Some(Commands::Core(c)) => match c {
            CoreCommands::List { .. } => "list",
            CoreCommands::Add { .. } => "add",
        },
        Some(Commands::Student(c)) => match c {
            StudentCommands::View { .. } => "view",
            StudentCommands::Edit { .. } => "edit",
            StudentCommands::Delete { .. } => "delete",
        },
        Some(Commands::Data(c)) => match c {
            DataCommands::Export { .. } => "export",
            DataCommands::Print { .. } => "print",
        },
        Some(Commands::Misc(MiscCommands::Config { .. })) => "config",
        None => {
            print_grouped_help();
            return;
        }
    };

    let mut cmd = Cli::command();
    match cmd.find_subcommand_mut(name) {
        Some(sub) => print!("{}", sub.render_help()),
        None => print_grouped_help(),
    }
}

/// Starts `env_logger` on stderr. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Student(StudentCommands),

    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// List students (filters combine with AND)
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Case-insensitive match on name, email or id
        #[arg(short, long)]
        search: Option<String>,

        /// Exact grade, e.g. "Grade 10"
        #[arg(short, long)]
        grade: Option<String>,

        /// Exact status, e.g. "Active"
        #[arg(long)]
        status: Option<String>,
    },

    /// Add a student
    #[command(alias = "a", display_order = 2)]
    Add {
        /// Full name (at least 2 characters)
        #[arg(short, long)]
        name: String,

        /// Email address (must be unique)
        #[arg(short, long)]
        email: String,

        /// Grade level: "Grade 9" to "Grade 12"
        #[arg(short, long)]
        grade: String,

        #[arg(long, default_value = "")]
        phone: String,

        /// Date of birth, e.g. 2008-05-15
        #[arg(long = "dob", default_value = "")]
        date_of_birth: String,

        #[arg(long)]
        address: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum StudentCommands {
    /// Show every field of one student
    #[command(alias = "v", display_order = 10)]
    View { id: StudentId },

    /// Change a student's name, email, grade or status
    #[command(alias = "e", display_order = 11)]
    Edit {
        id: StudentId,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        #[arg(short, long)]
        grade: Option<String>,

        /// Active, Inactive, Graduated or any other label
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Delete a student permanently
    #[command(alias = "rm", display_order = 12)]
    Delete {
        id: StudentId,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Export the roster as CSV
    #[command(display_order = 20)]
    Export {
        /// Output file (defaults to the configured export-file in the data dir)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Write a printable HTML report
    #[command(display_order = 21)]
    Print {
        /// Output file (defaults to the configured report-file in the data dir)
        #[arg(short, long, value_name = "FILE", conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Write the report to stdout instead of a file
        #[arg(long)]
        stdout: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (school-name, export-file, report-file, seed-sample-data)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
