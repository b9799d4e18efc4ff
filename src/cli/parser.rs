use clap::{Parser, Subcommand};

/// Command-line interface definition for worktrack
/// CLI application to track work presence with SQLite
#[derive(Parser)]
#[command(
    name = "worktrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track your work presence and balance actual against expected working time",
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

    /// Start a new day
    Morning {
        /// Answer the same-day re-arrival question with yes
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Take a break from working
    Break,

    /// Resume working after a break
    #[command(alias = "continue")]
    Resume,

    /// End your work day
    Closing,

    /// Record a whole day of sick leave
    Sick {
        /// Date of the absence (YYYY-MM-DD, default today)
        date: Option<String>,
    },

    /// Record a whole day of vacation
    Vacation {
        /// Date of the absence (YYYY-MM-DD, default today)
        date: Option<String>,
    },

    /// Record a compensatory day off taken against accrued surplus
    Timeoff {
        /// Date of the absence (YYYY-MM-DD, default today)
        date: Option<String>,
    },

    /// Print daily statistics
    Day {
        /// Offset in days to the current one. Only negative values make sense here.
        #[arg(default_value_t = 0)]
        offset: i64,
    },

    /// Print weekly statistics
    Week {
        /// Offset in weeks to the current one. Only negative values make sense here.
        #[arg(default_value_t = 0)]
        offset: i64,
    },

    /// Print monthly statistics
    Month {
        /// Month to report (YYYY-MM, default current month)
        month: Option<String>,
    },

    /// Print yearly statistics for an inclusive month range
    Year {
        /// Year to report (default current year)
        year: Option<i32>,

        #[arg(long = "from", help = "First month of the range (1-12)")]
        from: Option<u32>,

        #[arg(long = "to", help = "Last month of the range (1-12)")]
        to: Option<u32>,
    },

    /// Print cumulative totals from the epoch through today
    Total,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },
}
