use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_account_command, handle_add_command, handle_export_command, handle_history_command,
    handle_report_command, handle_view_command, resolve_session, AccountCommands, AddArgs,
    ReportCommands,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::storage::Storage;

/// Environment variable holding a tracing filter, e.g. `expense_tracker=debug`
const LOG_ENV: &str = "EXPENSE_LOG";

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Offline personal expense tracker",
    long_about = "Record daily expenses and get weekly and monthly reports, \
                  CSV exports and period tables, all stored locally."
)]
struct Cli {
    /// User to act as
    #[arg(short, long, global = true, env = "EXPENSE_USER")]
    user: Option<String>,

    /// Password for --user (prompted when omitted)
    #[arg(long, global = true, env = "EXPENSE_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directories and default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Record an expense
    Add(AddArgs),

    /// Weekly and monthly reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export the last week or month of expenses as CSV
    Export {
        /// week or month
        period: String,

        /// Directory for the CSV file (defaults to the exports directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Show expenses for a period as a table
    View {
        /// daily, weekly, monthly or yearly (defaults to the configured period)
        period: Option<String>,
    },

    /// Show your recent activity from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    init_logging(&settings);

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let now = chrono::Local::now().naive_local();

    match cli.command {
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Expense tracker initialized at: {}", paths.base_dir().display());
            println!();
            println!("Create an account with 'expense account create <username>'.");
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!("Audit log:         {}", storage.audit().path().display());
            println!("Initialized:       {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Default view period: {}", settings.default_view_period);
            println!("  Log level:           {}", settings.log_level);
            println!("  Stored expenses:     {}", storage.expenses.count()?);
            println!("  Registered users:    {}", storage.users.count()?);
        }
        Some(Commands::Account(cmd)) => {
            handle_account_command(&storage, cmd, cli.password)?;
        }
        Some(Commands::Add(args)) => {
            let session = resolve_session(&storage, cli.user.as_deref(), cli.password)?;
            handle_add_command(&storage, &session, args, now)?;
        }
        Some(Commands::Report(cmd)) => {
            let session = resolve_session(&storage, cli.user.as_deref(), cli.password)?;
            handle_report_command(&storage, &settings, &session, cmd, now)?;
        }
        Some(Commands::Export { period, output_dir }) => {
            let session = resolve_session(&storage, cli.user.as_deref(), cli.password)?;
            handle_export_command(&storage, &session, &period, output_dir, now)?;
        }
        Some(Commands::View { period }) => {
            let session = resolve_session(&storage, cli.user.as_deref(), cli.password)?;
            handle_view_command(&storage, &settings, &session, period, now)?;
        }
        Some(Commands::History { limit }) => {
            let session = resolve_session(&storage, cli.user.as_deref(), cli.password)?;
            handle_history_command(&storage, &session, limit)?;
        }
        None => {
            println!("Expense Tracker - offline personal expense tracking");
            println!();
            println!("Run 'expense --help' for usage information.");
        }
    }

    Ok(())
}

/// Log to stderr so report output on stdout stays clean
fn init_logging(settings: &Settings) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
