use anyhow::Result;
use clap::{Parser, Subcommand};

use bizbook::cli::{
    handle_category_command, handle_client_command, handle_expense_command, handle_export_command,
    handle_invoice_command, handle_report_command,
};
use bizbook::config::{paths::BizbookPaths, settings::Settings};
use bizbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "bizbook",
    version,
    about = "Invoicing and expense tracking for small businesses",
    long_about = "bizbook is a command-line billing book for small Indian \
                  businesses: GST invoices and quotes, expense tracking with \
                  categories and tags, and filtered expense analytics."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Client management commands
    #[command(subcommand)]
    Client(bizbook::cli::ClientCommands),

    /// Expense category management commands
    #[command(subcommand)]
    Category(bizbook::cli::CategoryCommands),

    /// Expense tracking commands
    #[command(subcommand, alias = "exp")]
    Expense(bizbook::cli::ExpenseCommands),

    /// Invoice and quote commands
    #[command(subcommand, alias = "inv")]
    Invoice(bizbook::cli::InvoiceCommands),

    /// Reports and analytics
    #[command(subcommand)]
    Report(bizbook::cli::ReportCommands),

    /// Export data to CSV, JSON or YAML
    #[command(subcommand)]
    Export(bizbook::cli::ExportCommands),

    /// Initialize bizbook with default settings and categories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BizbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Client(cmd)) => {
            handle_client_command(&storage, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, cmd)?;
        }
        Some(Commands::Invoice(cmd)) => {
            handle_invoice_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing bizbook at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            storage.seed_defaults()?;
            println!("Initialization complete!");
            println!();
            println!("Default expense categories have been created:");
            println!("  Office Supplies, Utilities, Rent, Salaries,");
            println!("  Marketing, Travel, Software, Miscellaneous");
            println!();
            println!("Run 'bizbook category list' to see all categories.");
            println!("Edit {} to set your business details.", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("bizbook Configuration");
            println!("=====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Business name:  {}", settings.business.name);
            println!("  Currency:       {}", settings.currency_symbol);
            println!("  Invoice prefix: {}", settings.invoice_prefix);
            println!("  Quote prefix:   {}", settings.quote_prefix);
            println!("  Payment terms:  due in {} day(s)", settings.due_days);
        }
        None => {
            println!("bizbook - Invoicing and expense tracking");
            println!();
            println!("Run 'bizbook --help' for usage information.");
            println!("Run 'bizbook init' to set up a fresh data directory.");
        }
    }

    Ok(())
}
