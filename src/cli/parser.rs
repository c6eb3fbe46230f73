use clap::{Parser, Subcommand};

/// Command-line interface definition for rexpense
/// CLI application to log expenses, fuel purchases and budgets
#[derive(Parser)]
#[command(
    name = "rexpense",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple expense tracker: log expenses and fuel purchases, view monthly totals and keep category budgets",
    long_about = None
)]
pub struct Cli {
    /// Override workbook path (useful for tests or a custom workbook)
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
    /// Initialize the workbook and configuration
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Add an expense
    Add {
        /// Date of the expense (YYYY-MM-DD)
        date: String,

        /// Amount spent
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Category: Food, Clothing, Meeting, Travel or Other
        category: String,

        /// Free-text description
        #[arg(default_value = "")]
        description: String,
    },

    /// View the expenses of one month
    Month {
        /// Month (1-12)
        month: u32,

        /// Year (e.g. 2024)
        year: i32,
    },

    /// Add a fuel purchase
    Fuel {
        /// Date of the purchase (YYYY-MM-DD)
        date: String,

        /// Litres
        litres: String,

        /// Price paid
        price: String,

        /// Fuel station / place
        place: String,
    },

    /// Show the remaining budget per category
    Budget,

    /// Set new budget values (omitted categories keep their current value)
    EditBudget {
        #[arg(long = "food", help = "New Food budget")]
        food: Option<String>,

        #[arg(long = "clothing", help = "New Clothing budget")]
        clothing: Option<String>,

        #[arg(long = "travel", help = "New Travel budget")]
        travel: Option<String>,

        #[arg(long = "meeting", help = "New Meeting budget")]
        meeting: Option<String>,
    },

    /// Interactive menu with all expense and budget actions
    Shell,
}
