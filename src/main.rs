use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use amountfmt::cli::{
    handle_amount_command, handle_config_command, handle_currency_command, AmountCommands,
    ConfigCommands, CurrencyCommands,
};
use amountfmt::config::{AmountfmtPaths, Settings};

/// Environment variable holding the log filter
const LOG_ENV: &str = "AMOUNTFMT_LOG";

#[derive(Parser)]
#[command(
    name = "amountfmt",
    author = "Kaylee Beyene",
    version,
    about = "Locale- and currency-aware amount formatting",
    long_about = "amountfmt renders numbers as locale-formatted amounts, reads \
                  them back, normalizes amounts of unknown locale for export \
                  and masks amounts for privacy mode."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Amount(AmountCommands),

    /// Currency registry commands
    #[command(subcommand)]
    Currency(CurrencyCommands),

    /// Show or change configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Settings are read on every invocation
    let paths = AmountfmtPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Amount(cmd)) => {
            handle_amount_command(&settings, cmd)?;
        }
        Some(Commands::Currency(cmd)) => {
            handle_currency_command(&settings, cmd)?;
        }
        Some(Commands::Config(cmd)) => {
            handle_config_command(&paths, &mut settings, cmd)?;
        }
        None => {
            println!("amountfmt - locale- and currency-aware amount formatting");
            println!();
            println!("Run 'amountfmt --help' for usage information.");
            println!("Run 'amountfmt format -1234.5 --locale de-DE --currency EUR' for an example.");
        }
    }

    Ok(())
}
