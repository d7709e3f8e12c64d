use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use currencies::core::config::{ConfigOverrides, OutputFormat};
use currencies::core::log::init_logging;
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Output format, overrides the configuration file
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Trim and uppercase codes before lookup; `--ignore-case=false` disables
    /// the config file setting
    #[arg(
        short,
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    ignore_case: Option<bool>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for currencies::AppCommand {
    fn from(cmd: Commands) -> currencies::AppCommand {
        match cmd {
            Commands::Code { codes } => currencies::AppCommand::Code(codes),
            Commands::Number { numbers } => currencies::AppCommand::Number(numbers),
            Commands::List => currencies::AppCommand::List,
            Commands::Check => currencies::AppCommand::Check,
            Commands::MinorUnits { code, amount } => {
                currencies::AppCommand::MinorUnits { code, amount }
            }
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Look up currencies by 3-letter code
    Code {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Look up currencies by numeric code
    Number {
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<String>,
    },
    /// List all known currencies
    List,
    /// Verify the built-in currency table
    Check,
    /// Express an amount in the currency's smallest unit
    MinorUnits {
        code: String,
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let overrides = ConfigOverrides {
        output: cli.output,
        ignore_case: cli.ignore_case,
    };

    let result = match cli.command {
        Some(Commands::Setup) => currencies::cli::setup::setup(),
        Some(cmd) => currencies::run_command(cmd.into(), cli.config_path.as_deref(), overrides),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
