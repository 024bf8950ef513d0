use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use permiso_cli::OutputFormat;
use permiso_cli::commands;
use permiso_cli::config;

#[derive(Parser)]
#[command(name = "permiso")]
#[command(about = "Leave request client for the HR leave-management backend")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the leave request draft
    Request(RequestArgs),

    /// List employees from the directory
    Employees {
        #[arg(long, help = "Case-insensitive name filter")]
        search: Option<String>,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// List stored permissions for an employee
    Permissions {
        #[arg(long, help = "Employee name (defaults to the logged-in user)")]
        employee: Option<String>,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Session management (login/status/logout)
    Session(SessionArgs),

    /// Configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct RequestArgs {
    #[command(subcommand)]
    action: RequestAction,
}

#[derive(Subcommand)]
enum RequestAction {
    /// Set one draft field
    Set {
        #[arg(
            help = "Field name: employee, leave-type, request-date, start-date, end-date, department"
        )]
        field: String,
        #[arg(help = "Field value (dates as YYYY-MM-DD)")]
        value: String,
    },
    /// Show the current draft
    Show {
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Clear the draft back to empty
    Reset,
    /// Submit the draft to the leave API
    Submit {
        #[arg(long, help = "Validate and print the payload without sending")]
        dry_run: bool,
    },
}

#[derive(Args)]
struct SessionArgs {
    #[command(subcommand)]
    action: SessionAction,
}

#[derive(Subcommand)]
enum SessionAction {
    /// Authenticate against the backend and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Show current session status
    Status,
    /// Drop the stored session token
    Logout,
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Set { key: String, value: String },
    Get { key: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match config::load() {
        Ok(config) => config,
        Err(e) => {
            // Missing config file is fine on first run; defaults point at
            // the local services. A present-but-broken file gets a warning.
            let exists = config::config_path().map(|p| p.exists()).unwrap_or(false);
            if exists {
                eprintln!("Warning: {:#}. Using default configuration.", e);
            }
            config::Config::default()
        }
    };

    match &cli.command {
        Commands::Request(args) => match &args.action {
            RequestAction::Set { field, value } => {
                commands::request::set(&config, field, value)?;
            }
            RequestAction::Show { format } => {
                commands::request::show(&config, *format)?;
            }
            RequestAction::Reset => {
                commands::request::reset(&config)?;
            }
            RequestAction::Submit { dry_run } => {
                commands::request::submit(&config, *dry_run)?;
            }
        },
        Commands::Employees { search, format } => {
            commands::employees::list(&config, search.clone(), *format)?;
        }
        Commands::Permissions { employee, format } => {
            commands::permissions::list(&config, employee.clone(), *format)?;
        }
        Commands::Session(args) => match &args.action {
            SessionAction::Login { email, password } => {
                commands::session::login(&config, email, password)?;
            }
            SessionAction::Status => {
                commands::session::status()?;
            }
            SessionAction::Logout => {
                commands::session::logout()?;
            }
        },
        Commands::Config(args) => match &args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Set { key, value } => commands::config::set(key, value)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
    }

    Ok(())
}
