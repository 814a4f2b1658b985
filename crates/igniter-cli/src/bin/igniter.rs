//! CLI for Igniter Training Academy course administration

use clap::Parser;
use igniter::{Igniter, IgniterConfig};
use igniter_cli::commands::{self, RegistrationFields, TrainingFields};
use igniter_cli::error::CliError;
use igniter_cli::logging;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "igniter")]
#[command(
    author,
    version,
    about = "Manage Igniter Training Academy courses and registrations",
    long_about = None
)]
struct Cli {
    /// Directory holding the stored data
    #[arg(long, short = 'D', global = true, env = "IGNITER_DATA_DIR")]
    data_dir: Option<String>,

    /// Config file path (JSON)
    #[arg(long, short = 'c', global = true, env = "IGNITER_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, short = 'l', global = true, env = "IGNITER_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum TrainingCommands {
    /// List all trainings
    List {
        /// Print the stored records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one training
    Show {
        /// Training ID
        id: String,
    },

    /// Add a training
    Add {
        #[command(flatten)]
        fields: TrainingFields,
    },

    /// Edit a training (an unknown ID is saved as a new training)
    Edit {
        /// Training ID
        id: String,

        #[command(flatten)]
        fields: TrainingFields,
    },

    /// Delete a training
    Remove {
        /// Training ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(clap::Subcommand)]
enum RegistrationCommands {
    /// List all registrations
    List {
        /// Print the stored records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one registration
    Show {
        /// Registration ID
        id: String,
    },

    /// Submit a registration
    Add {
        #[command(flatten)]
        fields: RegistrationFields,
    },

    /// Edit a registration
    Edit {
        /// Registration ID
        id: String,

        #[command(flatten)]
        fields: RegistrationFields,
    },

    /// Delete a registration
    Remove {
        /// Registration ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Training catalogue management
    Training {
        #[command(subcommand)]
        command: Option<TrainingCommands>,
    },
    /// Registration management
    Registration {
        #[command(subcommand)]
        command: Option<RegistrationCommands>,
    },
}

fn load_config(cli: &Cli) -> Result<IgniterConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => IgniterConfig::load_from_file(path)
            .map_err(|e| CliError::InvalidInput(e.to_string()))?,
        None => IgniterConfig::default(),
    };

    // Override with CLI options
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = data_dir.clone();
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone();
    }

    Ok(config)
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(&cli)?;
    logging::init(&config.log_level);

    let app = Igniter::open(config)?;
    tracing::debug!(
        data_dir = %app.config().data_dir,
        trainings_key = %app.config().trainings_key,
        registrations_key = %app.config().registrations_key,
        "store opened"
    );

    match cli.command {
        Some(Commands::Training { command }) => match command {
            Some(TrainingCommands::List { json }) => commands::training_list(&app, json).await?,
            Some(TrainingCommands::Show { id }) => commands::training_show(&app, &id).await?,
            Some(TrainingCommands::Add { fields }) => commands::training_add(&app, fields).await?,
            Some(TrainingCommands::Edit { id, fields }) => {
                commands::training_edit(&app, &id, fields).await?
            }
            Some(TrainingCommands::Remove { id, yes }) => {
                commands::training_remove(&app, &id, yes).await?
            }
            None => {
                println!("Training catalogue commands\n");
                println!("Use --help for more information");
            }
        },
        Some(Commands::Registration { command }) => match command {
            Some(RegistrationCommands::List { json }) => {
                commands::registration_list(&app, json).await?
            }
            Some(RegistrationCommands::Show { id }) => {
                commands::registration_show(&app, &id).await?
            }
            Some(RegistrationCommands::Add { fields }) => {
                commands::registration_add(&app, fields).await?
            }
            Some(RegistrationCommands::Edit { id, fields }) => {
                commands::registration_edit(&app, &id, fields).await?
            }
            Some(RegistrationCommands::Remove { id, yes }) => {
                commands::registration_remove(&app, &id, yes).await?
            }
            None => {
                println!("Registration commands\n");
                println!("Use --help for more information");
            }
        },
        None => {
            println!("Igniter Training Academy");
            println!("Use --help for more information");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Validation(errors)) => {
            eprintln!("❌ Please fix the following:");
            for (field, message) in errors.iter() {
                eprintln!("   {}: {}", field, message);
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
