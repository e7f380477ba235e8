//! PetFriends - end-to-end test suite for the PetFriends pet-adoption API

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod scenarios;

use cli::{Cli, CommandContext, Commands, GlobalOptions, PetCommands, SuiteCommands};
use client::PetForm;
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug { "petfriends=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("petfriends version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Key => {
            let ctx = CommandContext::new(&opts)?;
            cli::key::run(&ctx).await
        }
        Commands::Pet(pet_cmd) => {
            let ctx = CommandContext::new(&opts)?;
            match pet_cmd {
                PetCommands::List { filter } => cli::pet::list(&ctx, filter).await,
                PetCommands::Add {
                    name,
                    animal_type,
                    age,
                    photo,
                } => {
                    let form = PetForm::new(name, animal_type, age);
                    cli::pet::add(&ctx, form, photo.as_deref()).await
                }
                PetCommands::Photo { pet_id, photo } => {
                    cli::pet::photo(&ctx, &pet_id, &photo).await
                }
                PetCommands::Update {
                    pet_id,
                    name,
                    animal_type,
                    age,
                } => {
                    let form = PetForm::new(name, animal_type, age);
                    cli::pet::update(&ctx, &pet_id, form).await
                }
                PetCommands::Delete { pet_id } => cli::pet::delete(&ctx, &pet_id).await,
            }
        }
        Commands::Suite(suite_cmd) => match suite_cmd {
            SuiteCommands::List => cli::suite::list(&opts),
            SuiteCommands::Run {
                scenarios,
                allow_known_defects,
            } => {
                let ctx = CommandContext::new(&opts)?;
                cli::suite::run(&ctx, &scenarios, allow_known_defects).await
            }
        },
    }
}
