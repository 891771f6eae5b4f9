use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use curbside::adapter::inbound::cli::command::{
    CheckCommand, Cli, ColorChoice, Commands, ConfigCommand,
};
use curbside::adapter::inbound::cli::output::{self, OutputConfig};
use curbside::adapter::inbound::cli::{check, config, estimate, init_logging, serve};
use curbside::infrastructure::config::Credentials;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => {
            let config = config::load(args.config.config.as_deref())
                .context("failed to load configuration")?;
            init_logging(&config.logging, false);
            serve::execute(config, &Credentials::from_env(), &args)
                .await
                .context("server stopped with an error")?;
        }
        Commands::Estimate(args) => {
            let config = config::load(args.config.config.as_deref())
                .context("failed to load configuration")?;
            init_logging(&config.logging, true);
            estimate::execute(&config, &Credentials::from_env(), args.request()).await?;
        }
        Commands::Config(ConfigCommand::Init(args)) => {
            config::execute_init(&args.path, args.force)
                .with_context(|| format!("could not write {}", args.path.display()))?;
        }
        Commands::Config(ConfigCommand::Show(args)) => {
            config::execute_show(&args.config)
                .with_context(|| format!("could not load {}", args.config.display()))?;
        }
        Commands::Config(ConfigCommand::Validate(args)) => {
            config::execute_validate(&args.config)
                .with_context(|| format!("{} is not valid", args.config.display()))?;
        }
        Commands::Check(CheckCommand::Health(args)) => {
            let config = config::load(args.config.as_deref())
                .context("failed to load configuration")?;
            check::execute_health(&config, &Credentials::from_env())?;
        }
    }
    Ok(())
}
