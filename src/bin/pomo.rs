//! pomo - pomodoro timer and session manager for hackers

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use pomo::{
    cli::{args::Cli, Context},
    client::PomoClient,
    config::Config,
    notify::{DesktopNotifier, NoopNotifier, Notifier},
    timer::SleepPacer,
};

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cli_config = cli.config();
    let Some(command) = cli.into_command() else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let config = Config::load_with_env(&Config::default_path())?;
    let client = PomoClient::new(&config.client)?;
    tracing::debug!(base_url = %client.base_url(), "using pomo-server");

    let notifier: &dyn Notifier = if cli_config.notify {
        &DesktopNotifier
    } else {
        &NoopNotifier
    };

    let stdout = io::stdout();
    let mut ctx = Context {
        config: &cli_config,
        client: &client,
        notifier,
        pacer: SleepPacer,
        out: stdout.lock(),
    };

    match ctx.run(&command) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::debug!("command failed: {:?}", e);
            eprintln!("{}", e.user_message(&command));
            Ok(ExitCode::FAILURE)
        }
    }
}
