mod cli;
mod commands;
mod libs;
mod logger;
mod schemas;

use anyhow::Context;
use clap::Parser;

use cli::Cli;
use commands::regenerate;
use libs::settings;

fn main() {
    let cli = Cli::parse();
    logger::init(cli.debug);

    if let Err(e) = try_main(&cli) {
        crate::log_error!("{:#}", e);
        std::process::exit(1);
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let settings =
        settings::resolve(&cli.settings_overrides()).context("could not load settings")?;
    regenerate::run(&cli.regenerate_options(), &settings)
        .with_context(|| format!("could not regenerate {}", cli.file))?;
    Ok(())
}
