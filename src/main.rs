use anyhow::bail;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod identify;
mod web;

use config::Config;
use identify::Identifier;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("linkid=info".parse()?))
        .init();

    let args = cli::Args::parse();
    let config = Config::from_env();

    match args.command {
        cli::Command::Daemon {} => web::start_daemon(config),

        cli::Command::Identify { url } => {
            let Some(url) = web::parse_absolute_url(&url) else {
                bail!("not a valid absolute url: {url}");
            };

            let identifier = Identifier::new(&config)?;

            let response = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(async { identifier.identify(&url).await })?;

            println!("{}", serde_json::to_string_pretty(&response).unwrap());
            Ok(())
        }
    }
}
