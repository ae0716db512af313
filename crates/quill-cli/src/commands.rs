use std::path::PathBuf;

use colored::Colorize;

use quill_server::{BlogServer, ServerConfig};

use crate::cli::{Cli, Command, ConfigArgs, ServeArgs};

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Config(args) => cmd_config(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => Ok(ServerConfig::load(path)?),
        None => Ok(ServerConfig::default()),
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = load_config(args.config.as_ref())?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    println!(
        "{} quill blog on {}",
        "✓".green().bold(),
        config.bind_addr.to_string().bold()
    );
    BlogServer::new(config).serve().await?;
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    println!("{}", config.to_toml()?);
    Ok(())
}
