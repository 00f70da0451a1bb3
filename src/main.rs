mod cli;

use clap::Parser;
use cli::{Cli, Commands, RouteArgs};
use handler_chain::config::Config;
use handler_chain::{dispatch, observability};

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

fn main() -> Result<(), AnyError> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    observability::init(&config.logging);

    match cli.command {
        Commands::Route(args) => route(&config, args)?,
        Commands::List => list(&config),
    }

    Ok(())
}

fn route(config: &Config, args: RouteArgs) -> Result<(), AnyError> {
    let outcomes = dispatch::route(config, &args.chain, &args.requests)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(());
    }

    for outcome in &outcomes {
        let status = if outcome.handled { "handled" } else { "unhandled" };
        println!("{}\t{}", outcome.request, status);
    }
    Ok(())
}

fn list(config: &Config) {
    for (name, chain) in &config.chains {
        println!("{name}\t{:?}\t{}", chain.request, chain.handlers.join(" -> "));
    }
}
