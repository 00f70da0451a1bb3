use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chainctl")]
#[command(about = "Route requests through configured handler chains", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to $CHAINCTL_CONFIG or config/chains.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Offer each request to a chain and report whether it was handled
    Route(RouteArgs),
    /// List configured chains and their handlers
    List,
}

#[derive(clap::Args, Debug)]
pub struct RouteArgs {
    /// Name of the chain to use
    pub chain: String,

    /// Requests, offered in order
    #[arg(required = true, allow_negative_numbers = true)]
    pub requests: Vec<String>,

    /// Print outcomes as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_route(args: &[&str]) -> RouteArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Route(route) => route,
            other => panic!("expected route command, got {other:?}"),
        }
    }

    #[test]
    fn test_json_flag_after_requests() {
        let route = parse_route(&["chainctl", "route", "numbers", "1", "-3", "--json"]);
        assert_eq!(route.chain, "numbers");
        assert_eq!(route.requests, vec!["1", "-3"]);
        assert!(route.json);
    }

    #[test]
    fn test_json_flag_before_requests() {
        let route = parse_route(&["chainctl", "route", "words", "--json", "abc"]);
        assert_eq!(route.requests, vec!["abc"]);
        assert!(route.json);
    }

    #[test]
    fn test_requests_without_json_flag() {
        let route = parse_route(&["chainctl", "route", "words", "MixedCase", ""]);
        assert_eq!(route.requests, vec!["MixedCase", ""]);
        assert!(!route.json);
    }

    #[test]
    fn test_route_requires_a_request() {
        assert!(Cli::try_parse_from(["chainctl", "route", "numbers"]).is_err());
    }

    #[test]
    fn test_global_config_path() {
        let cli = Cli::try_parse_from(["chainctl", "list", "--config", "custom.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Commands::List));
    }
}
