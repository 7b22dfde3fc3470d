//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "lingo", author, version, about = "Resolve translated messages from a lingo translation file", long_about = None)]
pub struct Cli {
    /// Translation file (overrides config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Data folder containing language/i18n.yml or language/i18n-default.yml
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file (default: ./lingo.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a message key for a locale and print it
    Resolve(ResolveArgs),
    /// Report which keys each locale covers
    Check(CheckArgs),
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Message key, e.g. `welcome` or `commands.help`
    pub key: String,

    /// Audience locale, e.g. `en_US` (defaults to the table's default locale)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Prefix every line with the configured prefix
    #[arg(long, conflicts_with = "with_prefix")]
    pub prefix: bool,

    /// Prefix every line with this text instead
    #[arg(long, value_name = "PREFIX")]
    pub with_prefix: Option<String>,

    /// Placeholder value; repeatable
    #[arg(short = 'a', long = "arg", value_name = "NAME=VALUE", value_parser = parse_placeholder)]
    pub args: Vec<(String, String)>,

    /// Output format (overrides config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Exit with status 1 if any key lacks a default-locale entry
    #[arg(long)]
    pub strict: bool,
}

fn parse_placeholder(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got `{raw}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn placeholder_parsing() {
        assert_eq!(
            parse_placeholder("name=Ada"),
            Ok(("name".to_string(), "Ada".to_string()))
        );
        assert_eq!(
            parse_placeholder("eq=a=b"),
            Ok(("eq".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_placeholder("empty="), Ok(("empty".to_string(), String::new())));
        assert!(parse_placeholder("=x").is_err());
        assert!(parse_placeholder("novalue").is_err());
    }

    #[test]
    fn resolve_command_line() {
        let cli = Cli::try_parse_from([
            "lingo", "--file", "i18n.yml", "resolve", "welcome", "-l", "en_US", "--prefix", "-a",
            "name=Ada", "--arg", "count=3", "--format", "plain",
        ])
        .unwrap();

        assert_eq!(cli.file, Some(PathBuf::from("i18n.yml")));
        let Command::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(args.key, "welcome");
        assert_eq!(args.locale.as_deref(), Some("en_US"));
        assert!(args.prefix);
        assert_eq!(args.args.len(), 2);
        assert_eq!(args.format, Some(OutputFormat::Plain));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["lingo", "check", "--strict", "--data-dir", "plugin", "-v"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("plugin")));
        assert!(matches!(cli.command, Command::Check(CheckArgs { strict: true })));
    }

    #[test]
    fn prefix_flags_conflict() {
        let err = Cli::try_parse_from([
            "lingo", "resolve", "k", "--prefix", "--with-prefix", "[X]",
        ]);
        assert!(err.is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
