//! epigraphy command-line entry point

use anyhow::Result;
use clap::Parser;
use epigraphy_cli::commands::Commands;

/// Clean and date Greek inscription records
#[derive(Debug, Parser)]
#[command(name = "epigraphy", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_process_args() {
        let cli = Cli::try_parse_from([
            "epigraphy",
            "process",
            "-i",
            "a.json",
            "-i",
            "b.jsonl",
            "--min-text-len",
            "5",
            "-vv",
        ])
        .unwrap();

        match cli.command {
            Commands::Process(args) => {
                assert_eq!(args.input, vec!["a.json", "b.jsonl"]);
                assert_eq!(args.min_text_len, Some(5));
                assert_eq!(args.verbose, 2);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_date_requires_descriptor() {
        assert!(Cli::try_parse_from(["epigraphy", "date"]).is_err());
    }
}
