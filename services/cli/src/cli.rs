use crate::catalog::run_business_types;
use crate::generate::{run_generate, GenerateArgs};
use clap::{Parser, Subcommand};
use leadgen::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "leadgen-cli",
    about = "Fabricate, score and export sample business leads from search criteria",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit search criteria, watch the progress display and render the leads
    Generate(GenerateArgs),
    /// List the business types with dedicated sample names
    BusinessTypes,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args).await,
        Command::BusinessTypes => {
            run_business_types();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_accepts_repeated_locations_and_exports() {
        let cli = Cli::try_parse_from([
            "leadgen",
            "generate",
            "--business-type",
            "plumber",
            "--location",
            "Austin, TX",
            "--location",
            "Dallas, TX",
            "--export",
            "csv",
            "--export",
            "json",
        ])
        .expect("arguments parse");

        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.location, vec!["Austin, TX", "Dallas, TX"]);
                assert_eq!(args.export.len(), 2);
            }
            other => panic!("expected generate, got {other:?}"),
        }
    }
}
