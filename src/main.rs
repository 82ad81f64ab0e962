#![allow(clippy::cargo_common_metadata)]
use anyhow::{Context, Result};
use quiz_master::{
    cli, config::Config, core::QuestionService, load_dotenv, setup_logging,
    store::SqliteQuestionRepository,
};

fn main() -> Result<()> {
    load_dotenv()?;

    let args = cli::parse_args();
    setup_logging(args.debug)?;

    let config = Config::from_args(&args)?;

    let repository = SqliteQuestionRepository::open(&config.database)
        .context("Failed to open the question store")?;
    let service = QuestionService::new(repository)?;

    let stdout = std::io::stdout();
    cli::execute_command(&service, &args.command, &mut stdout.lock())
}
