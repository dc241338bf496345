mod catalog;
mod cli;
mod generate;
mod infra;

use leadgen::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
