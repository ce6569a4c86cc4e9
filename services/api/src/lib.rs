mod cli;
mod infra;
mod report;
mod routes;
mod server;

use news_intel::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
