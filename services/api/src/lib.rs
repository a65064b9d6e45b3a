mod cli;
mod infra;
mod quiz;
mod routes;
mod server;

use cx_maturity::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
