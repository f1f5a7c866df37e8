mod cli;
mod infra;
mod reports;
mod routes;
mod server;

use leasing_engine::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
