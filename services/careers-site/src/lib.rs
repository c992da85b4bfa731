mod cli;
mod commands;
mod demo;
mod infra;
mod routes;
mod server;

use careers_intake::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
