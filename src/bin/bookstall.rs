use anyhow::Result;
use bookstall::cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let action = cli::start()?;

    action.execute().await
}
