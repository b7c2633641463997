use super::{admin, catalogue, session, Action};
use anyhow::Result;
use std::process::ExitCode;
use tracing::debug;

pub(super) async fn execute(action: Action) -> Result<ExitCode> {
    debug!(?action, "running action");

    let report = match action {
        Action::Session(args) => session::execute(args).await?,
        Action::Catalogue(args) => catalogue::execute(args).await?,
        Action::Admin(args) => admin::execute(args).await?,
    };

    report.print();
    if report.is_failed() {
        debug!("action finished with a rejection");
    }
    Ok(report.exit_code())
}
