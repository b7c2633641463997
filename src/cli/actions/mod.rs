pub mod admin;
pub mod catalogue;
pub mod render;
pub mod session;

mod run;

use anyhow::Result;
use std::process::ExitCode;

#[derive(Debug)]
pub enum Action {
    Session(session::Args),
    Catalogue(catalogue::Args),
    Admin(admin::Args),
}

impl Action {
    /// Runs the action, prints its report and returns the process status.
    ///
    /// # Errors
    /// Returns an error if the action could not be carried out at all, such
    /// as an unusable API URL. Refused requests are reported, not returned.
    pub async fn execute(self) -> Result<ExitCode> {
        run::execute(self).await
    }
}
