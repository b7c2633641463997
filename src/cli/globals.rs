use crate::store::FileStore;
use crate::APP_USER_AGENT;
use anyhow::{Context, Result};
use bookstall_client::{ApiClient, SessionContext};
use std::path::PathBuf;

/// Options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub session_file: PathBuf,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String, session_file: PathBuf) -> Self {
        Self {
            api_url,
            session_file,
        }
    }

    /// # Errors
    /// Returns an error if the HTTP client cannot be built or the API URL is
    /// not usable as a base.
    pub fn api_client(&self) -> Result<ApiClient> {
        let http = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .context("failed to build HTTP client")?;
        ApiClient::with_client(http, &self.api_url).context("invalid --api-url")
    }

    #[must_use]
    pub fn session(&self) -> SessionContext<FileStore> {
        SessionContext::new(FileStore::new(&self.session_file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstall_client::Principal;

    #[test]
    fn test_global_args() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let args = GlobalArgs::new(
            "http://localhost:5000/api".to_string(),
            dir.path().join("session.json"),
        );
        assert_eq!(args.api_client()?.base_url().as_str(), "http://localhost:5000/api");
        assert_eq!(args.session().role_of(), Principal::Anonymous);
        Ok(())
    }

    #[test]
    fn test_rejects_opaque_base() {
        let args = GlobalArgs::new("mailto:books@example.com".to_string(), PathBuf::new());
        assert!(args.api_client().is_err());
    }
}
