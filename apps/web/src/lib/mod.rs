//! Shared frontend utilities.
//!
//! Pages never talk to the API themselves. They build an `ApiClient` from
//! `AppConfig` with [`api_client`] and hand it to the matching flow in
//! `bookstall_client::pages`, which also owns the access checks.

pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod storage;

pub(crate) use errors::AppError;

use bookstall_client::ApiClient;
use config::AppConfig;

/// Builds the API client for the configured base address.
pub(crate) fn api_client(config: &AppConfig) -> Result<ApiClient, AppError> {
    ApiClient::new(&config.api_base_url).map_err(|err| AppError::Config(err.to_string()))
}
