//! Typed client for the marketplace REST API. Every endpoint goes through
//! one request helper that builds the URL, attaches the bearer header and
//! maps errors. Nothing is retried and no timeout is imposed here.
//! Log lines carry the method and path only; credentials and bodies are
//! never logged.

mod error;
mod types;

pub use error::ApiError;
pub use types::{
    AdminStatistics, Book, BookStatus, BuyRequest, ClientStatistics, LoginRequest, LoginResponse,
    NewBook, Purchase, PurchasedBook, RegisterRequest, ReviewAction, ReviewRequest, Seller,
    SellerRef,
};

use crate::role::Role;
use reqwest::{Client, Method, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, debug_span, Instrument};
use url::Url;

/// Base address used when nothing is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// # Errors
    /// Returns `ApiError::InvalidBase` if `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Uses a preconfigured `reqwest::Client` (user agent, proxies, ...).
    ///
    /// # Errors
    /// Returns `ApiError::InvalidBase` if `base_url` is not an absolute
    /// http(s) URL.
    pub fn with_client(http: Client, base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|err| ApiError::InvalidBase(format!("{base_url}: {err}")))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBase(format!(
                "{base_url}: expected an http(s) URL"
            )));
        }
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Creates an account. Admin accounts need `admin_secret`.
    ///
    /// # Errors
    /// Returns `ApiError` when the request fails or the server rejects it.
    pub async fn register(&self, role: Role, request: &RegisterRequest) -> Result<(), ApiError> {
        self.send_empty(
            Method::POST,
            &["auth", role.as_str(), "register"],
            None,
            Some(request),
        )
        .await
    }

    /// Exchanges email and password for a bearer credential.
    ///
    /// # Errors
    /// Returns `ApiError` when the request fails or the server rejects it.
    pub async fn login(&self, role: Role, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.send(
            Method::POST,
            &["auth", role.as_str(), "login"],
            None,
            Some(request),
        )
        .await
    }

    /// Public listing of purchasable books.
    ///
    /// # Errors
    /// Returns `ApiError` when the request fails or the body is not a book list.
    pub async fn available_books(&self) -> Result<Vec<Book>, ApiError> {
        self.get(&["books", "available"], None).await
    }

    /// # Errors
    /// Returns `ApiError` when the request fails or the body is not a book list.
    pub async fn pending_books(&self, credential: &SecretString) -> Result<Vec<Book>, ApiError> {
        self.get(&["books", "pending"], Some(credential)).await
    }

    /// Listings created by the caller, in any status.
    ///
    /// # Errors
    /// Returns `ApiError` when the request fails or the body is not a book list.
    pub async fn my_books(&self, credential: &SecretString) -> Result<Vec<Book>, ApiError> {
        self.get(&["books", "my-books"], Some(credential)).await
    }

    /// # Errors
    /// Returns `ApiError` when the request fails or the body cannot be decoded.
    pub async fn statistics(&self, credential: &SecretString) -> Result<AdminStatistics, ApiError> {
        self.get(&["books", "statistics"], Some(credential)).await
    }

    /// # Errors
    /// Returns `ApiError` when the request fails or the body cannot be decoded.
    pub async fn client_stats(
        &self,
        credential: &SecretString,
    ) -> Result<ClientStatistics, ApiError> {
        self.get(&["books", "client-stats"], Some(credential)).await
    }

    /// # Errors
    /// Returns `ApiError` when the request fails or the body cannot be decoded.
    pub async fn purchases(&self, credential: &SecretString) -> Result<Vec<Purchase>, ApiError> {
        self.get(&["books", "purchases"], Some(credential)).await
    }

    /// Submits a listing; the server files it as pending.
    ///
    /// # Errors
    /// Returns `ApiError` when the request fails or the server rejects it.
    pub async fn create_book(&self, credential: &SecretString, book: &NewBook) -> Result<(), ApiError> {
        self.send_empty(Method::POST, &["books"], Some(credential), Some(book))
            .await
    }

    /// # Errors
    /// Returns `ApiError` when the request fails or the server rejects it.
    pub async fn buy_book(
        &self,
        credential: &SecretString,
        book_id: &str,
        quantity: u32,
    ) -> Result<(), ApiError> {
        self.send_empty(
            Method::PATCH,
            &["books", book_id, "buy"],
            Some(credential),
            Some(&BuyRequest { quantity }),
        )
        .await
    }

    /// # Errors
    /// Returns `ApiError` when the request fails or the server rejects it.
    pub async fn review_book(
        &self,
        credential: &SecretString,
        book_id: &str,
        action: ReviewAction,
    ) -> Result<(), ApiError> {
        self.send_empty(
            Method::PATCH,
            &["books", book_id, "review"],
            Some(credential),
            Some(&ReviewRequest { action }),
        )
        .await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        credential: Option<&SecretString>,
    ) -> Result<T, ApiError> {
        self.send::<(), T>(Method::GET, segments, credential, None)
            .await
    }

    /// Sends a request and decodes the JSON response body.
    async fn send<B, T>(
        &self,
        method: Method,
        segments: &[&str],
        credential: Option<&SecretString>,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(method, segments, credential, body).await?;
        let bytes = response.bytes().await.map_err(ApiError::Transport)?;
        serde_json::from_slice(&bytes)
            .map_err(|err| ApiError::Decode(format!("failed to decode response: {err}")))
    }

    /// Sends a request whose success body is irrelevant.
    async fn send_empty<B>(
        &self,
        method: Method,
        segments: &[&str],
        credential: Option<&SecretString>,
        body: Option<&B>,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.execute(method, segments, credential, body).await?;
        Ok(())
    }

    async fn execute<B>(
        &self,
        method: Method,
        segments: &[&str],
        credential: Option<&SecretString>,
        body: Option<&B>,
    ) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        let span = debug_span!(
            "api.request",
            http.method = %method,
            url.path = %url.path()
        );

        let mut request = self.http.request(method, url.clone());
        if let Some(credential) = credential {
            request = request.bearer_auth(credential.expose_secret());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .instrument(span)
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), path = url.path(), "api response");
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), path = url.path(), "api error response");
        Err(ApiError::Api {
            status: status.as_u16(),
            message: error::server_message(&text),
        })
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBase(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
