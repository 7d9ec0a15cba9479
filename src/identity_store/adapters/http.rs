//! REST client for the identity store.

use crate::config::IdentityStoreSettings;
use crate::identity_store::{
    domain::{IdentityChangeRequest, IdentityChangeResponse, IdentitySearchResponse, RequestAuthor},
    ports::{IdentityService, IdentityStoreError, IdentityStoreResult},
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const HEADER_CLIENT_CODE: &str = "client_code";
const HEADER_AUTHOR_NAME: &str = "author_name";
const HEADER_AUTHOR_TYPE: &str = "author_type";

/// Identity-store client speaking the store's JSON REST API.
///
/// - `POST {base}/identity/import`
/// - `PUT {base}/identity/{customer_id}`
/// - `GET {base}/identity/{customer_id}`
///
/// Error statuses still carry a JSON status block, so any decodable body is
/// returned as a response regardless of the HTTP status code.
#[derive(Debug, Clone)]
pub struct HttpIdentityService {
    client: Client,
    base_url: Url,
}

impl HttpIdentityService {
    /// Builds a client from settings.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityStoreError::Configuration`] when the base URL is
    /// invalid, or [`IdentityStoreError::Transport`] when the HTTP client
    /// cannot be built.
    pub fn new(settings: &IdentityStoreSettings) -> IdentityStoreResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(IdentityStoreError::transport)?;
        Self::with_client(client, &settings.base_url)
    }

    /// Wraps an existing HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityStoreError::Configuration`] when `base_url` is not
    /// an absolute hierarchical URL.
    pub fn with_client(client: Client, base_url: &str) -> IdentityStoreResult<Self> {
        let parsed = Url::parse(base_url).map_err(|err| {
            IdentityStoreError::Configuration(format!("invalid base url '{base_url}': {err}"))
        })?;
        if parsed.cannot_be_a_base() {
            return Err(IdentityStoreError::Configuration(format!(
                "base url '{base_url}' cannot carry a path"
            )));
        }
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> IdentityStoreResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                IdentityStoreError::Configuration(format!(
                    "base url '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<T>(
        &self,
        builder: RequestBuilder,
        client_code: &str,
        author: &RequestAuthor,
    ) -> IdentityStoreResult<T>
    where
        T: DeserializeOwned,
    {
        let response = builder
            .header(HEADER_CLIENT_CODE, client_code)
            .header(HEADER_AUTHOR_NAME, author.name.as_str())
            .header(HEADER_AUTHOR_TYPE, author.author_type.as_str())
            .send()
            .await
            .map_err(IdentityStoreError::transport)?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(IdentityStoreError::transport)?;
        debug!(http_status = status, "identity store responded");

        serde_json::from_str::<T>(&body)
            .map_err(|_| IdentityStoreError::UnexpectedResponse { status, body })
    }
}

#[async_trait]
impl IdentityService for HttpIdentityService {
    async fn import_identity(
        &self,
        request: &IdentityChangeRequest,
        client_code: &str,
        author: &RequestAuthor,
    ) -> IdentityStoreResult<IdentityChangeResponse> {
        let url = self.endpoint(&["identity", "import"])?;
        debug!(%url, client_code, "importing identity");
        self.send(self.client.post(url).json(request), client_code, author)
            .await
    }

    async fn update_identity(
        &self,
        customer_id: &str,
        request: &IdentityChangeRequest,
        client_code: &str,
        author: &RequestAuthor,
    ) -> IdentityStoreResult<IdentityChangeResponse> {
        let url = self.endpoint(&["identity", customer_id])?;
        debug!(%url, client_code, "updating identity");
        self.send(self.client.put(url).json(request), client_code, author)
            .await
    }

    async fn get_identity(
        &self,
        customer_id: &str,
        client_code: &str,
        author: &RequestAuthor,
    ) -> IdentityStoreResult<IdentitySearchResponse> {
        let url = self.endpoint(&["identity", customer_id])?;
        debug!(%url, client_code, "fetching identity");
        self.send(self.client.get(url), client_code, author).await
    }
}
