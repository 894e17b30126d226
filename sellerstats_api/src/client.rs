//! HTTP client for the seller statistics API.

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    config::Config,
    payload::FetchPayload,
    resource::ResourceItem,
    types::{
        IncomesResponse, OrdersResponse, PaginatedResponse, SalesResponse, StocksResponse,
    },
    Error,
};

/// HTTP method for a fetch. The closed set the API accepts; `Get` is the
/// default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// HTTP client for the seller statistics API.
///
/// Holds the configuration and a single transport built at construction;
/// calls share no other state, so concurrent fetches are independent. Every
/// call resolves to exactly one `Ok` or one `Err` — transport faults, error
/// statuses, and undecodable bodies are all normalized into [`Error`].
pub struct Client {
    config: Config,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client from the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Creates a client pointing at a custom host with no API key. Used for
    /// testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(Config::new().with_host(base_url))
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches `target_url` and decodes the response body as `T`.
    ///
    /// A `Get` payload becomes query parameters; a `Post`/`Put` payload
    /// becomes a JSON body; `Delete` never carries a body. The request
    /// always sends `Content-Type: application/json`. Non-2xx statuses
    /// resolve to [`Error::Http`] with the body unread.
    pub async fn fetch<T>(
        &self,
        target_url: &str,
        method: Method,
        payload: Option<&FetchPayload>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let mut url = Url::parse(target_url).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::Transport(e.to_string())
        })?;
        if method == Method::Get {
            if let Some(payload) = payload {
                url = payload.add_to_url(&url);
            }
        }

        let mut request = self
            .http
            .request(method.into(), url)
            .header(CONTENT_TYPE, "application/json");
        if !matches!(method, Method::Get | Method::Delete) {
            if let Some(payload) = payload {
                request = request.json(payload);
            }
        }

        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to fetch resource: {}", e);
            Error::Transport(e.to_string())
        })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!("Request failed with status {}", status);
            return Err(Error::Http {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e.to_string())
        })?;

        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decode(e.to_string())
        })
    }

    /// Fetches one page of the collection whose item shape is `T`, resolving
    /// the endpoint URL from the configured host.
    pub async fn get_resource<T>(
        &self,
        payload: &FetchPayload,
    ) -> Result<PaginatedResponse<T>, Error>
    where
        T: ResourceItem,
    {
        let url = self
            .config
            .endpoint_url(T::RESOURCE)
            .ok_or(Error::MissingHost)?;
        self.fetch(&url, Method::Get, Some(payload)).await
    }

    /// Fetches a page of warehouse income records.
    pub async fn get_incomes(&self, payload: &FetchPayload) -> Result<IncomesResponse, Error> {
        self.get_resource(payload).await
    }

    /// Fetches a page of order records.
    pub async fn get_orders(&self, payload: &FetchPayload) -> Result<OrdersResponse, Error> {
        self.get_resource(payload).await
    }

    /// Fetches a page of sale records.
    pub async fn get_sales(&self, payload: &FetchPayload) -> Result<SalesResponse, Error> {
        self.get_resource(payload).await
    }

    /// Fetches a page of stock level records.
    pub async fn get_stocks(&self, payload: &FetchPayload) -> Result<StocksResponse, Error> {
        self.get_resource(payload).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
