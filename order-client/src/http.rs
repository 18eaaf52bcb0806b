//! HTTP client for the order backend

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::Product;
use shared::order::{OrderUpdate, PersistedOrder};

/// HTTP client for the managed REST backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    api_key: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Attach bearer token and API key
    fn authorize(&self, mut request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(key) = &self.api_key {
            request = request.header("apikey", key);
        }
        request
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorize(self.client.get(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorize(self.client.patch(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return Err(status_error(status, text));
        }

        let body = response.bytes().await?;
        decode_body(&body)
    }

    // ========== Order API ==========

    /// Fetch the full menu
    pub async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        self.get("products").await
    }

    /// Fetch one stored order
    pub async fn fetch_order(&self, id: i64) -> ClientResult<PersistedOrder> {
        self.get(&format!("orders/{}", id)).await
    }

    /// Persist an edited order; returns the order as stored
    pub async fn update_order(&self, id: i64, update: &OrderUpdate) -> ClientResult<PersistedOrder> {
        self.patch(&format!("orders/{}", id), update).await
    }
}

/// Decode a JSON response body
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> ClientResult<T> {
    Ok(serde_json::from_slice(body)?)
}

/// Map a non-success status to a client error
fn status_error(status: StatusCode, text: String) -> ClientError {
    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::FORBIDDEN => ClientError::Forbidden(text),
        StatusCode::NOT_FOUND => ClientError::NotFound(text),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ClientError::Validation(text),
        _ => ClientError::Internal(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = HttpClient::new(&ClientConfig::new("http://api.test/rest/v1/")).unwrap();
        assert_eq!(client.url("orders/7"), "http://api.test/rest/v1/orders/7");
        assert_eq!(client.url("/products"), "http://api.test/rest/v1/products");
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, String::new()),
            ClientError::Unauthorized
        ));
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, "no order".into()),
            ClientError::NotFound(msg) if msg == "no order"
        ));
        assert!(matches!(
            status_error(StatusCode::UNPROCESSABLE_ENTITY, String::new()),
            ClientError::Validation(_)
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, String::new()),
            ClientError::Internal(_)
        ));
    }

    #[test]
    fn test_decode_body() {
        let order: PersistedOrder =
            decode_body(br#"{"id": 7, "items": [], "total_price": 12.5}"#).unwrap();
        assert_eq!(order.id, 7);

        let err = decode_body::<PersistedOrder>(b"<html>502</html>").unwrap_err();
        assert!(matches!(err, ClientError::Serialization(_)));
    }

    #[test]
    fn test_token_override() {
        let client = ClientConfig::default()
            .with_token("old")
            .build_http_client()
            .unwrap()
            .with_token("new");
        assert_eq!(client.token(), Some("new"));
    }
}
